use crate::infra::{InMemorySnapshot, LoggingPublisher};
use chrono::{Local, NaiveDate};
use clap::Args;
use staff_directory::directory::domain::HireRole;
use staff_directory::directory::query::{SortKey, SortOrder, StaffQuery};
use staff_directory::directory::service::{DeleteConfirmation, StaffDirectoryService};
use staff_directory::directory::sharing::{
    credentials_text, download_file_name, mailto_url, whatsapp_url, ShareChannel,
};
use staff_directory::directory::validation::HireForm;
use staff_directory::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Hire date for the demo chef (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) hire_date: Option<NaiveDate>,
    /// Keep the demo hire on the roster instead of offboarding them at the end.
    #[arg(long)]
    pub(crate) keep_hire: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        hire_date,
        keep_hire,
    } = args;
    let hire_date = hire_date.unwrap_or_else(|| Local::now().date_naive());

    println!("Staff directory demo (in-memory roster, nothing persisted)");

    let service = StaffDirectoryService::open(InMemorySnapshot::default(), Arc::new(LoggingPublisher))
        .map_err(AppError::from)?;

    let summary = service.summary();
    println!("\nSeed roster");
    println!(
        "- {} members | {} active | {} on leave",
        summary.total, summary.active, summary.on_leave
    );
    println!(
        "- Monthly payroll TZS {} | average rating {:.1}",
        summary.total_monthly_payroll, summary.average_rating
    );

    println!("\nHighest paid first");
    let by_salary = service.query(&StaffQuery {
        sort_key: SortKey::Salary,
        sort_order: SortOrder::Desc,
        ..StaffQuery::default()
    });
    for member in &by_salary {
        println!(
            "- {} | {} | {} | TZS {}",
            member.name,
            member.position,
            member.department.label(),
            member.salary
        );
    }

    println!("\nSearch: \"kimani\"");
    let found = service.query(&StaffQuery {
        search: "kimani".to_string(),
        ..StaffQuery::default()
    });
    for member in &found {
        println!("- {} <{}>", member.name, member.email);
    }

    println!("\nHiring a demo chef (hire date {hire_date})");
    let form = HireForm {
        first_name: "Neema".to_string(),
        last_name: "Bakari".to_string(),
        email: "neema.bakari@restaurant.com".to_string(),
        phone: "+255712345678".to_string(),
        role: HireRole::Chef,
        department: "Hot Kitchen".to_string(),
        hire_date: hire_date.format("%Y-%m-%d").to_string(),
        salary: Some("950000".to_string()),
        address: Some("12 Baobab Rd, Dar es Salaam".to_string()),
        emergency_contact: Some("Amani Bakari".to_string()),
        password: staff_directory::directory::credentials::generate_password(),
    };

    let (record, bundle) = match service.hire(form) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("  Hire rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "- Created #{} {} as {} ({})",
        record.id,
        record.name,
        record.position,
        record.department.label()
    );

    println!("\nCredential handoff");
    println!("{}", credentials_text(&bundle));
    println!("\nShare targets");
    println!("- download: {}", download_file_name(&bundle.full_name));
    println!("- mailto:   {}", mailto_url(&bundle));
    println!("- whatsapp: {}", whatsapp_url(&bundle));
    service.share_credentials(&bundle, ShareChannel::Clipboard);

    println!("\nResetting credentials for the demo hire");
    match service.regenerate_credentials(record.id) {
        Ok(reset) => println!("- New password issued ({} characters)", reset.password.len()),
        Err(err) => println!("- Reset unavailable: {err}"),
    }

    if keep_hire {
        println!("\nKeeping {} on the roster", record.name);
        return Ok(());
    }

    println!("\nOffboarding the demo hire");
    let removed = service
        .remove(record.id, DeleteConfirmation::Confirmed)
        .map_err(AppError::from)?;
    println!(
        "- Removed #{} {}; roster back to {} members",
        removed.id,
        removed.name,
        service.list().len()
    );

    Ok(())
}
