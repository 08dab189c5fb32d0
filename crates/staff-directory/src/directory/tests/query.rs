use crate::directory::domain::{Department, StaffStatus};
use crate::directory::query::{
    run_query, summarize, DepartmentFilter, SortKey, SortOrder, StaffQuery, StatusFilter,
};
use crate::directory::seed::seed_roster;

#[test]
fn default_query_returns_everyone_sorted_by_name() {
    let roster = seed_roster();
    let result = run_query(&roster, &StaffQuery::default());

    let names: Vec<&str> = result.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(
        names,
        ["Alice Mwangi", "John Mwalimu", "Michael Juma", "Sarah Kimani"]
    );
}

#[test]
fn search_is_case_insensitive_over_name_email_and_position() {
    let roster = seed_roster();

    let by_name = run_query(
        &roster,
        &StaffQuery {
            search: "KIMANI".to_string(),
            ..StaffQuery::default()
        },
    );
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Sarah Kimani");

    let by_email = run_query(
        &roster,
        &StaffQuery {
            search: "ALICE.cashier".to_string(),
            ..StaffQuery::default()
        },
    );
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].name, "Alice Mwangi");

    let by_position = run_query(
        &roster,
        &StaffQuery {
            search: "chef".to_string(),
            ..StaffQuery::default()
        },
    );
    assert!(by_position.iter().any(|record| record.name == "John Mwalimu"));
}

#[test]
fn search_does_not_match_phone_numbers() {
    let roster = seed_roster();
    let result = run_query(
        &roster,
        &StaffQuery {
            search: roster[0].phone.clone(),
            ..StaffQuery::default()
        },
    );
    assert!(result.is_empty());
}

#[test]
fn department_filter_narrows_and_unknown_value_widens() {
    let roster = seed_roster();

    let kitchen = run_query(
        &roster,
        &StaffQuery {
            department: DepartmentFilter::parse("kitchen"),
            ..StaffQuery::default()
        },
    );
    assert!(kitchen
        .iter()
        .all(|record| record.department == Department::Kitchen));
    assert!(!kitchen.is_empty());

    let widened = run_query(
        &roster,
        &StaffQuery {
            department: DepartmentFilter::parse("all"),
            ..StaffQuery::default()
        },
    );
    assert_eq!(widened.len(), roster.len());

    assert_eq!(DepartmentFilter::parse("garage"), DepartmentFilter::All);
}

#[test]
fn status_filter_narrows_and_unknown_value_widens() {
    let roster = seed_roster();

    let on_leave = run_query(
        &roster,
        &StaffQuery {
            status: StatusFilter::parse("on_leave"),
            ..StaffQuery::default()
        },
    );
    assert_eq!(on_leave.len(), 1);
    assert_eq!(on_leave[0].name, "Alice Mwangi");

    assert_eq!(StatusFilter::parse("retired"), StatusFilter::All);
}

#[test]
fn salary_descending_orders_the_seed_roster() {
    let roster = seed_roster();
    let result = run_query(
        &roster,
        &StaffQuery {
            sort_key: SortKey::Salary,
            sort_order: SortOrder::Desc,
            ..StaffQuery::default()
        },
    );

    let salaries: Vec<u64> = result.iter().map(|record| record.salary).collect();
    assert_eq!(salaries, [1_800_000, 1_200_000, 800_000, 600_000]);
}

#[test]
fn hire_date_ascending_orders_oldest_first() {
    let roster = seed_roster();
    let result = run_query(
        &roster,
        &StaffQuery {
            sort_key: SortKey::HireDate,
            sort_order: SortOrder::Asc,
            ..StaffQuery::default()
        },
    );

    let dates: Vec<_> = result.iter().map(|record| record.hire_date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[test]
fn query_is_deterministic_and_leaves_input_untouched() {
    let roster = seed_roster();
    let query = StaffQuery {
        search: "restaurant".to_string(),
        sort_key: SortKey::Performance,
        sort_order: SortOrder::Desc,
        ..StaffQuery::default()
    };

    let first = run_query(&roster, &query);
    let second = run_query(&roster, &query);
    assert_eq!(first, second);
    assert_eq!(roster, seed_roster());
}

#[test]
fn sort_key_and_order_parse_with_name_asc_fallback() {
    assert_eq!(SortKey::parse("salary"), SortKey::Salary);
    assert_eq!(SortKey::parse("HIRE_DATE"), SortKey::HireDate);
    assert_eq!(SortKey::parse("shoe_size"), SortKey::Name);
    assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
    assert_eq!(SortOrder::parse("sideways"), SortOrder::Asc);
}

#[test]
fn summary_counts_the_seed_roster() {
    let summary = summarize(&seed_roster());

    assert_eq!(summary.total, 4);
    assert_eq!(summary.active, 3);
    assert_eq!(summary.on_leave, 1);
    assert_eq!(summary.kitchen, 1);
    assert_eq!(summary.service, 2);
    assert_eq!(summary.management, 1);
    assert_eq!(summary.admin, 0);
    assert_eq!(summary.total_monthly_payroll, 4_400_000);
}

#[test]
fn summary_of_empty_roster_reports_zero_average() {
    let summary = summarize(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.total_monthly_payroll, 0);
    assert_eq!(summary.average_rating, 0.0);
}

#[test]
fn filters_and_search_compose() {
    let roster = seed_roster();
    let result = run_query(
        &roster,
        &StaffQuery {
            search: "restaurant.com".to_string(),
            status: StatusFilter::Only(StaffStatus::Active),
            department: DepartmentFilter::Only(Department::Service),
            ..StaffQuery::default()
        },
    );

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Sarah Kimani");
}
