use crate::directory::domain::{CredentialBundle, Role};
use crate::directory::sharing::{
    credentials_text, download_file_name, handoff_for, mailto_url, whatsapp_url, ShareChannel,
};

fn bundle() -> CredentialBundle {
    CredentialBundle {
        full_name: "Sarah Kimani".to_string(),
        email: "sarah.server@restaurant.com".to_string(),
        password: "Xy7$moonLit9".to_string(),
        role: Role::Server,
        department: "service".to_string(),
    }
}

#[test]
fn credentials_text_carries_every_bundle_field() {
    let text = credentials_text(&bundle());

    assert!(text.starts_with("Restaurant Login Credentials"));
    assert!(text.contains("Staff Member: Sarah Kimani"));
    assert!(text.contains("Username: sarah.server@restaurant.com"));
    assert!(text.contains("Password: Xy7$moonLit9"));
    assert!(text.contains("Role: server"));
    assert!(text.contains("Department: service"));
    assert!(text.contains("Change your password after first login"));
}

#[test]
fn download_file_name_joins_name_parts_with_underscores() {
    assert_eq!(
        download_file_name("Sarah Kimani"),
        "Sarah_Kimani_credentials.txt"
    );
    assert_eq!(
        download_file_name("  Mary   Jane  Mwalimu "),
        "Mary_Jane_Mwalimu_credentials.txt"
    );
}

#[test]
fn mailto_url_targets_the_member_and_encodes_the_body() {
    let url = mailto_url(&bundle());

    assert!(url.starts_with("mailto:sarah.server@restaurant.com?subject="));
    assert!(url.contains("Your%20Restaurant%20Login%20Credentials"));
    assert!(url.contains("&body="));
    // The raw password contains '$', which must arrive percent-encoded.
    assert!(url.contains("Xy7%24moonLit9"));
    assert!(!url.contains('\n'));
}

#[test]
fn whatsapp_url_prefills_the_encoded_text() {
    let url = whatsapp_url(&bundle());

    assert!(url.starts_with("https://wa.me/?text="));
    assert!(url.contains("Sarah%20Kimani"));
    assert!(!url.contains(' '));
}

#[test]
fn handoff_destination_depends_on_the_channel() {
    let bundle = bundle();
    let body = credentials_text(&bundle);

    let clipboard = handoff_for(&bundle, ShareChannel::Clipboard);
    assert_eq!(clipboard.destination, "");
    assert_eq!(clipboard.body, body);

    let download = handoff_for(&bundle, ShareChannel::Download);
    assert_eq!(download.destination, "Sarah_Kimani_credentials.txt");
    assert_eq!(download.body, body);

    let email = handoff_for(&bundle, ShareChannel::Email);
    assert_eq!(email.destination, mailto_url(&bundle));

    let whatsapp = handoff_for(&bundle, ShareChannel::WhatsApp);
    assert_eq!(whatsapp.destination, whatsapp_url(&bundle));
}
