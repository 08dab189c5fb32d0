use serde::{Deserialize, Serialize};
use urlencoding::encode;

use super::domain::CredentialBundle;

/// Channels a credential bundle can be handed off through. Each is
/// fire-and-forget: the engine builds the payload, the collaborator owns
/// delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareChannel {
    Clipboard,
    Download,
    Email,
    WhatsApp,
}

/// Payload prepared for one sharing channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialHandoff {
    pub channel: ShareChannel,
    /// File name, link target, or recipient, depending on the channel.
    pub destination: String,
    pub body: String,
}

/// Delivery collaborator (clipboard bridge, file writer, link opener).
pub trait CredentialPublisher: Send + Sync {
    fn publish(&self, handoff: CredentialHandoff) -> Result<(), ShareError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("share transport unavailable: {0}")]
    Transport(String),
}

/// Plain-text block shared with the new staff member alongside their
/// first-login instructions.
pub fn credentials_text(bundle: &CredentialBundle) -> String {
    format!(
        "Restaurant Login Credentials\n\
         \n\
         Staff Member: {name}\n\
         Username: {email}\n\
         Password: {password}\n\
         Role: {role}\n\
         Department: {department}\n\
         \n\
         Login Instructions:\n\
         1. Go to the restaurant management system\n\
         2. Use your email as username\n\
         3. Enter the provided password\n\
         4. Change your password after first login\n\
         \n\
         Keep these credentials secure and do not share them with unauthorized persons.",
        name = bundle.full_name,
        email = bundle.email,
        password = bundle.password,
        role = bundle.role.label(),
        department = bundle.department,
    )
}

/// `<FullName with spaces replaced by underscores>_credentials.txt`
pub fn download_file_name(full_name: &str) -> String {
    let joined = full_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{joined}_credentials.txt")
}

/// Mail-client link with prefilled subject and body.
pub fn mailto_url(bundle: &CredentialBundle) -> String {
    let subject = encode("Your Restaurant Login Credentials");
    let body = credentials_text(bundle);
    format!(
        "mailto:{}?subject={}&body={}",
        bundle.email,
        subject,
        encode(&body)
    )
}

/// Web messaging link with the prefilled credentials text.
pub fn whatsapp_url(bundle: &CredentialBundle) -> String {
    let body = credentials_text(bundle);
    format!("https://wa.me/?text={}", encode(&body))
}

/// Build the ready-to-deliver payload for a channel.
pub fn handoff_for(bundle: &CredentialBundle, channel: ShareChannel) -> CredentialHandoff {
    let body = credentials_text(bundle);
    let destination = match channel {
        ShareChannel::Clipboard => String::new(),
        ShareChannel::Download => download_file_name(&bundle.full_name),
        ShareChannel::Email => mailto_url(bundle),
        ShareChannel::WhatsApp => whatsapp_url(bundle),
    };

    CredentialHandoff {
        channel,
        destination,
        body,
    }
}
