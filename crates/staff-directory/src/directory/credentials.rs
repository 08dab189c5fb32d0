use rand::seq::SliceRandom;
use rand::Rng;

use super::domain::{CredentialBundle, StaffRecord};

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
/// Fixed symbol set; kept small so generated passwords stay typeable.
pub const SYMBOLS: &[u8] = b"!@#$%^&*";

pub const PASSWORD_LENGTH: usize = 12;

/// Generate a 12-character password containing at least one character from
/// each of the four classes. One character per class is drawn first, the
/// remaining eight come from the union alphabet, and the whole sequence is
/// shuffled so class positions carry no information.
///
/// Uses the thread-local CSPRNG; generated passwords are suitable for
/// first-login credentials that are rotated by the account owner.
pub fn generate_password() -> String {
    let mut rng = rand::thread_rng();
    let union: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat();

    let mut password = Vec::with_capacity(PASSWORD_LENGTH);
    for class in [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS] {
        password.push(class[rng.gen_range(0..class.len())]);
    }
    while password.len() < PASSWORD_LENGTH {
        password.push(union[rng.gen_range(0..union.len())]);
    }
    password.shuffle(&mut rng);

    // The alphabet is pure ASCII, so the bytes round-trip losslessly.
    String::from_utf8_lossy(&password).into_owned()
}

/// One-time bundle for a brand new account.
pub fn bundle_for_new_hire(
    full_name: &str,
    email: &str,
    password: &str,
    role: super::domain::Role,
    department: &str,
) -> CredentialBundle {
    CredentialBundle {
        full_name: full_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role,
        department: department.to_string(),
    }
}

/// One-time bundle for an explicit password reset on an existing member.
/// The fresh password is revealed here and nowhere else.
pub fn bundle_for_reset(record: &StaffRecord) -> CredentialBundle {
    CredentialBundle {
        full_name: record.name.clone(),
        email: record.email.clone(),
        password: generate_password(),
        role: record.role,
        department: record.department.label().to_string(),
    }
}
