#[cfg(test)]
use mockall::automock;

use crate::domain::{error::DomainError, models::credential::EncodedPassword};

/// Service for hashing passwords before they are stored
#[cfg_attr(test, automock)]
pub trait PasswordEncoder: Send + Sync {
    /// Encode a plain text password into its stored form
    fn encode(&self, raw_password: &str) -> Result<EncodedPassword, DomainError>;
}
