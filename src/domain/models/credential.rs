use std::fmt;

/// Value object holding the output of a [`PasswordEncoder`].
///
/// Only an encoder produces one of these, so a [`User`] can never carry a raw secret.
///
/// [`PasswordEncoder`]: crate::domain::services::password_service::PasswordEncoder
/// [`User`]: crate::domain::models::user::User
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedPassword(String);

impl EncodedPassword {
    /// Wrap a string that is already the result of encoding
    pub fn new(encoded: String) -> Self {
        Self(encoded)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// hash stays out of logs
impl fmt::Debug for EncodedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EncodedPassword").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_hash() {
        let encoded = EncodedPassword::new("$argon2id$secret".to_string());
        let debug = format!("{:?}", encoded);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn as_str_returns_the_encoded_value() {
        let encoded = EncodedPassword::new("encodedPassword".to_string());
        assert_eq!(encoded.as_str(), "encodedPassword");
    }
}
