use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};

use crate::domain::{
    error::DomainError,
    models::credential::EncodedPassword,
    services::password_service::PasswordEncoder,
};

/// Argon2id encoder producing PHC strings with a fresh salt per call.
#[derive(Clone)]
pub struct Argon2PasswordEncoder;

impl Argon2PasswordEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2PasswordEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordEncoder for Argon2PasswordEncoder {
    fn encode(&self, raw_password: &str) -> Result<EncodedPassword, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(raw_password.as_bytes(), &salt)
            .map_err(|e| DomainError::PasswordEncoding(e.to_string()))?
            .to_string();

        Ok(EncodedPassword::new(hash))
    }
}

#[cfg(test)]
mod tests {
    use argon2::{PasswordHash, PasswordVerifier};

    use super::*;

    fn verifies(raw_password: &str, encoded: &EncodedPassword) -> bool {
        let parsed = PasswordHash::new(encoded.as_str()).expect("encoder must emit a PHC string");
        Argon2::default()
            .verify_password(raw_password.as_bytes(), &parsed)
            .is_ok()
    }

    #[test]
    fn encoded_password_differs_from_raw_and_verifies() {
        let encoder = Argon2PasswordEncoder::new();
        let encoded = encoder.encode("password").unwrap();

        assert_ne!(encoded.as_str(), "password");
        assert!(encoded.as_str().starts_with("$argon2id$"));
        assert!(verifies("password", &encoded));
        assert!(!verifies("wrong-password", &encoded));
    }

    #[test]
    fn same_password_gets_a_new_salt_each_time() {
        let encoder = Argon2PasswordEncoder::new();
        let first = encoder.encode("password").unwrap();
        let second = encoder.encode("password").unwrap();

        assert_ne!(first, second);
        assert!(verifies("password", &first));
        assert!(verifies("password", &second));
    }

    #[test]
    fn short_empty_and_non_ascii_passwords_are_encoded() {
        let encoder = Argon2PasswordEncoder::new();

        for raw in ["", "abc", "pässwörd"] {
            let encoded = encoder.encode(raw).unwrap();
            assert!(verifies(raw, &encoded));
        }
    }
}
