//! Argon2id password hashes stored as PHC strings.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;

use crate::server::error::Error;

const SALT_LEN: usize = 16;

pub fn hash_password(password: &str) -> Result<String, Error> {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill(&mut salt);

    let salt = SaltString::encode_b64(&salt)
        .map_err(|e| Error::InternalError(format!("Failed to encode password salt: {}", e)))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::InternalError(format!("Failed to hash password: {}", e)))
}

/// Returns false for malformed stored hashes rather than erroring.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Ok(hash) = PasswordHash::new(stored) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password() {
        let stored = hash_password("correct horse").unwrap();

        assert!(stored.starts_with("$argon2id$"));
        assert!(verify_password("correct horse", &stored));
        assert!(!verify_password("Correct horse", &stored));
    }

    #[test]
    fn salts_each_hash() {
        assert_ne!(
            hash_password("pitchpass").unwrap(),
            hash_password("pitchpass").unwrap()
        );
    }

    #[test]
    fn rejects_malformed_hash() {
        assert!(!verify_password("pitchpass", "no-separator"));
        assert!(!verify_password("pitchpass", "%%%$abc"));
    }

    #[test]
    fn rejects_legacy_sha256_hash() {
        assert!(!verify_password(
            "pitchpass",
            "c2FsdHNhbHRzYWx0c2FsdA==$n4bQgYhMfWWaL+qgxVrQFaO/TxsrC4Is0V1sFbDwCgg="
        ));
    }
}
