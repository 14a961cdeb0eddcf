//! Pure helpers producing values that fixtures store.
//!
//! Password hashes are Argon2id PHC strings like the server stores, so fixture users can sign in
//! through the real login path.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};

/// Password every fixture user signs in with
pub const PASSWORD: &str = "pitchpass";

pub fn password_hash(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    let salt = SaltString::encode_b64(&salt).unwrap();

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

/// Eligibility snapshot with every visa scored at `score`
pub fn eligibility_snapshot(score: i16) -> String {
    serde_json::json!({
        "schengen": score,
        "uk_gbe": score,
        "us_p1": score,
        "canada_work_permit": score,
        "uae_residence": score,
        "japan_specified_skilled": score,
    })
    .to_string()
}
