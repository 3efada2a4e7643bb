//! Credential hashing, the one external capability the tracking core
//! depends on: `hash(password)` and `verify(password, hash)`.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a plaintext password into a PHC-format string.
pub fn hash(plaintext: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)?
        .to_string())
}

/// Check a plaintext password against a stored hash. Malformed hashes
/// verify as false rather than erroring.
pub fn verify(plaintext: &str, hashed: &str) -> bool {
    PasswordHash::new(hashed)
        .map(|parsed| {
            Argon2::default()
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hashed = hash("passwordX").unwrap();
        assert!(verify("passwordX", &hashed));
        assert!(!verify("passwordY", &hashed));
    }

    #[test]
    fn malformed_hash_verifies_false() {
        assert!(!verify("passwordX", "not-a-phc-string"));
    }
}
