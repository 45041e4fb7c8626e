use rand::Rng;
use sha2::{Digest, Sha256};

/// Number of random bytes in a salt before hex encoding
pub const SALT_BYTES: usize = 16;

/// Draw a fresh salt and return it hex encoded (32 lowercase chars)
pub fn generate_salt<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; SALT_BYTES];
    rng.fill(&mut bytes[..]);
    hex::encode(bytes)
}

/// SHA-256 over the text `password` followed directly by `salt`, hex encoded.
///
/// The salt is hashed as its hex text, not as raw bytes.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Build the stored `<salt>:<digest>` form with a newly drawn salt
pub fn stored_password_hash<R: Rng + ?Sized>(rng: &mut R, password: &str) -> String {
    let salt = generate_salt(rng);
    let digest = hash_password(password, &salt);
    format!("{}:{}", salt, digest)
}

/// Check a plaintext password against a stored `<salt>:<digest>` value
pub fn verify_password(password: &str, stored: &str) -> bool {
    let parts: Vec<&str> = stored.split(':').collect();
    if parts.len() != 2 {
        return false;
    }

    let (salt, digest) = (parts[0], parts[1]);
    hash_password(password, salt) == digest.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_known_digest() {
        // sha256("password" + "00112233445566778899aabbccddeeff")
        let digest = hash_password("password", "00112233445566778899aabbccddeeff");
        assert_eq!(
            digest,
            "14246f6b18f49630a1951b23d76ea367dfe4a665b78eacababc77b64f1e55d7e"
        );
    }

    #[test]
    fn test_empty_input_digest() {
        assert_eq!(
            hash_password("", ""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_salt_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let salt = generate_salt(&mut rng);
        assert_eq!(salt.len(), SALT_BYTES * 2);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_salts_differ_between_draws() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = generate_salt(&mut rng);
        let b = generate_salt(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_rejects_malformed() {
        assert!(!verify_password("password", "no-separator"));
        assert!(!verify_password("password", "a:b:c"));
        assert!(!verify_password("password", ""));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let mut rng = StdRng::seed_from_u64(1);
        let stored = stored_password_hash(&mut rng, "password");
        assert!(!verify_password("Password", &stored));
    }

    proptest! {
        #[test]
        fn prop_stored_hash_verifies(password in "\\PC{0,32}", seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let stored = stored_password_hash(&mut rng, &password);

            let parts: Vec<&str> = stored.split(':').collect();
            prop_assert_eq!(parts.len(), 2);
            prop_assert_eq!(parts[1], hash_password(&password, parts[0]));
            prop_assert!(verify_password(&password, &stored));
        }
    }
}
