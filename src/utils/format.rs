// src/utils/format.rs

// Generate a random signing secret
pub fn generate_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    use rand::{thread_rng, RngCore};

    let mut secret = [0u8; 32];
    thread_rng().fill_bytes(&mut secret);

    general_purpose::STANDARD.encode(secret)
}

// Mask a password for display, keeping only its length visible
pub fn mask(password: &str) -> String {
    "*".repeat(password.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_are_random_and_encoded() {
        let a = generate_secret();
        let b = generate_secret();
        assert_ne!(a, b);
        assert_eq!(a.len(), 44);
    }

    #[test]
    fn mask_counts_characters() {
        assert_eq!(mask("pässword"), "********");
        assert_eq!(mask(""), "");
    }
}
