// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::models::GenerationRequest;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const PUNCTUATION: &[u8] = br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Characters eligible for sampling. Lowercase letters are always present,
/// so the alphabet is never empty.
pub fn alphabet(request: &GenerationRequest) -> Vec<u8> {
    let mut chars = LOWERCASE.to_vec();

    if request.include_uppercase {
        chars.extend_from_slice(UPPERCASE);
    }
    if request.include_digits {
        chars.extend_from_slice(DIGITS);
    }
    if request.include_special {
        chars.extend_from_slice(PUNCTUATION);
    }

    chars
}

// Generate a random password
pub fn generate_password(request: &GenerationRequest) -> String {
    generate_with_rng(request, &mut rand::thread_rng())
}

/// Independent uniform draws with replacement. No enabled class is
/// guaranteed to appear.
pub fn generate_with_rng<R: Rng + ?Sized>(request: &GenerationRequest, rng: &mut R) -> String {
    let chars = alphabet(request);
    let dist = Uniform::from(0..chars.len());

    (0..request.length)
        .map(|_| chars[dist.sample(rng)] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_toggles() -> Vec<(bool, bool, bool)> {
        let mut combos = Vec::new();
        for upper in [false, true] {
            for digits in [false, true] {
                for special in [false, true] {
                    combos.push((upper, digits, special));
                }
            }
        }
        combos
    }

    #[test]
    fn punctuation_is_the_ascii_set() {
        assert_eq!(PUNCTUATION.len(), 32);
        assert!(PUNCTUATION.iter().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn alphabet_is_composed_in_fixed_order() {
        let request = GenerationRequest::new(12, true, true, true).unwrap();
        let chars = alphabet(&request);

        assert_eq!(chars.len(), 26 + 26 + 10 + 32);
        assert_eq!(&chars[..26], LOWERCASE);
        assert_eq!(&chars[26..52], UPPERCASE);
        assert_eq!(&chars[52..62], DIGITS);
        assert_eq!(&chars[62..], PUNCTUATION);
    }

    #[test]
    fn alphabet_falls_back_to_lowercase() {
        let request = GenerationRequest::new(12, false, false, false).unwrap();
        assert_eq!(alphabet(&request), LOWERCASE.to_vec());
    }

    #[test]
    fn output_has_exact_length_and_stays_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);

        for length in 4..=50 {
            for (upper, digits, special) in all_toggles() {
                let request = GenerationRequest::new(length, upper, digits, special).unwrap();
                let allowed = alphabet(&request);
                let password = generate_with_rng(&request, &mut rng);

                assert_eq!(password.chars().count(), length as usize);
                assert!(password.bytes().all(|b| allowed.contains(&b)));
            }
        }
    }

    #[test]
    fn no_toggles_yields_lowercase_only() {
        let request = GenerationRequest::new(50, false, false, false).unwrap();
        for _ in 0..20 {
            let password = generate_password(&request);
            assert!(password.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn same_seed_same_password() {
        let request = GenerationRequest::default();
        let a = generate_with_rng(&request, &mut StdRng::seed_from_u64(42));
        let b = generate_with_rng(&request, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
