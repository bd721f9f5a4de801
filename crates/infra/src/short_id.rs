//! Short share-id generation
//!
//! Nanoid-style tokens over a 64-character URL-safe alphabet. 21 characters
//! of this alphabet carry about 126 bits, so collisions are practically
//! impossible at the volumes a proposal store ever sees; the repository
//! still retries on the unique constraint for shorter configured lengths.

use muster_domain::constants::SHORT_ID_ALPHABET;
use rand::Rng;

/// Generate a random share id of `length` characters.
pub fn generate_short_id(length: usize) -> String {
    let alphabet: Vec<char> = SHORT_ID_ALPHABET.chars().collect();
    let mut rng = rand::thread_rng();
    (0..length).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect()
}

#[cfg(test)]
mod tests {
    use muster_domain::ShortId;

    use super::*;

    #[test]
    fn generates_requested_length() {
        assert_eq!(generate_short_id(21).len(), 21);
        assert_eq!(generate_short_id(8).len(), 8);
        assert_eq!(generate_short_id(0).len(), 0);
    }

    #[test]
    fn output_stays_within_the_alphabet() {
        for _ in 0..50 {
            let id = generate_short_id(21);
            assert!(ShortId::is_valid_format(&id), "unexpected character in {id:?}");
        }
    }

    #[test]
    fn consecutive_ids_differ() {
        let first = generate_short_id(21);
        let second = generate_short_id(21);
        assert_ne!(first, second);
    }
}
