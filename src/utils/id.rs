//! Node identifier generation.

use rand::Rng;

/// Characters used in generated identifiers
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default identifier length
pub const DEFAULT_ID_LENGTH: usize = 8;

/// Generate a random alphanumeric identifier of `length` characters.
///
/// Uniqueness is not guaranteed; callers check against existing ids.
pub fn generate_node_id<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_length_and_charset() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in [1, DEFAULT_ID_LENGTH, 32] {
            let id = generate_node_id(&mut rng, length);
            assert_eq!(id.len(), length);
            assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = generate_node_id(&mut StdRng::seed_from_u64(42), DEFAULT_ID_LENGTH);
        let b = generate_node_id(&mut StdRng::seed_from_u64(42), DEFAULT_ID_LENGTH);
        assert_eq!(a, b);
    }
}
