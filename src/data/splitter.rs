// ============================================================
// Train/Validation Splitter
// ============================================================
// Shuffles document references and splits them into a training
// and a validation set.
//
// The shuffle is seeded (StdRng::seed_from_u64) so a split is
// reproducible across runs: the same corpus, fraction, and seed
// always produce the same two sets, which keeps exported splits
// and later re-exports consistent.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle `refs` with the given seed and split into
/// (train, validation) by `train_fraction` (e.g. 0.9 = 90% train).
pub fn split_refs<T>(mut refs: Vec<T>, train_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);
    refs.shuffle(&mut rng);

    let total = refs.len();
    let split_at = ((total as f64) * train_fraction).round() as usize;
    let split_at = split_at.min(total);

    let val = refs.split_off(split_at);

    tracing::debug!(
        "Split {} document refs: {} train, {} validation (seed {})",
        total,
        refs.len(),
        val.len(),
        seed,
    );

    (refs, val)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, val) = split_refs(items, 0.9, 42);
        assert_eq!(train.len(), 90);
        assert_eq!(val.len(), 10);
    }

    #[test]
    fn test_no_items_lost() {
        let items: Vec<usize> = (0..37).collect();
        let (train, val) = split_refs(items, 0.7, 7);
        let mut all: Vec<usize> = train.into_iter().chain(val).collect();
        all.sort_unstable();
        assert_eq!(all, (0..37).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let a = split_refs((0..50).collect::<Vec<_>>(), 0.8, 123);
        let b = split_refs((0..50).collect::<Vec<_>>(), 0.8, 123);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_usually_differs() {
        let (a, _) = split_refs((0..50).collect::<Vec<_>>(), 0.8, 1);
        let (b, _) = split_refs((0..50).collect::<Vec<_>>(), 0.8, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_input() {
        let (train, val) = split_refs(Vec::<usize>::new(), 0.8, 0);
        assert!(train.is_empty());
        assert!(val.is_empty());
    }

    #[test]
    fn test_full_fraction_puts_everything_in_train() {
        let (train, val) = split_refs((0..10).collect::<Vec<_>>(), 1.0, 0);
        assert_eq!(train.len(), 10);
        assert!(val.is_empty());
    }
}
