//! Cosmetic content choice: pick uniformly from a fixed list.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Returns `None` only for an empty slice.
pub fn pick<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn empty_slice_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick::<u8, _>(&[], &mut rng).is_none());
    }

    #[test]
    fn every_entry_is_reachable() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = ["Apple", "Dog", "Car"];
        let seen: HashSet<_> = (0..200).filter_map(|_| pick(&items, &mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }
}
