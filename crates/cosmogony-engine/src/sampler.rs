//! Weighted priors as noise thresholds.
//!
//! A parent fate's child weights are the *marginal* distribution of fates
//! across its tile. To paint spatially-coherent children, the weights are
//! converted to a partition of `[0, 1]` and a continuous noise value picks
//! the band. The partition guarantees exact marginals; the noise field
//! controls where each fate clusters.
//!
//! Weights are sorted descending before accumulation, so the most probable
//! outcome owns the low end of the noise range — combined with smooth
//! noise this yields larger contiguous regions for common fates, trading
//! exact spatial statistics for plausible clustering.

use std::cmp::Ordering;

/// A deterministic partition of the unit interval over categorical keys.
///
/// `thresholds` is parallel to `keys`, non-decreasing, and ends at 1.0
/// (within floating tolerance).
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds<K> {
    pub keys: Vec<K>,
    pub thresholds: Vec<f64>,
}

impl<K: Copy> Thresholds<K> {
    /// Build a partition from relative weights.
    ///
    /// Entries sort descending by weight (stable, so table order breaks
    /// ties deterministically) and normalize by total mass. Returns `None`
    /// for an empty map or one with no positive mass — the caller decides
    /// what the empty prior degrades to.
    pub fn from_weights<I>(weights: I) -> Option<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut entries: Vec<(K, f64)> = weights.into_iter().collect();
        if entries.is_empty() {
            return None;
        }

        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let total: f64 = entries.iter().map(|(_, weight)| weight).sum();
        if total <= 0.0 {
            return None;
        }

        let mut cumulative = 0.0;
        let mut keys = Vec::with_capacity(entries.len());
        let mut thresholds = Vec::with_capacity(entries.len());
        for (key, weight) in entries {
            cumulative += weight / total;
            keys.push(key);
            thresholds.push(cumulative);
        }

        Some(Self { keys, thresholds })
    }

    /// Map a noise value in `[0, 1]` to its band's key.
    ///
    /// Returns the first key whose threshold exceeds the value; values that
    /// round past 1.0 fall back to the last key.
    pub fn sample(&self, value: f64) -> K {
        for (key, threshold) in self.keys.iter().zip(&self.thresholds) {
            if value < *threshold {
                return *key;
            }
        }
        self.keys[self.keys.len() - 1]
    }

    /// The final cumulative value; 1.0 within floating tolerance.
    pub fn total(&self) -> f64 {
        *self.thresholds.last().expect("thresholds are never empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_partition_scenario() {
        // {a: 0.5, b: 0.3, c: 0.2} sorts to [a, b, c] with cumulative
        // thresholds [0.5, 0.8, 1.0].
        let thresholds =
            Thresholds::from_weights([("a", 0.5), ("b", 0.3), ("c", 0.2)]).unwrap();
        assert_eq!(thresholds.keys, vec!["a", "b", "c"]);
        assert!((thresholds.thresholds[0] - 0.5).abs() < 1e-12);
        assert!((thresholds.thresholds[1] - 0.8).abs() < 1e-12);
        assert!((thresholds.thresholds[2] - 1.0).abs() < 1e-12);

        assert_eq!(thresholds.sample(0.1), "a");
        assert_eq!(thresholds.sample(0.6), "b");
        assert_eq!(thresholds.sample(0.95), "c");
    }

    #[test]
    fn descending_sort_puts_common_fates_first() {
        let thresholds =
            Thresholds::from_weights([("rare", 0.1), ("common", 0.9)]).unwrap();
        assert_eq!(thresholds.keys, vec!["common", "rare"]);
    }

    #[test]
    fn normalization_handles_unnormalized_weights() {
        // Weights need not sum to 1; relative magnitudes are preserved.
        let thresholds = Thresholds::from_weights([("x", 5.0), ("y", 15.0)]).unwrap();
        assert_eq!(thresholds.keys, vec!["y", "x"]);
        assert!((thresholds.thresholds[0] - 0.75).abs() < 1e-12);
        assert!((thresholds.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn thresholds_are_monotone_and_total() {
        let thresholds = Thresholds::from_weights([
            ("a", 0.17),
            ("b", 0.02),
            ("c", 0.44),
            ("d", 0.09),
            ("e", 0.28),
        ])
        .unwrap();
        for window in thresholds.thresholds.windows(2) {
            assert!(window[0] <= window[1] + 1e-12);
        }
        assert!((thresholds.total() - 1.0).abs() < 1e-9);

        // Every value in [0, 1) maps to some key.
        for i in 0..100 {
            let value = i as f64 / 100.0;
            let key = thresholds.sample(value);
            assert!(thresholds.keys.contains(&key));
        }
    }

    #[test]
    fn values_past_one_fall_back_to_the_last_key() {
        let thresholds = Thresholds::from_weights([("a", 1.0), ("b", 1.0)]).unwrap();
        let last = *thresholds.keys.last().unwrap();
        assert_eq!(thresholds.sample(1.0), last);
        assert_eq!(thresholds.sample(1.0000001), last);
    }

    #[test]
    fn empty_and_zero_mass_priors_return_none() {
        assert!(Thresholds::<&str>::from_weights([]).is_none());
        assert!(Thresholds::from_weights([("a", 0.0), ("b", 0.0)]).is_none());
    }

    #[test]
    fn ties_break_by_input_order() {
        let forward = Thresholds::from_weights([("a", 0.5), ("b", 0.5)]).unwrap();
        assert_eq!(forward.keys, vec!["a", "b"]);
        let reversed = Thresholds::from_weights([("b", 0.5), ("a", 0.5)]).unwrap();
        assert_eq!(reversed.keys, vec!["b", "a"]);
    }
}
