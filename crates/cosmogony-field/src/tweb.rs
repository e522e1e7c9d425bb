//! T-web classification.
//!
//! Categorizes a point of the density field into a web fate from the sign
//! pattern of the local Hessian's eigenvalues:
//!
//! - all three positive — a local 3D minimum: **void**
//! - two positive, one negative — a 2D surface: **sheet**
//! - one positive, two negative — a 1D curve: **filament**
//! - all three negative — a local maximum: **node**
//!
//! Eigenvalues within [`EIGENVALUE_THRESHOLD`] of zero count as neither
//! sign; near-degenerate patterns default to sheet so classification is
//! total.

use cosmogony_taxonomy::WebFate;

/// |eigenvalue| below this counts as zero.
pub const EIGENVALUE_THRESHOLD: f64 = 0.1;

/// Classify a sign pattern of Hessian eigenvalues into a web fate.
pub fn classify_eigenvalues(lambdas: [f64; 3]) -> WebFate {
    let mut positive = 0;
    let mut negative = 0;
    for lambda in lambdas {
        if lambda > EIGENVALUE_THRESHOLD {
            positive += 1;
        } else if lambda < -EIGENVALUE_THRESHOLD {
            negative += 1;
        }
    }

    if positive == 3 {
        WebFate::Void
    } else if positive == 2 && negative >= 1 {
        WebFate::Sheet
    } else if positive >= 1 && negative == 2 {
        WebFate::Filament
    } else if negative == 3 {
        WebFate::Node
    } else {
        // Near-flat region; sheet is the least-committal structure.
        WebFate::Sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_sign_patterns() {
        assert_eq!(classify_eigenvalues([1.0, 1.0, 1.0]), WebFate::Void);
        assert_eq!(classify_eigenvalues([1.0, 1.0, -1.0]), WebFate::Sheet);
        assert_eq!(classify_eigenvalues([1.0, -1.0, -1.0]), WebFate::Filament);
        assert_eq!(classify_eigenvalues([-1.0, -1.0, -1.0]), WebFate::Node);
    }

    #[test]
    fn near_zero_eigenvalues_default_to_sheet() {
        assert_eq!(classify_eigenvalues([0.05, 0.01, -0.02]), WebFate::Sheet);
        assert_eq!(classify_eigenvalues([1.0, 0.05, 0.0]), WebFate::Sheet);
        assert_eq!(classify_eigenvalues([-1.0, 0.05, 0.0]), WebFate::Sheet);
    }

    #[test]
    fn threshold_is_a_magnitude_cut() {
        // Just inside the threshold counts as zero; just outside counts.
        assert_eq!(classify_eigenvalues([0.09, 0.09, 0.09]), WebFate::Sheet);
        assert_eq!(classify_eigenvalues([0.11, 0.11, 0.11]), WebFate::Void);
    }
}
