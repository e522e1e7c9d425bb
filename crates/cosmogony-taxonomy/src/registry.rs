//! The fate registry: one validated, flat lookup over every scale's table.
//!
//! The registry is constructed once at startup and passed by reference into
//! whatever needs fate lookup — there is no module-level state, so tests and
//! simultaneous universes cannot poison each other.
//!
//! Construction re-checks, at runtime, everything the typed tables already
//! promise statically, plus the properties the type system cannot express:
//!
//! - fate keys are globally unique across scales (the flat presentation map
//!   and observation records rely on this),
//! - the lock invariant: a locked fate permits no same-scale transitions,
//! - transition targets exist in the same scale's table,
//! - every referenced child key exists in the next-finer scale's table,
//! - weights are finite, non-negative, and non-empty maps have positive mass.
//!
//! Violations surface as [`TaxonomyError`] at build time, never at query
//! time.

use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

use cosmogony_foundation::Scale;

use crate::{cooling, galactic, halo, interstellar, stellar, web};

/// A globally-unique fate key (camelCase, matching the canonical tables).
pub type FateKey = &'static str;

/// Taxonomy result type alias.
pub type Result<T> = std::result::Result<T, TaxonomyError>;

/// Errors raised while building or querying the fate registry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaxonomyError {
    /// A fate key was looked up that no table defines.
    ///
    /// Lookup never falls back to a default fate: an unknown key is a data
    /// integrity bug in the caller and must surface.
    #[error("unknown fate key: {0}")]
    UnknownFate(String),

    /// Two scales registered the same key. The flat lookup would silently
    /// shadow one of them, so this fails the build instead.
    #[error("fate key '{key}' registered by both {first} and {second}")]
    DuplicateKey {
        key: FateKey,
        first: Scale,
        second: Scale,
    },

    /// A locked fate lists same-scale transitions.
    #[error("fate '{key}' is locked by '{lock}' but still allows transitions")]
    LockedWithTransitions { key: FateKey, lock: &'static str },

    /// A transition target is missing from its own scale's table.
    #[error("fate '{key}' allows a transition to unknown fate '{target}'")]
    UnknownTransition { key: FateKey, target: FateKey },

    /// A child weight references a key the next-finer scale does not define.
    #[error("fate '{key}' weights unknown child fate '{child}'")]
    UnknownChildFate { key: FateKey, child: FateKey },

    /// A child weight is negative or not finite.
    #[error("fate '{key}' has invalid weight {weight} for child '{child}'")]
    InvalidWeight {
        key: FateKey,
        child: FateKey,
        weight: f64,
    },

    /// A non-empty weight map sums to zero, so it cannot normalize.
    #[error("fate '{key}' has child weights with no positive mass")]
    ZeroWeightMass { key: FateKey },
}

/// The normalized view of one fate, uniform across scales.
///
/// Scale-specific physical attributes stay on the typed tables; the record
/// carries exactly what the sampling machinery needs.
#[derive(Debug, Clone)]
pub struct FateRecord {
    pub key: FateKey,
    /// The scale whose table defines this fate.
    pub scale: Scale,
    /// The named irreversibility cause, if the fate is locked.
    pub locked_by: Option<&'static str>,
    /// Same-scale successor fates. Empty iff locked or terminal.
    pub allowed_transitions: Vec<FateKey>,
    /// Relative (unnormalized) prior over the next-finer scale's fates.
    /// Empty for leaf fates and for fates that paint nothing.
    pub child_fate_weights: IndexMap<FateKey, f64>,
}

impl FateRecord {
    /// Whether this fate can serve as a parent when sampling children.
    pub fn paints_children(&self) -> bool {
        !self.child_fate_weights.is_empty()
    }
}

/// Flat, validated lookup over every registered fate.
#[derive(Debug, Clone)]
pub struct FateRegistry {
    records: IndexMap<FateKey, FateRecord>,
}

macro_rules! flatten_table {
    ($records:expr, $table:expr, $scale:expr) => {
        for (fate, info) in $table {
            $records.push(FateRecord {
                key: fate.key(),
                scale: $scale,
                locked_by: info.locked_by.map(|lock| lock.key()),
                allowed_transitions: info.allowed_transitions.iter().map(|f| f.key()).collect(),
                child_fate_weights: info
                    .child_fate_weights
                    .iter()
                    .map(|(child, weight)| (child.key(), *weight))
                    .collect(),
            });
        }
    };
}

impl FateRegistry {
    /// Build the registry from the canonical built-in tables.
    ///
    /// Fails fast on any cross-table inconsistency; a successful build
    /// guarantees every query-time invariant.
    pub fn builtin() -> Result<Self> {
        let mut records = Vec::new();
        // Cooling regimes are reversible, derived thermal states: no locks
        // and no enumerated transitions, only child priors.
        for (regime, info) in cooling::COOLING_REGIMES {
            records.push(FateRecord {
                key: regime.key(),
                scale: Scale::Megaparsec100,
                locked_by: None,
                allowed_transitions: Vec::new(),
                child_fate_weights: info
                    .child_fate_weights
                    .iter()
                    .map(|(child, weight)| (child.key(), *weight))
                    .collect(),
            });
        }
        flatten_table!(records, web::WEB_SCALE_FATES, Scale::Megaparsec10);
        flatten_table!(records, halo::HALO_SCALE_FATES, Scale::Megaparsec);
        flatten_table!(records, galactic::GALACTIC_SCALE_FATES, Scale::Kiloparsec100);
        flatten_table!(
            records,
            interstellar::INTERSTELLAR_SCALE_FATES,
            Scale::Parsec100
        );
        // Stellar fates are the leaf: no child weights to flatten.
        for (fate, info) in stellar::STELLAR_SCALE_FATES {
            records.push(FateRecord {
                key: fate.key(),
                scale: Scale::Parsec,
                locked_by: info.locked_by.map(|lock| lock.key()),
                allowed_transitions: info.allowed_transitions.iter().map(|f| f.key()).collect(),
                child_fate_weights: IndexMap::new(),
            });
        }
        Self::from_records(records)
    }

    /// Build and validate a registry from explicit records.
    pub fn from_records(records: Vec<FateRecord>) -> Result<Self> {
        let mut map: IndexMap<FateKey, FateRecord> = IndexMap::with_capacity(records.len());
        for record in records {
            if let Some(existing) = map.get(record.key) {
                return Err(TaxonomyError::DuplicateKey {
                    key: record.key,
                    first: existing.scale,
                    second: record.scale,
                });
            }
            map.insert(record.key, record);
        }

        let registry = Self { records: map };
        registry.validate()?;
        debug!(
            fates = registry.records.len(),
            scales = registry.scales().len(),
            "fate registry built"
        );
        Ok(registry)
    }

    fn validate(&self) -> Result<()> {
        for record in self.records.values() {
            if let Some(lock) = record.locked_by {
                if !record.allowed_transitions.is_empty() {
                    return Err(TaxonomyError::LockedWithTransitions {
                        key: record.key,
                        lock,
                    });
                }
            }

            for target in &record.allowed_transitions {
                match self.records.get(target) {
                    Some(other) if other.scale == record.scale => {}
                    _ => {
                        return Err(TaxonomyError::UnknownTransition {
                            key: record.key,
                            target,
                        })
                    }
                }
            }

            let child_scale = record.scale.finer();
            let mut mass = 0.0;
            for (child, weight) in &record.child_fate_weights {
                if !weight.is_finite() || *weight < 0.0 {
                    return Err(TaxonomyError::InvalidWeight {
                        key: record.key,
                        child,
                        weight: *weight,
                    });
                }
                mass += weight;
                let resolved = self.records.get(child);
                match (resolved, child_scale) {
                    (Some(other), Some(expected)) if other.scale == expected => {}
                    _ => {
                        return Err(TaxonomyError::UnknownChildFate {
                            key: record.key,
                            child,
                        })
                    }
                }
            }
            if !record.child_fate_weights.is_empty() && mass <= 0.0 {
                return Err(TaxonomyError::ZeroWeightMass { key: record.key });
            }
        }
        Ok(())
    }

    /// Look up a fate by key. Fails with [`TaxonomyError::UnknownFate`] for
    /// keys absent from every table.
    pub fn get(&self, key: &str) -> Result<&FateRecord> {
        self.records
            .get(key)
            .ok_or_else(|| TaxonomyError::UnknownFate(key.to_string()))
    }

    /// All records, in registration (ladder) order.
    pub fn records(&self) -> impl Iterator<Item = &FateRecord> {
        self.records.values()
    }

    /// Keys registered at one scale, in table order.
    pub fn keys_for_scale(&self, scale: Scale) -> Vec<FateKey> {
        self.records
            .values()
            .filter(|record| record.scale == scale)
            .map(|record| record.key)
            .collect()
    }

    /// The distinct scales with registered tables, coarsest first.
    pub fn scales(&self) -> Vec<Scale> {
        let mut scales: Vec<Scale> = Vec::new();
        for record in self.records.values() {
            if !scales.contains(&record.scale) {
                scales.push(record.scale);
            }
        }
        scales.sort();
        scales.reverse();
        scales
    }

    /// Number of registered fates.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_builds() {
        let registry = FateRegistry::builtin().expect("canonical tables must validate");
        // 6 cooling + 5 web + 7 halo + 8 galactic + 8 interstellar + 7 stellar
        assert_eq!(registry.len(), 41);
        assert_eq!(registry.scales().len(), 6);
    }

    #[test]
    fn lookup_finds_fates_from_every_scale() {
        let registry = FateRegistry::builtin().unwrap();
        for key in [
            "recombinedGas",
            "filament",
            "gasRichGroup",
            "spiralGalaxy",
            "giantMolecularCloud",
            "neutronStar",
        ] {
            assert!(registry.get(key).is_ok(), "missing {key}");
        }
    }

    #[test]
    fn unknown_keys_fail_loudly() {
        let registry = FateRegistry::builtin().unwrap();
        let err = registry.get("protoCluster").unwrap_err();
        assert_eq!(err, TaxonomyError::UnknownFate("protoCluster".into()));
    }

    #[test]
    fn lock_invariant_holds_everywhere() {
        let registry = FateRegistry::builtin().unwrap();
        for record in registry.records() {
            if record.locked_by.is_some() {
                assert!(
                    record.allowed_transitions.is_empty(),
                    "{} is locked but transitions",
                    record.key
                );
            }
        }
    }

    #[test]
    fn child_weights_reference_the_next_finer_scale() {
        let registry = FateRegistry::builtin().unwrap();
        for record in registry.records() {
            let child_scale = record.scale.finer();
            for child in record.child_fate_weights.keys() {
                let child_record = registry.get(child).unwrap();
                assert_eq!(Some(child_record.scale), child_scale);
            }
        }
    }

    #[test]
    fn leaf_fates_paint_nothing() {
        let registry = FateRegistry::builtin().unwrap();
        for key in registry.keys_for_scale(Scale::Parsec) {
            assert!(!registry.get(key).unwrap().paints_children());
        }
    }

    #[test]
    fn duplicate_keys_fail_the_build() {
        let record = |key: FateKey, scale: Scale| FateRecord {
            key,
            scale,
            locked_by: None,
            allowed_transitions: Vec::new(),
            child_fate_weights: IndexMap::new(),
        };
        let err = FateRegistry::from_records(vec![
            record("void", Scale::Megaparsec10),
            record("void", Scale::Megaparsec),
        ])
        .unwrap_err();
        assert!(matches!(err, TaxonomyError::DuplicateKey { key: "void", .. }));
    }

    #[test]
    fn locked_records_with_transitions_fail_the_build() {
        let err = FateRegistry::from_records(vec![
            FateRecord {
                key: "sealed",
                scale: Scale::Parsec,
                locked_by: Some("testLock"),
                allowed_transitions: vec!["open"],
                child_fate_weights: IndexMap::new(),
            },
            FateRecord {
                key: "open",
                scale: Scale::Parsec,
                locked_by: None,
                allowed_transitions: Vec::new(),
                child_fate_weights: IndexMap::new(),
            },
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            TaxonomyError::LockedWithTransitions { key: "sealed", .. }
        ));
    }

    #[test]
    fn dangling_child_keys_fail_the_build() {
        let mut weights = IndexMap::new();
        weights.insert("ghost", 1.0);
        let err = FateRegistry::from_records(vec![FateRecord {
            key: "parent",
            scale: Scale::Megaparsec10,
            locked_by: None,
            allowed_transitions: Vec::new(),
            child_fate_weights: weights,
        }])
        .unwrap_err();
        assert!(matches!(
            err,
            TaxonomyError::UnknownChildFate {
                key: "parent",
                child: "ghost"
            }
        ));
    }
}
