//! Catalog validation errors.
//!
//! Phase transition errors live next to the state machine in
//! [`crate::engine`]; this module covers the configuration surface.

use thiserror::Error;

/// Stat that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum StatKind {
    AttackMax,
    DodgeMax,
    Strength,
    ScoreValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one weapon")]
    NoWeapons,

    #[error("catalog must contain at least one enemy")]
    NoEnemies,

    #[error("`{name}` has a zero {stat}; catalog stats must be positive")]
    ZeroStat { name: String, stat: StatKind },
}

impl CatalogError {
    pub fn zero_stat(name: impl Into<String>, stat: StatKind) -> Self {
        Self::ZeroStat {
            name: name.into(),
            stat,
        }
    }
}
