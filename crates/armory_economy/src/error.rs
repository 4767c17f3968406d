//! # Economy Error Types
//!
//! All recoverable errors in the economy crate.
//!
//! Invariant violations (foreign indexes, inverted wear ranges) are
//! programming errors and panic at the violation site instead of
//! appearing here.

use armory_items::WeaponId;
use thiserror::Error;

/// Errors that can occur during economy simulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EconomyError {
    /// Attempted to open an item that is not a case.
    #[error("item with weapon id {weapon_id:?} is not an openable container")]
    NotAContainer {
        /// Weapon definition of the rejected item.
        weapon_id: WeaponId,
    },

    /// The container's standard content pool is empty.
    ///
    /// A rare special pool alone does not make a container openable;
    /// the standard pool is the fallback when the rare draw misses.
    #[error("container has no standard contents to draw from")]
    EmptyContainer,

    /// Invalid configuration file or values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for economy operations.
pub type EconomyResult<T> = Result<T, EconomyError>;
