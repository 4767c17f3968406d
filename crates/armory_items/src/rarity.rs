//! # Economy Rarity Tiers
//!
//! The rarity ladder shared by every catalog item.
//! Ordered from least to most rare; the derived `Ord` follows the
//! discriminant so tier comparisons are integer comparisons.

use serde::{Deserialize, Serialize};

/// Rarity tier for catalog items.
///
/// The order is total: `Default < Grey < LightBlue < Blue < Purple <
/// Pink < Red < Gold`. Generation weights key off this tier; display
/// ordering never does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EconRarity {
    /// No rarity assigned (stock items, tools).
    Default = 0,
    /// Grey tier - base grade.
    Grey = 1,
    /// Light blue tier - industrial grade.
    LightBlue = 2,
    /// Blue tier - the most common generated tier.
    Blue = 3,
    /// Purple tier.
    Purple = 4,
    /// Pink tier.
    Pink = 5,
    /// Red tier - the rarest standard tier.
    Red = 6,
    /// Gold tier - rare special items (knives, gloves).
    Gold = 7,
}

impl EconRarity {
    /// Converts from u8 to a rarity tier.
    ///
    /// Values above the ladder clamp to `Gold`.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Default,
            1 => Self::Grey,
            2 => Self::LightBlue,
            3 => Self::Blue,
            4 => Self::Purple,
            5 => Self::Pink,
            6 => Self::Red,
            _ => Self::Gold,
        }
    }
}
