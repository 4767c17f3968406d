//! # Weapon Identifiers
//!
//! Opaque engine definition indexes for weapons, knives, gloves and the
//! non-weapon definitions that back tools and containers.
//!
//! `None` is a valid sentinel carried by items that have no weapon
//! definition (music kits, graffiti, patches). The derived `Ord`
//! follows the raw definition index and is the display tie-breaker for
//! items without a kit.

use serde::{Deserialize, Serialize};

/// Engine definition index for a weapon or weapon-like item.
///
/// Discriminants are fixed by the engine's item schema and must never
/// be renumbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u16)]
#[allow(missing_docs)] // variants are engine schema names, self-describing
pub enum WeaponId {
    /// Sentinel for items with no weapon definition.
    None = 0,
    Deagle = 1,
    Elite = 2,
    FiveSeven = 3,
    Glock = 4,
    Ak47 = 7,
    Aug = 8,
    Awp = 9,
    Famas = 10,
    G3SG1 = 11,
    GalilAr = 13,
    M249 = 14,
    M4A1 = 16,
    Mac10 = 17,
    P90 = 19,
    Mp5sd = 23,
    Ump45 = 24,
    Xm1014 = 25,
    Bizon = 26,
    Mag7 = 27,
    Negev = 28,
    SawedOff = 29,
    Tec9 = 30,
    Zeus = 31,
    P2000 = 32,
    Mp7 = 33,
    Mp9 = 34,
    Nova = 35,
    P250 = 36,
    Scar20 = 38,
    Sg553 = 39,
    Ssg08 = 40,
    M4a1S = 60,
    UspS = 61,
    Cz75a = 63,
    R8Revolver = 64,
    Bayonet = 500,
    ClassicKnife = 503,
    FlipKnife = 505,
    GutKnife = 506,
    Karambit = 507,
    M9Bayonet = 508,
    HuntsmanKnife = 509,
    FalchionKnife = 512,
    BowieKnife = 514,
    ButterflyKnife = 515,
    ShadowDaggers = 516,
    UrsusKnife = 519,
    NavajaKnife = 520,
    StilettoKnife = 522,
    TalonKnife = 523,
    GloveStuddedBloodhound = 5027,
    GloveT = 5028,
    GloveCT = 5029,
    GloveSporty = 5030,
    GloveSlick = 5031,
    GloveLeatherWrap = 5032,
    GloveMotorcycle = 5033,
    GloveSpecialist = 5034,
    GloveHydra = 5035,
    CS20Case = 9131,
}

impl WeaponId {
    /// Returns true for the knife definition index range.
    #[inline]
    #[must_use]
    pub const fn is_knife(self) -> bool {
        let raw = self as u16;
        raw >= 500 && raw < 5000
    }

    /// Returns true for the glove definition index range.
    #[inline]
    #[must_use]
    pub const fn is_glove(self) -> bool {
        let raw = self as u16;
        raw >= 5027 && raw <= 5035
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_follows_definition_index() {
        assert!(WeaponId::None < WeaponId::Deagle);
        assert!(WeaponId::Ak47 < WeaponId::Famas);
        assert!(WeaponId::Famas < WeaponId::Bayonet);
        assert!(WeaponId::Karambit < WeaponId::GloveSporty);
    }

    #[test]
    fn test_knife_and_glove_ranges() {
        assert!(WeaponId::Karambit.is_knife());
        assert!(!WeaponId::Karambit.is_glove());
        assert!(WeaponId::GloveStuddedBloodhound.is_glove());
        assert!(!WeaponId::GloveStuddedBloodhound.is_knife());
        assert!(!WeaponId::Ak47.is_knife());
        assert!(!WeaponId::None.is_glove());
    }
}
