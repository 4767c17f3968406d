//! # Item Data Model
//!
//! The closed union of catalog item categories.
//!
//! Every item is exactly one [`ItemVariant`]; classification is an
//! exhaustive match, never a flag test. Adding a category forces every
//! classifier and the sorter through a compile error, so no category
//! can be silently mis-filed.

use crate::catalog::ContainerSpecIndex;
use crate::kits::{
    GraffitiKitIndex, MusicKitIndex, PaintKitIndex, PatchKitIndex, StickerKitIndex,
};
use crate::rarity::EconRarity;
use crate::weapon::WeaponId;

/// The category payload of a catalog item.
///
/// Kit-based variants carry the typed handle of their definition
/// record; the handles are issued by the owning catalog and the tables
/// are append-only, so they always resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemVariant {
    /// Gloves with a paint kit finish.
    Gloves {
        /// Finish definition.
        paint_kit: PaintKitIndex,
    },
    /// Weapon skin with a paint kit finish.
    Skin {
        /// Finish definition.
        paint_kit: PaintKitIndex,
    },
    /// Agent patch.
    Patch {
        /// Patch definition.
        patch_kit: PatchKitIndex,
    },
    /// Weapon sticker.
    Sticker {
        /// Sticker definition.
        sticker_kit: StickerKitIndex,
    },
    /// Music kit.
    Music {
        /// Music definition.
        music_kit: MusicKitIndex,
    },
    /// Spray graffiti.
    Graffiti {
        /// Graffiti definition.
        graffiti_kit: GraffitiKitIndex,
    },
    /// Pin or medal collectible.
    Collectible {
        /// Original (event-issued) variant rather than a reissue.
        is_original: bool,
    },
    /// Name tag tool.
    NameTag,
    /// Playable agent model.
    Agent,
    /// Openable weapon case.
    Case {
        /// Content table of the case.
        spec: ContainerSpecIndex,
    },
    /// Key that opens a case.
    CaseKey,
    /// Operation pass.
    OperationPass,
    /// StatTrak counter transfer tool.
    StatTrakSwapTool,
    /// Tournament viewer pass.
    ViewerPass {
        /// Tournament event id.
        tournament_id: u32,
    },
    /// Yearly service medal.
    ServiceMedal {
        /// Issue year.
        year: u16,
    },
    /// Souvenir package token.
    SouvenirToken {
        /// Tournament event id.
        tournament_id: u32,
    },
    /// Tournament participation coin.
    TournamentCoin {
        /// Tournament event id.
        tournament_id: u32,
    },
    /// Knife without a finish.
    VanillaKnife,
    /// Weapon without a finish.
    VanillaSkin,
}

/// A single immutable catalog item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    rarity: EconRarity,
    weapon_id: WeaponId,
    icon_path: String,
    variant: ItemVariant,
}

impl Item {
    pub(crate) fn new(
        rarity: EconRarity,
        weapon_id: WeaponId,
        icon_path: String,
        variant: ItemVariant,
    ) -> Self {
        Self {
            rarity,
            weapon_id,
            icon_path,
            variant,
        }
    }

    /// Rarity tier of this item.
    #[inline]
    #[must_use]
    pub const fn rarity(&self) -> EconRarity {
        self.rarity
    }

    /// Weapon definition index, `WeaponId::None` for non-weapon items.
    #[inline]
    #[must_use]
    pub const fn weapon_id(&self) -> WeaponId {
        self.weapon_id
    }

    /// Icon asset path.
    #[inline]
    #[must_use]
    pub fn icon_path(&self) -> &str {
        &self.icon_path
    }

    /// The category payload.
    #[inline]
    #[must_use]
    pub const fn variant(&self) -> &ItemVariant {
        &self.variant
    }

    /// True for spray graffiti.
    #[inline]
    #[must_use]
    pub const fn is_graffiti(&self) -> bool {
        matches!(self.variant, ItemVariant::Graffiti { .. })
    }

    /// True for agent patches.
    #[inline]
    #[must_use]
    pub const fn is_patch(&self) -> bool {
        matches!(self.variant, ItemVariant::Patch { .. })
    }

    /// True for weapon stickers.
    #[inline]
    #[must_use]
    pub const fn is_sticker(&self) -> bool {
        matches!(self.variant, ItemVariant::Sticker { .. })
    }

    /// True for music kits.
    #[inline]
    #[must_use]
    pub const fn is_music(&self) -> bool {
        matches!(self.variant, ItemVariant::Music { .. })
    }

    /// True for weapon skins.
    #[inline]
    #[must_use]
    pub const fn is_skin(&self) -> bool {
        matches!(self.variant, ItemVariant::Skin { .. })
    }

    /// True for gloves.
    #[inline]
    #[must_use]
    pub const fn is_gloves(&self) -> bool {
        matches!(self.variant, ItemVariant::Gloves { .. })
    }

    /// True for the categories carrying a paint kit finish.
    ///
    /// Exactly gloves and skins; mutually exclusive with
    /// [`is_graffiti`](Self::is_graffiti) and
    /// [`is_patch`](Self::is_patch).
    #[inline]
    #[must_use]
    pub const fn has_paint_kit(&self) -> bool {
        matches!(
            self.variant,
            ItemVariant::Gloves { .. } | ItemVariant::Skin { .. }
        )
    }

    /// True for openable cases.
    #[inline]
    #[must_use]
    pub const fn is_case(&self) -> bool {
        matches!(self.variant, ItemVariant::Case { .. })
    }

    /// True for collectibles.
    #[inline]
    #[must_use]
    pub const fn is_collectible(&self) -> bool {
        matches!(self.variant, ItemVariant::Collectible { .. })
    }
}
