//! # Kit Definition Records
//!
//! Paint kits, graffiti, patches, stickers and music kits.
//!
//! Kit records are plain data loaded once at startup and stored in
//! catalog-owned tables. Items reference them through typed index
//! newtypes handed out by the catalog at registration time, so a kit
//! reference can never dangle and never points into another table.

use serde::{Deserialize, Serialize};

/// A weapon finish definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaintKit {
    /// Unique id within the paint kit table, the ordering key among
    /// skins of the same weapon.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Lower wear bound, inclusive.
    pub wear_min: f32,
    /// Upper wear bound, inclusive. Never below `wear_min`.
    pub wear_max: f32,
}

/// A spray graffiti definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraffitiKit {
    /// Unique id within the graffiti table, the ordering key among
    /// graffiti items.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// An agent patch definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchKit {
    /// Unique id within the patch table, the ordering key among patch
    /// items.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// A sticker definition, optionally tied to a tournament.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerKit {
    /// Unique id within the sticker table.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Tournament event id, 0 when not a tournament sticker.
    pub tournament_id: u32,
    /// Tournament team id, 0 when not a team sticker.
    pub tournament_team: u32,
    /// Tournament player id, 0 when not a player autograph.
    pub tournament_player_id: u32,
    /// Gold foil variant.
    pub is_golden: bool,
}

/// A music kit definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicKit {
    /// Unique id within the music kit table.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// Handle into the catalog's paint kit table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PaintKitIndex(pub(crate) usize);

/// Handle into the catalog's graffiti table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GraffitiKitIndex(pub(crate) usize);

/// Handle into the catalog's patch table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PatchKitIndex(pub(crate) usize);

/// Handle into the catalog's sticker table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StickerKitIndex(pub(crate) usize);

/// Handle into the catalog's music kit table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MusicKitIndex(pub(crate) usize);
