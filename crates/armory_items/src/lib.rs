//! # ARMORY Item Catalog
//!
//! Static item data model for the ARMORY economy engine.
//!
//! ## Design Principles
//!
//! 1. **Append-only catalog** - populated once at startup, then read-only
//! 2. **Closed item union** - classification by exhaustive match, never flags
//! 3. **Typed kit handles** - kit references are issued by the catalog and cannot dangle
//! 4. **No randomness, no I/O** - this crate is pure data and pure functions
//!
//! ## Thread Safety
//!
//! Populate the catalog single-threaded, then share `&Catalog` freely.
//! `Catalog` is `Send + Sync`; once no `&mut` exists, reads never race.
//!
//! ## Example
//!
//! ```rust
//! use armory_items::{Catalog, EconRarity, ItemSorter, WeaponId};
//!
//! let mut catalog = Catalog::new();
//! let kit = catalog.add_paint_kit(1234, "Fade", 0.0, 0.08);
//! let skin = catalog.add_skin(EconRarity::Pink, WeaponId::Ak47, kit, "ak_fade.png");
//! let graffiti = catalog.add_graffiti(222, "Smiley", EconRarity::Blue, "smiley.png");
//!
//! let sorter = ItemSorter::new(&catalog);
//! assert!(sorter.less(catalog.item(graffiti), catalog.item(skin)));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod catalog;
pub mod item;
pub mod kits;
pub mod rarity;
pub mod sorter;
pub mod weapon;

pub use catalog::{Catalog, ContainerSpec, ContainerSpecIndex, ItemIndex};
pub use item::{Item, ItemVariant};
pub use kits::{
    GraffitiKit, GraffitiKitIndex, MusicKit, MusicKitIndex, PaintKit, PaintKitIndex, PatchKit,
    PatchKitIndex, StickerKit, StickerKitIndex,
};
pub use rarity::EconRarity;
pub use sorter::ItemSorter;
pub use weapon::WeaponId;
