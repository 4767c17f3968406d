//! # Item Catalog
//!
//! Append-only storage for every item and kit definition.
//!
//! The catalog is the single source of truth. It is populated once at
//! startup through the `add_*` family and then only read; nothing is
//! ever removed or reordered, so every index handed out stays valid
//! for the catalog's lifetime. Passing an index obtained from a
//! different catalog is a programming error and panics on resolution.

use crate::item::{Item, ItemVariant};
use crate::kits::{
    GraffitiKit, GraffitiKitIndex, MusicKit, MusicKitIndex, PaintKit, PaintKitIndex, PatchKit,
    PatchKitIndex, StickerKit, StickerKitIndex,
};
use crate::rarity::EconRarity;
use crate::weapon::WeaponId;

/// Handle to an item in the catalog, stable for the catalog's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemIndex(pub(crate) usize);

impl ItemIndex {
    /// Raw position in insertion order.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

/// Handle to a registered container content table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContainerSpecIndex(pub(crate) usize);

/// Content table of an openable case.
///
/// Registered before the case item that references it. `entries` is
/// the standard pool drawn by rarity weight; `rare_special_entries`
/// is the knife/glove pool behind an independent low-probability
/// draw. A case is openable only if the standard pool is non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainerSpec {
    /// Standard content pool.
    pub entries: Vec<ItemIndex>,
    /// Rare special pool, may be empty.
    pub rare_special_entries: Vec<ItemIndex>,
    /// Tournament year for souvenir time-stamping, if any.
    pub tournament_year: Option<u16>,
}

impl ContainerSpec {
    /// Creates a spec with only a standard pool.
    #[must_use]
    pub fn new(entries: Vec<ItemIndex>) -> Self {
        Self {
            entries,
            rare_special_entries: Vec::new(),
            tournament_year: None,
        }
    }

    /// Adds a rare special pool.
    #[must_use]
    pub fn with_rare_special(mut self, entries: Vec<ItemIndex>) -> Self {
        self.rare_special_entries = entries;
        self
    }

    /// Marks the container as a souvenir source for a tournament year.
    #[must_use]
    pub const fn with_tournament_year(mut self, year: u16) -> Self {
        self.tournament_year = Some(year);
        self
    }
}

/// Append-only catalog of items and their kit definitions.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
    paint_kits: Vec<PaintKit>,
    graffiti_kits: Vec<GraffitiKit>,
    patch_kits: Vec<PatchKit>,
    sticker_kits: Vec<StickerKit>,
    music_kits: Vec<MusicKit>,
    container_specs: Vec<ContainerSpec>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push_item(&mut self, item: Item) -> ItemIndex {
        let index = ItemIndex(self.items.len());
        self.items.push(item);
        index
    }

    /// Registers a paint kit definition.
    ///
    /// # Panics
    ///
    /// Panics if `wear_min > wear_max`.
    pub fn add_paint_kit(
        &mut self,
        id: u32,
        name: &str,
        wear_min: f32,
        wear_max: f32,
    ) -> PaintKitIndex {
        assert!(
            wear_min <= wear_max,
            "paint kit {id}: wear_min {wear_min} above wear_max {wear_max}"
        );
        let index = PaintKitIndex(self.paint_kits.len());
        self.paint_kits.push(PaintKit {
            id,
            name: name.to_owned(),
            wear_min,
            wear_max,
        });
        index
    }

    /// Adds a weapon skin using a previously registered paint kit.
    pub fn add_skin(
        &mut self,
        rarity: EconRarity,
        weapon_id: WeaponId,
        paint_kit: PaintKitIndex,
        icon_path: &str,
    ) -> ItemIndex {
        assert!(paint_kit.0 < self.paint_kits.len(), "unregistered paint kit");
        self.push_item(Item::new(
            rarity,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::Skin { paint_kit },
        ))
    }

    /// Adds gloves using a previously registered paint kit.
    pub fn add_gloves(
        &mut self,
        rarity: EconRarity,
        weapon_id: WeaponId,
        paint_kit: PaintKitIndex,
        icon_path: &str,
    ) -> ItemIndex {
        assert!(paint_kit.0 < self.paint_kits.len(), "unregistered paint kit");
        self.push_item(Item::new(
            rarity,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::Gloves { paint_kit },
        ))
    }

    /// Adds a graffiti item, registering its kit record.
    pub fn add_graffiti(
        &mut self,
        id: u32,
        name: &str,
        rarity: EconRarity,
        icon_path: &str,
    ) -> ItemIndex {
        let graffiti_kit = GraffitiKitIndex(self.graffiti_kits.len());
        self.graffiti_kits.push(GraffitiKit {
            id,
            name: name.to_owned(),
        });
        self.push_item(Item::new(
            rarity,
            WeaponId::None,
            icon_path.to_owned(),
            ItemVariant::Graffiti { graffiti_kit },
        ))
    }

    /// Adds an agent patch item, registering its kit record.
    pub fn add_patch(
        &mut self,
        id: u32,
        name: &str,
        rarity: EconRarity,
        icon_path: &str,
    ) -> ItemIndex {
        let patch_kit = PatchKitIndex(self.patch_kits.len());
        self.patch_kits.push(PatchKit {
            id,
            name: name.to_owned(),
        });
        self.push_item(Item::new(
            rarity,
            WeaponId::None,
            icon_path.to_owned(),
            ItemVariant::Patch { patch_kit },
        ))
    }

    /// Adds a sticker item, registering its kit record.
    #[allow(clippy::too_many_arguments)]
    pub fn add_sticker(
        &mut self,
        id: u32,
        name: &str,
        rarity: EconRarity,
        icon_path: &str,
        tournament_id: u32,
        tournament_team: u32,
        tournament_player_id: u32,
        is_golden: bool,
    ) -> ItemIndex {
        let sticker_kit = StickerKitIndex(self.sticker_kits.len());
        self.sticker_kits.push(StickerKit {
            id,
            name: name.to_owned(),
            tournament_id,
            tournament_team,
            tournament_player_id,
            is_golden,
        });
        self.push_item(Item::new(
            rarity,
            WeaponId::None,
            icon_path.to_owned(),
            ItemVariant::Sticker { sticker_kit },
        ))
    }

    /// Adds a music kit item, registering its kit record.
    ///
    /// Music kits are always `Blue`; the tier is pinned here rather
    /// than taken as a parameter.
    pub fn add_music(&mut self, id: u32, name: &str, icon_path: &str) -> ItemIndex {
        let music_kit = MusicKitIndex(self.music_kits.len());
        self.music_kits.push(MusicKit {
            id,
            name: name.to_owned(),
        });
        self.push_item(Item::new(
            EconRarity::Blue,
            WeaponId::None,
            icon_path.to_owned(),
            ItemVariant::Music { music_kit },
        ))
    }

    /// Adds a collectible pin or medal.
    pub fn add_collectible(
        &mut self,
        rarity: EconRarity,
        weapon_id: WeaponId,
        is_original: bool,
        icon_path: &str,
    ) -> ItemIndex {
        self.push_item(Item::new(
            rarity,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::Collectible { is_original },
        ))
    }

    /// Adds a name tag tool.
    pub fn add_name_tag(
        &mut self,
        rarity: EconRarity,
        weapon_id: WeaponId,
        icon_path: &str,
    ) -> ItemIndex {
        self.push_item(Item::new(
            rarity,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::NameTag,
        ))
    }

    /// Adds a playable agent.
    pub fn add_agent(
        &mut self,
        rarity: EconRarity,
        weapon_id: WeaponId,
        icon_path: &str,
    ) -> ItemIndex {
        self.push_item(Item::new(
            rarity,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::Agent,
        ))
    }

    /// Registers a container content table.
    ///
    /// # Panics
    ///
    /// Panics if any entry index does not resolve in this catalog.
    /// Every referenced item must be added before the spec.
    pub fn add_container_spec(&mut self, spec: ContainerSpec) -> ContainerSpecIndex {
        let in_range = |idx: &ItemIndex| idx.0 < self.items.len();
        assert!(
            spec.entries.iter().all(in_range) && spec.rare_special_entries.iter().all(in_range),
            "container spec references an item not in this catalog"
        );
        let index = ContainerSpecIndex(self.container_specs.len());
        self.container_specs.push(spec);
        index
    }

    /// Adds an openable case backed by a registered content table.
    pub fn add_case(
        &mut self,
        rarity: EconRarity,
        weapon_id: WeaponId,
        spec: ContainerSpecIndex,
        icon_path: &str,
    ) -> ItemIndex {
        assert!(
            spec.0 < self.container_specs.len(),
            "unregistered container spec"
        );
        self.push_item(Item::new(
            rarity,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::Case { spec },
        ))
    }

    /// Adds a case key tool.
    pub fn add_case_key(
        &mut self,
        rarity: EconRarity,
        weapon_id: WeaponId,
        icon_path: &str,
    ) -> ItemIndex {
        self.push_item(Item::new(
            rarity,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::CaseKey,
        ))
    }

    /// Adds an operation pass.
    pub fn add_operation_pass(
        &mut self,
        rarity: EconRarity,
        weapon_id: WeaponId,
        icon_path: &str,
    ) -> ItemIndex {
        self.push_item(Item::new(
            rarity,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::OperationPass,
        ))
    }

    /// Adds a StatTrak counter transfer tool.
    pub fn add_stattrak_swap_tool(
        &mut self,
        rarity: EconRarity,
        weapon_id: WeaponId,
        icon_path: &str,
    ) -> ItemIndex {
        self.push_item(Item::new(
            rarity,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::StatTrakSwapTool,
        ))
    }

    /// Adds a tournament viewer pass.
    pub fn add_viewer_pass(
        &mut self,
        rarity: EconRarity,
        weapon_id: WeaponId,
        tournament_id: u32,
        icon_path: &str,
    ) -> ItemIndex {
        self.push_item(Item::new(
            rarity,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::ViewerPass { tournament_id },
        ))
    }

    /// Adds a yearly service medal.
    pub fn add_service_medal(
        &mut self,
        rarity: EconRarity,
        year: u16,
        weapon_id: WeaponId,
        icon_path: &str,
    ) -> ItemIndex {
        self.push_item(Item::new(
            rarity,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::ServiceMedal { year },
        ))
    }

    /// Adds a souvenir package token.
    pub fn add_souvenir_token(
        &mut self,
        rarity: EconRarity,
        weapon_id: WeaponId,
        tournament_id: u32,
        icon_path: &str,
    ) -> ItemIndex {
        self.push_item(Item::new(
            rarity,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::SouvenirToken { tournament_id },
        ))
    }

    /// Adds a tournament participation coin.
    pub fn add_tournament_coin(
        &mut self,
        rarity: EconRarity,
        weapon_id: WeaponId,
        tournament_id: u32,
        icon_path: &str,
    ) -> ItemIndex {
        self.push_item(Item::new(
            rarity,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::TournamentCoin { tournament_id },
        ))
    }

    /// Adds a knife without a finish. Always `Gold`.
    pub fn add_vanilla_knife(&mut self, weapon_id: WeaponId, icon_path: &str) -> ItemIndex {
        self.push_item(Item::new(
            EconRarity::Gold,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::VanillaKnife,
        ))
    }

    /// Adds a weapon without a finish. Always `Default`.
    pub fn add_vanilla_skin(&mut self, weapon_id: WeaponId, icon_path: &str) -> ItemIndex {
        self.push_item(Item::new(
            EconRarity::Default,
            weapon_id,
            icon_path.to_owned(),
            ItemVariant::VanillaSkin,
        ))
    }

    /// All items in insertion order.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Resolves an item handle.
    ///
    /// # Panics
    ///
    /// Panics if the index was not issued by this catalog.
    #[inline]
    #[must_use]
    pub fn item(&self, index: ItemIndex) -> &Item {
        &self.items[index.0]
    }

    /// Paint kit of a gloves or skin item, `None` for other categories.
    #[must_use]
    pub fn paint_kit(&self, item: &Item) -> Option<&PaintKit> {
        match *item.variant() {
            ItemVariant::Gloves { paint_kit } | ItemVariant::Skin { paint_kit } => {
                Some(&self.paint_kits[paint_kit.0])
            }
            _ => None,
        }
    }

    /// Graffiti kit of a graffiti item, `None` for other categories.
    #[must_use]
    pub fn graffiti_kit(&self, item: &Item) -> Option<&GraffitiKit> {
        match *item.variant() {
            ItemVariant::Graffiti { graffiti_kit } => Some(&self.graffiti_kits[graffiti_kit.0]),
            _ => None,
        }
    }

    /// Patch kit of a patch item, `None` for other categories.
    #[must_use]
    pub fn patch_kit(&self, item: &Item) -> Option<&PatchKit> {
        match *item.variant() {
            ItemVariant::Patch { patch_kit } => Some(&self.patch_kits[patch_kit.0]),
            _ => None,
        }
    }

    /// Sticker kit of a sticker item, `None` for other categories.
    #[must_use]
    pub fn sticker_kit(&self, item: &Item) -> Option<&StickerKit> {
        match *item.variant() {
            ItemVariant::Sticker { sticker_kit } => Some(&self.sticker_kits[sticker_kit.0]),
            _ => None,
        }
    }

    /// Music kit of a music item, `None` for other categories.
    #[must_use]
    pub fn music_kit(&self, item: &Item) -> Option<&MusicKit> {
        match *item.variant() {
            ItemVariant::Music { music_kit } => Some(&self.music_kits[music_kit.0]),
            _ => None,
        }
    }

    /// Content table of a case item, `None` for other categories.
    #[must_use]
    pub fn container_spec(&self, item: &Item) -> Option<&ContainerSpec> {
        match *item.variant() {
            ItemVariant::Case { spec } => Some(&self.container_specs[spec.0]),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_resolve_in_insertion_order() {
        let mut catalog = Catalog::new();
        let kit = catalog.add_paint_kit(1234, "Fade", 0.0, 0.08);
        let first = catalog.add_skin(EconRarity::Pink, WeaponId::Ak47, kit, "ak.png");
        let second = catalog.add_graffiti(222, "Smiley", EconRarity::Blue, "g.png");

        assert_eq!(first.raw(), 0);
        assert_eq!(second.raw(), 1);
        assert_eq!(catalog.items().len(), 2);
        assert!(catalog.item(first).is_skin());
        assert!(catalog.item(second).is_graffiti());
    }

    #[test]
    fn test_kit_resolution_matches_category() {
        let mut catalog = Catalog::new();
        let kit = catalog.add_paint_kit(7, "Case Hardened", 0.0, 1.0);
        let skin = catalog.add_skin(EconRarity::Red, WeaponId::Karambit, kit, "");
        let patch = catalog.add_patch(111, "Flag", EconRarity::Grey, "");

        let skin_item = catalog.item(skin);
        assert_eq!(catalog.paint_kit(skin_item).map(|k| k.id), Some(7));
        assert!(catalog.patch_kit(skin_item).is_none());

        let patch_item = catalog.item(patch);
        assert_eq!(catalog.patch_kit(patch_item).map(|k| k.id), Some(111));
        assert!(catalog.paint_kit(patch_item).is_none());
    }

    #[test]
    fn test_music_rarity_is_pinned_blue() {
        let mut catalog = Catalog::new();
        let music = catalog.add_music(3, "Anthem", "m.png");
        assert_eq!(catalog.item(music).rarity(), EconRarity::Blue);
    }

    #[test]
    fn test_vanilla_rarities_are_pinned() {
        let mut catalog = Catalog::new();
        let knife = catalog.add_vanilla_knife(WeaponId::M9Bayonet, "");
        let skin = catalog.add_vanilla_skin(WeaponId::Glock, "");
        assert_eq!(catalog.item(knife).rarity(), EconRarity::Gold);
        assert_eq!(catalog.item(skin).rarity(), EconRarity::Default);
    }

    #[test]
    #[should_panic(expected = "wear_min")]
    fn test_inverted_wear_range_panics() {
        let mut catalog = Catalog::new();
        let _ = catalog.add_paint_kit(1, "Broken", 0.5, 0.1);
    }

    #[test]
    #[should_panic(expected = "references an item")]
    fn test_container_spec_with_foreign_index_panics() {
        let mut catalog = Catalog::new();
        let _ = catalog.add_container_spec(ContainerSpec::new(vec![ItemIndex(5)]));
    }

    #[test]
    fn test_case_round_trip_through_spec() {
        let mut catalog = Catalog::new();
        let kit = catalog.add_paint_kit(44, "Asiimov", 0.1, 1.0);
        let skin = catalog.add_skin(EconRarity::Red, WeaponId::Awp, kit, "");
        let spec = catalog.add_container_spec(
            ContainerSpec::new(vec![skin]).with_tournament_year(2019),
        );
        let case = catalog.add_case(EconRarity::Red, WeaponId::CS20Case, spec, "");

        let resolved = catalog
            .container_spec(catalog.item(case))
            .expect("case resolves its spec");
        assert_eq!(resolved.entries, vec![skin]);
        assert_eq!(resolved.tournament_year, Some(2019));
    }
}
