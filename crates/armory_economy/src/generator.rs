//! # Container Opening Generator
//!
//! Weighted-rarity item generation from container content tables.
//!
//! All randomness flows through the injected `Rng`, so a seeded run
//! replays exactly. The draw is a single weighted selection over the
//! standard pool where each rarity tier present carries its aggregate
//! weight from the config, realized as a weighted tier draw followed
//! by a uniform pick within the tier. Integer weights only; the two
//! stages induce the same distribution as drawing entries directly.

use std::collections::BTreeMap;

use armory_items::{Catalog, ContainerSpec, EconRarity, Item, ItemIndex};
use rand::Rng;

use crate::calendar::{end_of_year_timestamp, start_of_year_timestamp};
use crate::config::{GeneratorConfig, BP_SCALE};
use crate::error::{EconomyError, EconomyResult};

/// Randomized per-instance state attached to a generated item.
///
/// The default value is the canonical baseline for categories with no
/// randomized component: no wear, no seed, no StatTrak, no souvenir
/// timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemDynamicData {
    /// Finish wear in the paint kit's `[wear_min, wear_max]`.
    pub wear: Option<f32>,
    /// Paint seed in `1..=1000`.
    pub paint_seed: Option<u32>,
    /// StatTrak kill counter, `Some(0)` when the roll hits.
    pub stat_trak: Option<u32>,
    /// UTC timestamp inside the container's tournament year.
    pub souvenir_timestamp: Option<i64>,
}

/// Outcome of a container opening.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratedItem {
    /// The drawn catalog item.
    pub item: ItemIndex,
    /// Its randomized per-instance state.
    pub dynamic: ItemDynamicData,
}

/// Procedural generator over one catalog.
#[derive(Clone, Debug)]
pub struct ItemGenerator<'a> {
    catalog: &'a Catalog,
    config: GeneratorConfig,
}

impl<'a> ItemGenerator<'a> {
    /// Creates a generator with an explicit configuration.
    #[must_use]
    pub const fn new(catalog: &'a Catalog, config: GeneratorConfig) -> Self {
        Self { catalog, config }
    }

    /// Creates a generator with the baseline configuration.
    #[must_use]
    pub fn with_default_config(catalog: &'a Catalog) -> Self {
        Self::new(catalog, GeneratorConfig::default())
    }

    /// The active configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Opens a container and generates one item instance.
    ///
    /// The rare special pool, when present, is tried first with an
    /// independent basis point draw; on a miss the standard pool is
    /// drawn by tier weight. Entries whose tier has weight 0 are never
    /// drawn.
    ///
    /// # Errors
    ///
    /// - [`EconomyError::NotAContainer`] if `container` is not a case.
    /// - [`EconomyError::EmptyContainer`] if the standard pool is
    ///   empty or carries no drawable weight.
    pub fn open_container<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        container: &Item,
    ) -> EconomyResult<GeneratedItem> {
        let spec = self
            .catalog
            .container_spec(container)
            .ok_or(EconomyError::NotAContainer {
                weapon_id: container.weapon_id(),
            })?;

        if spec.entries.is_empty() {
            return Err(EconomyError::EmptyContainer);
        }

        let index = if self.roll_rare_special(rng, spec) {
            let pick = rng.gen_range(0..spec.rare_special_entries.len());
            tracing::debug!(entry = pick, "rare special draw hit");
            spec.rare_special_entries[pick]
        } else {
            self.draw_standard(rng, spec)?
        };

        let dynamic = self.roll_dynamic_data(rng, index, spec);
        Ok(GeneratedItem { item: index, dynamic })
    }

    /// Canonical baseline dynamic data for an item.
    ///
    /// Categories without a randomized component share one zeroed
    /// baseline; nothing here consults the RNG.
    #[must_use]
    pub fn default_dynamic_data(&self, item: &Item) -> ItemDynamicData {
        tracing::trace!(weapon_id = ?item.weapon_id(), "default dynamic data");
        ItemDynamicData::default()
    }

    fn roll_rare_special<R: Rng + ?Sized>(&self, rng: &mut R, spec: &ContainerSpec) -> bool {
        if spec.rare_special_entries.is_empty() || self.config.rare_special_chance_bp == 0 {
            return false;
        }
        rng.gen_range(0..BP_SCALE) < self.config.rare_special_chance_bp
    }

    fn draw_standard<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        spec: &ContainerSpec,
    ) -> EconomyResult<ItemIndex> {
        // Tier pools keyed by rarity; BTreeMap iteration order keeps
        // the cumulative walk deterministic.
        let mut tiers: BTreeMap<EconRarity, Vec<ItemIndex>> = BTreeMap::new();
        for &entry in &spec.entries {
            let rarity = self.catalog.item(entry).rarity();
            tiers.entry(rarity).or_default().push(entry);
        }

        let total: u64 = tiers
            .keys()
            .map(|&rarity| u64::from(self.config.tier_weight(rarity)))
            .sum();
        if total == 0 {
            return Err(EconomyError::EmptyContainer);
        }

        let roll = rng.gen_range(0..total);
        let mut cumulative = 0u64;
        for (&rarity, pool) in &tiers {
            cumulative += u64::from(self.config.tier_weight(rarity));
            if roll < cumulative {
                tracing::debug!(?rarity, pool = pool.len(), "standard tier draw");
                return Ok(pool[rng.gen_range(0..pool.len())]);
            }
        }
        unreachable!("roll {roll} below total weight {total}")
    }

    fn roll_dynamic_data<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        index: ItemIndex,
        spec: &ContainerSpec,
    ) -> ItemDynamicData {
        let item = self.catalog.item(index);
        let mut dynamic = ItemDynamicData::default();

        if let Some(kit) = self.catalog.paint_kit(item) {
            dynamic.wear = Some(rng.gen_range(kit.wear_min..=kit.wear_max));
            dynamic.paint_seed = Some(rng.gen_range(1..=1000));
            // Souvenir finishes never carry a StatTrak counter.
            if spec.tournament_year.is_none()
                && self.config.stat_trak_chance_bp > 0
                && rng.gen_range(0..BP_SCALE) < self.config.stat_trak_chance_bp
            {
                dynamic.stat_trak = Some(0);
            }
        }

        if let Some(year) = spec.tournament_year {
            let start = start_of_year_timestamp(year);
            let end = end_of_year_timestamp(year);
            dynamic.souvenir_timestamp = Some(rng.gen_range(start..=end));
        }

        dynamic
    }
}
