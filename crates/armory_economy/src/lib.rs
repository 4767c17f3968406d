//! # ARMORY Economy System
//!
//! Procedural item generation for the ARMORY catalog.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness** - every draw goes through a caller-supplied `Rng`;
//!    a fixed seed replays a run bit for bit
//! 2. **Integer probabilities** - basis points (10000 = 100%) everywhere,
//!    no floating point in the draw path
//! 3. **External configuration** - tier weights and chances in TOML,
//!    loaded once at startup
//! 4. **Recoverable vs fatal** - bad openings are `Err`, broken invariants panic
//!
//! ## Example
//!
//! ```rust
//! use armory_economy::{GeneratorConfig, ItemGenerator};
//! use armory_items::{Catalog, ContainerSpec, EconRarity, WeaponId};
//! use rand::SeedableRng;
//!
//! let mut catalog = Catalog::new();
//! let kit = catalog.add_paint_kit(1234, "Fade", 0.0, 0.08);
//! let skin = catalog.add_skin(EconRarity::Blue, WeaponId::Famas, kit, "famas.png");
//! let spec = catalog.add_container_spec(ContainerSpec::new(vec![skin]));
//! let case = catalog.add_case(EconRarity::Red, WeaponId::CS20Case, spec, "case.png");
//!
//! let generator = ItemGenerator::with_default_config(&catalog);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let opened = generator.open_container(&mut rng, catalog.item(case)).unwrap();
//! assert_eq!(opened.item, skin);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod calendar;
pub mod config;
pub mod error;
pub mod generator;

pub use config::{GeneratorConfig, BP_SCALE};
pub use error::{EconomyError, EconomyResult};
pub use generator::{GeneratedItem, ItemDynamicData, ItemGenerator};
