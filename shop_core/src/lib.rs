//! shop_core - Core shop generation library
//!
//! This library provides:
//! - Dice/Range parsing: compact "NdM" notation into min/max ranges
//! - Damage aggregation: base weapon + effect contributions with an
//!   itemized breakdown
//! - Rarity pricing: log-space interpolation over a power budget with
//!   bounded multiplicative noise
//! - Seeded RNG: reproducible xorshift32 stream from a seed string
//! - Catalog loading: TOML rule tables for bases, effects, pricing and
//!   the fixed reference (SRD) shop

pub mod catalog;
pub mod coerce;
pub mod damage;
pub mod generator;
pub mod prelude;
pub mod pricing;
pub mod rng;
pub mod shop;
pub mod types;

// Re-export core types for convenience
pub use catalog::{default_catalog, load_catalog, parse_catalog, BaseWeapon, Catalog, CatalogError, Effect};
pub use damage::{compute_damage, parse_dice_notation, DamageBreakdown, DamagePart, DiceRange};
pub use generator::{generate_items, BuildRow};
pub use pricing::{compute_price, PricingInput, PricingResult, PricingTables};
pub use rng::ShopRng;
pub use shop::{
    default_srd_catalog, generate_shop_details, generate_shop_inventory, ShopContext, ShopDetails,
    SrdCatalog, SrdItem, StockMode, StockRow,
};
pub use types::{ItemMode, Rarity, ShopItem};
