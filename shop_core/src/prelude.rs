//! Prelude module for convenient imports
//!
//! ```rust
//! use shop_core::prelude::*;
//! ```

// Core types
pub use crate::types::{ItemMode, Rarity, ShopItem};

// Damage system
pub use crate::damage::{compute_damage, parse_dice_notation, DamageBreakdown, DiceRange};

// Pricing
pub use crate::pricing::{compute_price, PricingInput, PricingResult};

// Generation
pub use crate::generator::{generate_items, BuildRow};
pub use crate::shop::{
    generate_shop_details, generate_shop_inventory, ShopContext, ShopDetails, StockMode, StockRow,
};

// RNG
pub use crate::rng::ShopRng;

// Catalogs
pub use crate::catalog::{default_catalog, Catalog};
pub use crate::shop::{default_srd_catalog, SrdCatalog};
