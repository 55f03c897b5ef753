//! Reference-catalog shop stocking - wealth/law adjusted pricing
//!
//! Items drawn from the fixed reference list carry a typical price; the
//! shop context (settlement wealth, law level) and a small variance turn
//! that into a shelf price. Items without a typical price fall back to the
//! rarity pricing model. "Unique pool" mode lists one of each candidate at
//! its unmodified price.

use crate::coerce::{num_or, LooseNum};
use crate::pricing::{compute_price, round_price, PricingBreakdown, PricingInput, PricingTables};
use crate::rng::ShopRng;
use crate::types::{ItemInternals, ItemMode, Rarity, ShopItem};
use serde::{Deserialize, Serialize};

/// An item in the fixed reference catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SrdItem {
    pub name: String,
    #[serde(default)]
    pub property_description: String,
    #[serde(default)]
    pub rarity_key: Option<Rarity>,
    /// Fixed book price; absent or zero means "derive from rarity"
    #[serde(default)]
    pub typical_price_gp: Option<LooseNum>,
    /// Semantic tags, separated by ";" or ","
    #[serde(default)]
    pub tags: String,
    /// "legal", "restricted" or "illegal"
    #[serde(default)]
    pub legality: Option<String>,
    /// Budget weight used by the procedural fallback
    #[serde(default)]
    pub shop_weight_base: Option<LooseNum>,
}

/// Price multiplier for a settlement wealth level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyRow {
    pub wealth_level: String,
    #[serde(default)]
    pub price_mult_typical: Option<LooseNum>,
}

/// Markup multipliers for goods the law frowns on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LawRow {
    pub law_level: String,
    #[serde(default)]
    pub restricted_markup: Option<LooseNum>,
    #[serde(default)]
    pub illegal_markup: Option<LooseNum>,
}

/// One row of shop/merchant name parts; any column may be empty
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamePartsRow {
    #[serde(default)]
    pub shop_name_prefix: String,
    #[serde(default)]
    pub shop_name_noun: String,
    #[serde(default)]
    pub shop_name_suffix: String,
    #[serde(default)]
    pub shop_type: String,
    #[serde(default)]
    pub merchant_first_name: String,
    #[serde(default)]
    pub merchant_last_name: String,
    #[serde(default)]
    pub merchant_race: String,
    #[serde(default)]
    pub merchant_personality: String,
}

/// The reference-catalog tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SrdCatalog {
    #[serde(default)]
    pub items: Vec<SrdItem>,
    #[serde(default)]
    pub economy: Vec<EconomyRow>,
    #[serde(default)]
    pub law: Vec<LawRow>,
    #[serde(default)]
    pub name_parts: Vec<NamePartsRow>,
}

/// Where the shop sits: settlement wealth and how strict the law is
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopContext {
    pub wealth: String,
    pub law: String,
}

impl Default for ShopContext {
    fn default() -> Self {
        ShopContext {
            wealth: "standard".to_string(),
            law: "law_abiding".to_string(),
        }
    }
}

/// How reference items are stocked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockMode {
    /// Random picks, wealth/law/variance applied
    Random,
    /// One of each candidate at its unmodified price
    Unique,
}

/// How a reference item's price was computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcMethod {
    SrdFixedExact,
    SrdFixed,
    ProceduralFallbackUnique,
    ProceduralFallbackModified,
}

/// Audit record for one reference-item pricing call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SrdPriceAudit {
    pub calc_method: CalcMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economy_mult: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub law_markup: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingBreakdown>,
    pub final_price: f64,
}

/// A shop's name and merchant, generated field by field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopDetails {
    pub name_prefix: String,
    pub name_noun: String,
    pub name_suffix: String,
    pub shop_type: String,
    pub merchant_first: String,
    pub merchant_last: String,
    pub merchant_race: String,
    pub merchant_personality: String,
}

impl ShopDetails {
    /// Assembled shop name, skipping empty parts
    pub fn shop_name(&self) -> String {
        [
            self.name_prefix.as_str(),
            self.name_noun.as_str(),
            self.name_suffix.as_str(),
        ]
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Merchant's full name
    pub fn merchant_name(&self) -> String {
        [self.merchant_first.as_str(), self.merchant_last.as_str()]
            .iter()
            .filter(|p| !p.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One line of a reference stock order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockRow {
    pub qty: u32,
    /// Tag substring filter; empty means no filter
    #[serde(default)]
    pub tag: String,
    /// Exact rarity filter
    #[serde(default)]
    pub rarity: Option<Rarity>,
}

fn norm(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Price one reference item under a shop context.
fn calculate_srd_price(
    item: &SrdItem,
    context: &ShopContext,
    mode: StockMode,
    srd: &SrdCatalog,
    pricing: &PricingTables,
    rng: &mut ShopRng,
) -> (f64, Vec<String>, SrdPriceAudit) {
    let mut logs = Vec::new();
    let base_price = num_or(item.typical_price_gp.as_ref(), 0.0);
    let unique_mode = mode == StockMode::Unique;

    let econ_row = srd
        .economy
        .iter()
        .find(|r| norm(&r.wealth_level) == norm(&context.wealth));
    let econ_mult = num_or(econ_row.and_then(|r| r.price_mult_typical.as_ref()), 1.0);

    let law_row = srd
        .law
        .iter()
        .find(|r| norm(&r.law_level) == norm(&context.law));
    let legality = norm(item.legality.as_deref().unwrap_or(""));
    // Markups are stored as absolute multipliers (e.g. 1.2); convert to the
    // additive part and never let missing data discount the item
    let mut law_markup = match legality.as_str() {
        "restricted" => num_or(law_row.and_then(|r| r.restricted_markup.as_ref()), 0.0) - 1.0,
        "illegal" => num_or(law_row.and_then(|r| r.illegal_markup.as_ref()), 0.0) - 1.0,
        _ => 0.0,
    };
    if law_markup < 0.0 {
        law_markup = 0.0;
    }

    let mut final_price;
    let audit;

    if base_price > 0.0 {
        logs.push(format!("Base: {} gp (SRD)", base_price));

        if unique_mode {
            final_price = base_price;
            logs.push("List Mode: Exact DB price used.".to_string());
            audit = SrdPriceAudit {
                calc_method: CalcMethod::SrdFixedExact,
                base_price: Some(base_price),
                economy_mult: None,
                law_markup: None,
                variance: None,
                pricing: None,
                final_price,
            };
        } else {
            if econ_mult != 1.0 {
                logs.push(format!("Economy ({}): x{}", context.wealth, econ_mult));
            }
            if law_markup > 0.0 {
                logs.push(format!(
                    "Law Markup ({}): +{}%",
                    legality,
                    (law_markup * 100.0).round()
                ));
            }

            let variance = rng.uniform(0.9, 1.1);
            final_price = base_price * econ_mult * (1.0 + law_markup) * variance;
            audit = SrdPriceAudit {
                calc_method: CalcMethod::SrdFixed,
                base_price: Some(base_price),
                economy_mult: Some(econ_mult),
                law_markup: Some(law_markup),
                variance: Some(variance),
                pricing: None,
                final_price,
            };
        }
    } else {
        // No book price: derive from rarity, then still respect the context
        let base_weight = match num_or(item.shop_weight_base.as_ref(), 1.0) {
            w if w == 0.0 => 1.0,
            w => w,
        };
        let input = PricingInput {
            rarity: item.rarity_key.or(Some(Rarity::Common)),
            target_rarity: None,
            base_weight,
            capacity_used: 0.0,
        };
        let derived = compute_price(&input, pricing, rng);
        logs.push(format!(
            "Price derived from rarity ({})",
            input.rarity.unwrap_or_default().key()
        ));

        if unique_mode {
            final_price = derived.price_gp;
            audit = SrdPriceAudit {
                calc_method: CalcMethod::ProceduralFallbackUnique,
                base_price: None,
                economy_mult: None,
                law_markup: None,
                variance: None,
                pricing: Some(derived.breakdown),
                final_price,
            };
        } else {
            if econ_mult != 1.0 {
                logs.push(format!("Economy ({}): x{}", context.wealth, econ_mult));
            }
            if law_markup > 0.0 {
                logs.push(format!(
                    "Law Markup ({}): +{}%",
                    legality,
                    (law_markup * 100.0).round()
                ));
            }
            final_price = derived.price_gp * econ_mult * (1.0 + law_markup);
            audit = SrdPriceAudit {
                calc_method: CalcMethod::ProceduralFallbackModified,
                base_price: None,
                economy_mult: Some(econ_mult),
                law_markup: Some(law_markup),
                variance: None,
                pricing: Some(derived.breakdown),
                final_price,
            };
        }
    }

    // Exact fixed prices pass through untouched; everything else rounds
    let exact_fixed = unique_mode && base_price > 0.0;
    if !exact_fixed {
        final_price = round_price(final_price);
    }

    let audit = SrdPriceAudit {
        final_price,
        ..audit
    };

    (final_price.max(0.01), logs, audit)
}

fn split_tags(tags: &str) -> Vec<String> {
    tags.split([';', ','])
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn stock_item(
    seq: usize,
    selected: &SrdItem,
    context: &ShopContext,
    mode: StockMode,
    srd: &SrdCatalog,
    pricing: &PricingTables,
    rng: &mut ShopRng,
) -> ShopItem {
    let (price, logs, audit) = calculate_srd_price(selected, context, mode, srd, pricing, rng);
    ShopItem {
        id: format!("srd-{}", seq),
        mode: ItemMode::Reference,
        name: selected.name.clone(),
        rarity: selected.rarity_key.unwrap_or_default(),
        price_gp: price,
        base: None,
        effects: Vec::new(),
        damage: None,
        srd: Some(selected.clone()),
        srd_tags: split_tags(&selected.tags),
        shop_log: logs,
        internals: ItemInternals {
            pricing: None,
            srd: Some(audit),
        },
    }
}

/// Stock a shop from the reference catalog according to a stock order.
pub fn generate_shop_inventory(
    rows: &[StockRow],
    srd: &SrdCatalog,
    pricing: &PricingTables,
    context: &ShopContext,
    mode: StockMode,
    rng: &mut ShopRng,
) -> Vec<ShopItem> {
    let mut items = Vec::new();

    for row in rows {
        if row.qty == 0 {
            continue;
        }

        let mut pool: Vec<&SrdItem> = srd.items.iter().collect();
        if !row.tag.is_empty() {
            let tag_filter = row.tag.to_lowercase();
            pool.retain(|item| item.tags.to_lowercase().contains(&tag_filter));
        }
        if let Some(rarity) = row.rarity {
            pool.retain(|item| item.rarity_key.unwrap_or_default() == rarity);
        }
        if pool.is_empty() {
            continue;
        }

        for _ in 0..row.qty {
            let selected = pool[rng.pick_index(pool.len())];
            let seq = items.len() + 1;
            items.push(stock_item(seq, selected, context, mode, srd, pricing, rng));
        }
    }

    items
}

/// Price one of each reference item whose tags match any of the given
/// filters (all items when no filters are given).
pub fn generate_unique_pool(
    tags: &[String],
    srd: &SrdCatalog,
    pricing: &PricingTables,
    context: &ShopContext,
    rng: &mut ShopRng,
) -> Vec<ShopItem> {
    let pool: Vec<&SrdItem> = srd
        .items
        .iter()
        .filter(|item| {
            if tags.is_empty() {
                return true;
            }
            let item_tags = item.tags.to_lowercase();
            tags.iter().any(|t| item_tags.contains(&t.to_lowercase()))
        })
        .collect();

    pool.into_iter()
        .enumerate()
        .map(|(i, selected)| {
            stock_item(
                i + 1,
                selected,
                context,
                StockMode::Unique,
                srd,
                pricing,
                rng,
            )
        })
        .collect()
}

/// Fill any unset shop/merchant naming fields from the name-parts table.
pub fn generate_shop_details(details: &mut ShopDetails, srd: &SrdCatalog, rng: &mut ShopRng) {
    fn pick(rows: &[NamePartsRow], field: fn(&NamePartsRow) -> &str, rng: &mut ShopRng) -> String {
        let options: Vec<&str> = rows.iter().map(field).filter(|v| !v.is_empty()).collect();
        if options.is_empty() {
            return String::new();
        }
        options[rng.pick_index(options.len())].to_string()
    }

    let rows = &srd.name_parts;
    if details.name_prefix.is_empty() {
        details.name_prefix = pick(rows, |r| &r.shop_name_prefix, rng);
    }
    if details.name_noun.is_empty() {
        details.name_noun = pick(rows, |r| &r.shop_name_noun, rng);
    }
    if details.name_suffix.is_empty() {
        details.name_suffix = pick(rows, |r| &r.shop_name_suffix, rng);
    }
    if details.shop_type.is_empty() {
        details.shop_type = pick(rows, |r| &r.shop_type, rng);
    }
    if details.merchant_first.is_empty() {
        details.merchant_first = pick(rows, |r| &r.merchant_first_name, rng);
    }
    if details.merchant_last.is_empty() {
        details.merchant_last = pick(rows, |r| &r.merchant_last_name, rng);
    }
    if details.merchant_race.is_empty() {
        details.merchant_race = pick(rows, |r| &r.merchant_race, rng);
    }
    if details.merchant_personality.is_empty() {
        details.merchant_personality = pick(rows, |r| &r.merchant_personality, rng);
    }
}

/// Load the reference catalog bundled with the library
pub fn default_srd_catalog() -> SrdCatalog {
    let toml = include_str!("../../config/srd_shop.toml");
    crate::catalog::parse_toml(toml).unwrap_or_default()
}
