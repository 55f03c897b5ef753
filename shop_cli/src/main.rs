//! shop_cli - Generate a shop from the bundled catalogs and print it
//!
//! Usage:
//!   shop_cli [--seed <seed>] [--json]
//!
//! With a seed the whole shop is reproducible; without one each run
//! differs. --json emits the full records instead of the text listing.

use serde::Serialize;
use shop_core::prelude::*;
use shop_core::shop::generate_unique_pool;
use std::env;

/// Everything one run produces
#[derive(Serialize)]
struct ShopOutput {
    details: shop_core::ShopDetails,
    context: ShopContext,
    stock: Vec<ShopItem>,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut seed = String::new();
    let mut as_json = false;
    let mut unique_pool = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].clone();
                    i += 1;
                }
            }
            "--json" => as_json = true,
            "--all" => unique_pool = true,
            other => eprintln!("ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    let catalog = default_catalog();
    let srd = default_srd_catalog();
    let context = ShopContext::default();
    let mut rng = ShopRng::from_seed(&seed);

    let mut details = shop_core::ShopDetails::default();
    generate_shop_details(&mut details, &srd, &mut rng);

    let mut stock = Vec::new();

    if unique_pool {
        stock.extend(generate_unique_pool(
            &[],
            &srd,
            &catalog.pricing,
            &context,
            &mut rng,
        ));
    } else {
        let build_rows = [
            BuildRow::any(2, Rarity::Common),
            BuildRow::any(2, Rarity::Uncommon),
            BuildRow::any(1, Rarity::Rare),
        ];
        stock.extend(generate_items(&build_rows, &catalog, &mut rng));

        let stock_rows = [
            StockRow {
                qty: 3,
                tag: String::new(),
                rarity: None,
            },
            StockRow {
                qty: 2,
                tag: "consumable".to_string(),
                rarity: None,
            },
        ];
        stock.extend(generate_shop_inventory(
            &stock_rows,
            &srd,
            &catalog.pricing,
            &context,
            StockMode::Random,
            &mut rng,
        ));
    }

    let output = ShopOutput {
        details,
        context,
        stock,
    };

    if as_json {
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("failed to serialize shop: {}", err),
        }
        return;
    }

    print_shop(&output);
}

fn print_shop(output: &ShopOutput) {
    println!("{}", "=".repeat(60));
    println!("  {}", output.details.shop_name());
    println!(
        "  {} ({}), {}",
        output.details.merchant_name(),
        output.details.merchant_race,
        output.details.merchant_personality
    );
    println!(
        "  wealth: {} / law: {}",
        output.context.wealth, output.context.law
    );
    println!("{}", "=".repeat(60));

    for item in &output.stock {
        println!("\n  {} [{}] - {}", item.name, item.rarity.label(), format_gp(item.price_gp));

        if let Some(ref damage) = item.damage {
            println!("    Damage: {}", damage.range_label());
            for part in &damage.parts {
                let counted = if part.include_in_range { "" } else { " (not counted)" };
                println!(
                    "      {} {}\u{2013}{} {}{}",
                    part.label, part.add_min, part.add_max, part.damage_type, counted
                );
            }
        }
        for effect in &item.effects {
            if !effect.rules_text.is_empty() {
                println!("    {}", effect.rules_text);
            }
        }
        if let Some(ref srd) = item.srd {
            if !srd.property_description.is_empty() {
                println!("    {}", srd.property_description);
            }
        }
        for line in &item.shop_log {
            println!("    * {}", line);
        }
    }
    println!();
}

fn format_gp(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0} gp", price)
    } else {
        format!("{:.2} gp", price)
    }
}
