//! Walks through the grocery trip: concrete lookups, the generic lookup,
//! then a generic stock clerk and checkout.
//!
//! Run with: cargo run --bin grocery_run -- [LIST_FILE] [--json]

use colored::Colorize;
use grocery_generics::{
    logging, look_for_cereal, look_for_fruits, look_for_grocery, Cereal, ClerkError, Fruit,
    Grocery, Receipt, ShoppingList, ShoppingListError, StockClerk,
};
use std::error::Error;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use thiserror::Error;

const USAGE: &str = "usage: grocery_run [LIST_FILE] [--json]";

// =============================================================================
// Arguments
// =============================================================================

#[derive(Error, Debug, PartialEq, Eq)]
enum ArgsError {
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("unexpected argument '{0}', a list file was already given")]
    UnexpectedArgument(String),
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    list: Option<PathBuf>,
    json: bool,
    help: bool,
}

impl Args {
    fn parse_from(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Args::default();
        for arg in args {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "-h" | "--help" => parsed.help = true,
                flag if flag.starts_with('-') => {
                    return Err(ArgsError::UnknownFlag(flag.to_string()))
                }
                extra if parsed.list.is_some() => {
                    return Err(ArgsError::UnexpectedArgument(extra.to_string()))
                }
                path => parsed.list = Some(PathBuf::from(path)),
            }
        }
        Ok(parsed)
    }
}

// =============================================================================
// Narration
// =============================================================================

/// Narration goes to stdout, or to stderr when stdout is reserved for JSON.
struct Narrator {
    json: bool,
}

impl Narrator {
    fn say(&self, line: impl Display) {
        if self.json {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    fn section(&self, title: &str) {
        self.say(format!("\n{}", format!("=== {} ===", title).bold().cyan()));
    }
}

fn load_list(path: Option<&Path>) -> Result<ShoppingList, ShoppingListError> {
    match path {
        Some(path) => ShoppingList::from_file(path),
        None => Ok(ShoppingList::default()),
    }
}

/// A grape and a box of flakes in the same basket.
fn mixed_basket_lines() -> Vec<String> {
    let grapes = Fruit::new("Grapes");
    let flakes = Cereal::new("Frosted Flakes", 200);
    let basket: Vec<&dyn Grocery> = vec![&grapes, &flakes];
    look_for_grocery(&basket)
}

fn render_receipt(receipt: &Receipt, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return receipt.to_json();
    }

    let mut out: Vec<String> = receipt.lines.iter().map(|line| format!("  {}", line)).collect();
    let summary = match receipt.total_calories {
        Some(calories) => format!(
            "✓ {} item(s), {} calories of cereal",
            receipt.item_count, calories
        ),
        None => format!("✓ {} item(s)", receipt.item_count),
    };
    out.push(summary.green().to_string());
    Ok(out.join("\n"))
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = match Args::parse_from(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}\n{}", format!("✗ {}", err).red(), USAGE);
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }
    logging::init();

    let list = match load_list(args.list.as_deref()) {
        Ok(list) => list,
        Err(err) => {
            eprintln!("{}", format!("✗ {}", err).red());
            std::process::exit(1);
        }
    };
    let narrator = Narrator { json: args.json };

    narrator.section("Buying Groceries");
    narrator.say(format!("{:?}", look_for_fruits(&list.fruits)));
    narrator.say(format!("{:?}", look_for_cereal(&list.cereals)));

    narrator.section("Generic Functions");
    // Usage: one function for every type that implements Grocery.
    narrator.say(format!("{:?}", look_for_grocery(&list.fruits)));
    narrator.say(format!("{:?}", look_for_grocery(&list.cereals)));
    narrator.say(format!("{:?}", mixed_basket_lines()));

    narrator.section("Generic Structs");
    let mut clerk: StockClerk<Cereal> = StockClerk::new();
    for cereal in &list.cereals {
        clerk.push(cereal.clone());
    }
    narrator.say("The items on the stack are:");
    narrator.say(format!("{:?}", clerk.snapshot()));

    match clerk.pop() {
        Ok(removed) => narrator.say(format!("\nThe clerk removed\n{}", removed)),
        Err(err) => narrator.say(format!("\n{}", err.to_string().yellow())),
    }
    narrator.say("\nThe items on the stack are:");
    narrator.say(format!("{:?}", clerk.snapshot()));

    let num_clerk: StockClerk<i32> = (1..=4).collect();
    narrator.say("\nThe numbers on the stack are:");
    narrator.say(format!("{:?}", num_clerk.snapshot()));

    let mut empty_clerk: StockClerk<i32> = StockClerk::new();
    if let Err(ClerkError::EmptyStack) = empty_clerk.pop() {
        narrator.say(format!(
            "\n{}",
            "An empty stack refuses to give anything back".yellow()
        ));
    }

    narrator.section("Checkout");
    let calories = Receipt::total_calories(&clerk.snapshot());
    let receipt = Receipt::checkout(clerk).with_calories(calories);
    println!("{}", render_receipt(&receipt, args.json)?);

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
