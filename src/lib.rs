//! # Grocery Generics
//!
//! Generic functions and generic structs, told through a trip to the supermarket.
//!
//! ## Groceries
//! - `Grocery` trait: anything with a readable name
//! - `Fruit` and `Cereal` value types
//!
//! ## Generic Functions
//! - `look_for_grocery<T: Grocery>`: one lookup for every grocery type
//! - `look_for_fruits` / `look_for_cereal`: the per-type versions it replaces
//!
//! ## Generic Structs
//! - `StockClerk<T>`: a LIFO stack over any item type
//! - `Receipt`: checkout by draining a clerk
//!
//! ## Shopping Lists
//! - `ShoppingList`: groceries loaded from TOML or JSON

pub mod grocery;
pub mod logging;
pub mod receipt;
pub mod shopper;
pub mod shopping_list;
pub mod stock_clerk;

pub use grocery::{Cereal, Fruit, Grocery};
pub use receipt::Receipt;
pub use shopper::{look_for_cereal, look_for_fruits, look_for_grocery};
pub use shopping_list::{ShoppingList, ShoppingListError};
pub use stock_clerk::{ClerkError, StockClerk};
