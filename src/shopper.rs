use crate::grocery::{Cereal, Fruit, Grocery};

/// Finds fruits in the market.
pub fn look_for_fruits(fruits: &[Fruit]) -> Vec<String> {
    fruits.iter().map(|it| format!("Found {}", it.name())).collect()
}

/// Finds cereal in the market.
pub fn look_for_cereal(cereal: &[Cereal]) -> Vec<String> {
    cereal.iter().map(|it| format!("Found {}", it.name())).collect()
}

/// Finds any grocery in the market, one `"Found <name>"` line per item, in order.
///
/// The `Grocery` bound guarantees every item has a name, so there is no
/// failure case to handle here.
pub fn look_for_grocery<T: Grocery>(groceries: &[T]) -> Vec<String> {
    groceries
        .iter()
        .map(|it| format!("Found {}", it.name()))
        .collect()
}
