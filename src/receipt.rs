use crate::grocery::{Cereal, Grocery};
use crate::shopper::look_for_grocery;
use crate::stock_clerk::StockClerk;
use serde::Serialize;
use tracing::info;

// =============================================================================
// Checkout
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub lines: Vec<String>,
    pub item_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_calories: Option<u32>,
}

impl Receipt {
    /// Unstacks everything the clerk holds, top item first.
    pub fn checkout<T: Grocery>(clerk: StockClerk<T>) -> Self {
        let unstacked: Vec<T> = clerk.into_iter().collect();
        let lines = look_for_grocery(&unstacked);
        let item_count = lines.len();
        info!(item_count, "checked out");

        Receipt {
            lines,
            item_count,
            total_calories: None,
        }
    }

    pub fn with_calories(mut self, calories: u32) -> Self {
        self.total_calories = Some(calories);
        self
    }

    pub fn total_calories(cereals: &[Cereal]) -> u32 {
        cereals
            .iter()
            .fold(0u32, |total, c| total.saturating_add(c.calories()))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grocery::Fruit;

    #[test]
    fn test_checkout_in_pop_order() {
        let clerk: StockClerk<Cereal> = vec![
            Cereal::new("Pops", 100),
            Cereal::new("Lucky Charms", 200),
            Cereal::new("Great Value", 50),
        ]
        .into_iter()
        .collect();

        let receipt = Receipt::checkout(clerk);
        assert_eq!(
            receipt.lines,
            vec!["Found Great Value", "Found Lucky Charms", "Found Pops"]
        );
        assert_eq!(receipt.item_count, 3);
    }

    #[test]
    fn test_checkout_lines_come_from_lookup() {
        let fruits = vec![Fruit::new("Apples"), Fruit::new("Bananas")];
        let clerk: StockClerk<Fruit> = fruits.iter().cloned().collect();

        let mut unstacked = fruits.clone();
        unstacked.reverse();
        assert_eq!(
            Receipt::checkout(clerk).lines,
            look_for_grocery(&unstacked)
        );
    }

    #[test]
    fn test_checkout_empty_clerk() {
        let receipt = Receipt::checkout(StockClerk::<Fruit>::new());
        assert!(receipt.lines.is_empty());
        assert_eq!(receipt.item_count, 0);
    }

    #[test]
    fn test_total_calories() {
        let cereals = vec![Cereal::new("Pops", 100), Cereal::new("Lucky Charms", 200)];
        assert_eq!(Receipt::total_calories(&cereals), 300);
        assert_eq!(Receipt::total_calories(&[]), 0);
    }

    #[test]
    fn test_total_calories_saturates() {
        let cereals = vec![Cereal::new("Sugar Bomb", u32::MAX), Cereal::new("Pops", 100)];
        assert_eq!(Receipt::total_calories(&cereals), u32::MAX);
    }

    #[test]
    fn test_to_json() {
        let mut clerk = StockClerk::new();
        clerk.push(Fruit::new("Apples"));

        let json = Receipt::checkout(clerk).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["item_count"], 1);
        assert_eq!(value["lines"][0], "Found Apples");
        assert!(value.get("total_calories").is_none());
    }

    #[test]
    fn test_to_json_with_calories() {
        let cereals = vec![Cereal::new("Pops", 100), Cereal::new("Great Value", 50)];
        let total = Receipt::total_calories(&cereals);
        let clerk: StockClerk<Cereal> = cereals.into_iter().collect();

        let receipt = Receipt::checkout(clerk).with_calories(total);
        assert_eq!(receipt.total_calories, Some(150));

        let value: serde_json::Value = serde_json::from_str(&receipt.to_json().unwrap()).unwrap();
        assert_eq!(value["total_calories"], 150);
        assert_eq!(value["item_count"], 2);
    }
}
