use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything a shopper can look for on the shelves.
pub trait Grocery {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    name: String,
}

impl Fruit {
    pub fn new(name: impl Into<String>) -> Self {
        Fruit { name: name.into() }
    }
}

impl Grocery for Fruit {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Fruit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cereal {
    name: String,
    calories: u32,
}

impl Cereal {
    pub fn new(name: impl Into<String>, calories: u32) -> Self {
        Cereal {
            name: name.into(),
            calories,
        }
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }
}

impl Grocery for Cereal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Cereal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cal)", self.name, self.calories)
    }
}

// Shared references to groceries are groceries too, so `&[&Fruit]` works with the lookups.
impl<G: Grocery + ?Sized> Grocery for &G {
    fn name(&self) -> &str {
        (**self).name()
    }
}
