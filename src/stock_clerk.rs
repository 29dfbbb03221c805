use std::iter::FromIterator;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClerkError {
    #[error("Can not remove items from an empty stack")]
    EmptyStack,
}

// =============================================================================
// Milestone 1: Generic stack with a caller-chosen item type
// =============================================================================

/// A stock clerk stacks items of one type in the warehouse, last in first out.
///
/// `T` carries no bounds: the clerk never looks inside the items it stacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockClerk<T> {
    items: Vec<T>,
}

impl<T> StockClerk<T> {
    pub fn new() -> Self {
        StockClerk { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        StockClerk {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Puts `item` on top of the stack and returns the number of stacked items.
    pub fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        let count = self.items.len();
        debug!(count, "stacked item");
        count
    }

    /// Takes the item off the top of the stack.
    ///
    /// An empty stack is left untouched and reported as [`ClerkError::EmptyStack`].
    pub fn pop(&mut self) -> Result<T, ClerkError> {
        match self.items.pop() {
            Some(item) => {
                debug!(count = self.items.len(), "removed item");
                Ok(item)
            }
            None => {
                debug!("attempted to remove an item from an empty stack");
                Err(ClerkError::EmptyStack)
            }
        }
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> StockClerk<T> {
    /// Copy of the stacked items, bottom first.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Default for StockClerk<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Milestone 2: Iterator integration
// =============================================================================

impl<T> FromIterator<T> for StockClerk<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut clerk = StockClerk::new();
        clerk.extend(iter);
        clerk
    }
}

impl<T> Extend<T> for StockClerk<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> IntoIterator for StockClerk<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { clerk: self }
    }
}

/// Unstacks a clerk, top item first.
pub struct IntoIter<T> {
    clerk: StockClerk<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.clerk.items.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.clerk.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

// =============================================================================
// Tests
// =============================================================================
