//! Item identifiers and the fixed catalog rounds are drawn from

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameResult, QuizError};
use crate::game::round::CHOICES_PER_ROUND;

/// Countries shipped with the game, in catalog order
pub const REFERENCE_ITEMS: [&str; 11] = [
    "Estonia", "France", "Germany", "Ireland", "Italy", "Nigeria", "Poland", "Russia", "Spain",
    "UK", "US",
];

/// Opaque identifier for a candidate item, e.g. a country whose flag is shown
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an identifier; surrounding whitespace is trimmed and blanks are rejected
    pub fn new(name: impl AsRef<str>) -> GameResult<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(QuizError::Catalog {
                message: "Item names must not be blank".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered, deduplicated universe of items available for rounds.
///
/// A catalog always holds at least [`CHOICES_PER_ROUND`] items so that every
/// round can be filled with distinct choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    items: Vec<ItemId>,
}

impl Catalog {
    /// Build a catalog from item names, preserving their order
    pub fn new<I, S>(names: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for name in names {
            let item = ItemId::new(name)?;
            if !seen.insert(item.clone()) {
                return Err(QuizError::Catalog {
                    message: format!("Duplicate item in catalog: {}", item),
                });
            }
            items.push(item);
        }

        if items.len() < CHOICES_PER_ROUND {
            return Err(QuizError::Catalog {
                message: format!(
                    "Catalog needs at least {} items, got {}",
                    CHOICES_PER_ROUND,
                    items.len()
                ),
            });
        }

        Ok(Self { items })
    }

    /// The eleven-country catalog the game ships with
    pub fn reference() -> Self {
        Self {
            items: REFERENCE_ITEMS
                .iter()
                .map(|name| ItemId(name.to_string()))
                .collect(),
        }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed catalog; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &ItemId) -> bool {
        self.items.contains(item)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}
