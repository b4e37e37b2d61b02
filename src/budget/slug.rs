//! The composite element id that ties a rendered list row back to its record.
//!
//! Every row is rendered with an element id like `inc-0` or `exp-3`; the
//! delete button sends that id back, and parsing it here recovers the
//! `(category, id)` pair for the core.

use std::{fmt, str::FromStr};

use crate::{Error, ledger::Category};

/// A `<category-code>-<id>` pair, e.g. `exp-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSlug {
    /// The category encoded in the short code prefix.
    pub category: Category,
    /// The record id within that category.
    pub id: u32,
}

impl ItemSlug {
    /// The slug for a record in `category` with `id`.
    pub fn new(category: Category, id: u32) -> Self {
        Self { category, id }
    }
}

impl fmt::Display for ItemSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category.code(), self.id)
    }
}

impl FromStr for ItemSlug {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let parse = |text: &str| {
            let (code, id) = text.split_once('-')?;
            let category = Category::from_code(code)?;
            let id = id.parse::<u32>().ok()?;

            Some(ItemSlug { category, id })
        };

        parse(text).ok_or_else(|| Error::InvalidItemSlug(text.to_owned()))
    }
}

#[cfg(test)]
mod slug_tests {
    use std::str::FromStr;

    use crate::{Error, ledger::Category};

    use super::ItemSlug;

    #[test]
    fn slugs_display_as_code_dash_id() {
        assert_eq!(ItemSlug::new(Category::Income, 0).to_string(), "inc-0");
        assert_eq!(ItemSlug::new(Category::Expense, 3).to_string(), "exp-3");
    }

    #[test]
    fn slugs_parse_back_from_display_form() {
        let slug = ItemSlug::from_str("exp-3").unwrap();

        assert_eq!(slug, ItemSlug::new(Category::Expense, 3));
    }

    #[test]
    fn malformed_slugs_are_recoverable_errors() {
        for text in ["exp", "foo-3", "exp-three", "exp--1", "", "-"] {
            assert_eq!(
                ItemSlug::from_str(text),
                Err(Error::InvalidItemSlug(text.to_owned())),
                "{text:?} should not parse"
            );
        }
    }
}
