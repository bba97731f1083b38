//! Type-safe classification types for recipes
//!
//! The category set is closed: exactly three tags in a fixed display order.
//! The stored tag (`Display`/`EnumString`) and the human-readable label are
//! kept apart so the label can change without touching stored values.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Recipe category
///
/// Variant order is the display order of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Category {
    #[default]
    #[strum(serialize = "Appetizer")]
    Appetizer,
    #[strum(serialize = "Entree")]
    Entree,
    #[strum(serialize = "Dessert")]
    Dessert,
}

impl Category {
    /// Human-readable label shown in headers, rows and the selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Appetizer => "Appetizer",
            Self::Entree => "Entree",
            Self::Dessert => "Dessert",
        }
    }

    /// All categories in display order
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Next category in the selector, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Appetizer => Self::Entree,
            Self::Entree => Self::Dessert,
            Self::Dessert => Self::Appetizer,
        }
    }

    /// Previous category in the selector, wrapping around
    pub fn previous(&self) -> Self {
        match self {
            Self::Appetizer => Self::Dessert,
            Self::Entree => Self::Appetizer,
            Self::Dessert => Self::Entree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_appetizer() {
        assert_eq!(Category::default(), Category::Appetizer);
    }

    #[test]
    fn test_iteration_matches_display_order() {
        let all = Category::all();
        assert_eq!(
            all,
            vec![Category::Appetizer, Category::Entree, Category::Dessert]
        );
    }

    #[test]
    fn test_parse_tag() {
        assert_eq!("Entree".parse::<Category>().ok(), Some(Category::Entree));
        assert!("Soup".parse::<Category>().is_err());
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Category::Dessert.next(), Category::Appetizer);
        assert_eq!(Category::Appetizer.previous(), Category::Dessert);
        for category in Category::all() {
            assert_eq!(category.next().previous(), category);
        }
    }
}
