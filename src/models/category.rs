use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed five-member expense taxonomy. Aggregations always report
/// every category, in `ALL` order, even when no expense carries it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Transport,
    Food,
    Sightseeing,
    Lodging,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Transport,
        Category::Food,
        Category::Sightseeing,
        Category::Lodging,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Food => "Food",
            Category::Sightseeing => "Sightseeing",
            Category::Lodging => "Lodging",
            Category::Other => "Other",
        }
    }

    /// Display label, localized like the rest of the user-facing strings.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Transport => "交通費",
            Category::Food => "食費",
            Category::Sightseeing => "観光",
            Category::Lodging => "宿泊",
            Category::Other => "その他",
        }
    }

    /// Lenient lookup used by the import reconciler. Accepts the
    /// serialized name or the localized label; anything else is `None`
    /// and the caller falls back to `Other`.
    pub fn parse_lenient(raw: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| raw == c.as_str() || raw == c.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
