use serde::{Deserialize, Serialize};

/// Closed set of transaction categories. The serialized form is the
/// canonical lowercase key, never the display label; an unknown key
/// fails the whole decode rather than mapping to a fallback variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Salary,
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Salary => "Salary",
            Self::Other => "Other",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Food => "🍕",
            Self::Transport => "🚗",
            Self::Entertainment => "🎬",
            Self::Shopping => "🛍",
            Self::Salary => "💰",
            Self::Other => "📝",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Shopping,
            Self::Salary,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
