use serde::{Deserialize, Serialize};

/// Which storefront the visitor picked
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    B2c,
    B2b,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::B2c => "b2c",
            Audience::B2b => "b2b",
        }
    }

    /// Exact match only; any other stored value means no choice was made
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "b2c" => Some(Audience::B2c),
            "b2b" => Some(Audience::B2b),
            _ => None,
        }
    }

    pub fn all() -> Vec<Audience> {
        vec![Audience::B2c, Audience::B2b]
    }

    pub fn other(&self) -> Self {
        match self {
            Audience::B2c => Audience::B2b,
            Audience::B2b => Audience::B2c,
        }
    }
}
