use serde::{Deserialize, Serialize};

use super::{Lang, LocalizedText};

/// Portfolio project shown on the home and portfolio pages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    pub year: u16,
    pub description: LocalizedText,
}

/// Display categories used by the portfolio filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Residential,
    Corporate,
    Hospitality,
    Retail,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Residential => "residential",
            Category::Corporate => "corporate",
            Category::Hospitality => "hospitality",
            Category::Retail => "retail",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "residential" => Some(Category::Residential),
            "corporate" => Some(Category::Corporate),
            "hospitality" => Some(Category::Hospitality),
            "retail" => Some(Category::Retail),
            _ => None,
        }
    }

    pub fn all() -> Vec<Category> {
        vec![
            Category::Residential,
            Category::Corporate,
            Category::Hospitality,
            Category::Retail,
        ]
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Category::Residential, Lang::Pt) => "Residencial",
            (Category::Residential, Lang::Es) => "Residencial",
            (Category::Corporate, Lang::Pt) => "Corporativo",
            (Category::Corporate, Lang::Es) => "Corporativo",
            (Category::Hospitality, Lang::Pt) => "Hotelaria",
            (Category::Hospitality, Lang::Es) => "Hotelería",
            (Category::Retail, Lang::Pt) => "Varejo",
            (Category::Retail, Lang::Es) => "Comercio",
        }
    }
}
