//! Filtering and ordering of the project list

use serde::{Deserialize, Serialize};

use crate::models::{Category, Lang, Project, Text};

/// Sort direction for the portfolio grid
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum YearOrder {
    #[default]
    Newest,
    Oldest,
}

impl YearOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            YearOrder::Newest => "newest",
            YearOrder::Oldest => "oldest",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Some(YearOrder::Newest),
            "oldest" => Some(YearOrder::Oldest),
            _ => None,
        }
    }

    pub fn all() -> Vec<YearOrder> {
        vec![YearOrder::Newest, YearOrder::Oldest]
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        use crate::data::copy::portfolio;
        let text: Text = match self {
            YearOrder::Newest => portfolio::NEWEST,
            YearOrder::Oldest => portfolio::OLDEST,
        };
        text.get(lang)
    }
}

/// Projects flagged for highlight sections
pub fn featured(projects: &[Project]) -> Vec<Project> {
    projects.iter().filter(|p| p.featured).cloned().collect()
}

/// View state of the portfolio page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub category: Option<Category>,
    pub order: YearOrder,
}

impl ProjectQuery {
    /// Filter by category, then sort by year. The sort is stable so projects
    /// from the same year keep their list order.
    pub fn apply(&self, projects: &[Project]) -> Vec<Project> {
        let mut out: Vec<Project> = projects
            .iter()
            .filter(|p| self.category.map_or(true, |c| p.category == c))
            .cloned()
            .collect();

        match self.order {
            YearOrder::Newest => out.sort_by(|a, b| b.year.cmp(&a.year)),
            YearOrder::Oldest => out.sort_by(|a, b| a.year.cmp(&b.year)),
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalizedText;
    use pretty_assertions::assert_eq;

    fn project(id: u32, category: Category, featured: bool, year: u16) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            category,
            image: format!("/images/{id}.jpg"),
            featured,
            year,
            description: LocalizedText::new("pt", "es"),
        }
    }

    fn ids(list: &[Project]) -> Vec<u32> {
        list.iter().map(|p| p.id).collect()
    }

    #[test]
    fn featured_keeps_only_flagged() {
        let list = vec![
            project(1, Category::Residential, true, 2020),
            project(2, Category::Retail, false, 2021),
        ];
        assert_eq!(ids(&featured(&list)), vec![1]);
    }

    #[test]
    fn sorts_by_year_both_ways_without_losing_items() {
        let list = vec![
            project(1, Category::Residential, false, 2021),
            project(2, Category::Corporate, false, 2023),
            project(3, Category::Retail, false, 2020),
            project(4, Category::Retail, false, 2023),
        ];

        let newest = ProjectQuery::default().apply(&list);
        assert_eq!(ids(&newest), vec![2, 4, 1, 3]);

        let oldest = ProjectQuery {
            order: YearOrder::Oldest,
            ..Default::default()
        }
        .apply(&list);
        assert_eq!(ids(&oldest), vec![3, 1, 2, 4]);
    }

    #[test]
    fn category_filter_is_a_subset() {
        let list = vec![
            project(1, Category::Retail, false, 2021),
            project(2, Category::Corporate, false, 2023),
            project(3, Category::Retail, true, 2024),
        ];
        let query = ProjectQuery {
            category: Some(Category::Retail),
            order: YearOrder::Oldest,
        };
        assert_eq!(ids(&query.apply(&list)), vec![1, 3]);

        let none = ProjectQuery {
            category: Some(Category::Hospitality),
            order: YearOrder::Newest,
        };
        assert!(none.apply(&list).is_empty());
    }

    #[test]
    fn order_round_trips_through_select_values() {
        for order in YearOrder::all() {
            assert_eq!(YearOrder::from_str(order.as_str()), Some(order));
        }
        assert_eq!(YearOrder::from_str("sideways"), None);
    }
}
