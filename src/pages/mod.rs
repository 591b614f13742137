mod about;
mod b2b;
mod contact;
mod home;
mod portfolio;

pub use about::AboutPage;
pub use b2b::{CatalogPage, QuotePage};
pub use contact::ContactPage;
pub use home::HomePage;
pub use portfolio::PortfolioPage;
