mod audience;
mod color;
mod lang;
mod project;

pub use audience::Audience;
pub use color::{ColorError, Rgb};
pub use lang::{Lang, LocalizedText, Text};
pub use project::{Category, Project};
