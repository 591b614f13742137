pub mod audience;
pub mod color;
pub mod portfolio;
