pub mod copy;
mod projects;

pub use projects::projects;
