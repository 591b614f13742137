mod audience_gate;
mod footer;
mod magnetic_button;
mod nav;
mod project_card;

pub use audience_gate::{AudienceGate, B2bOnly};
pub use footer::Footer;
pub use magnetic_button::MagneticButton;
pub use nav::Nav;
pub use project_card::ProjectCard;
