//! The components module contains the widgets hosts can embed. Right now that is a single bouncing button.

pub mod bounce;

mod bounce_button;
pub use bounce_button::BounceButton;
