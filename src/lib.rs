pub mod controller;
pub mod direction;
pub mod error;
pub mod gui;
pub mod hotkey;
pub mod indicator;
pub mod input;
pub mod layout;
pub mod logging;
pub mod settings;
pub mod viewport;

pub use error::OverlayError;
