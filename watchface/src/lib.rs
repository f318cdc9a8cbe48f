//! Monster-game styled watchface for the PineTime.
//!
//! Everything here is hardware independent: time and date formatting, the
//! rotating background, the presentation state written once a minute, the
//! session that holds the display resources and the renderer that draws a
//! frame onto any `embedded_graphics` draw target.
//!
//! ```text
//! clock tick -> Session -> RefreshController -> PresentationState -> render::draw
//! ```

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to the other modules
mod fmt;

pub mod assets;
pub mod background;
pub mod clock;
pub mod controller;
pub mod error;
pub mod layout;
pub mod render;
pub mod resources;
pub mod session;
pub mod sprite;
pub mod state;

pub use assets::StaticAssets;
pub use background::{Background, BackgroundIndex};
pub use clock::{ClockStyle, Locale};
pub use controller::{Refresh, RefreshController};
pub use error::Error;
pub use resources::{FontId, Platform, ResourceId};
pub use session::Session;
pub use state::PresentationState;
