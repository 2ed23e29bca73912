//! Procedural clock-face PNG icons for the browser extension and app bundle.

pub mod config;
pub mod error;
pub mod generate;
pub mod icon;
pub mod logger;

pub use config::{ICON_SPECS, IconSpec};
pub use error::{IconError, Result};
