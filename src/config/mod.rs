//! Configuration loading and management for the shift tracker.
//!
//! This module loads the user-editable settings (positions, locations, the
//! current user and the default hourly rate) from a YAML file and exposes
//! them as an explicit [`AppContext`].
//!
//! # Example
//!
//! ```no_run
//! use shift_tracker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Locations: {:?}", config.context().locations);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, SETTINGS_FILE};
pub use types::{AppContext, DEFAULT_HOURLY_RATE, DEFAULT_LOCATIONS, DEFAULT_POSITIONS};
