//! Display configuration for the schedule coverage engine.
//!
//! This module loads which zones and clock style formatted output uses.
//! The `local` zone sentinel is resolved here, so the calculation functions
//! only ever see concrete zones.
//!
//! # Example
//!
//! ```no_run
//! use schedule_coverage::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/display.yaml").unwrap();
//! println!("Displaying times in {}", loader.display_zone());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ClockStyle, DisplayConfig, ZoneSetting, parse_zone};
