//! Configuration loading and management for the wage comparison service.
//!
//! This module loads the service settings, request defaults and input limits
//! from YAML.
//!
//! # Example
//!
//! ```no_run
//! use wage_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Service: {}", config.service().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{InputLimits, ScenarioDefaults, ServiceConfig, ServiceSettings};
