//! Configuration loading for the pension calculation engine.
//!
//! A single YAML file sets the arithmetic context (rounding mode and
//! quantization scales) and the defaults applied to optional input fields.
//!
//! # Example
//!
//! ```no_run
//! use pension_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Rounding: {:?}", loader.context().rounding);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::EngineConfig;
