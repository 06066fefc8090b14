//! Configuration loading and management for the payroll deduction engine.
//!
//! This module provides functionality to load statutory deduction tables from
//! YAML files, including statute metadata and effective-dated rate schedules,
//! along with built-in constructors for the pinned statutory values.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ke_statutory").unwrap();
//! println!("Loaded statute: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DeductionSchedule, HousingLevySchedule, NhifBand, NhifSchedule, NssfSchedule, PayeBracket,
    PayeSchedule, StatuteMetadata, StatutoryConfig,
};
