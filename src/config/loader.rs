//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! deduction configurations from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{DeductionSchedule, StatuteMetadata, StatutoryConfig};

/// Loads and provides access to statutory deduction configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates every deduction schedule, and serves effective-date lookups.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ke_statutory/
/// ├── statute.yaml         # Statute metadata
/// └── rates/
///     └── 2024-02-01.yaml  # Deduction schedule effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/ke_statutory").unwrap();
///
/// // Get the schedule for a payroll period
/// let period = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let schedule = loader.schedule_for(period).unwrap();
/// println!("NSSF rate: {}", schedule.nssf.rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ke_statutory")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any deduction schedule fails validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ke_statutory")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load statute.yaml
        let statute_path = path.join("statute.yaml");
        let metadata = Self::load_yaml::<StatuteMetadata>(&statute_path)?;

        // Load all schedule files from the rates directory
        let rates_dir = path.join("rates");
        let schedules = Self::load_schedules(&rates_dir)?;

        let config = StatutoryConfig::new(metadata, schedules)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all schedule files from the rates directory.
    fn load_schedules(rates_dir: &Path) -> EngineResult<Vec<DeductionSchedule>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut schedules = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let schedule = Self::load_yaml::<DeductionSchedule>(&path)?;
                schedules.push(schedule);
            }
        }

        if schedules.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(schedules)
    }

    /// Returns the underlying statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Returns the statute metadata.
    pub fn metadata(&self) -> &StatuteMetadata {
        self.config.metadata()
    }

    /// Returns the most recently effective deduction schedule.
    pub fn latest(&self) -> &DeductionSchedule {
        self.config.latest()
    }

    /// Returns the most recent schedule effective on or before the date.
    ///
    /// # Arguments
    ///
    /// * `date` - The payroll period date for which to select tables
    ///
    /// # Returns
    ///
    /// Returns `ScheduleNotFound` if the date precedes every schedule.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/ke_statutory")?;
    /// let period = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let schedule = loader.schedule_for(period)?;
    /// println!("Personal relief: {}", schedule.paye.annual_personal_relief);
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn schedule_for(&self, date: NaiveDate) -> EngineResult<&DeductionSchedule> {
        self.config.schedule_for(date)
    }

    /// Returns the schedule for an optional payroll period.
    ///
    /// A period selects the schedule effective on or before it; no period
    /// means the most recently effective schedule.
    pub fn effective_schedule(
        &self,
        period: Option<NaiveDate>,
    ) -> EngineResult<&DeductionSchedule> {
        match period {
            Some(date) => self.schedule_for(date),
            None => Ok(self.latest()),
        }
    }
}
