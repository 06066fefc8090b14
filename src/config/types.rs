//! Configuration types for statutory deductions.
//!
//! This module contains the strongly-typed rate tables that drive every
//! deduction calculator. Tables are deserialized from YAML configuration
//! files; the pinned statutory values also exist as built-in constructors
//! so the engine works without any configuration directory.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Effective date of the built-in statutory tables.
///
/// 1 February 2024 is the commencement of the NSSF Act year-two earnings
/// limits; the PAYE bands, personal relief, NHIF contribution table and
/// housing levy rate were all already in force on that date.
const STATUTORY_EFFECTIVE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 2, 1) {
    Some(date) => date,
    None => panic!("statutory effective date is not a valid calendar date"),
};

fn invalid(section: &str, message: &str) -> EngineError {
    EngineError::InvalidSchedule {
        section: section.to_string(),
        message: message.to_string(),
    }
}

/// Metadata about the statutory deduction package.
///
/// Contains identifying information about the jurisdiction whose deduction
/// rules the configuration encodes, including a version and source URL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatuteMetadata {
    /// ISO 3166 country code of the jurisdiction (e.g., "KE").
    pub jurisdiction: String,
    /// The human-readable name of the deduction package.
    pub name: String,
    /// The version or effective date of the package.
    pub version: String,
    /// URL to the official documentation of the rates.
    pub source_url: String,
}

/// One band of the progressive PAYE bracket table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PayeBracket {
    /// Inclusive annual upper bound of the band; `None` marks the
    /// open-ended top band.
    #[serde(default)]
    pub annual_upper_bound: Option<Decimal>,
    /// Marginal tax rate applied to income inside this band.
    pub rate: Decimal,
}

/// The PAYE income tax table: progressive brackets plus personal relief.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PayeSchedule {
    /// Brackets ordered by ascending upper bound, last one open-ended.
    pub brackets: Vec<PayeBracket>,
    /// Annual personal relief subtracted from gross tax before flooring.
    pub annual_personal_relief: Decimal,
}

impl PayeSchedule {
    /// Returns the Finance Act 2023 PAYE table: 10% / 25% / 30% / 32.5% /
    /// 35% marginal bands and KES 28,800 annual personal relief.
    pub fn statutory_2024() -> Self {
        Self {
            brackets: vec![
                PayeBracket {
                    annual_upper_bound: Some(Decimal::from(288_000)),
                    rate: Decimal::new(10, 2),
                },
                PayeBracket {
                    annual_upper_bound: Some(Decimal::from(388_000)),
                    rate: Decimal::new(25, 2),
                },
                PayeBracket {
                    annual_upper_bound: Some(Decimal::from(6_000_000)),
                    rate: Decimal::new(30, 2),
                },
                PayeBracket {
                    annual_upper_bound: Some(Decimal::from(9_600_000)),
                    rate: Decimal::new(325, 3),
                },
                PayeBracket {
                    annual_upper_bound: None,
                    rate: Decimal::new(35, 2),
                },
            ],
            annual_personal_relief: Decimal::from(28_800),
        }
    }

    fn validate(&self) -> EngineResult<()> {
        if self.brackets.is_empty() {
            return Err(invalid("paye", "bracket table is empty"));
        }
        if self.annual_personal_relief < Decimal::ZERO {
            return Err(invalid("paye", "personal relief cannot be negative"));
        }

        let last_index = self.brackets.len() - 1;
        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(invalid("paye", "bracket rates must be between 0 and 1"));
            }
            match (bracket.annual_upper_bound, index == last_index) {
                (None, false) => {
                    return Err(invalid(
                        "paye",
                        "only the final bracket may omit an upper bound",
                    ));
                }
                (Some(_), true) => {
                    return Err(invalid("paye", "final bracket must be open-ended"));
                }
                _ => {}
            }
        }

        for pair in self.brackets.windows(2) {
            if let (Some(lower), Some(upper)) =
                (pair[0].annual_upper_bound, pair[1].annual_upper_bound)
            {
                if upper <= lower {
                    return Err(invalid("paye", "bracket upper bounds must ascend"));
                }
            }
        }

        Ok(())
    }
}

/// One band of the NHIF contribution table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NhifBand {
    /// Inclusive gross-salary upper bound of the band; `None` marks the
    /// open-ended top band.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Fixed monthly contribution for salaries inside this band.
    pub amount: Decimal,
}

/// The NHIF contribution table: fixed amounts by gross-salary band.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NhifSchedule {
    /// Bands ordered by ascending upper bound, last one open-ended.
    pub bands: Vec<NhifBand>,
}

impl NhifSchedule {
    /// Returns the 2015 NHIF contribution table (KES 150 at the bottom band
    /// through KES 1,700 for gross salaries of 100,000 and above).
    pub fn statutory_2024() -> Self {
        let bounded = [
            (5_999, 150),
            (7_999, 300),
            (11_999, 400),
            (14_999, 500),
            (19_999, 600),
            (24_999, 750),
            (29_999, 850),
            (34_999, 900),
            (39_999, 950),
            (44_999, 1_000),
            (49_999, 1_100),
            (59_999, 1_200),
            (69_999, 1_300),
            (79_999, 1_400),
            (89_999, 1_500),
            (99_999, 1_600),
        ];

        let mut bands: Vec<NhifBand> = bounded
            .iter()
            .map(|&(upper, amount)| NhifBand {
                upper_bound: Some(Decimal::from(upper)),
                amount: Decimal::from(amount),
            })
            .collect();
        bands.push(NhifBand {
            upper_bound: None,
            amount: Decimal::from(1_700),
        });

        Self { bands }
    }

    fn validate(&self) -> EngineResult<()> {
        if self.bands.is_empty() {
            return Err(invalid("nhif", "band table is empty"));
        }

        let last_index = self.bands.len() - 1;
        for (index, band) in self.bands.iter().enumerate() {
            if band.amount < Decimal::ZERO {
                return Err(invalid("nhif", "band amounts cannot be negative"));
            }
            match (band.upper_bound, index == last_index) {
                (None, false) => {
                    return Err(invalid("nhif", "only the final band may omit an upper bound"));
                }
                (Some(_), true) => {
                    return Err(invalid("nhif", "final band must be open-ended"));
                }
                _ => {}
            }
        }

        for pair in self.bands.windows(2) {
            if let (Some(lower), Some(upper)) = (pair[0].upper_bound, pair[1].upper_bound) {
                if upper <= lower {
                    return Err(invalid("nhif", "band upper bounds must ascend"));
                }
            }
        }

        Ok(())
    }
}

/// The NSSF pension contribution parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NssfSchedule {
    /// Employee contribution rate applied to pensionable earnings.
    pub rate: Decimal,
    /// Tier I earnings limit (the lower earnings limit).
    pub tier_1_limit: Decimal,
    /// Tier II earnings limit (the upper earnings limit).
    pub tier_2_limit: Decimal,
}

impl NssfSchedule {
    /// Returns the NSSF Act 2013 year-two parameters: 6% on pensionable
    /// earnings with tier limits of KES 7,000 and KES 36,000.
    pub fn statutory_2024() -> Self {
        Self {
            rate: Decimal::new(6, 2),
            tier_1_limit: Decimal::from(7_000),
            tier_2_limit: Decimal::from(36_000),
        }
    }

    fn validate(&self) -> EngineResult<()> {
        if self.rate < Decimal::ZERO || self.rate > Decimal::ONE {
            return Err(invalid("nssf", "rate must be between 0 and 1"));
        }
        if self.tier_1_limit < Decimal::ZERO {
            return Err(invalid("nssf", "tier limits cannot be negative"));
        }
        if self.tier_2_limit < self.tier_1_limit {
            return Err(invalid("nssf", "tier 2 limit must not be below tier 1 limit"));
        }
        Ok(())
    }
}

/// The Affordable Housing Levy parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HousingLevySchedule {
    /// Levy rate applied to the full gross salary.
    pub rate: Decimal,
}

impl HousingLevySchedule {
    /// Returns the Affordable Housing Levy rate of 1.5% of gross salary.
    pub fn statutory_2024() -> Self {
        Self {
            rate: Decimal::new(15, 3),
        }
    }

    fn validate(&self) -> EngineResult<()> {
        if self.rate < Decimal::ZERO || self.rate > Decimal::ONE {
            return Err(invalid("housing_levy", "rate must be between 0 and 1"));
        }
        Ok(())
    }
}

/// The complete set of statutory deduction tables effective from one date.
///
/// A schedule bundles the PAYE, NHIF, NSSF and housing levy tables that were
/// in force together, so a payroll run for a given period uses one coherent
/// snapshot of the law.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeductionSchedule {
    /// The date from which these tables apply.
    pub effective_date: NaiveDate,
    /// PAYE income tax table.
    pub paye: PayeSchedule,
    /// NHIF contribution table.
    pub nhif: NhifSchedule,
    /// NSSF contribution parameters.
    pub nssf: NssfSchedule,
    /// Affordable Housing Levy parameters.
    pub housing_levy: HousingLevySchedule,
}

impl DeductionSchedule {
    /// Returns the built-in statutory tables effective 1 February 2024.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::DeductionSchedule;
    ///
    /// let schedule = DeductionSchedule::statutory_2024();
    /// assert_eq!(schedule.paye.brackets.len(), 5);
    /// assert_eq!(schedule.nhif.bands.len(), 17);
    /// ```
    pub fn statutory_2024() -> Self {
        Self {
            effective_date: STATUTORY_EFFECTIVE_DATE,
            paye: PayeSchedule::statutory_2024(),
            nhif: NhifSchedule::statutory_2024(),
            nssf: NssfSchedule::statutory_2024(),
            housing_levy: HousingLevySchedule::statutory_2024(),
        }
    }

    /// Validates the schedule's tables.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` when every table is well-formed, or an
    /// `InvalidSchedule` error naming the offending section: empty or
    /// unordered bracket/band tables, a missing open-ended top band, rates
    /// outside `[0, 1]`, negative constants, or tier limits out of order.
    pub fn validate(&self) -> EngineResult<()> {
        self.paye.validate()?;
        self.nhif.validate()?;
        self.nssf.validate()?;
        self.housing_levy.validate()?;
        Ok(())
    }
}

impl Default for DeductionSchedule {
    fn default() -> Self {
        Self::statutory_2024()
    }
}

/// The complete statutory configuration loaded from YAML files.
///
/// Aggregates the statute metadata with every effective-dated deduction
/// schedule, kept sorted so date lookups scan from the newest backwards.
#[derive(Debug, Clone)]
pub struct StatutoryConfig {
    /// Statute metadata.
    metadata: StatuteMetadata,
    /// Deduction schedules by effective date (sorted oldest first).
    schedules: Vec<DeductionSchedule>,
}

impl StatutoryConfig {
    /// Creates a new StatutoryConfig from its component parts.
    ///
    /// Validates every schedule, requires at least one, and sorts them by
    /// effective date.
    pub fn new(
        metadata: StatuteMetadata,
        schedules: Vec<DeductionSchedule>,
    ) -> EngineResult<Self> {
        if schedules.is_empty() {
            return Err(invalid("rates", "at least one deduction schedule is required"));
        }
        for schedule in &schedules {
            schedule.validate()?;
        }

        let mut sorted_schedules = schedules;
        sorted_schedules.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Ok(Self {
            metadata,
            schedules: sorted_schedules,
        })
    }

    /// Returns the statute metadata.
    pub fn metadata(&self) -> &StatuteMetadata {
        &self.metadata
    }

    /// Returns all deduction schedules, oldest first.
    pub fn schedules(&self) -> &[DeductionSchedule] {
        &self.schedules
    }

    /// Returns the most recently effective deduction schedule.
    ///
    /// The constructor guarantees at least one schedule exists.
    pub fn latest(&self) -> &DeductionSchedule {
        &self.schedules[self.schedules.len() - 1]
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
    pub fn schedule_for(&self, date: NaiveDate) -> EngineResult<&DeductionSchedule> {
        self.schedules
            .iter()
            .rev()
            .find(|schedule| schedule.effective_date <= date)
            .ok_or(EngineError::ScheduleNotFound { date })
    }
}
