use crate::domain::model::{CycleDateRange, CycleType};
use crate::utils::error::{CoopError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A broken cycle rule. The `Display` text is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CycleViolation {
    #[error("required fields missing: start date, end date and cycle type")]
    MissingFields,

    #[error("invalid date for {field}: '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("unknown cycle type: '{0}'")]
    UnknownCycleType(String),

    #[error("invalid range: end date must be after start date")]
    InvalidRange,

    #[error("duration mismatch: expected {expected} days, got {actual}")]
    DurationMismatch { expected: i64, actual: i64 },
}

/// Result handed back to the view: empty `errors` means the cycle is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CycleValidationReport {
    pub errors: Vec<String>,
}

impl CycleValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<Vec<CycleViolation>> for CycleValidationReport {
    fn from(violations: Vec<CycleViolation>) -> Self {
        Self {
            errors: violations.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Sale-cycle rules. Lengths are fixed per `CycleType` and match exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleRules;

impl CycleRules {
    pub fn expected_days(&self, cycle_type: CycleType) -> i64 {
        cycle_type.canonical_days()
    }

    /// Every broken rule, in evaluation order. Missing inputs stop the check
    /// early; the range and duration rules are always both evaluated.
    pub fn check(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        cycle_type: Option<CycleType>,
    ) -> Vec<CycleViolation> {
        let (Some(start), Some(end), Some(cycle_type)) = (start, end, cycle_type) else {
            return vec![CycleViolation::MissingFields];
        };

        let mut violations = Vec::new();
        if end <= start {
            violations.push(CycleViolation::InvalidRange);
        }

        let expected = self.expected_days(cycle_type);
        let actual = (end - start).num_days();
        if actual != expected {
            violations.push(CycleViolation::DurationMismatch { expected, actual });
        }

        tracing::debug!(
            %start,
            %end,
            cycle_type = %cycle_type,
            violations = violations.len(),
            "cycle duration checked"
        );
        violations
    }

    /// Text entry point used by forms. Blank fields count as missing;
    /// unreadable dates or types are reported, never raised.
    pub fn check_input(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        cycle_type: Option<&str>,
    ) -> Vec<CycleViolation> {
        let start = non_blank(start);
        let end = non_blank(end);
        let cycle_type = non_blank(cycle_type);

        let (Some(start), Some(end), Some(cycle_type)) = (start, end, cycle_type) else {
            return vec![CycleViolation::MissingFields];
        };

        let mut violations = Vec::new();
        let start = parse_date("start date", start, &mut violations);
        let end = parse_date("end date", end, &mut violations);
        let cycle_type = match cycle_type.parse::<CycleType>() {
            Ok(t) => Some(t),
            Err(_) => {
                violations.push(CycleViolation::UnknownCycleType(cycle_type.to_string()));
                None
            }
        };

        if !violations.is_empty() {
            return violations;
        }
        self.check(start, end, cycle_type)
    }

    pub fn build_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        cycle_type: CycleType,
    ) -> Result<CycleDateRange> {
        let violations = self.check(Some(start), Some(end), Some(cycle_type));
        if !violations.is_empty() {
            return Err(CoopError::InvalidCycle {
                errors: CycleValidationReport::from(violations).errors,
            });
        }
        Ok(CycleDateRange::from_checked(start, end, cycle_type))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_date(
    field: &'static str,
    value: &str,
    violations: &mut Vec<CycleViolation>,
) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            violations.push(CycleViolation::InvalidDate {
                field,
                value: value.to_string(),
            });
            None
        }
    }
}

pub fn validate_cycle_duration(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    cycle_type: Option<CycleType>,
) -> CycleValidationReport {
    CycleRules.check(start, end, cycle_type).into()
}

pub fn validate_cycle_input(
    start: Option<&str>,
    end: Option<&str>,
    cycle_type: Option<&str>,
) -> CycleValidationReport {
    CycleRules
        .check_input(start, end, cycle_type)
        .into()
}
