use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleType {
    Weekly,
    Biweekly,
}

impl CycleType {
    /// Length of the cycle in whole days.
    pub fn canonical_days(self) -> i64 {
        match self {
            CycleType::Weekly => 7,
            CycleType::Biweekly => 15,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CycleType::Weekly => "weekly",
            CycleType::Biweekly => "biweekly",
        }
    }
}

impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CycleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "semanal" => Ok(CycleType::Weekly),
            "biweekly" | "quinzenal" => Ok(CycleType::Biweekly),
            other => Err(format!("unknown cycle type '{}'", other)),
        }
    }
}

/// Length of the offer window, whatever the cycle type.
pub const OFFER_WINDOW_DAYS: i64 = 3;

/// The first days of a cycle, during which products may be offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OfferWindow {
    pub start: NaiveDate,
    /// Inclusive.
    pub end: NaiveDate,
}

/// A sale cycle whose dates already passed the duration rules.
///
/// Only `CycleRules::build_range` creates one, so holding a value means the
/// range is ordered and matches the length of its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleDateRange {
    start: NaiveDate,
    end: NaiveDate,
    cycle_type: CycleType,
}

impl CycleDateRange {
    pub(crate) fn from_checked(start: NaiveDate, end: NaiveDate, cycle_type: CycleType) -> Self {
        Self {
            start,
            end,
            cycle_type,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn cycle_type(&self) -> CycleType {
        self.cycle_type
    }

    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Never extends past the end of the cycle.
    pub fn offer_window(&self) -> OfferWindow {
        let last_day = self
            .start
            .checked_add_signed(Duration::days(OFFER_WINDOW_DAYS - 1))
            .map_or(self.end, |day| day.min(self.end));
        OfferWindow {
            start: self.start,
            end: last_day,
        }
    }
}

/// Non-negative amount in reais, kept as whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: u64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    pub fn as_f64(self) -> f64 {
        self.cents as f64 / 100.0
    }

    pub fn is_positive(self) -> bool {
        self.cents > 0
    }
}

/// Renders the comma-decimal form typed into price inputs, e.g. `4,50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[serde(alias = "ativo")]
    Active,
    #[serde(alias = "inativo")]
    Inactive,
}

/// Fields of the "new sellable product" form at the moment of a check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFormSnapshot {
    #[serde(rename = "produtoId", default)]
    pub product_id: Option<u64>,
    #[serde(rename = "medida", default)]
    pub unit: Option<String>,
    #[serde(rename = "pesoKg", default)]
    pub weight_kg: Option<String>,
    #[serde(rename = "precoBase", default)]
    pub base_price: Option<String>,
    #[serde(default)]
    pub status: Option<ProductStatus>,
}

/// Fields of the "new sale cycle" form at the moment of a check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CycleFormSnapshot {
    #[serde(rename = "dataInicio", default)]
    pub start: Option<String>,
    #[serde(rename = "dataFim", default)]
    pub end: Option<String>,
    #[serde(rename = "tipo", default)]
    pub cycle_type: Option<String>,
}

/// One declared-required field of a form, borrowed from its snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldCheck<'a> {
    Id {
        name: &'static str,
        value: Option<u64>,
    },
    Text {
        name: &'static str,
        value: Option<&'a str>,
    },
    /// Masked BRL text, parsed with the money codec.
    Money {
        name: &'static str,
        value: Option<&'a str>,
    },
    /// Plain decimal text such as a weight.
    Number {
        name: &'static str,
        value: Option<&'a str>,
    },
    Cycle {
        start: Option<&'a str>,
        end: Option<&'a str>,
        cycle_type: Option<&'a str>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub product_id: u64,
    pub unit: String,
    pub weight_kg: f64,
    pub base_price: Money,
    pub status: Option<ProductStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCycle {
    pub range: CycleDateRange,
}
