use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which rule produced a reason entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonKind {
    Exemption,
    BaseCalculation,
    AuptDiscount,
    FloorMinimum,
    ElectricalSubstitution,
    MobileUnits,
    ReferenceTable,
    Reserve,
}

/// One entry of the audit trail, in the order the rules fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub kind: ReasonKind,
    /// Short heading (e.g., "AUPT discount").
    pub label: String,
    /// Human-readable explanation of the arithmetic.
    pub text: String,
}

impl Reason {
    pub fn new(kind: ReasonKind, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Itemized extinguisher requirement for one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub powder_count: u32,
    pub co2_count: u32,
    /// Water/foam units.
    pub water_count: u32,
    /// Wheeled units for large areas.
    pub mobile_count: u32,
    /// Spare units on top of the placed ones.
    pub reserve_count: u32,
    /// powder + CO2 + water.
    pub total_portable: u32,
    /// Portable + mobile + reserve.
    pub total_count: u32,
    /// Portable units per floor, ground floor first.
    pub per_floor: Vec<u32>,
    pub reasons: Vec<Reason>,
    pub warnings: Vec<String>,
    /// Maximum travel distance to the nearest extinguisher (m).
    pub max_distance: u32,
    /// Sand reserve (m³). Reported separately, never part of the counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sand: Option<Decimal>,
    /// Fire blankets. Reported separately, never part of the counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blanket_count: Option<u32>,
}

impl CalculationResult {
    /// Reasons of the given kind.
    pub fn reasons_of(&self, kind: ReasonKind) -> impl Iterator<Item = &Reason> {
        self.reasons.iter().filter(move |r| r.kind == kind)
    }
}
