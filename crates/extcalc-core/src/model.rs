use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_FLOORS: u32 = 1;

/// Default reserve share of spare units, in percent of the portable total.
pub const DEFAULT_RESERVE_PERCENT: Decimal = Decimal::TEN;

/// Kind of protected object. Selects which reference table governs the calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    #[default]
    Production,
    Service,
    Petroleum,
    Construction,
}

impl ObjectType {
    pub const ALL: [ObjectType; 4] = [
        ObjectType::Production,
        ObjectType::Service,
        ObjectType::Petroleum,
        ObjectType::Construction,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ObjectType::Production => "production",
            ObjectType::Service => "service",
            ObjectType::Petroleum => "petroleum",
            ObjectType::Construction => "construction",
        }
    }

    /// Parse a key case-insensitively ("PRODUCTION", "production", " Service ").
    pub fn parse_key(s: &str) -> Option<ObjectType> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.key() == lower)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Fire and explosion hazard class of a production room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    A,
    B,
    VGas,
    VSolid,
    G,
    D,
    Public,
    FireWorks,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::A,
        Category::B,
        Category::VGas,
        Category::VSolid,
        Category::G,
        Category::D,
        Category::Public,
        Category::FireWorks,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::VGas => "V_GAS",
            Category::VSolid => "V_SOLID",
            Category::G => "G",
            Category::D => "D",
            Category::Public => "PUBLIC",
            Category::FireWorks => "FIRE_WORKS",
        }
    }

    /// Parse a key case-insensitively. Hyphens are accepted in place of underscores.
    pub fn parse_key(s: &str) -> Option<Category> {
        let upper = s.trim().to_uppercase().replace('-', "_");
        Self::ALL.into_iter().find(|c| c.key() == upper)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Immutable calculator input. The caller owns any form state and builds a
/// fresh value on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub object_type: ObjectType,
    /// Protected floor area in m².
    pub area: Decimal,
    /// Required for `ObjectType::Production`.
    #[serde(default)]
    pub category: Option<Category>,
    /// Row key in the service, petroleum or construction table.
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default = "default_floors")]
    pub floors: u32,
    #[serde(default)]
    pub has_aupt: bool,
    #[serde(default)]
    pub has_electrical: bool,
    #[serde(default)]
    pub has_cabinets: bool,
    #[serde(default = "default_reserve_percent")]
    pub reserve_percent: Decimal,
}

fn default_floors() -> u32 {
    DEFAULT_FLOORS
}

fn default_reserve_percent() -> Decimal {
    DEFAULT_RESERVE_PERCENT
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            object_type: ObjectType::default(),
            area: Decimal::ZERO,
            category: None,
            sub_category: None,
            floors: DEFAULT_FLOORS,
            has_aupt: false,
            has_electrical: false,
            has_cabinets: false,
            reserve_percent: DEFAULT_RESERVE_PERCENT,
        }
    }
}

impl CalculationInput {
    /// Input for a production room of the given hazard category.
    pub fn production(category: Category, area: Decimal) -> Self {
        Self {
            object_type: ObjectType::Production,
            area,
            category: Some(category),
            ..Self::default()
        }
    }

    /// Input for a service, petroleum or construction object.
    pub fn facility(object_type: ObjectType, sub_category: &str, area: Decimal) -> Self {
        Self {
            object_type,
            area,
            sub_category: Some(sub_category.to_string()),
            ..Self::default()
        }
    }

    /// Copy of this input with out-of-range numbers clamped to safe values:
    /// negative area and reserve become 0, zero floors become 1.
    pub fn clamped(&self) -> Self {
        let mut input = self.clone();
        if input.area.is_sign_negative() {
            input.area = Decimal::ZERO;
        }
        if input.reserve_percent.is_sign_negative() {
            input.reserve_percent = Decimal::ZERO;
        }
        input.floors = input.floors.max(1);
        input
    }
}
