use crate::model::{Category, ObjectType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete set of reference tables for the calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Norms per hazard category for production rooms.
    pub production: BTreeMap<Category, CategoryRule>,
    pub service: SubCategoryTable,
    pub petroleum: SubCategoryTable,
    pub construction: SubCategoryTable,
}

/// Norms for one fire/explosion hazard category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub label: String,
    /// Floor area (m²) protected by one block of extinguishers.
    pub block_area: Decimal,
    /// Powder units per block.
    pub powder_norm: u32,
    /// Maximum travel distance to the nearest extinguisher (m).
    pub distance: u32,
    /// Area (m²) above which wheeled units are required.
    #[serde(default)]
    pub mobile_threshold: Option<Decimal>,
}

/// Reference table for service, petroleum or construction objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCategoryTable {
    /// Maximum travel distance (m) for every row of this table.
    pub max_distance: u32,
    pub rows: BTreeMap<String, SubCategoryRule>,
}

/// One facility type within a sub-category table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCategoryRule {
    pub label: String,
    /// Area (m²) per unit set. Zero means a fixed count regardless of area.
    #[serde(default)]
    pub area_norm: Decimal,
    #[serde(default)]
    pub powder: u32,
    #[serde(default)]
    pub co2: u32,
    #[serde(default)]
    pub foam: u32,
    /// Sand per unit set (m³).
    #[serde(default)]
    pub sand: Option<Decimal>,
    /// Fire blankets per unit set.
    #[serde(default)]
    pub blanket: Option<u32>,
    /// Shield or equipment requirement, surfaced verbatim as a warning.
    #[serde(default)]
    pub note: Option<String>,
}

impl ReferenceTables {
    /// The sub-category table governing `object_type`, or `None` for production.
    pub fn sub_table(&self, object_type: ObjectType) -> Option<&SubCategoryTable> {
        match object_type {
            ObjectType::Production => None,
            ObjectType::Service => Some(&self.service),
            ObjectType::Petroleum => Some(&self.petroleum),
            ObjectType::Construction => Some(&self.construction),
        }
    }
}
