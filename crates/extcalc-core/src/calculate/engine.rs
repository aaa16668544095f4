use crate::calculate::outcome::{CalculationResult, Reason, ReasonKind};
use crate::model::{CalculationInput, Category, ObjectType};
use crate::tables::schema::{CategoryRule, ReferenceTables, SubCategoryRule, SubCategoryTable};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Category D rooms up to this area need no extinguishers.
const EXEMPTION_AREA: Decimal = Decimal::ONE_HUNDRED;

/// Max travel distance reported for an exempt category D room (m).
const EXEMPTION_MAX_DISTANCE: u32 = 70;

/// Minimum portable units per floor in production rooms.
const MIN_UNITS_PER_FLOOR: u32 = 2;

/// Area (m²) covered by each additional mobile unit above the threshold.
const MOBILE_STEP_AREA: Decimal = Decimal::ONE_THOUSAND;

pub const CABINET_WARNING: &str =
    "Fire hose cabinets present: keep at least 2 portable extinguishers per hose cabinet";

/// Counts gathered by a branch before post-processing.
#[derive(Debug, Default)]
struct Tally {
    powder: u32,
    co2: u32,
    water: u32,
    mobile: u32,
    sand: Option<Decimal>,
    blanket: Option<u32>,
    max_distance: u32,
    reasons: Vec<Reason>,
    warnings: Vec<String>,
}

/// Compute the extinguisher requirement for one object.
///
/// Returns `None` when the area is not positive, the discriminating field
/// (`category` for production, `sub_category` otherwise) is unset, or the
/// sub-category key is not in the table. Out-of-range numbers are clamped
/// first (see `CalculationInput::clamped`).
pub fn compute(tables: &ReferenceTables, input: &CalculationInput) -> Option<CalculationResult> {
    let input = input.clamped();

    if input.area <= Decimal::ZERO {
        tracing::debug!(area = %input.area, "no result: area is not positive");
        return None;
    }

    let tally = match input.object_type {
        ObjectType::Production => {
            let Some(category) = input.category else {
                tracing::debug!("no result: production object without category");
                return None;
            };
            let rule = tables.production.get(&category)?;
            if category == Category::D && input.area <= EXEMPTION_AREA {
                return Some(exemption(&input, rule));
            }
            production(&input, rule)
        }
        ObjectType::Service => {
            let (table, row) = lookup_row(tables, &input)?;
            service(&input, table, row)
        }
        ObjectType::Petroleum => {
            let (table, row) = lookup_row(tables, &input)?;
            petroleum(&input, table, row)
        }
        ObjectType::Construction => {
            let (table, row) = lookup_row(tables, &input)?;
            construction(table, row)
        }
    };

    Some(finish(&input, tally))
}

fn lookup_row<'a>(
    tables: &'a ReferenceTables,
    input: &CalculationInput,
) -> Option<(&'a SubCategoryTable, &'a SubCategoryRule)> {
    let key = input
        .sub_category
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty());
    let Some(key) = key else {
        tracing::debug!(object_type = %input.object_type, "no result: sub-category not set");
        return None;
    };
    let table = tables.sub_table(input.object_type)?;
    match table.rows.get(key) {
        Some(row) => Some((table, row)),
        None => {
            tracing::warn!(object_type = %input.object_type, key, "unknown sub-category key");
            None
        }
    }
}

fn exemption(input: &CalculationInput, rule: &CategoryRule) -> CalculationResult {
    tracing::debug!(area = %input.area, "category D exemption applies");
    CalculationResult {
        powder_count: 0,
        co2_count: 0,
        water_count: 0,
        mobile_count: 0,
        reserve_count: 0,
        total_portable: 0,
        total_count: 0,
        per_floor: vec![0; input.floors as usize],
        reasons: vec![Reason::new(
            ReasonKind::Exemption,
            "Exemption",
            format!(
                "{}: area {} m² <= {} m², extinguishers are not required",
                rule.label, input.area, EXEMPTION_AREA
            ),
        )],
        warnings: Vec::new(),
        max_distance: EXEMPTION_MAX_DISTANCE,
        sand: None,
        blanket_count: None,
    }
}

/// Production rooms. The AUPT discount, the per-floor minimum and the
/// electrical substitution run in exactly this order.
fn production(input: &CalculationInput, rule: &CategoryRule) -> Tally {
    let mut tally = Tally {
        max_distance: rule.distance,
        ..Tally::default()
    };

    let blocks = ceil_div(input.area, rule.block_area);
    let mut portable = blocks.saturating_mul(rule.powder_norm);
    tally.reasons.push(Reason::new(
        ReasonKind::BaseCalculation,
        "Base calculation",
        format!(
            "{}: {} m² / {} m² per block = {} block(s) x {} unit(s) = {} portable extinguisher(s)",
            rule.label, input.area, rule.block_area, blocks, rule.powder_norm, portable
        ),
    ));

    if input.has_aupt {
        let before = portable;
        portable = round_ratio(portable, 1, 2);
        tally.reasons.push(Reason::new(
            ReasonKind::AuptDiscount,
            "AUPT discount",
            format!(
                "Automatic suppression installed: {} x 0.5 = {}",
                before, portable
            ),
        ));
    }

    let minimum = input.floors.saturating_mul(MIN_UNITS_PER_FLOOR);
    if portable < minimum {
        tally.reasons.push(Reason::new(
            ReasonKind::FloorMinimum,
            "Minimum",
            format!(
                "{} is below {} per floor x {} floor(s), raised to {}",
                portable, MIN_UNITS_PER_FLOOR, input.floors, minimum
            ),
        ));
        portable = minimum;
    }

    tally.powder = portable;
    if input.has_electrical {
        let co2 = round_ratio(portable, 1, 5).max(1);
        tally.co2 = co2;
        tally.powder = portable.saturating_sub(co2);
        tally.reasons.push(Reason::new(
            ReasonKind::ElectricalSubstitution,
            "Electrical substitution",
            format!(
                "Live electrical equipment: {} of {} unit(s) replaced by CO2 extinguishers (20%)",
                co2, portable
            ),
        ));
    }

    if let Some(threshold) = rule.mobile_threshold {
        if input.area > threshold {
            let extra = ceil_div(input.area - threshold, MOBILE_STEP_AREA);
            tally.mobile = extra.saturating_add(1);
            tally.reasons.push(Reason::new(
                ReasonKind::MobileUnits,
                "Mobile units",
                format!(
                    "Area {} m² exceeds {} m²: 1 + {} additional per {} m² = {} mobile unit(s)",
                    input.area, threshold, extra, MOBILE_STEP_AREA, tally.mobile
                ),
            ));
        }
    }

    tally
}

fn service(input: &CalculationInput, table: &SubCategoryTable, row: &SubCategoryRule) -> Tally {
    let mut tally = Tally {
        max_distance: table.max_distance,
        ..Tally::default()
    };

    let text = if row.area_norm > Decimal::ZERO {
        let units = ceil_div(input.area, row.area_norm);
        tally.powder = units.saturating_mul(row.powder);
        tally.co2 = units.saturating_mul(row.co2);
        format!(
            "{}: {} m² / {} m² = {} set(s) of {} powder + {} CO2",
            row.label, input.area, row.area_norm, units, row.powder, row.co2
        )
    } else {
        tally.powder = row.powder;
        tally.co2 = row.co2;
        format!(
            "{}: fixed {} powder + {} CO2 regardless of area",
            row.label, row.powder, row.co2
        )
    };
    tally
        .reasons
        .push(Reason::new(ReasonKind::ReferenceTable, "Reference table", text));

    if let Some(ref note) = row.note {
        tally.warnings.push(note.clone());
    }
    tally
}

fn petroleum(input: &CalculationInput, table: &SubCategoryTable, row: &SubCategoryRule) -> Tally {
    let units = ceil_div(input.area, row.area_norm);
    let mut tally = Tally {
        powder: units.saturating_mul(row.powder),
        co2: units.saturating_mul(row.co2),
        water: units.saturating_mul(row.foam),
        sand: row.sand.and_then(|s| s.checked_mul(Decimal::from(units))),
        blanket: row.blanket.map(|b| b.saturating_mul(units)),
        max_distance: table.max_distance,
        ..Tally::default()
    };

    tally.reasons.push(Reason::new(
        ReasonKind::ReferenceTable,
        "Reference table",
        format!(
            "{}: {} m² / {} m² = {} set(s) of {} powder + {} CO2 + {} foam",
            row.label, input.area, row.area_norm, units, row.powder, row.co2, row.foam
        ),
    ));

    if let Some(ref note) = row.note {
        tally.warnings.push(note.clone());
    }
    tally
}

fn construction(table: &SubCategoryTable, row: &SubCategoryRule) -> Tally {
    let mut tally = Tally {
        powder: row.powder,
        max_distance: table.max_distance,
        ..Tally::default()
    };
    tally.reasons.push(Reason::new(
        ReasonKind::ReferenceTable,
        "Reference table",
        format!("{}: fixed {} powder extinguisher(s)", row.label, row.powder),
    ));
    if let Some(ref note) = row.note {
        tally.warnings.push(note.clone());
    }
    tally
}

/// Post-processing shared by every branch: totals, reserve, per-floor
/// allocation and the hose-cabinet advisory.
fn finish(input: &CalculationInput, mut tally: Tally) -> CalculationResult {
    let total_portable = tally
        .powder
        .saturating_add(tally.co2)
        .saturating_add(tally.water);

    let reserve = reserve_units(total_portable, input.reserve_percent);
    if reserve > 0 {
        tally.reasons.push(Reason::new(
            ReasonKind::Reserve,
            "Reserve",
            format!(
                "{}% of {} portable unit(s), rounded up = {}",
                input.reserve_percent, total_portable, reserve
            ),
        ));
    }

    if input.has_cabinets {
        tally.warnings.push(CABINET_WARNING.to_string());
    }

    let total_count = total_portable
        .saturating_add(tally.mobile)
        .saturating_add(reserve);

    tracing::debug!(
        object_type = %input.object_type,
        total_portable,
        mobile = tally.mobile,
        reserve,
        "computed extinguisher requirement"
    );

    CalculationResult {
        powder_count: tally.powder,
        co2_count: tally.co2,
        water_count: tally.water,
        mobile_count: tally.mobile,
        reserve_count: reserve,
        total_portable,
        total_count,
        per_floor: distribute(total_portable, input.floors),
        reasons: tally.reasons,
        warnings: tally.warnings,
        max_distance: tally.max_distance,
        sand: tally.sand,
        blanket_count: tally.blanket,
    }
}

/// `ceil(numer / denom)` as a count, saturating at `u32::MAX`.
fn ceil_div(numer: Decimal, denom: Decimal) -> u32 {
    numer
        .checked_div(denom)
        .and_then(|q| q.ceil().to_u32())
        .unwrap_or(u32::MAX)
}

/// `round(value * num / den)` with halves rounded up.
fn round_ratio(value: u32, num: u32, den: u32) -> u32 {
    let scaled = 2 * u64::from(value) * u64::from(num) + u64::from(den);
    let rounded = scaled / (2 * u64::from(den));
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// `ceil(total * percent / 100)`.
fn reserve_units(total: u32, percent: Decimal) -> u32 {
    Decimal::from(total)
        .checked_mul(percent)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|v| v.ceil().to_u32())
        .unwrap_or(u32::MAX)
}

/// Round-robin allocation: unit `i` goes to floor `i mod floors`.
fn distribute(total: u32, floors: u32) -> Vec<u32> {
    let floors = floors.max(1);
    let base = total / floors;
    let remainder = total % floors;
    (0..floors).map(|i| base + u32::from(i < remainder)).collect()
}
