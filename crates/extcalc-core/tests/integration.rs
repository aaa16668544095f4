//! Integration tests for the public calculator API.
//!
//! All tests run against the built-in MChS RK reference tables.

use extcalc_core::calculate::{compute, ReasonKind};
use extcalc_core::error::CalcError;
use extcalc_core::model::{CalculationInput, Category, ObjectType};
use extcalc_core::parsing::FormInput;
use extcalc_core::tables::builtin::load_default;
use extcalc_core::tables::schema::ReferenceTables;
use extcalc_core::{calculate_form, missing_field};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn tables() -> ReferenceTables {
    load_default().unwrap()
}

fn areas() -> [Decimal; 8] {
    [
        dec!(0.5),
        dec!(50),
        dec!(100),
        dec!(101),
        dec!(499.9),
        dec!(1200),
        dec!(4321.5),
        dec!(25000),
    ]
}

/// Every valid input combination used by the property checks below.
fn all_inputs(tables: &ReferenceTables) -> Vec<CalculationInput> {
    let mut inputs = Vec::new();
    for area in areas() {
        for floors in [1, 2, 5, 250] {
            for category in Category::ALL {
                let mut input = CalculationInput::production(category, area);
                input.floors = floors;
                inputs.push(input);
            }
            for object_type in [ObjectType::Service, ObjectType::Petroleum, ObjectType::Construction] {
                let table = tables.sub_table(object_type).unwrap();
                for key in table.rows.keys() {
                    let mut input = CalculationInput::facility(object_type, key, area);
                    input.floors = floors;
                    inputs.push(input);
                }
            }
        }
    }
    inputs
}

// ---------------------------------------------------------------------------
// Contract: no result without a positive area
// ---------------------------------------------------------------------------
#[test]
fn non_positive_area_never_yields_result() {
    let t = tables();
    for mut input in all_inputs(&t) {
        for area in [dec!(0), dec!(-1), dec!(-1000.25)] {
            input.area = area;
            input.has_aupt = true;
            input.has_cabinets = true;
            assert!(compute(&t, &input).is_none(), "{input:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// Category D exemption boundary
// ---------------------------------------------------------------------------
#[test]
fn category_d_exemption_at_100() {
    let r = compute(&tables(), &CalculationInput::production(Category::D, dec!(100))).unwrap();
    assert_eq!(r.total_count, 0);
    assert_eq!(r.total_portable, 0);
    assert_eq!(r.max_distance, 70);
    assert_eq!(r.reasons.len(), 1);
    assert_eq!(r.reasons[0].kind, ReasonKind::Exemption);
    assert!(r.warnings.is_empty());
}

#[test]
fn category_d_at_101() {
    let r = compute(&tables(), &CalculationInput::production(Category::D, dec!(101))).unwrap();
    assert_eq!(r.powder_count, 2);
    assert_eq!(r.co2_count, 0);
    assert_eq!(r.total_portable, 2);
    assert_eq!(r.reserve_count, 1);
    assert_eq!(r.total_count, 3);
}

// ---------------------------------------------------------------------------
// Properties over the whole input space
// ---------------------------------------------------------------------------
#[test]
fn compute_is_idempotent() {
    let t = tables();
    for input in all_inputs(&t) {
        assert_eq!(compute(&t, &input), compute(&t, &input));
    }
}

#[test]
fn per_floor_sums_to_total_portable() {
    let t = tables();
    for input in all_inputs(&t) {
        let r = compute(&t, &input).unwrap();
        assert_eq!(r.per_floor.len(), input.floors as usize);
        assert_eq!(r.per_floor.iter().sum::<u32>(), r.total_portable, "{input:?}");
        let max = r.per_floor.iter().max().copied().unwrap_or(0);
        let min = r.per_floor.iter().min().copied().unwrap_or(0);
        assert!(max - min <= 1, "unbalanced allocation for {input:?}");
    }
}

#[test]
fn totals_are_consistent() {
    let t = tables();
    for input in all_inputs(&t) {
        let r = compute(&t, &input).unwrap();
        assert_eq!(r.total_portable, r.powder_count + r.co2_count + r.water_count);
        assert_eq!(r.total_count, r.total_portable + r.mobile_count + r.reserve_count);
    }
}

#[test]
fn aupt_never_increases_portable_count() {
    let t = tables();
    for category in Category::ALL {
        for area in areas() {
            for floors in [1, 3] {
                let mut without = CalculationInput::production(category, area);
                without.floors = floors;
                let mut with = without.clone();
                with.has_aupt = true;
                let a = compute(&t, &with).unwrap();
                let b = compute(&t, &without).unwrap();
                assert!(a.total_portable <= b.total_portable, "{category} {area} {floors}");
            }
        }
    }
}

#[test]
fn electrical_implies_co2() {
    let t = tables();
    for category in Category::ALL {
        for area in areas() {
            let mut input = CalculationInput::production(category, area);
            input.has_electrical = true;
            let r = compute(&t, &input).unwrap();
            if r.total_portable > 0 {
                assert!(r.co2_count >= 1, "{category} {area}");
            }
        }
    }
}

#[test]
fn reserve_is_monotonic_in_percent() {
    let t = tables();
    let percents = [dec!(0), dec!(5), dec!(10), dec!(12.5), dec!(50), dec!(100)];
    for mut input in all_inputs(&t) {
        let mut previous = 0;
        for percent in percents {
            input.reserve_percent = percent;
            let r = compute(&t, &input).unwrap();
            assert!(r.reserve_count >= previous);
            previous = r.reserve_count;
        }
    }
}

#[test]
fn garage_powder_is_area_independent() {
    let t = tables();
    let expected = t.service.rows["garage"].powder;
    for area in areas() {
        let input = CalculationInput::facility(ObjectType::Service, "garage", area);
        assert_eq!(compute(&t, &input).unwrap().powder_count, expected);
    }
}

#[test]
fn sand_and_blankets_only_for_petroleum() {
    let t = tables();
    for input in all_inputs(&t) {
        let r = compute(&t, &input).unwrap();
        if input.object_type != ObjectType::Petroleum {
            assert!(r.sand.is_none());
            assert!(r.blanket_count.is_none());
        }
    }
}

// ---------------------------------------------------------------------------
// Form boundary
// ---------------------------------------------------------------------------
#[test]
fn form_with_comma_decimal_and_flags() {
    let t = tables();
    let form = FormInput {
        object_type: "PRODUCTION".into(),
        area: "1 200,0".into(),
        category: "A".into(),
        floors: "2".into(),
        has_electrical: true,
        has_cabinets: true,
        reserve_percent: "10".into(),
        ..FormInput::default()
    };
    let (input, r) = calculate_form(&form, &t).unwrap();
    let r = r.unwrap();
    assert_eq!(input.area, dec!(1200));
    // 6 blocks x 2 = 12; CO2 round(2.4) = 2
    assert_eq!(r.co2_count, 2);
    assert_eq!(r.powder_count, 10);
    assert_eq!(r.mobile_count, 2);
    assert_eq!(r.per_floor, vec![6, 6]);
    assert_eq!(r.warnings.len(), 1);
}

#[test]
fn form_floor_count_is_not_capped() {
    let form = FormInput {
        object_type: "production".into(),
        area: "101".into(),
        category: "D".into(),
        floors: "250".into(),
        ..FormInput::default()
    };
    let (input, r) = calculate_form(&form, &tables()).unwrap();
    let r = r.unwrap();
    assert_eq!(input.floors, 250);
    assert_eq!(r.powder_count, 500);
    assert_eq!(r.per_floor.len(), 250);
    assert_eq!(r.per_floor.iter().sum::<u32>(), 500);
}

#[test]
fn form_incomplete_is_not_an_error() {
    let t = tables();
    let form = FormInput {
        object_type: "service".into(),
        area: "300".into(),
        ..FormInput::default()
    };
    let (input, r) = calculate_form(&form, &t).unwrap();
    assert!(r.is_none());
    assert_eq!(missing_field(&input), Some("sub-category"));

    let garbage_area = FormInput {
        object_type: "production".into(),
        area: "abc".into(),
        category: "B".into(),
        ..FormInput::default()
    };
    let (input, r) = calculate_form(&garbage_area, &t).unwrap();
    assert!(r.is_none());
    assert_eq!(missing_field(&input), Some("area"));
}

#[test]
fn form_unknown_sub_category_is_rejected() {
    let form = FormInput {
        object_type: "construction".into(),
        area: "300".into(),
        sub_category: "moon_base".into(),
        ..FormInput::default()
    };
    let err = calculate_form(&form, &tables()).unwrap_err();
    assert!(matches!(err, CalcError::UnknownSubCategory { .. }));
    assert!(err.to_string().contains("moon_base"));
}

#[test]
fn missing_field_names_the_prompt() {
    let mut input = CalculationInput {
        object_type: ObjectType::Production,
        ..CalculationInput::default()
    };
    assert_eq!(missing_field(&input), Some("area"));
    input.area = dec!(10);
    assert_eq!(missing_field(&input), Some("category"));
    input.category = Some(Category::G);
    assert_eq!(missing_field(&input), None);

    let svc = CalculationInput {
        object_type: ObjectType::Service,
        area: dec!(10),
        ..CalculationInput::default()
    };
    assert_eq!(missing_field(&svc), Some("sub-category"));
}

#[test]
fn result_serializes_with_snake_case_reasons() {
    let input = CalculationInput::facility(ObjectType::Petroleum, "pump_station", dec!(350));
    let r = compute(&tables(), &input).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["reasons"][0]["kind"], "reference_table");
    assert_eq!(json["sand"], "1.0");
    assert_eq!(json["blanket_count"], 2);
}
