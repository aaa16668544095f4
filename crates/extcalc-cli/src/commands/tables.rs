use extcalc_core::error::CalcError;
use extcalc_core::model::{Category, ObjectType};
use extcalc_core::tables::schema::{ReferenceTables, SubCategoryTable};
use std::path::Path;

pub fn list(tables_path: Option<&Path>) -> Result<(), CalcError> {
    let tables = super::load_tables(tables_path)?;

    println!("{} (v{})\n", tables.name, tables.version);
    if let Some(ref desc) = tables.description {
        println!("{}\n", desc);
    }

    for object_type in ObjectType::ALL {
        println!("  {}", object_type);
        match tables.sub_table(object_type) {
            None => {
                for (cat, rule) in &tables.production {
                    println!("    {:<20} {}", cat, rule.label);
                }
            }
            Some(table) => {
                for (key, row) in &table.rows {
                    println!("    {:<20} {}", key, row.label);
                }
            }
        }
        println!();
    }
    Ok(())
}

pub fn explain(tables_path: Option<&Path>, object_type: &str) -> Result<(), CalcError> {
    let tables = super::load_tables(tables_path)?;
    let object_type = ObjectType::parse_key(object_type).ok_or_else(|| CalcError::UnknownKey {
        field: "object type",
        value: object_type.to_string(),
        expected: ObjectType::ALL.map(ObjectType::key).join(", "),
    })?;

    match tables.sub_table(object_type) {
        None => explain_production(&tables),
        Some(table) => explain_sub_table(object_type, table),
    }
    Ok(())
}

fn explain_production(tables: &ReferenceTables) {
    println!("Production rooms, by fire/explosion hazard category\n");
    println!("Units = ceil(area / block area) x units per block. With AUPT the count");
    println!("is halved, then raised to at least 2 per floor. With live electrical");
    println!("equipment 20% (at least 1) are CO2 units. Category D up to 100 m²");
    println!("is exempt.\n");

    println!(
        "  {:<12} {:>10} {:>8} {:>8} {:>10}  Label",
        "Category", "Block m²", "Units", "Dist m", "Mobile >"
    );
    println!("  {}", "-".repeat(60));
    for cat in Category::ALL {
        let Some(rule) = tables.production.get(&cat) else {
            continue;
        };
        let mobile = rule
            .mobile_threshold
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "  {:<12} {:>10} {:>8} {:>8} {:>10}  {}",
            cat.key(),
            rule.block_area,
            rule.powder_norm,
            rule.distance,
            mobile,
            rule.label
        );
    }
    println!();
}

fn explain_sub_table(object_type: ObjectType, table: &SubCategoryTable) {
    println!("{} objects (max distance {} m)\n", object_type, table.max_distance);
    println!("Area norm 0 means a fixed count regardless of area.\n");

    let max_key = table.rows.keys().map(|k| k.len()).max().unwrap_or(10);
    println!(
        "  {:<width$}  {:>9} {:>6} {:>4} {:>5} {:>6} {:>8}",
        "Key",
        "Area m²",
        "Powder",
        "CO2",
        "Foam",
        "Sand",
        "Blanket",
        width = max_key
    );
    println!("  {}", "-".repeat(max_key + 46));
    for (key, row) in &table.rows {
        println!(
            "  {:<width$}  {:>9} {:>6} {:>4} {:>5} {:>6} {:>8}",
            key,
            row.area_norm,
            row.powder,
            row.co2,
            row.foam,
            row.sand.map(|s| s.to_string()).unwrap_or_else(|| "-".into()),
            row.blanket.map(|b| b.to_string()).unwrap_or_else(|| "-".into()),
            width = max_key
        );
        println!("  {:<width$}  {}", "", row.label, width = max_key);
        if let Some(ref note) = row.note {
            println!("  {:<width$}  note: {}", "", note, width = max_key);
        }
    }
    println!();
}

pub fn validate(file: &Path) -> Result<(), CalcError> {
    let tables = extcalc_core::tables::load_tables(file)?;

    println!("Tables '{}' (v{}) are valid.", tables.name, tables.version);
    println!("  Production categories: {}", tables.production.len());
    for object_type in [ObjectType::Service, ObjectType::Petroleum, ObjectType::Construction] {
        if let Some(table) = tables.sub_table(object_type) {
            println!("  {}: {} facility types", object_type, table.rows.len());
        }
    }

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for (key, row) in &tables.service.rows {
        if row.powder == 0 && row.co2 == 0 {
            warnings.push(format!("service row '{}' requires no extinguishers", key));
        }
    }
    for (key, row) in &tables.construction.rows {
        if !row.area_norm.is_zero() {
            warnings.push(format!(
                "construction row '{}' has area_norm {} which is ignored (fixed counts)",
                key, row.area_norm
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
