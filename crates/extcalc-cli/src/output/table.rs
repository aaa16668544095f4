use extcalc_core::calculate::{CalculationResult, ReasonKind};
use extcalc_core::model::CalculationInput;

pub fn print(input: &CalculationInput, result: &CalculationResult, verbose: bool) {
    let discriminator = match (input.category, input.sub_category.as_deref()) {
        (Some(cat), _) => cat.to_string(),
        (None, Some(sub)) => sub.to_string(),
        (None, None) => "-".to_string(),
    };
    println!(
        "=== {} / {} / {} m² / {} floor(s) ===\n",
        input.object_type, discriminator, input.area, input.floors
    );

    if result.reasons_of(ReasonKind::Exemption).next().is_some() {
        for reason in &result.reasons {
            println!("  {}", reason.text);
        }
        println!("\n  Max distance to extinguisher: {} m\n", result.max_distance);
        return;
    }

    let rows = [
        ("Powder", result.powder_count),
        ("CO2", result.co2_count),
        ("Water/foam", result.water_count),
        ("Mobile", result.mobile_count),
        ("Reserve", result.reserve_count),
    ];
    for (label, count) in rows {
        if count > 0 || verbose {
            println!("  {:<12} {:>5}", label, count);
        }
    }
    println!("  {}", "-".repeat(18));
    println!("  {:<12} {:>5}", "Portable", result.total_portable);
    println!("  {:<12} {:>5}\n", "Total", result.total_count);

    if let Some(sand) = result.sand {
        println!("  Sand: {} m³", sand);
    }
    if let Some(blankets) = result.blanket_count {
        println!("  Fire blankets: {}", blankets);
    }
    println!("  Max distance to extinguisher: {} m", result.max_distance);

    if result.per_floor.len() > 1 {
        let floors: Vec<String> = result
            .per_floor
            .iter()
            .enumerate()
            .map(|(i, n)| format!("{}: {}", i + 1, n))
            .collect();
        println!("  Per floor: {}", floors.join(", "));
    }
    println!();

    if verbose {
        println!("  Calculation:");
        for reason in &result.reasons {
            println!("    {:<24} {}", reason.label, reason.text);
        }
        println!();
    }

    if !result.warnings.is_empty() {
        println!("  Requirements:");
        for w in &result.warnings {
            println!("    - {}", w);
        }
        println!();
    }
}
