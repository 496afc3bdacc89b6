//! Plain-text reports for calculation results.
//!
//! Engine results are mm-based; this is where they are turned into the
//! metric and imperial display units the user sees.

use std::fmt::Write;

use bar_core::calculations::{BarResult, InverseResult};
use bar_core::materials::MaterialPreset;
use bar_core::profile::BarSpec;
use bar_core::settings::CalculatorSettings;
use bar_core::units::LengthUnit;

const RULE: &str = "═══════════════════════════════════════";

fn fmt(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Echo of the bar as entered
pub fn bar_summary(bar: &BarSpec, decimals: usize) -> String {
    let unit = bar.unit.symbol();
    let dims: Vec<String> = bar
        .dimensions
        .named()
        .into_iter()
        .map(|(name, value)| format!("{} {} {}", name, fmt(value, decimals), unit))
        .collect();
    format!(
        "{}: {}, length {} {}",
        bar.profile(),
        dims.join(", "),
        fmt(bar.length, decimals),
        unit
    )
}

/// Forward results in cm²/in², cm³/in³, kg/lb and currency
pub fn forward_report(
    title: &str,
    bar: &BarSpec,
    result: &BarResult,
    settings: &CalculatorSettings,
) -> String {
    let d = settings.decimals;
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {}", title);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Input:    {}", bar_summary(bar, d));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Cross-section Area: {} cm² ({} sq. inch)",
        fmt(result.area_cm2(), d),
        fmt(result.area_in2(), d)
    );
    let _ = writeln!(
        out,
        "Surface Area:       {} cm² ({} sq. inch)",
        fmt(result.surface_cm2(), d),
        fmt(result.surface_in2(), d)
    );
    let _ = writeln!(
        out,
        "Volume:             {} cm³ ({} cubic inch)",
        fmt(result.volume_cm3(), d),
        fmt(result.volume_in3(), d)
    );
    let _ = writeln!(
        out,
        "Weight:             {} kg ({} lbs)",
        fmt(result.weight_kg, d),
        fmt(result.weight_lb(), d)
    );
    let _ = writeln!(
        out,
        "Total Price:        {} {}",
        settings.currency,
        fmt(result.price, d)
    );
    if let Some(area_price) = result.area_price {
        let _ = writeln!(
            out,
            "Area Price:         {} {}",
            settings.currency,
            fmt(area_price, d)
        );
    }
    out
}

/// Inverse result: the solved dimension in both units, then the forward
/// report for the completed bar
pub fn inverse_report(
    output: &InverseResult,
    display_unit: LengthUnit,
    settings: &CalculatorSettings,
) -> String {
    let d = settings.decimals;
    let mut out = String::new();
    let resolved = output.resolved;

    let _ = writeln!(
        out,
        "Resolved {}: {} {} ({} {})",
        resolved.unknown,
        fmt(resolved.in_unit(display_unit), d),
        display_unit.symbol(),
        fmt(resolved.in_unit(LengthUnit::Mm), d),
        LengthUnit::Mm.symbol()
    );
    let _ = writeln!(out);
    out.push_str(&forward_report("COMPLETED BAR", &output.bar, &output.result, settings));
    out
}

/// Table of material presets
pub fn materials_table() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<18} {:<16} {:>8}", "Code", "Material", "g/cm³");
    for preset in MaterialPreset::ALL {
        let _ = writeln!(
            out,
            "{:<18} {:<16} {:>8.2}",
            preset.code(),
            preset.display_name(),
            preset.density_g_cm3()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bar_core::calculations::{calculate, BarInput};
    use bar_core::materials::MaterialSpec;

    fn square_result() -> (BarSpec, BarResult) {
        let bar = BarSpec::square(10.0, 100.0, LengthUnit::Mm);
        let result = calculate(&BarInput::new("", bar, MaterialSpec::new(7.85, 100.0))).unwrap();
        (bar, result)
    }

    #[test]
    fn test_bar_summary() {
        let bar = BarSpec::flat(20.0, 10.0, 100.0, LengthUnit::Mm);
        assert_eq!(
            bar_summary(&bar, 1),
            "Flat Bar: width 20.0 mm, thickness 10.0 mm, length 100.0 mm"
        );
    }

    #[test]
    fn test_forward_report_units() {
        let (bar, result) = square_result();
        let report = forward_report("RESULTS", &bar, &result, &CalculatorSettings::default());
        assert!(report.contains("Cross-section Area: 1.00 cm²"));
        assert!(report.contains("Volume:             10.00 cm³"));
        assert!(report.contains("Weight:             0.08 kg"));
        assert!(report.contains("Total Price:        Rs. 7.85"));
        assert!(!report.contains("Area Price"));
    }

    #[test]
    fn test_materials_table_lists_all_presets() {
        let table = materials_table();
        for preset in MaterialPreset::ALL {
            assert!(table.contains(preset.code()));
        }
    }

    #[test]
    fn test_forward_report_area_price() {
        let bar = BarSpec::flat(2.0, 0.5, 40.0, LengthUnit::Inch);
        let input =
            BarInput::new("", bar, MaterialSpec::new(7.85, 100.0)).with_price_per_sq_inch(12.0);
        let result = calculate(&input).unwrap();
        let report = forward_report("RESULTS", &bar, &result, &CalculatorSettings::default());
        assert!(report.contains("Area Price:         Rs. 12.00"));
    }
}
