//! Prompt-driven session: the terminal version of the calculator form.
//!
//! Every prompt shows its default in brackets; pressing enter (or typing
//! something unparsable) keeps the default.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use tracing::warn;

use bar_core::calculations::{calculate, solve, BarInput, InverseInput, KnownDimensions, Unknown};
use bar_core::profile::{BarSpec, Profile};
use bar_core::settings::CalculatorSettings;
use bar_core::units::LengthUnit;

use crate::report;

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_parse<T: FromStr + Copy>(prompt: &str, default: T) -> T {
    match read_line(prompt) {
        Some(text) if !text.is_empty() => text.parse().unwrap_or_else(|_| {
            warn!(input = %text, "unrecognized input, keeping default");
            default
        }),
        _ => default,
    }
}

/// Positive number with a default; non-positive entries keep the default
fn prompt_positive(prompt: &str, default: f64) -> f64 {
    let value = prompt_parse(prompt, default);
    if value > 0.0 {
        value
    } else {
        warn!(value, "value must be positive, keeping default");
        default
    }
}

/// "Bar type (round/square/flat) [round]: "
fn profile_prompt() -> String {
    let codes: Vec<&str> = Profile::ALL.iter().map(|p| p.code()).collect();
    format!("Bar type ({}) [{}]: ", codes.join("/"), Profile::Round.code())
}

fn wants_inverse(answer: Option<&str>) -> bool {
    matches!(
        answer.map(|a| a.trim().to_lowercase()).as_deref(),
        Some("i") | Some("inverse")
    )
}

fn default_dimension(name: &str) -> f64 {
    match name {
        "width" => 20.0,
        "length" => 100.0,
        _ => 10.0,
    }
}

pub fn run(settings: &CalculatorSettings) -> Result<()> {
    println!("Steel Bar Calculator");
    println!("====================");
    println!();

    let profile: Profile = prompt_parse(&profile_prompt(), Profile::Round);
    let unit_prompt = format!("Unit (mm/inch) [{}]: ", settings.default_unit);
    let unit: LengthUnit = prompt_parse(&unit_prompt, settings.default_unit);
    let inverse =
        wants_inverse(read_line("Calculate (f)orward or (i)nverse from weight? [f]: ").as_deref());

    let density = prompt_positive(
        &format!(
            "Material density (g/cm³) [{}]: ",
            settings.default_density_g_cm3
        ),
        settings.default_density_g_cm3,
    );
    let price_per_kg = prompt_parse(
        &format!(
            "Price per kg ({}) [{}]: ",
            settings.currency, settings.default_price_per_kg
        ),
        settings.default_price_per_kg,
    )
    .max(0.0);
    let material = settings.material(Some(density), Some(price_per_kg));

    println!();

    if inverse {
        let unknowns = Unknown::for_profile(profile);
        let choices: Vec<&str> = unknowns.iter().map(|u| u.name()).collect();
        let solve_for: Unknown = prompt_parse(
            &format!("Solve for ({}) [{}]: ", choices.join("/"), unknowns[0]),
            unknowns[0],
        );
        let target_weight_kg = prompt_positive("Target weight (kg) [1.0]: ", 1.0);

        let mut named = HashMap::new();
        for &name in profile.required_dimensions().iter().chain(["length"].iter()) {
            if name == solve_for.name() {
                continue;
            }
            let default = default_dimension(name);
            let value = prompt_positive(&format!("{} ({}) [{}]: ", name, unit, default), default);
            named.insert(name.to_string(), value);
        }

        let input = InverseInput {
            label: "interactive".to_string(),
            profile,
            solve_for,
            known: KnownDimensions::from_named(&named),
            target_weight_kg,
            material,
            unit,
        };

        println!();
        match solve(&input) {
            Ok(output) => print!("{}", report::inverse_report(&output, unit, settings)),
            Err(e) => eprintln!("Error: {}", e),
        }
    } else {
        let mut named = HashMap::new();
        for &name in profile.required_dimensions() {
            let default = default_dimension(name);
            let value = prompt_positive(&format!("{} ({}) [{}]: ", name, unit, default), default);
            named.insert(name.to_string(), value);
        }
        let length = prompt_positive(&format!("length ({}) [100]: ", unit), 100.0);
        let bar = BarSpec::from_named(profile, &named, length, unit)?;

        let input = BarInput::new("interactive", bar, material);

        println!();
        match calculate(&input) {
            Ok(result) => print!("{}", report::forward_report("RESULTS", &bar, &result, settings)),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_inverse() {
        assert!(wants_inverse(Some("i")));
        assert!(wants_inverse(Some("I")));
        assert!(wants_inverse(Some("Inverse")));
        assert!(!wants_inverse(Some("f")));
        assert!(!wants_inverse(Some("")));
        assert!(!wants_inverse(None));
    }

    #[test]
    fn test_profile_prompt_lists_every_profile() {
        assert_eq!(profile_prompt(), "Bar type (round/square/flat) [round]: ");
    }
}
