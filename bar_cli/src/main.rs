//! # Bar Calculator CLI
//!
//! Terminal host for `bar_core`. Collects bar dimensions, unit and material
//! from flags (or prompts), calls the engine and prints the results in both
//! metric and imperial units, or as JSON with `--json`.
//!
//! ```text
//! bar forward round --diameter 10 --length 100
//! bar forward flat --width 2 --thickness 0.5 --length 40 --unit inch --material brass
//! bar forward square --side 1 --length 12 --unit inch --price-per-sq-inch 3.5
//! bar inverse round --solve-for diameter --target-weight 0.0617 --length 100
//! bar run request.json
//! bar materials
//! bar            # interactive
//! ```

mod interactive;
mod report;

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use bar_core::calculations::{
    calculate, solve, BarInput, CalculationItem, CalculationOutput, InverseInput, KnownDimensions,
    Unknown,
};
use bar_core::errors::CalcError;
use bar_core::materials::{MaterialPreset, MaterialSpec};
use bar_core::profile::{BarSpec, Profile};
use bar_core::settings::CalculatorSettings;
use bar_core::units::LengthUnit;

#[derive(Parser)]
#[command(name = "bar")]
#[command(about = "Steel bar calculator - area, volume, weight, price and inverse sizing")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON settings file with calculator defaults
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Dimensions → area, volume, weight, price
    Forward(ForwardArgs),
    /// Target weight + known dimensions → missing dimension
    Inverse(InverseArgs),
    /// Evaluate a JSON calculation file (one item or an array)
    Run(RunArgs),
    /// List material presets
    Materials,
    /// Prompt for every input
    Interactive,
}

#[derive(Args)]
struct DimensionArgs {
    #[arg(long)]
    diameter: Option<f64>,
    #[arg(long)]
    side: Option<f64>,
    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    thickness: Option<f64>,
    /// Unit for all lengths (mm or inch)
    #[arg(long)]
    unit: Option<LengthUnit>,
}

impl DimensionArgs {
    fn named(&self) -> HashMap<String, f64> {
        [
            ("diameter", self.diameter),
            ("side", self.side),
            ("width", self.width),
            ("thickness", self.thickness),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
        .collect()
    }
}

#[derive(Args)]
struct MaterialArgs {
    /// Density in g/cm³
    #[arg(long, conflicts_with = "material")]
    density: Option<f64>,
    /// Material preset (see `bar materials`)
    #[arg(long)]
    material: Option<MaterialPreset>,
    #[arg(long)]
    price_per_kg: Option<f64>,
}

impl MaterialArgs {
    /// `--density` wins over `--material`, which wins over the settings default
    fn resolve(&self, settings: &CalculatorSettings) -> MaterialSpec {
        let price_per_kg = self.price_per_kg.unwrap_or(settings.default_price_per_kg);
        match (self.density, self.material) {
            (Some(density), _) => MaterialSpec::new(density, price_per_kg),
            (None, Some(preset)) => MaterialSpec::from_preset(preset, price_per_kg),
            (None, None) => settings.material(None, Some(price_per_kg)),
        }
    }
}

#[derive(Args)]
struct ForwardArgs {
    profile: Profile,
    #[command(flatten)]
    dims: DimensionArgs,
    #[arg(long)]
    length: f64,
    #[command(flatten)]
    material: MaterialArgs,
    /// Also price the cross-section per square inch
    #[arg(long)]
    price_per_sq_inch: Option<f64>,
    #[arg(long)]
    label: Option<String>,
}

#[derive(Args)]
struct InverseArgs {
    profile: Profile,
    #[arg(long)]
    solve_for: Unknown,
    /// Target weight in kg
    #[arg(long)]
    target_weight: f64,
    #[command(flatten)]
    dims: DimensionArgs,
    #[arg(long)]
    length: Option<f64>,
    #[command(flatten)]
    material: MaterialArgs,
    #[arg(long)]
    label: Option<String>,
}

#[derive(Args)]
struct RunArgs {
    path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match &cli.settings {
        Some(path) => CalculatorSettings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => CalculatorSettings::default(),
    };

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Forward(args) => forward(args, &settings, cli.json),
        Command::Inverse(args) => inverse(args, &settings, cli.json),
        Command::Run(args) => run_file(args, &settings, cli.json),
        Command::Materials => {
            print!("{}", report::materials_table());
            Ok(())
        }
        Command::Interactive => interactive::run(&settings),
    }
}

fn forward(args: ForwardArgs, settings: &CalculatorSettings, json: bool) -> Result<()> {
    let unit = args.dims.unit.unwrap_or(settings.default_unit);
    let bar = BarSpec::from_named(args.profile, &args.dims.named(), args.length, unit)
        .map_err(|e| report_error(e, json))?;

    let mut input = BarInput::new(
        args.label.unwrap_or_default(),
        bar,
        args.material.resolve(settings),
    );
    input.price_per_sq_inch = args.price_per_sq_inch;
    debug!(profile = %args.profile, %unit, "running forward calculation");

    let result = calculate(&input).map_err(|e| report_error(e, json))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::forward_report("RESULTS", &bar, &result, settings));
    }
    Ok(())
}

fn inverse(args: InverseArgs, settings: &CalculatorSettings, json: bool) -> Result<()> {
    let unit = args.dims.unit.unwrap_or(settings.default_unit);
    let mut named = args.dims.named();
    if let Some(length) = args.length {
        named.insert("length".to_string(), length);
    }

    let input = InverseInput {
        label: args.label.unwrap_or_default(),
        profile: args.profile,
        solve_for: args.solve_for,
        known: KnownDimensions::from_named(&named),
        target_weight_kg: args.target_weight,
        material: args.material.resolve(settings),
        unit,
    };
    debug!(profile = %args.profile, solve_for = %args.solve_for, "running inverse calculation");

    let output = solve(&input).map_err(|e| report_error(e, json))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", report::inverse_report(&output, unit, settings));
    }
    Ok(())
}

fn run_file(args: RunArgs, settings: &CalculatorSettings, json: bool) -> Result<()> {
    let contents = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let items = CalculationItem::items_from_json(&contents)
        .map_err(|e| report_error(e, json))
        .with_context(|| format!("invalid calculation file {}", args.path.display()))?;
    info!(count = items.len(), path = %args.path.display(), "evaluating calculation file");

    let mut outputs = Vec::with_capacity(items.len());
    for item in &items {
        let output = item
            .evaluate()
            .map_err(|e| report_error(e, json))
            .with_context(|| format!("{} calculation '{}' failed", item.calc_type(), item.label()))?;
        outputs.push(output);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    for (item, output) in items.iter().zip(&outputs) {
        let title = if item.label().is_empty() {
            item.calc_type().to_uppercase()
        } else {
            item.label().to_string()
        };
        match (item, output) {
            (CalculationItem::Forward(input), CalculationOutput::Forward(result)) => {
                print!("{}", report::forward_report(&title, &input.bar, result, settings));
            }
            (CalculationItem::Inverse(input), CalculationOutput::Inverse(result)) => {
                println!("{}", title);
                print!("{}", report::inverse_report(result, input.unit, settings));
            }
            _ => unreachable!("evaluate returns the output kind of its item"),
        }
        println!();
    }
    Ok(())
}

/// Print an engine error (as JSON too, in `--json` mode) and hand it back
/// for propagation.
fn report_error(err: CalcError, json: bool) -> CalcError {
    if json {
        if let Ok(text) = serde_json::to_string_pretty(&err) {
            eprintln!("{}", text);
        }
    }
    err
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material_args(density: Option<f64>, material: Option<MaterialPreset>) -> MaterialArgs {
        MaterialArgs {
            density,
            material,
            price_per_kg: None,
        }
    }

    #[test]
    fn test_material_precedence() {
        let settings = CalculatorSettings {
            default_density_g_cm3: 7.9,
            default_price_per_kg: 80.0,
            ..Default::default()
        };

        let spec = material_args(Some(2.0), Some(MaterialPreset::Brass)).resolve(&settings);
        assert_eq!(spec, MaterialSpec::new(2.0, 80.0));

        let spec = material_args(None, Some(MaterialPreset::Brass)).resolve(&settings);
        assert_eq!(spec, MaterialSpec::from_preset(MaterialPreset::Brass, 80.0));

        let spec = material_args(None, None).resolve(&settings);
        assert_eq!(spec, MaterialSpec::new(7.9, 80.0));

        let mut args = material_args(None, None);
        args.price_per_kg = Some(0.0);
        assert_eq!(args.resolve(&settings).price_per_kg, 0.0);
    }

    #[test]
    fn test_density_conflicts_with_material() {
        let parsed = Cli::try_parse_from([
            "bar", "forward", "round", "--diameter", "10", "--length", "100", "--density", "7.0",
            "--material", "brass",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_forward_flags() {
        let cli = Cli::try_parse_from([
            "bar",
            "forward",
            "square",
            "--side",
            "1",
            "--length",
            "12",
            "--unit",
            "inch",
            "--material",
            "stainless",
            "--price-per-sq-inch",
            "3.5",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Forward(args)) => {
                assert_eq!(args.profile, Profile::Square);
                assert_eq!(args.dims.unit, Some(LengthUnit::Inch));
                assert_eq!(args.material.material, Some(MaterialPreset::StainlessSteel));
                assert_eq!(args.price_per_sq_inch, Some(3.5));
            }
            _ => panic!("expected the forward command"),
        }
    }
}
