//! Command-line surface: `optimize` runs a force generation end to end,
//! `validate` checks a unit catalog for suspicious records.

use std::path::Path;

use crate::catalog::{build_minis, load_collection, load_unit_catalog, units_by_chassis};
use crate::model::mini::pv_sum;
use crate::model::settings::ForceSettings;
use crate::runner::SearchContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Optimize,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("optimize") => Some(Command::Optimize),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Optimize) => handle_optimize(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: muster <optimize|validate>");
            2
        }
    }
}

fn handle_optimize(args: &[String]) -> i32 {
    let (Some(units_path), Some(minis_path)) = (args.get(2), args.get(3)) else {
        eprintln!("usage: muster optimize <units.json> <minis.csv> [max_pv] [seed]");
        return 2;
    };
    let max_points_value = parse_i32_arg(args.get(4), "max_pv", 300);
    let seed = parse_u64_arg(args.get(5), "seed", 0);

    let units = match load_unit_catalog(Path::new(units_path)) {
        Ok(units) => units,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };
    let collection = match load_collection(Path::new(minis_path)) {
        Ok(collection) => collection,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };
    let minis = build_minis(&collection, &units_by_chassis(units));

    let settings = ForceSettings { max_points_value, ..ForceSettings::default() };
    let force = match settings.generate_force(&minis, seed, &SearchContext::default()) {
        Ok(force) => force,
        Err(err) => {
            eprintln!("invalid settings: {err}");
            return 1;
        }
    };

    for unit in &force {
        println!("{unit}");
    }
    println!(
        "total: {} units, {} PV (max {})",
        force.len(),
        pv_sum(&force),
        max_points_value
    );
    0
}

fn handle_validate(args: &[String]) -> i32 {
    let Some(units_path) = args.get(2) else {
        eprintln!("usage: muster validate <units.json>");
        return 2;
    };
    let units = match load_unit_catalog(Path::new(units_path)) {
        Ok(units) => units,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    let mut warnings = 0usize;
    for (index, unit) in units.iter().enumerate() {
        if unit.chassis.trim().is_empty() && unit.clan_chassis.trim().is_empty() {
            eprintln!("record {index}: blank chassis");
            warnings += 1;
        }
        if unit.points_value <= 0 {
            eprintln!(
                "record {index}: non-positive PV for {} {}",
                unit.chassis, unit.variant
            );
            warnings += 1;
        }
    }
    println!("{} records, {} warnings", units.len(), warnings);
    0
}

fn parse_i32_arg(arg: Option<&String>, name: &str, default: i32) -> i32 {
    match arg {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("invalid {name} '{raw}', using {default}");
            default
        }),
        None => default,
    }
}

fn parse_u64_arg(arg: Option<&String>, name: &str, default: u64) -> u64 {
    match arg {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("invalid {name} '{raw}', using {default}");
            default
        }),
        None => default,
    }
}
