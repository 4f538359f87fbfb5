//! # Flexcap CLI
//!
//! Terminal front end for the NZS 3101 beam flexural capacity calculation.
//!
//! Prompts for the twelve section values (press Enter to keep the default
//! shown in brackets), or reads them from a JSON file with `--input`.
//! Set `RUST_LOG=debug` to trace the bisection.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use calc_core::calculations::input_fields::{FieldSpec, INPUT_FIELDS};
use calc_core::calculations::SectionInput;
use calc_core::file_io::{load_section_input, load_settings, save_report};
use calc_core::materials::StressBlockFactors;
use calc_core::report::{CalculationReport, LastCalculation, ReportHeader};
use calc_core::settings::SolverSettings;
use calc_core::{CalcError, CalcResult};

const USAGE: &str = "\
Usage: calc_cli [options]

Options:
  --input <file.json>     Read the section from JSON instead of prompting
  --settings <file.json>  Solver settings (bounds, iterations, tolerance)
  --strict                Treat a solve without equilibrium as an error
  --code-factors          Use NZS 3101 α₁, β₁ for the entered f'c
  --report <path>         Save the text report to <path>
  --equations             Append the list of equations to the report
  --json                  Print the result as JSON
  --label <text>          Member label (default B-1)
  --engineer <name>       Engineer shown in the report header
  --job <id>              Job number shown in the report header
  --print-defaults        Print a default input JSON and exit
  --help                  Show this message";

#[derive(Debug, Default)]
struct Options {
    input: Option<PathBuf>,
    settings: Option<PathBuf>,
    strict: bool,
    code_factors: bool,
    report: Option<PathBuf>,
    equations: bool,
    json: bool,
    label: Option<String>,
    engineer: String,
    job: String,
    print_defaults: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut i = 0;

    let value = |i: usize, flag: &str| -> Result<String, String> {
        args.get(i + 1)
            .cloned()
            .ok_or_else(|| format!("{} requires a value", flag))
    };

    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                options.input = Some(PathBuf::from(value(i, "--input")?));
                i += 1;
            }
            "--settings" => {
                options.settings = Some(PathBuf::from(value(i, "--settings")?));
                i += 1;
            }
            "--report" => {
                options.report = Some(PathBuf::from(value(i, "--report")?));
                i += 1;
            }
            "--label" => {
                options.label = Some(value(i, "--label")?);
                i += 1;
            }
            "--engineer" => {
                options.engineer = value(i, "--engineer")?;
                i += 1;
            }
            "--job" => {
                options.job = value(i, "--job")?;
                i += 1;
            }
            "--strict" => options.strict = true,
            "--code-factors" => options.code_factors = true,
            "--equations" => options.equations = true,
            "--json" => options.json = true,
            "--print-defaults" => options.print_defaults = true,
            "--help" | "-h" => options.help = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

/// Read one line; `None` on EOF or a read error.
fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

fn prompt_field(field: &FieldSpec) -> String {
    print!("{} [{}]: ", field.label, field.default);
    if io::stdout().flush().is_err() {
        return field.default.to_string();
    }

    match read_line() {
        Some(line) if !line.trim().is_empty() => line.trim().to_string(),
        _ => field.default.to_string(),
    }
}

fn prompt_section(label: &str) -> CalcResult<SectionInput> {
    println!("Enter section data (Enter keeps the default):");
    let values: HashMap<String, String> = INPUT_FIELDS
        .iter()
        .map(|field| (field.key.to_string(), prompt_field(field)))
        .collect();
    println!();
    SectionInput::from_field_values(label, &values)
}

fn read_section(options: &Options) -> CalcResult<SectionInput> {
    let mut input = match &options.input {
        Some(path) => load_section_input(path)?,
        None => prompt_section(options.label.as_deref().unwrap_or("B-1"))?,
    };
    if let Some(label) = &options.label {
        input.label = label.clone();
    }

    if options.code_factors {
        let factors = StressBlockFactors::nzs3101(input.fc_mpa)?;
        println!(
            "Using NZS 3101 stress-block factors for f'c = {:.1} MPa: α₁ = {:.3}, β₁ = {:.3}",
            input.fc_mpa, factors.alpha1, factors.beta1
        );
        input.alpha1 = factors.alpha1;
        input.beta1 = factors.beta1;
    }
    Ok(input)
}

fn read_settings(options: &Options) -> CalcResult<SolverSettings> {
    let mut settings = match &options.settings {
        Some(path) => load_settings(path)?,
        None => SolverSettings::default(),
    };
    settings.strict |= options.strict;
    Ok(settings)
}

fn print_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if e.is_input_error() {
        eprintln!("Correct the section data and run again.");
    }
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn banner(title: &str) {
    println!("═══════════════════════════════════════");
    println!("  {}", title);
    println!("═══════════════════════════════════════");
}

fn export_report(last: &LastCalculation, options: &Options, path: &Path) -> CalcResult<()> {
    let report = last.exportable()?;
    let text = if options.equations {
        report.render_with_equations()
    } else {
        report.render()
    };
    save_report(&text, path)
}

fn run(options: &Options) -> bool {
    let settings = match read_settings(options) {
        Ok(settings) => settings,
        Err(e) => {
            print_error(&e);
            return false;
        }
    };

    log::debug!("Solver settings: {:?}", settings);

    let header = ReportHeader::new(options.engineer.clone(), options.job.clone());
    let outcome = read_section(options)
        .and_then(|input| CalculationReport::calculate(header, input, &settings));
    let last = LastCalculation::record(outcome);

    let mut ok = true;
    match &last {
        LastCalculation::Succeeded(report) => {
            banner("BEAM FLEXURAL CAPACITY (NZS 3101)");
            println!();
            println!("{}", last.display_text());
            println!();

            if options.equations {
                print!("{}", report.render_with_equations());
            } else {
                print!("{}", report.render());
            }

            if options.json {
                println!();
                println!("JSON Output (for LLM/API use):");
                if let Ok(json) = serde_json::to_string_pretty(&report.result) {
                    println!("{}", json);
                }
            }
        }
        LastCalculation::Failed(e) => {
            print_error(e);
            ok = false;
        }
        LastCalculation::None => {}
    }

    if let Some(path) = &options.report {
        println!();
        match export_report(&last, options, path) {
            Ok(()) => println!("Report saved to {}", path.display()),
            Err(e) => {
                print_error(&e);
                ok = false;
            }
        }
    }

    ok
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    if options.help {
        println!("{}", USAGE);
        return;
    }

    if options.print_defaults {
        match serde_json::to_string_pretty(&SectionInput::default()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Flexcap - NZS 3101 Beam Flexural Capacity");
    println!("=========================================");
    println!();

    if !run(&options) {
        std::process::exit(1);
    }
}
