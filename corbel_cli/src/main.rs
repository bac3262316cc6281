//! # Corbel CLI Application
//!
//! Terminal front end for the corbel check. Values come from flags (with the
//! same defaults as the input form), from a JSON input file, or from
//! interactive prompts.
//!
//! ```bash
//! corbel_cli --fed 32.25 --h 0.15 --d1 0.05
//! corbel_cli --input console.json --json
//! corbel_cli --interactive --export --format xlsx
//! ```
//!
//! Exit code: 0 when verified, 1 when not verified, 2 on error.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use corbel_core::calculations::{evaluate, CorbelInput, CorbelResult};
use corbel_core::errors::{CalcError, CalcResult};
use corbel_core::export::{save_export, ExportFormat};
use corbel_core::file_io::load_input;
use corbel_core::report::ResultSummary;
use corbel_core::settings::{Settings, SETTINGS_FILE_NAME};

#[derive(Parser, Debug)]
#[command(
    name = "corbel_cli",
    version,
    allow_negative_numbers = true,
    about = "Simplified ULS check of a short reinforced-concrete corbel"
)]
struct Cli {
    /// Vertical design force Fed (kN)
    #[arg(long, default_value_t = 32.25)]
    fed: f64,

    /// Horizontal design force Hed (kN)
    #[arg(long, default_value_t = 0.0)]
    hed: f64,

    /// Width b (m)
    #[arg(long, default_value_t = 1.0)]
    b: f64,

    /// Total depth h (m)
    #[arg(long, default_value_t = 0.15)]
    h: f64,

    /// Cover to reinforcement d1 (m)
    #[arg(long, default_value_t = 0.05)]
    d1: f64,

    /// Steel yield strength fyk (MPa)
    #[arg(long, default_value_t = 500.0)]
    fyk: f64,

    /// Concrete compressive strength fck (MPa)
    #[arg(long, default_value_t = 20.0)]
    fck: f64,

    /// Label used in the report header
    #[arg(long, default_value = "Console")]
    label: String,

    /// Read the input from a JSON file instead of flags
    #[arg(long, conflicts_with = "interactive")]
    input: Option<PathBuf>,

    /// Prompt for each value (Enter keeps the default)
    #[arg(long)]
    interactive: bool,

    /// Print input and result as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Write the date-named export file
    #[arg(long)]
    export: bool,

    /// Export directory (overrides the settings file)
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Export format: csv, json or xlsx (overrides the settings file)
    #[arg(long, value_parser = parse_format)]
    format: Option<ExportFormat>,

    /// Settings file
    #[arg(long, default_value = SETTINGS_FILE_NAME)]
    settings: PathBuf,
}

impl Cli {
    fn input_from_flags(&self) -> CorbelInput {
        CorbelInput {
            label: self.label.clone(),
            fed_kn: self.fed,
            hed_kn: self.hed,
            b_m: self.b,
            h_m: self.h,
            d1_m: self.d1,
            fyk_mpa: self.fyk,
            fck_mpa: self.fck,
        }
    }
}

fn parse_format(name: &str) -> Result<ExportFormat, String> {
    ExportFormat::from_name(name).ok_or_else(|| format!("unknown export format '{}' (expected csv, json or xlsx)", name))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CORBEL_LOG")
        .unwrap_or_else(|_| EnvFilter::new("corbel_core=warn,corbel_cli=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Prompt for one value; an empty line keeps the default
fn prompt_f64<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    field: &str,
    prompt: &str,
    default: f64,
) -> CalcResult<f64> {
    write!(writer, "{} [{}]: ", prompt, default)
        .and_then(|_| writer.flush())
        .map_err(|e| CalcError::file_error("write", "<stdout>", e.to_string()))?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;

    let raw = line.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    raw.replace(',', ".")
        .parse()
        .map_err(|_| CalcError::invalid_input(field, raw, "Not a number"))
}

fn prompt_input<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, defaults: CorbelInput) -> CalcResult<CorbelInput> {
    Ok(CorbelInput {
        fed_kn: prompt_f64(reader, writer, "fed_kn", "Vertical force Fed (kN)", defaults.fed_kn)?,
        hed_kn: prompt_f64(reader, writer, "hed_kn", "Horizontal force Hed (kN)", defaults.hed_kn)?,
        b_m: prompt_f64(reader, writer, "b_m", "Width b (m)", defaults.b_m)?,
        h_m: prompt_f64(reader, writer, "h_m", "Total depth h (m)", defaults.h_m)?,
        d1_m: prompt_f64(reader, writer, "d1_m", "Cover d1 (m)", defaults.d1_m)?,
        fyk_mpa: prompt_f64(reader, writer, "fyk_mpa", "Steel strength fyk (MPa)", defaults.fyk_mpa)?,
        fck_mpa: prompt_f64(reader, writer, "fck_mpa", "Concrete strength fck (MPa)", defaults.fck_mpa)?,
        ..defaults
    })
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    input: &'a CorbelInput,
    result: &'a CorbelResult,
}

fn resolve_input(cli: &Cli) -> CalcResult<CorbelInput> {
    match &cli.input {
        Some(path) => load_input(path),
        None if cli.interactive => prompt_input(&mut io::stdin().lock(), &mut io::stdout(), cli.input_from_flags()),
        None => Ok(cli.input_from_flags()),
    }
}

fn export(cli: &Cli, date: NaiveDate, input: &CorbelInput, result: &CorbelResult) -> CalcResult<PathBuf> {
    let settings = Settings::load_or_default(&cli.settings)?;
    let dir = cli.export_dir.clone().unwrap_or(settings.export_dir);
    let format = cli.format.unwrap_or(settings.export_format);
    save_export(&dir, date, format, input, result)
}

/// What one run produced
#[derive(Debug)]
struct Outcome {
    verified: bool,
    export_path: Option<PathBuf>,
}

fn run(cli: &Cli, today: NaiveDate) -> CalcResult<Outcome> {
    let input = resolve_input(cli)?;
    debug!(?input, "input resolved");

    let result = evaluate(&input)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&JsonOutput { input: &input, result: &result })?;
        println!("{}", json);
    } else {
        print!("{}", ResultSummary::new(&input, &result).to_text());
    }

    let export_path = if cli.export {
        let path = export(cli, today, &input, &result)?;
        if !cli.json {
            println!();
            println!("Exported to {}", path.display());
        }
        Some(path)
    } else {
        None
    };

    Ok(Outcome {
        verified: result.verified,
        export_path,
    })
}

fn report_error(e: &CalcError) {
    error!(code = e.error_code(), "{}", e);
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli, Local::now().date_naive()) {
        Ok(outcome) if outcome.verified => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            report_error(&e);
            ExitCode::from(2)
        }
    }
}
