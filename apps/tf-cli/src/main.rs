use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tf_fluids::{FluidError, GivenProperty, State, StateReport, StateSpec};
use tf_tables::{TableError, TableSet, TableSources, load_tables};
use thiserror::Error;
use tracing::{Level, debug};

#[derive(Parser)]
#[command(name = "tf-cli")]
#[command(about = "ThermoFlow CLI - Water state properties from steam tables", long_about = None)]
struct Cli {
    /// YAML file naming the table sources
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the table files (overrides the config)
    #[arg(long, global = true)]
    tables_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one state and print its properties
    State(StateArgs),
    /// Summarize the loaded tables
    Tables,
    /// Show a substance's critical properties
    Critical {
        /// Substance name or formula (e.g. Water, H2O)
        substance: String,
    },
}

#[derive(Args)]
struct StateArgs {
    /// Material (only water is tabulated)
    #[arg(long, default_value = "water")]
    material: String,

    /// Mass [kg]
    #[arg(short, long)]
    mass: f64,

    /// Temperature [°C]
    #[arg(short = 'T', long)]
    temperature: Option<f64>,

    /// Pressure [MPa]
    #[arg(short = 'P', long)]
    pressure: Option<f64>,

    #[command(flatten)]
    intensive: IntensiveArgs,

    /// Total volume [m^3]
    #[arg(long = "volume")]
    volume: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

/// At most one intensive property besides T and P.
#[derive(Args)]
#[group(multiple = false)]
struct IntensiveArgs {
    /// Quality [-]
    #[arg(short = 'x', long)]
    quality: Option<f64>,

    /// Specific volume [m^3/kg]
    #[arg(long = "v")]
    specific_volume: Option<f64>,

    /// Specific internal energy [kJ/kg]
    #[arg(long = "u")]
    internal_energy: Option<f64>,

    /// Specific enthalpy [kJ/kg]
    #[arg(long = "h")]
    enthalpy: Option<f64>,

    /// Specific entropy [kJ/(kg K)]
    #[arg(long = "s")]
    entropy: Option<f64>,
}

impl IntensiveArgs {
    fn given(&self) -> Option<GivenProperty> {
        self.specific_volume
            .map(GivenProperty::specific_volume)
            .or(self.internal_energy.map(GivenProperty::internal_energy))
            .or(self.enthalpy.map(GivenProperty::enthalpy))
            .or(self.entropy.map(GivenProperty::entropy))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Fluid(#[from] FluidError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML output failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("'{substance}' not found in the critical properties table")]
    UnknownSubstance { substance: String },

    #[error("Output failed: {0}")]
    Io(#[from] io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let default_level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    let sources = table_sources(&cli)?;
    debug!(directory = %sources.directory.display(), "loading tables");
    let tables = load_tables(&sources)?;

    match cli.command {
        Commands::State(args) => cmd_state(&tables, &args),
        Commands::Tables => cmd_tables(&tables),
        Commands::Critical { substance } => cmd_critical(&tables, &substance),
    }
}

fn table_sources(cli: &Cli) -> CliResult<TableSources> {
    let sources = match &cli.config {
        Some(path) => TableSources::load_yaml(path)?,
        None => TableSources::default(),
    };
    Ok(match &cli.tables_dir {
        Some(dir) => sources.with_directory(dir.clone()),
        None => sources,
    })
}

fn cmd_state(tables: &TableSet, args: &StateArgs) -> CliResult<()> {
    let mut spec = StateSpec::new(args.material.as_str()).mass(args.mass);
    spec.temperature = args.temperature;
    spec.pressure = args.pressure;
    spec.volume = args.volume;
    spec.quality = args.intensive.quality;
    spec.given = args.intensive.given();

    let state = State::new(tables, spec)?;
    let report = state.assemble_report()?;

    let mut out = io::stdout().lock();
    match args.format {
        Format::Table => write_report_table(&mut out, &report)?,
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        Format::Yaml => write!(out, "{}", serde_yaml::to_string(&report)?)?,
    }
    Ok(())
}

fn write_report_table(out: &mut impl Write, report: &StateReport) -> io::Result<()> {
    let labels = report.labels();
    let entries = report.entries();
    let width = labels
        .iter()
        .map(|(label, _)| label.chars().count())
        .chain(entries.iter().map(|(label, _)| label.chars().count()))
        .max()
        .unwrap_or(0);

    for (label, text) in labels {
        writeln!(out, "{label:<width$}  {}", text.unwrap_or("-"))?;
    }
    for (label, value) in entries {
        match value {
            Some(v) => writeln!(out, "{label:<width$}  {v}")?,
            None => writeln!(out, "{label:<width$}  -")?,
        }
    }
    Ok(())
}

fn cmd_tables(tables: &TableSet) -> CliResult<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{:<26} {:>6}  {:<22} {:<22}", "TABLE", "ROWS", "T (°C)", "P (MPa)")?;
    for summary in tables.summary() {
        writeln!(
            out,
            "{:<26} {:>6}  {:<22} {:<22}",
            summary.kind.name(),
            summary.rows,
            format_range(summary.temperature_range),
            format_range(summary.pressure_range),
        )?;
    }
    writeln!(out, "{:<26} {:>6}", "critical-properties", tables.critical().len())?;
    Ok(())
}

fn format_range(range: Option<(f64, f64)>) -> String {
    match range {
        Some((lo, hi)) => format!("{lo} .. {hi}"),
        None => "-".to_string(),
    }
}

fn cmd_critical(tables: &TableSet, substance: &str) -> CliResult<()> {
    let record = tables
        .critical()
        .find(substance)
        .ok_or_else(|| CliError::UnknownSubstance {
            substance: substance.to_string(),
        })?;

    let mut out = io::stdout().lock();
    for (header, value) in record.iter() {
        writeln!(out, "{header}: {value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tf_tables::fixtures::water_tables;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn intensive_properties_are_exclusive() {
        let parsed = Cli::try_parse_from(["tf-cli", "state", "-m", "1", "-T", "100", "-x", "0.5", "--h", "2000"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn tables_dir_overrides_default_directory() {
        let cli = Cli::try_parse_from(["tf-cli", "--tables-dir", "data", "tables"]).unwrap();
        let sources = table_sources(&cli).unwrap();
        assert_eq!(sources.directory, PathBuf::from("data"));
    }

    #[test]
    fn table_output_marks_absent_values() {
        let tables = water_tables();
        let state = State::new(
            &tables,
            StateSpec::new("water").mass(1.0).temperature(150.0).pressure(0.5),
        )
        .unwrap();
        let report = state.assemble_report().unwrap();

        let mut buf = Vec::new();
        write_report_table(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let hfg = text
            .lines()
            .find(|l| l.starts_with("Enthalpy of Vaporization"))
            .unwrap();
        assert!(hfg.trim_end().ends_with('-'));
        assert!(text.contains("Compressed Liquid"));
    }
}
