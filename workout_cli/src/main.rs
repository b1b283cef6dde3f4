use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use workout_core::*;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Fitness tracker workout statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Skip readings that cannot be dispatched instead of aborting
    #[arg(long, global = true)]
    skip_invalid: bool,

    /// Use a specific config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the built-in sample readings (default)
    Demo,

    /// Compute a single reading, e.g. `show RUN 15000 1 75`
    Show {
        /// Workout code (SWM, RUN, WLK)
        code: String,

        /// Positional sensor values
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Compute every reading in a JSONL package file
    Run {
        /// Path to the package file
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Csv,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Csv => ReportFormat::Csv,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    workout_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format = cli.format.map(ReportFormat::from).unwrap_or(config.output.format);
    let policy = if cli.skip_invalid {
        ErrorPolicy::Skip
    } else {
        config.driver.on_error
    };
    tracing::debug!("Report format: {}, error policy: {:?}", format, policy);

    match cli.command {
        Some(Commands::Show { code, values }) => cmd_show(code, values, format),
        Some(Commands::Run { file }) => cmd_run(file, format, policy),
        Some(Commands::Demo) | None => {
            // Default to the sample readings
            cmd_demo(format, policy)
        }
    }
}

fn cmd_demo(format: ReportFormat, policy: ErrorPolicy) -> Result<()> {
    let messages = run_packages(sample_packages(), policy)?;
    render(&messages, format, io::stdout().lock())
}

fn cmd_show(code: String, values: Vec<f64>, format: ReportFormat) -> Result<()> {
    let info = summarize(&Package::new(code, values))?;
    render(&[info], format, io::stdout().lock())
}

fn cmd_run(file: PathBuf, format: ReportFormat, policy: ErrorPolicy) -> Result<()> {
    let packages = read_packages(&file)?;
    let messages = run_packages(&packages, policy)?;

    if messages.len() < packages.len() {
        eprintln!(
            "Skipped {} of {} readings",
            packages.len() - messages.len(),
            packages.len()
        );
    }

    render(&messages, format, io::stdout().lock())
}
