//! Command-line interface for the converter.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{ConvertOptions, DEFAULT_FEATURE_TAG, DEFAULT_SECTION_TAG};
use crate::converter::convert_file;
use crate::error::{ConverterError, Result};
use crate::sql::{print_sql, write_sql};

/// From HTML, generate MySQL queries to create class features.
#[derive(Debug, Parser)]
#[command(name = "classfeatures")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input HTML file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output SQL file (required unless --dry)
    #[arg(short, long, required_unless_present = "dry")]
    pub output: Option<PathBuf>,

    /// Dry run: print the statements instead of writing a file
    #[arg(short = 'n', long)]
    pub dry: bool,

    /// ID of the class to add the features to (inserted into the SQL as-is)
    #[arg(short, long = "class")]
    pub class_id: String,

    /// Tag of the headings that start a feature
    #[arg(long, default_value = DEFAULT_FEATURE_TAG)]
    pub feature_tag: String,

    /// Tag of the heading that ends the feature section
    #[arg(long, default_value = DEFAULT_SECTION_TAG)]
    pub section_tag: String,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(&cli)
}

/// Execute a parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    let options = ConvertOptions::new(cli.feature_tag.as_str(), cli.section_tag.as_str())?;

    // Check before reading so a bad invocation never does work
    let output = match (&cli.output, cli.dry) {
        (_, true) => None,
        (Some(path), false) => Some(path.as_path()),
        (None, false) => return Err(ConverterError::MissingOutput),
    };

    let Some(output_path) = output else {
        let conversion = convert_file(&cli.input, &options)?;
        report_warnings(&conversion.warnings);
        let mut stdout = io::stdout().lock();
        return print_sql(&mut stdout, &cli.class_id, &conversion.records);
    };

    eprintln!(
        "{} {}",
        style("Converting").bold(),
        style(cli.input.display()).cyan()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Extracting features...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let conversion = match convert_file(&cli.input, &options) {
        Ok(conversion) => conversion,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Writing SQL...");
    if let Err(e) = write_sql(output_path, &cli.class_id, &conversion.records) {
        pb.finish_and_clear();
        return Err(e);
    }
    pb.finish_and_clear();

    eprintln!("  Features: {}", style(conversion.len()).green());
    report_warnings(&conversion.warnings);
    eprintln!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}

fn report_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("  {} {warning}", style("Warning:").yellow().bold());
    }
}
