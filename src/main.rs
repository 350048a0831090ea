use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use shader_meta::extract::{self, Config};
use shader_meta::output::OutputFormat;
use shader_meta::snapshot::SnapshotProvider;

#[derive(Parser, Debug)]
#[command(
    name = "shader-meta",
    about = "Convert D3D12 shader reflection data into a portable json metadata document."
)]
struct Args {
    /// Input reflection file, or a directory of them
    input: PathBuf,

    /// Output json file, or directory for a directory input (prints to stdout when omitted)
    output: Option<PathBuf>,

    /// Json layout (defaults to compact for files and pretty for stdout)
    #[arg(long, value_enum)]
    format: Option<Format>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Compact,
    Pretty,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Compact => OutputFormat::Compact,
            Format::Pretty => OutputFormat::Pretty,
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    pretty_env_logger::init();

    let args = Args::parse();

    let input = std::path::absolute(&args.input)?;
    let output = args.output.as_deref().map(std::path::absolute).transpose()?;

    eprintln!("{} {}", " Input:".green(), input.display());
    if let Some(output) = &output {
        eprintln!("{} {}", "Output:".yellow(), output.display());
    }
    eprintln!("{}", "-".repeat(40).dimmed());

    let config = Config {
        input,
        output,
        format: args.format.map(OutputFormat::from),
    };

    extract::run(&SnapshotProvider, &config)?;

    Ok(())
}
