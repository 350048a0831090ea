use std::path::{Path, PathBuf};

use anyhow::Context;
use log::*;

use crate::meta::ShaderMeta;
use crate::output::{self, OutputFormat};
use crate::reflection::{ReflectionProvider, reflect_shader};
use crate::util::json_files;

pub struct Config {
    /// a reflection file, or a directory of `.json` reflection files
    pub input: PathBuf,
    /// the json document (or, for a directory input, the directory) to write;
    /// documents are printed to stdout when absent
    pub output: Option<PathBuf>,
    /// overrides the default of compact for files and pretty for stdout
    pub format: Option<OutputFormat>,
}

impl Config {
    pub fn output_format(&self) -> OutputFormat {
        match (self.format, &self.output) {
            (Some(format), _) => format,
            (None, Some(_)) => OutputFormat::Compact,
            (None, None) => OutputFormat::Pretty,
        }
    }
}

/// Builds the metadata document for one input file.
///
/// The reflection handle is dropped before this returns, whether or not the build succeeded.
pub fn reflect_file<P: ReflectionProvider>(
    provider: &P,
    input: &Path,
) -> anyhow::Result<ShaderMeta> {
    let bytes = std::fs::read(input)
        .with_context(|| format!("failed to read shader input {}", input.display()))?;

    let reflection = provider
        .create_reflection(&bytes)
        .with_context(|| format!("failed to open {}", input.display()))?;
    let meta = reflect_shader(&reflection)
        .with_context(|| format!("failed to reflect {}", input.display()))?;

    Ok(meta)
}

pub fn run<P: ReflectionProvider>(provider: &P, config: &Config) -> anyhow::Result<()> {
    let format = config.output_format();

    if !config.input.is_dir() {
        let meta = reflect_file(provider, &config.input)?;
        return emit(&meta, format, config.output.as_deref());
    }

    let inputs = json_files(&config.input)
        .with_context(|| format!("failed to list {}", config.input.display()))?;
    info!("reflecting {} files in {}", inputs.len(), config.input.display());

    for input in &inputs {
        let meta = reflect_file(provider, input)?;
        let output_path = config
            .output
            .as_deref()
            .map(|output_dir| output_dir.join(meta_file_name(input)));
        emit(&meta, format, output_path.as_deref())?;
    }

    Ok(())
}

/// `particles.cs.json` -> `particles.cs.meta.json`
pub fn meta_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    format!("{stem}.meta.json")
}

fn emit(meta: &ShaderMeta, format: OutputFormat, output_path: Option<&Path>) -> anyhow::Result<()> {
    let json = output::to_json(meta, format)?;

    let Some(output_path) = output_path else {
        println!("{json}");
        return Ok(());
    };

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, json)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    info!("wrote {}", output_path.display());

    Ok(())
}
