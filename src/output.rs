use crate::error::Result;
use crate::meta::ShaderMeta;

/// Both formats carry the same fields; only whitespace differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// single line, for files consumed by tools
    Compact,
    /// indented, for reading in a terminal
    Pretty,
}

pub fn to_json(meta: &ShaderMeta, format: OutputFormat) -> Result<String> {
    let json = match format {
        OutputFormat::Compact => serde_json::to_string(meta)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(meta)?,
    };

    Ok(json)
}

/// parses a document, collapsing empty collections the same way the composer does
pub fn from_json(json: &str) -> Result<ShaderMeta> {
    let meta: ShaderMeta = serde_json::from_str(json)?;
    Ok(meta.normalized())
}
