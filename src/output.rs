use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Encode `value` onto `out` in the selected format.
pub fn encode<T: Serialize + ?Sized>(
    out: &mut impl Write,
    format: OutputFormat,
    value: &T,
) -> Result<()> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, value).context("cannot encode output as YAML")?
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)
                .context("cannot encode output as JSON")?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
