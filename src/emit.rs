use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{error::Result, index::PageRecord};

/// The document written at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDocument {
    pub commands: Vec<PageRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Compact,
    Pretty,
}

/// Serialize `records` as an [`IndexDocument`] followed by a newline.
pub fn write_index<W: Write>(
    mut writer: W,
    records: Vec<PageRecord>,
    format: OutputFormat,
) -> Result<()> {
    let document = IndexDocument { commands: records };

    match format {
        OutputFormat::Compact => serde_json::to_writer(&mut writer, &document)?,
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut writer, &document)?
        }
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
