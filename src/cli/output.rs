//! Output formatting utilities

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::OutputFormat;

/// Determine the effective output format based on context
pub fn effective_format(format: OutputFormat, is_list: bool) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if is_list {
                OutputFormat::Tsv
            } else {
                OutputFormat::Yaml
            }
        }
        other => other,
    }
}

/// Render rows in the requested format
pub fn render_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> Result<String> {
    let rendered = match effective_format(format, true) {
        OutputFormat::Tsv | OutputFormat::Auto => {
            let mut out = T::headers().join("\t");
            out.push('\n');
            for row in rows {
                out.push_str(&row.fields().join("\t"));
                out.push('\n');
            }
            out
        }
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            {
                let mut wtr = csv::Writer::from_writer(&mut buf);
                for row in rows {
                    wtr.serialize(row).into_diagnostic()?;
                }
                wtr.flush().into_diagnostic()?;
            }
            String::from_utf8(buf).into_diagnostic()?
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(rows).into_diagnostic()?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yml::to_string(rows).into_diagnostic()?,
        OutputFormat::Table => {
            let mut table = Table::new(rows).with(Style::rounded()).to_string();
            table.push('\n');
            table
        }
    };
    Ok(rendered)
}

/// Print rows in the requested format
pub fn print_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> Result<()> {
    print!("{}", render_rows(rows, format)?);
    Ok(())
}
