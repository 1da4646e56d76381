//! Input handling: CSV files (or stdin) into loaded tables.

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use relscope_core::{ColumnData, TableData};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Read tables from CSV files, or a single table from stdin when no files
/// are provided. The table name is the file stem.
pub fn read_input(files: &[PathBuf]) -> Result<Vec<TableData>> {
    if files.is_empty() {
        Ok(vec![read_from_stdin()?])
    } else {
        files.iter().map(|path| read_table(path)).collect()
    }
}

fn read_from_stdin() -> Result<TableData> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read from stdin")?;
    parse_csv("stdin", content.as_bytes())
}

fn read_table(path: &Path) -> Result<TableData> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Invalid file name: {}", path.display()))?
        .to_string();
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    parse_csv(&name, &content)
}

/// Parse one CSV document into a table. The header row names the columns;
/// an empty cell is a null.
fn parse_csv(name: &str, content: &[u8]) -> Result<TableData> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header for table `{name}`"))?
        .clone();
    if headers.is_empty() {
        bail!("Table `{name}` has no columns");
    }

    let mut columns: Vec<ColumnData> = headers
        .iter()
        .map(|h| ColumnData {
            name: h.trim().to_string(),
            data_type: None,
            values: Vec::new(),
        })
        .collect();

    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to read CSV record in table `{name}`"))?;
        for (i, column) in columns.iter_mut().enumerate() {
            let cell = record.get(i).unwrap_or("");
            column.values.push(if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            });
        }
    }

    Ok(TableData {
        name: name.to_string(),
        columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_headers_values_and_nulls() {
        let table = parse_csv("orders", b"order_id,customer_id\n1,10\n2,\n3,11\n").unwrap();
        assert_eq!(table.name, "orders");
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].name, "order_id");
        assert_eq!(table.columns[1].values, vec![
            Some("10".to_string()),
            None,
            Some("11".to_string()),
        ]);
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn short_records_pad_with_nulls() {
        let table = parse_csv("t", b"a,b\n1\n").unwrap();
        assert_eq!(table.columns[1].values, vec![None]);
    }

    #[test]
    fn table_name_comes_from_file_stem() {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "id,name").unwrap();
        writeln!(file, "1,ann").unwrap();

        let table = read_table(file.path()).unwrap();
        let stem = file.path().file_stem().unwrap().to_str().unwrap();
        assert_eq!(table.name, stem);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_table(Path::new("/nonexistent/orders.csv")).is_err());
    }
}
