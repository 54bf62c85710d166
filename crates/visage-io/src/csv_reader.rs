//! CSV file reader with type inference

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use visage_stats::parse_value;

use crate::dataset::{Dataset, REQUIRED_COLUMNS};
use crate::reader::{IoError, IoResult, TableReader};
use crate::schema::{ColumnDescriptor, ColumnType, DataSchema};

/// CSV file reader
pub struct CsvReader {
    path: String,
    delimiter: u8,
}

impl CsvReader {
    /// Open a CSV file
    pub fn open(path: &str) -> IoResult<Self> {
        Self::open_with_options(path, b',')
    }

    /// Open a delimited file with a custom delimiter
    pub fn open_with_options(path: &str, delimiter: u8) -> IoResult<Self> {
        if !Path::new(path).exists() {
            return Err(IoError::FileNotFound(path.to_string()));
        }
        Ok(Self {
            path: path.to_string(),
            delimiter,
        })
    }

    /// Parse CSV text from any reader (header row required)
    pub fn parse<R: Read>(input: R, delimiter: u8) -> IoResult<Dataset> {
        let (headers, records) = read_records(input, delimiter)?;
        build_dataset(headers, records)
    }

    fn file(&self) -> IoResult<BufReader<File>> {
        File::open(&self.path)
            .map(BufReader::new)
            .map_err(|e| IoError::OpenFailed(e.to_string()))
    }
}

impl TableReader for CsvReader {
    fn read_schema(&self) -> IoResult<DataSchema> {
        Ok(self.read_table()?.schema().clone())
    }

    fn read_table(&self) -> IoResult<Dataset> {
        let dataset = Self::parse(self.file()?, self.delimiter)?;
        tracing::info!(
            path = %self.path,
            rows = dataset.num_rows(),
            columns = dataset.num_columns(),
            "loaded table"
        );
        Ok(dataset)
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }

    fn path(&self) -> Option<&str> {
        Some(&self.path)
    }
}

/// Load a CSV file and check it has exactly five columns
pub fn load_csv(path: &str) -> IoResult<Dataset> {
    let dataset = crate::reader::open_file(path)?.read_table()?;
    dataset.require_column_count(REQUIRED_COLUMNS)?;
    Ok(dataset)
}

/// Like `load_csv`, from in-memory text
pub fn load_csv_str(text: &str) -> IoResult<Dataset> {
    let dataset = CsvReader::parse(text.as_bytes(), b',')?;
    dataset.require_column_count(REQUIRED_COLUMNS)?;
    Ok(dataset)
}

fn csv_error(e: csv::Error) -> IoError {
    match e.position() {
        Some(pos) => IoError::InvalidFormat(format!("line {}: {}", pos.line(), e)),
        None => IoError::InvalidFormat(e.to_string()),
    }
}

fn read_records<R: Read>(input: R, delimiter: u8) -> IoResult<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|s| s.to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(IoError::InvalidFormat("missing header row".to_string()));
    }

    let mut seen = HashSet::new();
    if let Some(dup) = headers.iter().find(|h| !seen.insert(h.as_str())) {
        return Err(IoError::InvalidFormat(format!(
            "duplicate column name: {}",
            dup
        )));
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        // Lines made only of delimiters carry no data
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        records.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok((headers, records))
}

fn build_dataset(headers: Vec<String>, records: Vec<Vec<String>>) -> IoResult<Dataset> {
    let num_records = records.len();

    let columns: Vec<ColumnDescriptor> = headers
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let cells: Vec<&str> = records.iter().map(|r| r[i].as_str()).collect();
            let excluded = cells.iter().filter(|c| parse_value(c).is_none()).count();
            if excluded > 0 {
                tracing::warn!(column = %name, excluded, "excluding non-numeric cells");
            }
            ColumnDescriptor::new(name, ColumnType::infer(cells.as_slice())).with_excluded(excluded)
        })
        .collect();

    let rows = records
        .iter()
        .map(|record| record.iter().map(|cell| parse_value(cell)).collect())
        .collect();

    Dataset::new(DataSchema::new(columns, num_records), rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let ds = CsvReader::parse("a,b\n1,2\n3,4\n".as_bytes(), b',').unwrap();
        assert_eq!(ds.num_rows(), 2);
        assert_eq!(ds.schema().column_names(), vec!["a", "b"]);
        assert_eq!(ds.rows()[1], vec![Some(3.0), Some(4.0)]);
        assert_eq!(ds.schema().columns[0].dtype, ColumnType::Int64);
    }

    #[test]
    fn test_parse_excludes_non_numeric() {
        let ds = CsvReader::parse("a,b\n1,x\n 2.5 ,\n".as_bytes(), b',').unwrap();
        assert_eq!(ds.rows()[0], vec![Some(1.0), None]);
        assert_eq!(ds.rows()[1], vec![Some(2.5), None]);
        assert_eq!(ds.schema().columns[1].excluded, 2);
        assert_eq!(ds.schema().columns[1].dtype, ColumnType::Text);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let ds = CsvReader::parse("a,b\n1,2\n\n,\n3,4\n".as_bytes(), b',').unwrap();
        assert_eq!(ds.num_rows(), 2);
    }

    #[test]
    fn test_parse_rejects_ragged_record() {
        let err = CsvReader::parse("a,b\n1,2,3\n".as_bytes(), b',').unwrap_err();
        assert!(matches!(err, IoError::InvalidFormat(_)));
    }

    #[test]
    fn test_parse_rejects_duplicate_headers() {
        let err = CsvReader::parse("a,a\n1,2\n".as_bytes(), b',').unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_parse_tab_delimited() {
        let ds = CsvReader::parse("a\tb\n1\t2\n".as_bytes(), b'\t').unwrap();
        assert_eq!(ds.rows()[0], vec![Some(1.0), Some(2.0)]);
    }

    #[test]
    fn test_open_missing_file() {
        assert!(matches!(
            CsvReader::open("/definitely/not/here.csv"),
            Err(IoError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_load_csv_str_requires_five_columns() {
        let err = load_csv_str("a,b,c\n1,2,3\n").unwrap_err();
        assert!(matches!(
            err,
            IoError::UnsupportedColumnCount {
                found: 3,
                expected: 5
            }
        ));
    }
}
