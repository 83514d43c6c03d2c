//! Access-log loading.
//!
//! Strict, all-or-nothing ingest: the loader either returns one record per
//! data row of the source or fails with a [`LoadError`] naming the offending
//! line. Rows are never silently dropped, so downstream counts always agree
//! with the source row count.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use tracing::{debug, info};

use crate::dataset::events::sporting_event_for_path;
use crate::dataset::record::{AgeGroup, Gender, IncomeStatus, ViewRecord};

/// Expected header row of the access log.
pub const EXPECTED_HEADER: &str =
    "time,ip_address,request_method,path,status_code,country,continent,gender,age,income_status";

/// Number of columns per data row.
const COLUMN_COUNT: usize = 10;

/// Accepted time-of-day encodings. One file may mix them freely.
const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M:%S", "%H:%M", "%I:%M:%S %p"];

/// Fatal load failure. No partial dataset is ever produced.
#[derive(Debug)]
pub enum LoadError {
    /// Source file missing or unreadable.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// First line absent or not the expected header.
    MissingHeader { path: PathBuf },
    /// Row does not have the expected column count.
    MalformedRow { line: usize, found: usize },
    /// Timestamp did not match any accepted encoding.
    BadTimestamp { line: usize, value: String },
    /// A categorical or numeric field failed to parse.
    BadField {
        line: usize,
        field: &'static str,
        value: String,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read log {}: {}", path.display(), source)
            }
            Self::MissingHeader { path } => {
                write!(f, "log {} does not start with the expected header", path.display())
            }
            Self::MalformedRow { line, found } => {
                write!(
                    f,
                    "line {}: expected {} columns, found {}",
                    line, COLUMN_COUNT, found
                )
            }
            Self::BadTimestamp { line, value } => {
                write!(f, "line {}: unparsable timestamp {:?}", line, value)
            }
            Self::BadField { line, field, value } => {
                write!(f, "line {}: bad {} value {:?}", line, field, value)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parse a time-of-day string, trying each accepted encoding in order.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value.trim(), fmt).ok())
}

/// Load and validate every row of the access log at `path`.
pub fn load_records(path: &Path) -> Result<Vec<ViewRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(Ok(line)) => line,
        Some(Err(source)) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            return Err(LoadError::MissingHeader {
                path: path.to_path_buf(),
            })
        }
    };
    if header.trim_end() != EXPECTED_HEADER {
        return Err(LoadError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    // Line numbers are 1-based and include the header.
    for (idx, line) in lines.enumerate() {
        let line_no = idx + 2;
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_row(&line, line_no)?);
    }

    let non_sport = records.iter().filter(|r| r.sporting_event.is_none()).count();
    info!(
        rows = records.len(),
        path = %path.display(),
        "access log loaded"
    );
    debug!(non_sport, "rows without a sporting event");
    Ok(records)
}

fn parse_row(line: &str, line_no: usize) -> Result<ViewRecord, LoadError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != COLUMN_COUNT {
        return Err(LoadError::MalformedRow {
            line: line_no,
            found: fields.len(),
        });
    }

    let time = parse_time_of_day(fields[0]).ok_or_else(|| LoadError::BadTimestamp {
        line: line_no,
        value: fields[0].to_string(),
    })?;

    let status: u16 = fields[4]
        .trim()
        .parse()
        .map_err(|_| bad_field(line_no, "status_code", fields[4]))?;
    let gender =
        Gender::parse(fields[7].trim()).ok_or_else(|| bad_field(line_no, "gender", fields[7]))?;
    let age: u8 = fields[8]
        .trim()
        .parse()
        .map_err(|_| bad_field(line_no, "age", fields[8]))?;
    let income = IncomeStatus::parse(fields[9].trim())
        .ok_or_else(|| bad_field(line_no, "income_status", fields[9]))?;

    let path = fields[3].to_string();
    let sporting_event = sporting_event_for_path(&path);

    Ok(ViewRecord {
        time,
        ip_address: fields[1].to_string(),
        method: fields[2].to_string(),
        path,
        status,
        country: fields[5].to_string(),
        continent: fields[6].to_string(),
        gender,
        age,
        income,
        sporting_event,
        age_group: AgeGroup::from_age(age),
    })
}

fn bad_field(line: usize, field: &'static str, value: &str) -> LoadError {
    LoadError::BadField {
        line,
        field,
        value: value.to_string(),
    }
}
