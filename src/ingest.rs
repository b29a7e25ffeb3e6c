//! CSV ingestion for the two source datasets.
//!
//! A missing required column is a fatal configuration error raised against
//! the header row before any row processing; an unparseable cell only skips
//! its row.

use std::path::Path;

use csv::StringRecord;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{AreaRecord, ListingRecord};

/// Errors raised while reading a source CSV
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("required column {column:?} missing from {path}")]
    MissingColumn { column: &'static str, path: String },
}

struct AreaColumns {
    name: usize,
    assault: usize,
    homicide: usize,
    robbery: usize,
    latitude: usize,
    longitude: usize,
}

struct ListingColumns {
    bedrooms: usize,
    bathrooms: usize,
    address: usize,
    price: usize,
    latitude: usize,
    longitude: usize,
}

/// Load raw neighbourhood rows from the crime-rates CSV
pub fn load_area_records(path: impl AsRef<Path>) -> Result<Vec<AreaRecord>, IngestError> {
    let path = path.as_ref();
    let mut reader = open(path)?;
    let headers = headers(&mut reader, path)?;

    let columns = AreaColumns {
        name: column_index(&headers, "NEIGHBOURHOOD_NAME", path)?,
        assault: column_index(&headers, "ASSAULT_RATE_2024", path)?,
        homicide: column_index(&headers, "HOMICIDE_RATE_2024", path)?,
        robbery: column_index(&headers, "ROBBERY_RATE_2024", path)?,
        latitude: column_index(&headers, "latitude", path)?,
        longitude: column_index(&headers, "longitude", path)?,
    };

    let mut records = Vec::new();
    let mut skipped = 0;
    for (line, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                warn!(line = line + 2, %err, "skipping malformed CSV row");
                skipped += 1;
                continue;
            }
        };
        match parse_area_row(&row, &columns) {
            Some(record) => records.push(record),
            None => {
                warn!(line = line + 2, "skipping area row with unparseable cells");
                skipped += 1;
            }
        }
    }

    info!(
        path = %path.display(),
        rows = records.len(),
        skipped,
        "loaded area records"
    );
    Ok(records)
}

/// Load raw listing rows from the rental-prices CSV
pub fn load_listing_records(path: impl AsRef<Path>) -> Result<Vec<ListingRecord>, IngestError> {
    let path = path.as_ref();
    let mut reader = open(path)?;
    let headers = headers(&mut reader, path)?;

    let columns = ListingColumns {
        bedrooms: column_index(&headers, "Bedroom", path)?,
        bathrooms: column_index(&headers, "Bathroom", path)?,
        address: column_index(&headers, "Address", path)?,
        price: column_index(&headers, "Price", path)?,
        latitude: column_index(&headers, "Lat", path)?,
        longitude: column_index(&headers, "Long", path)?,
    };

    let mut records = Vec::new();
    let mut skipped = 0;
    for (line, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                warn!(line = line + 2, %err, "skipping malformed CSV row");
                skipped += 1;
                continue;
            }
        };
        match parse_listing_row(&row, &columns) {
            Some(record) => records.push(record),
            None => {
                warn!(line = line + 2, "skipping listing row with unparseable cells");
                skipped += 1;
            }
        }
    }

    info!(
        path = %path.display(),
        rows = records.len(),
        skipped,
        "loaded listing records"
    );
    Ok(records)
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, IngestError> {
    csv::Reader::from_path(path).map_err(|source| IngestError::Csv {
        path: path.display().to_string(),
        source,
    })
}

fn headers(
    reader: &mut csv::Reader<std::fs::File>,
    path: &Path,
) -> Result<StringRecord, IngestError> {
    reader
        .headers()
        .map(|headers| headers.clone())
        .map_err(|source| IngestError::Csv {
            path: path.display().to_string(),
            source,
        })
}

fn column_index(
    headers: &StringRecord,
    column: &'static str,
    path: &Path,
) -> Result<usize, IngestError> {
    headers
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| IngestError::MissingColumn {
            column,
            path: path.display().to_string(),
        })
}

fn parse_area_row(row: &StringRecord, columns: &AreaColumns) -> Option<AreaRecord> {
    Some(AreaRecord {
        name: row.get(columns.name)?.trim().to_string(),
        assault_rate: parse_f64(row.get(columns.assault)?)?,
        homicide_rate: parse_f64(row.get(columns.homicide)?)?,
        robbery_rate: parse_f64(row.get(columns.robbery)?)?,
        latitude: parse_f64(row.get(columns.latitude)?)?,
        longitude: parse_f64(row.get(columns.longitude)?)?,
    })
}

fn parse_listing_row(row: &StringRecord, columns: &ListingColumns) -> Option<ListingRecord> {
    Some(ListingRecord {
        bedrooms: parse_count(row.get(columns.bedrooms)?)?,
        bathrooms: parse_count(row.get(columns.bathrooms)?)?,
        address: row.get(columns.address)?.trim().to_string(),
        price: parse_price(row.get(columns.price)?)?,
        latitude: parse_f64(row.get(columns.latitude)?)?,
        longitude: parse_f64(row.get(columns.longitude)?)?,
    })
}

fn parse_f64(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

/// Counts sometimes arrive as "2.0" from upstream spreadsheet exports
fn parse_count(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(count) = raw.parse::<u32>() {
        return Some(count);
    }
    let value: f64 = raw.parse().ok()?;
    if value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

/// Price cells carry currency formatting like "$2,100.0"
fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .trim_start_matches('$')
        .replace(',', "")
        .parse()
        .ok()
}
