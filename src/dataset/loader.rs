use std::{fs::File, io, path::Path};

use log::debug;
use serde::{de, Deserialize, Deserializer};

use super::{Dataset, HouseRecord};
use crate::Result;

/// The source columns a row needs to become a `HouseRecord`.
///
/// Cells that are empty, `NA` or `NaN` deserialize to `None`.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "GrLivArea", deserialize_with = "missing_or_number")]
    living_area: Option<f64>,
    #[serde(rename = "BedroomAbvGr", deserialize_with = "missing_or_number")]
    bedrooms: Option<f64>,
    #[serde(rename = "BsmtFullBath", deserialize_with = "missing_or_number")]
    bsmt_full_bath: Option<f64>,
    #[serde(rename = "FullBath", deserialize_with = "missing_or_number")]
    full_bath: Option<f64>,
    #[serde(rename = "BsmtHalfBath", deserialize_with = "missing_or_number")]
    bsmt_half_bath: Option<f64>,
    #[serde(rename = "HalfBath", deserialize_with = "missing_or_number")]
    half_bath: Option<f64>,
}

/// Parses a numeric cell, treating the usual missing markers as `None`.
///
/// Any other non-numeric content is a deserialization error.
fn missing_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = String::deserialize(deserializer)?;

    match cell.trim() {
        "" | "NA" | "NaN" | "nan" => Ok(None),
        value => value
            .parse::<f64>()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid number {value:?}: {e}"))),
    }
}

impl RawRow {
    fn into_record(self) -> Option<HouseRecord> {
        let squarefeet = self.living_area?;
        let beds = self.bedrooms?;
        let full_baths = self.bsmt_full_bath? + self.full_bath?;
        let half_baths = self.bsmt_half_bath? + self.half_bath?;

        HouseRecord::new(beds, full_baths + half_baths / 2.0, squarefeet)
    }
}

/// The outcome of loading a tabular source.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    /// The records that had every required value.
    pub dataset: Dataset,
    /// How many rows were left out for missing values.
    pub dropped: usize,
}

/// Loads a dataset from the CSV file at `path`.
///
/// # Errors
/// Returns `RegressionErr::Io` if the file can't be opened and
/// `RegressionErr::Csv` if its contents are not a valid table.
pub fn load<P: AsRef<Path>>(path: P) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let report = from_reader(file)?;

    debug!(
        "loaded {} records from {} ({} dropped)",
        report.dataset.len(),
        path.display(),
        report.dropped
    );

    Ok(report)
}

/// Reads a dataset from any CSV source with a header row.
///
/// Rows missing any of `GrLivArea`, `BedroomAbvGr`, `BsmtFullBath`,
/// `FullBath`, `BsmtHalfBath` or `HalfBath` are dropped. Other columns are
/// ignored.
pub fn from_reader<R: io::Read>(reader: R) -> Result<LoadReport> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut dropped = 0;

    for row in reader.deserialize::<RawRow>() {
        match row?.into_record() {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    Ok(LoadReport {
        dataset: Dataset::new(records),
        dropped,
    })
}
