use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, Trim};
use log::debug;
use rayon::prelude::*;
use serde::Deserialize;

use crate::error::{Error, Result};

const MILEAGE_COLUMN: &str = "km";
const PRICE_COLUMN: &str = "price";

#[derive(Debug, Deserialize)]
struct Sample {
    km: f64,
    price: f64,
}

/// Index-aligned mileage and price columns of a `km,price` CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    mileage: Vec<f64>,
    price: Vec<f64>,
}

impl Dataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| load_error(path, e.to_string()))?;
        let dataset = Self::parse(file).map_err(|reason| load_error(path, reason))?;

        debug!("loaded {} samples from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::parse(reader).map_err(|reason| load_error(Path::new("<reader>"), reason))
    }

    pub fn mileage(&self) -> &[f64] {
        &self.mileage
    }

    pub fn price(&self) -> &[f64] {
        &self.price
    }

    pub fn len(&self) -> usize {
        self.mileage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mileage.is_empty()
    }

    fn parse<R: Read>(reader: R) -> std::result::Result<Self, String> {
        let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let headers = rdr.headers().map_err(|e| e.to_string())?.clone();
        for column in [MILEAGE_COLUMN, PRICE_COLUMN] {
            if !headers.iter().any(|h| h == column) {
                return Err(format!("missing column '{}'", column));
            }
        }

        let records = rdr
            .into_records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?;
        if records.is_empty() {
            return Err("no samples".to_string());
        }

        let samples = records
            .into_par_iter()
            .enumerate()
            .map(|(i, record)| {
                record
                    .deserialize::<Sample>(Some(&headers))
                    .map_err(|e| format!("line {}: {}", i + 2, e))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let (mileage, price) = samples.into_iter().map(|s| (s.km, s.price)).unzip();
        Ok(Dataset { mileage, price })
    }
}

fn load_error(path: &Path, reason: String) -> Error {
    Error::DatasetLoad {
        path: path.to_path_buf(),
        reason,
    }
}
