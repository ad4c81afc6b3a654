use std::path::Path;

use log::debug;

use crate::{
    error::{Error, Result},
    trainer::LogEntry,
};

/// Human readable progress line for one logged iteration.
pub fn progress_line(entry: &LogEntry) -> String {
    format!(
        "Iteration {}: Cost = {:.4}, theta0 = {:.4}, theta1 = {:.4}",
        entry.iteration, entry.cost, entry.theta0, entry.theta1
    )
}

/// Writes the training history as `iteration,cost,theta0,theta1` rows.
pub fn write_history<P: AsRef<Path>>(path: P, history: &[LogEntry]) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| Error::HistoryWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = csv::Writer::from_path(path).map_err(write_err)?;
    for entry in history {
        wtr.serialize(entry).map_err(write_err)?;
    }
    wtr.flush().map_err(|e| write_err(e.into()))?;

    debug!("{} history rows written to {}", history.len(), path.display());
    Ok(())
}
