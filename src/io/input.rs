use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error reading address list file: {0}")]
    ReadError(String),
}

/// Resolves the target argument into a list of addresses.
///
/// An existing file path is read one address per line; anything else is
/// treated as an inline comma-separated list (a single address is a
/// one-entry list). Entries are trimmed and blank ones dropped.
pub fn read_address_list(target: &str) -> Result<Vec<String>, Error> {
    if Path::new(target).is_file() {
        read_from_file(target)
    } else {
        Ok(target
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| entry.to_string())
            .collect())
    }
}

fn read_from_file(file_path: &str) -> Result<Vec<String>, Error> {
    let file = File::open(file_path).map_err(|_| Error::ReadError(file_path.to_string()))?;

    let reader = BufReader::new(file);
    let mut addresses = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|_| Error::ReadError(file_path.to_string()))?;
        let entry = line.trim();
        if !entry.is_empty() {
            addresses.push(entry.to_string());
        }
    }

    Ok(addresses)
}
