//! CSV facility loader.
//!
//! # CSV format
//!
//! One row per facility, header required:
//!
//! ```csv
//! name,lat,lon
//! City General,26.4602,80.3311
//! St. Mary's,26.5021,80.2844
//! ```
//!
//! Row order is preserved — it becomes the resolver's tie-break order.
//! Intended for seeding a [`MemoryStore`](crate::MemoryStore) from a local
//! file when no remote store is available.

use std::io::Read;
use std::path::Path;

use crate::StoreResult;
use crate::store::FacilityRecord;

/// Load facility records from a CSV file.
pub fn load_facilities_csv(path: &Path) -> StoreResult<Vec<FacilityRecord>> {
    let file = std::fs::File::open(path)?;
    load_facilities_reader(file)
}

/// Like [`load_facilities_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_facilities_reader<R: Read>(reader: R) -> StoreResult<Vec<FacilityRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in csv_reader.deserialize::<FacilityRecord>() {
        records.push(result?);
    }
    Ok(records)
}
