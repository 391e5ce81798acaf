use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::domain::{Reservation, RoomCategory};

/// Default location of the bookings file, relative to the working directory.
pub const DEFAULT_BOOKINGS_FILE: &str = "bookings.txt";

/// Outcome of reading the bookings file.
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    pub records: Vec<Reservation>,
    pub errors: Vec<LoadError>,
}

/// A line that could not be turned into a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub line: u64,
    pub error: String,
}

/// Flat-file persistence for reservations.
///
/// One reservation per line, `id|guestName|roomNumber|roomCategory`, no
/// header and no quoting. The file is opened per call and closed before
/// the call returns.
#[derive(Debug, Clone)]
pub struct BookingStore {
    path: PathBuf,
}

impl BookingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every persisted reservation. A missing file is an empty ledger.
    pub fn load(&self) -> Result<LoadResult> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No bookings file at {}", self.path.display());
                return Ok(LoadResult::default());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to open bookings file {}", self.path.display())
                });
            }
        };
        read_reservations(file)
            .with_context(|| format!("Failed to read bookings file {}", self.path.display()))
    }

    /// Append a single reservation to the end of the file.
    pub fn append(&self, reservation: &Reservation) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {} for append", self.path.display()))?;
        write_reservations(file, std::iter::once(reservation))
            .context("Failed to save booking")?;
        debug!(
            "Appended booking {} to {}",
            reservation.id,
            self.path.display()
        );
        Ok(())
    }

    /// Replace the whole file with the given reservations.
    ///
    /// The new contents go to a sibling temp file that is renamed over the
    /// original, so a failed write leaves the old file in place.
    pub fn rewrite<'a>(
        &self,
        reservations: impl IntoIterator<Item = &'a Reservation>,
    ) -> Result<()> {
        let temp_path = self.temp_path();
        let written = File::create(&temp_path)
            .with_context(|| format!("Failed to create {}", temp_path.display()))
            .and_then(|file| {
                write_reservations(file, reservations).context("Failed to update bookings")
            })
            .and_then(|count| {
                fs::rename(&temp_path, &self.path).with_context(|| {
                    format!("Failed to replace bookings file {}", self.path.display())
                })?;
                Ok(count)
            });

        match written {
            Ok(count) => {
                debug!("Rewrote {} with {} booking(s)", self.path.display(), count);
                Ok(())
            }
            Err(e) => {
                if temp_path.is_file() {
                    let _ = fs::remove_file(&temp_path);
                }
                Err(e)
            }
        }
    }

    /// Sibling of the bookings file used while rewriting it.
    pub fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_BOOKINGS_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Parse pipe-delimited reservation lines, collecting malformed ones instead of failing.
pub fn read_reservations<R: Read>(reader: R) -> Result<LoadResult> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut result = LoadResult::default();
    for (index, row) in csv_reader.records().enumerate() {
        let fallback_line = index as u64 + 1;
        let record = match row {
            Ok(record) => record,
            Err(e) => {
                if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                    return Err(e.into());
                }
                result.errors.push(LoadError {
                    line: e.position().map(|p| p.line()).unwrap_or(fallback_line),
                    error: e.to_string(),
                });
                continue;
            }
        };

        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(fallback_line);
        match parse_record(&record) {
            Ok(reservation) => result.records.push(reservation),
            Err(error) => result.errors.push(LoadError { line, error }),
        }
    }

    Ok(result)
}

fn parse_record(record: &csv::StringRecord) -> Result<Reservation, String> {
    if record.len() != 4 {
        return Err(format!("expected 4 fields, found {}", record.len()));
    }

    let id = record[0]
        .trim()
        .parse()
        .map_err(|_| format!("invalid booking id '{}'", &record[0]))?;
    let room_number = record[2]
        .trim()
        .parse()
        .map_err(|_| format!("invalid room number '{}'", &record[2]))?;
    let room_category = record[3]
        .parse::<RoomCategory>()
        .map_err(|e| e.to_string())?;

    Ok(Reservation {
        id,
        guest_name: record[1].to_string(),
        room_number,
        room_category,
    })
}

fn write_reservations<'a, W: Write>(
    writer: W,
    reservations: impl IntoIterator<Item = &'a Reservation>,
) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    let mut count = 0;
    for reservation in reservations {
        csv_writer.write_record([
            reservation.id.to_string(),
            reservation.guest_name.clone(),
            reservation.room_number.to_string(),
            reservation.room_category.as_str().to_string(),
        ])?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}
