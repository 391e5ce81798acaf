// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;
use trio::application::BookingService;
use trio::cli::Console;

/// Helper to open a booking service over a bookings file in a fresh temp dir
pub fn test_booking_service() -> Result<(BookingService, PathBuf, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bookings.txt");
    let service = BookingService::open(&path);
    Ok((service, path, temp_dir))
}

/// Helper to seed a bookings file with raw contents before opening it
pub fn booking_service_from(contents: &str) -> Result<(BookingService, PathBuf, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bookings.txt");
    fs::write(&path, contents)?;
    let service = BookingService::open(&path);
    Ok((service, path, temp_dir))
}

/// Run a menu loop against scripted input and return everything it printed
pub fn run_scripted<'a, F>(script: &'a str, menu: F) -> Result<String>
where
    F: FnOnce(&mut Console<&'a [u8], Vec<u8>>) -> Result<()>,
{
    let mut console = Console::new(script.as_bytes(), Vec::new());
    menu(&mut console)?;
    Ok(String::from_utf8(console.into_output())?)
}

/// Available room numbers, in listing order
pub fn available_numbers(service: &BookingService) -> Vec<u32> {
    service.list_available().iter().map(|r| r.number).collect()
}
