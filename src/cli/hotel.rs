use std::io::{BufRead, Write};

use anyhow::Result;

use crate::application::{AppError, BookingService};

use super::Console;

/// Interactive hotel booking menu. Returns on "Exit" or end of input.
pub fn run_hotel<R: BufRead, W: Write>(
    service: &mut BookingService,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        let out = console.out();
        writeln!(out, "\n====== HOTEL BOOKING MENU ======")?;
        writeln!(out, "1. Show Available Rooms")?;
        writeln!(out, "2. Book a Room")?;
        writeln!(out, "3. Cancel Booking")?;
        writeln!(out, "4. View All Reservations")?;
        writeln!(out, "5. Exit")?;

        let Some(choice) = console.prompt("Choose an option: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => show_available_rooms(service, console)?,
            "2" => book_room(service, console)?,
            "3" => cancel_booking(service, console)?,
            "4" => view_all_bookings(service, console)?,
            "5" => {
                writeln!(console.out(), "Thank you for using the Hotel Booking System!")?;
                return Ok(());
            }
            _ => writeln!(console.out(), "Invalid option.")?,
        }
    }
}

fn show_available_rooms<R: BufRead, W: Write>(
    service: &BookingService,
    console: &mut Console<R, W>,
) -> Result<()> {
    let rooms = service.list_available();
    let out = console.out();
    if rooms.is_empty() {
        writeln!(out, "No rooms available.")?;
        return Ok(());
    }
    writeln!(out, "Available Rooms:")?;
    for room in rooms {
        writeln!(out, "{}", room)?;
    }
    Ok(())
}

fn book_room<R: BufRead, W: Write>(
    service: &mut BookingService,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(name) = console.prompt("Enter your name: ")? else {
        return Ok(());
    };
    let Some(category) = console.prompt("Enter room type (Standard/Deluxe/Suite): ")? else {
        return Ok(());
    };

    let Some(room) = service.find_first_available_by_category(&category).cloned() else {
        writeln!(console.out(), "No available rooms of that type.")?;
        return Ok(());
    };
    writeln!(console.out(), "Room Found: {}", room)?;

    let Some(answer) = console.prompt("Proceed with payment? (yes/no): ")? else {
        return Ok(());
    };
    if !answer.eq_ignore_ascii_case("yes") {
        writeln!(console.out(), "Payment canceled.")?;
        return Ok(());
    }

    match service.book(&name, room.number) {
        Ok(id) => writeln!(
            console.out(),
            "Booking successful! Your Booking ID = {}",
            id
        )?,
        Err(e) => writeln!(console.out(), "Booking failed: {}", e)?,
    }
    Ok(())
}

fn cancel_booking<R: BufRead, W: Write>(
    service: &mut BookingService,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(input) = console.prompt("Enter Booking ID to cancel: ")? else {
        return Ok(());
    };
    let Ok(id) = input.parse() else {
        writeln!(console.out(), "Invalid booking ID.")?;
        return Ok(());
    };

    match service.cancel(id) {
        Ok(_) => writeln!(console.out(), "Booking canceled successfully.")?,
        Err(AppError::ReservationNotFound(_)) => {
            writeln!(console.out(), "Booking ID not found.")?
        }
        Err(e) => writeln!(console.out(), "Cancellation failed: {}", e)?,
    }
    Ok(())
}

fn view_all_bookings<R: BufRead, W: Write>(
    service: &BookingService,
    console: &mut Console<R, W>,
) -> Result<()> {
    let reservations = service.list_all();
    let out = console.out();
    if reservations.is_empty() {
        writeln!(out, "No reservations found.")?;
        return Ok(());
    }
    for reservation in reservations {
        writeln!(out, "{}", reservation)?;
    }
    Ok(())
}
