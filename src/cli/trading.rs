use std::io::{BufRead, Write};

use anyhow::Result;

use crate::application::TradingService;
use crate::domain::{format_cents, parse_cents};

use super::Console;

/// Interactive stock trading menu. Returns on "Exit" or end of input.
pub fn run_trading<R: BufRead, W: Write>(
    service: &mut TradingService,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        let out = console.out();
        writeln!(out, "========= STOCK TRADING MENU =========")?;
        writeln!(out, "1. View Market")?;
        writeln!(out, "2. Buy Stock")?;
        writeln!(out, "3. Sell Stock")?;
        writeln!(out, "4. View Portfolio")?;
        writeln!(out, "5. Deposit Cash")?;
        writeln!(out, "6. Exit")?;

        let Some(choice) = console.prompt("Choose an option: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => display_market(service, console)?,
            "2" => {
                display_market(service, console)?;
                trade(service, console, Side::Buy)?;
            }
            "3" => trade(service, console, Side::Sell)?,
            "4" => print_portfolio(service, console)?,
            "5" => deposit(service, console)?,
            "6" => {
                writeln!(console.out(), "Thank you for using Stock Trading App!")?;
                return Ok(());
            }
            _ => writeln!(console.out(), "Invalid input. Try again.")?,
        }
    }
}

#[derive(Clone, Copy)]
enum Side {
    Buy,
    Sell,
}

fn display_market<R: BufRead, W: Write>(
    service: &TradingService,
    console: &mut Console<R, W>,
) -> Result<()> {
    let out = console.out();
    writeln!(out, "------- STOCK MARKET -------")?;
    for stock in service.market() {
        writeln!(out, "{}", stock)?;
    }
    writeln!(out, "----------------------------\n")?;
    Ok(())
}

fn trade<R: BufRead, W: Write>(
    service: &mut TradingService,
    console: &mut Console<R, W>,
    side: Side,
) -> Result<()> {
    let label = match side {
        Side::Buy => "Enter Stock Symbol to Buy: ",
        Side::Sell => "Enter Stock Symbol to Sell: ",
    };
    let Some(symbol) = console.prompt(label)? else {
        return Ok(());
    };
    let Some(input) = console.prompt("Enter quantity: ")? else {
        return Ok(());
    };
    let Ok(quantity) = input.parse::<u32>() else {
        writeln!(console.out(), "Invalid quantity.")?;
        return Ok(());
    };

    let result = match side {
        Side::Buy => service.buy(&symbol, quantity),
        Side::Sell => service.sell(&symbol, quantity),
    };
    let out = console.out();
    match (side, result) {
        (Side::Buy, Ok(trade)) => writeln!(
            out,
            "Purchase successful! Bought {} {} for ${}. Balance: ${}",
            trade.quantity,
            trade.symbol,
            format_cents(trade.total),
            format_cents(trade.cash_balance)
        )?,
        (Side::Sell, Ok(trade)) => writeln!(
            out,
            "Sale completed! Sold {} {} for ${}. Balance: ${}",
            trade.quantity,
            trade.symbol,
            format_cents(trade.total),
            format_cents(trade.cash_balance)
        )?,
        (_, Err(e)) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

fn print_portfolio<R: BufRead, W: Write>(
    service: &TradingService,
    console: &mut Console<R, W>,
) -> Result<()> {
    let report = service.report();
    let out = console.out();

    writeln!(out, "========= PORTFOLIO =========")?;
    writeln!(out, "Cash Balance: ${}", format_cents(report.cash_balance))?;
    writeln!(out, "Owned Stocks:")?;
    if report.holdings.is_empty() {
        writeln!(out, "  (No stocks owned yet)")?;
    } else {
        for holding in &report.holdings {
            writeln!(
                out,
                "{} : {} shares @ ${} = ${}",
                holding.symbol,
                holding.shares,
                format_cents(holding.price),
                format_cents(holding.market_value)
            )?;
        }
        writeln!(
            out,
            "Holdings Value: ${}",
            format_cents(report.holdings_value)
        )?;
    }
    writeln!(out, "=============================\n")?;
    Ok(())
}

fn deposit<R: BufRead, W: Write>(
    service: &mut TradingService,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(input) = console.prompt("Enter amount to deposit: ")? else {
        return Ok(());
    };
    let Ok(amount) = parse_cents(&input) else {
        writeln!(console.out(), "Invalid amount.")?;
        return Ok(());
    };

    match service.deposit(amount) {
        Ok(balance) => writeln!(
            console.out(),
            "Amount added to balance. New balance: ${}",
            format_cents(balance)
        )?,
        Err(e) => writeln!(console.out(), "{}", e)?,
    }
    Ok(())
}
