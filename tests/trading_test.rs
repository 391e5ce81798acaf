use anyhow::Result;
use trio::application::{AppError, HoldingEntry, TradingService};
use trio::domain::{Market, OPENING_BALANCE, Portfolio, Stock};

#[test]
fn test_buy_aapl_from_opening_balance() -> Result<()> {
    let mut service = TradingService::default();
    assert_eq!(service.portfolio().cash_balance(), OPENING_BALANCE);

    let trade = service.buy("AAPL", 10)?;
    assert_eq!(trade.price, 17050);
    assert_eq!(trade.total, 170500);
    assert_eq!(trade.cash_balance, 829500);
    assert_eq!(service.portfolio().shares("AAPL"), 10);
    Ok(())
}

#[test]
fn test_buy_then_sell_round_trips() -> Result<()> {
    let mut service = TradingService::default();
    service.buy("TSLA", 3)?;
    let before = service.portfolio().clone();

    service.buy("GOOG", 2)?;
    service.sell("GOOG", 2)?;

    assert_eq!(service.portfolio(), &before);
    Ok(())
}

#[test]
fn test_symbols_are_case_insensitive() -> Result<()> {
    let mut service = TradingService::default();
    let trade = service.buy("aapl", 1)?;
    assert_eq!(trade.symbol, "AAPL");
    service.sell("Aapl", 1)?;
    assert!(service.portfolio().holdings().is_empty());
    Ok(())
}

#[test]
fn test_unknown_symbol_is_rejected() {
    let mut service = TradingService::default();

    assert!(matches!(
        service.buy("MSFT", 1),
        Err(AppError::StockNotFound(ref s)) if s == "MSFT"
    ));
    assert!(matches!(
        service.sell("msft", 1),
        Err(AppError::StockNotFound(_))
    ));
    assert_eq!(service.portfolio().cash_balance(), OPENING_BALANCE);
}

#[test]
fn test_overspending_leaves_state_unchanged() {
    let mut service = TradingService::default();
    let before = service.portfolio().clone();

    // 4 * 3300.20 = 13200.80 > 10000.00
    let err = service.buy("AMZN", 4).unwrap_err();
    assert!(matches!(
        err,
        AppError::InsufficientBalance {
            balance: 1_000_000,
            required: 1_320_080
        }
    ));
    assert_eq!(service.portfolio(), &before);
}

#[test]
fn test_overselling_leaves_state_unchanged() -> Result<()> {
    let mut service = TradingService::default();
    service.buy("TSLA", 2)?;
    let before = service.portfolio().clone();

    assert!(matches!(
        service.sell("TSLA", 5),
        Err(AppError::InsufficientShares {
            held: 2,
            requested: 5,
            ..
        })
    ));
    assert!(matches!(
        service.sell("AAPL", 1),
        Err(AppError::InsufficientShares { held: 0, .. })
    ));
    assert_eq!(service.portfolio(), &before);
    Ok(())
}

#[test]
fn test_zero_quantity_is_rejected() {
    let mut service = TradingService::default();
    assert!(matches!(service.buy("AAPL", 0), Err(AppError::InvalidQuantity)));
    assert!(matches!(service.sell("AAPL", 0), Err(AppError::InvalidQuantity)));
}

#[test]
fn test_deposit_rejects_negative_amounts() -> Result<()> {
    let mut service = TradingService::default();

    assert_eq!(service.deposit(50_000)?, 1_050_000);
    assert!(matches!(
        service.deposit(-1),
        Err(AppError::InvalidAmount(_))
    ));
    assert_eq!(service.portfolio().cash_balance(), 1_050_000);
    Ok(())
}

#[test]
fn test_deposit_enables_a_larger_buy() -> Result<()> {
    let mut service = TradingService::new(Market::default(), Portfolio::new(0));
    assert!(service.buy("TSLA", 1).is_err());

    service.deposit(12575)?;
    let trade = service.buy("TSLA", 1)?;
    assert_eq!(trade.cash_balance, 0);
    Ok(())
}

#[test]
fn test_report_lists_only_non_zero_holdings() -> Result<()> {
    let mut service = TradingService::default();
    service.buy("TSLA", 4)?;
    service.buy("AAPL", 2)?;
    service.buy("GOOG", 1)?;
    service.sell("GOOG", 1)?;

    let report = service.report();
    assert_eq!(report.cash_balance, 1_000_000 - 4 * 12575 - 2 * 17050);
    assert_eq!(
        report.holdings,
        vec![
            HoldingEntry {
                symbol: "AAPL".into(),
                shares: 2,
                price: 17050,
                market_value: 34100,
            },
            HoldingEntry {
                symbol: "TSLA".into(),
                shares: 4,
                price: 12575,
                market_value: 50300,
            },
        ]
    );
    assert_eq!(report.holdings_value, 84400);
    Ok(())
}

#[test]
fn test_market_lists_seed_quotes() {
    let service = TradingService::new(
        Market::new(vec![Stock::new("ABC", 100), Stock::new("XYZ", 250)]),
        Portfolio::default(),
    );
    let symbols: Vec<_> = service.market().iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["ABC", "XYZ"]);
}
