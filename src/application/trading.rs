use serde::{Deserialize, Serialize};

use crate::domain::{Cents, Market, Portfolio, Stock};

use super::AppError;

/// Stock trading against a fixed market with a single cash portfolio.
#[derive(Default)]
pub struct TradingService {
    market: Market,
    portfolio: Portfolio,
}

/// Result of a buy or sell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeResult {
    pub symbol: String,
    pub quantity: u32,
    pub price: Cents,
    pub total: Cents,
    pub cash_balance: Cents,
}

/// Snapshot of cash and non-zero holdings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub cash_balance: Cents,
    pub holdings: Vec<HoldingEntry>,
    pub holdings_value: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingEntry {
    pub symbol: String,
    pub shares: u32,
    pub price: Cents,
    pub market_value: Cents,
}

impl TradingService {
    pub fn new(market: Market, portfolio: Portfolio) -> Self {
        Self { market, portfolio }
    }

    /// Quotes in seed order.
    pub fn market(&self) -> &[Stock] {
        self.market.stocks()
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn buy(&mut self, symbol: &str, quantity: u32) -> Result<TradeResult, AppError> {
        let stock = self.quote(symbol)?.clone();
        let total = self.portfolio.buy(&stock, quantity)?;
        Ok(self.trade_result(stock, quantity, total))
    }

    pub fn sell(&mut self, symbol: &str, quantity: u32) -> Result<TradeResult, AppError> {
        let stock = self.quote(symbol)?.clone();
        let total = self.portfolio.sell(&stock, quantity)?;
        Ok(self.trade_result(stock, quantity, total))
    }

    /// Add cash. Negative amounts are rejected; returns the new balance.
    pub fn deposit(&mut self, amount: Cents) -> Result<Cents, AppError> {
        Ok(self.portfolio.deposit(amount)?)
    }

    pub fn report(&self) -> PortfolioReport {
        let holdings: Vec<HoldingEntry> = self
            .portfolio
            .holdings()
            .iter()
            .map(|(symbol, &shares)| {
                let price = self.market.get(symbol).map(|s| s.price).unwrap_or(0);
                HoldingEntry {
                    symbol: symbol.clone(),
                    shares,
                    price,
                    market_value: price.saturating_mul(Cents::from(shares)),
                }
            })
            .collect();

        let holdings_value = holdings
            .iter()
            .fold(0, |total: Cents, h| total.saturating_add(h.market_value));

        PortfolioReport {
            cash_balance: self.portfolio.cash_balance(),
            holdings,
            holdings_value,
        }
    }

    fn quote(&self, symbol: &str) -> Result<&Stock, AppError> {
        self.market
            .get(symbol)
            .ok_or_else(|| AppError::StockNotFound(symbol.trim().to_uppercase()))
    }

    fn trade_result(&self, stock: Stock, quantity: u32, total: Cents) -> TradeResult {
        TradeResult {
            symbol: stock.symbol,
            quantity,
            price: stock.price,
            total,
            cash_balance: self.portfolio.cash_balance(),
        }
    }
}
