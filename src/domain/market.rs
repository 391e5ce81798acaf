use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cents, format_cents};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub symbol: String,
    pub price: Cents,
}

impl Stock {
    pub fn new(symbol: impl Into<String>, price: Cents) -> Self {
        Self {
            symbol: symbol.into(),
            price,
        }
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ ${}", self.symbol, format_cents(self.price))
    }
}

/// Fixed quotes the simulator trades against. Prices never move.
#[derive(Debug, Clone)]
pub struct Market {
    stocks: Vec<Stock>,
}

impl Default for Market {
    fn default() -> Self {
        Self::new(vec![
            Stock::new("AAPL", 17050),
            Stock::new("GOOG", 285010),
            Stock::new("TSLA", 12575),
            Stock::new("AMZN", 330020),
        ])
    }
}

impl Market {
    pub fn new(stocks: Vec<Stock>) -> Self {
        Self { stocks }
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    /// Look up a quote; symbols match regardless of case.
    pub fn get(&self, symbol: &str) -> Option<&Stock> {
        let symbol = symbol.trim();
        self.stocks
            .iter()
            .find(|s| s.symbol.eq_ignore_ascii_case(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let market = Market::default();
        assert_eq!(market.get("aapl").unwrap().price, 17050);
        assert_eq!(market.get(" Tsla ").unwrap().symbol, "TSLA");
        assert!(market.get("MSFT").is_none());
    }

    #[test]
    fn test_seed_order_is_kept() {
        let symbols: Vec<_> = Market::default()
            .stocks()
            .iter()
            .map(|s| s.symbol.clone())
            .collect();
        assert_eq!(symbols, vec!["AAPL", "GOOG", "TSLA", "AMZN"]);
    }
}
