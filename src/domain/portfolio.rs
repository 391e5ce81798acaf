use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cents, Stock, checked_cost, format_cents};

/// Starting cash for a fresh portfolio: $10,000.00.
pub const OPENING_BALANCE: Cents = 1_000_000;

/// Cash plus share counts. Cash never goes negative and a symbol is only
/// present in `holdings` while at least one share is held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    cash_balance: Cents,
    holdings: BTreeMap<String, u32>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new(OPENING_BALANCE)
    }
}

impl Portfolio {
    pub fn new(cash_balance: Cents) -> Self {
        Self {
            cash_balance: cash_balance.max(0),
            holdings: BTreeMap::new(),
        }
    }

    pub fn cash_balance(&self) -> Cents {
        self.cash_balance
    }

    /// Non-zero holdings, sorted by symbol.
    pub fn holdings(&self) -> &BTreeMap<String, u32> {
        &self.holdings
    }

    pub fn shares(&self, symbol: &str) -> u32 {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// Spend cash on shares. Returns the total cost.
    pub fn buy(&mut self, stock: &Stock, quantity: u32) -> Result<Cents, TradeError> {
        if quantity == 0 {
            return Err(TradeError::InvalidQuantity);
        }
        let cost = checked_cost(stock.price, quantity)
            .filter(|cost| *cost <= self.cash_balance)
            .ok_or_else(|| TradeError::InsufficientBalance {
                balance: self.cash_balance,
                required: checked_cost(stock.price, quantity).unwrap_or(Cents::MAX),
            })?;

        let held = self
            .shares(&stock.symbol)
            .checked_add(quantity)
            .ok_or(TradeError::InvalidQuantity)?;
        self.holdings.insert(stock.symbol.clone(), held);
        self.cash_balance -= cost;
        Ok(cost)
    }

    /// Turn shares back into cash. Returns the proceeds.
    pub fn sell(&mut self, stock: &Stock, quantity: u32) -> Result<Cents, TradeError> {
        if quantity == 0 {
            return Err(TradeError::InvalidQuantity);
        }
        let held = self.shares(&stock.symbol);
        if held < quantity {
            return Err(TradeError::InsufficientShares {
                symbol: stock.symbol.clone(),
                held,
                requested: quantity,
            });
        }
        let proceeds = checked_cost(stock.price, quantity).ok_or(TradeError::BalanceOverflow)?;
        let cash_balance = self
            .cash_balance
            .checked_add(proceeds)
            .ok_or(TradeError::BalanceOverflow)?;

        if held == quantity {
            self.holdings.remove(&stock.symbol);
        } else {
            self.holdings.insert(stock.symbol.clone(), held - quantity);
        }
        self.cash_balance = cash_balance;
        Ok(proceeds)
    }

    pub fn deposit(&mut self, amount: Cents) -> Result<Cents, TradeError> {
        if amount < 0 {
            return Err(TradeError::NegativeDeposit(amount));
        }
        self.cash_balance = self
            .cash_balance
            .checked_add(amount)
            .ok_or(TradeError::BalanceOverflow)?;
        Ok(self.cash_balance)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeError {
    InvalidQuantity,
    NegativeDeposit(Cents),
    BalanceOverflow,
    InsufficientBalance {
        balance: Cents,
        required: Cents,
    },
    InsufficientShares {
        symbol: String,
        held: u32,
        requested: u32,
    },
}

impl fmt::Display for TradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeError::InvalidQuantity => write!(f, "Quantity must be a positive number"),
            TradeError::NegativeDeposit(amount) => {
                write!(f, "Cannot deposit {}", format_cents(*amount))
            }
            TradeError::BalanceOverflow => write!(f, "Cash balance would overflow"),
            TradeError::InsufficientBalance { balance, required } => write!(
                f,
                "Not enough balance: have ${}, need ${}",
                format_cents(*balance),
                format_cents(*required)
            ),
            TradeError::InsufficientShares {
                symbol,
                held,
                requested,
            } => write!(
                f,
                "Not enough shares to sell: hold {} {}, requested {}",
                held, symbol, requested
            ),
        }
    }
}

impl std::error::Error for TradeError {}
