use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SignalboardError};

/// Per-row crossover signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    /// Only produced under `WarmupPolicy::Explicit`.
    Undefined,
}

impl Signal {
    pub fn value(self) -> i32 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
            Self::Undefined => 0,
        }
    }

    pub fn from_value(value: i32) -> Result<Self> {
        match value {
            1 => Ok(Self::Buy),
            -1 => Ok(Self::Sell),
            0 => Ok(Self::Undefined),
            other => Err(SignalboardError::Computation(format!(
                "Unexpected signal value: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Cache key for a remote fetch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchKey {
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FetchKey {
    pub fn new(symbol: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            start,
            end,
        }
    }
}

impl fmt::Display for FetchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{} .. {})", self.symbol, self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    India,
    Usa,
}

impl Country {
    pub fn all() -> Vec<Self> {
        vec![Self::India, Self::Usa]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::India => "India",
            Self::Usa => "USA",
        }
    }

    pub fn exchanges(&self) -> Vec<Exchange> {
        match self {
            Self::India => vec![Exchange::Nse, Exchange::Bse],
            Self::Usa => vec![Exchange::Nyse, Exchange::Nasdaq],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exchange {
    Nse,
    Bse,
    Nyse,
    Nasdaq,
}

impl Exchange {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nse => "NSE",
            Self::Bse => "BSE",
            Self::Nyse => "NYSE",
            Self::Nasdaq => "NASDAQ",
        }
    }

    /// Yahoo Finance ticker suffix
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Nse => ".NS",
            Self::Bse => ".BO",
            Self::Nyse | Self::Nasdaq => "",
        }
    }

    /// Qualify a bare symbol for this exchange. Symbols that already carry a
    /// suffix (`SBIN.NS`, `BRK.B`) are kept as typed.
    pub fn qualify(&self, symbol: &str) -> String {
        let symbol = symbol.trim().to_uppercase();
        if symbol.contains('.') {
            symbol
        } else {
            format!("{}{}", symbol, self.suffix())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_values() {
        assert_eq!(Signal::Buy.value(), 1);
        assert_eq!(Signal::Sell.value(), -1);
        assert_eq!(Signal::Undefined.value(), 0);
        assert_eq!(Signal::from_value(-1).unwrap(), Signal::Sell);
        assert!(Signal::from_value(2).is_err());
    }

    #[test]
    fn test_exchange_qualify() {
        assert_eq!(Exchange::Nse.qualify("sbin"), "SBIN.NS");
        assert_eq!(Exchange::Bse.qualify("SBIN"), "SBIN.BO");
        assert_eq!(Exchange::Nyse.qualify(" aapl "), "AAPL");
        assert_eq!(Exchange::Nse.qualify("SBIN.NS"), "SBIN.NS");
    }

    #[test]
    fn test_country_exchanges() {
        assert!(Country::India.exchanges().contains(&Exchange::Nse));
        assert!(Country::Usa.exchanges().contains(&Exchange::Nasdaq));
    }
}
