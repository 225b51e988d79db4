// ============================================================================
// Candle Domain Model
// OHLCV snapshot with decimal price and volume fields
// ============================================================================

use super::config::{self, EntityConfig};
use super::errors::EntityResult;
use crate::numeric::{Decimal, DecimalInput};
use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw candle fields as supplied by a caller, before remapping and validation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CandleInput {
    pub time: DateTime<Utc>,
    pub open: DecimalInput,
    pub close: DecimalInput,
    pub high: DecimalInput,
    pub low: DecimalInput,
    pub volume: DecimalInput,
    pub quote_volume: DecimalInput,
    pub weighted_average_price: DecimalInput,
    pub max_height: u64,
    pub txs_count: u64,
}

/// Validated OHLCV candle
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    time: DateTime<Utc>,
    open: Decimal,
    close: Decimal,
    high: Decimal,
    low: Decimal,
    volume: Decimal,
    quote_volume: Decimal,
    weighted_average_price: Decimal,
    max_height: u64,
    txs_count: u64,
}

impl Candle {
    /// Placeholder printed by `Display`
    pub const DISPLAY: &'static str = "[object Candle]";

    /// Build a candle using the process-wide remap hook.
    pub fn new(input: CandleInput) -> EntityResult<Self> {
        Self::with_config(input, &config::global().snapshot())
    }

    /// Build a candle using the hooks of `config`.
    pub fn with_config(input: CandleInput, config: &EntityConfig) -> EntityResult<Self> {
        let input = config.remap_candle(input);

        let candle = Self {
            time: input.time,
            open: input.open.to_decimal()?,
            close: input.close.to_decimal()?,
            high: input.high.to_decimal()?,
            low: input.low.to_decimal()?,
            volume: input.volume.to_decimal()?,
            quote_volume: input.quote_volume.to_decimal()?,
            weighted_average_price: input.weighted_average_price.to_decimal()?,
            max_height: input.max_height,
            txs_count: input.txs_count,
        };
        tracing::trace!(time = %candle.time, "candle created");
        Ok(candle)
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn open(&self) -> Decimal {
        self.open
    }

    pub fn close(&self) -> Decimal {
        self.close
    }

    pub fn high(&self) -> Decimal {
        self.high
    }

    pub fn low(&self) -> Decimal {
        self.low
    }

    pub fn volume(&self) -> Decimal {
        self.volume
    }

    pub fn quote_volume(&self) -> Decimal {
        self.quote_volume
    }

    pub fn weighted_average_price(&self) -> Decimal {
        self.weighted_average_price
    }

    pub fn max_height(&self) -> u64 {
        self.max_height
    }

    pub fn txs_count(&self) -> u64 {
        self.txs_count
    }

    pub fn to_json(&self) -> CandleJson {
        CandleJson {
            time: self.time,
            open: self.open,
            close: self.close,
            high: self.high,
            low: self.low,
            volume: self.volume,
            quote_volume: self.quote_volume,
            weighted_average_price: self.weighted_average_price,
            max_height: self.max_height,
            txs_count: self.txs_count,
        }
    }

    /// Nominal type check for dynamically typed values
    pub fn is_candle(value: &dyn Any) -> bool {
        value.is::<Candle>()
    }
}

impl fmt::Display for Candle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::DISPLAY)
    }
}

/// Serialized form of a [`Candle`]; decimal fields stay decimals
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CandleJson {
    pub time: DateTime<Utc>,
    pub open: Decimal,
    pub close: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub volume: Decimal,
    pub quote_volume: Decimal,
    pub weighted_average_price: Decimal,
    pub max_height: u64,
    pub txs_count: u64,
}
