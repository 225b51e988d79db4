// ============================================================================
// Order Price Domain Model
// Prices in the matcher's fixed-point unit, tied to an asset pair
// ============================================================================

use super::asset_pair::AssetPair;
use super::errors::EntityResult;
use crate::numeric::scale::{self, scale_by_pow10};
use crate::numeric::{Decimal, NumericInput};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Decimal exponent of the matcher scale (prices carry 10^8 extra)
pub const MATCHER_SCALE_EXP: i32 = 8;

/// Price of the amount asset expressed in the price asset.
///
/// Stored as matcher coins: `tokens × 10^precision_difference × 10^8`.
#[derive(Debug, Clone)]
pub struct OrderPrice {
    pair: Arc<AssetPair>,
    matcher_coins: Decimal,
    tokens: Decimal,
}

impl OrderPrice {
    /// Create from a raw matcher-coin amount (kept as given, not rounded).
    pub fn new(matcher_coins: impl NumericInput, pair: Arc<AssetPair>) -> EntityResult<Self> {
        let matcher_coins = matcher_coins.into_numeric()?.to_decimal()?;
        let tokens = scale_by_pow10(matcher_coins, -Self::scale_exponent(&pair))?;
        Ok(Self {
            pair,
            matcher_coins,
            tokens,
        })
    }

    /// Create from matcher coins.
    ///
    /// # Errors
    /// - `InvalidInputType` if a dynamic input is not a string or number
    /// - numeric errors from the decimal boundary
    pub fn from_matcher_coins(coins: impl NumericInput, pair: Arc<AssetPair>) -> EntityResult<Self> {
        let coins = coins.into_numeric()?;
        Self::new(coins, pair)
    }

    /// Create from a token price, rounded to the price asset precision first.
    ///
    /// # Errors
    /// Same as [`OrderPrice::from_matcher_coins`].
    pub fn from_tokens(tokens: impl NumericInput, pair: Arc<AssetPair>) -> EntityResult<Self> {
        let tokens = tokens.into_numeric()?.to_decimal()?;
        let rounded = scale::round_half_up(tokens, pair.price_asset().precision());
        let matcher_coins = scale_by_pow10(rounded, Self::scale_exponent(&pair))?;
        Self::new(matcher_coins, pair)
    }

    /// Combined exponent of `10^precision_difference × 10^8`
    fn scale_exponent(pair: &AssetPair) -> i32 {
        pair.precision_difference() + MATCHER_SCALE_EXP
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn pair(&self) -> &Arc<AssetPair> {
        &self.pair
    }

    pub fn get_matcher_coins(&self) -> Decimal {
        self.matcher_coins
    }

    pub fn get_tokens(&self) -> Decimal {
        self.tokens
    }

    /// Matcher coins as an integer string
    pub fn to_matcher_coins(&self) -> String {
        scale::to_fixed(self.matcher_coins, 0)
    }

    /// Token price as a fixed-point string at the price asset precision
    pub fn to_tokens(&self) -> String {
        scale::to_fixed(self.tokens, self.pair.price_asset().precision())
    }

    /// Token price with grouped integer digits at the price asset precision
    pub fn to_format(&self) -> String {
        scale::to_grouped(self.tokens, self.pair.price_asset().precision())
    }

    pub fn to_json(&self) -> OrderPriceJson {
        OrderPriceJson {
            amount_asset_id: self.pair.amount_asset().id().to_string(),
            price_asset_id: self.pair.price_asset().id().to_string(),
            price_tokens: self.to_tokens(),
        }
    }

    /// Nominal type check for dynamically typed values
    pub fn is_order_price(value: &dyn Any) -> bool {
        value.is::<OrderPrice>()
    }
}

impl fmt::Display for OrderPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_tokens(), self.pair)
    }
}

/// Serialized form of an [`OrderPrice`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OrderPriceJson {
    pub amount_asset_id: String,
    pub price_asset_id: String,
    pub price_tokens: String,
}
