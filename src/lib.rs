// ============================================================================
// Data Entities Library
// Precision-safe asset, money and price value objects
// ============================================================================

//! # Data Entities
//!
//! Monetary and price quantities for a blockchain asset domain, built on
//! arbitrary-precision decimals instead of native floating point.
//!
//! ## Features
//!
//! - **Validated decimal boundary** for text, native numbers and decimals
//! - **Coin / token scaling** per asset precision, with explicit rounding
//! - **Money** arithmetic and comparison guarded by asset identity
//! - **Order prices** in the matcher's fixed-point unit
//! - **Remap hooks** injected per call or through a process-wide registry
//!
//! ## Example
//!
//! ```rust
//! use data_entities::prelude::*;
//! use std::sync::Arc;
//!
//! let config = EntityConfig::default();
//! let asset = |id: &str, precision: i64| -> EntityResult<Arc<Asset>> {
//!     let input = AssetInput {
//!         id: id.to_string(),
//!         name: id.to_string(),
//!         precision,
//!         sender: "3PSender".to_string(),
//!         quantity: DecimalInput::from("1000000000"),
//!         ..Default::default()
//!     };
//!     Ok(Arc::new(Asset::with_config(input, &config)?))
//! };
//!
//! let waves = asset("WAVES", 8)?;
//! let usd = asset("USD", 2)?;
//!
//! // Amounts
//! let balance = Money::from_tokens("12.5", Arc::clone(&waves))?;
//! let fee = Money::from_coins(100_000u64, Arc::clone(&waves))?;
//! assert_eq!(balance.sub(&fee)?.to_tokens(), "12.49900000");
//!
//! // Conversion at a caller-supplied rate
//! let in_usd = balance.convert_to(&usd, "1.83")?;
//! assert_eq!(in_usd.to_string(), "22.87 USD");
//!
//! // Prices
//! let pair = Arc::new(AssetPair::new(waves, usd));
//! let price = OrderPrice::from_tokens("1.83", pair)?;
//! assert_eq!(price.to_matcher_coins(), "183");
//! # Ok::<(), EntityError>(())
//! ```

pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Asset, AssetInput, AssetJson, AssetPair, AssetPairJson, Candle, CandleInput, CandleJson,
        ConfigKey, ConfigRegistry, ConfigValue, EntityConfig, EntityError, EntityResult, Money,
        MoneyJson, OrderPrice, OrderPriceJson, MATCHER_SCALE_EXP,
    };
    pub use crate::numeric::{to_decimal, Decimal, DecimalInput, NumericError, NumericInput};
}
