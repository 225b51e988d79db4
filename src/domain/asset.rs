// ============================================================================
// Asset Domain Model
// Immutable descriptor of a tradable token and its total quantity
// ============================================================================

use super::config::{self, EntityConfig};
use super::errors::{EntityError, EntityResult};
use crate::numeric::scale::MAX_SCALE;
use crate::numeric::{Decimal, DecimalInput};
use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw asset fields as supplied by a caller, before remapping and validation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssetInput {
    pub ticker: Option<String>,
    pub id: String,
    pub name: String,
    pub precision: i64,
    pub description: String,
    pub height: i64,
    pub timestamp: DateTime<Utc>,
    pub sender: String,
    pub quantity: DecimalInput,
    pub reissuable: bool,
    pub has_script: Option<bool>,
    pub min_sponsored_fee: Option<DecimalInput>,
}

/// Validated, immutable asset.
///
/// Quantities are expressed in the asset's own coin unit. Two assets are the
/// same asset for arithmetic purposes when their ids are equal.
#[derive(Debug, Clone)]
pub struct Asset {
    ticker: Option<String>,
    id: String,
    name: String,
    precision: u32,
    description: String,
    height: u64,
    timestamp: DateTime<Utc>,
    sender: String,
    quantity: Decimal,
    reissuable: bool,
    has_script: bool,
    min_sponsored_fee: Option<Decimal>,
    display_name: String,
}

impl Asset {
    /// Highest supported precision (decimal places of the token unit).
    ///
    /// Coin amounts share the decimal's 96-bit range (about `7.9 × 10^28`),
    /// so the largest token amount shrinks as precision grows: at precision
    /// 20 it is below `10^9`. Amounts beyond it fail with `Overflow`.
    pub const MAX_PRECISION: u32 = MAX_SCALE;

    /// Build an asset using the process-wide remap hook.
    pub fn new(input: AssetInput) -> EntityResult<Self> {
        Self::with_config(input, &config::global().snapshot())
    }

    /// Build an asset using the hooks of `config`.
    ///
    /// # Errors
    /// - `InvalidAssetField` if id, name or sender is empty, or precision or
    ///   height is not a non-negative integer
    /// - numeric errors from `quantity` or `min_sponsored_fee`
    pub fn with_config(input: AssetInput, config: &EntityConfig) -> EntityResult<Self> {
        let input = config.remap_asset(input);

        require_non_empty("id", &input.id)?;
        require_non_empty("name", &input.name)?;
        require_non_empty("sender", &input.sender)?;
        let precision = validate_precision(input.precision)?;
        let height = u64::try_from(input.height).map_err(|_| EntityError::InvalidAssetField {
            field: "height",
            reason: "must be a non-negative integer",
        })?;

        let quantity = input.quantity.to_decimal()?;
        let min_sponsored_fee = input
            .min_sponsored_fee
            .as_ref()
            .map(DecimalInput::to_decimal)
            .transpose()?;

        let display_name = input.ticker.clone().unwrap_or_else(|| input.name.clone());

        tracing::trace!(asset_id = %input.id, precision, "asset created");

        Ok(Self {
            ticker: input.ticker,
            id: input.id,
            name: input.name,
            precision,
            description: input.description,
            height,
            timestamp: input.timestamp,
            sender: input.sender,
            quantity,
            reissuable: input.reissuable,
            has_script: input.has_script.unwrap_or(false),
            min_sponsored_fee,
            display_name,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn ticker(&self) -> Option<&str> {
        self.ticker.as_deref()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Total quantity in coins
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn reissuable(&self) -> bool {
        self.reissuable
    }

    pub fn has_script(&self) -> bool {
        self.has_script
    }

    pub fn min_sponsored_fee(&self) -> Option<Decimal> {
        self.min_sponsored_fee
    }

    /// Ticker if the asset has one, otherwise its name
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// True if both assets carry the same id
    pub fn same_id(&self, other: &Asset) -> bool {
        self.id == other.id
    }

    /// Plain snapshot of every field
    pub fn to_json(&self) -> AssetJson {
        AssetJson {
            ticker: self.ticker.clone(),
            id: self.id.clone(),
            name: self.name.clone(),
            precision: self.precision,
            description: self.description.clone(),
            height: self.height,
            timestamp: self.timestamp,
            sender: self.sender.clone(),
            quantity: self.quantity,
            reissuable: self.reissuable,
            has_script: self.has_script,
            min_sponsored_fee: self.min_sponsored_fee,
        }
    }

    /// Nominal type check for dynamically typed values
    pub fn is_asset(value: &dyn Any) -> bool {
        value.is::<Asset>()
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

fn require_non_empty(field: &'static str, value: &str) -> EntityResult<()> {
    if value.trim().is_empty() {
        return Err(EntityError::InvalidAssetField {
            field,
            reason: "must be a non-empty string",
        });
    }
    Ok(())
}

fn validate_precision(precision: i64) -> EntityResult<u32> {
    let precision = u32::try_from(precision).map_err(|_| EntityError::InvalidAssetField {
        field: "precision",
        reason: "must be a non-negative integer",
    })?;
    if precision > Asset::MAX_PRECISION {
        return Err(EntityError::InvalidAssetField {
            field: "precision",
            reason: "exceeds the maximum supported precision",
        });
    }
    Ok(precision)
}

/// Serialized form of an [`Asset`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssetJson {
    pub ticker: Option<String>,
    pub id: String,
    pub name: String,
    pub precision: u32,
    pub description: String,
    pub height: u64,
    pub timestamp: DateTime<Utc>,
    pub sender: String,
    pub quantity: Decimal,
    pub reissuable: bool,
    pub has_script: bool,
    pub min_sponsored_fee: Option<Decimal>,
}
