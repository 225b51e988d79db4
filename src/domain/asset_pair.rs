// ============================================================================
// Asset Pair Domain Model
// ============================================================================

use super::asset::Asset;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Ordered trading pair: amounts are quoted in the amount asset, prices in
/// the price asset.
#[derive(Debug, Clone)]
pub struct AssetPair {
    amount_asset: Arc<Asset>,
    price_asset: Arc<Asset>,
    /// price precision - amount precision (may be negative)
    precision_difference: i32,
}

impl AssetPair {
    pub fn new(amount_asset: Arc<Asset>, price_asset: Arc<Asset>) -> Self {
        let precision_difference = price_asset.precision() as i32 - amount_asset.precision() as i32;
        Self {
            amount_asset,
            price_asset,
            precision_difference,
        }
    }

    pub fn amount_asset(&self) -> &Arc<Asset> {
        &self.amount_asset
    }

    pub fn price_asset(&self) -> &Arc<Asset> {
        &self.price_asset
    }

    pub fn precision_difference(&self) -> i32 {
        self.precision_difference
    }

    /// The same two assets with their roles swapped
    pub fn reverse(&self) -> Self {
        Self::new(Arc::clone(&self.price_asset), Arc::clone(&self.amount_asset))
    }

    pub fn to_json(&self) -> AssetPairJson {
        AssetPairJson {
            amount_asset: self.amount_asset.id().to_string(),
            price_asset: self.price_asset.id().to_string(),
        }
    }

    /// Nominal type check for dynamically typed values
    pub fn is_asset_pair(value: &dyn Any) -> bool {
        value.is::<AssetPair>()
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.amount_asset.id(), self.price_asset.id())
    }
}

/// Serialized form of an [`AssetPair`] (asset ids only)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssetPairJson {
    pub amount_asset: String,
    pub price_asset: String,
}
