// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod asset;
pub mod asset_pair;
pub mod candle;
pub mod config;
pub mod errors;
pub mod money;
pub mod order_price;

pub use asset::{Asset, AssetInput, AssetJson};
pub use asset_pair::{AssetPair, AssetPairJson};
pub use candle::{Candle, CandleInput, CandleJson};
pub use config::{
    global, AssetRemap, CandleRemap, ConfigKey, ConfigRegistry, ConfigValue, EntityConfig,
};
pub use errors::{EntityError, EntityResult};
pub use money::{Money, MoneyJson};
pub use order_price::{OrderPrice, OrderPriceJson, MATCHER_SCALE_EXP};
