// ============================================================================
// Entity Configuration
// Remap hooks applied to raw construction input, plus the process-wide registry
// ============================================================================

use super::asset::AssetInput;
use super::candle::CandleInput;
use super::errors::{EntityError, EntityResult};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Transform applied to raw asset fields before validation
pub type AssetRemap = Arc<dyn Fn(AssetInput) -> AssetInput + Send + Sync>;

/// Transform applied to raw candle fields before validation
pub type CandleRemap = Arc<dyn Fn(CandleInput) -> CandleInput + Send + Sync>;

// ============================================================================
// Config Key
// ============================================================================

/// The closed set of configurable hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    RemapAsset,
    RemapCandle,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::RemapAsset, ConfigKey::RemapCandle];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::RemapAsset => "remapAsset",
            ConfigKey::RemapCandle => "remapCandle",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = EntityError;

    /// Only the exact hook names are accepted; everything else (including
    /// names such as `__proto__` or `constructor`) is an unknown key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| EntityError::UnknownConfigKey(s.to_string()))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Config Value
// ============================================================================

/// A hook value, tagged with the key it belongs to.
#[derive(Clone)]
pub enum ConfigValue {
    RemapAsset(AssetRemap),
    RemapCandle(CandleRemap),
}

impl ConfigValue {
    pub fn remap_asset<F>(f: F) -> Self
    where
        F: Fn(AssetInput) -> AssetInput + Send + Sync + 'static,
    {
        ConfigValue::RemapAsset(Arc::new(f))
    }

    pub fn remap_candle<F>(f: F) -> Self
    where
        F: Fn(CandleInput) -> CandleInput + Send + Sync + 'static,
    {
        ConfigValue::RemapCandle(Arc::new(f))
    }

    /// The key this value can be stored under.
    pub fn key(&self) -> ConfigKey {
        match self {
            ConfigValue::RemapAsset(_) => ConfigKey::RemapAsset,
            ConfigValue::RemapCandle(_) => ConfigKey::RemapCandle,
        }
    }
}

impl fmt::Debug for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigValue::{}(<fn>)", self.key())
    }
}

// ============================================================================
// Entity Configuration
// ============================================================================

/// Remap hooks threaded through entity constructors.
///
/// Defaults to identity transforms. Cloning is cheap (two `Arc`s), so a
/// snapshot can be taken once per construction.
#[derive(Clone)]
pub struct EntityConfig {
    remap_asset: AssetRemap,
    remap_candle: CandleRemap,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            remap_asset: Arc::new(|input: AssetInput| input),
            remap_candle: Arc::new(|input: CandleInput| input),
        }
    }
}

impl fmt::Debug for EntityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityConfig")
            .field("remap_asset", &"<fn>")
            .field("remap_candle", &"<fn>")
            .finish()
    }
}

impl EntityConfig {
    /// Create a configuration with identity hooks
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the asset remap hook
    pub fn with_remap_asset<F>(mut self, f: F) -> Self
    where
        F: Fn(AssetInput) -> AssetInput + Send + Sync + 'static,
    {
        self.remap_asset = Arc::new(f);
        self
    }

    /// Builder method: Set the candle remap hook
    pub fn with_remap_candle<F>(mut self, f: F) -> Self
    where
        F: Fn(CandleInput) -> CandleInput + Send + Sync + 'static,
    {
        self.remap_candle = Arc::new(f);
        self
    }

    /// Current hook for `key`
    pub fn get(&self, key: ConfigKey) -> ConfigValue {
        match key {
            ConfigKey::RemapAsset => ConfigValue::RemapAsset(Arc::clone(&self.remap_asset)),
            ConfigKey::RemapCandle => ConfigValue::RemapCandle(Arc::clone(&self.remap_candle)),
        }
    }

    /// Current hook for the key named `key`
    pub fn get_by_name(&self, key: &str) -> EntityResult<ConfigValue> {
        Ok(self.get(key.parse()?))
    }

    /// Replace one hook.
    ///
    /// A `None` value is a no-op, but the key is still validated.
    ///
    /// # Errors
    /// - `UnknownConfigKey` if `key` is not a hook name
    /// - `ConfigValueMismatch` if `value` belongs to a different key
    pub fn set(&mut self, key: &str, value: Option<ConfigValue>) -> EntityResult<()> {
        validate_entry(key, value.as_ref())?;
        if let Some(value) = value {
            self.apply(value);
        }
        Ok(())
    }

    /// Replace several hooks at once.
    ///
    /// Every entry is validated before any hook is replaced, so a failing
    /// call leaves the configuration untouched.
    pub fn set_many<'a, I>(&mut self, entries: I) -> EntityResult<()>
    where
        I: IntoIterator<Item = (&'a str, Option<ConfigValue>)>,
    {
        let entries: Vec<_> = entries.into_iter().collect();
        for (key, value) in &entries {
            validate_entry(key, value.as_ref())?;
        }
        for value in entries.into_iter().filter_map(|(_, value)| value) {
            self.apply(value);
        }
        Ok(())
    }

    /// Apply the asset remap hook
    pub fn remap_asset(&self, input: AssetInput) -> AssetInput {
        (self.remap_asset)(input)
    }

    /// Apply the candle remap hook
    pub fn remap_candle(&self, input: CandleInput) -> CandleInput {
        (self.remap_candle)(input)
    }

    fn apply(&mut self, value: ConfigValue) {
        tracing::debug!(key = %value.key(), "config hook replaced");
        match value {
            ConfigValue::RemapAsset(f) => self.remap_asset = f,
            ConfigValue::RemapCandle(f) => self.remap_candle = f,
        }
    }
}

fn validate_entry(key: &str, value: Option<&ConfigValue>) -> EntityResult<ConfigKey> {
    let parsed = key.parse::<ConfigKey>().inspect_err(|_| {
        tracing::warn!(key, "rejected unknown config key");
    })?;

    match value {
        Some(value) if value.key() != parsed => Err(EntityError::ConfigValueMismatch {
            key: parsed.as_str(),
        }),
        _ => Ok(parsed),
    }
}

// ============================================================================
// Process-wide Registry
// ============================================================================

/// Lock-guarded configuration shared by every constructor that is not given
/// an explicit [`EntityConfig`].
///
/// Writers are serialized by the lock; last writer wins.
pub struct ConfigRegistry {
    inner: RwLock<EntityConfig>,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(EntityConfig::default()),
        }
    }

    pub fn get(&self, key: ConfigKey) -> ConfigValue {
        self.inner.read().get(key)
    }

    pub fn get_by_name(&self, key: &str) -> EntityResult<ConfigValue> {
        self.inner.read().get_by_name(key)
    }

    pub fn set(&self, key: &str, value: Option<ConfigValue>) -> EntityResult<()> {
        self.inner.write().set(key, value)
    }

    pub fn set_many<'a, I>(&self, entries: I) -> EntityResult<()>
    where
        I: IntoIterator<Item = (&'a str, Option<ConfigValue>)>,
    {
        self.inner.write().set_many(entries)
    }

    /// Copy of the current hooks, detached from later `set` calls
    pub fn snapshot(&self) -> EntityConfig {
        self.inner.read().clone()
    }

    /// Restore identity hooks
    pub fn reset(&self) {
        tracing::debug!("config hooks reset to identity");
        *self.inner.write() = EntityConfig::default();
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigRegistry").finish_non_exhaustive()
    }
}

static GLOBAL: Lazy<ConfigRegistry> = Lazy::new(ConfigRegistry::new);

/// The process-wide registry
pub fn global() -> &'static ConfigRegistry {
    &GLOBAL
}
