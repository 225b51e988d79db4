// ============================================================================
// Money Domain Model
// Amounts denominated in the coin unit of one specific asset
// ============================================================================

use super::asset::Asset;
use super::errors::{EntityError, EntityResult};
use crate::numeric::scale::{self, scale_by_pow10};
use crate::numeric::{to_decimal, Decimal, NumericError, NumericInput};
use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

/// An amount of one asset.
///
/// Internally stores an integral number of coins (`tokens × 10^precision`).
/// Binary operations require both operands to carry assets with the same id;
/// the asset instances themselves may differ.
///
/// # Example
/// ```
/// use data_entities::prelude::*;
/// use std::sync::Arc;
///
/// let waves = Arc::new(Asset::new(AssetInput {
///     id: "WAVES".to_string(),
///     name: "Waves".to_string(),
///     precision: 8,
///     sender: "3PSender".to_string(),
///     quantity: DecimalInput::from("10000000000000000"),
///     ..Default::default()
/// })?);
///
/// let fee = Money::from_tokens("0.001", Arc::clone(&waves))?;
/// let balance = Money::from_coins(250_000_000u64, waves)?;
/// assert_eq!(balance.sub(&fee)?.to_tokens(), "2.49900000");
/// # Ok::<(), EntityError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Money {
    asset: Arc<Asset>,
    coins: Decimal,
    tokens: Decimal,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a coin amount; fractional coins are floored.
    ///
    /// # Errors
    /// Numeric errors from the decimal boundary.
    pub fn new(coins: impl NumericInput, asset: Arc<Asset>) -> EntityResult<Self> {
        let coins = scale::floor(to_decimal(coins)?);
        let tokens = scale_by_pow10(coins, -(asset.precision() as i32))?;
        Ok(Self {
            asset,
            coins,
            tokens,
        })
    }

    /// Create from a coin amount (alias of [`Money::new`]).
    pub fn from_coins(coins: impl NumericInput, asset: Arc<Asset>) -> EntityResult<Self> {
        Self::new(coins, asset)
    }

    /// Create from a token amount: `tokens × 10^precision` coins, floored.
    pub fn from_tokens(tokens: impl NumericInput, asset: Arc<Asset>) -> EntityResult<Self> {
        let coins = scale_by_pow10(to_decimal(tokens)?, asset.precision() as i32)?;
        Self::new(coins, asset)
    }

    /// Same asset, different coin amount
    pub fn clone_with_coins(&self, coins: impl NumericInput) -> EntityResult<Self> {
        Self::new(coins, Arc::clone(&self.asset))
    }

    /// Same asset, different token amount
    pub fn clone_with_tokens(&self, tokens: impl NumericInput) -> EntityResult<Self> {
        Self::from_tokens(tokens, Arc::clone(&self.asset))
    }

    fn zero(asset: Arc<Asset>) -> Self {
        Self {
            asset,
            coins: Decimal::ZERO,
            tokens: Decimal::ZERO,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn asset(&self) -> &Arc<Asset> {
        &self.asset
    }

    /// Coin amount (always integral)
    pub fn get_coins(&self) -> Decimal {
        self.coins
    }

    /// Token amount (`coins / 10^precision`)
    pub fn get_tokens(&self) -> Decimal {
        self.tokens
    }

    /// Coin amount as an integer string
    pub fn to_coins(&self) -> String {
        scale::to_fixed(self.coins, 0)
    }

    /// Token amount as a fixed-point string at the asset precision
    pub fn to_tokens(&self) -> String {
        scale::to_fixed(self.tokens, self.asset.precision())
    }

    /// Token amount with grouped integer digits, at `precision` places
    /// (defaults to the asset precision)
    pub fn to_format(&self, precision: Option<u32>) -> String {
        scale::to_grouped(self.tokens, precision.unwrap_or(self.asset.precision()))
    }

    pub fn is_zero(&self) -> bool {
        self.coins.is_zero()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Sum of two amounts of the same asset.
    ///
    /// # Errors
    /// `AssetMismatch` if the asset ids differ.
    pub fn add(&self, other: &Money) -> EntityResult<Money> {
        self.ensure_same_asset(other)?;
        let coins = self
            .coins
            .checked_add(other.coins)
            .ok_or(NumericError::Overflow)?;
        self.clone_with_coins(coins)
    }

    /// Difference of two amounts of the same asset.
    pub fn sub(&self, other: &Money) -> EntityResult<Money> {
        self.ensure_same_asset(other)?;
        let coins = self
            .coins
            .checked_sub(other.coins)
            .ok_or(NumericError::Overflow)?;
        self.clone_with_coins(coins)
    }

    /// Product of the two coin amounts.
    ///
    /// Operates on coins, not tokens: `2 × 5` tokens of an 8-precision asset
    /// gives `10^17` coins.
    pub fn times(&self, other: &Money) -> EntityResult<Money> {
        self.ensure_same_asset(other)?;
        let coins = self
            .coins
            .checked_mul(other.coins)
            .ok_or(NumericError::Overflow)?;
        self.clone_with_coins(coins)
    }

    /// Quotient of the two coin amounts, floored.
    ///
    /// # Errors
    /// - `AssetMismatch` if the asset ids differ
    /// - `DivisionByZero` if `other` holds zero coins
    pub fn div(&self, other: &Money) -> EntityResult<Money> {
        self.ensure_same_asset(other)?;
        if other.coins.is_zero() {
            return Err(NumericError::DivisionByZero.into());
        }
        let coins = self
            .coins
            .checked_div(other.coins)
            .ok_or(NumericError::Overflow)?;
        self.clone_with_coins(coins)
    }

    /// Like [`Money::sub`], but an amount of a different asset leaves `self`
    /// untouched instead of failing.
    pub fn safe_sub(&self, other: &Money) -> EntityResult<Cow<'_, Money>> {
        if !self.asset.same_id(&other.asset) {
            return Ok(Cow::Borrowed(self));
        }
        self.sub(other).map(Cow::Owned)
    }

    /// Clamp negative amounts to zero; non-negative amounts are returned as is.
    pub fn to_non_negative(&self) -> Cow<'_, Money> {
        if self.tokens.is_sign_negative() && !self.tokens.is_zero() {
            Cow::Owned(Self::zero(Arc::clone(&self.asset)))
        } else {
            Cow::Borrowed(self)
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    pub fn eq(&self, other: &Money) -> EntityResult<bool> {
        self.ensure_same_asset(other)?;
        Ok(self.coins == other.coins)
    }

    pub fn lt(&self, other: &Money) -> EntityResult<bool> {
        self.ensure_same_asset(other)?;
        Ok(self.coins < other.coins)
    }

    pub fn lte(&self, other: &Money) -> EntityResult<bool> {
        self.ensure_same_asset(other)?;
        Ok(self.coins <= other.coins)
    }

    pub fn gt(&self, other: &Money) -> EntityResult<bool> {
        self.ensure_same_asset(other)?;
        Ok(self.coins > other.coins)
    }

    pub fn gte(&self, other: &Money) -> EntityResult<bool> {
        self.ensure_same_asset(other)?;
        Ok(self.coins >= other.coins)
    }

    /// Largest of one or more amounts of the same asset.
    ///
    /// # Errors
    /// - `EmptyArguments` if `values` is empty
    /// - `AssetMismatch` if the values do not share one asset id
    pub fn max<'a, I>(values: I) -> EntityResult<&'a Money>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        let mut iter = values.into_iter();
        let mut best = iter.next().ok_or(EntityError::EmptyArguments)?;
        for candidate in iter {
            if !best.gte(candidate)? {
                best = candidate;
            }
        }
        Ok(best)
    }

    /// Smallest of one or more amounts of the same asset.
    pub fn min<'a, I>(values: I) -> EntityResult<&'a Money>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        let mut iter = values.into_iter();
        let mut best = iter.next().ok_or(EntityError::EmptyArguments)?;
        for candidate in iter {
            if !best.lte(candidate)? {
                best = candidate;
            }
        }
        Ok(best)
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert into `asset` at `rate` target tokens per source token.
    ///
    /// Returns `self` untouched when `asset` has the same id. Otherwise
    /// `coins × rate / 10^(source precision - target precision)`, rounded
    /// toward zero.
    pub fn convert_to(
        &self,
        asset: &Arc<Asset>,
        rate: impl NumericInput,
    ) -> EntityResult<Cow<'_, Money>> {
        if self.asset.same_id(asset) {
            return Ok(Cow::Borrowed(self));
        }

        let rate = to_decimal(rate)?;
        let shift = asset.precision() as i32 - self.asset.precision() as i32;
        let scaled = self
            .coins
            .checked_mul(rate)
            .ok_or(NumericError::Overflow)?;
        let coins = scale::round_toward_zero(scale_by_pow10(scaled, shift)?);

        Money::new(coins, Arc::clone(asset)).map(Cow::Owned)
    }

    /// See [`Money::convert_to`].
    pub fn convert<'a>(
        money: &'a Money,
        asset: &Arc<Asset>,
        rate: impl NumericInput,
    ) -> EntityResult<Cow<'a, Money>> {
        money.convert_to(asset, rate)
    }

    /// Nominal type check for dynamically typed values
    pub fn is_money(value: &dyn Any) -> bool {
        value.is::<Money>()
    }

    pub fn to_json(&self) -> MoneyJson {
        MoneyJson {
            asset_id: self.asset.id().to_string(),
            tokens: self.to_tokens(),
        }
    }

    fn ensure_same_asset(&self, other: &Money) -> EntityResult<()> {
        if self.asset.same_id(&other.asset) {
            return Ok(());
        }
        tracing::debug!(
            expected = self.asset.id(),
            actual = other.asset.id(),
            "money asset mismatch"
        );
        Err(EntityError::AssetMismatch {
            expected: self.asset.id().to_string(),
            actual: other.asset.id().to_string(),
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_tokens(), self.asset.id())
    }
}

/// Serialized form of a [`Money`] value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MoneyJson {
    pub asset_id: String,
    pub tokens: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset_pair::tests::test_asset;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_floor_on_construction() {
        let asset = test_asset("TKN", 0);
        assert_eq!(Money::new("19.9", Arc::clone(&asset)).unwrap().to_coins(), "19");
        assert_eq!(Money::new("-19.1", Arc::clone(&asset)).unwrap().to_coins(), "-20");
        assert_eq!(Money::new(19.999f64, asset).unwrap().to_coins(), "19");

        let waves = test_asset("WAVES", 8);
        let money = Money::new("99999999.9", waves).unwrap();
        assert_eq!(money.to_coins(), "99999999");
        assert_eq!(money.to_tokens(), "0.99999999");
    }

    #[test]
    fn test_clone_with_amounts() {
        let asset = test_asset("USD", 2);
        let money = Money::from_tokens("5", Arc::clone(&asset)).unwrap();

        let by_tokens = money.clone_with_tokens("12.349").unwrap();
        assert_eq!(by_tokens.to_tokens(), "12.34");
        assert!(Arc::ptr_eq(by_tokens.asset(), &asset));

        let by_coins = money.clone_with_coins(99.9f64).unwrap();
        assert_eq!(by_coins.to_coins(), "99");
        assert!(Arc::ptr_eq(by_coins.asset(), &asset));

        // Original untouched
        assert_eq!(money.to_tokens(), "5.00");
        assert!(money.clone_with_tokens("n/a").is_err());
    }

    #[test]
    fn test_coin_range_limits_high_precision() {
        let asset = test_asset("TKN", 20);

        let money = Money::from_tokens("1000", Arc::clone(&asset)).unwrap();
        assert_eq!(money.to_coins(), format!("1000{}", "0".repeat(20)));

        assert_eq!(
            Money::from_tokens("1000000000", Arc::clone(&asset)).unwrap_err(),
            EntityError::Numeric(NumericError::Overflow)
        );
        assert_eq!(
            money.clone_with_tokens("1000000000").unwrap_err(),
            EntityError::Numeric(NumericError::Overflow)
        );
    }

    #[test]
    fn test_convert_rejects_underflowing_rate() {
        let waves = Money::from_tokens(1, test_asset("WAVES", 8)).unwrap();
        assert!(matches!(
            waves.convert_to(&test_asset("USD", 2), "1e-30"),
            Err(EntityError::Numeric(NumericError::NonFiniteValue(_)))
        ));
    }

    #[test]
    fn test_from_tokens() {
        let asset = test_asset("WAVES", 8);
        let money = Money::from_tokens("1.5", Arc::clone(&asset)).unwrap();
        assert_eq!(money.get_coins(), dec!(150000000));
        assert_eq!(money.get_tokens(), dec!(1.5));
        assert_eq!(money.to_tokens(), "1.50000000");

        // Digits past the precision are floored away
        let money = Money::from_tokens("0.000000019", asset).unwrap();
        assert_eq!(money.to_coins(), "1");
    }

    #[test]
    fn test_invalid_input() {
        let asset = test_asset("WAVES", 8);
        assert!(matches!(
            Money::new("ten", Arc::clone(&asset)),
            Err(EntityError::Numeric(NumericError::InvalidNumericValue(_)))
        ));
        assert!(matches!(
            Money::from_tokens(f64::NEG_INFINITY, asset),
            Err(EntityError::Numeric(NumericError::NonFiniteValue(_)))
        ));
    }

    #[test]
    fn test_add_and_sub() {
        let asset = test_asset("WAVES", 8);
        let a = Money::from_tokens("1.5", Arc::clone(&asset)).unwrap();
        let b = Money::from_tokens("0.25", Arc::clone(&asset)).unwrap();

        assert_eq!(a.add(&b).unwrap().to_tokens(), "1.75000000");
        assert_eq!(a.sub(&b).unwrap().to_tokens(), "1.25000000");
        assert_eq!(b.sub(&a).unwrap().to_tokens(), "-1.25000000");
    }

    #[test]
    fn test_times_and_div_use_coins() {
        let asset = test_asset("WAVES", 8);
        let two = Money::from_tokens(2, Arc::clone(&asset)).unwrap();
        let five = Money::from_tokens(5, Arc::clone(&asset)).unwrap();

        assert_eq!(two.times(&five).unwrap().to_coins(), "100000000000000000");

        let ten = Money::from_tokens(10, Arc::clone(&asset)).unwrap();
        let three = Money::from_coins(3, asset).unwrap();
        // 10^9 / 3 coins, floored
        assert_eq!(ten.div(&three).unwrap().to_coins(), "333333333");
    }

    #[test]
    fn test_division_by_zero() {
        let asset = test_asset("WAVES", 8);
        let ten = Money::from_tokens(10, Arc::clone(&asset)).unwrap();
        let zero = Money::from_tokens(0, Arc::clone(&asset)).unwrap();

        assert_eq!(
            ten.div(&zero).unwrap_err(),
            EntityError::Numeric(NumericError::DivisionByZero)
        );
        let two = Money::from_tokens(2, asset).unwrap();
        assert_eq!(ten.div(&two).unwrap().to_coins(), "5");
    }

    #[test]
    fn test_asset_mismatch() {
        let waves = Money::from_tokens(1, test_asset("WAVES", 8)).unwrap();
        let btc = Money::from_tokens(1, test_asset("BTC", 8)).unwrap();

        let is_mismatch = |err: EntityError| matches!(err, EntityError::AssetMismatch { .. });
        assert!(is_mismatch(waves.add(&btc).unwrap_err()));
        assert!(is_mismatch(waves.sub(&btc).unwrap_err()));
        assert!(is_mismatch(waves.times(&btc).unwrap_err()));
        assert!(is_mismatch(waves.div(&btc).unwrap_err()));
        assert!(is_mismatch(waves.eq(&btc).unwrap_err()));
        assert!(is_mismatch(waves.lt(&btc).unwrap_err()));
        assert!(is_mismatch(waves.lte(&btc).unwrap_err()));
        assert!(is_mismatch(waves.gt(&btc).unwrap_err()));
        assert!(is_mismatch(waves.gte(&btc).unwrap_err()));
    }

    #[test]
    fn test_same_id_different_instances() {
        let a = Money::from_tokens(1, test_asset("WAVES", 8)).unwrap();
        let b = Money::from_tokens(2, test_asset("WAVES", 8)).unwrap();
        assert!(!Arc::ptr_eq(a.asset(), b.asset()));

        assert_eq!(a.add(&b).unwrap().to_tokens(), "3.00000000");
        assert!(a.lt(&b).unwrap());
    }

    #[test]
    fn test_comparisons() {
        let asset = test_asset("USD", 2);
        let small = Money::from_tokens("1.10", Arc::clone(&asset)).unwrap();
        let large = Money::from_tokens("2.00", Arc::clone(&asset)).unwrap();
        let same = Money::from_coins(110, asset).unwrap();

        assert!(small.eq(&same).unwrap());
        assert!(!small.eq(&large).unwrap());
        assert!(small.lt(&large).unwrap());
        assert!(small.lte(&same).unwrap());
        assert!(large.gt(&small).unwrap());
        assert!(large.gte(&large).unwrap());
        assert!(!small.gt(&large).unwrap());
    }

    #[test]
    fn test_safe_sub() {
        let waves = Money::from_tokens(5, test_asset("WAVES", 8)).unwrap();
        let btc = Money::from_tokens(1, test_asset("BTC", 8)).unwrap();
        let fee = Money::from_tokens(1, test_asset("WAVES", 8)).unwrap();

        let unchanged = waves.safe_sub(&btc).unwrap();
        assert!(matches!(unchanged, Cow::Borrowed(m) if std::ptr::eq(m, &waves)));

        assert_eq!(waves.safe_sub(&fee).unwrap().to_tokens(), "4.00000000");
    }

    #[test]
    fn test_to_non_negative() {
        let asset = test_asset("WAVES", 8);
        let negative = Money::from_tokens("-3", Arc::clone(&asset)).unwrap();
        let clamped = negative.to_non_negative();
        assert!(clamped.is_zero());
        assert_eq!(clamped.to_tokens(), "0.00000000");
        assert!(Arc::ptr_eq(clamped.asset(), &asset));

        let positive = Money::from_tokens("3", Arc::clone(&asset)).unwrap();
        assert!(matches!(positive.to_non_negative(), Cow::Borrowed(m) if std::ptr::eq(m, &positive)));

        let zero = Money::from_tokens(0, asset).unwrap();
        assert!(matches!(zero.to_non_negative(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_convert_same_id_returns_original() {
        let money = Money::from_tokens(10, test_asset("WAVES", 8)).unwrap();
        let other_instance = test_asset("WAVES", 8);

        let converted = Money::convert(&money, &other_instance, "123.45").unwrap();
        assert!(matches!(converted, Cow::Borrowed(m) if std::ptr::eq(m, &money)));
    }

    #[test]
    fn test_convert_between_precisions() {
        let waves = Money::from_tokens("1.5", test_asset("WAVES", 8)).unwrap();
        let usd = test_asset("USD", 2);

        // 1.5 WAVES at 2.345 USD/WAVES = 3.5175 USD -> 3.51 (toward zero)
        let converted = waves.convert_to(&usd, "2.345").unwrap();
        assert_eq!(converted.to_tokens(), "3.51");
        assert_eq!(converted.asset().id(), "USD");

        // Toward zero, not floor, for negative results
        let debt = Money::from_tokens("-1.5", test_asset("WAVES", 8)).unwrap();
        assert_eq!(debt.convert_to(&usd, "2.345").unwrap().to_tokens(), "-3.51");

        // Lower to higher precision
        let cents = Money::from_tokens("3.51", Arc::clone(&usd)).unwrap();
        let back = cents.convert_to(&test_asset("WAVES", 8), "0.5").unwrap();
        assert_eq!(back.to_tokens(), "1.75500000");
    }

    #[test]
    fn test_convert_invalid_rate() {
        let waves = Money::from_tokens(1, test_asset("WAVES", 8)).unwrap();
        assert!(waves.convert_to(&test_asset("USD", 2), "n/a").is_err());
    }

    #[test]
    fn test_max_min() {
        let asset = test_asset("WAVES", 8);
        let values = [
            Money::from_tokens(3, Arc::clone(&asset)).unwrap(),
            Money::from_tokens(7, Arc::clone(&asset)).unwrap(),
            Money::from_tokens(-1, Arc::clone(&asset)).unwrap(),
        ];

        assert!(std::ptr::eq(Money::max(&values).unwrap(), &values[1]));
        assert!(std::ptr::eq(Money::min(&values).unwrap(), &values[2]));
        assert!(std::ptr::eq(Money::max([&values[0]]).unwrap(), &values[0]));

        let empty: [Money; 0] = [];
        assert_eq!(Money::max(&empty).unwrap_err(), EntityError::EmptyArguments);
        assert_eq!(Money::min(&empty).unwrap_err(), EntityError::EmptyArguments);

        let btc = Money::from_tokens(1, test_asset("BTC", 8)).unwrap();
        assert!(matches!(
            Money::max([&values[0], &btc]),
            Err(EntityError::AssetMismatch { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let money = Money::from_tokens("12.3", test_asset("USD", 2)).unwrap();

        assert_eq!(money.to_string(), "12.30 USD");
        assert_eq!(
            money.to_json(),
            MoneyJson {
                asset_id: "USD".to_string(),
                tokens: "12.30".to_string(),
            }
        );

        let big = Money::from_tokens("1234567.891", test_asset("TKN", 3)).unwrap();
        assert_eq!(big.to_format(None), "1,234,567.891");
        assert_eq!(big.to_format(Some(1)), "1,234,567.9");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_field_names() {
        let money = Money::from_tokens("1", test_asset("WAVES", 8)).unwrap();
        assert_eq!(
            serde_json::to_value(money.to_json()).unwrap(),
            serde_json::json!({"assetId": "WAVES", "tokens": "1.00000000"})
        );
    }

    #[test]
    fn test_identity_predicate() {
        let money = Money::from_tokens(1, test_asset("WAVES", 8)).unwrap();
        assert!(Money::is_money(&money));
        assert!(!Money::is_money(money.asset().as_ref()));
    }

    proptest! {
        #[test]
        fn prop_token_round_trip(units in -1_000_000_000_000i64..1_000_000_000_000i64, precision in 0u32..=8) {
            let asset = test_asset("TKN", precision as i64);
            let tokens = scale::to_fixed(Decimal::new(units, precision), precision);

            let money = Money::from_tokens(tokens.as_str(), asset).unwrap();
            prop_assert_eq!(money.to_tokens(), tokens);
            prop_assert_eq!(money.to_coins(), units.to_string());
        }

        #[test]
        fn prop_construction_floors(coins in -1_000_000i64..1_000_000i64, frac in 1u32..1000) {
            let asset = test_asset("TKN", 0);
            let raw = Decimal::new(coins, 0) + Decimal::new(frac as i64, 3);
            let money = Money::new(raw, asset).unwrap();
            prop_assert_eq!(money.get_coins(), Decimal::new(coins, 0));
        }

        #[test]
        fn prop_mismatch_law(a in 0i64..1_000_000, b in 1i64..1_000_000) {
            let left = Money::from_coins(a, test_asset("AAA", 8)).unwrap();
            let right = Money::from_coins(b, test_asset("BBB", 8)).unwrap();

            prop_assert!(left.add(&right).is_err());
            prop_assert!(left.sub(&right).is_err());
            prop_assert!(left.times(&right).is_err());
            prop_assert!(left.div(&right).is_err());
            prop_assert!(left.eq(&right).is_err());
            prop_assert!(left.lt(&right).is_err());
            let kept = left.safe_sub(&right).unwrap();
            prop_assert!(matches!(kept, Cow::Borrowed(m) if std::ptr::eq(m, &left)));
        }
    }
}
