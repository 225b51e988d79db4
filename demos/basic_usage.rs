// ============================================================================
// Basic Usage Example
// ============================================================================

use data_entities::domain::global;
use data_entities::prelude::*;
use std::sync::Arc;

fn asset(id: &str, ticker: Option<&str>, precision: i64) -> EntityResult<Arc<Asset>> {
    let input = AssetInput {
        ticker: ticker.map(str::to_string),
        id: id.to_string(),
        name: format!("{id} token"),
        precision,
        sender: "3PSender".to_string(),
        quantity: DecimalInput::from("10000000000000000"),
        ..Default::default()
    };
    Ok(Arc::new(Asset::new(input)?))
}

fn main() -> EntityResult<()> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Data Entities Example ===\n");

    // Normalise tickers before validation
    global().set(
        "remapAsset",
        Some(ConfigValue::remap_asset(|mut input| {
            input.ticker = input.ticker.map(|t| t.to_uppercase());
            input
        })),
    )?;

    let waves = asset("WAVES", Some("waves"), 8)?;
    let usd = asset("Ft8X1v1LTa1ABafufpaCWyVj8KkaxUWE6xBhW6sNFJck", Some("usd"), 2)?;
    println!("Assets: {} and {}\n", waves.display_name(), usd.display_name());

    // Amounts
    println!("=== Money ===");
    let balance = Money::from_tokens("1250.5", Arc::clone(&waves))?;
    let fee = Money::from_coins(300_000u64, Arc::clone(&waves))?;
    let after_fee = balance.sub(&fee)?;
    println!("Balance:   {}", balance);
    println!("Fee:       {}", fee);
    println!("After fee: {}", after_fee.to_format(None));

    let in_usd = after_fee.convert_to(&usd, "1.83")?;
    println!("In USD:    {} {}", in_usd.to_format(None), usd.display_name());

    let foreign = Money::from_tokens(1, Arc::clone(&usd))?;
    match balance.add(&foreign) {
        Ok(sum) => println!("Unexpected sum: {}", sum),
        Err(err) => println!("Rejected: {}", err),
    }
    println!("Safe sub keeps balance: {}", balance.safe_sub(&foreign)?);

    // Prices
    println!("\n=== Order Price ===");
    let pair = Arc::new(AssetPair::new(Arc::clone(&waves), Arc::clone(&usd)));
    let price = OrderPrice::from_tokens("1.8375", Arc::clone(&pair))?;
    println!("Pair:           {}", pair);
    println!("Price:          {}", price);
    println!("Matcher coins:  {}", price.to_matcher_coins());

    global().reset();
    Ok(())
}
