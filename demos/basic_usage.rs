// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_money::prelude::*;

fn main() -> Result<(), MoneyError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Exact Money Example ===\n");

    let fixed = FixedPointCalculator::new();
    let decimal = DecimalCalculator::new();

    // Cart in cents
    println!("Building a cart in minor units...");
    let book = MoneyAmountFixed::new(1999, "EUR");
    let pens = fixed.multiply_with_integer(&MoneyAmountFixed::new(149, "EUR"), 4)?;
    let cart = fixed.add(&book, &pens)?;
    println!("  book:  {} {}", book.amount(), book.currency());
    println!("  pens:  {} {}", pens.amount(), pens.currency());
    println!("  cart:  {} {}\n", cart.amount(), cart.currency());

    // Fractional results stay exact
    println!("Applying a discount factor...");
    let discounted = fixed.multiply_with_decimal(&cart, "0.85")?;
    println!("  85% of cart: {} {}\n", discounted.amount(), discounted.currency());

    // Tax
    println!("Deriving tax at 20%...");
    let gross = fixed.calculate_gross(&cart, "20")?;
    let net = fixed.to_fractional_price(&cart);
    println!("  gross:    {} {}", gross.amount(), gross.currency());
    println!("  tax:      {}", decimal.calculate_tax(&net, &gross)?);
    println!("  tax rate: {}%", decimal.calculate_tax_rate(&net, &gross)?);
    println!("  net back: {}\n", decimal.calculate_net(&gross, "20")?.amount());

    // Guards
    println!("Guards...");
    let dollars = MoneyAmountFixed::new(500, "USD");
    if let Err(err) = fixed.add(&cart, &dollars) {
        println!("  {}", err);
    }
    if let Err(err) = fixed.add(&MoneyAmountFixed::new(i64::MAX, "EUR"), &book) {
        println!("  {}", err);
    }

    // Rounded division policy
    println!("\nRounded division (2 digits)...");
    let rounded = DecimalCalculator::with_config(CalculatorConfig::rounded(2))?;
    let ten = MoneyAmountDecimal::new(Decimal::from(10), "EUR");
    println!("  exact net of 10 at 19%:   {}", decimal.calculate_net(&ten, "19")?.amount());
    println!("  rounded net of 10 at 19%: {}", rounded.calculate_net(&ten, "19")?.amount());

    println!("\n=== Example Complete ===");
    Ok(())
}
