// ============================================================================
// Rule Checks Example
// ============================================================================

use finarith::prelude::*;
use tracing::Level;

fn dec(s: &str) -> SafeDecimal {
    s.parse().unwrap()
}

fn main() {
    // Debug level shows each rule rejection
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    println!("=== Checked Arithmetic ===\n");
    println!("i64::MAX + 1      -> {:?}", signed::add(i64::MAX, 1));
    println!("u64::MAX + 0      -> {:?}", unsigned::add(u64::MAX, 0));
    println!("3 - 5 (unsigned)  -> {:?}", unsigned::sub(3, 5));
    match signed::add_with_limit(10, 30, 30) {
        Ok(v) => println!("10 + 30 (limit 30) -> {}", v),
        Err(e) => println!("10 + 30 (limit 30) -> {}", e),
    }

    println!("\n=== Rounding 10.555 to 2 places ===\n");
    for mode in RoundingMode::ALL {
        println!("  {:<16} {:?}", mode.as_str(), round_f64(10.555, 2, mode));
    }

    println!("\n=== Rounding -155 to a unit of 10 ===\n");
    for mode in RoundingMode::ALL {
        println!("  {:<16} {:?}", mode.as_str(), round_i64(-155, 10, mode));
    }

    println!("\n=== Transfers (max 1000, min 10, daily 5000) ===\n");
    let transfers = TransferRule::new(dec("1000.00"), dec("10.00"), dec("5000.00"));
    for (amount, balance, daily) in [
        ("500.00", "600.00", "4000.00"),
        ("5.00", "600.00", "0"),
        ("1000.00", "2000.00", "4500.00"),
        ("700.00", "600.00", "0"),
    ] {
        let outcome = transfers.validate_transfer(dec(amount), dec(balance), dec(daily));
        match outcome {
            Ok(()) => println!("  {} from {} -> accepted", amount, balance),
            Err(e) => println!("  {} from {} -> {}", amount, balance, e),
        }
    }

    println!("\n=== Checkout ===\n");
    let pricing = PricingRule::new(dec("10"), dec("1000"));
    let discounts = DiscountRule::new(dec("30"), dec("100"), dec("50"));
    let tax = TaxRule::new(dec("8.25"), dec("0"), dec("500")).with_rounding(RoundingMode::HalfEven, 2);

    let price = dec("249.99");
    if let Err(e) = pricing.validate_price(price) {
        println!("  price rejected: {}", e);
        return;
    }

    let discount = discounts.calculate_discount(price, dec("20")).unwrap();
    let net = price.checked_sub(discount).unwrap();
    let owed = tax.calculate_tax(net).unwrap();

    println!("  price    {}", price);
    println!("  discount {}", discount);
    println!("  tax      {}", owed);
    println!("  total    {}", net.checked_add(owed).unwrap());

    println!("\n=== Example Complete ===");
}
