//! # Text Rendering
//!
//! Pure functions that turn session state into the text printed on the
//! terminal. Nothing here reads input or writes output.

use minicart_core::{AppliedDiscount, Cart, Catalog, CheckoutSummary, DiscountRegistry, ExchangeRateTable};

use crate::command::MenuCommand;
use crate::config::ConfigState;

/// The main menu, without the trailing prompt.
pub fn menu(config: &ConfigState) -> String {
    let mut out = format!("\n-- {} --\n", config.store_name);
    for command in MenuCommand::ALL {
        out.push_str(&format!("{}. {}\n", command.keyword(), command.label()));
    }
    out
}

/// One line per product: `ID: P001, Name: Laptop, Price: $1000.00, Category: Electronics`.
pub fn catalog(config: &ConfigState, catalog: &Catalog) -> String {
    let mut out = String::from("\nProduct Catalog:\n");
    for product in catalog.products() {
        out.push_str(&format!(
            "ID: {}, Name: {}, Price: {}, Category: {}\n",
            product.id,
            product.name,
            config.format_currency(product.price),
            product.category
        ));
    }
    out
}

/// Numbered line items with per-item totals and the subtotal.
pub fn cart(config: &ConfigState, cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty.\n".to_string();
    }

    let mut out = String::from("\nYour Cart:\n");
    for (index, item) in cart.items().iter().enumerate() {
        out.push_str(&format!(
            "{}. {} - Quantity: {}, Price: {}, Total: {}\n",
            index + 1,
            item.product.name,
            item.quantity,
            config.format_with_code(item.product.price),
            config.format_with_code(item.total())
        ));
    }
    out.push_str(&format!(
        "Total (before discounts): {}\n",
        config.format_with_code(cart.subtotal())
    ));
    out
}

pub fn discount_list(registry: &DiscountRegistry) -> String {
    let mut out = String::from("\nAvailable Discounts:\n");
    for (index, rule) in registry.rules().iter().enumerate() {
        out.push_str(&format!("{}. {} - {}\n", index + 1, rule.name(), rule.description()));
    }
    out
}

/// What each rule would take off the current cart.
pub fn discount_preview(config: &ConfigState, discounts: &[AppliedDiscount]) -> String {
    let mut out = String::from("\nDiscounts for your cart:\n");
    for discount in discounts {
        out.push_str(&format!(
            "- {}: -{}\n",
            discount.name,
            config.format_currency(discount.amount)
        ));
    }
    let total = discounts.iter().map(|d| d.amount).sum();
    out.push_str(&format!("Total discount: {}\n", config.format_with_code(total)));
    out
}

/// The receipt printed at checkout, before the currency prompt.
pub fn receipt(config: &ConfigState, summary: &CheckoutSummary) -> String {
    let mut out = format!("Subtotal: {}\n", config.format_with_code(summary.subtotal));
    for discount in summary.discounts.iter().filter(|d| !d.amount.is_zero()) {
        out.push_str(&format!(
            "  {}: -{}\n",
            discount.name,
            config.format_currency(discount.amount)
        ));
    }
    out.push_str(&format!(
        "Total discount: {}\n",
        config.format_with_code(summary.total_discount)
    ));
    out.push_str(&format!(
        "Final Total in {}: {}\n",
        config.currency_code,
        config.format_currency(summary.total)
    ));
    out
}

/// `Available Currencies: EUR, GBP`
pub fn currencies(rates: &ExchangeRateTable) -> String {
    format!(
        "Available Currencies: {}\n",
        rates.codes().collect::<Vec<_>>().join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use minicart_core::Money;

    fn sample_cart() -> Cart {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, "P001", 1).unwrap();
        cart.add_item(&catalog, "P003", 3).unwrap();
        cart
    }

    #[test]
    fn test_menu_lists_every_command() {
        let text = menu(&ConfigState::default());
        assert!(text.contains("-- Mini E-commerce Cart System --"));
        assert!(text.contains("initial_Product_Catalog. View product catalog"));
        assert!(text.contains("exit. Exit"));
        assert_eq!(text.lines().filter(|l| l.contains(". ")).count(), 9);
    }

    #[test]
    fn test_catalog_lines() {
        let text = catalog(&ConfigState::default(), &Catalog::standard());
        assert!(text.contains("ID: P001, Name: Laptop, Price: $1000.00, Category: Electronics"));
        assert!(text.contains("ID: P003, Name: T-shirt, Price: $20.00, Category: Fashion"));
    }

    #[test]
    fn test_cart_listing() {
        let text = cart(&ConfigState::default(), &sample_cart());
        assert!(text.contains("1. Laptop - Quantity: 1, Price: $1000.00 USD, Total: $1000.00 USD"));
        assert!(text.contains("2. T-shirt - Quantity: 3, Price: $20.00 USD, Total: $60.00 USD"));
        assert!(text.contains("Total (before discounts): $1060.00 USD"));
    }

    #[test]
    fn test_empty_cart() {
        assert_eq!(cart(&ConfigState::default(), &Cart::new()), "Your cart is empty.\n");
    }

    #[test]
    fn test_discount_list() {
        let text = discount_list(&DiscountRegistry::standard());
        assert!(text.contains("1. Buy 1 Get 1 Free on Fashion - Buy 1 Get 1 Free for Fashion category items."));
        assert!(text.contains("2. 10% Off on Electronics - 10% discount on all Electronics items."));
    }

    #[test]
    fn test_receipt_skips_zero_discounts() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, "P002", 2).unwrap();
        let summary = CheckoutSummary::for_cart(&cart, &DiscountRegistry::standard());

        let text = receipt(&ConfigState::default(), &summary);
        assert!(text.contains("Subtotal: $1000.00 USD"));
        assert!(text.contains("10% Off on Electronics: -$100.00"));
        assert!(!text.contains("Buy 1 Get 1"));
        assert!(text.contains("Final Total in USD: $900.00"));
    }

    #[test]
    fn test_discount_preview_total() {
        let summary = CheckoutSummary::for_cart(&sample_cart(), &DiscountRegistry::standard());
        let text = discount_preview(&ConfigState::default(), &summary.discounts);
        assert!(text.contains("- Buy 1 Get 1 Free on Fashion: -$20.00"));
        assert!(text.contains("- 10% Off on Electronics: -$100.00"));
        assert!(text.contains("Total discount: $120.00 USD"));
        assert_eq!(summary.total_discount, Money::from_cents(12000));
    }

    #[test]
    fn test_currencies() {
        assert_eq!(
            currencies(&ExchangeRateTable::standard()),
            "Available Currencies: EUR, GBP\n"
        );
    }
}
