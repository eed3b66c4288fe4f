//! # Interactive Session
//!
//! The menu loop. One session owns the catalog, the cart, the discount
//! registry and the exchange rates; nothing is global.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │        ┌──────── any command / invalid input ────────┐                 │
//! │        │                                             │                 │
//! │        ▼                                             │                 │
//! │   ┌─────────┐                                        │                 │
//! │   │  Ready  │────────────────────────────────────────┘                 │
//! │   └────┬────┘                                                           │
//! │        │ exit / end of input                                            │
//! │        ▼                                                                │
//! │   ┌────────────┐                                                        │
//! │   │ Terminated │  (absorbing)                                           │
//! │   └────────────┘                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Multi-step Commands
//! `addtocart` and `removefromcart` read both answers first, then validate.
//! Input is therefore consumed in a fixed pattern whatever the answers are.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use minicart_core::validation::{
    normalize_currency_code, parse_add_quantity, parse_remove_quantity, validate_product_id,
};
use minicart_core::{
    Cart, Catalog, CheckoutSummary, CoreError, CoreResult, DiscountRegistry, ExchangeRateTable,
    RemoveOutcome,
};

use crate::command::{is_yes, MenuCommand};
use crate::config::ConfigState;
use crate::error::{user_message, CliResult, ErrorCode};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Ready,
    Terminated,
}

/// An interactive shopping session over any line-based input and output.
pub struct Session<R, W> {
    config: ConfigState,
    catalog: Catalog,
    cart: Cart,
    registry: DiscountRegistry,
    rates: ExchangeRateTable,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// A session with the standard catalog, discounts and rates.
    pub fn new(config: ConfigState, input: R, output: W) -> Self {
        Session {
            config,
            catalog: Catalog::standard(),
            cart: Cart::new(),
            registry: DiscountRegistry::standard(),
            rates: ExchangeRateTable::standard(),
            input,
            output,
        }
    }

    /// Runs the menu loop until `exit` or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        info!(store = %self.config.store_name, "Session started");

        let mut state = SessionState::Ready;
        while state == SessionState::Ready {
            let menu = render::menu(&self.config);
            self.write(&menu)?;
            state = match self.prompt("Choose an option: ")? {
                Some(choice) => self.handle(&choice)?,
                None => self.exit()?,
            };
        }

        info!(items_left = self.cart.item_count(), "Session ended");
        Ok(())
    }

    /// Dispatches one menu choice.
    pub fn handle(&mut self, choice: &str) -> CliResult<SessionState> {
        let command = match choice.parse::<MenuCommand>() {
            Ok(command) => command,
            Err(err) => {
                warn!(input = %err.0, "Unrecognized menu option");
                self.write("Invalid option, please try again.\n")?;
                return Ok(SessionState::Ready);
            }
        };
        debug!(command = command.keyword(), "menu command");

        match command {
            MenuCommand::ViewCatalog => {
                let text = render::catalog(&self.config, &self.catalog);
                self.write(&text)?;
            }
            MenuCommand::AddToCart => return self.add_to_cart(),
            MenuCommand::RemoveFromCart => return self.remove_from_cart(),
            MenuCommand::ViewCart => {
                let text = render::cart(&self.config, &self.cart);
                self.write(&text)?;
            }
            MenuCommand::ListDiscounts => {
                let text = render::discount_list(&self.registry);
                self.write(&text)?;
            }
            MenuCommand::ApplyDiscounts => self.apply_discounts()?,
            MenuCommand::ClearCart => {
                self.cart.clear();
                self.write("The cart has been cleared.\n")?;
            }
            MenuCommand::Checkout => return self.checkout(),
            MenuCommand::Exit => return self.exit(),
        }

        Ok(SessionState::Ready)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn add_to_cart(&mut self) -> CliResult<SessionState> {
        let Some(raw_id) = self.prompt("Enter product ID to add to cart: ")? else {
            return self.exit();
        };
        let Some(raw_qty) = self.prompt("Enter quantity: ")? else {
            return self.exit();
        };

        match self.try_add(&raw_id, &raw_qty) {
            Ok((name, quantity)) => {
                debug!(product_id = %raw_id.trim(), quantity, "add_to_cart");
                self.write(&format!("Added {} of {} to the cart.\n", quantity, name))?;
            }
            Err(err) => self.report("add_to_cart", &err)?,
        }
        Ok(SessionState::Ready)
    }

    fn remove_from_cart(&mut self) -> CliResult<SessionState> {
        let Some(raw_id) = self.prompt("Enter product ID to remove from cart: ")? else {
            return self.exit();
        };
        let Some(raw_qty) = self.prompt("Enter quantity to remove (or 0 to remove entirely): ")?
        else {
            return self.exit();
        };

        match self.try_remove(&raw_id, &raw_qty) {
            Ok(RemoveOutcome::Removed { name }) => {
                debug!(product_id = %raw_id.trim(), "remove_from_cart: removed");
                self.write(&format!("Removed {} from the cart.\n", name))?;
            }
            Ok(RemoveOutcome::Reduced {
                name,
                removed,
                remaining,
            }) => {
                debug!(product_id = %raw_id.trim(), removed, remaining, "remove_from_cart: reduced");
                self.write(&format!("Reduced {} by {}.\n", name, removed))?;
            }
            Err(err) => self.report("remove_from_cart", &err)?,
        }
        Ok(SessionState::Ready)
    }

    fn try_add(&mut self, raw_id: &str, raw_qty: &str) -> CoreResult<(String, i64)> {
        let product_id = validate_product_id(raw_id)?;
        let quantity = parse_add_quantity(raw_qty)?;
        let item = self.cart.add_item(&self.catalog, &product_id, quantity)?;
        Ok((item.product.name.clone(), quantity))
    }

    fn try_remove(&mut self, raw_id: &str, raw_qty: &str) -> CoreResult<RemoveOutcome> {
        let product_id = validate_product_id(raw_id)?;
        let quantity = parse_remove_quantity(raw_qty)?;
        self.cart.remove_item(&product_id, quantity)
    }

    /// Shows what the discounts would take off; the cart is not changed.
    fn apply_discounts(&mut self) -> CliResult<()> {
        if self.cart.is_empty() {
            return self.write("Your cart is empty.\n");
        }

        let discounts = self.registry.breakdown(&self.cart);
        let text = render::discount_preview(&self.config, &discounts);
        self.write(&text)
    }

    fn checkout(&mut self) -> CliResult<SessionState> {
        self.write("Applying discounts...\n")?;
        debug!(cart_opened_at = %self.cart.created_at(), "checkout started");

        let summary = self.cart.checkout(&self.registry);
        log_receipt(&summary);

        let text = render::receipt(&self.config, &summary);
        self.write(&text)?;

        let mut state = SessionState::Ready;
        match self.prompt("Would you like to view it in a different currency? (yes/no): ")? {
            Some(answer) if is_yes(&answer) => {
                let currencies = render::currencies(&self.rates);
                self.write(&currencies)?;
                match self.prompt("Enter currency: ")? {
                    Some(code) => self.show_converted(&summary, &code)?,
                    None => state = SessionState::Terminated,
                }
            }
            Some(_) => {}
            None => state = SessionState::Terminated,
        }

        self.write("The cart has been cleared.\n")?;
        if state == SessionState::Terminated {
            return self.exit();
        }
        Ok(state)
    }

    fn show_converted(&mut self, summary: &CheckoutSummary, raw_code: &str) -> CliResult<()> {
        // Any answer that is not a known code is an unknown currency
        let converted = normalize_currency_code(raw_code)
            .map_err(|_| CoreError::UnknownCurrency(raw_code.trim().to_ascii_uppercase()))
            .and_then(|code| self.rates.convert(summary.total, &code));

        match converted {
            Ok(converted) => {
                debug!(currency = %converted.currency, rate = %converted.rate, "converted total");
                self.write(&format!(
                    "Final Total in {}: {}\n",
                    converted.currency,
                    converted.display()
                ))
            }
            Err(err) => self.report("checkout", &err),
        }
    }

    fn exit(&mut self) -> CliResult<SessionState> {
        self.write("Exiting the system.\n")?;
        Ok(SessionState::Terminated)
    }

    // =========================================================================
    // Terminal I/O
    // =========================================================================

    /// Prints a question and reads one line. `None` at end of input.
    fn prompt(&mut self, question: &str) -> CliResult<Option<String>> {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript tidy when input ends mid-prompt
            self.output.write_all(b"\n")?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn write(&mut self, text: &str) -> CliResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    fn report(&mut self, operation: &str, err: &CoreError) -> CliResult<()> {
        warn!(operation, code = ErrorCode::of(err).as_str(), error = %err, "Request rejected");
        let message = user_message(err);
        self.write(&format!("{}\n", message))
    }
}

fn log_receipt(summary: &CheckoutSummary) {
    info!(
        items = summary.item_count,
        subtotal = %summary.subtotal,
        discount = %summary.total_discount,
        total = %summary.total,
        "Checkout completed"
    );
    match summary.to_json() {
        Ok(json) => debug!(receipt = %json, "checkout receipt"),
        Err(err) => warn!(error = %err, "Could not serialize receipt"),
    }
}
