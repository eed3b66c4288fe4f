//! # Menu Commands
//!
//! The words the user can type at "Choose an option:".

use std::str::FromStr;

use thiserror::Error;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ViewCatalog,
    AddToCart,
    RemoveFromCart,
    ViewCart,
    ListDiscounts,
    ApplyDiscounts,
    ClearCart,
    Checkout,
    Exit,
}

/// Input that matches no menu keyword.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl MenuCommand {
    /// Menu entries in display order.
    pub const ALL: [MenuCommand; 9] = [
        MenuCommand::ViewCatalog,
        MenuCommand::AddToCart,
        MenuCommand::RemoveFromCart,
        MenuCommand::ViewCart,
        MenuCommand::ListDiscounts,
        MenuCommand::ApplyDiscounts,
        MenuCommand::ClearCart,
        MenuCommand::Checkout,
        MenuCommand::Exit,
    ];

    /// What the user types.
    pub const fn keyword(&self) -> &'static str {
        match self {
            MenuCommand::ViewCatalog => "initial_Product_Catalog",
            MenuCommand::AddToCart => "addtocart",
            MenuCommand::RemoveFromCart => "removefromcart",
            MenuCommand::ViewCart => "viewcart",
            MenuCommand::ListDiscounts => "listdiscounts",
            MenuCommand::ApplyDiscounts => "applydiscounts",
            MenuCommand::ClearCart => "clearcart",
            MenuCommand::Checkout => "checkout",
            MenuCommand::Exit => "exit",
        }
    }

    /// Text shown next to the keyword in the menu.
    pub const fn label(&self) -> &'static str {
        match self {
            MenuCommand::ViewCatalog => "View product catalog",
            MenuCommand::AddToCart => "Add product to cart",
            MenuCommand::RemoveFromCart => "Remove product from cart",
            MenuCommand::ViewCart => "View cart",
            MenuCommand::ListDiscounts => "View All Discounts Available",
            MenuCommand::ApplyDiscounts => "Apply discount",
            MenuCommand::ClearCart => "Clear cart",
            MenuCommand::Checkout => "Checkout",
            MenuCommand::Exit => "Exit",
        }
    }
}

impl FromStr for MenuCommand {
    type Err = UnknownCommand;

    /// Case-insensitive; `initial` is accepted for the catalog entry.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("initial") {
            return Ok(MenuCommand::ViewCatalog);
        }

        MenuCommand::ALL
            .iter()
            .copied()
            .find(|command| command.keyword().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCommand(trimmed.to_string()))
    }
}

/// `yes` or `y`, any case.
pub fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}
