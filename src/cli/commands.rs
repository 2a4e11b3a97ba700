use anyhow::{Context, Result};
use console::{style, Emoji};
use std::io::{BufRead, StdinLock, Stdout, Write};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    cli::prompt::Terminal,
    models::{
        cart::{ShoppingCart, MAX_QUANTITY, MIN_QUANTITY},
        order::OrderLog,
        product::Catalog,
    },
    services::{audit_log::AuditLog, checkout_service::CheckoutService},
    utils::{
        config::Config,
        formatting::{format_catalog, rule},
        validation::has_product_id_length,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");

pub const PRODUCT_ID_PROMPT: &str = "Enter the ID of the product you want to add to the cart: ";
pub const QUANTITY_PROMPT: &str = "Enter quantity [1-5]: ";
pub const ADD_ANOTHER_PROMPT: &str = "Do you want to add another product? [Y|N]: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    BrowseProducts,
    ViewCart,
    ViewOrders,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("Invalid option! Please choose only from 1-4.")]
    InvalidOption(u32),
}

impl TryFrom<u32> for MenuOption {
    type Error = MenuError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuOption::BrowseProducts),
            2 => Ok(MenuOption::ViewCart),
            3 => Ok(MenuOption::ViewOrders),
            4 => Ok(MenuOption::Exit),
            other => Err(MenuError::InvalidOption(other)),
        }
    }
}

/// One shopping session: the catalog, the cart, the orders placed so far
/// and the console they are driven from.
pub struct CliApp<R, W> {
    terminal: Terminal<R, W>,
    catalog: Catalog,
    cart: ShoppingCart,
    orders: OrderLog,
    checkout: CheckoutService,
    store_name: String,
}

impl CliApp<StdinLock<'static>, Stdout> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = Catalog::standard().context("Failed to build the product catalog")?;
        Ok(Self::new(Terminal::stdio(), catalog, config))
    }
}

impl<R: BufRead, W: Write> CliApp<R, W> {
    pub fn new(terminal: Terminal<R, W>, catalog: Catalog, config: &Config) -> Self {
        Self {
            terminal,
            catalog,
            cart: ShoppingCart::new(),
            orders: OrderLog::new(),
            checkout: CheckoutService::new(AuditLog::new(&config.audit_log_path)),
            store_name: config.store_name.clone(),
        }
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    pub fn orders(&self) -> &OrderLog {
        &self.orders
    }

    pub fn into_terminal(self) -> Terminal<R, W> {
        self.terminal
    }

    /// Runs the main menu until the user picks "Exit".
    pub fn run(&mut self) -> Result<()> {
        info!("Shopping session started");
        loop {
            let choice = self
                .terminal
                .read_bounded_integer(&self.menu_prompt(), 1, 4)
                .context("Failed to read menu choice")?;

            if !self.handle_menu_choice(choice)? {
                break;
            }
        }
        info!("Shopping session ended with {} orders", self.orders.len());
        Ok(())
    }

    /// Returns false once the session should end.
    pub fn handle_menu_choice(&mut self, choice: u32) -> Result<bool> {
        debug!("Menu choice {}", choice);
        match MenuOption::try_from(choice) {
            Ok(MenuOption::BrowseProducts) => self.choose_product()?,
            Ok(MenuOption::ViewCart) => self.view_cart()?,
            Ok(MenuOption::ViewOrders) => self.view_orders()?,
            Ok(MenuOption::Exit) => {
                self.terminal.say("Exiting... Thank you for visiting!")?;
                return Ok(false);
            }
            Err(e) => {
                warn!("Unexpected menu choice: {:?}", e);
                self.terminal.error(e)?;
            }
        }
        Ok(true)
    }

    fn menu_prompt(&self) -> String {
        format!(
            "{}\n{:^width$}\n{}\nMenu\n\
             1 - View Products\n\
             2 - View Shopping Cart\n\
             3 - View Orders\n\
             4 - Exit\n\
             {}\n\
             Choose Menu [1|2|3|4]: ",
            rule(),
            style(format!("Welcome to {}!", self.store_name)).bold().green(),
            rule(),
            "-".repeat(57),
            width = 57
        )
    }

    /// Lets the user pick products by id until they answer "N".
    pub fn choose_product(&mut self) -> Result<()> {
        loop {
            self.terminal.say(format_catalog(self.catalog.products()))?;

            let id = self
                .terminal
                .read_product_id(PRODUCT_ID_PROMPT, has_product_id_length)?;

            match self.catalog.find(&id) {
                Some(product) => {
                    let quantity = self.terminal.read_bounded_integer(
                        QUANTITY_PROMPT,
                        MIN_QUANTITY,
                        MAX_QUANTITY,
                    )?;
                    match self.cart.add_to_cart(product, quantity) {
                        Ok(()) => {
                            self.terminal
                                .say(format!("{}Product added successfully!\n", CHECKMARK))?;
                        }
                        Err(e) => {
                            self.terminal.say(format!("{}{}", WARNING, e))?;
                        }
                    }
                }
                None => {
                    warn!("Product {} not found", id);
                    self.terminal.error("Product not found!")?;
                }
            }

            if !self.terminal.read_yes_no(ADD_ANOTHER_PROMPT)?.is_yes() {
                break;
            }
        }

        self.terminal.say("Returning to menu...\n")?;
        Ok(())
    }

    /// Shows the cart, then offers to check it out.
    pub fn view_cart(&mut self) -> Result<()> {
        self.terminal.say(self.cart.render())?;
        let outcome = self
            .checkout
            .checkout(&mut self.cart, &mut self.orders, &mut self.terminal)?;
        debug!("Checkout outcome: {:?}", outcome);
        Ok(())
    }

    pub fn view_orders(&mut self) -> Result<()> {
        self.terminal.say(self.orders.render())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_option_mapping() {
        assert_eq!(MenuOption::try_from(1), Ok(MenuOption::BrowseProducts));
        assert_eq!(MenuOption::try_from(2), Ok(MenuOption::ViewCart));
        assert_eq!(MenuOption::try_from(3), Ok(MenuOption::ViewOrders));
        assert_eq!(MenuOption::try_from(4), Ok(MenuOption::Exit));
        assert_eq!(MenuOption::try_from(0), Err(MenuError::InvalidOption(0)));
        assert_eq!(MenuOption::try_from(7), Err(MenuError::InvalidOption(7)));
    }

    #[test]
    fn test_invalid_option_message() {
        assert_eq!(
            MenuError::InvalidOption(9).to_string(),
            "Invalid option! Please choose only from 1-4."
        );
    }
}
