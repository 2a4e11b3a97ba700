use console::style;
use rust_decimal::{Decimal, RoundingStrategy};
use tabled::{Table, Tabled, settings::{Style, Alignment}};

use crate::models::{cart::CartEntry, order::Order, product::Product};

pub const EMPTY_CART_MESSAGE: &str = "Shopping cart is empty!";
pub const NO_ORDERS_MESSAGE: &str = "No orders have been placed yet.";

const RULE_WIDTH: usize = 57;

#[derive(Tabled)]
struct ProductTableRow {
    #[tabled(rename = "Product ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct LineItemTableRow {
    #[tabled(rename = "Product ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Quantity")]
    quantity: u32,
}

/// `Php` amount with two decimal places.
pub fn format_money(amount: Decimal) -> String {
    format!(
        "Php {:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Title centered between two rules.
pub fn banner(title: &str) -> String {
    format!(
        "{}\n{}\n{}",
        rule(),
        style(format!("{:^width$}", title, width = RULE_WIDTH)).bold().cyan(),
        rule()
    )
}

pub fn format_product_table<P: AsRef<Product>>(products: &[P]) -> String {
    let rows: Vec<ProductTableRow> = products
        .iter()
        .map(|p| {
            let product = p.as_ref();
            ProductTableRow {
                id: product.id().to_string(),
                name: product.name().to_string(),
                price: format_money(product.price()),
            }
        })
        .collect();

    render_table(Table::new(rows))
}

pub fn format_line_items(entries: &[CartEntry]) -> String {
    let rows: Vec<LineItemTableRow> = entries
        .iter()
        .map(|entry| LineItemTableRow {
            id: entry.product.id().to_string(),
            name: entry.product.name().to_string(),
            price: format_money(entry.product.price()),
            quantity: entry.quantity,
        })
        .collect();

    render_table(Table::new(rows))
}

pub fn format_catalog<P: AsRef<Product>>(products: &[P]) -> String {
    format!("{}\n{}\n{}", banner("AVAILABLE PRODUCTS"), format_product_table(products), rule())
}

pub fn format_cart(entries: &[CartEntry], total: Decimal) -> String {
    format!(
        "{}\n{}\n{}\n{}: {}",
        banner("SHOPPING CART"),
        format_line_items(entries),
        rule(),
        style("Total Amount").bold(),
        format_money(total)
    )
}

pub fn format_order(order: &Order) -> String {
    let mut output = String::new();

    output.push_str(&banner("CUSTOMER'S ORDERS"));
    output.push('\n');
    output.push_str(&format!("{}: {}\n", style("Order ID").bold(), order.id()));
    output.push_str(&format!("{}: {}\n", style("Payment Method").bold(), order.payment_method()));
    output.push_str(&format!("{}: {}\n", style("Total Amount").bold(), format_money(order.total())));
    output.push_str(&format!("{}:\n", style("Order Details").bold()));
    output.push_str(&format_line_items(order.line_items()));
    output.push('\n');
    output.push_str(&rule());

    output
}

fn render_table(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}
