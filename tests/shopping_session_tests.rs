use std::io::Cursor;
use std::path::Path;

use rust_decimal::Decimal;
use tempfile::TempDir;

use shopping_cart_cli::cli::{CliApp, Terminal};
use shopping_cart_cli::models::product::Catalog;
use shopping_cart_cli::utils::Config;

type TestApp = CliApp<Cursor<Vec<u8>>, Vec<u8>>;

fn setup_app(script: &str) -> (TestApp, TempDir) {
    console::set_colors_enabled(false);
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Config {
        audit_log_path: dir.path().join("order_log.txt"),
        ..Config::default()
    };
    let terminal = Terminal::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let catalog = Catalog::standard().expect("Standard catalog must be valid");
    (CliApp::new(terminal, catalog, &config), dir)
}

fn output(app: TestApp) -> String {
    String::from_utf8(app.into_terminal().into_output()).expect("Output must be UTF-8")
}

fn audit_lines(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("order_log.txt"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_buy_two_shirts_with_cash() {
    let script = "1\nabc\n2\nn\n2\ny\n1\n3\n4\n";
    let (mut app, dir) = setup_app(script);

    app.run().expect("Session should end cleanly");

    assert!(app.cart().is_empty());
    assert_eq!(app.orders().len(), 1);
    let order = app.orders().latest().unwrap();
    assert_eq!(order.id(), 1);
    assert_eq!(order.payment_method(), "Cash");
    assert_eq!(order.total(), Decimal::new(99998, 2));
    assert_eq!(order.line_items().len(), 1);
    assert_eq!(order.line_items()[0].product.id(), "ABC");
    assert_eq!(order.line_items()[0].quantity, 2);

    assert_eq!(
        audit_lines(dir.path()),
        vec!["Order ID: 1 has been successfully checked out and paid using Cash"]
    );

    let out = output(app);
    assert!(out.contains("Welcome to Jane's Online Store!"));
    assert!(out.contains("AVAILABLE PRODUCTS"));
    assert!(out.contains("Product added successfully!"));
    assert!(out.contains("Total Amount: Php 999.98"));
    assert!(out.contains("Processing cash payment of Php 999.98 for Order ID: 1"));
    assert!(out.contains("You have successfully checked out the products!"));
    assert!(out.contains("CUSTOMER'S ORDERS"));
    assert!(out.contains("Payment Method: Cash"));
    assert!(out.contains("Exiting... Thank you for visiting!"));
}

#[test]
fn test_checkout_on_empty_cart() {
    let (mut app, dir) = setup_app("2\n4\n");

    app.run().unwrap();

    assert!(app.orders().is_empty());
    assert!(audit_lines(dir.path()).is_empty());
    let out = output(app);
    assert!(out.contains("Shopping cart is empty!"));
    assert!(out.contains("Your cart is empty! Please add products first."));
}

#[test]
fn test_view_orders_before_any_checkout() {
    let (mut app, _dir) = setup_app("3\n3\n4\n");

    app.run().unwrap();

    let out = output(app);
    assert_eq!(out.matches("No orders have been placed yet.").count(), 2);
}

#[test]
fn test_unknown_product_then_valid_one() {
    let script = "1\nxyz\ny\nief\ny\nijk\n3\nn\n4\n";
    let (mut app, _dir) = setup_app(script);

    app.run().unwrap();

    assert_eq!(app.cart().len(), 1);
    assert_eq!(app.cart().total(), Decimal::new(59997, 2));
    let out = output(app);
    assert_eq!(out.matches("Error: Product not found!").count(), 2);
}

#[test]
fn test_sixth_item_does_not_fit() {
    let mut script = String::from("1\n");
    for _ in 0..5 {
        script.push_str("IJK\n1\ny\n");
    }
    script.push_str("ABC\n5\nn\n4\n");
    let (mut app, _dir) = setup_app(&script);

    app.run().unwrap();

    assert_eq!(app.cart().len(), 5);
    assert_eq!(app.cart().total(), Decimal::new(99995, 2));
    let out = output(app);
    assert!(out.contains("Shopping cart is full!"));
    assert_eq!(out.matches("Product added successfully!").count(), 5);
}

#[test]
fn test_menu_rejects_bad_choices_and_keeps_running() {
    let (mut app, _dir) = setup_app("0\nfive\n\n9\n4\n");

    app.run().unwrap();

    let out = output(app);
    assert_eq!(out.matches("Error: Input out of range! Please try again.").count(), 2);
    assert!(out.contains("Error: Invalid input! Please enter a valid whole number."));
    assert!(out.contains("Error: Input cannot be empty! Please enter a valid whole number."));
    assert!(out.contains("Exiting... Thank you for visiting!"));
}

#[test]
fn test_unexpected_menu_value_is_reported() {
    let (mut app, _dir) = setup_app("");

    assert!(app.handle_menu_choice(9).unwrap());
    assert!(!app.handle_menu_choice(4).unwrap());

    let out = output(app);
    assert!(out.contains("Error: Invalid option! Please choose only from 1-4."));
}

#[test]
fn test_declined_checkout_keeps_cart() {
    let script = "1\nCDE\n1\nN\n2\nN\n4\n";
    let (mut app, dir) = setup_app(script);

    app.run().unwrap();

    assert_eq!(app.cart().len(), 1);
    assert!(app.orders().is_empty());
    assert!(audit_lines(dir.path()).is_empty());
}

#[test]
fn test_order_ids_follow_checkouts() {
    let script = "1\nABC\n1\nn\n2\ny\n2\n\
                  1\nEFG\n1\nn\n2\ny\n3\n\
                  4\n";
    let (mut app, dir) = setup_app(script);

    app.run().unwrap();

    let ids: Vec<u32> = app.orders().orders().iter().map(|o| o.id()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(
        audit_lines(dir.path()),
        vec![
            "Order ID: 1 has been successfully checked out and paid using Credit/Debit Card",
            "Order ID: 2 has been successfully checked out and paid using GCash",
        ]
    );
}

#[test]
fn test_closed_input_ends_session_with_error() {
    let (mut app, _dir) = setup_app("1\nABC\n");

    assert!(app.run().is_err());
}
