use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    cli::prompt::Terminal,
    models::{cart::ShoppingCart, order::{OrderLog, OrderSequence}},
    services::{
        audit_log::AuditLog,
        payment::{PaymentMethod, PaymentProcessor},
    },
    utils::formatting::{banner, rule},
};

pub const CONFIRM_PROMPT: &str = "Do you want to checkout all the products? [Y|N]: ";
pub const METHOD_PROMPT: &str = "Choose payment method [1|2|3]: ";

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),
}

/// What a finished checkout did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReceipt {
    pub order_id: u32,
    pub method_name: &'static str,
    pub total: Decimal,
    /// False when the order log was already full.
    pub stored: bool,
    /// False when the audit line could not be written.
    pub audited: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    EmptyCart,
    Declined,
    InvalidMethod(u32),
    Completed(CheckoutReceipt),
}

/// Turns the cart into a paid order. Owns the order id sequence and the
/// audit log; pays through the process-wide payment processor.
pub struct CheckoutService {
    processor: &'static PaymentProcessor,
    sequence: OrderSequence,
    audit_log: AuditLog,
}

impl CheckoutService {
    pub fn new(audit_log: AuditLog) -> Self {
        Self {
            processor: PaymentProcessor::instance(),
            sequence: OrderSequence::new(),
            audit_log,
        }
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.audit_log
    }

    pub fn last_order_id(&self) -> u32 {
        self.sequence.last_issued()
    }

    pub fn checkout<R: BufRead, W: Write>(
        &mut self,
        cart: &mut ShoppingCart,
        orders: &mut OrderLog,
        term: &mut Terminal<R, W>,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        if cart.is_empty() {
            term.say("Your cart is empty! Please add products first.")?;
            return Ok(CheckoutOutcome::EmptyCart);
        }

        let total = cart.total();
        info!("Checkout started: {} entries, total {}", cart.len(), total);

        if !term.read_yes_no(CONFIRM_PROMPT)?.is_yes() {
            info!("Checkout declined");
            term.say("Returning to menu...")?;
            return Ok(CheckoutOutcome::Declined);
        }

        term.say(cart.render())?;
        term.say("")?;
        term.say(banner("PAYMENT METHOD"))?;
        for method in PaymentMethod::ALL {
            term.say(format!("{} - {}", method.choice(), method))?;
        }
        term.say(rule())?;

        let choice = term.read_bounded_integer(METHOD_PROMPT, 1, 3)?;
        let payment = match PaymentMethod::from_choice(choice) {
            Some(method) => method.into_payment(),
            None => {
                warn!("Unknown payment method {}", choice);
                term.say("Invalid payment method!")?;
                return Ok(CheckoutOutcome::InvalidMethod(choice));
            }
        };

        let order_id = self.sequence.next_id();
        self.processor
            .pay(payment.as_ref(), total, order_id, term.output())?;

        let audited = match self.audit_log.record(order_id, payment.method_name()) {
            Ok(()) => true,
            Err(e) => {
                error!("Audit log unavailable for order {}: {:?}", order_id, e);
                term.error(e)?;
                false
            }
        };

        let stored = match orders.set_order(
            order_id,
            payment.method_name(),
            cart.entries().to_vec(),
            total,
        ) {
            Ok(()) => true,
            Err(e) => {
                term.error(e)?;
                false
            }
        };

        term.say("You have successfully checked out the products!")?;
        cart.clear();
        info!("Checkout completed for order {}", order_id);

        Ok(CheckoutOutcome::Completed(CheckoutReceipt {
            order_id,
            method_name: payment.method_name(),
            total,
            stored,
            audited,
        }))
    }
}
