use rust_decimal::Decimal;
use std::fmt;
use std::io::{self, Write};
use tracing::{debug, info};

use crate::utils::formatting::format_money;

/// A way of paying for an order. No variant moves real money; processing
/// only prints a confirmation.
pub trait Payment: Send + Sync {
    /// Name stored with the order and written to the audit log.
    fn method_name(&self) -> &'static str;

    /// Word used in the confirmation line, e.g. "cash" in
    /// "Processing cash payment of ...".
    fn channel(&self) -> &'static str;

    fn process_payment(&self, amount: Decimal, order_id: u32, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "Processing {} payment of {} for Order ID: {}",
            self.channel(),
            format_money(amount),
            order_id
        )
    }
}

pub struct Cash;

impl Payment for Cash {
    fn method_name(&self) -> &'static str {
        "Cash"
    }

    fn channel(&self) -> &'static str {
        "cash"
    }
}

pub struct Card;

impl Payment for Card {
    fn method_name(&self) -> &'static str {
        "Credit/Debit Card"
    }

    fn channel(&self) -> &'static str {
        "card"
    }
}

pub struct GCash;

impl Payment for GCash {
    fn method_name(&self) -> &'static str {
        "GCash"
    }

    fn channel(&self) -> &'static str {
        "GCash"
    }
}

/// Menu choices offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Card,
    GCash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::GCash];

    /// Maps a 1-based menu number to a method.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(PaymentMethod::Cash),
            2 => Some(PaymentMethod::Card),
            3 => Some(PaymentMethod::GCash),
            _ => None,
        }
    }

    pub fn choice(self) -> u32 {
        match self {
            PaymentMethod::Cash => 1,
            PaymentMethod::Card => 2,
            PaymentMethod::GCash => 3,
        }
    }

    pub fn into_payment(self) -> Box<dyn Payment> {
        match self {
            PaymentMethod::Cash => Box::new(Cash),
            PaymentMethod::Card => Box::new(Card),
            PaymentMethod::GCash => Box::new(GCash),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Card => write!(f, "Credit / Debit Card"),
            PaymentMethod::GCash => write!(f, "GCash"),
        }
    }
}

lazy_static::lazy_static! {
    static ref PAYMENT_PROCESSOR: PaymentProcessor = {
        debug!("Payment processor initialized");
        PaymentProcessor { _private: () }
    };
}

/// The one payment gateway of the process. Created on first use and kept
/// until exit; every checkout pays through it.
#[derive(Debug)]
pub struct PaymentProcessor {
    _private: (),
}

impl PaymentProcessor {
    pub fn instance() -> &'static PaymentProcessor {
        &PAYMENT_PROCESSOR
    }

    pub fn pay(
        &self,
        payment: &dyn Payment,
        amount: Decimal,
        order_id: u32,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        info!(
            "Paying order {} ({}) via {}",
            order_id,
            amount,
            payment.method_name()
        );
        payment.process_payment(amount, order_id, out)
    }
}
