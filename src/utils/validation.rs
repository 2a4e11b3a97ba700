use thiserror::Error;

use crate::models::product::PRODUCT_ID_LEN;

/// Why a line of user input was rejected. The display text is what the
/// user sees before being asked again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Input cannot be empty! Please enter a valid whole number.")]
    EmptyNumber,

    #[error("Invalid input! Please enter a valid whole number.")]
    NotANumber,

    #[error("Input out of range! Please try again.")]
    OutOfRange { min: u32, max: u32 },

    #[error("Input cannot be empty! Please try again.")]
    EmptyAnswer,

    #[error("Invalid input! Please enter Y or N.")]
    InvalidAnswer,

    #[error("Input cannot be empty! Please enter a valid product ID.")]
    EmptyProductId,

    #[error("Invalid input! Please enter a valid product ID.")]
    InvalidProductId,

    #[error("Product ID should be 3 characters! Please enter a valid product ID.")]
    ProductIdLength { len: usize },
}

/// A Y/N answer after case normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

/// Accepts only a non-empty run of ASCII digits whose value lies in
/// `min..=max`. Signs, whitespace and overflowing values are rejected.
pub fn validate_bounded_integer(input: &str, min: u32, max: u32) -> Result<u32, InputError> {
    if input.is_empty() {
        return Err(InputError::EmptyNumber);
    }

    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }

    let value: u32 = input
        .parse()
        .map_err(|_| InputError::OutOfRange { min, max })?;

    if value < min || value > max {
        return Err(InputError::OutOfRange { min, max });
    }

    Ok(value)
}

pub fn validate_yes_no(input: &str) -> Result<YesNo, InputError> {
    match input.to_uppercase().as_str() {
        "" => Err(InputError::EmptyAnswer),
        "Y" => Ok(YesNo::Yes),
        "N" => Ok(YesNo::No),
        _ => Err(InputError::InvalidAnswer),
    }
}

/// Upper-cases `input` and checks it against `is_valid` and the id length,
/// in that order.
pub fn validate_product_id<F>(input: &str, is_valid: F) -> Result<String, InputError>
where
    F: Fn(&str) -> bool,
{
    let id = input.to_uppercase();

    if id.is_empty() {
        return Err(InputError::EmptyProductId);
    }

    if !is_valid(&id) {
        return Err(InputError::InvalidProductId);
    }

    let len = id.chars().count();
    if len != PRODUCT_ID_LEN {
        return Err(InputError::ProductIdLength { len });
    }

    Ok(id)
}

/// The predicate used when browsing the catalog.
pub fn has_product_id_length(id: &str) -> bool {
    id.chars().count() == PRODUCT_ID_LEN
}
