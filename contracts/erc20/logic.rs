use crate::model::{Balance, Error, Result};

// -------- register arithmetic --------

/// Add `amount` to a balance, allowance or supply register.
pub fn credit(current: Balance, amount: Balance) -> Result<Balance> {
    current.checked_add(amount).ok_or(Error::Overflow)
}

/// Take `amount` out of a register, failing with `short` when it holds less.
pub fn debit(current: Balance, amount: Balance, short: Error) -> Result<Balance> {
    current.checked_sub(amount).ok_or(short)
}

// -------- mint gate --------

/// Payment needed to mint `amount` units, `None` if it is not representable.
pub fn required_payment(price: Balance, amount: Balance) -> Option<Balance> {
    price.checked_mul(amount)
}

/// Accepts any payment at or above `price * amount`; excess is kept.
pub fn check_payment(price: Balance, amount: Balance, paid: Balance) -> Result<()> {
    match required_payment(price, amount) {
        Some(required) if paid >= required => Ok(()),
        _ => Err(Error::InsufficientPayment),
    }
}
