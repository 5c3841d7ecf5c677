//! The [`Money`] value type.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::ArithmeticContext;

/// An immutable decimal amount bound to an [`ArithmeticContext`].
///
/// Construction keeps the full precision of the supplied value. Every
/// arithmetic operation quantizes its result to the money scale before
/// returning, so a chain of operations is rounded step by step rather than
/// once at the end.
///
/// Equality and ordering compare the carried value only.
#[derive(Debug, Clone, Copy)]
pub struct Money {
    value: Decimal,
    context: ArithmeticContext,
}

impl Money {
    /// Wraps a value under the given context without rounding it.
    pub fn new(value: Decimal, context: ArithmeticContext) -> Self {
        Self { value, context }
    }

    /// Returns the carried value at full precision.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the context this amount was created under.
    pub fn context(&self) -> ArithmeticContext {
        self.context
    }

    /// Returns the value rounded to the money scale.
    ///
    /// Quantizing is idempotent.
    ///
    /// # Example
    ///
    /// ```
    /// use pension_engine::money::ArithmeticContext;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let ctx = ArithmeticContext::default();
    /// let amount = ctx.money(Decimal::from_str("12.345").unwrap());
    /// assert_eq!(amount.quantize(), Decimal::from_str("12.35").unwrap());
    /// assert_eq!(amount.quantized().quantize(), amount.quantize());
    /// ```
    pub fn quantize(&self) -> Decimal {
        self.context.quantize_money(self.value)
    }

    /// Returns a new amount holding the quantized value.
    pub fn quantized(&self) -> Money {
        self.rounded(self.value)
    }

    /// Returns true if the amount is below zero.
    pub fn is_negative(&self) -> bool {
        self.value.is_sign_negative() && !self.value.is_zero()
    }

    /// Adds two amounts, quantizing the sum.
    pub fn checked_add(self, rhs: Money) -> EngineResult<Money> {
        self.value
            .checked_add(rhs.value)
            .map(|v| self.rounded(v))
            .ok_or_else(|| overflow("addition", self.value, rhs.value))
    }

    /// Subtracts `rhs`, quantizing the difference.
    pub fn checked_sub(self, rhs: Money) -> EngineResult<Money> {
        self.value
            .checked_sub(rhs.value)
            .map(|v| self.rounded(v))
            .ok_or_else(|| overflow("subtraction", self.value, rhs.value))
    }

    /// Multiplies two amounts, quantizing the product.
    pub fn checked_mul(self, rhs: Money) -> EngineResult<Money> {
        self.checked_scale(rhs.value)
    }

    /// Divides by `rhs`, quantizing the quotient.
    ///
    /// Division by an exact zero is an arithmetic error.
    pub fn checked_div(self, rhs: Money) -> EngineResult<Money> {
        if rhs.value.is_zero() {
            return Err(EngineError::arithmetic(format!(
                "division by zero ({} / {})",
                self.value, rhs.value
            )));
        }
        self.value
            .checked_div(rhs.value)
            .map(|v| self.rounded(v))
            .ok_or_else(|| overflow("division", self.value, rhs.value))
    }

    /// Multiplies by a bare factor such as a rate, quantizing the product.
    pub fn checked_scale(self, factor: Decimal) -> EngineResult<Money> {
        self.value
            .checked_mul(factor)
            .map(|v| self.rounded(v))
            .ok_or_else(|| overflow("multiplication", self.value, factor))
    }

    fn rounded(&self, value: Decimal) -> Money {
        Money::new(self.context.quantize_money(value), self.context)
    }
}

fn overflow(operation: &str, lhs: Decimal, rhs: Decimal) -> EngineError {
    EngineError::arithmetic(format!(
        "{} of {} and {} is out of range",
        operation, lhs, rhs
    ))
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.quantize())
    }
}
