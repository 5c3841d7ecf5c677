//! Arithmetic context: rounding mode and quantization scales.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Money;

/// Decimal places kept for reportable money amounts.
pub const DEFAULT_MONEY_SCALE: u32 = 2;

/// Decimal places kept for intermediate multipliers such as annuity factors.
pub const DEFAULT_FACTOR_SCALE: u32 = 7;

/// The largest scale a decimal can carry (28 significant digits).
pub const MAX_SCALE: u32 = 28;

/// How a value is rounded when it is quantized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Ties round away from zero (0.005 -> 0.01, -0.005 -> -0.01).
    #[default]
    HalfUp,
    /// Ties round to the nearest even digit.
    HalfEven,
    /// Truncate towards zero.
    Down,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::Down => RoundingStrategy::ToZero,
        }
    }
}

/// The arithmetic context every [`Money`] value is created under.
///
/// Precision is fixed at 28 significant digits by the underlying decimal
/// type; the context controls rounding and the scales used when
/// quantizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithmeticContext {
    /// Rounding mode applied on every quantization.
    pub rounding: RoundingMode,
    /// Decimal places kept for money amounts.
    pub money_scale: u32,
    /// Decimal places kept for intermediate factors.
    pub factor_scale: u32,
}

impl Default for ArithmeticContext {
    fn default() -> Self {
        Self {
            rounding: RoundingMode::HalfUp,
            money_scale: DEFAULT_MONEY_SCALE,
            factor_scale: DEFAULT_FACTOR_SCALE,
        }
    }
}

impl ArithmeticContext {
    /// Creates a context, rejecting scales beyond what a decimal can hold.
    pub fn new(rounding: RoundingMode, money_scale: u32, factor_scale: u32) -> EngineResult<Self> {
        for (field, scale) in [("money_scale", money_scale), ("factor_scale", factor_scale)] {
            if scale > MAX_SCALE {
                return Err(EngineError::validation(
                    field,
                    format!("must be at most {}, got {}", MAX_SCALE, scale),
                ));
            }
        }
        Ok(Self {
            rounding,
            money_scale,
            factor_scale,
        })
    }

    /// Wraps a value as [`Money`] under this context without rounding it.
    pub fn money(&self, value: impl Into<Decimal>) -> Money {
        Money::new(value.into(), *self)
    }

    /// Parses a decimal string (plain or scientific notation) into [`Money`].
    ///
    /// # Example
    ///
    /// ```
    /// use pension_engine::money::ArithmeticContext;
    ///
    /// let ctx = ArithmeticContext::default();
    /// assert_eq!(ctx.parse_money(" 1.5e3 ").unwrap().to_string(), "1500.00");
    /// assert!(ctx.parse_money("ten").is_err());
    /// ```
    pub fn parse_money(&self, raw: &str) -> EngineResult<Money> {
        parse_decimal(raw)
            .map(|value| self.money(value))
            .ok_or_else(|| EngineError::validation("value", format!("'{}' is not a decimal", raw)))
    }

    /// Rounds a value to the money scale.
    pub fn quantize_money(&self, value: Decimal) -> Decimal {
        self.round_to(value, self.money_scale)
    }

    /// Rounds an intermediate multiplier to the factor scale.
    pub fn quantize_factor(&self, value: Decimal) -> Decimal {
        self.round_to(value, self.factor_scale)
    }

    fn round_to(&self, value: Decimal, scale: u32) -> Decimal {
        let mut rounded = value.round_dp_with_strategy(scale, self.rounding.strategy());
        rounded.rescale(scale);
        rounded
    }
}

/// Parses a trimmed decimal string, accepting scientific notation.
pub(crate) fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_context_is_half_up_two_and_seven_places() {
        let ctx = ArithmeticContext::default();
        assert_eq!(ctx.rounding, RoundingMode::HalfUp);
        assert_eq!(ctx.money_scale, 2);
        assert_eq!(ctx.factor_scale, 7);
    }

    #[test]
    fn test_quantize_money_rounds_half_up() {
        let ctx = ArithmeticContext::default();
        assert_eq!(ctx.quantize_money(dec("2.345")), dec("2.35"));
        assert_eq!(ctx.quantize_money(dec("2.344")), dec("2.34"));
        assert_eq!(ctx.quantize_money(dec("-2.345")), dec("-2.35"));
    }

    #[test]
    fn test_quantize_money_pads_to_two_places() {
        let ctx = ArithmeticContext::default();
        assert_eq!(ctx.quantize_money(dec("14700")).to_string(), "14700.00");
        assert_eq!(ctx.quantize_money(dec("0.5")).to_string(), "0.50");
    }

    #[test]
    fn test_half_even_context_rounds_ties_to_even() {
        let ctx = ArithmeticContext::new(RoundingMode::HalfEven, 2, 7).unwrap();
        assert_eq!(ctx.quantize_money(dec("2.345")), dec("2.34"));
        assert_eq!(ctx.quantize_money(dec("2.355")), dec("2.36"));
    }

    #[test]
    fn test_down_context_truncates() {
        let ctx = ArithmeticContext::new(RoundingMode::Down, 2, 7).unwrap();
        assert_eq!(ctx.quantize_money(dec("2.349")), dec("2.34"));
        assert_eq!(ctx.quantize_money(dec("-2.349")), dec("-2.34"));
    }

    #[test]
    fn test_quantize_factor_keeps_seven_places() {
        let ctx = ArithmeticContext::default();
        assert_eq!(
            ctx.quantize_factor(dec("0.004438773741")).to_string(),
            "0.0044388"
        );
    }

    #[test]
    fn test_new_rejects_scale_beyond_precision() {
        let err = ArithmeticContext::new(RoundingMode::HalfUp, 29, 7).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("money_scale"));
    }

    #[test]
    fn test_parse_money_accepts_plain_and_scientific() {
        let ctx = ArithmeticContext::default();
        assert_eq!(ctx.parse_money("10000.00").unwrap().value(), dec("10000.00"));
        assert_eq!(ctx.parse_money("1e2").unwrap().value(), dec("100"));
    }

    #[test]
    fn test_parse_money_rejects_garbage() {
        let ctx = ArithmeticContext::default();
        assert!(ctx.parse_money("").is_err());
        assert!(ctx.parse_money("12,00").is_err());
        assert!(ctx.parse_money("abc").is_err());
    }

    #[test]
    fn test_rounding_mode_deserializes_snake_case() {
        let mode: RoundingMode = serde_yaml::from_str("half_even").unwrap();
        assert_eq!(mode, RoundingMode::HalfEven);
    }
}
