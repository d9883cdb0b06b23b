//! Arithmetic evaluator.
//!
//! Pure functions behind the `add` and `calculate` tools. Division by zero is
//! an ordinary outcome, not an error: it is reported back to the caller as
//! text.

use serde::Deserialize;
use std::fmt;

/// Text returned when dividing by zero.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Error: Cannot divide by zero";

/// The four calculator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Wire names, in declaration order.
    pub const NAMES: [&'static str; 4] = ["add", "subtract", "multiply", "divide"];

    /// Wire name of this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A numeric result.
    Value(f64),

    /// The divisor was zero.
    DivideByZero,
}

impl Outcome {
    /// Text shown to the caller.
    ///
    /// Numbers use the default `f64` formatting, with no rounding applied.
    pub fn to_text(&self) -> String {
        match self {
            Self::Value(v) => v.to_string(),
            Self::DivideByZero => DIVIDE_BY_ZERO_MESSAGE.to_string(),
        }
    }
}

/// Add two numbers.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Apply `operation` to `a` and `b`.
pub fn calculate(operation: Operation, a: f64, b: f64) -> Outcome {
    match operation {
        Operation::Add => Outcome::Value(add(a, b)),
        Operation::Subtract => Outcome::Value(a - b),
        Operation::Multiply => Outcome::Value(a * b),
        Operation::Divide if b == 0.0 => Outcome::DivideByZero,
        Operation::Divide => Outcome::Value(a / b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_calculate_basic_operations() {
        assert_eq!(calculate(Operation::Add, 2.0, 3.0), Outcome::Value(5.0));
        assert_eq!(calculate(Operation::Subtract, 2.0, 3.0), Outcome::Value(-1.0));
        assert_eq!(calculate(Operation::Multiply, 2.0, 3.0), Outcome::Value(6.0));
        assert_eq!(calculate(Operation::Divide, 3.0, 2.0), Outcome::Value(1.5));
    }

    #[test]
    fn test_divide_by_zero_is_an_outcome() {
        let outcome = calculate(Operation::Divide, 7.0, 0.0);
        assert_eq!(outcome, Outcome::DivideByZero);
        assert_eq!(outcome.to_text(), "Error: Cannot divide by zero");
    }

    #[test]
    fn test_divide_by_negative_zero() {
        assert_eq!(calculate(Operation::Divide, 1.0, -0.0), Outcome::DivideByZero);
    }

    #[test]
    fn test_value_text_formatting() {
        assert_eq!(Outcome::Value(3.0).to_text(), "3");
        assert_eq!(Outcome::Value(2.5).to_text(), "2.5");
        assert_eq!(Outcome::Value(0.1 + 0.2).to_text(), "0.30000000000000004");
    }

    #[test]
    fn test_operation_names_round_trip() {
        for name in Operation::NAMES {
            let op: Operation = serde_json::from_value(serde_json::json!(name)).unwrap();
            assert_eq!(op.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_operation_rejected() {
        let result: Result<Operation, _> = serde_json::from_value(serde_json::json!("modulo"));
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn prop_add_matches_float_addition(a in -1.0e12f64..1.0e12, b in -1.0e12f64..1.0e12) {
            prop_assert_eq!(add(a, b), a + b);
            prop_assert_eq!(calculate(Operation::Add, a, b), Outcome::Value(a + b));
        }

        #[test]
        fn prop_add_with_zero(a in -1.0e12f64..1.0e12) {
            prop_assert_eq!(add(a, 0.0), a);
        }

        #[test]
        fn prop_divide_text_is_quotient(a in -1.0e9f64..1.0e9, b in -1.0e9f64..1.0e9) {
            prop_assume!(b != 0.0);
            prop_assert_eq!(calculate(Operation::Divide, a, b).to_text(), (a / b).to_string());
        }

        #[test]
        fn prop_divide_by_zero_message(a in proptest::num::f64::ANY) {
            prop_assert_eq!(
                calculate(Operation::Divide, a, 0.0).to_text(),
                DIVIDE_BY_ZERO_MESSAGE
            );
        }
    }
}
