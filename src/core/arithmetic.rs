//! Integer arithmetic on `i32`.
//!
//! [`add`], [`subtract`] and [`multiply`] use the native operators, so an
//! out-of-range result panics when `overflow-checks` is enabled (the default
//! for debug and test builds) and wraps in two's complement otherwise.
//! [`Calculator`] makes the overflow behavior explicit and reports it as
//! [`CalcError::Overflow`].

use crate::domain::model::{Evaluation, Operation, OverflowPolicy};
use crate::utils::error::{CalcError, Result};

/// Returns `a + b`.
///
/// Overflow follows the build's native semantics: panic with
/// `overflow-checks`, wrap without.
pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

/// Returns `a - b`. Same overflow behavior as [`add`].
pub fn subtract(a: i32, b: i32) -> i32 {
    a - b
}

/// Returns `a * b`. Same overflow behavior as [`add`].
pub fn multiply(a: i32, b: i32) -> i32 {
    a * b
}

impl Operation {
    pub fn apply(&self, a: i32, b: i32) -> i32 {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),
        }
    }

    pub fn checked(&self, a: i32, b: i32) -> Option<i32> {
        match self {
            Operation::Add => a.checked_add(b),
            Operation::Subtract => a.checked_sub(b),
            Operation::Multiply => a.checked_mul(b),
        }
    }

    pub fn wrapping(&self, a: i32, b: i32) -> i32 {
        match self {
            Operation::Add => a.wrapping_add(b),
            Operation::Subtract => a.wrapping_sub(b),
            Operation::Multiply => a.wrapping_mul(b),
        }
    }

    pub fn saturating(&self, a: i32, b: i32) -> i32 {
        match self {
            Operation::Add => a.saturating_add(b),
            Operation::Subtract => a.saturating_sub(b),
            Operation::Multiply => a.saturating_mul(b),
        }
    }
}

/// Stateless evaluator bound to an [`OverflowPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    policy: OverflowPolicy,
}

impl Calculator {
    pub fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn evaluate(&self, operation: Operation, lhs: i32, rhs: i32) -> Result<Evaluation> {
        let result = match self.policy {
            OverflowPolicy::Checked => {
                operation
                    .checked(lhs, rhs)
                    .ok_or(CalcError::Overflow {
                        operation,
                        lhs,
                        rhs,
                    })?
            }
            OverflowPolicy::Wrapping => operation.wrapping(lhs, rhs),
            OverflowPolicy::Saturating => operation.saturating(lhs, rhs),
        };

        tracing::debug!(
            op = operation.name(),
            lhs,
            rhs,
            result,
            policy = %self.policy,
            "evaluated"
        );

        Ok(Evaluation {
            operation,
            lhs,
            rhs,
            result,
        })
    }

    pub fn add(&self, a: i32, b: i32) -> Result<i32> {
        self.evaluate(Operation::Add, a, b).map(|e| e.result)
    }

    pub fn subtract(&self, a: i32, b: i32) -> Result<i32> {
        self.evaluate(Operation::Subtract, a, b).map(|e| e.result)
    }

    pub fn multiply(&self, a: i32, b: i32) -> Result<i32> {
        self.evaluate(Operation::Multiply, a, b).map(|e| e.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3), 5);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(5, 2), 3);
        assert_eq!(subtract(2, 3), -1);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(2, 3), 6);
        assert_eq!(multiply(5, 0), 0);
        assert_eq!(multiply(2, -5), -10);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn test_native_add_overflow_panics_with_checks() {
        add(i32::MAX, 1);
    }

    #[test]
    fn test_operation_apply_matches_free_functions() {
        assert_eq!(Operation::Add.apply(7, -9), add(7, -9));
        assert_eq!(Operation::Subtract.apply(7, -9), subtract(7, -9));
        assert_eq!(Operation::Multiply.apply(7, -9), multiply(7, -9));
    }

    #[test]
    fn test_checked_policy_reports_overflow() {
        let calculator = Calculator::new(OverflowPolicy::Checked);
        let err = calculator.add(i32::MAX, 1).unwrap_err();
        assert!(matches!(
            err,
            CalcError::Overflow {
                operation: Operation::Add,
                lhs: i32::MAX,
                rhs: 1
            }
        ));

        assert!(calculator.subtract(i32::MIN, 1).is_err());
        assert!(calculator.multiply(i32::MAX, 2).is_err());
        assert_eq!(calculator.multiply(-1, i32::MAX).unwrap(), -i32::MAX);
    }

    #[test]
    fn test_wrapping_policy() {
        let calculator = Calculator::new(OverflowPolicy::Wrapping);
        assert_eq!(calculator.add(i32::MAX, 1).unwrap(), i32::MIN);
        assert_eq!(calculator.subtract(i32::MIN, 1).unwrap(), i32::MAX);
        assert_eq!(calculator.multiply(i32::MAX, 2).unwrap(), -2);
    }

    #[test]
    fn test_saturating_policy() {
        let calculator = Calculator::new(OverflowPolicy::Saturating);
        assert_eq!(calculator.add(i32::MAX, 1).unwrap(), i32::MAX);
        assert_eq!(calculator.subtract(i32::MIN, 1).unwrap(), i32::MIN);
        assert_eq!(calculator.multiply(i32::MIN, 2).unwrap(), i32::MIN);
    }

    #[test]
    fn test_policies_agree_in_range() {
        for policy in [
            OverflowPolicy::Checked,
            OverflowPolicy::Wrapping,
            OverflowPolicy::Saturating,
        ] {
            let calculator = Calculator::new(policy);
            for operation in Operation::ALL {
                let evaluation = calculator.evaluate(operation, 12, -4).unwrap();
                assert_eq!(evaluation.result, operation.apply(12, -4), "{policy} {operation}");
            }
        }
    }

    #[test]
    fn test_default_calculator_is_checked() {
        assert_eq!(Calculator::default().policy(), OverflowPolicy::Checked);
    }
}
