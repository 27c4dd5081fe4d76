//! A natural ordering over [`Value`]s of the ordered scalar kinds.

use std::cmp::Ordering;

use super::{IncomparableError, Kind, Value};

/// The groups of kinds that can be ordered against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderClass {
    Bool,
    Number,
    Str,
}

impl OrderClass {
    /// Returns the class a kind belongs to, or [`None`] if it has no natural ordering.
    pub fn of(kind: &Kind) -> Option<OrderClass> {
        match kind {
            Kind::Bool => Some(OrderClass::Bool),
            Kind::Int | Kind::Uint | Kind::Float => Some(OrderClass::Number),
            Kind::Str => Some(OrderClass::Str),
            _ => None,
        }
    }
}

/// Returns true if `a` sorts before `b`.
///
/// `false` sorts before `true` and strings compare lexically. Signed integers, unsigned integers
/// and floats all compare numerically with each other; mixed integer comparisons are exact, and a
/// NaN is never less than anything.
///
/// # Examples
/// ```
/// # use slice_kit::dynamic::{compare, Value};
/// assert_eq!(compare::less(&Value::Int(-1), &Value::Uint(0)), Ok(true));
/// assert_eq!(compare::less(&Value::Float(2.5), &Value::Int(2)), Ok(false));
/// assert!(compare::less(&Value::Int(1), &Value::from("1")).is_err());
/// ```
pub fn less(a: &Value, b: &Value) -> Result<bool, IncomparableError> {
    let ordering = match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Uint(b)) => Some((*a as i128).cmp(&(*b as i128))),
        (Value::Uint(a), Value::Int(b)) => Some((*a as i128).cmp(&(*b as i128))),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
        (Value::Float(a), Value::Uint(b)) => a.partial_cmp(&(*b as f64)),
        (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
        (Value::Uint(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
        _ => {
            return Err(IncomparableError {
                left: a.kind(),
                right: b.kind(),
            });
        },
    };

    Ok(ordering == Some(Ordering::Less))
}
