//! Declared remote operations
//!
//! The endpoint identifies operations by name and leaves argument/result
//! shapes to convention. Each known operation is pinned down here with its
//! wire name, argument type, and declared result type so callers get a typed
//! surface instead of raw JSON values.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A named remote operation with declared argument and result shapes.
pub trait Operation {
    /// Wire name of the operation.
    const NAME: &'static str;
    /// Argument shape the endpoint expects for this operation.
    type Args: Serialize;
    /// Result shape the endpoint declares for this operation.
    type Output: DeserializeOwned;
}

/// Argument shape shared by the binary numeric operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryArgs {
    pub a: f64,
    pub b: f64,
}

/// Adds two numbers.
#[derive(Debug, Clone, Copy)]
pub struct Addition;

impl Operation for Addition {
    const NAME: &'static str = "addition";
    type Args = BinaryArgs;
    type Output = f64;
}

/// Converts a string to uppercase.
#[derive(Debug, Clone, Copy)]
pub struct Uppercase;

impl Operation for Uppercase {
    const NAME: &'static str = "uppercase";
    type Args = String;
    type Output = String;
}

/// Divides two numbers; the endpoint reports an error when `b` is zero.
#[derive(Debug, Clone, Copy)]
pub struct Division;

impl Operation for Division {
    const NAME: &'static str = "division";
    type Args = BinaryArgs;
    type Output = f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names() {
        assert_eq!(Addition::NAME, "addition");
        assert_eq!(Uppercase::NAME, "uppercase");
        assert_eq!(Division::NAME, "division");
    }

    #[test]
    fn test_binary_args_wire_shape() {
        let args = BinaryArgs { a: 10.0, b: 0.0 };
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(json, r#"{"a":10.0,"b":0.0}"#);
    }
}
