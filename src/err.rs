use std::fmt;

use crate::units::UnitKind;

#[derive(Debug, Clone, PartialEq)]
pub enum NetError {
    /// Unit kind code outside of the five known kinds
    InvalidUnitKind(i32),
    UnsupportedOp {
        kind: UnitKind,
        op: &'static str,
    },
    EmptyDataset,
    InvalidConfig(String),
    InvalidSize {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    /// (rows, cols) mismatch of a weight matrix
    InvalidShape {
        name: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },
    InvalidFormat(String),
    WrongArg(String),
}

pub type NetResult<T> = Result<T, NetError>;

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NetError::InvalidUnitKind(code) => {
                write!(f, "Incorrect value for unit kind : {}", code)
            }
            NetError::UnsupportedOp { kind, op } => {
                write!(f, "Operation {} isn't supported by {} unit", op, kind)
            }
            NetError::EmptyDataset => {
                write!(f, "{}", "Empty dataset")
            }
            NetError::InvalidConfig(msg) => {
                write!(f, "Invalid config : {}", msg)
            }
            NetError::InvalidSize {
                name,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid size of {} : expected {}, given {}",
                    name, expected, actual
                )
            }
            NetError::InvalidShape {
                name,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid shape of {} : expected {}x{}, given {}x{}",
                    name, expected.0, expected.1, actual.0, actual.1
                )
            }
            NetError::InvalidFormat(msg) => {
                write!(f, "Invalid format : {}", msg)
            }
            NetError::WrongArg(msg) => {
                write!(f, "Wrong arguments : {}", msg)
            }
        }
    }
}

impl std::error::Error for NetError {}
