use std::fmt;

/// Validation failures for a loaded baseline assumption set.
#[derive(Debug, Clone, PartialEq)]
pub enum AssumptionsError {
    /// A rate or dollar amount is negative or non-finite
    NegativeRate { field: &'static str, value: f64 },
    /// A fractional share falls outside [0, 1]
    ShareOutOfRange { field: &'static str, value: f64 },
}

impl fmt::Display for AssumptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssumptionsError::NegativeRate { field, value } => {
                write!(f, "{field} must be a non-negative amount (got {value})")
            }
            AssumptionsError::ShareOutOfRange { field, value } => {
                write!(f, "{field} must be a fraction between 0 and 1 (got {value})")
            }
        }
    }
}

impl std::error::Error for AssumptionsError {}
