//! Error types for field and group arithmetic

/// Errors raised by field construction and group operations
///
/// None of these are recovered internally; an operation on invalid operands
/// has no meaningful retry, so every error propagates to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The supplied modulus failed the primality check
    InvalidModulus(u64),
    /// An operand is not a member of the structure performing the operation
    DomainError(String),
    /// The operation is undefined for the given member (inverse of the
    /// multiplicative zero)
    UndefinedOperation(String),
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::InvalidModulus(m) => write!(f, "{} is not a prime number", m),
            FieldError::DomainError(s) => write!(f, "Domain error: {}", s),
            FieldError::UndefinedOperation(s) => write!(f, "Undefined operation: {}", s),
        }
    }
}

impl std::error::Error for FieldError {}
