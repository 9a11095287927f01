use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("stack underflow")]
    stack_underflow,

    #[error("division by zero")]
    division_by_zero,

    #[error("{0}")]
    domain(String),

    #[error("'{0}' is neither a number nor an operation")]
    invalid_input(String),

    #[error("expression left {0} values on the stack")]
    malformed_expression(usize),
}

pub type Result<T> = std::result::Result<T, CalcError>;
