use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    result,
};

pub type Result<T> = result::Result<T, ErrorType>;

#[derive(Debug)]
/// Enum with all recoverable view errors that could occur.
pub enum ErrorType {
    /// a position argument exceeded the view length (position, length)
    PositionOutOfRange(usize, usize),
}

impl Display for ErrorType {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::PositionOutOfRange(pos, len) => write!(
                fmt,
                "position {} is out of range for a view of length {}",
                pos, len
            ),
        }
    }
}

impl Error for ErrorType {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_position_and_length() {
        let err = ErrorType::PositionOutOfRange(12, 11);
        assert_eq!(
            err.to_string(),
            "position 12 is out of range for a view of length 11"
        );
    }
}
