//! Menu choice parsing shared by location menus and shops.

use thiserror::Error;

/// Why a typed menu choice was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("no choice entered")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{choice} is not between 1 and {max}")]
    OutOfRange { choice: u64, max: usize },
}

/// Parses a 1-based menu choice and checks it against `max` options.
///
/// Surrounding whitespace is ignored. Anything else that is not a plain
/// positive integer is rejected.
pub fn parse_choice(input: &str, max: usize) -> Result<usize, ChoiceError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ChoiceError::Empty);
    }

    let choice: u64 = trimmed
        .parse()
        .map_err(|_| ChoiceError::NotANumber(trimmed.to_string()))?;

    if choice == 0 || choice > max as u64 {
        return Err(ChoiceError::OutOfRange { choice, max });
    }
    Ok(choice as usize)
}

/// True when `input` names one of `max` options.
pub fn is_valid_choice(input: &str, max: usize) -> bool {
    parse_choice(input, max).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_valid() {
        assert_eq!(parse_choice("1", 8), Ok(1));
        assert_eq!(parse_choice("8", 8), Ok(8));
        assert_eq!(parse_choice("  3 ", 5), Ok(3));
    }

    #[test]
    fn test_parse_choice_empty() {
        assert_eq!(parse_choice("", 8), Err(ChoiceError::Empty));
        assert_eq!(parse_choice("   ", 8), Err(ChoiceError::Empty));
    }

    #[test]
    fn test_parse_choice_not_a_number() {
        assert_eq!(
            parse_choice("north", 8),
            Err(ChoiceError::NotANumber("north".to_string()))
        );
        assert!(parse_choice("-1", 8).is_err());
        assert!(parse_choice("2.5", 8).is_err());
    }

    #[test]
    fn test_parse_choice_out_of_range() {
        assert_eq!(
            parse_choice("0", 5),
            Err(ChoiceError::OutOfRange { choice: 0, max: 5 })
        );
        assert_eq!(
            parse_choice("6", 5),
            Err(ChoiceError::OutOfRange { choice: 6, max: 5 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ChoiceError::Empty.to_string(), "no choice entered");
        assert_eq!(
            ChoiceError::OutOfRange { choice: 9, max: 8 }.to_string(),
            "9 is not between 1 and 8"
        );
    }

    #[test]
    fn test_is_valid_choice() {
        assert!(is_valid_choice("4", 6));
        assert!(!is_valid_choice("7", 6));
        assert!(!is_valid_choice("", 6));
    }
}
