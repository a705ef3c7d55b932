//! Integer parsing for prompt answers.
//!
//! Well-formed integers too large for `i64` are still integers: the prompts
//! need their sign and last digit to pick the right message.

/// A line of input read as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParsedInt<'a> {
    /// Fits in an `i64`.
    Fits(i64),
    /// Well-formed but out of `i64` range. `digits` has no sign.
    TooLarge {
        /// Whether a `-` sign was given.
        negative: bool,
        /// The decimal digits.
        digits: &'a str,
    },
    /// Not an integer literal.
    Invalid,
}

/// Whether a digit string ends in an even digit.
pub(crate) fn ends_even(digits: &str) -> bool {
    digits.bytes().next_back().is_some_and(|b| (b - b'0') % 2 == 0)
}

/// Parse a trimmed decimal integer with an optional `+` or `-` sign.
pub(crate) fn parse_int(input: &str) -> ParsedInt<'_> {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return ParsedInt::Fits(n);
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        ParsedInt::TooLarge { negative, digits }
    } else {
        ParsedInt::Invalid
    }
}
