const MAX_IMPORTANCE: u8 = 10;

/// Read an importance rating out of a free-text model reply.
///
/// Every ASCII digit in the trimmed reply is concatenated and read as one
/// base-10 number, so "12 out of 10" reads as 1210. Only the upper side is
/// clamped. A reply with no digits is 0; a digit run too long for `u64` is
/// above the clamp anyway.
pub fn parse_importance(raw: &str) -> u8 {
    let digits: String = raw.trim().chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    match digits.parse::<u64>() {
        Ok(value) => value.min(u64::from(MAX_IMPORTANCE)) as u8,
        Err(_) => MAX_IMPORTANCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_number() {
        assert_eq!(parse_importance("8"), 8);
        assert_eq!(parse_importance("  7\n"), 7);
        assert_eq!(parse_importance("0"), 0);
    }

    #[test]
    fn concatenates_all_digits_then_clamps() {
        assert_eq!(parse_importance("The importance is 12 out of 10"), 10);
        assert_eq!(parse_importance("100"), 10);
        assert_eq!(parse_importance("Score: 9/10"), 10);
    }

    #[test]
    fn no_digits_is_zero() {
        assert_eq!(parse_importance("very important"), 0);
        assert_eq!(parse_importance(""), 0);
    }

    #[test]
    fn sign_is_ignored() {
        assert_eq!(parse_importance("-3"), 3);
    }

    #[test]
    fn overflowing_digit_run_clamps() {
        assert_eq!(parse_importance(&"9".repeat(40)), 10);
    }
}
