//! The S10 check digit.
//!
//! The check digit is a weighted sum of the eight serial digits taken modulo 11:
//!
//! ```text
//! S = 8·d0 + 6·d1 + 4·d2 + 2·d3 + 3·d4 + 5·d5 + 9·d6 + 7·d7
//! R = 11 − (S mod 11)
//! ```
//!
//! `R` is the check digit, except that 10 becomes 0 and 11 becomes 5.

use crate::error::S10Error;

/// Weight applied to each serial digit, most significant first.
pub const WEIGHTS: [u32; SERIAL_LEN] = [8, 6, 4, 2, 3, 5, 9, 7];

/// Number of digits in a serial number body.
pub const SERIAL_LEN: usize = 8;

/// A single decimal check digit (`0..=9`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckDigit(u8);

impl CheckDigit {
    /// Creates a check digit from a value in `0..=9`.
    pub fn new(value: u8) -> Result<Self, S10Error> {
        if value > 9 {
            return Err(S10Error::invalid_input(
                &value.to_string(),
                "check digit must be between 0 and 9",
            ));
        }
        Ok(Self(value))
    }

    /// Creates a check digit from an ASCII decimal digit.
    pub fn from_ascii(byte: u8) -> Option<Self> {
        byte.is_ascii_digit().then(|| Self(byte - b'0'))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the digit as an ASCII character.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl std::fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CheckDigit> for u8 {
    fn from(digit: CheckDigit) -> Self {
        digit.0
    }
}

/// Computes the check digit for an 8-digit serial body such as `"00000010"`.
///
/// Fails with [`S10Error::InvalidInput`] unless the input is exactly eight
/// ASCII decimal digits.
pub fn check_digit(serial: &str) -> Result<CheckDigit, S10Error> {
    let digits = parse_digits(serial)?;
    Ok(check_digit_for(&digits))
}

/// Computes the check digit for eight already-validated digits.
#[must_use]
pub fn check_digit_for(digits: &[u8; SERIAL_LEN]) -> CheckDigit {
    debug_assert!(digits.iter().all(|d| *d <= 9));

    let sum: u32 = digits
        .iter()
        .zip(WEIGHTS)
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();

    let remainder = 11 - (sum % 11);
    let digit = match remainder {
        10 => 0,
        11 => 5,
        r => r as u8,
    };
    CheckDigit(digit)
}

/// Splits an 8-character decimal string into its digit values.
pub(crate) fn parse_digits(serial: &str) -> Result<[u8; SERIAL_LEN], S10Error> {
    let len = serial.chars().count();
    if len != SERIAL_LEN {
        return Err(S10Error::invalid_input(
            serial,
            format!("expected {SERIAL_LEN} digits, got {len} characters"),
        ));
    }

    let mut digits = [0u8; SERIAL_LEN];
    for (slot, c) in digits.iter_mut().zip(serial.chars()) {
        if !c.is_ascii_digit() {
            return Err(S10Error::invalid_input(
                serial,
                format!("'{c}' is not a decimal digit"),
            ));
        }
        *slot = c as u8 - b'0';
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // 9·1 = 9; 11 − 9 = 2
        assert_eq!(check_digit("00000010").unwrap().value(), 2);
    }

    #[test]
    fn test_published_example() {
        // RR 47312482 9 GB
        assert_eq!(check_digit("47312482").unwrap().value(), 9);
    }

    #[test]
    fn test_remainder_ten_maps_to_zero() {
        // 6·2 = 12, 12 mod 11 = 1, R = 10
        assert_eq!(check_digit("02000000").unwrap().value(), 0);
    }

    #[test]
    fn test_remainder_eleven_maps_to_five() {
        // S = 0, R = 11
        assert_eq!(check_digit("00000000").unwrap().value(), 5);
        // 2·2 + 9·2 = 22, R = 11
        assert_eq!(check_digit("00020020").unwrap().value(), 5);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = check_digit("1234567").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(check_digit("123456789").is_err());
        assert!(check_digit("").is_err());
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(check_digit("1234567a").unwrap_err().is_invalid_input());
        assert!(check_digit("1234 567").is_err());
        assert!(check_digit("1234567١").is_err());
        assert!(check_digit("-1234567").is_err());
    }

    #[test]
    fn test_check_digit_new_bounds() {
        assert_eq!(CheckDigit::new(9).unwrap().as_char(), '9');
        assert!(CheckDigit::new(10).is_err());
        assert_eq!(CheckDigit::from_ascii(b'7').map(CheckDigit::value), Some(7));
        assert!(CheckDigit::from_ascii(b'x').is_none());
    }
}
