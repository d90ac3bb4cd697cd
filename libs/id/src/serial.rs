//! Serial numbers: the 8-digit body of an S10 identifier.

use crate::checksum::{self, CheckDigit, SERIAL_LEN};
use crate::error::S10Error;
use crate::source::DigitSource;

/// An S10 serial number in `0..=99_999_999`, rendered as 8 zero-padded digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SerialNumber(u32);

impl SerialNumber {
    /// Largest serial that fits in 8 digits.
    pub const MAX: u32 = 99_999_999;

    /// Creates a serial number, failing if it does not fit in 8 digits.
    pub fn new(value: u64) -> Result<Self, S10Error> {
        match u32::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self(v)),
            _ => Err(S10Error::OutOfRange {
                value: u128::from(value),
                max: Self::MAX,
            }),
        }
    }

    /// Returns the serial at `start + index`, for batch generation.
    ///
    /// The sum is taken in `u128`, so an out-of-range error always reports
    /// the exact value that did not fit.
    pub fn sequential(start: u64, index: u64) -> Result<Self, S10Error> {
        let value = u128::from(start) + u128::from(index);
        match u32::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self(v)),
            _ => Err(S10Error::OutOfRange {
                value,
                max: Self::MAX,
            }),
        }
    }

    /// Returns every serial in `first..=last`.
    pub fn range_inclusive(first: Self, last: Self) -> impl Iterator<Item = Self> {
        (first.0..=last.0).map(Self)
    }

    /// Draws eight independent random digits.
    ///
    /// Each value from the source is reduced modulo 10; see
    /// [`DigitSource::next_digit`].
    pub fn random<S: DigitSource + ?Sized>(source: &mut S) -> Self {
        let value = (0..SERIAL_LEN).fold(0u32, |acc, _| {
            acc * 10 + u32::from(source.next_digit() % 10)
        });
        Self(value)
    }

    /// Parses exactly eight ASCII digits.
    pub fn parse(s: &str) -> Result<Self, S10Error> {
        let digits = checksum::parse_digits(s)?;
        Ok(Self::from_digits(&digits))
    }

    fn from_digits(digits: &[u8; SERIAL_LEN]) -> Self {
        Self(
            digits
                .iter()
                .fold(0u32, |acc, digit| acc * 10 + u32::from(*digit)),
        )
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the eight digits, most significant first.
    #[must_use]
    pub fn digits(self) -> [u8; SERIAL_LEN] {
        let mut digits = [0u8; SERIAL_LEN];
        let mut rest = self.0;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }
        digits
    }

    /// Computes the check digit for this serial.
    #[must_use]
    pub fn check_digit(self) -> CheckDigit {
        checksum::check_digit_for(&self.digits())
    }

    /// Renders the 9-character serial plus check digit, e.g. `"000000102"`.
    #[must_use]
    pub fn with_check_digit(self) -> String {
        format!("{}{}", self, self.check_digit())
    }
}

impl std::fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08}", self.0)
    }
}

impl std::str::FromStr for SerialNumber {
    type Err = S10Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<SerialNumber> for u32 {
    fn from(serial: SerialNumber) -> Self {
        serial.0
    }
}
