//! The 13-character S10 identifier.

use crate::checksum::CheckDigit;
use crate::error::S10Error;
use crate::serial::SerialNumber;
use crate::types::{CountryCode, ServiceIndicator};

/// Length of a rendered S10 identifier.
pub const S10_LEN: usize = 13;

/// A UPU S10 tracking identifier, e.g. `RA000000102US`.
///
/// Layout: indicator (2 letters) + serial (8 digits) + check (1 digit) +
/// country (2 letters), with no separators.
///
/// Identifiers built with [`S10Identifier::assemble`] always carry the
/// correct check digit. Identifiers read with [`S10Identifier::parse`] keep the
/// digit found in the input so that [`S10Identifier::verify`] can report a
/// mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct S10Identifier {
    indicator: ServiceIndicator,
    serial: SerialNumber,
    check: CheckDigit,
    country: CountryCode,
}

/// Outcome of recomputing an identifier's check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The stored check digit matches the serial.
    Valid,
    /// The stored check digit does not match the serial.
    Invalid {
        expected: CheckDigit,
        found: CheckDigit,
    },
}

impl Verdict {
    /// Returns true for [`Verdict::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

impl S10Identifier {
    /// Builds an identifier, computing the check digit from the serial.
    #[must_use]
    pub fn assemble(
        indicator: ServiceIndicator,
        serial: SerialNumber,
        country: CountryCode,
    ) -> Self {
        Self {
            indicator,
            serial,
            check: serial.check_digit(),
            country,
        }
    }

    /// Parses a 13-character identifier using strict field widths.
    ///
    /// Only the layout is checked here; a wrong check digit is accepted and
    /// shows up in [`S10Identifier::verify`].
    pub fn parse(s: &str) -> Result<Self, S10Error> {
        let len = s.chars().count();
        if len != S10_LEN {
            return Err(S10Error::format(
                s,
                format!("expected {S10_LEN} characters, got {len}"),
            ));
        }
        if !s.is_ascii() {
            return Err(S10Error::format(s, "contains non-ASCII characters"));
        }

        let indicator = ServiceIndicator::parse(&s[0..2])
            .map_err(|_| S10Error::format(s, "service indicator must be 2 uppercase letters"))?;

        let serial = SerialNumber::parse(&s[2..10])
            .map_err(|_| S10Error::format(s, "serial number must be 8 digits"))?;

        let check = CheckDigit::from_ascii(s.as_bytes()[10])
            .ok_or_else(|| S10Error::format(s, "check digit must be a digit"))?;

        let country = CountryCode::parse(&s[11..13])
            .map_err(|_| S10Error::format(s, "country code must be 2 uppercase letters"))?;

        Ok(Self {
            indicator,
            serial,
            check,
            country,
        })
    }

    /// Returns the service indicator.
    pub fn indicator(&self) -> ServiceIndicator {
        self.indicator
    }

    /// Returns the serial number.
    pub fn serial(&self) -> SerialNumber {
        self.serial
    }

    /// Returns the stored check digit.
    pub fn check_digit(&self) -> CheckDigit {
        self.check
    }

    /// Returns the country code.
    pub fn country(&self) -> CountryCode {
        self.country
    }

    /// Recomputes the check digit from the serial.
    pub fn expected_check_digit(&self) -> CheckDigit {
        self.serial.check_digit()
    }

    /// Compares the stored check digit against the recomputed one.
    pub fn verify(&self) -> Verdict {
        let expected = self.expected_check_digit();
        if expected == self.check {
            Verdict::Valid
        } else {
            Verdict::Invalid {
                expected,
                found: self.check,
            }
        }
    }

    /// Returns true if the stored check digit is correct.
    pub fn is_valid(&self) -> bool {
        self.verify().is_valid()
    }
}

impl std::fmt::Display for S10Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.indicator, self.serial, self.check, self.country
        )
    }
}

impl std::str::FromStr for S10Identifier {
    type Err = S10Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for S10Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for S10Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Checks a candidate identifier.
///
/// Returns `Ok(true)` if the check digit matches the serial, `Ok(false)` if it
/// does not, and [`S10Error::Format`] if the input is not laid out as an S10
/// identifier.
pub fn validate(candidate: &str) -> Result<bool, S10Error> {
    Ok(S10Identifier::parse(candidate)?.is_valid())
}
