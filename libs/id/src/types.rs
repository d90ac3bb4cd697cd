//! Two-letter field codes of an S10 identifier.

use crate::define_code;

define_code!(
    /// Service indicator: the leading two letters classifying the mail service.
    ServiceIndicator,
    "service indicator"
);

define_code!(
    /// Country code of the issuing postal administration (ISO 3166-1 alpha-2 style).
    CountryCode,
    "country code"
);

impl ServiceIndicator {
    /// Registered mail.
    pub const REGISTERED: Self = Self(*b"RA");

    /// Express mail.
    pub const EXPRESS: Self = Self(*b"EA");
}

impl CountryCode {
    /// United States.
    pub const US: Self = Self(*b"US");
}

impl Default for CountryCode {
    fn default() -> Self {
        Self::US
    }
}

/// Indicators drawn from when none is fixed.
pub const DEFAULT_INDICATORS: [ServiceIndicator; 2] =
    [ServiceIndicator::REGISTERED, ServiceIndicator::EXPRESS];
