//! Macros for defining two-letter field codes.

/// Macro to define a two-letter uppercase code type.
///
/// This generates a newtype wrapper around `[u8; 2]` with:
/// - `parse()` accepting exactly two ASCII uppercase letters
/// - a `const fn from_bytes()` for compile-time constants
/// - `as_str()`, `Display`, and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations (as the two-letter string)
///
/// # Example
///
/// ```ignore
/// define_code!(ServiceIndicator, "service indicator");
///
/// let si: ServiceIndicator = "RA".parse()?;
/// ```
#[macro_export]
macro_rules! define_code {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; 2]);

        impl $name {
            /// Human-readable name of this field, used in error messages.
            pub const LABEL: &'static str = $label;

            /// Creates a code from two ASCII uppercase letters.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; 2]) -> Option<Self> {
                if bytes[0].is_ascii_uppercase() && bytes[1].is_ascii_uppercase() {
                    Some(Self(bytes))
                } else {
                    None
                }
            }

            /// Parses a code from a string.
            ///
            /// The string must be exactly two ASCII uppercase letters.
            pub fn parse(s: &str) -> Result<Self, $crate::S10Error> {
                let bytes: [u8; 2] = s.as_bytes().try_into().map_err(|_| {
                    $crate::S10Error::InvalidInput {
                        input: s.to_string(),
                        reason: format!("{} must be exactly 2 letters", Self::LABEL),
                    }
                })?;

                Self::from_bytes(bytes).ok_or_else(|| $crate::S10Error::InvalidInput {
                    input: s.to_string(),
                    reason: format!("{} must be uppercase letters A-Z", Self::LABEL),
                })
            }

            /// Returns the code as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                std::str::from_utf8(&self.0).unwrap_or_default()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::S10Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}
