//! Constant Contact API version definitions.
//!
//! This module provides the [`ApiVersion`] type for the version segment that
//! prefixes every API path (`/v2/contacts`), along with helpers for splitting
//! that segment off a URL.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Constant Contact API version.
///
/// Versions are path segments of the form `v<digits>`. The segment is never
/// part of a request path; it is carried separately and spliced in by the
/// HTTP client when the final URL is built.
///
/// # Example
///
/// ```rust
/// use constant_contact::ApiVersion;
///
/// let version: ApiVersion = "v3".parse().unwrap();
/// assert_eq!(version.number(), 3);
/// assert_eq!(version.to_string(), "v3");
/// assert_eq!(ApiVersion::default().to_string(), "v2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiVersion(u32);

impl ApiVersion {
    /// Version 2 of the API, the default.
    pub const V2: Self = Self(2);

    /// Version 3 of the API.
    pub const V3: Self = Self(3);

    /// Creates a version from its number.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the numeric part of the version.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.0
    }

    /// Splits a leading `/v<digits>/` segment off a path.
    ///
    /// Returns the version and the remainder of the path (without its leading
    /// slash), or `None` if the path does not start with a version segment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use constant_contact::ApiVersion;
    ///
    /// let (version, rest) = ApiVersion::split_path("/v3/contacts?cursor=abc").unwrap();
    /// assert_eq!(version, ApiVersion::V3);
    /// assert_eq!(rest, "contacts?cursor=abc");
    ///
    /// assert!(ApiVersion::split_path("/contacts").is_none());
    /// ```
    #[must_use]
    pub fn split_path(path: &str) -> Option<(Self, &str)> {
        let rest = path.strip_prefix('/')?;
        let (segment, remainder) = rest.split_once('/')?;
        let version = segment.parse().ok()?;
        Some((version, remainder))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::V2
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidApiVersion {
            version: s.to_string(),
        };

        let digits = s.strip_prefix('v').ok_or_else(invalid)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        digits.parse().map(Self).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_versions() {
        assert_eq!("v2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
        assert_eq!("v3".parse::<ApiVersion>().unwrap(), ApiVersion::V3);
        assert_eq!("v10".parse::<ApiVersion>().unwrap().number(), 10);
    }

    #[test]
    fn test_parse_rejects_invalid_versions() {
        for input in ["", "v", "2", "V2", "v2a", "v-2", "2024-10"] {
            assert!(
                matches!(
                    input.parse::<ApiVersion>(),
                    Err(ConfigError::InvalidApiVersion { .. })
                ),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let version = ApiVersion::new(7);
        assert_eq!(version.to_string().parse::<ApiVersion>().unwrap(), version);
    }

    #[test]
    fn test_split_path_requires_leading_version_segment() {
        assert_eq!(
            ApiVersion::split_path("/v2/contacts/1"),
            Some((ApiVersion::V2, "contacts/1"))
        );
        assert!(ApiVersion::split_path("v2/contacts").is_none());
        assert!(ApiVersion::split_path("/contacts/v2/x").is_none());
        assert!(ApiVersion::split_path("/v2").is_none());
        assert!(ApiVersion::split_path("/vx/contacts").is_none());
    }

    #[test]
    fn test_versions_order_numerically() {
        assert!(ApiVersion::V2 < ApiVersion::V3);
        assert!(ApiVersion::new(10) > ApiVersion::V3);
    }
}
