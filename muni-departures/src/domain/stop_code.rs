//! Stop code type.

use std::fmt;

/// Error returned when parsing an invalid stop code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop code: {reason}")]
pub struct InvalidStopCode {
    reason: &'static str,
}

/// A numeric 511 stop code, as printed on the stop sign.
///
/// # Examples
///
/// ```
/// use muni_departures::domain::StopCode;
///
/// let stop = StopCode::parse("15392").unwrap();
/// assert_eq!(stop.get(), 15392);
///
/// assert!(StopCode::parse("").is_err());
/// assert!(StopCode::parse("15a92").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopCode(u32);

impl StopCode {
    /// Parse a stop code from a string of ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStopCode> {
        if s.is_empty() {
            return Err(InvalidStopCode {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStopCode {
                reason: "must contain only digits 0-9",
            });
        }

        s.parse().map(StopCode).map_err(|_| InvalidStopCode {
            reason: "out of range",
        })
    }

    /// Returns the numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for StopCode {
    fn from(code: u32) -> Self {
        StopCode(code)
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.0)
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!(StopCode::parse("15392").unwrap().get(), 15392);
        assert_eq!(StopCode::parse("0").unwrap().get(), 0);
    }

    #[test]
    fn leading_zeros_accepted() {
        assert_eq!(StopCode::parse("013").unwrap().get(), 13);
    }

    #[test]
    fn parse_invalid() {
        assert!(StopCode::parse("").is_err());
        assert!(StopCode::parse("-1").is_err());
        assert!(StopCode::parse(" 15392").is_err());
        assert!(StopCode::parse("99999999999").is_err());
    }

    #[test]
    fn error_display() {
        let err = StopCode::parse("abc").unwrap_err();
        assert_eq!(err.to_string(), "invalid stop code: must contain only digits 0-9");
    }

    #[test]
    fn display_and_debug() {
        let stop = StopCode::from(15392);
        assert_eq!(format!("{}", stop), "15392");
        assert_eq!(format!("{:?}", stop), "StopCode(15392)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display then parse returns the same code
        #[test]
        fn roundtrip(n in any::<u32>()) {
            let stop = StopCode::from(n);
            prop_assert_eq!(StopCode::parse(&stop.to_string()).unwrap(), stop);
        }

        /// Anything containing a non-digit is rejected
        #[test]
        fn non_digits_rejected(s in "[0-9]{0,3}[a-zA-Z ._-][0-9]{0,3}") {
            prop_assert!(StopCode::parse(&s).is_err());
        }
    }
}
