//! Station code type.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A validated station code, as exported by the inventory system.
///
/// Codes are short lowercase identifiers such as `ply` (Paris Gare de
/// Lyon) or `msc` (Marseille Saint-Charles): 2 to 8 ASCII characters,
/// lowercase letters or digits, starting with a letter. Any
/// `StationCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use bookings_report::domain::StationCode;
///
/// let ply = StationCode::parse("ply").unwrap();
/// assert_eq!(ply.as_str(), "ply");
///
/// // Uppercase is rejected
/// assert!(StationCode::parse("PLY").is_err());
///
/// // Codes must start with a letter
/// assert!(StationCode::parse("7py").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be 2 to 8 ASCII characters, each a lowercase
    /// letter or digit, and the first character must be a letter.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let bytes = s.as_bytes();

        if bytes.len() < 2 || bytes.len() > 8 {
            return Err(InvalidStationCode {
                reason: "must be 2 to 8 characters",
            });
        }

        if !bytes[0].is_ascii_lowercase() {
            return Err(InvalidStationCode {
                reason: "must start with a lowercase letter",
            });
        }

        for &b in bytes {
            if !b.is_ascii_lowercase() && !b.is_ascii_digit() {
                return Err(InvalidStationCode {
                    reason: "must be lowercase letters or digits",
                });
            }
        }

        Ok(StationCode(s.to_owned()))
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("ply").is_ok());
        assert!(StationCode::parse("lpd").is_ok());
        assert!(StationCode::parse("msc").is_ok());
        assert!(StationCode::parse("ab").is_ok());
        assert!(StationCode::parse("gare2bis").is_ok());
    }

    #[test]
    fn reject_uppercase() {
        assert!(StationCode::parse("PLY").is_err());
        assert!(StationCode::parse("Ply").is_err());
        assert!(StationCode::parse("pLy").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("p").is_err());
        assert!(StationCode::parse("waytoolongcode").is_err());
    }

    #[test]
    fn reject_leading_digit() {
        assert!(StationCode::parse("7py").is_err());
        assert!(StationCode::parse("12").is_err());
    }

    #[test]
    fn reject_punctuation_and_spaces() {
        assert!(StationCode::parse("p-y").is_err());
        assert!(StationCode::parse("p y").is_err());
        assert!(StationCode::parse("plý").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let code = StationCode::parse("ply").unwrap();
        assert_eq!(code.as_str(), "ply");
    }

    #[test]
    fn display() {
        let code = StationCode::parse("lpd").unwrap();
        assert_eq!(format!("{}", code), "lpd");
    }

    #[test]
    fn debug() {
        let code = StationCode::parse("msc").unwrap();
        assert_eq!(format!("{:?}", code), "StationCode(msc)");
    }

    #[test]
    fn equality_and_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationCode::parse("ply").unwrap());
        assert!(set.contains(&StationCode::parse("ply").unwrap()));
        assert!(!set.contains(&StationCode::parse("lpd").unwrap()));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for valid codes: a lowercase letter then 1-7 letters/digits.
    fn valid_code_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[a-z][a-z0-9]{1,7}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original.
        #[test]
        fn roundtrip(s in valid_code_string()) {
            let code = StationCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Any valid code can be parsed.
        #[test]
        fn valid_always_parses(s in valid_code_string()) {
            prop_assert!(StationCode::parse(&s).is_ok());
        }

        /// Codes with an uppercase letter are always rejected.
        #[test]
        fn uppercase_rejected(s in "[a-z][a-z0-9]{0,6}[A-Z][a-z0-9]{0,3}"
            .prop_filter("length bound", |s| s.len() <= 8))
        {
            prop_assert!(StationCode::parse(&s).is_err());
        }

        /// Too-short and too-long strings are always rejected.
        #[test]
        fn wrong_length_rejected(s in "[a-z]{0,1}|[a-z]{9,16}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }

        /// Codes starting with a digit are always rejected.
        #[test]
        fn leading_digit_rejected(s in "[0-9][a-z0-9]{1,7}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }
    }
}
