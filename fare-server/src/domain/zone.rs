//! Fare zone types.

use std::fmt;

/// Error returned when parsing an invalid zone identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("must be \"1\", \"2\", or \"3\"")]
pub struct InvalidZone;

/// A valid fare zone in the three-zone network.
///
/// Zones are identified by the strings `"1"`, `"2"` and `"3"`. This type
/// guarantees that any `Zone` value is a member of that closed set, so the
/// fare table can be total over `Zone` and never fail at lookup time.
///
/// # Examples
///
/// ```
/// use fare_server::domain::Zone;
///
/// let z = Zone::parse("2").unwrap();
/// assert_eq!(z.as_str(), "2");
///
/// // Anything outside the network is rejected
/// assert!(Zone::parse("4").is_err());
/// assert!(Zone::parse("").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Zone(u8);

impl Zone {
    /// Zone 1 (city centre).
    pub const ONE: Zone = Zone(1);
    /// Zone 2 (inner ring).
    pub const TWO: Zone = Zone(2);
    /// Zone 3 (outer ring).
    pub const THREE: Zone = Zone(3);

    /// Every zone in the network, in order.
    ///
    /// The length of this slice is the authoritative zone count; the fare
    /// table is sized against it rather than a scattered magic number.
    pub const ALL: [Zone; 3] = [Zone::ONE, Zone::TWO, Zone::THREE];

    /// Parse a zone identifier from a string.
    ///
    /// The input must be exactly `"1"`, `"2"` or `"3"`.
    pub fn parse(s: &str) -> Result<Self, InvalidZone> {
        match s {
            "1" => Ok(Zone::ONE),
            "2" => Ok(Zone::TWO),
            "3" => Ok(Zone::THREE),
            _ => Err(InvalidZone),
        }
    }

    /// Returns the zone identifier as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self.0 {
            1 => "1",
            2 => "2",
            _ => "3",
        }
    }

    /// Returns the unordered pair (lower, higher) for bidirectional lookup.
    pub fn ordered_pair(a: Zone, b: Zone) -> (Zone, Zone) {
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl fmt::Debug for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone({})", self.as_str())
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_zones() {
        assert_eq!(Zone::parse("1").unwrap(), Zone::ONE);
        assert_eq!(Zone::parse("2").unwrap(), Zone::TWO);
        assert_eq!(Zone::parse("3").unwrap(), Zone::THREE);
    }

    #[test]
    fn reject_out_of_range() {
        assert!(Zone::parse("0").is_err());
        assert!(Zone::parse("4").is_err());
        assert!(Zone::parse("10").is_err());
    }

    #[test]
    fn reject_non_numeric() {
        assert!(Zone::parse("").is_err());
        assert!(Zone::parse("one").is_err());
        assert!(Zone::parse(" 1").is_err());
        assert!(Zone::parse("1 ").is_err());
        assert!(Zone::parse("-1").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        for z in Zone::ALL {
            assert_eq!(Zone::parse(z.as_str()).unwrap(), z);
        }
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Zone::TWO), "2");
        assert_eq!(format!("{:?}", Zone::THREE), "Zone(3)");
    }

    #[test]
    fn ordering_follows_zone_number() {
        assert!(Zone::ONE < Zone::TWO);
        assert!(Zone::TWO < Zone::THREE);
    }

    #[test]
    fn ordered_pair_normalises() {
        assert_eq!(
            Zone::ordered_pair(Zone::THREE, Zone::ONE),
            (Zone::ONE, Zone::THREE)
        );
        assert_eq!(
            Zone::ordered_pair(Zone::ONE, Zone::THREE),
            (Zone::ONE, Zone::THREE)
        );
        assert_eq!(
            Zone::ordered_pair(Zone::TWO, Zone::TWO),
            (Zone::TWO, Zone::TWO)
        );
    }

    #[test]
    fn error_display() {
        assert_eq!(InvalidZone.to_string(), "must be \"1\", \"2\", or \"3\"");
    }
}
