use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("{0}: invalid location!")]
pub struct UnknownLocation(pub String);

/// The towns where the fitness chain runs a gym.
/// The declaration order is the order used when sorting members by county.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Location {
    Edison,
    Piscataway,
    Bridgewater,
    Franklin,
    Somerville,
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::Edison,
        Location::Piscataway,
        Location::Bridgewater,
        Location::Franklin,
        Location::Somerville,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Location::Edison => "EDISON",
            Location::Piscataway => "PISCATAWAY",
            Location::Bridgewater => "BRIDGEWATER",
            Location::Franklin => "FRANKLIN",
            Location::Somerville => "SOMERVILLE",
        }
    }

    pub fn zip(&self) -> &'static str {
        match self {
            Location::Edison => "08837",
            Location::Piscataway => "08854",
            Location::Bridgewater => "08807",
            Location::Franklin => "08873",
            Location::Somerville => "08876",
        }
    }

    pub fn county(&self) -> &'static str {
        match self {
            Location::Edison | Location::Piscataway => "MIDDLESEX",
            Location::Bridgewater | Location::Franklin | Location::Somerville => "SOMERSET",
        }
    }
}

impl FromStr for Location {
    type Err = UnknownLocation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|location| location.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLocation(s.to_owned()))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.name(), self.zip(), self.county())
    }
}

#[cfg(test)]
mod tests {
    use crate::location::{Location, UnknownLocation};
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        name = {"edison", "PISCATAWAY", "BridgeWater", " franklin ", "somerville"},
        expected_result = {
            Location::Edison,
            Location::Piscataway,
            Location::Bridgewater,
            Location::Franklin,
            Location::Somerville
        }
    )]
    fn should_parse_location(name: &str, expected_result: Location) {
        assert_eq!(Ok(expected_result), name.parse());
    }

    #[test]
    fn should_not_parse_unknown_location() {
        assert_eq!(
            Err(UnknownLocation("Boston".to_owned())),
            "Boston".parse::<Location>()
        );
    }

    #[test]
    fn should_display_location() {
        assert_eq!("BRIDGEWATER, 08807, SOMERSET", Location::Bridgewater.to_string());
    }

    #[test]
    fn should_order_by_declaration() {
        let mut locations = vec![Location::Somerville, Location::Edison, Location::Franklin];
        locations.sort();
        assert_eq!(
            vec![Location::Edison, Location::Franklin, Location::Somerville],
            locations
        );
    }
}
