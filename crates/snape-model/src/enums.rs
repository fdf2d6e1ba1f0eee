//! Type-safe enumerations for routing profiles and road kinds.
//!
//! The routing engine speaks in plain strings; these enums pin down the values
//! the client is allowed to send and expects to receive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::domain::EnumDomain;
use crate::error::InvalidEnumValue;

/// Routing profile: how the engine decides which ways are walkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Profile {
    /// Only separately mapped footways are walkable.
    SeparateWays,
    /// Smaller roads without separate sidewalks are walkable alongside traffic.
    SidewalksOnHighways,
    /// US defaults: everything below primary is walkable, bigger roads sever.
    #[default]
    USA,
    /// US defaults, but shoulders and cycle streets don't count as severances.
    USAShoulders,
}

impl Profile {
    pub const ALL: [Profile; 4] = [
        Profile::USA,
        Profile::SidewalksOnHighways,
        Profile::SeparateWays,
        Profile::USAShoulders,
    ];

    /// Returns the token used by the engine and in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::SeparateWays => "SeparateWays",
            Profile::SidewalksOnHighways => "SidewalksOnHighways",
            Profile::USA => "USA",
            Profile::USAShoulders => "USAShoulders",
        }
    }

    /// The enum domain of profile tokens, in menu order.
    pub fn domain() -> &'static EnumDomain {
        static DOMAIN: OnceLock<EnumDomain> = OnceLock::new();
        DOMAIN.get_or_init(|| EnumDomain::new(Profile::ALL.iter().map(Profile::as_str)))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = Profile::domain().validate(s)?;
        Profile::ALL
            .into_iter()
            .find(|profile| profile.as_str() == token)
            .ok_or_else(|| InvalidEnumValue {
                token,
                allowed: Profile::domain().values().to_vec(),
            })
    }
}

/// Classification of a way as produced by the routing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoadKind {
    Footway,
    Indoors,
    BridgeOrTunnel,
    Sidewalk,
    WithTraffic,
    Crossing,
    /// A road too big to cross except at crossings.
    Severance,
}

impl RoadKind {
    pub const ALL: [RoadKind; 7] = [
        RoadKind::Footway,
        RoadKind::Indoors,
        RoadKind::BridgeOrTunnel,
        RoadKind::Sidewalk,
        RoadKind::WithTraffic,
        RoadKind::Crossing,
        RoadKind::Severance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoadKind::Footway => "Footway",
            RoadKind::Indoors => "Indoors",
            RoadKind::BridgeOrTunnel => "BridgeOrTunnel",
            RoadKind::Sidewalk => "Sidewalk",
            RoadKind::WithTraffic => "WithTraffic",
            RoadKind::Crossing => "Crossing",
            RoadKind::Severance => "Severance",
        }
    }
}

impl fmt::Display for RoadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoadKind {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoadKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| InvalidEnumValue {
                token: s.to_string(),
                allowed: RoadKind::ALL.iter().map(|k| k.as_str().to_string()).collect(),
            })
    }
}
