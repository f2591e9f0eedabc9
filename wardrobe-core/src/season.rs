//! Seasons a garment can be worn in.
//!
//! # Examples
//! ```
//! use wardrobe_core::Season;
//!
//! assert_eq!(Season::Fall.as_str(), "Fall");
//! assert_eq!("autumn".parse::<Season>(), Ok(Season::Fall));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four calendar seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Season {
    /// March to May in the northern hemisphere.
    Spring,
    /// June to August in the northern hemisphere.
    Summer,
    /// September to November in the northern hemisphere.
    #[cfg_attr(feature = "serde", serde(alias = "Autumn"))]
    Fall,
    /// December to February in the northern hemisphere.
    Winter,
}

impl Season {
    /// Every season in calendar order starting from spring.
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Fall, Self::Winter];

    /// Return the season's display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" | "autumn" => Ok(Self::Fall),
            "winter" => Ok(Self::Winter),
            _ => Err(format!("unknown season '{s}'")),
        }
    }
}
