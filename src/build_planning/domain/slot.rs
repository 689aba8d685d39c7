use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight fixed category positions in a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Cpu,
    Gpu,
    Motherboard,
    Ram,
    Storage,
    Psu,
    Case,
    Cooling,
}

impl Slot {
    /// Every slot, in canonical order
    pub const ALL: [Slot; 8] = [
        Slot::Cpu,
        Slot::Gpu,
        Slot::Motherboard,
        Slot::Ram,
        Slot::Storage,
        Slot::Psu,
        Slot::Case,
        Slot::Cooling,
    ];

    /// Stable lowercase key used in catalogs and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Slot::Cpu => "cpu",
            Slot::Gpu => "gpu",
            Slot::Motherboard => "motherboard",
            Slot::Ram => "ram",
            Slot::Storage => "storage",
            Slot::Psu => "psu",
            Slot::Case => "case",
            Slot::Cooling => "cooling",
        }
    }

    /// Position of the slot within [`Slot::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Label used when a catalog does not supply a category name
    pub fn default_label(self) -> &'static str {
        match self {
            Slot::Cpu => "CPU",
            Slot::Gpu => "GPU",
            Slot::Motherboard => "Motherboard",
            Slot::Ram => "RAM",
            Slot::Storage => "Storage",
            Slot::Psu => "PSU",
            Slot::Case => "Case",
            Slot::Cooling => "Cooling",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Slot::ALL
            .into_iter()
            .find(|slot| slot.key() == lowered)
            .ok_or_else(|| {
                format!(
                    "Invalid slot: {}. Expected one of: {}",
                    s,
                    Slot::ALL.map(Slot::key).join(", ")
                )
            })
    }
}
