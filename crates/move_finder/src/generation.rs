//! Game generations.
//!
//! A generation selects both which catalog entries exist and which learnset
//! tags count. Learnset tags carry the generation as a single leading
//! digit, so the representable range is 1-9.

use crate::error::{DexError, DexResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest national dex number introduced in each generation (index 0 = Gen 1).
const SPECIES_NUM_CEILINGS: [u16; 9] = [151, 251, 386, 493, 649, 721, 809, 905, 1025];

/// Highest move number introduced in each generation (index 0 = Gen 1).
/// Legends: Arceus moves (827-850) count as Gen 8.
const MOVE_NUM_CEILINGS: [u16; 8] = [165, 251, 354, 467, 559, 621, 742, 850];

/// Forme name prefixes whose introduction generation differs from the base species.
const FORME_GENERATIONS: &[(&str, u8)] = &[
    ("Mega", 6),
    ("Primal", 6),
    ("Alola", 7),
    ("Galar", 8),
    ("Hisui", 8),
    ("Paldea", 9),
];

/// A validated generation number (1-9).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Generation(u8);

impl Generation {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    /// The newest generation in the catalog.
    pub const LATEST: Generation = Generation(9);

    /// Generations offered for selection, newest first.
    pub const SELECTABLE: [Generation; 7] = [
        Generation(9),
        Generation(8),
        Generation(7),
        Generation(6),
        Generation(5),
        Generation(4),
        Generation(3),
    ];

    /// Construct a generation, rejecting anything a single tag digit cannot encode.
    pub fn new(num: u32) -> DexResult<Self> {
        if (Self::MIN as u32..=Self::MAX as u32).contains(&num) {
            Ok(Generation(num as u8))
        } else {
            Err(DexError::UnsupportedGeneration(num))
        }
    }

    #[inline]
    pub fn num(self) -> u8 {
        self.0
    }

    /// The character that prefixes this generation's learnset tags.
    #[inline]
    pub fn digit(self) -> char {
        char::from(b'0' + self.0)
    }

    #[inline]
    pub fn is_latest(self) -> bool {
        self == Self::LATEST
    }

    /// Flagship games of the generation.
    pub fn games(self) -> &'static str {
        match self.0 {
            1 => "Red/Blue",
            2 => "Gold/Silver",
            3 => "Ruby/Sapphire",
            4 => "Diamond/Pearl",
            5 => "Black/White",
            6 => "X/Y",
            7 => "Sun/Moon",
            8 => "Sword/Shield",
            _ => "Scarlet/Violet",
        }
    }

    /// "Gen 9 (Scarlet/Violet)"
    pub fn label(self) -> String {
        format!("Gen {} ({})", self.0, self.games())
    }

    /// "Gen 9"
    pub fn short_label(self) -> String {
        format!("Gen {}", self.0)
    }

    /// Generation that introduced a national dex number.
    pub fn of_species_num(num: u16) -> Option<Self> {
        if num == 0 {
            return None;
        }
        SPECIES_NUM_CEILINGS
            .iter()
            .position(|&ceiling| num <= ceiling)
            .map(|idx| Generation(idx as u8 + 1))
    }

    /// Generation that introduced a move number. Numbers past the last
    /// known ceiling belong to the latest generation.
    pub fn of_move_num(num: u16) -> Option<Self> {
        if num == 0 {
            return None;
        }
        let idx = MOVE_NUM_CEILINGS
            .iter()
            .position(|&ceiling| num <= ceiling)
            .unwrap_or(MOVE_NUM_CEILINGS.len());
        Some(Generation(idx as u8 + 1))
    }

    /// Generation implied by a forme name such as "Alola" or "Paldea-Combat".
    pub fn of_forme(forme: &str) -> Option<Self> {
        FORME_GENERATIONS
            .iter()
            .find(|(prefix, _)| forme.starts_with(prefix))
            .map(|&(_, gen)| Generation(gen))
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Generation {
    type Error = DexError;

    fn try_from(num: u8) -> Result<Self, Self::Error> {
        Generation::new(num as u32)
    }
}

impl From<Generation> for u8 {
    fn from(gen: Generation) -> u8 {
        gen.0
    }
}

/// Accepts "9", "gen9", "Gen 9".
impl FromStr for Generation {
    type Err = DexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("gen")
            .or_else(|| trimmed.strip_prefix("Gen"))
            .unwrap_or(trimmed)
            .trim();
        let num: u32 = digits
            .parse()
            .map_err(|_| DexError::UnsupportedGeneration(0))?;
        Generation::new(num)
    }
}
