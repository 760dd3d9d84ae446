use std::{fmt, str::FromStr};

/// The neighbour counts that create & sustain life.
///
/// A dead cell becomes alive when its live-neighbour count is in the birth
/// set. A living cell stays alive when its count is in the survival set.
/// Both sets hold counts in `0..=8`, stored as bit masks.
///
/// Rulesets serialise as standard `B.../S...` rulestrings:
/// ```
/// # use gol_fade::Ruleset;
/// let ruleset: Ruleset = "B3/S23".parse().unwrap();
/// assert!(ruleset.born(3));
/// assert!(!ruleset.survives(4));
/// assert_eq!(ruleset.to_string(), "B3/S23");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(any(test, debug_assertions), derive(Debug))]
#[serde(try_from = "String", into = "String")]
pub struct Ruleset {
    birth: u16,
    survival: u16,
}

impl Ruleset {
    /// Creates a ruleset from slices of neighbour counts.
    ///
    /// Counts outside `0..=8` can never be reached by a Moore
    /// neighbourhood & are ignored.
    pub fn new(birth: &[u8], survival: &[u8]) -> Self {
        Self {
            birth: mask(birth),
            survival: mask(survival),
        }
    }

    /// Whether a dead cell with this many live neighbours becomes alive.
    pub fn born(&self, live_neighbours: u8) -> bool {
        self.birth & (1 << live_neighbours) != 0
    }

    /// Whether a living cell with this many live neighbours stays alive.
    pub fn survives(&self, live_neighbours: u8) -> bool {
        self.survival & (1 << live_neighbours) != 0
    }
}

impl Default for Ruleset {
    /// `B36/S23`: birth on 3 or 6 neighbours, survival on 2 or 3.
    fn default() -> Self {
        Self::new(&[3, 6], &[2, 3])
    }
}

fn mask(counts: &[u8]) -> u16 {
    counts
        .iter()
        .filter(|&&count| count <= 8)
        .fold(0, |mask, &count| mask | 1 << count)
}

/// The errors that can occur when parsing a `B.../S...` rulestring.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[cfg_attr(test, derive(kinded::Kinded))]
pub enum RuleParseError {
    /// The rulestring is not two `/`-separated parts.
    #[error("expected a rulestring of the form `B3/S23`")]
    MissingPart,
    /// A part does not start with its `B`/`S` marker.
    #[error("rule part `{0}` must start with `B` or `S`")]
    MissingMarker(String),
    /// A character is not a neighbour count.
    #[error("`{0}` is not a neighbour count between 0 and 8")]
    InvalidCount(char),
}

impl FromStr for Ruleset {
    type Err = RuleParseError;

    fn from_str(rulestring: &str) -> Result<Self, Self::Err> {
        let (birth, survival) = rulestring
            .split_once('/')
            .ok_or(RuleParseError::MissingPart)?;

        Ok(Self {
            birth: parse_counts(birth, 'B')?,
            survival: parse_counts(survival, 'S')?,
        })
    }
}

/// Parses one marker-prefixed half of a rulestring into a count mask.
fn parse_counts(part: &str, marker: char) -> Result<u16, RuleParseError> {
    let counts = part
        .strip_prefix(marker)
        .or_else(|| part.strip_prefix(marker.to_ascii_lowercase()))
        .ok_or_else(|| RuleParseError::MissingMarker(part.to_owned()))?;

    let mut mask = 0;
    for character in counts.chars() {
        match character.to_digit(10) {
            Some(count @ 0..=8) => mask |= 1 << count,
            _ => return Err(RuleParseError::InvalidCount(character)),
        }
    }
    Ok(mask)
}

impl fmt::Display for Ruleset {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "B")?;
        for count in 0..=8 {
            if self.born(count) {
                write!(formatter, "{count}")?;
            }
        }
        write!(formatter, "/S")?;
        for count in 0..=8 {
            if self.survives(count) {
                write!(formatter, "{count}")?;
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Ruleset {
    type Error = RuleParseError;

    fn try_from(rulestring: String) -> Result<Self, Self::Error> {
        rulestring.parse()
    }
}

impl From<Ruleset> for String {
    fn from(ruleset: Ruleset) -> Self {
        ruleset.to_string()
    }
}
