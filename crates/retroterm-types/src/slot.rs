//! Keyboard sound-effect slot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermError};

/// One of the four selectable keystroke cue resources, numbered 1 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SoundSlot(u8);

impl SoundSlot {
    /// Lowest valid slot number.
    pub const MIN: u8 = 1;
    /// Highest valid slot number.
    pub const MAX: u8 = 4;
    /// The slot a fresh session starts with.
    pub const DEFAULT: SoundSlot = SoundSlot(1);

    /// Validate a slot number.
    pub fn new(n: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(TermError::Config(format!(
                "sound slot must be {}-{}, got {n}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// The 1-based slot number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// 0-based index into a four-entry asset table.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl Default for SoundSlot {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for SoundSlot {
    type Error = TermError;

    fn try_from(n: u8) -> Result<Self> {
        Self::new(n)
    }
}

impl From<SoundSlot> for u8 {
    fn from(slot: SoundSlot) -> u8 {
        slot.0
    }
}

/// Accepts exactly the tokens `1`, `2`, `3` and `4`.
impl FromStr for SoundSlot {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1" => Ok(Self(1)),
            "2" => Ok(Self(2)),
            "3" => Ok(Self(3)),
            "4" => Ok(Self(4)),
            _ => Err(TermError::Config(format!("invalid sound slot: {s:?}"))),
        }
    }
}

impl fmt::Display for SoundSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_one() {
        assert_eq!(SoundSlot::default().get(), 1);
    }

    #[test]
    fn index_is_zero_based() {
        assert_eq!(SoundSlot::new(1).unwrap().index(), 0);
        assert_eq!(SoundSlot::new(4).unwrap().index(), 3);
    }

    #[test]
    fn zero_and_five_rejected() {
        assert!(SoundSlot::new(0).is_err());
        assert!(SoundSlot::new(5).is_err());
    }

    #[test]
    fn parse_only_plain_digits() {
        assert_eq!("3".parse::<SoundSlot>().unwrap().get(), 3);
        assert!("03".parse::<SoundSlot>().is_err());
        assert!("+1".parse::<SoundSlot>().is_err());
        assert!(" 1".parse::<SoundSlot>().is_err());
        assert!("".parse::<SoundSlot>().is_err());
    }

    #[test]
    fn display_is_number() {
        assert_eq!(SoundSlot::new(2).unwrap().to_string(), "2");
    }

    proptest! {
        #[test]
        fn new_accepts_exactly_one_to_four(n in any::<u8>()) {
            prop_assert_eq!(SoundSlot::new(n).is_ok(), (1..=4).contains(&n));
        }
    }
}
