use std::{fmt, str::FromStr};

use crate::{
    foundation::error::{StaveError, StaveResult},
    notation::duration::Beats,
};

/// Beats per measure over the note value that gets one beat.
///
/// The denominator is not required to be a power of two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "[u32; 2]", into = "[u32; 2]")]
pub struct TimeSignature {
    pub numerator: u32,
    pub denominator: u32, // must be > 0
}

impl TimeSignature {
    pub const COMMON: Self = Self {
        numerator: 4,
        denominator: 4,
    };

    pub fn new(numerator: u32, denominator: u32) -> StaveResult<Self> {
        if numerator == 0 {
            return Err(StaveError::validation("time signature numerator must be > 0"));
        }
        if denominator == 0 {
            return Err(StaveError::validation(
                "time signature denominator must be > 0",
            ));
        }
        if i32::try_from(numerator.saturating_mul(4)).is_err() || i32::try_from(denominator).is_err()
        {
            return Err(StaveError::validation("time signature is out of range"));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// `denominator / 4`: how many of this signature's beats make a quarter note's length.
    pub fn beat_factor(self) -> f64 {
        f64::from(self.denominator) / 4.0
    }

    /// Measure capacity in quarter notes: `numerator / (denominator / 4)`.
    ///
    /// Fails when the fields were set directly to values [`TimeSignature::new`] rejects.
    pub fn measure_length(self) -> StaveResult<Beats> {
        let numer = i32::try_from(self.numerator)
            .ok()
            .filter(|&n| n > 0)
            .and_then(|n| n.checked_mul(4));
        let denom = i32::try_from(self.denominator).ok().filter(|&d| d > 0);
        match (numer, denom) {
            (Some(numer), Some(denom)) => Beats::new(numer, denom),
            _ => Err(StaveError::validation(format!(
                "time signature {self} is out of range"
            ))),
        }
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self::COMMON
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for TimeSignature {
    type Err = StaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, den) = s
            .split_once('/')
            .ok_or_else(|| StaveError::validation(format!("time signature '{s}' must be N/D")))?;
        let parse = |part: &str| {
            part.trim().parse::<u32>().map_err(|e| {
                StaveError::validation(format!("time signature '{s}': {e}"))
            })
        };
        Self::new(parse(num)?, parse(den)?)
    }
}

impl TryFrom<[u32; 2]> for TimeSignature {
    type Error = StaveError;

    fn try_from([numerator, denominator]: [u32; 2]) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

impl From<TimeSignature> for [u32; 2] {
    fn from(ts: TimeSignature) -> Self {
        [ts.numerator, ts.denominator]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/notation/time_signature.rs"]
mod tests;
