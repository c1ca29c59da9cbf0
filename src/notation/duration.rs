//! Duration catalog: note kinds, their beat lengths, and the glyph each one draws.

use std::{fmt, str::FromStr};

use num_rational::Rational32;
use num_traits::CheckedAdd as _;

use crate::{
    foundation::error::{StaveError, StaveResult},
    glyph::GlyphKind,
};

/// Exact duration in quarter-note units.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Beats(Rational32);

impl Beats {
    pub const ZERO: Self = Self(Rational32::new_raw(0, 1));

    /// `numer / denom` quarter notes. `denom` must be non-zero and neither
    /// term may be `i32::MIN`.
    pub fn new(numer: i32, denom: i32) -> StaveResult<Self> {
        if denom == 0 {
            return Err(StaveError::validation("beat denominator must be non-zero"));
        }
        if numer == i32::MIN || denom == i32::MIN {
            return Err(StaveError::validation(format!(
                "beat ratio {numer}/{denom} is out of range"
            )));
        }
        Ok(Self(Rational32::new(numer, denom)))
    }

    pub fn quarters(n: i32) -> Self {
        Self(Rational32::from_integer(n))
    }

    pub fn is_positive(self) -> bool {
        *self.0.numer() > 0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(*self.0.numer()) / f64::from(*self.0.denom())
    }

    /// Exact sum, or `None` when the result does not fit an `i32` ratio.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(&rhs.0).map(Self)
    }

    pub fn checked_sum(items: impl IntoIterator<Item = Self>) -> Option<Self> {
        items.into_iter().try_fold(Self::ZERO, Self::checked_add)
    }
}

impl fmt::Display for Beats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Beats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Beats({})", self.0)
    }
}

/// One catalog row: how long a note lasts and which glyph draws it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteEntry {
    pub duration: Beats,
    pub glyph: GlyphKind,
}

impl NoteEntry {
    /// Entry outside the fixed catalog. The duration is checked when the measure is laid out.
    pub fn custom(glyph: GlyphKind, duration: Beats) -> Self {
        Self { duration, glyph }
    }

    /// Total duration of `entries`.
    pub fn total(entries: &[NoteEntry]) -> StaveResult<Beats> {
        Beats::checked_sum(entries.iter().map(|e| e.duration)).ok_or_else(|| {
            StaveError::invalid_note("note durations are too fine to sum exactly")
        })
    }
}

/// Note values known to the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Whole,
    Half,
    Quarter,
}

impl NoteKind {
    pub const ALL: [NoteKind; 3] = [NoteKind::Whole, NoteKind::Half, NoteKind::Quarter];

    pub fn duration(self) -> Beats {
        match self {
            Self::Whole => Beats::quarters(4),
            Self::Half => Beats::quarters(2),
            Self::Quarter => Beats::quarters(1),
        }
    }

    pub fn glyph(self) -> GlyphKind {
        match self {
            Self::Whole => GlyphKind::Whole,
            Self::Half => GlyphKind::Half,
            Self::Quarter => GlyphKind::Quarter,
        }
    }

    pub fn entry(self) -> NoteEntry {
        NoteEntry {
            duration: self.duration(),
            glyph: self.glyph(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Whole => "whole",
            Self::Half => "half",
            Self::Quarter => "quarter",
        }
    }

    /// Parse a comma- or whitespace-separated list such as `"q, h, q"`.
    pub fn parse_list(s: &str) -> StaveResult<Vec<NoteKind>> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl From<NoteKind> for NoteEntry {
    fn from(kind: NoteKind) -> Self {
        kind.entry()
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoteKind {
    type Err = StaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whole" | "w" => Ok(Self::Whole),
            "half" | "h" => Ok(Self::Half),
            "quarter" | "q" => Ok(Self::Quarter),
            other => Err(StaveError::invalid_note(format!(
                "unknown note kind '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/notation/duration.rs"]
mod tests;
