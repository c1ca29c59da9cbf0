use crate::{
    foundation::error::{StaveError, StaveResult},
    notation::duration::Beats,
};

/// How a valid sequence of durations fills a measure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    /// No notes; the staff is drawn alone.
    Empty,
    /// A single note lasting the whole measure.
    WholeMeasure,
    /// Several notes summing exactly to the measure length.
    Exact,
}

/// Check that `durations` fill a measure of `capacity` quarter notes.
///
/// Non-positive durations are rejected before any sum is taken. When the
/// first duration alone fills the measure no other note may follow.
/// Otherwise the running total must never pass `capacity` and must reach it
/// exactly at the end. A running total too fine for an `i32` ratio is an
/// invalid note.
pub fn check_fill(durations: &[Beats], capacity: Beats) -> StaveResult<Fill> {
    let Some(&first) = durations.first() else {
        return Ok(Fill::Empty);
    };

    if let Some((index, d)) = durations.iter().enumerate().find(|(_, d)| !d.is_positive()) {
        return Err(StaveError::invalid_note(format!(
            "note {index} has non-positive duration {d}"
        )));
    }

    if first == capacity {
        if durations.len() > 1 {
            let requested = durations
                .iter()
                .enumerate()
                .try_fold(Beats::ZERO, |running, (index, &d)| add_note(running, d, index))?;
            return Err(StaveError::TooManyBeats {
                requested,
                capacity,
            });
        }
        return Ok(Fill::WholeMeasure);
    }

    let total = durations
        .iter()
        .enumerate()
        .try_fold(Beats::ZERO, |running, (index, &d)| {
            let running = add_note(running, d, index)?;
            if running > capacity {
                Err(StaveError::TooManyBeats {
                    requested: running,
                    capacity,
                })
            } else {
                Ok(running)
            }
        })?;

    if total < capacity {
        return Err(StaveError::NotEnoughBeats {
            provided: total,
            capacity,
        });
    }
    Ok(Fill::Exact)
}

fn add_note(running: Beats, d: Beats, index: usize) -> StaveResult<Beats> {
    running.checked_add(d).ok_or_else(|| {
        StaveError::invalid_note(format!(
            "note {index} overflows exact beat arithmetic ({running} + {d})"
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fill.rs"]
mod tests;
