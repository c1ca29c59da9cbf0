use crate::notation::duration::Beats;

/// Spacing multiplier for each note: `0` for the first, then the previous
/// note's duration minus one.
///
/// A quarter note leaves `k = 0`, so the next note sits at the base gap; a
/// half note leaves `k = 1` and reserves room for one more beat.
pub fn multipliers(durations: &[Beats]) -> Vec<f64> {
    durations
        .iter()
        .scan(0.0, |k, d| {
            let current = *k;
            *k = d.as_f64() - 1.0;
            Some(current)
        })
        .collect()
}

/// Leading gap before a note of `width` placed with multiplier `k`.
pub fn gap(note_buff: f64, width: f64, k: f64) -> f64 {
    note_buff + (note_buff + width) * k
}

#[cfg(test)]
#[path = "../../tests/unit/layout/spacing.rs"]
mod tests;
