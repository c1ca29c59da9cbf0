//! Five-line staff, bar lines and time signature, plus the spacing constants
//! every note in the measure shares.

pub mod builder;
