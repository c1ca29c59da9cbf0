pub mod duration;
pub mod time_signature;
