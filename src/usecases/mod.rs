pub mod launcher;
pub mod preflight;
