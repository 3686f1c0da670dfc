pub mod indicators;
pub mod period;
