pub mod chart;
pub mod cli;
pub mod error;
pub mod series;

pub use error::{PlotError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_MISSING_INPUT: i32 = 1;
pub const EXIT_DATA_ERROR: i32 = 2;
