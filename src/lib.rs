// Fitcheck: job description vs. resume match analysis
//
// This is the library root. Each module corresponds to one stage of the
// comparison engine; `analysis` wires them together.

pub mod analysis;
pub mod config;
pub mod document;
pub mod keywords;
pub mod output;
pub mod sentiment;
pub mod similarity;
pub mod skills;
pub mod text;
