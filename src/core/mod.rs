// Core algorithm exports
pub mod factors;
pub mod matcher;
pub mod narrative;
pub mod scoring;

pub use factors::{activity_band, github_activity_level, location_match, ActivityBand};
pub use matcher::{MatchResult, Matcher};
pub use narrative::why_great_together;
pub use scoring::{calculate_compatibility_score, SubScores};
