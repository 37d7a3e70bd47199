//! HackMate Algo - Teammate compatibility scoring for the HackMate platform
//!
//! This library provides the compatibility scoring engine used to power
//! swipe-to-match team formation. The core is a pure function over two
//! profiles; the surrounding modules fetch inputs and rank candidate batches.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_compatibility_score, Matcher};
pub use crate::models::{
    CompatibilityResult, GitHubStats, HackathonStats, MatchProfile, MatchingFactors,
    ScoredCandidate, ScoringWeights, UserProfile,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_library_exports() {
        let viewer = MatchProfile {
            profile: UserProfile {
                user_id: "a".to_string(),
                name: None,
                skills: vec!["Rust".to_string()],
                frameworks: vec![],
                experience_level: None,
                location: None,
                looking_for_team: true,
                last_active: None,
            },
            hackathon: None,
            github: None,
        };
        let mut candidate = viewer.clone();
        candidate.profile.user_id = "b".to_string();

        let result = calculate_compatibility_score(
            &viewer,
            &candidate,
            &ScoringWeights::default(),
            Utc::now(),
        );
        assert!(result.compatibility_score <= 100);
    }
}
