use crate::core::scoring::calculate_compatibility_score;
use crate::models::{MatchProfile, ScoredCandidate, ScoringWeights};
use chrono::Utc;

/// Candidates scoring below this are dropped from batch results
const MIN_COMPATIBILITY_SCORE: u8 = 5;

/// Result of scoring a candidate batch
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// Batch scoring orchestrator
///
/// Maps the pure compatibility scorer over a candidate list, then ranks and
/// limits the results. Each pair is scored independently; there is no shared
/// state between candidates.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Score a single viewer/candidate pair
    pub fn score_pair(
        &self,
        viewer: &MatchProfile,
        candidate: &MatchProfile,
    ) -> crate::models::CompatibilityResult {
        calculate_compatibility_score(viewer, candidate, &self.weights, Utc::now())
    }

    /// Score all candidates against a viewer, rank by compatibility, limit
    ///
    /// The viewer itself is excluded if it appears in the candidate list.
    /// Ties are broken by user id so repeated calls rank identically.
    pub fn score_candidates(
        &self,
        viewer: &MatchProfile,
        candidates: Vec<MatchProfile>,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();
        let scored_at = Utc::now();

        let mut matches: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter(|candidate| candidate.profile.user_id != viewer.profile.user_id)
            .filter_map(|candidate| {
                let result =
                    calculate_compatibility_score(viewer, &candidate, &self.weights, scored_at);

                if result.compatibility_score >= MIN_COMPATIBILITY_SCORE {
                    Some(ScoredCandidate {
                        user_id: candidate.profile.user_id,
                        name: candidate.profile.name,
                        experience_level: candidate.profile.experience_level,
                        location: candidate.profile.location,
                        compatibility_score: result.compatibility_score,
                        matching_factors: result.matching_factors,
                    })
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            b.compatibility_score
                .cmp(&a.compatibility_score)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        matches.truncate(limit);

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
