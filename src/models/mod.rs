// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CompatibilityResult, ComplementarySkills, ExperienceLevel, GitHubStats, GithubActivityLevel,
    HackathonStats, Location, LocationMatch, MatchProfile, MatchingFactors, ScoredCandidate,
    ScoringWeights, UserProfile,
};
pub use requests::{FindMatchesRequest, ScorePairRequest};
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse, ScorePairResponse};
