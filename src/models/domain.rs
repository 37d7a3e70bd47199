use serde::{Deserialize, Serialize};

/// User profile with skill and location data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(rename = "lookingForTeam", default = "default_true")]
    pub looking_for_team: bool,
    #[serde(rename = "lastActive", default)]
    pub last_active: Option<chrono::DateTime<chrono::Utc>>,
}

fn default_true() -> bool { true }

/// Ordinal experience level, Beginner < Intermediate < Advanced < Expert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    /// Ordinal rank, 0 for Beginner through 3 for Expert
    pub fn rank(self) -> u8 {
        match self {
            ExperienceLevel::Beginner => 0,
            ExperienceLevel::Intermediate => 1,
            ExperienceLevel::Advanced => 2,
            ExperienceLevel::Expert => 3,
        }
    }
}

/// Hierarchical location, each field optional for matching granularity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Aggregated hackathon participation statistics for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HackathonStats {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub participated: u32,
    #[serde(default)]
    pub won: u32,
    #[serde(rename = "winRate", default)]
    pub win_rate: f64,
    #[serde(rename = "favoriteCategories", default)]
    pub favorite_categories: Vec<String>,
    #[serde(rename = "lastParticipation", default)]
    pub last_participation: Option<chrono::DateTime<chrono::Utc>>,
}

impl HackathonStats {
    /// Win rate sanitized to [0, 1]
    ///
    /// Upstream aggregators occasionally ship NaN or percentage-scale values;
    /// fall back to won/participated when the stored rate is unusable.
    pub fn sanitized_win_rate(&self) -> f64 {
        if self.win_rate.is_finite() && (0.0..=1.0).contains(&self.win_rate) {
            return self.win_rate;
        }
        if self.participated == 0 {
            return 0.0;
        }
        (self.won.min(self.participated) as f64 / self.participated as f64).clamp(0.0, 1.0)
    }
}

/// Pre-fetched GitHub statistics for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubStats {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub repositories: u32,
    #[serde(default)]
    pub contributions: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(rename = "topLanguages", default)]
    pub top_languages: Vec<String>,
    #[serde(rename = "lastPush", default)]
    pub last_push: Option<chrono::DateTime<chrono::Utc>>,
}

/// Scorer input: a profile plus its optional derived statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchProfile {
    pub profile: UserProfile,
    #[serde(default)]
    pub hackathon: Option<HackathonStats>,
    #[serde(default)]
    pub github: Option<GitHubStats>,
}

impl MatchProfile {
    /// Most recent activity signal across profile and stats
    pub fn last_activity(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        let mut latest = self.profile.last_active;
        if let Some(github) = &self.github {
            if github.last_push > latest {
                latest = github.last_push;
            }
        }
        if let Some(hackathon) = &self.hackathon {
            if hackathon.last_participation > latest {
                latest = hackathon.last_participation;
            }
        }
        latest
    }
}

/// Location match tier, most specific wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationMatch {
    SameCity,
    SameState,
    SameCountry,
    #[serde(rename = "none")]
    NoMatch,
}

/// Pairwise GitHub activity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GithubActivityLevel {
    BothActive,
    OneActive,
    BothModerate,
    NeitherActive,
}

/// Set differences in both directions; directional, not symmetric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplementarySkills {
    #[serde(rename = "userUniqueSkills")]
    pub user_unique_skills: Vec<String>,
    #[serde(rename = "targetUniqueSkills")]
    pub target_unique_skills: Vec<String>,
}

/// Structured explanation accompanying a compatibility score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingFactors {
    #[serde(rename = "sharedLanguages")]
    pub shared_languages: Vec<String>,
    #[serde(rename = "sharedFrameworks")]
    pub shared_frameworks: Vec<String>,
    #[serde(rename = "complementarySkills")]
    pub complementary_skills: ComplementarySkills,
    #[serde(rename = "experienceGap")]
    pub experience_gap: u8,
    #[serde(rename = "locationMatch")]
    pub location_match: LocationMatch,
    #[serde(rename = "githubActivityLevel")]
    pub github_activity_level: GithubActivityLevel,
    #[serde(rename = "sharedInterests")]
    pub shared_interests: Vec<String>,
    #[serde(rename = "strengthAreas")]
    pub strength_areas: Vec<String>,
    #[serde(rename = "whyGreatTogether")]
    pub why_great_together: Vec<String>,
}

/// Compatibility score plus its explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResult {
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    #[serde(rename = "matchingFactors")]
    pub matching_factors: MatchingFactors,
}

/// Scored candidate returned by the batch matcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: Option<String>,
    #[serde(rename = "experienceLevel")]
    pub experience_level: Option<ExperienceLevel>,
    pub location: Option<Location>,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    #[serde(rename = "matchingFactors")]
    pub matching_factors: MatchingFactors,
}

/// Per-factor point budgets, total 100
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub github: f64,
    pub hackathon: f64,
    pub location: f64,
    pub recency: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 30.0,
            experience: 20.0,
            github: 20.0,
            hackathon: 15.0,
            location: 10.0,
            recency: 5.0,
        }
    }
}
