use crate::core::factors::{
    activity_band, experience_gap, github_activity_level, is_recently_active, jaccard,
    location_match, normalize_terms, shared_terms, unique_terms, MAX_EXPERIENCE_GAP,
};
use crate::core::narrative;
use crate::models::{
    CompatibilityResult, ComplementarySkills, GithubActivityLevel, HackathonStats, LocationMatch,
    MatchProfile, MatchingFactors, ScoringWeights,
};
use chrono::{DateTime, Utc};

/// Weighted sub-scores, each bounded by its factor's point budget
#[derive(Debug, Clone, Copy, Default)]
pub struct SubScores {
    pub skills: f64,
    pub experience: f64,
    pub github: f64,
    pub hackathon: f64,
    pub location: f64,
    pub recency: f64,
}

impl SubScores {
    pub fn total(&self) -> f64 {
        self.skills + self.experience + self.github + self.hackathon + self.location + self.recency
    }
}

/// Calculate a compatibility score (0-100) between a viewer and a candidate
///
/// Scoring budget (100 points total):
/// ```text
/// skill overlap        30   Jaccard ratio of combined language+framework sets
/// experience           20   decays linearly with the ordinal level gap
/// github activity      20   both_active > one_active > both_moderate > neither
/// hackathon record     15   similarity of participation counts and win rates
/// location             10   same_city > same_state > same_country > none
/// recent activity       5   both sides active within the recency window
/// ```
///
/// Pure and side-effect free: missing optional inputs degrade to a zero
/// contribution, never an error. `scored_at` anchors the recency window so
/// repeated calls with the same inputs yield the same output.
pub fn calculate_compatibility_score(
    viewer: &MatchProfile,
    candidate: &MatchProfile,
    weights: &ScoringWeights,
    scored_at: DateTime<Utc>,
) -> CompatibilityResult {
    // Factor inputs
    let viewer_languages = normalize_terms(&viewer.profile.skills);
    let candidate_languages = normalize_terms(&candidate.profile.skills);
    let viewer_frameworks = normalize_terms(&viewer.profile.frameworks);
    let candidate_frameworks = normalize_terms(&candidate.profile.frameworks);

    let viewer_all: std::collections::BTreeSet<String> =
        viewer_languages.union(&viewer_frameworks).cloned().collect();
    let candidate_all: std::collections::BTreeSet<String> =
        candidate_languages.union(&candidate_frameworks).cloned().collect();

    let gap = experience_gap(viewer.profile.experience_level, candidate.profile.experience_level);
    let location = location_match(viewer.profile.location.as_ref(), candidate.profile.location.as_ref());
    let activity = github_activity_level(
        activity_band(viewer.github.as_ref()),
        activity_band(candidate.github.as_ref()),
    );
    let viewer_recent = is_recently_active(viewer.last_activity(), scored_at);
    let candidate_recent = is_recently_active(candidate.last_activity(), scored_at);

    let shared_interests = match (&viewer.hackathon, &candidate.hackathon) {
        (Some(a), Some(b)) => shared_terms(
            &normalize_terms(&a.favorite_categories),
            &normalize_terms(&b.favorite_categories),
        ),
        _ => vec![],
    };

    // Sub-scores
    let sub_scores = SubScores {
        skills: jaccard(&viewer_all, &candidate_all) * weights.skills,
        experience: experience_score(gap) * weights.experience,
        github: github_score(activity) * weights.github,
        hackathon: hackathon_score(viewer.hackathon.as_ref(), candidate.hackathon.as_ref())
            * weights.hackathon,
        location: location_score(location) * weights.location,
        recency: recency_score(viewer_recent, candidate_recent) * weights.recency,
    };

    // Explanation object
    let shared_languages = shared_terms(&viewer_languages, &candidate_languages);
    let shared_frameworks = shared_terms(&viewer_frameworks, &candidate_frameworks);
    let mut strength_areas = shared_languages.clone();
    strength_areas.extend(shared_frameworks.clone());
    strength_areas.sort();
    strength_areas.dedup();

    let mut matching_factors = MatchingFactors {
        shared_languages,
        shared_frameworks,
        complementary_skills: ComplementarySkills {
            user_unique_skills: unique_terms(&viewer_all, &candidate_all),
            target_unique_skills: unique_terms(&candidate_all, &viewer_all),
        },
        experience_gap: gap,
        location_match: location,
        github_activity_level: activity,
        shared_interests,
        strength_areas,
        why_great_together: vec![],
    };

    matching_factors.why_great_together =
        narrative::why_great_together(&matching_factors, &sub_scores, weights);

    CompatibilityResult {
        compatibility_score: sub_scores.total().round().clamp(0.0, 100.0) as u8,
        matching_factors,
    }
}

/// Experience factor (0-1): decays linearly with the ordinal gap
#[inline]
fn experience_score(gap: u8) -> f64 {
    1.0 - (gap.min(MAX_EXPERIENCE_GAP) as f64 / MAX_EXPERIENCE_GAP as f64)
}

/// GitHub activity factor (0-1) from the pairwise classification
#[inline]
fn github_score(level: GithubActivityLevel) -> f64 {
    match level {
        GithubActivityLevel::BothActive => 1.0,
        GithubActivityLevel::OneActive => 0.6,
        GithubActivityLevel::BothModerate => 0.35,
        GithubActivityLevel::NeitherActive => 0.0,
    }
}

/// Hackathon track-record factor (0-1)
///
/// Blends participation-count similarity (60%) with win-rate similarity
/// (40%). Missing stats on either side, or two empty track records, score
/// zero rather than inventing similarity.
#[inline]
fn hackathon_score(viewer: Option<&HackathonStats>, candidate: Option<&HackathonStats>) -> f64 {
    let (a, b) = match (viewer, candidate) {
        (Some(a), Some(b)) => (a, b),
        _ => return 0.0,
    };

    let max_participation = a.participated.max(b.participated);
    if max_participation == 0 {
        return 0.0;
    }

    let count_similarity =
        1.0 - a.participated.abs_diff(b.participated) as f64 / max_participation as f64;
    let win_rate_similarity = 1.0 - (a.sanitized_win_rate() - b.sanitized_win_rate()).abs();

    count_similarity * 0.6 + win_rate_similarity * 0.4
}

/// Location factor (0-1): tiered, most specific tier wins, no stacking
#[inline]
fn location_score(tier: LocationMatch) -> f64 {
    match tier {
        LocationMatch::SameCity => 1.0,
        LocationMatch::SameState => 0.6,
        LocationMatch::SameCountry => 0.3,
        LocationMatch::NoMatch => 0.0,
    }
}

/// Recent-activity factor (0-1)
#[inline]
fn recency_score(viewer_recent: bool, candidate_recent: bool) -> f64 {
    match (viewer_recent, candidate_recent) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.5,
        (false, false) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, GitHubStats, Location, UserProfile};
    use chrono::Duration;

    fn profile(id: &str, skills: &[&str], frameworks: &[&str]) -> UserProfile {
        UserProfile {
            user_id: id.to_string(),
            name: Some(format!("User {}", id)),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            frameworks: frameworks.iter().map(|s| s.to_string()).collect(),
            experience_level: Some(ExperienceLevel::Intermediate),
            location: None,
            looking_for_team: true,
            last_active: None,
        }
    }

    fn match_profile(id: &str, skills: &[&str]) -> MatchProfile {
        MatchProfile {
            profile: profile(id, skills, &[]),
            hackathon: None,
            github: None,
        }
    }

    fn hackathon(participated: u32, won: u32) -> HackathonStats {
        HackathonStats {
            user_id: "u".to_string(),
            participated,
            won,
            win_rate: if participated == 0 { 0.0 } else { won as f64 / participated as f64 },
            favorite_categories: vec![],
            last_participation: None,
        }
    }

    #[test]
    fn test_score_within_valid_range() {
        let viewer = match_profile("a", &["Python", "Rust"]);
        let candidate = match_profile("b", &["Python", "Go"]);
        let result = calculate_compatibility_score(
            &viewer,
            &candidate,
            &ScoringWeights::default(),
            Utc::now(),
        );

        assert!(result.compatibility_score <= 100);
    }

    #[test]
    fn test_empty_profiles_score_minimum() {
        let viewer = match_profile("a", &[]);
        let candidate = match_profile("b", &[]);
        let mut viewer = viewer;
        viewer.profile.experience_level = None;
        let result = calculate_compatibility_score(
            &viewer,
            &candidate,
            &ScoringWeights::default(),
            Utc::now(),
        );

        assert_eq!(result.compatibility_score, 0);
        assert_eq!(result.matching_factors.location_match, LocationMatch::NoMatch);
        assert_eq!(
            result.matching_factors.github_activity_level,
            GithubActivityLevel::NeitherActive
        );
    }

    #[test]
    fn test_experience_score_decay() {
        assert_eq!(experience_score(0), 1.0);
        assert!(experience_score(1) > experience_score(2));
        assert_eq!(experience_score(3), 0.0);
        // Defensive: gaps beyond the ordinal range still floor at zero
        assert_eq!(experience_score(7), 0.0);
    }

    #[test]
    fn test_github_score_ordering() {
        assert!(github_score(GithubActivityLevel::BothActive) > github_score(GithubActivityLevel::OneActive));
        assert!(github_score(GithubActivityLevel::OneActive) > github_score(GithubActivityLevel::BothModerate));
        assert!(github_score(GithubActivityLevel::BothModerate) > github_score(GithubActivityLevel::NeitherActive));
    }

    #[test]
    fn test_hackathon_score_similar_records() {
        let similar = hackathon_score(Some(&hackathon(10, 3)), Some(&hackathon(9, 3)));
        let mismatched = hackathon_score(Some(&hackathon(30, 20)), Some(&hackathon(1, 0)));

        assert!(similar > mismatched);
        assert_eq!(hackathon_score(None, Some(&hackathon(10, 3))), 0.0);
        assert_eq!(hackathon_score(Some(&hackathon(0, 0)), Some(&hackathon(0, 0))), 0.0);
    }

    #[test]
    fn test_identical_profiles_max_overlap_factors() {
        let mut viewer = match_profile("a", &["Python", "Rust"]);
        viewer.profile.location = Some(Location {
            city: Some("Berlin".to_string()),
            state: None,
            country: Some("Germany".to_string()),
        });
        let mut candidate = viewer.clone();
        candidate.profile.user_id = "b".to_string();

        let weights = ScoringWeights::default();
        let result = calculate_compatibility_score(&viewer, &candidate, &weights, Utc::now());

        // Full skill overlap, zero gap, same city
        assert!(result.matching_factors.complementary_skills.user_unique_skills.is_empty());
        assert_eq!(result.matching_factors.experience_gap, 0);
        assert_eq!(result.matching_factors.location_match, LocationMatch::SameCity);
        assert!(
            result.compatibility_score
                >= (weights.skills + weights.experience + weights.location) as u8
        );
    }

    #[test]
    fn test_directional_unique_skills() {
        let viewer = match_profile("a", &["Python", "TypeScript"]);
        let candidate = match_profile("b", &["Python", "Go"]);

        let forward = calculate_compatibility_score(
            &viewer,
            &candidate,
            &ScoringWeights::default(),
            Utc::now(),
        );
        let reverse = calculate_compatibility_score(
            &candidate,
            &viewer,
            &ScoringWeights::default(),
            Utc::now(),
        );

        assert_eq!(
            forward.matching_factors.complementary_skills.user_unique_skills,
            vec!["typescript"]
        );
        assert_eq!(
            forward.matching_factors.complementary_skills.target_unique_skills,
            vec!["go"]
        );
        // Swapped arguments swap the directional breakdown, not the score
        assert_eq!(forward.compatibility_score, reverse.compatibility_score);
        assert_eq!(
            forward.matching_factors.complementary_skills.user_unique_skills,
            reverse.matching_factors.complementary_skills.target_unique_skills
        );
    }

    #[test]
    fn test_one_sided_github_stats() {
        let now = Utc::now();
        let viewer = match_profile("a", &["Python"]);
        let mut candidate = match_profile("b", &["Python"]);
        candidate.github = Some(GitHubStats {
            user_id: "b".to_string(),
            repositories: 40,
            contributions: 900,
            followers: 120,
            top_languages: vec!["Python".to_string()],
            last_push: Some(now - Duration::days(1)),
        });

        let result =
            calculate_compatibility_score(&viewer, &candidate, &ScoringWeights::default(), now);

        assert_eq!(
            result.matching_factors.github_activity_level,
            GithubActivityLevel::OneActive
        );
    }

    #[test]
    fn test_frameworks_count_toward_overlap() {
        let base = match_profile("a", &["Python"]);
        let mut with_frameworks = match_profile("b", &["Python"]);
        with_frameworks.profile.frameworks = vec!["React".to_string()];
        let mut viewer = base.clone();
        viewer.profile.frameworks = vec!["React".to_string()];

        let result = calculate_compatibility_score(
            &viewer,
            &with_frameworks,
            &ScoringWeights::default(),
            Utc::now(),
        );

        assert_eq!(result.matching_factors.shared_frameworks, vec!["react"]);
        assert_eq!(result.matching_factors.strength_areas, vec!["python", "react"]);
    }
}
