use crate::models::{ExperienceLevel, GitHubStats, GithubActivityLevel, Location, LocationMatch};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeSet;

/// Maximum ordinal gap between experience levels (Beginner vs Expert)
pub const MAX_EXPERIENCE_GAP: u8 = 3;

/// Contribution count at which an account is considered active
pub const ACTIVE_MIN_CONTRIBUTIONS: u32 = 100;
/// Repository count at which an account is considered active
pub const ACTIVE_MIN_REPOSITORIES: u32 = 15;
/// Follower count at which an account is considered active
pub const ACTIVE_MIN_FOLLOWERS: u32 = 50;
/// Contribution count at which an account is considered moderately active
pub const MODERATE_MIN_CONTRIBUTIONS: u32 = 20;
/// Repository count at which an account is considered moderately active
pub const MODERATE_MIN_REPOSITORIES: u32 = 3;

/// Window within which an activity signal counts as recent
pub const RECENT_ACTIVITY_DAYS: i64 = 60;

/// Single-account GitHub activity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ActivityBand {
    Inactive,
    Moderate,
    Active,
}

/// Normalize a list of skill/framework/category terms into a canonical set
///
/// Terms are trimmed, lowercased, and deduplicated. Empty terms are dropped.
pub fn normalize_terms(raw: &[String]) -> BTreeSet<String> {
    raw.iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Terms present in both sets, sorted
pub fn shared_terms(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Vec<String> {
    a.intersection(b).cloned().collect()
}

/// Terms present in `a` but not in `b`, sorted
pub fn unique_terms(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Vec<String> {
    a.difference(b).cloned().collect()
}

/// Jaccard ratio of two sets, 0 when both are empty
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Ordinal gap between experience levels
///
/// A missing level on either side is treated as the maximum gap, so the
/// experience factor degrades to zero instead of erroring.
pub fn experience_gap(a: Option<ExperienceLevel>, b: Option<ExperienceLevel>) -> u8 {
    match (a, b) {
        (Some(a), Some(b)) => a.rank().abs_diff(b.rank()),
        _ => MAX_EXPERIENCE_GAP,
    }
}

fn field_matches(a: &Option<String>, b: &Option<String>) -> Option<bool> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.trim().eq_ignore_ascii_case(b.trim())),
        _ => None,
    }
}

/// Classify the location relationship between two profiles
///
/// Most specific tier wins. A tier requires the broader fields to agree
/// wherever both sides supply them: two "Springfield"s in different countries
/// are not the same city.
pub fn location_match(a: Option<&Location>, b: Option<&Location>) -> LocationMatch {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return LocationMatch::NoMatch,
    };

    let city = field_matches(&a.city, &b.city);
    let state = field_matches(&a.state, &b.state);
    let country = field_matches(&a.country, &b.country);

    let broader_agree = |levels: &[Option<bool>]| levels.iter().all(|m| *m != Some(false));

    if city == Some(true) && broader_agree(&[state, country]) {
        LocationMatch::SameCity
    } else if state == Some(true) && broader_agree(&[country]) {
        LocationMatch::SameState
    } else if country == Some(true) {
        LocationMatch::SameCountry
    } else {
        LocationMatch::NoMatch
    }
}

/// Classify one account's GitHub activity from volume signals
///
/// Missing stats classify as Inactive so the pair-level factor degrades
/// instead of erroring.
pub fn activity_band(stats: Option<&GitHubStats>) -> ActivityBand {
    let stats = match stats {
        Some(stats) => stats,
        None => return ActivityBand::Inactive,
    };

    if stats.contributions >= ACTIVE_MIN_CONTRIBUTIONS
        || stats.repositories >= ACTIVE_MIN_REPOSITORIES
        || stats.followers >= ACTIVE_MIN_FOLLOWERS
    {
        ActivityBand::Active
    } else if stats.contributions >= MODERATE_MIN_CONTRIBUTIONS
        || stats.repositories >= MODERATE_MIN_REPOSITORIES
    {
        ActivityBand::Moderate
    } else {
        ActivityBand::Inactive
    }
}

/// Combine two activity bands into the pairwise classification
pub fn github_activity_level(a: ActivityBand, b: ActivityBand) -> GithubActivityLevel {
    match (a, b) {
        (ActivityBand::Active, ActivityBand::Active) => GithubActivityLevel::BothActive,
        (ActivityBand::Active, _) | (_, ActivityBand::Active) => GithubActivityLevel::OneActive,
        (ActivityBand::Moderate, ActivityBand::Moderate) => GithubActivityLevel::BothModerate,
        _ => GithubActivityLevel::NeitherActive,
    }
}

/// Whether an activity timestamp falls within the recency window
pub fn is_recently_active(last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last {
        Some(last) => now.signed_duration_since(last) <= Duration::days(RECENT_ACTIVITY_DAYS),
        None => false,
    }
}
