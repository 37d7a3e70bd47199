use crate::core::scoring::SubScores;
use crate::models::{GithubActivityLevel, LocationMatch, MatchingFactors, ScoringWeights};

/// Fraction of a factor's budget it must contribute to earn a rationale line
const CONTRIBUTION_THRESHOLD: f64 = 0.5;

/// Generate the ordered "why you'd work well together" rationale list
///
/// Each factor that cleared its contribution threshold emits one short
/// display string; entries are ordered by descending factor weight. The list
/// is advisory only and never feeds back into the numeric score.
pub fn why_great_together(
    factors: &MatchingFactors,
    sub_scores: &SubScores,
    weights: &ScoringWeights,
) -> Vec<String> {
    let mut reasons: Vec<(f64, String)> = Vec::new();

    if !factors.shared_languages.is_empty() || !factors.shared_frameworks.is_empty() {
        let mut shared = factors.shared_languages.clone();
        shared.extend(factors.shared_frameworks.clone());
        shared.sort();
        shared.dedup();
        reasons.push((weights.skills, format!("You both work with {}", list_phrase(&shared))));
    }

    if factors.experience_gap == 0 {
        reasons.push((weights.experience, "Matching experience levels".to_string()));
    } else if factors.experience_gap == 1 {
        reasons.push((weights.experience, "Similar experience levels".to_string()));
    }

    if factors.github_activity_level == GithubActivityLevel::BothActive {
        reasons.push((weights.github, "Both are active on GitHub".to_string()));
    }

    if sub_scores.hackathon >= weights.hackathon * CONTRIBUTION_THRESHOLD {
        reasons.push((weights.hackathon, "Comparable hackathon track records".to_string()));
    }
    if !factors.shared_interests.is_empty() {
        reasons.push((
            weights.hackathon,
            format!("Both enjoy {} hackathons", list_phrase(&factors.shared_interests)),
        ));
    }

    match factors.location_match {
        LocationMatch::SameCity => {
            reasons.push((weights.location, "Based in the same city".to_string()))
        }
        LocationMatch::SameState => {
            reasons.push((weights.location, "Based in the same region".to_string()))
        }
        LocationMatch::SameCountry => {
            reasons.push((weights.location, "Based in the same country".to_string()))
        }
        LocationMatch::NoMatch => {}
    }

    if sub_scores.recency >= weights.recency {
        reasons.push((weights.recency, "Both have been active recently".to_string()));
    }

    // Stable sort keeps insertion order for equal weights
    reasons.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    reasons.into_iter().map(|(_, reason)| reason).collect()
}

/// Join terms into a short readable phrase, capped at three entries
fn list_phrase(terms: &[String]) -> String {
    match terms.len() {
        0 => String::new(),
        1 => terms[0].clone(),
        2 => format!("{} and {}", terms[0], terms[1]),
        3 => format!("{}, {} and {}", terms[0], terms[1], terms[2]),
        n => format!("{}, {} and {} more", terms[0], terms[1], n - 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComplementarySkills;

    fn empty_factors() -> MatchingFactors {
        MatchingFactors {
            shared_languages: vec![],
            shared_frameworks: vec![],
            complementary_skills: ComplementarySkills {
                user_unique_skills: vec![],
                target_unique_skills: vec![],
            },
            experience_gap: 3,
            location_match: LocationMatch::NoMatch,
            github_activity_level: GithubActivityLevel::NeitherActive,
            shared_interests: vec![],
            strength_areas: vec![],
            why_great_together: vec![],
        }
    }

    #[test]
    fn test_no_reasons_for_empty_factors() {
        let reasons =
            why_great_together(&empty_factors(), &SubScores::default(), &ScoringWeights::default());
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_reasons_ordered_by_weight() {
        let mut factors = empty_factors();
        factors.shared_languages = vec!["python".to_string()];
        factors.location_match = LocationMatch::SameCity;
        factors.github_activity_level = GithubActivityLevel::BothActive;

        let reasons =
            why_great_together(&factors, &SubScores::default(), &ScoringWeights::default());

        assert_eq!(reasons[0], "You both work with python");
        assert_eq!(reasons[1], "Both are active on GitHub");
        assert_eq!(reasons[2], "Based in the same city");
    }

    #[test]
    fn test_shared_interests_reason() {
        let mut factors = empty_factors();
        factors.shared_interests = vec!["ai".to_string(), "fintech".to_string()];

        let reasons =
            why_great_together(&factors, &SubScores::default(), &ScoringWeights::default());

        assert_eq!(reasons, vec!["Both enjoy ai and fintech hackathons"]);
    }

    #[test]
    fn test_recency_reason_requires_full_marks() {
        let factors = empty_factors();
        let weights = ScoringWeights::default();

        let half = SubScores { recency: weights.recency * 0.5, ..SubScores::default() };
        assert!(why_great_together(&factors, &half, &weights).is_empty());

        let full = SubScores { recency: weights.recency, ..SubScores::default() };
        assert_eq!(
            why_great_together(&factors, &full, &weights),
            vec!["Both have been active recently"]
        );
    }

    #[test]
    fn test_list_phrase_caps_long_lists() {
        let terms: Vec<String> =
            ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        assert_eq!(list_phrase(&terms), "a, b and 3 more");
        assert_eq!(list_phrase(&terms[..2]), "a and b");
    }
}
