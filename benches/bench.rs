// Criterion benchmarks for HackMate Algo

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hackmate_algo::core::{calculate_compatibility_score, factors, Matcher};
use hackmate_algo::models::{
    ExperienceLevel, GitHubStats, HackathonStats, Location, MatchProfile, ScoringWeights,
    UserProfile,
};

fn create_candidate(id: usize) -> MatchProfile {
    let skills = match id % 4 {
        0 => vec!["Python", "Rust"],
        1 => vec!["JavaScript", "TypeScript"],
        2 => vec!["Go", "Python"],
        _ => vec!["Java", "Kotlin"],
    };

    MatchProfile {
        profile: UserProfile {
            user_id: id.to_string(),
            name: Some(format!("User {}", id)),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            frameworks: vec!["React".to_string()],
            experience_level: Some(match id % 4 {
                0 => ExperienceLevel::Beginner,
                1 => ExperienceLevel::Intermediate,
                2 => ExperienceLevel::Advanced,
                _ => ExperienceLevel::Expert,
            }),
            location: Some(Location {
                city: Some(if id % 2 == 0 { "Berlin" } else { "Munich" }.to_string()),
                state: None,
                country: Some("Germany".to_string()),
            }),
            looking_for_team: true,
            last_active: Some(Utc::now() - Duration::days((id % 120) as i64)),
        },
        hackathon: Some(HackathonStats {
            user_id: id.to_string(),
            participated: (id % 10) as u32,
            won: (id % 3) as u32,
            win_rate: 0.2,
            favorite_categories: vec!["AI".to_string()],
            last_participation: None,
        }),
        github: Some(GitHubStats {
            user_id: id.to_string(),
            repositories: (id % 30) as u32,
            contributions: (id * 7 % 500) as u32,
            followers: (id % 80) as u32,
            top_languages: vec![],
            last_push: Some(Utc::now() - Duration::days((id % 90) as i64)),
        }),
    }
}

fn create_viewer() -> MatchProfile {
    create_candidate(0)
}

fn bench_pair_scoring(c: &mut Criterion) {
    let viewer = create_viewer();
    let candidate = create_candidate(2);
    let weights = ScoringWeights::default();
    let now = Utc::now();

    c.bench_function("calculate_compatibility_score", |b| {
        b.iter(|| {
            calculate_compatibility_score(
                black_box(&viewer),
                black_box(&candidate),
                black_box(&weights),
                black_box(now),
            )
        });
    });
}

fn bench_skill_normalization(c: &mut Criterion) {
    let skills: Vec<String> = ["Python", "JavaScript", "TypeScript", "Rust", "Go", "Java"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    c.bench_function("normalize_terms", |b| {
        b.iter(|| factors::normalize_terms(black_box(&skills)));
    });
}

fn bench_batch_scoring(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let viewer = create_viewer();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10usize, 50, 100, 500, 1000].iter() {
        let candidates: Vec<MatchProfile> =
            (1..=*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("score_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.score_candidates(
                        black_box(&viewer),
                        black_box(candidates.clone()),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pair_scoring,
    bench_skill_normalization,
    bench_batch_scoring
);

criterion_main!(benches);
