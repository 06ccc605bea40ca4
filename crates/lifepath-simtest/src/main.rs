//! LifePath Headless Session Harness
//!
//! Validates quiz content and state machine behaviour without a terminal.
//! Runs entirely in-process: scripted scenarios plus a sweep of seeded
//! random sessions that check the scoring and stat invariants after every event.
//!
//! Usage:
//!   cargo run -p lifepath-simtest
//!   cargo run -p lifepath-simtest -- --verbose
//!   cargo run -p lifepath-simtest -- --json --seed 7 --sessions 2000

use lifepath_logic::catalog::{Catalog, Challenge, CompanionText, Stage};
use lifepath_logic::display::RecordingDisplay;
use lifepath_logic::error::{CatalogError, QuizError};
use lifepath_logic::outcome::OutcomeTier;
use lifepath_logic::quiz::{Advance, Phase, Quiz};
use lifepath_logic::session::{Handled, InputEvent, Session};
use lifepath_logic::stats::{StatKind, StatSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

// ── Harness options ─────────────────────────────────────────────────────

struct HarnessArgs {
    verbose: bool,
    json: bool,
    seed: u64,
    sessions: usize,
}

impl Default for HarnessArgs {
    fn default() -> Self {
        Self {
            verbose: false,
            json: false,
            seed: 42,
            sessions: 500,
        }
    }
}

impl HarnessArgs {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args)
    }

    fn parse(args: &[String]) -> Result<Self, String> {
        let mut config = Self::default();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--verbose" | "-v" => {
                    config.verbose = true;
                    i += 1;
                }
                "--json" => {
                    config.json = true;
                    i += 1;
                }
                "--seed" => {
                    config.seed = flag_value(args, i)?;
                    i += 2;
                }
                "--sessions" => {
                    config.sessions = flag_value(args, i)?;
                    i += 2;
                }
                _ => i += 1,
            }
        }
        Ok(config)
    }

    fn section(&self, title: &str) {
        if !self.json {
            println!("--- {} ---", title);
        }
    }
}

fn flag_value<T: std::str::FromStr>(args: &[String], i: usize) -> Result<T, String> {
    let flag = &args[i];
    let raw = args.get(i + 1).ok_or_else(|| format!("{flag} needs a value"))?;
    raw.parse().map_err(|_| format!("invalid value for {flag}: '{raw}'"))
}

// ── Test harness ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn check(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    seed: u64,
    sessions: usize,
    passed: usize,
    failed: usize,
    results: &'a [TestResult],
}

fn main() {
    let args = match HarnessArgs::from_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };
    if !args.json {
        println!("=== LifePath Session Harness ===\n");
    }

    let mut results = Vec::new();

    // 1. Content catalog validation
    results.extend(validate_catalog(&args));

    // 2. Full-session scenarios
    results.extend(validate_scenarios(&args));

    // 3. Rejected input
    results.extend(validate_rejections(&args));

    // 4. Seeded random sessions
    results.extend(validate_random_sessions(&args));

    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    if args.json {
        let report = Report {
            seed: args.seed,
            sessions: args.sessions,
            passed,
            failed,
            results: &results,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("failed to serialize report: {}", e);
                std::process::exit(2);
            }
        }
    } else {
        println!();
        for r in &results {
            let icon = if r.passed { "✓" } else { "✗" };
            if !r.passed || args.verbose {
                println!("  {} {}: {}", icon, r.name, r.detail);
            }
        }
        println!(
            "\n=== RESULT: {}/{} passed, {} failed ===",
            passed,
            results.len(),
            failed
        );
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn standard_quiz() -> Option<Quiz> {
    Catalog::standard().ok().map(Quiz::new)
}

/// Play a whole catalog choosing `pick(stage, challenge)` each time.
fn play(
    quiz: &mut Quiz,
    pick: impl Fn(usize, usize) -> usize,
) -> Option<(u32, OutcomeTier, StatSet)> {
    quiz.start().ok()?;
    loop {
        let (stage, challenge) = match quiz.phase() {
            Phase::AwaitingAnswer { stage, challenge } => (stage, challenge),
            _ => return None,
        };
        quiz.submit_answer(pick(stage, challenge)).ok()?;
        if let Advance::Finished(s) = quiz.advance().ok()? {
            return Some((s.final_score, s.tier, s.stats));
        }
    }
}

fn all_stats_equal(stats: &StatSet, value: i32) -> bool {
    stats.iter().all(|(_, v)| v == value)
}

fn one_challenge_stage(options: usize, answer: usize) -> Stage {
    Stage {
        title: "Fixture".into(),
        theme: "fixture".into(),
        challenges: vec![Challenge {
            prompt: "fixture".into(),
            options: (0..options).map(|i| format!("option {i}")).collect(),
            answer,
            feedback: String::new(),
        }],
    }
}

// ── 1. Catalog ──────────────────────────────────────────────────────────

fn validate_catalog(args: &HarnessArgs) -> Vec<TestResult> {
    args.section("Content Catalog");
    let mut results = Vec::new();

    let catalog = match Catalog::standard() {
        Ok(c) => c,
        Err(e) => {
            results.push(TestResult::check(
                "catalog_builds",
                false,
                format!("standard content rejected: {}", e),
            ));
            return results;
        }
    };
    results.push(TestResult::check("catalog_builds", true, "standard content validates"));

    results.push(TestResult::check(
        "catalog_five_stages",
        catalog.stage_count() == 5,
        format!("{} stages", catalog.stage_count()),
    ));
    results.push(TestResult::check(
        "catalog_ten_challenges",
        catalog.total_challenges() == 10 && catalog.max_score() == 100,
        format!(
            "{} challenges, max score {}",
            catalog.total_challenges(),
            catalog.max_score()
        ),
    ));

    let untagged: Vec<_> = catalog
        .stages()
        .iter()
        .filter(|s| s.theme.is_empty() || s.title.is_empty())
        .collect();
    results.push(TestResult::check(
        "catalog_titles_and_themes",
        untagged.is_empty(),
        if untagged.is_empty() {
            "every stage has a title and theme tag".to_string()
        } else {
            format!("{} stages missing title or theme", untagged.len())
        },
    ));

    results.push(TestResult::check(
        "catalog_stat_mapping",
        catalog.stat_map() == StatKind::ALL,
        format!("{:?}", catalog.stat_map()),
    ));

    let empty_feedback = catalog
        .stages()
        .iter()
        .flat_map(|s| s.challenges.iter())
        .filter(|c| c.feedback.trim().is_empty() || c.prompt.trim().is_empty())
        .count();
    results.push(TestResult::check(
        "catalog_feedback_present",
        empty_feedback == 0,
        format!("{} challenges without prompt or feedback", empty_feedback),
    ));

    let text = CompanionText::default();
    let two_options = Catalog::new(
        vec![one_challenge_stage(2, 0)],
        vec![StatKind::AttachmentSecurity],
        text.clone(),
    );
    results.push(TestResult::check(
        "catalog_rejects_two_options",
        matches!(two_options, Err(CatalogError::WrongOptionCount { found: 2, .. })),
        format!("{:?}", two_options.err()),
    ));

    let bad_answer = Catalog::new(
        vec![one_challenge_stage(3, 3)],
        vec![StatKind::AttachmentSecurity],
        text.clone(),
    );
    results.push(TestResult::check(
        "catalog_rejects_answer_index",
        matches!(bad_answer, Err(CatalogError::AnswerOutOfRange { answer: 3, .. })),
        format!("{:?}", bad_answer.err()),
    ));

    let short_map = Catalog::new(
        vec![one_challenge_stage(3, 0), one_challenge_stage(3, 1)],
        vec![StatKind::AttachmentSecurity],
        text,
    );
    results.push(TestResult::check(
        "catalog_rejects_short_mapping",
        matches!(short_map, Err(CatalogError::StatMappingMismatch { .. })),
        format!("{:?}", short_map.err()),
    ));

    if args.verbose && !args.json {
        for (i, stage) in catalog.stages().iter().enumerate() {
            println!(
                "    stage {}: {:20} {} challenges -> {}",
                i,
                stage.title,
                stage.challenges.len(),
                catalog
                    .stat_for_stage(i)
                    .map_or("unmapped", |k| k.label())
            );
        }
    }

    results
}

// ── 2. Scenarios ────────────────────────────────────────────────────────

fn validate_scenarios(args: &HarnessArgs) -> Vec<TestResult> {
    args.section("Scenarios");
    let mut results = Vec::new();

    let cases: [(&str, fn(usize, usize) -> usize, u32, OutcomeTier); 3] = [
        ("scenario_all_correct", |_, _| 0, 100, OutcomeTier::Excellent),
        ("scenario_all_incorrect", |_, _| 2, 0, OutcomeTier::NeedsReview),
        (
            "scenario_three_misses",
            |stage, ch| if ch == 0 && stage < 3 { 1 } else { 0 },
            70,
            OutcomeTier::Good,
        ),
    ];

    for (name, pick, expected_score, expected_tier) in cases {
        let outcome = standard_quiz().and_then(|mut q| play(&mut q, pick));
        let (passed, detail) = match outcome {
            Some((score, tier, stats)) => (
                score == expected_score && tier == expected_tier,
                format!(
                    "score={} tier={:?} stats=[{}]",
                    score,
                    tier,
                    stats
                        .iter()
                        .map(|(_, v)| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                ),
            ),
            None => (false, "session did not finish".to_string()),
        };
        results.push(TestResult::check(name, passed, detail));
    }

    let correct_stats = standard_quiz().and_then(|mut q| play(&mut q, |_, _| 0));
    results.push(TestResult::check(
        "scenario_all_correct_stats_70",
        correct_stats.is_some_and(|(_, _, s)| all_stats_equal(&s, 70)),
        "every stat +10 twice",
    ));
    let wrong_stats = standard_quiz().and_then(|mut q| play(&mut q, |_, _| 1));
    results.push(TestResult::check(
        "scenario_all_incorrect_stats_40",
        wrong_stats.is_some_and(|(_, _, s)| all_stats_equal(&s, 40)),
        "every stat -5 twice",
    ));

    // Progress on the final challenge stays below 1.0
    let last_progress = standard_quiz().and_then(|mut q| {
        q.start().ok()?;
        for _ in 0..9 {
            q.submit_answer(0).ok()?;
            q.advance().ok()?;
        }
        Some(q.progress())
    });
    results.push(TestResult::check(
        "scenario_progress_below_one",
        last_progress.is_some_and(|p| p < 1.0 && (p - 0.9).abs() < 1e-9),
        format!("final challenge progress = {:?}", last_progress),
    ));

    results
}

// ── 3. Rejections ───────────────────────────────────────────────────────

fn validate_rejections(args: &HarnessArgs) -> Vec<TestResult> {
    args.section("Rejected Input");
    let mut results = Vec::new();

    let Some(mut quiz) = standard_quiz() else {
        results.push(TestResult::check("rejections_setup", false, "catalog failed"));
        return results;
    };
    if let Err(e) = quiz.start() {
        results.push(setup_failure("start", e));
        return results;
    }

    let before = fingerprint(&quiz);
    let out_of_range = quiz.submit_answer(5);
    results.push(TestResult::check(
        "reject_option_5",
        matches!(out_of_range, Err(QuizError::OptionOutOfRange { index: 5, .. }))
            && fingerprint(&quiz) == before,
        format!("{:?}", out_of_range.err()),
    ));

    if let Err(e) = quiz.submit_answer(0) {
        results.push(setup_failure("first answer", e));
        return results;
    }
    if let Err(e) = quiz.advance() {
        results.push(setup_failure("first continue", e));
        return results;
    }
    let before = fingerprint(&quiz);
    let second = quiz.advance();
    results.push(TestResult::check(
        "reject_double_continue",
        second.is_err() && fingerprint(&quiz) == before,
        format!("phase stays {:?}", quiz.phase()),
    ));

    let before = fingerprint(&quiz);
    let restart_guard = quiz.start();
    results.push(TestResult::check(
        "reject_double_start",
        restart_guard.is_err() && fingerprint(&quiz) == before,
        format!("{:?}", restart_guard.err()),
    ));

    if let Err(e) = quiz.submit_answer(0) {
        results.push(setup_failure("second answer", e));
        return results;
    }
    let before = fingerprint(&quiz);
    let twice = quiz.submit_answer(0);
    results.push(TestResult::check(
        "reject_second_answer",
        twice.is_err() && fingerprint(&quiz) == before,
        format!("score stays {}", quiz.score()),
    ));

    results
}

fn setup_failure(step: &str, e: QuizError) -> TestResult {
    TestResult::check("rejections_setup", false, format!("{step} failed: {e}"))
}

// ── 4. Random sessions ──────────────────────────────────────────────────

type Fingerprint = (Phase, u32, StatSet, bool, usize, usize);

fn fingerprint(quiz: &Quiz) -> Fingerprint {
    let s = quiz.state();
    (
        s.phase,
        s.score,
        s.stats(),
        s.answered,
        s.stage_index,
        s.challenge_index,
    )
}

fn random_event(rng: &mut StdRng) -> InputEvent {
    match rng.gen_range(0..100) {
        0..=39 => InputEvent::SelectOption(rng.gen_range(0..3)),
        40..=49 => InputEvent::SelectOption(rng.gen_range(3..8)),
        50..=84 => InputEvent::Continue,
        85..=89 => InputEvent::Start,
        90..=94 => InputEvent::Restart,
        _ => InputEvent::Quit,
    }
}

#[derive(Default)]
struct SweepTally {
    events: usize,
    rejected: usize,
    rejected_mutations: usize,
    score_violations: usize,
    stat_violations: usize,
    restart_violations: usize,
    finish_violations: usize,
    finishes: usize,
    tiers: [usize; 3],
}

fn validate_random_sessions(args: &HarnessArgs) -> Vec<TestResult> {
    args.section("Random Sessions");
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut t = SweepTally::default();

    for _ in 0..args.sessions {
        let Ok(catalog) = Catalog::standard() else {
            return vec![TestResult::check("random_setup", false, "catalog failed")];
        };
        let mut session = Session::new(catalog);
        let mut display = RecordingDisplay::new();
        let mut awarded = 0u32;
        let mut finished_this_run = 0;

        for _ in 0..120 {
            let event = random_event(&mut rng);
            let before = fingerprint(session.quiz());
            let stage = session.quiz().state().stage_index;
            let result = session.handle(event, &mut display);
            let after = fingerprint(session.quiz());
            t.events += 1;

            match result {
                Err(_) => {
                    t.rejected += 1;
                    if before != after {
                        t.rejected_mutations += 1;
                    }
                }
                Ok(Handled::FeedbackShown) => {
                    let gained = after.1.saturating_sub(before.1);
                    let changed: Vec<StatKind> = StatKind::ALL
                        .iter()
                        .copied()
                        .filter(|&k| before.2.get(k) != after.2.get(k))
                        .collect();
                    if after.1 < before.1 || (gained != 0 && gained != 10) {
                        t.score_violations += 1;
                    }
                    if changed != [StatKind::ALL[stage]] {
                        t.stat_violations += 1;
                    }
                    awarded += gained;
                }
                Ok(Handled::ChallengeShown)
                    if matches!(event, InputEvent::Start | InputEvent::Restart) =>
                {
                    if after.1 != 0 || after.2 != StatSet::default() {
                        t.restart_violations += 1;
                    }
                    awarded = 0;
                    finished_this_run = 0;
                }
                Ok(Handled::Finished) => {
                    finished_this_run += 1;
                    t.finishes += 1;
                    if finished_this_run > 1
                        || after.0 != (Phase::Finished { final_score: awarded })
                    {
                        t.finish_violations += 1;
                    }
                    if let Phase::Finished { final_score } = after.0 {
                        let max = session.quiz().catalog().max_score();
                        let tier = OutcomeTier::from_score(final_score, max);
                        t.tiers[tier as usize] += 1;
                    }
                }
                Ok(_) => {
                    if after.1 < before.1 {
                        t.score_violations += 1;
                    }
                }
            }
        }
    }

    if args.verbose && !args.json {
        println!(
            "  {} events, {} rejected, {} finishes (excellent={} good={} review={})",
            t.events, t.rejected, t.finishes, t.tiers[0], t.tiers[1], t.tiers[2]
        );
    }

    vec![
        TestResult::check(
            "random_rejections_harmless",
            t.rejected_mutations == 0,
            format!(
                "{} of {} rejected events mutated state",
                t.rejected_mutations, t.rejected
            ),
        ),
        TestResult::check(
            "random_score_monotonic",
            t.score_violations == 0,
            format!("{} score violations in {} events", t.score_violations, t.events),
        ),
        TestResult::check(
            "random_single_stat_change",
            t.stat_violations == 0,
            format!("{} answers changed the wrong stats", t.stat_violations),
        ),
        TestResult::check(
            "random_restart_resets",
            t.restart_violations == 0,
            format!("{} restarts left residue", t.restart_violations),
        ),
        TestResult::check(
            "random_finish_once_with_sum",
            t.finish_violations == 0,
            format!(
                "{} finishes, {} with wrong score or repeated",
                t.finishes, t.finish_violations
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<HarnessArgs, String> {
        let owned: Vec<String> = list.iter().map(|s| s.to_string()).collect();
        HarnessArgs::parse(&owned)
    }

    fn quiet() -> HarnessArgs {
        HarnessArgs {
            json: true,
            ..HarnessArgs::default()
        }
    }

    #[test]
    fn parses_seed_and_sessions() {
        let a = args(&["--json", "--seed", "7", "--sessions", "20"]).unwrap();
        assert!(a.json);
        assert_eq!(a.seed, 7);
        assert_eq!(a.sessions, 20);
    }

    #[test]
    fn bad_seed_is_reported() {
        let err = args(&["--seed", "abc"]).err().unwrap();
        assert_eq!(err, "invalid value for --seed: 'abc'");
    }

    #[test]
    fn bad_or_missing_sessions_is_reported() {
        assert!(args(&["--sessions", "-3"]).is_err());
        let err = args(&["--sessions"]).err().unwrap();
        assert_eq!(err, "--sessions needs a value");
    }

    #[test]
    fn setup_failure_names_the_step() {
        let r = setup_failure(
            "start",
            QuizError::NotPermitted {
                action: lifepath_logic::error::Action::Start,
                phase: "finished",
            },
        );
        assert_eq!(r.name, "rejections_setup");
        assert!(!r.passed);
        assert_eq!(r.detail, "start failed: cannot start while finished");
    }

    #[test]
    fn standard_content_passes_every_section() {
        let a = HarnessArgs {
            sessions: 20,
            ..quiet()
        };
        let results: Vec<TestResult> = [
            validate_catalog(&a),
            validate_scenarios(&a),
            validate_rejections(&a),
            validate_random_sessions(&a),
        ]
        .into_iter()
        .flatten()
        .collect();
        let failed: Vec<_> = results.iter().filter(|r| !r.passed).collect();
        assert!(failed.is_empty(), "failed checks: {failed:?}");
        assert!(results.iter().all(|r| r.name != "rejections_setup"));
    }
}
