use crate::api::api_url;
use crate::api::contests::{contest_path, contests_path, next_page_url, partial_listing};
use crate::api::problems::{problem_path, problems_path, sort_problems};
use crate::components::countdown::countdown_label;
use crate::config::Config;
use crate::pages::contest_details::{ContestPageAction, ContestPageState, ProblemsSection};
use crate::pages::problem::{ProblemPageAction, ProblemPageState};
use crate::Route;
use chrono::{DateTime, TimeZone, Utc};
use shared::clock::{ContestClock, ContestPhase};
use shared::{Contest, ContestDto, Problem};
use std::rc::Rc;
use yew::prelude::Reducible;
use yew_router::Routable;

fn problem(id: i64, index: &str) -> Problem {
    Problem {
        id,
        contest: 2046,
        index: index.to_string(),
        name: String::new(),
        points: 0.0,
        rating: 0,
        url: String::new(),
        description_kr: String::new(),
    }
}

fn contest(id: i64, start: DateTime<Utc>) -> Contest {
    Contest {
        id,
        name: format!("CF-KR Round {}", id),
        start_time: start,
        end_time: start + chrono::TimeDelta::hours(2),
    }
}

fn record(id: i64) -> ContestDto {
    ContestDto {
        id,
        name: Some(format!("Round {}", id)),
        start_time: Some("2025-11-15T12:00:00Z".to_string()),
        end_time: Some("2025-11-15T14:00:00Z".to_string()),
    }
}

#[test]
fn test_api_paths() {
    assert_eq!(api_url(&contests_path()), "/api/contests/contests/");
    assert_eq!(contest_path(2046), "/api/contests/contests/2046/");
    assert_eq!(problems_path(2046), "/api/contests/problems/2046/");
    assert_eq!(problem_path(2046, 7), "/api/contests/problems/2046/7/");
}

#[test]
fn test_sort_problems_by_index() {
    let mut problems = vec![
        problem(1, "C"),
        problem(2, "B2"),
        problem(3, "A"),
        problem(4, "B1"),
    ];
    sort_problems(&mut problems);
    let order: Vec<&str> = problems.iter().map(|p| p.index.as_str()).collect();
    assert_eq!(order, vec!["A", "B1", "B2", "C"]);
}

#[test]
fn test_tick_interval_is_one_second() {
    assert_eq!(Config::tick_interval_ms(), 1000);
}

#[test]
fn test_countdown_label_per_phase() {
    let start = Utc.with_ymd_and_hms(2025, 11, 15, 12, 0, 0).unwrap();
    let contest = Contest {
        id: 12,
        name: "CF-KR Round 12".to_string(),
        start_time: start,
        end_time: start + chrono::TimeDelta::hours(2),
    };

    let before = ContestClock::snapshot(&contest, start - chrono::TimeDelta::seconds(3661));
    assert_eq!(countdown_label(&before), "Starts in 01:01:01");

    let during = ContestClock::snapshot(&contest, start + chrono::TimeDelta::minutes(30));
    assert_eq!(countdown_label(&during), "Ends in 01:30:00");

    let after = ContestClock::snapshot(&contest, start + chrono::TimeDelta::hours(3));
    assert_eq!(countdown_label(&after), "Finished");
}

#[test]
fn test_routes() {
    assert_eq!(
        Route::recognize("/contest/2046/problem/7"),
        Some(Route::Problem { contest_id: 2046, problem_id: 7 })
    );
    assert_eq!(
        Route::recognize("/contest/2046"),
        Some(Route::ContestDetails { contest_id: 2046 })
    );
    assert_eq!(Route::ContestDetails { contest_id: 5 }.to_path(), "/contest/5");
}

#[test]
fn test_next_page_url_keeps_path_and_query() {
    assert_eq!(
        next_page_url("http://api.example.test/api/contests/contests/?page=2"),
        "/api/contests/contests/?page=2"
    );
    assert_eq!(
        next_page_url("https://api.example.test:8443/api/contests/contests/?page=3"),
        "/api/contests/contests/?page=3"
    );
    assert_eq!(next_page_url("/api/contests/contests/?page=4"), "/api/contests/contests/?page=4");
    assert_eq!(next_page_url("https://api.example.test"), "/");
}

#[test]
fn test_partial_listing_keeps_loaded_pages() {
    let contests = partial_listing(vec![record(1), record(2)], 1, "HTTP 502".to_string()).unwrap();
    let ids: Vec<i64> = contests.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_partial_listing_fails_without_any_page() {
    assert_eq!(
        partial_listing(Vec::new(), 0, "HTTP 502".to_string()),
        Err("HTTP 502".to_string())
    );
}

#[test]
fn test_contest_page_keeps_countdown_when_problems_fail() {
    let start = Utc.with_ymd_and_hms(2025, 11, 15, 12, 0, 0).unwrap();
    let state = Rc::new(ContestPageState::default())
        .reduce(ContestPageAction::Load(12))
        .reduce(ContestPageAction::ContestLoaded(contest(12, start)))
        .reduce(ContestPageAction::ProblemsFailed {
            contest_id: 12,
            message: "HTTP 500".to_string(),
        });

    assert_eq!(state.contest.as_ref().map(|c| c.id), Some(12));
    assert!(state.contest_error.is_none());
    assert_eq!(
        state.problems_section(ContestPhase::Running),
        ProblemsSection::Failed("HTTP 500".to_string())
    );
    assert_eq!(state.problems_section(ContestPhase::Upcoming), ProblemsSection::Locked);
}

#[test]
fn test_contest_page_resets_on_new_route() {
    let start = Utc.with_ymd_and_hms(2025, 11, 15, 12, 0, 0).unwrap();
    let state = Rc::new(ContestPageState::default())
        .reduce(ContestPageAction::Load(12))
        .reduce(ContestPageAction::ContestLoaded(contest(12, start)))
        .reduce(ContestPageAction::ProblemsLoaded {
            contest_id: 12,
            problems: vec![problem(1, "A")],
        })
        .reduce(ContestPageAction::Load(13));

    assert_eq!(state.contest_id, Some(13));
    assert!(state.contest.is_none());
    assert!(state.problems.is_empty());
    assert_eq!(state.problems_section(ContestPhase::Ended), ProblemsSection::Table);

    // A late answer for the previous contest is ignored
    let state = state.reduce(ContestPageAction::ContestLoaded(contest(12, start)));
    assert!(state.contest.is_none());
}

#[test]
fn test_problem_page_resets_on_new_route() {
    let start = Utc.with_ymd_and_hms(2025, 11, 15, 12, 0, 0).unwrap();
    let state = Rc::new(ProblemPageState::default())
        .reduce(ProblemPageAction::Load { contest_id: 2046, problem_id: 1 })
        .reduce(ProblemPageAction::ContestLoaded(contest(2046, start)))
        .reduce(ProblemPageAction::ProblemLoaded(problem(1, "A")))
        .reduce(ProblemPageAction::Load { contest_id: 2046, problem_id: 2 });

    assert_eq!(state.ids, Some((2046, 2)));
    assert!(state.contest.is_none());
    assert!(state.problem.is_none());

    let state = state
        .reduce(ProblemPageAction::ProblemLoaded(problem(1, "A")))
        .reduce(ProblemPageAction::Failed {
            contest_id: 2046,
            problem_id: 1,
            message: "HTTP 404".to_string(),
        });
    assert!(state.problem.is_none());
    assert!(state.error.is_none());
}
