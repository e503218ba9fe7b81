use crate::models::contest::Contest;
use chrono::{DateTime, TimeDelta, Utc};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How often consumers resample `now`
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Temporal state of a contest relative to a sampled instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContestPhase {
    Upcoming,
    Running,
    Ended,
}

impl ContestPhase {
    pub fn label(&self) -> &'static str {
        match self {
            ContestPhase::Upcoming => "Upcoming",
            ContestPhase::Running => "Running",
            ContestPhase::Ended => "Ended",
        }
    }

    /// Badge class used by the portal stylesheet
    pub fn css_class(&self) -> &'static str {
        match self {
            ContestPhase::Upcoming => "status-badge status-upcoming",
            ContestPhase::Running => "status-badge status-running",
            ContestPhase::Ended => "status-badge status-done",
        }
    }

    /// Caption shown in front of the countdown
    pub fn countdown_caption(&self) -> &'static str {
        match self {
            ContestPhase::Upcoming => "Starts in",
            ContestPhase::Running => "Ends in",
            ContestPhase::Ended => "Finished",
        }
    }
}

impl fmt::Display for ContestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The contest a dashboard should highlight.
///
/// `phase` is `Some(Upcoming)` or `Some(Running)` whenever `contest` is set and
/// `None` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedSelection {
    pub contest: Option<Contest>,
    pub phase: Option<ContestPhase>,
}

impl FeaturedSelection {
    pub fn none() -> Self {
        Self {
            contest: None,
            phase: None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.contest.is_none()
    }

    /// Time left on the featured contest's countdown, zero when nothing is featured
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        self.contest
            .as_ref()
            .map(|contest| ContestClock::remaining(contest, now))
            .unwrap_or(Duration::ZERO)
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> Option<ContestDisplay> {
        self.contest
            .as_ref()
            .map(|contest| ContestClock::snapshot(contest, now))
    }
}

/// Everything a view needs to render one contest for one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestDisplay {
    pub phase: ContestPhase,
    /// Instant the countdown runs toward, `None` once the contest is over
    pub target: Option<DateTime<Utc>>,
    pub remaining: Duration,
    pub countdown: String,
}

/// Contests grouped by phase, each group in display order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContestBuckets<'a> {
    /// Soonest start first
    pub upcoming: Vec<&'a Contest>,
    /// Soonest end first
    pub running: Vec<&'a Contest>,
    /// Most recently finished first
    pub ended: Vec<&'a Contest>,
}

impl ContestBuckets<'_> {
    pub fn len(&self) -> usize {
        self.upcoming.len() + self.running.len() + self.ended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Phase, selection and countdown rules for contests.
///
/// Every function takes `now` as an argument; only [`SystemClock`] reads the
/// wall clock.
pub struct ContestClock;

impl ContestClock {
    /// Classifies a contest at `now`.
    ///
    /// The running interval is `[start_time, end_time)`. A degenerate contest
    /// (start not before end) is upcoming until its start and ended after it.
    pub fn classify(contest: &Contest, now: DateTime<Utc>) -> ContestPhase {
        if now < contest.start_time {
            ContestPhase::Upcoming
        } else if now < contest.end_time {
            ContestPhase::Running
        } else {
            ContestPhase::Ended
        }
    }

    /// Picks the featured contest from the full set.
    ///
    /// A running contest wins over any upcoming one; among running contests the
    /// one ending soonest is chosen, among upcoming ones the one starting
    /// soonest. Ties go to the smaller ID.
    pub fn select_featured(contests: &[Contest], now: DateTime<Utc>) -> FeaturedSelection {
        let running = contests
            .iter()
            .filter(|c| Self::classify(c, now) == ContestPhase::Running)
            .min_by_key(|c| (c.end_time, c.id));

        if let Some(contest) = running {
            trace!("Featuring running contest {}", contest.id);
            return FeaturedSelection {
                contest: Some(contest.clone()),
                phase: Some(ContestPhase::Running),
            };
        }

        let upcoming = contests
            .iter()
            .filter(|c| Self::classify(c, now) == ContestPhase::Upcoming)
            .min_by_key(|c| (c.start_time, c.id));

        match upcoming {
            Some(contest) => {
                trace!("Featuring upcoming contest {}", contest.id);
                FeaturedSelection {
                    contest: Some(contest.clone()),
                    phase: Some(ContestPhase::Upcoming),
                }
            }
            None => {
                trace!("No contest to feature among {}", contests.len());
                FeaturedSelection::none()
            }
        }
    }

    /// Instant the countdown heads toward in the current phase
    pub fn target_instant(contest: &Contest, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match Self::classify(contest, now) {
            ContestPhase::Upcoming => Some(contest.start_time),
            ContestPhase::Running => Some(contest.end_time),
            ContestPhase::Ended => None,
        }
    }

    /// Time until the contest starts (upcoming) or ends (running), never negative
    pub fn remaining(contest: &Contest, now: DateTime<Utc>) -> Duration {
        Self::target_instant(contest, now)
            .map(|target| clamp_to_std(target - now))
            .unwrap_or(Duration::ZERO)
    }

    /// Renders `HH:MM:SS`. Hours grow past two digits instead of wrapping.
    pub fn format_duration(duration: Duration) -> String {
        let total = duration.as_secs();
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }

    /// Same as [`ContestClock::format_duration`] for a signed span; negative spans show as zero
    pub fn format_time_delta(delta: TimeDelta) -> String {
        Self::format_duration(clamp_to_std(delta))
    }

    pub fn snapshot(contest: &Contest, now: DateTime<Utc>) -> ContestDisplay {
        let phase = Self::classify(contest, now);
        let remaining = Self::remaining(contest, now);
        ContestDisplay {
            phase,
            target: Self::target_instant(contest, now),
            remaining,
            countdown: Self::format_duration(remaining),
        }
    }

    /// Contests running at `now`, in input order
    pub fn running(contests: &[Contest], now: DateTime<Utc>) -> Vec<&Contest> {
        contests
            .iter()
            .filter(|c| Self::classify(c, now) == ContestPhase::Running)
            .collect()
    }

    pub fn partition(contests: &[Contest], now: DateTime<Utc>) -> ContestBuckets<'_> {
        let mut buckets = ContestBuckets::default();
        for contest in contests {
            match Self::classify(contest, now) {
                ContestPhase::Upcoming => buckets.upcoming.push(contest),
                ContestPhase::Running => buckets.running.push(contest),
                ContestPhase::Ended => buckets.ended.push(contest),
            }
        }
        buckets.upcoming.sort_by_key(|c| (c.start_time, c.id));
        buckets.running.sort_by_key(|c| (c.end_time, c.id));
        buckets
            .ended
            .sort_by(|a, b| b.end_time.cmp(&a.end_time).then(a.id.cmp(&b.id)));
        buckets
    }
}

fn clamp_to_std(delta: TimeDelta) -> Duration {
    delta.to_std().unwrap_or(Duration::ZERO)
}


#[cfg(test)]
mod properties {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn contest(id: i64, start: DateTime<Utc>, end: DateTime<Utc>) -> Contest {
        Contest {
            id,
            name: format!("Round {}", id),
            start_time: start,
            end_time: end,
        }
    }

    fn secs(s: i64) -> TimeDelta {
        TimeDelta::seconds(s)
    }

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    prop_compose! {
        fn arb_contest()(
            id in 0i64..1_000,
            start in -500_000i64..500_000,
            length in -10_000i64..400_000,
        ) -> Contest {
            contest(id, base() + secs(start), base() + secs(start + length))
        }
    }

    proptest! {
        #[test]
        fn boundaries_hold_for_valid_contests(
            start in -500_000i64..500_000,
            length in 1i64..400_000,
        ) {
            let s = base() + secs(start);
            let c = contest(1, s, s + secs(length));
            prop_assert_eq!(ContestClock::classify(&c, c.start_time), ContestPhase::Running);
            prop_assert_eq!(ContestClock::classify(&c, c.start_time - secs(1)), ContestPhase::Upcoming);
            prop_assert_eq!(ContestClock::classify(&c, c.end_time), ContestPhase::Ended);
            prop_assert_eq!(ContestClock::classify(&c, c.end_time - secs(1)), ContestPhase::Running);
        }

        #[test]
        fn degenerate_is_never_running(
            start in -500_000i64..500_000,
            shrink in 0i64..100_000,
            probe in -600_000i64..600_000,
        ) {
            let s = base() + secs(start);
            let c = contest(1, s, s - secs(shrink));
            prop_assert_ne!(ContestClock::classify(&c, base() + secs(probe)), ContestPhase::Running);
        }

        #[test]
        fn remaining_non_increasing_within_phase(
            c in arb_contest(),
            a in -600_000i64..600_000,
            step in 0i64..10_000,
        ) {
            let t1 = base() + secs(a);
            let t2 = t1 + secs(step);
            if ContestClock::classify(&c, t1) == ContestClock::classify(&c, t2) {
                prop_assert!(ContestClock::remaining(&c, t1) >= ContestClock::remaining(&c, t2));
            }
        }

        #[test]
        fn selection_ignores_input_order(
            mut contests in proptest::collection::vec(arb_contest(), 0..8),
            probe in -600_000i64..600_000,
        ) {
            let now = base() + secs(probe);
            let forward = ContestClock::select_featured(&contests, now);
            contests.reverse();
            let backward = ContestClock::select_featured(&contests, now);
            prop_assert_eq!(forward.contest.map(|c| c.id), backward.contest.map(|c| c.id));
            prop_assert_eq!(forward.phase, backward.phase);
        }

        #[test]
        fn selection_phase_matches_classification(
            contests in proptest::collection::vec(arb_contest(), 0..8),
            probe in -600_000i64..600_000,
        ) {
            let now = base() + secs(probe);
            let selection = ContestClock::select_featured(&contests, now);
            match (&selection.contest, selection.phase) {
                (Some(c), Some(phase)) => {
                    prop_assert_eq!(ContestClock::classify(c, now), phase);
                    prop_assert_ne!(phase, ContestPhase::Ended);
                }
                (None, None) => {
                    prop_assert!(contests.iter().all(|c| ContestClock::classify(c, now) == ContestPhase::Ended));
                }
                _ => prop_assert!(false, "contest and phase must agree"),
            }
        }

        #[test]
        fn format_round_trips_fields(total in 0u64..2_000_000) {
            let text = ContestClock::format_duration(Duration::from_secs(total));
            let parts: Vec<u64> = text.split(':').map(|p| p.parse().unwrap()).collect();
            prop_assert_eq!(parts.len(), 3);
            prop_assert!(parts[1] < 60 && parts[2] < 60);
            prop_assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], total);
        }
    }
}
