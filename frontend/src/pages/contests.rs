use crate::api::contests::fetch_contests;
use crate::clock::use_clock;
use crate::components::countdown::{countdown_label, PhaseBadge};
use crate::Route;
use chrono::{DateTime, Utc};
use log::warn;
use shared::clock::ContestClock;
use shared::Contest;
use yew::prelude::*;
use yew_router::prelude::*;

fn contest_rows(contests: &[&Contest], now: DateTime<Utc>) -> Html {
    html! {
        { for contests.iter().map(|contest| {
            let display = ContestClock::snapshot(contest, now);
            html! {
                <tr key={contest.id}>
                    <td>
                        <Link<Route> to={Route::ContestDetails { contest_id: contest.id }}>
                            {contest.name.clone()}
                        </Link<Route>>
                    </td>
                    <td>{contest.start_time.format("%Y-%m-%d %H:%M UTC").to_string()}</td>
                    <td>{ContestClock::format_duration(contest.length())}</td>
                    <td><PhaseBadge phase={display.phase} /></td>
                    <td>{countdown_label(&display)}</td>
                </tr>
            }
        }) }
    }
}

#[function_component(Contests)]
pub fn contests() -> Html {
    let contests = use_state(Vec::<Contest>::new);
    let load_error = use_state(|| None::<String>);
    let now = use_clock();

    {
        let contests = contests.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_contests().await {
                    Ok(list) => contests.set(list),
                    Err(e) => {
                        warn!("Failed to fetch contests: {}", e);
                        load_error.set(Some(e));
                    }
                }
            });
            || ()
        });
    }

    let buckets = ContestClock::partition(&contests, now);
    // Running first, then upcoming, then the archive
    let ordered: Vec<&Contest> = buckets
        .running
        .iter()
        .chain(buckets.upcoming.iter())
        .chain(buckets.ended.iter())
        .copied()
        .collect();

    html! {
        <main class="main-container">
            <div class="card">
                <div class="card-header">
                    <span class="card-title">{"Contests"}</span>
                </div>
                if let Some(message) = (*load_error).clone() {
                    <div class="error-banner">{format!("Could not load contests: {}", message)}</div>
                }
                if buckets.is_empty() {
                    <p class="empty-state">{"No contests yet."}</p>
                } else {
                    <table class="main-table">
                        <thead>
                            <tr>
                                <th>{"Contest Name"}</th>
                                <th>{"Start"}</th>
                                <th>{"Length"}</th>
                                <th>{"Status"}</th>
                                <th>{"Timer"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {contest_rows(&ordered, now)}
                        </tbody>
                    </table>
                }
            </div>
        </main>
    }
}
