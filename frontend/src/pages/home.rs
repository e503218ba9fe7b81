use crate::api::contests::fetch_contests;
use crate::clock::use_clock;
use crate::components::countdown::{Countdown, PhaseBadge};
use crate::Route;
use log::{debug, warn};
use shared::clock::ContestClock;
use shared::Contest;
use yew::prelude::*;
use yew_router::prelude::*;

/// Past contests shown on the dashboard
const HISTORY_ROWS: usize = 5;

#[function_component(Home)]
pub fn home() -> Html {
    let contests = use_state(Vec::<Contest>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);
    let now = use_clock();

    // Load contests once; the featured pick is recomputed on every tick from this list
    {
        let contests = contests.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_contests().await {
                    Ok(list) => {
                        debug!("Home loaded {} contests", list.len());
                        contests.set(list);
                    }
                    Err(e) => {
                        warn!("Failed to fetch contests: {}", e);
                        load_error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let selection = ContestClock::select_featured(&contests, now);
    let buckets = ContestClock::partition(&contests, now);

    let hero = match (&selection.contest, selection.phase) {
        (Some(contest), Some(phase)) => html! {
            <div class="hero-banner">
                <div class="hero-tag">{phase.label()}</div>
                <h1 class="hero-title">{contest.name.clone()}</h1>
                <div class="hero-timer">
                    <Countdown contest={contest.clone()} now={now} />
                </div>
                <Link<Route> to={Route::ContestDetails { contest_id: contest.id }} classes={classes!("btn-hero")}>
                    {"Enter contest"}
                </Link<Route>>
            </div>
        },
        _ if *loading => html! {
            <div class="hero-banner hero-empty">
                <p>{"Loading contests..."}</p>
            </div>
        },
        _ => html! {
            <div class="hero-banner hero-empty">
                <h1 class="hero-title">{"No contest scheduled"}</h1>
                <p>{"Check back soon for the next virtual round."}</p>
            </div>
        },
    };

    html! {
        <main class="main-container">
            <section>
                {hero}

                if let Some(message) = (*load_error).clone() {
                    <div class="error-banner">{format!("Could not load contests: {}", message)}</div>
                }

                <div class="card">
                    <div class="card-header">
                        <span class="card-title">{"Past Contest History"}</span>
                        <Link<Route> to={Route::Contests} classes={classes!("btn", "btn-outline")}>{"View All"}</Link<Route>>
                    </div>
                    <table class="main-table">
                        <thead>
                            <tr>
                                <th>{"Contest Name"}</th>
                                <th>{"Date"}</th>
                                <th>{"Status"}</th>
                                <th>{"Action"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for buckets.ended.iter().take(HISTORY_ROWS).map(|contest| html! {
                                <tr key={contest.id}>
                                    <td><strong>{contest.name.clone()}</strong></td>
                                    <td>{contest.start_time.format("%Y. %m. %d").to_string()}</td>
                                    <td><PhaseBadge phase={ContestClock::classify(contest, now)} /></td>
                                    <td>
                                        <Link<Route> to={Route::ContestDetails { contest_id: contest.id }} classes={classes!("btn", "btn-outline")}>
                                            {"View"}
                                        </Link<Route>>
                                    </td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </section>
        </main>
    }
}
