use crate::api::contests::fetch_contest;
use crate::api::problems::fetch_problems;
use crate::clock::use_clock;
use crate::components::countdown::Countdown;
use crate::Route;
use log::{debug, warn};
use shared::clock::{ContestClock, ContestPhase};
use shared::{Contest, Problem};
use std::rc::Rc;
use yew::functional::use_reducer_eq;
use yew::prelude::*;
use yew_router::prelude::*;

/// What the contest page has loaded for the contest in its route
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContestPageState {
    pub contest_id: Option<i64>,
    pub contest: Option<Contest>,
    pub problems: Vec<Problem>,
    pub contest_error: Option<String>,
    pub problems_error: Option<String>,
}

impl ContestPageState {
    fn is_current(&self, contest_id: i64) -> bool {
        self.contest_id == Some(contest_id)
    }

    /// What goes under the contest header at `phase`
    pub fn problems_section(&self, phase: ContestPhase) -> ProblemsSection {
        if phase == ContestPhase::Upcoming {
            ProblemsSection::Locked
        } else if let Some(message) = &self.problems_error {
            ProblemsSection::Failed(message.clone())
        } else {
            ProblemsSection::Table
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProblemsSection {
    Locked,
    Failed(String),
    Table,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContestPageAction {
    Load(i64),
    ContestLoaded(Contest),
    ContestFailed { contest_id: i64, message: String },
    ProblemsLoaded { contest_id: i64, problems: Vec<Problem> },
    ProblemsFailed { contest_id: i64, message: String },
}

impl Reducible for ContestPageState {
    type Action = ContestPageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ContestPageAction::Load(contest_id) => Rc::new(Self {
                contest_id: Some(contest_id),
                ..Self::default()
            }),
            ContestPageAction::ContestLoaded(contest) if self.is_current(contest.id) => {
                Rc::new(Self {
                    contest: Some(contest),
                    contest_error: None,
                    ..(*self).clone()
                })
            }
            ContestPageAction::ContestFailed { contest_id, message } if self.is_current(contest_id) => {
                Rc::new(Self {
                    contest_error: Some(message),
                    ..(*self).clone()
                })
            }
            ContestPageAction::ProblemsLoaded { contest_id, problems } if self.is_current(contest_id) => {
                Rc::new(Self {
                    problems,
                    problems_error: None,
                    ..(*self).clone()
                })
            }
            ContestPageAction::ProblemsFailed { contest_id, message } if self.is_current(contest_id) => {
                Rc::new(Self {
                    problems_error: Some(message),
                    ..(*self).clone()
                })
            }
            // Response for a contest the page has already navigated away from
            _ => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContestDetailsProps {
    pub contest_id: i64,
}

#[function_component(ContestDetails)]
pub fn contest_details(props: &ContestDetailsProps) -> Html {
    let contest_id = props.contest_id;
    let state = use_reducer_eq(ContestPageState::default);
    let now = use_clock();

    {
        let state = state.clone();

        use_effect_with(contest_id, move |contest_id| {
            let contest_id = *contest_id;
            state.dispatch(ContestPageAction::Load(contest_id));
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_contest(contest_id).await {
                    Ok(loaded) => state.dispatch(ContestPageAction::ContestLoaded(loaded)),
                    Err(e) => {
                        warn!("Failed to fetch contest {}: {}", contest_id, e);
                        state.dispatch(ContestPageAction::ContestFailed { contest_id, message: e });
                        return;
                    }
                }
                match fetch_problems(contest_id).await {
                    Ok(problems) => {
                        debug!("Contest {} has {} problems", contest_id, problems.len());
                        state.dispatch(ContestPageAction::ProblemsLoaded { contest_id, problems });
                    }
                    Err(e) => {
                        warn!("Failed to fetch problems for contest {}: {}", contest_id, e);
                        state.dispatch(ContestPageAction::ProblemsFailed { contest_id, message: e });
                    }
                }
            });
            || ()
        });
    }

    let Some(contest) = state.contest.clone() else {
        let placeholder = match &state.contest_error {
            Some(message) => html! {
                <div class="error-banner">{format!("Could not load contest: {}", message)}</div>
            },
            None => html! { <p>{"Loading contest..."}</p> },
        };
        return html! {
            <div class="contest-page">
                {placeholder}
            </div>
        };
    };

    let phase = ContestClock::classify(&contest, now);

    let problem_table = match state.problems_section(phase) {
        ProblemsSection::Locked => html! {
            <p class="problems-locked">{"Problems are revealed when the contest starts."}</p>
        },
        ProblemsSection::Failed(message) => html! {
            <div class="error-banner">{format!("Could not load problems: {}", message)}</div>
        },
        ProblemsSection::Table => html! {
            <table class="problem-table">
                <thead>
                    <tr>
                        <th>{"#"}</th>
                        <th>{"Problem"}</th>
                        <th>{"Points"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for state.problems.iter().map(|problem| html! {
                        <tr key={problem.id}>
                            <td>{problem.index.clone()}</td>
                            <td>
                                <Link<Route> to={Route::Problem { contest_id: contest.id, problem_id: problem.id }}>
                                    {problem.title()}
                                </Link<Route>>
                            </td>
                            <td>{problem.points.to_string()}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <div class="contest-page">
            <header class="contest-header">
                <h1>{contest.name.clone()}</h1>
                <Countdown contest={contest.clone()} now={now} />
            </header>
            <section class="contest-body">
                {problem_table}
            </section>
        </div>
    }
}
