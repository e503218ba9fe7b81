use crate::api::contests::fetch_contest;
use crate::api::problems::fetch_problem;
use crate::clock::use_clock;
use crate::components::countdown::Countdown;
use crate::Route;
use log::warn;
use shared::{Contest, Problem};
use std::rc::Rc;
use yew::functional::use_reducer_eq;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProblemPageState {
    /// `(contest_id, problem_id)` of the route being loaded
    pub ids: Option<(i64, i64)>,
    pub contest: Option<Contest>,
    pub problem: Option<Problem>,
    pub error: Option<String>,
}

impl ProblemPageState {
    fn is_contest(&self, contest_id: i64) -> bool {
        self.ids.map(|(c, _)| c) == Some(contest_id)
    }

    fn is_problem(&self, problem_id: i64) -> bool {
        self.ids.map(|(_, p)| p) == Some(problem_id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProblemPageAction {
    Load { contest_id: i64, problem_id: i64 },
    ContestLoaded(Contest),
    ProblemLoaded(Problem),
    Failed { contest_id: i64, problem_id: i64, message: String },
}

impl Reducible for ProblemPageState {
    type Action = ProblemPageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ProblemPageAction::Load { contest_id, problem_id } => Rc::new(Self {
                ids: Some((contest_id, problem_id)),
                ..Self::default()
            }),
            ProblemPageAction::ContestLoaded(contest) if self.is_contest(contest.id) => {
                Rc::new(Self {
                    contest: Some(contest),
                    ..(*self).clone()
                })
            }
            ProblemPageAction::ProblemLoaded(problem) if self.is_problem(problem.id) => {
                Rc::new(Self {
                    problem: Some(problem),
                    ..(*self).clone()
                })
            }
            ProblemPageAction::Failed { contest_id, problem_id, message }
                if self.ids == Some((contest_id, problem_id)) =>
            {
                Rc::new(Self {
                    error: Some(message),
                    ..(*self).clone()
                })
            }
            _ => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProblemPageProps {
    pub contest_id: i64,
    pub problem_id: i64,
}

#[function_component(ProblemPage)]
pub fn problem_page(props: &ProblemPageProps) -> Html {
    let state = use_reducer_eq(ProblemPageState::default);
    let now = use_clock();

    {
        let state = state.clone();

        use_effect_with((props.contest_id, props.problem_id), move |ids| {
            let (contest_id, problem_id) = *ids;
            state.dispatch(ProblemPageAction::Load { contest_id, problem_id });
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_contest(contest_id).await {
                    Ok(loaded) => state.dispatch(ProblemPageAction::ContestLoaded(loaded)),
                    Err(e) => {
                        warn!("Failed to fetch contest {}: {}", contest_id, e);
                        state.dispatch(ProblemPageAction::Failed { contest_id, problem_id, message: e });
                        return;
                    }
                }
                match fetch_problem(contest_id, problem_id).await {
                    Ok(p) => state.dispatch(ProblemPageAction::ProblemLoaded(p)),
                    Err(e) => {
                        warn!("Failed to fetch problem {}: {}", problem_id, e);
                        state.dispatch(ProblemPageAction::Failed { contest_id, problem_id, message: e });
                    }
                }
            });
            || ()
        });
    }

    let header = html! {
        <header class="problem-header">
            <Link<Route> to={Route::ContestDetails { contest_id: props.contest_id }} classes={classes!("back-btn")}>
                {"← Back to problem list"}
            </Link<Route>>
            {
                match &state.contest {
                    Some(contest) => html! {
                        <>
                            <div class="problem-timer">
                                <Countdown contest={contest.clone()} now={now} />
                            </div>
                            <div class="problem-contest-name">{contest.name.clone()}</div>
                        </>
                    },
                    None => html! {},
                }
            }
        </header>
    };

    let body = if let Some(message) = state.error.clone() {
        html! { <div class="error-banner">{format!("Could not load problem: {}", message)}</div> }
    } else if let Some(problem) = state.problem.clone() {
        html! {
            <div class="left-panel">
                <h1>{problem.title()}</h1>
                <div class="problem-statement">{problem.description_kr.clone()}</div>
                if !problem.url.is_empty() {
                    <p class="problem-source">
                        {"Original problem: "}
                        <a href={problem.url.clone()} target="_blank" rel="noopener noreferrer">{problem.url.clone()}</a>
                    </p>
                }
            </div>
        }
    } else {
        html! { <p>{"Loading problem..."}</p> }
    };

    html! {
        <div class="problem-page-body">
            {header}
            <div class="split-container">
                {body}
            </div>
        </div>
    }
}
