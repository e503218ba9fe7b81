use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::components::nav::Nav;

pub mod api;
pub mod clock;
pub mod components;
pub mod config;
pub mod pages {
    pub mod home;
    pub mod contests;
    pub mod contest_details;
    pub mod problem;
    pub mod not_found;
}

use pages::{home::Home, contests::Contests, contest_details::ContestDetails, problem::ProblemPage, not_found::NotFound};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contests")]
    Contests,
    #[at("/contest/:contest_id")]
    ContestDetails { contest_id: i64 },
    #[at("/contest/:contest_id/problem/:problem_id")]
    Problem { contest_id: i64, problem_id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <BrowserRouter>
            <div class="app-container">
                <Nav />
                <main class="flex-1">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::Contests => html! { <Contests /> },
        Route::ContestDetails { contest_id } => {
            debug!("Rendering contest {}", contest_id);
            html! { <ContestDetails contest_id={contest_id} /> }
        }
        Route::Problem { contest_id, problem_id } => {
            debug!("Rendering problem {} of contest {}", problem_id, contest_id);
            html! { <ProblemPage contest_id={contest_id} problem_id={problem_id} /> }
        }
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    info!("Mounting application to #app");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
