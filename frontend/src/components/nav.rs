use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class="navbar">
            <Link<Route> to={Route::Home} classes={classes!("nav-brand")}>{"CF-KR"}</Link<Route>>
            <div class="nav-links">
                <Link<Route> to={Route::Home} classes={classes!("nav-link")}>{"Home"}</Link<Route>>
                <Link<Route> to={Route::Contests} classes={classes!("nav-link")}>{"Contests"}</Link<Route>>
            </div>
        </nav>
    }
}
