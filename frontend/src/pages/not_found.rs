use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404 - Page Not Found"}</h1>
            <p>{"There is no contest or problem at this address."}</p>
            <Link<Route> to={Route::Home}>{"Back to the dashboard"}</Link<Route>>
        </div>
    }
}
