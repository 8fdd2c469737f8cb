use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="primary-button">
                {"Back to the homepage"}
            </Link<Route>>
        </section>
    }
}
