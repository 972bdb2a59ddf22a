//! Static screen for unrecognized portal paths.

use yew::prelude::*;

use crate::core::routes::Route;

#[function_component(NotFoundView)]
pub(crate) fn not_found_view() -> Html {
    html! {
        <div class="portal-not-found">
            <h2>{"Page not found"}</h2>
            <p class="muted">{"That page does not exist in your subscription portal."}</p>
            <a href={Route::Home.to_path()}>{"Back to overview"}</a>
        </div>
    }
}
