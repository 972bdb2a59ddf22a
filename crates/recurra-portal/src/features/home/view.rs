//! Landing screen.

use recurra_api_models::HomePayload;
use yew::prelude::*;

use crate::app::ctx::PortalCtx;
use crate::components::LOAD_FAILED_MESSAGE;
use crate::core::routes::Route;
use crate::features::contracts::state::{billing_label, title_label};
use crate::features::home::logic::{greeting, summary_counts};

#[function_component(HomeScreen)]
pub(crate) fn home_screen() -> Html {
    let ctx = use_context::<PortalCtx>().expect("portal context missing");
    let home = use_state(|| Option::<Result<HomePayload, String>>::None);
    {
        let home = home.clone();
        let api = ctx.api.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    let result = api
                        .fetch_home(false)
                        .await
                        .map_err(|error| error.to_string());
                    home.set(Some(result));
                });
                || ()
            },
            (),
        );
    }
    match &*home {
        None => html! { <p class="portal-loading">{"Loading your subscriptions."}</p> },
        Some(Err(_)) => html! { <p class="portal-error">{LOAD_FAILED_MESSAGE}</p> },
        Some(Ok(payload)) => render_home(payload),
    }
}

fn render_home(payload: &HomePayload) -> Html {
    let summary = summary_counts(payload);
    let contracts = payload.contract_list().unwrap_or_default();
    html! {
        <div class="portal-home">
            <h2>{greeting(payload.customer.as_ref())}</h2>
            <div class="portal-summary">
                <div class="portal-stat">
                    <span class="portal-stat-value">{summary.active.to_string()}</span>
                    <span class="muted">{"active"}</span>
                </div>
                <div class="portal-stat">
                    <span class="portal-stat-value">{summary.paused.to_string()}</span>
                    <span class="muted">{"paused"}</span>
                </div>
                <div class="portal-stat">
                    <span class="portal-stat-value">{summary.cancelled.to_string()}</span>
                    <span class="muted">{"cancelled"}</span>
                </div>
            </div>
            { if contracts.is_empty() {
                html! { <p class="muted">{"You have no subscriptions yet."}</p> }
            } else {
                html! {
                    <ul class="portal-preview">
                        {for contracts.iter().take(3).map(|contract| {
                            let detail = Route::SubscriptionDetail {
                                id: contract.short_id().to_string(),
                            };
                            html! {
                                <li>
                                    <a href={detail.to_path()}>
                                        <span>{title_label(contract)}</span>
                                        <span class="muted">{contract.status.clone()}</span>
                                        {for billing_label(contract).map(|label| html! {
                                            <span class="muted">{label}</span>
                                        })}
                                    </a>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
            <a class="portal-link" href={Route::Subscriptions { filter: None }.to_path()}>
                {"Manage subscriptions"}
            </a>
        </div>
    }
}
