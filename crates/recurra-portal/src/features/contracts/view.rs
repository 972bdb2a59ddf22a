//! Contract list and detail screens.

use recurra_api_models::{Contract, HomePayload};
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::ctx::PortalCtx;
use crate::app::feedback::StoreFeedback;
use crate::app::preferences::{load_status_filter, persist_status_filter};
use crate::components::LOAD_FAILED_MESSAGE;
use crate::core::routes::{Route, StatusFilter};
use crate::core::store::PortalStore;
use crate::features::contracts::actions::ContractAction;
use crate::features::contracts::logic::run_action;
use crate::features::contracts::state::{
    billing_label, filter_by_status, find_by_short_id, title_label,
};

const PAUSE_DAY_CHOICES: [u32; 4] = [7, 14, 30, 60];

#[derive(Properties, PartialEq)]
pub(crate) struct SubscriptionsProps {
    /// Explicit filter from the route query; `None` falls back to the
    /// customer's persisted preference.
    pub filter: Option<StatusFilter>,
}

#[function_component(SubscriptionsScreen)]
pub(crate) fn subscriptions_screen(props: &SubscriptionsProps) -> Html {
    let ctx = use_context::<PortalCtx>().expect("portal context missing");
    let filter = props.filter.or_else(load_status_filter).unwrap_or_default();
    use_effect_with_deps(
        move |filter: &StatusFilter| {
            persist_status_filter(*filter);
            || ()
        },
        filter,
    );
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
        Some(Ok(payload)) => render_list(payload, filter),
    }
}

fn render_list(payload: &HomePayload, filter: StatusFilter) -> Html {
    let contracts = filter_by_status(payload.contract_list().unwrap_or_default(), filter);
    html! {
        <div class="portal-subscriptions">
            <h2>{"Your subscriptions"}</h2>
            <nav class="portal-filter-tabs">
                {for StatusFilter::all().iter().map(|tab| {
                    let route = Route::Subscriptions { filter: Some(*tab) };
                    html! {
                        <a
                            class={classes!("portal-tab", (*tab == filter).then_some("active"))}
                            href={route.to_path()}
                        >
                            {tab.as_str()}
                        </a>
                    }
                })}
            </nav>
            { if contracts.is_empty() {
                html! { <p class="muted">{"No subscriptions match this filter."}</p> }
            } else {
                html! {
                    <ul class="portal-contract-list">
                        {for contracts.iter().map(contract_row)}
                    </ul>
                }
            }}
        </div>
    }
}

fn contract_row(contract: &Contract) -> Html {
    let route = Route::SubscriptionDetail {
        id: contract.short_id().to_string(),
    };
    html! {
        <li class="portal-contract-row">
            <a href={route.to_path()}>
                <span class="portal-contract-title">{title_label(contract)}</span>
                <span class="portal-status">{contract.status.clone()}</span>
                {for billing_label(contract).map(|label| html! {
                    <span class="muted">{label}</span>
                })}
            </a>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SubscriptionDetailProps {
    /// Contract short identifier from the route.
    pub id: String,
}

#[function_component(SubscriptionDetailScreen)]
pub(crate) fn subscription_detail_screen(props: &SubscriptionDetailProps) -> Html {
    let ctx = use_context::<PortalCtx>().expect("portal context missing");
    let contract = use_state(|| Option::<Result<Option<Contract>, String>>::None);
    let pause_days = use_state(|| 30_u32);
    let busy = use_selector(|store: &PortalStore| store.busy_message.is_some());

    {
        let contract = contract.clone();
        let api = ctx.api.clone();
        use_effect_with_deps(
            move |id: &String| {
                let id = id.clone();
                yew::platform::spawn_local(async move {
                    let result = api
                        .fetch_home(false)
                        .await
                        .map(|payload| {
                            payload
                                .contract_list()
                                .and_then(|list| find_by_short_id(list, &id))
                                .cloned()
                        })
                        .map_err(|error| error.to_string());
                    contract.set(Some(result));
                });
                || ()
            },
            props.id.clone(),
        );
    }

    let on_days_change = {
        let pause_days = pause_days.clone();
        Callback::from(move |event: Event| {
            let target: HtmlSelectElement = event.target().unwrap().dyn_into().unwrap();
            if let Ok(days) = target.value().parse::<u32>() {
                pause_days.set(days);
            }
        })
    };

    let run = {
        let ctx = ctx.clone();
        let contract = contract.clone();
        Callback::from(move |action: ContractAction| {
            let Some(Ok(Some(snapshot))) = (*contract).clone() else {
                return;
            };
            let api = ctx.api.clone();
            let gate = ctx.gate.clone();
            let contract = contract.clone();
            yew::platform::spawn_local(async move {
                let feedback = StoreFeedback::new();
                let outcome = run_action(&api, &gate, &feedback, &snapshot.id, action).await;
                if let Some(updated) = outcome.contract {
                    contract.set(Some(Ok(Some(updated))));
                }
            });
        })
    };

    match &*contract {
        None => html! { <p class="portal-loading">{"Loading your subscription."}</p> },
        Some(Err(_)) => html! { <p class="portal-error">{LOAD_FAILED_MESSAGE}</p> },
        Some(Ok(None)) => html! {
            <div class="portal-detail">
                <p class="portal-error">{"We could not find that subscription."}</p>
                <a href={Route::Subscriptions { filter: None }.to_path()}>{"Back to the list"}</a>
            </div>
        },
        Some(Ok(Some(snapshot))) => {
            render_detail(snapshot, *pause_days, *busy, &on_days_change, &run)
        }
    }
}

fn render_detail(
    contract: &Contract,
    pause_days: u32,
    busy: bool,
    on_days_change: &Callback<Event>,
    run: &Callback<ContractAction>,
) -> Html {
    let on_pause = {
        let run = run.clone();
        Callback::from(move |_: MouseEvent| run.emit(ContractAction::Pause { days: pause_days }))
    };
    let on_resume = {
        let run = run.clone();
        Callback::from(move |_: MouseEvent| run.emit(ContractAction::Resume { in_days: None }))
    };
    html! {
        <div class="portal-detail">
            <h2>{title_label(contract)}</h2>
            <dl class="portal-detail-facts">
                <dt>{"Status"}</dt>
                <dd class="portal-status">{contract.status.clone()}</dd>
                {for contract.price.as_ref().map(|price| {
                    let amount = contract.currency.as_ref().map_or_else(
                        || price.clone(),
                        |currency| format!("{price} {currency}"),
                    );
                    html! { <><dt>{"Price"}</dt><dd>{amount}</dd></> }
                })}
                {for billing_label(contract).map(|label| html! {
                    <><dt>{"Next billing"}</dt><dd>{label}</dd></>
                })}
                {for contract.delivery_interval.as_ref().map(|interval| html! {
                    <><dt>{"Delivery"}</dt><dd>{interval.clone()}</dd></>
                })}
            </dl>
            <div class="portal-actions">
                { if contract.is_cancelled() {
                    html! { <p class="muted">{"This subscription has been cancelled."}</p> }
                } else if contract.is_paused() {
                    html! {
                        <button class="portal-button" onclick={on_resume} disabled={busy}>
                            {"Resume subscription"}
                        </button>
                    }
                } else {
                    html! {
                        <>
                            <label class="portal-pause-length">
                                {"Pause for"}
                                <select onchange={on_days_change.clone()} disabled={busy}>
                                    {for PAUSE_DAY_CHOICES.iter().map(|days| html! {
                                        <option
                                            value={days.to_string()}
                                            selected={*days == pause_days}
                                        >
                                            {format!("{days} days")}
                                        </option>
                                    })}
                                </select>
                            </label>
                            <button class="portal-button" onclick={on_pause} disabled={busy}>
                                {"Pause subscription"}
                            </button>
                        </>
                    }
                }}
            </div>
        </div>
    }
}
