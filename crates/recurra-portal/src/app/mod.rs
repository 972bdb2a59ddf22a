//! Wasm shell: bootstrap, context wiring, and the in-place router.
//!
//! # Design
//! - Routing state is one `Route` value; `popstate` and a document-wide
//!   click interceptor feed it, screens render from it.
//! - Only anchors that target the portal prefix are intercepted; every
//!   other link navigates the host page normally.

mod bootstrap;
pub(crate) mod ctx;
pub(crate) mod feedback;
mod history;
pub(crate) mod preferences;

use gloo::events::EventListener;
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};
use yew::prelude::*;

use crate::components::busy_modal::BusyOverlay;
use crate::components::not_found::NotFoundView;
use crate::components::toast::ToastHost;
use crate::core::routes::{Route, interception_target};
use crate::features::contracts::view::{SubscriptionDetailScreen, SubscriptionsScreen};
use crate::features::home::view::HomeScreen;
use ctx::PortalCtx;

#[derive(Properties, PartialEq)]
struct PortalAppProps {
    pub ctx: PortalCtx,
}

#[function_component(PortalApp)]
fn portal_app(props: &PortalAppProps) -> Html {
    let route = use_state(history::current_route);

    {
        let route = route.clone();
        use_effect_with_deps(
            move |_| {
                let popstate = {
                    let route = route.clone();
                    EventListener::new(&window(), "popstate", move |_| {
                        route.set(history::current_route());
                        history::notify_location_changed();
                    })
                };
                let clicks = {
                    let route = route.clone();
                    EventListener::new(&document(), "click", move |event| {
                        if let Some(target) = click_target(event) {
                            event.prevent_default();
                            history::push_path(&target);
                            route.set(history::current_route());
                        }
                    })
                };
                move || {
                    drop(popstate);
                    drop(clicks);
                }
            },
            (),
        );
    }

    let screen = match (*route).clone() {
        Route::Home => html! { <HomeScreen /> },
        Route::Subscriptions { filter } => html! { <SubscriptionsScreen filter={filter} /> },
        Route::SubscriptionDetail { id } => html! { <SubscriptionDetailScreen id={id} /> },
        Route::NotFound => html! { <NotFoundView /> },
    };

    html! {
        <ContextProvider<PortalCtx> context={props.ctx.clone()}>
            <div class="recurra-portal">
                {screen}
                <ToastHost />
                <BusyOverlay />
            </div>
        </ContextProvider<PortalCtx>>
    }
}

/// Resolve a document click to an in-place navigation target, when the
/// click lands on a portal-prefixed anchor with no modifier keys held.
fn click_target(event: &Event) -> Option<String> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    if mouse.default_prevented()
        || mouse.button() != 0
        || mouse.ctrl_key()
        || mouse.meta_key()
        || mouse.shift_key()
        || mouse.alt_key()
    {
        return None;
    }
    let element = event.target()?.dyn_into::<Element>().ok()?;
    let anchor = element.closest("a[href]").ok().flatten()?;
    let href = anchor.get_attribute("href")?;
    interception_target(&href)
}

#[function_component(DesignPreview)]
fn design_preview() -> Html {
    // static markup for the theme editor: no fetches, no live actions
    html! {
        <div class="recurra-portal recurra-portal-preview">
            <h2>{"Subscription portal"}</h2>
            <p class="muted">{"Customers manage their subscriptions here after signing in."}</p>
        </div>
    }
}

/// Mount the portal into the host page. Invoked by the wasm entry point.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = bootstrap::load_config();
    let Some(root) = bootstrap::mount_element(&config) else {
        gloo::console::error!("portal root container not found");
        return;
    };
    if config.is_design_mode {
        yew::Renderer::<DesignPreview>::with_root(root).render();
        return;
    }
    let ctx = PortalCtx::new(&config);
    yew::Renderer::<PortalApp>::with_root_and_props(root, PortalAppProps { ctx }).render();
}
