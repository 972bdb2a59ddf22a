//! Single-slot toast host.
//!
//! # Design
//! - Exactly one toast is visible at a time; the store slot enforces it and
//!   this component only schedules the self-dismissal.
//! - Dismissal is id-checked, so a toast that was already replaced never
//!   kills its successor.

use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::core::store::{PortalStore, TOAST_DISMISS_MS, Toast, ToastKind, dismiss_toast};

#[function_component(ToastHost)]
pub(crate) fn toast_host() -> Html {
    let (store, dispatch) = use_store::<PortalStore>();
    let toast = store.toast.clone();
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |toast: &Option<Toast>| {
                let handle = toast.as_ref().map(|toast| {
                    let dispatch = dispatch.clone();
                    let id = toast.id;
                    Timeout::new(TOAST_DISMISS_MS, move || {
                        dispatch.reduce_mut(|store| dismiss_toast(store, id));
                    })
                });
                move || drop(handle)
            },
            toast.clone(),
        );
    }
    let Some(toast) = toast else {
        return Html::default();
    };
    let kind_class = match toast.kind {
        ToastKind::Info => "info",
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };
    html! {
        <div class="portal-toast-host" aria-live="polite" aria-atomic="true">
            <div class={classes!("portal-toast", kind_class)} role="status">
                <span>{toast.message.clone()}</span>
            </div>
        </div>
    }
}
