//! Blocking overlay shown while a mutation is in flight.

use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::core::store::PortalStore;

#[function_component(BusyOverlay)]
pub(crate) fn busy_overlay() -> Html {
    let message = use_selector(|store: &PortalStore| store.busy_message.clone());
    let Some(message) = (*message).clone() else {
        return Html::default();
    };
    // no dismiss affordance: the overlay exists to stop the customer from
    // navigating or refreshing while the mutation window is open
    html! {
        <div class="portal-busy-overlay" role="alertdialog" aria-modal="true" aria-busy="true">
            <div class="portal-busy-card">
                <span class="portal-spinner" aria-hidden="true"></span>
                <p>{message}</p>
            </div>
        </div>
    }
}
