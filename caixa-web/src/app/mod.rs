use crate::components::ui::CheckoutView;
use crate::pos::{CheckoutIntent, CheckoutSession};
use yew::prelude::*;

pub mod state;

pub use state::{apply_intent, checkout_props};

/// Root component: owns the reference session and feeds the checkout screen.
#[function_component(App)]
pub fn app() -> Html {
    let session = use_state(CheckoutSession::demo);

    let on_intent = {
        let session = session.clone();
        Callback::from(move |intent: CheckoutIntent| {
            let (next, status) = apply_intent(&session, intent);
            if let Some(msg) = status {
                crate::a11y::set_status(&msg);
            }
            session.set(next);
        })
    };

    let props = checkout_props(&session, on_intent);
    html! {
        <>
            <a class="sr-only" href="#main">{ crate::i18n::t("ui.skip_to_content") }</a>
            <CheckoutView ..props />
        </>
    }
}
