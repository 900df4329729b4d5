use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::signin::SignInModal;
use crate::components::seo::Seo;
use crate::data::seo::{page_meta, PageKey};
use crate::Route;

#[function_component(SignIn)]
pub fn sign_in() -> Html {
    let navigator = use_navigator();
    let success = use_state(|| None::<String>);

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let on_success = {
        let navigator = navigator.clone();
        let success = success.clone();
        Callback::from(move |_: ()| {
            info!("Sign in accepted, redirecting home");
            success.set(Some("Signed in! Redirecting...".to_string()));
            let navigator = navigator.clone();
            Timeout::new(1_500, move || {
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Home);
                }
            })
            .forget();
        })
    };

    html! {
        <div class="signin-page">
            <Seo meta={page_meta(PageKey::SignIn)} />
            if let Some(message) = (*success).clone() {
                <div class="message success-message">{message}</div>
            } else {
                <SignInModal {on_back} {on_success} />
            }
        </div>
    }
}
