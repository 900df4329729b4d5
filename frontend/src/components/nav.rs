use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const LINKS: &[(&str, Route)] = &[
    ("Integrations", Route::Integrations),
    ("Blog", Route::Blog),
    ("FAQ", Route::Faq),
    ("About", Route::About),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let current = use_route::<Route>();

    // Close the mobile menu whenever the route changes
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            current.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <nav class={classes!("top-nav", menu_open.then_some("menu-open"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/assets/logo.svg" alt="" width="28" height="28" />
                    <span>{"Workblox"}</span>
                </Link<Route>>
                <button class="nav-menu-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
                <div class="nav-links">
                    { for LINKS.iter().map(|(label, route)| {
                        let active = current.as_ref() == Some(route);
                        html! {
                            <Link<Route> to={route.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                                {*label}
                            </Link<Route>>
                        }
                    })}
                    <Link<Route> to={Route::SignIn} classes="nav-cta">
                        {"Sign in"}
                    </Link<Route>>
                </div>
            </div>
        </nav>
    }
}
