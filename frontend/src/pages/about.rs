use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::seo::Seo;
use crate::data::seo::{page_meta, PageKey};
use crate::utils::scroll::scroll_to_top;
use crate::Route;

const VALUES: &[(&str, &str)] = &[
    ("Calm over busy", "Software should lower the noise, not add to it. Every feature has to earn its place."),
    ("Connect, don't replace", "Teams already love some of their tools. We make them work together instead of asking you to start over."),
    ("Built in the open", "We share our roadmap, our changelog and the occasional mistake."),
];

const TEAM: &[(&str, &str)] = &[
    ("Priya Nair", "Co-founder & CEO"),
    ("Daniel Okafor", "Co-founder & CTO"),
    ("Maya Chen", "Head of Product"),
    ("Sam Rivera", "Developer Relations"),
];

#[function_component(About)]
pub fn about() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="about-page">
            <Seo meta={page_meta(PageKey::About)} />
            <section class="about-hero">
                <h1>{"Work deserves one calm place"}</h1>
                <p>
                    {"Workblox started in 2024 when our founders counted eleven tools between a customer request and a shipped fix. "}
                    {"We're building the workspace we wanted back then: one place for the work, connected to everything around it."}
                </p>
            </section>

            <section class="about-values">
                <h2>{"What we believe"}</h2>
                <div class="values-grid">
                    { for VALUES.iter().map(|(title, text)| html! {
                        <div class="value-card">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    })}
                </div>
            </section>

            <section class="about-team">
                <h2>{"The team"}</h2>
                <div class="team-grid">
                    { for TEAM.iter().map(|(name, role)| html! {
                        <div class="team-member">
                            <div class="team-avatar">{name.chars().next().map(String::from).unwrap_or_default()}</div>
                            <h3>{*name}</h3>
                            <p>{*role}</p>
                        </div>
                    })}
                </div>
            </section>

            <section class="cta-section">
                <h2>{"Come build with us"}</h2>
                <Link<Route> to={Route::SignIn} classes="hero-cta">{"Get early access"}</Link<Route>>
            </section>
        </div>
    }
}
