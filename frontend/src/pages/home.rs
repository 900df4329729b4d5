use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::seo::Seo;
use crate::data::faq::FAQS;
use crate::data::integrations::INTEGRATIONS;
use crate::data::seo::{page_meta, PageKey};
use crate::utils::accordion::Accordion;
use crate::utils::registry::{self, FetchOptions};
use crate::utils::scroll::scroll_to_top;
use crate::Route;

const FEATURES: &[(&str, &str, &str)] = &[
    ("🧱", "Boards that fit your process", "Kanban, lists and timelines over the same tasks. Switch views without losing context."),
    ("⚡", "Automations without code", "React to task changes, merged pull requests or new tickets with workflows anyone can build."),
    ("🔌", "Connected to your stack", "Forty-plus integrations bring Slack, GitHub, Jira and Drive into one place."),
    ("📄", "Docs next to the work", "Write specs and notes alongside the tasks they describe."),
    ("📊", "Reporting that updates itself", "Progress, workload and cycle time without a spreadsheet in sight."),
    ("🔒", "Secure by default", "SSO, granular permissions and encryption at rest on every plan."),
];

const FAQ_PREVIEW: usize = 3;
const INTEGRATION_PREVIEW: usize = 8;

/// Versions of the packages the site is styled and animated with.
#[derive(Clone, PartialEq, Default)]
struct StackVersions {
    tailwind: Option<String>,
    motion: Option<String>,
}

#[function_component(Home)]
pub fn home() -> Html {
    let accordion = use_state(Accordion::new);
    let versions = use_state(StackVersions::default);

    {
        let versions = versions.clone();
        use_effect_with_deps(
            move |_| {
                scroll_to_top();
                spawn_local(async move {
                    let hourly = FetchOptions { revalidate_secs: Some(3600), timeout_ms: 5_000 };
                    let forever = FetchOptions { revalidate_secs: None, timeout_ms: 5_000 };
                    let tailwind = match registry::latest_version("tailwindcss", hourly).await {
                        Ok(version) => Some(version),
                        Err(e) => {
                            log::warn!("tailwindcss version lookup failed: {}", e);
                            None
                        }
                    };
                    let motion = match registry::latest_version("framer-motion", forever).await {
                        Ok(version) => Some(version),
                        Err(e) => {
                            log::warn!("framer-motion version lookup failed: {}", e);
                            None
                        }
                    };
                    versions.set(StackVersions { tailwind, motion });
                });
                || ()
            },
            (),
        );
    }

    let toggle = {
        let accordion = accordion.clone();
        Callback::from(move |index: usize| accordion.set(accordion.toggle(index)))
    };

    html! {
        <div class="home-page">
            <Seo meta={page_meta(PageKey::Home)} />
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <span class="hero-badge">{"Early access is open"}</span>
                    <h1 class="hero-title">{"All your team's work, finally in one place"}</h1>
                    <p class="hero-subtitle">
                        {"Workblox brings tasks, docs and the tools you already use into a single workspace, then automates the busywork in between."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::SignIn} classes="hero-cta">
                            {"Get early access"}
                        </Link<Route>>
                        <Link<Route> to={Route::Integrations} classes="hero-secondary">
                            {"Browse integrations"}
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <section class="features-section">
                <h2>{"Everything a busy team needs"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(icon, title, text)| html! {
                        <div class="feature-card">
                            <span class="feature-icon">{*icon}</span>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    })}
                </div>
            </section>

            <section class="integrations-preview">
                <h2>{"Works with the tools you love"}</h2>
                <div class="logo-row">
                    { for INTEGRATIONS.iter().take(INTEGRATION_PREVIEW).map(|entry| html! {
                        <img src={entry.logo_url} alt={entry.name} title={entry.name} loading="lazy" />
                    })}
                </div>
                <Link<Route> to={Route::Integrations} classes="forward-link">
                    {format!("See all {} integrations →", INTEGRATIONS.len())}
                </Link<Route>>
            </section>

            <section class="faq-preview">
                <h2>{"Questions, answered"}</h2>
                { for FAQS.iter().take(FAQ_PREVIEW).enumerate().map(|(index, entry)| {
                    let open = accordion.is_open(index);
                    let onclick = {
                        let toggle = toggle.clone();
                        Callback::from(move |_: MouseEvent| toggle.emit(index))
                    };
                    html! {
                        <div class={classes!("faq-item", open.then_some("open"))}>
                            <button class="faq-question" {onclick} aria-expanded={open.to_string()}>
                                <span class="question-text">{entry.question}</span>
                                <span class="toggle-icon">{if open { "−" } else { "+" }}</span>
                            </button>
                            if open {
                                <div class="faq-answer"><p>{entry.answer}</p></div>
                            }
                        </div>
                    }
                })}
                <Link<Route> to={Route::Faq} classes="forward-link">{"Read the full FAQ →"}</Link<Route>>
            </section>

            <section class="cta-section">
                <h2>{"Ready to clear the clutter?"}</h2>
                <p>{"Join the waitlist and we'll get your team set up."}</p>
                <Link<Route> to={Route::SignIn} classes="hero-cta">{"Join the waitlist"}</Link<Route>>
                if versions.tailwind.is_some() || versions.motion.is_some() {
                    <p class="stack-badge">
                        {"Styled with "}
                        {versions.tailwind.as_ref().map(|v| format!("Tailwind CSS {}", v)).unwrap_or_else(|| "Tailwind CSS".to_string())}
                        {", animated with "}
                        {versions.motion.as_ref().map(|v| format!("Framer Motion {}", v)).unwrap_or_else(|| "Framer Motion".to_string())}
                    </p>
                }
            </section>
        </div>
    }
}
