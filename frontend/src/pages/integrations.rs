use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::seo::Seo;
use crate::config::SITE;
use crate::data::integrations::{filter_integrations, CategorySelection, IntegrationCategory, INTEGRATIONS};
use crate::data::seo::{page_meta, PageKey};
use crate::utils::scroll::scroll_to_top;

#[function_component(Integrations)]
pub fn integrations() -> Html {
    let selection = use_state(CategorySelection::default);
    let search = use_state(String::new);

    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    let on_category_change = {
        let selection = selection.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                selection.set(CategorySelection::from_value(&select.value()));
            }
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let on_clear = {
        let selection = selection.clone();
        let search = search.clone();
        Callback::from(move |_: MouseEvent| {
            selection.set(CategorySelection::All);
            search.set(String::new());
        })
    };

    let visible = filter_integrations(INTEGRATIONS, *selection, &search);

    html! {
        <div class="integrations-page">
            <Seo meta={page_meta(PageKey::Integrations)} />
            <section class="integrations-hero">
                <h1>{"Integrations"}</h1>
                <p>{"Connect Workblox to the tools your team already relies on."}</p>
            </section>

            <section class="integrations-controls">
                <select class="category-select" value={selection.value()} onchange={on_category_change} aria-label="Category">
                    <option value={CategorySelection::ALL_LABEL}
                        selected={*selection == CategorySelection::All}>
                        {"All categories"}
                    </option>
                    { for IntegrationCategory::ALL.iter().map(|category| html! {
                        <option value={category.label()}
                            selected={*selection == CategorySelection::Only(*category)}>
                            {category.label()}
                        </option>
                    })}
                </select>
                <input
                    type="search"
                    class="integration-search"
                    placeholder="Search integrations"
                    value={(*search).clone()}
                    oninput={on_search}
                    aria-label="Search integrations"
                />
                <span class="result-count">
                    {format!("{} of {}", visible.len(), INTEGRATIONS.len())}
                </span>
            </section>

            if visible.is_empty() {
                <div class="integrations-empty">
                    <h3>{"No integrations found"}</h3>
                    <p>{"Try a different search or category."}</p>
                    <button class="clear-filters" onclick={on_clear}>{"Clear filters"}</button>
                </div>
            } else {
                <div class="integrations-grid">
                    { for visible.iter().map(|entry| html! {
                        <div class="integration-card">
                            <img class="integration-logo" src={entry.logo_url} alt={entry.name} loading="lazy" />
                            <div class="integration-info">
                                <h3>{entry.name}</h3>
                                <span class="integration-category">{entry.category.label()}</span>
                                <p>{entry.description}</p>
                            </div>
                        </div>
                    })}
                </div>
            }

            <section class="integrations-request">
                <h2>{"Missing something?"}</h2>
                <p>
                    {"Tell us which tool you'd like to see next at "}
                    <a href={format!("mailto:{}?subject=Integration%20request", SITE.contact_email)}>
                        {SITE.contact_email}
                    </a>
                </p>
            </section>
        </div>
    }
}
