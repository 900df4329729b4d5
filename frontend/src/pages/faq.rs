use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::seo::Seo;
use crate::config::SITE;
use crate::data::faq::{faqs_in, find_by_anchor, FaqCategory};
use crate::data::seo::{page_meta, PageKey};
use crate::utils::accordion::Accordion;
use crate::utils::scroll::scroll_to_top;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    id: String,
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div id={props.id.clone()} class={classes!("faq-item", props.open.then_some("open"))}>
            <div class="faq-question-container">
                <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                    <span class="question-text">{props.question.clone()}</span>
                    <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
                </button>
            </div>
            if props.open {
                <div class="faq-answer">
                    <p>{props.answer.clone()}</p>
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let category = use_state(|| FaqCategory::Product);
    let accordion = use_state(Accordion::new);

    // Open the question named in the URL hash, if any
    {
        let category = category.clone();
        let accordion = accordion.clone();
        use_effect_with_deps(
            move |_| {
                let hash = web_sys::window()
                    .and_then(|w| w.location().hash().ok())
                    .unwrap_or_default();
                match find_by_anchor(&hash) {
                    Some((found, index)) => {
                        category.set(found);
                        accordion.set(Accordion::new().toggle(index));
                        let anchor = hash.trim_start_matches('#').to_string();
                        // Give the answer a moment to render before scrolling
                        Timeout::new(100, move || {
                            if let Some(element) = web_sys::window()
                                .and_then(|w| w.document())
                                .and_then(|doc| doc.get_element_by_id(&anchor))
                            {
                                element.scroll_into_view_with_bool(true);
                            }
                        })
                        .forget();
                    }
                    None => scroll_to_top(),
                }
                || ()
            },
            (),
        );
    }

    let entries = faqs_in(*category);

    html! {
        <div class="faq-page">
            <Seo meta={page_meta(PageKey::Faq)} />
            <div class="faq-background"></div>
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Everything you need to know about Workblox"}</p>
            </section>

            <section class="faq-section">
                <div class="faq-tabs" role="tablist">
                    { for FaqCategory::ALL.iter().map(|tab| {
                        let selected = *tab == *category;
                        let onclick = {
                            let category = category.clone();
                            let accordion = accordion.clone();
                            let tab = *tab;
                            Callback::from(move |_: MouseEvent| {
                                category.set(tab);
                                accordion.set(Accordion::new());
                            })
                        };
                        html! {
                            <button role="tab" aria-selected={selected.to_string()}
                                class={classes!("faq-tab", selected.then_some("active"))} {onclick}>
                                {tab.label()}
                            </button>
                        }
                    })}
                </div>

                { for entries.iter().enumerate().map(|(index, entry)| {
                    let on_toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |_: ()| accordion.set(accordion.toggle(index)))
                    };
                    html! {
                        <FaqItem
                            id={entry.anchor()}
                            question={entry.question}
                            answer={entry.answer}
                            open={accordion.is_open(index)}
                            {on_toggle}
                        />
                    }
                })}
            </section>

            <section class="faq-contact">
                <h2>{"Still have questions?"}</h2>
                <p>
                    {"We're happy to help. Write to "}
                    <a href={format!("mailto:{}", SITE.contact_email)}>{SITE.contact_email}</a>
                    {" and a real person will get back to you."}
                </p>
            </section>
        </div>
    }
}
