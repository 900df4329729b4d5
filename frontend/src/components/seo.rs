use web_sys::{Document, Element};
use yew::prelude::*;

use crate::data::seo::{json_ld, meta_tags, PageMeta};

const JSON_LD_ID: &str = "structured-data";

#[derive(Properties, PartialEq)]
pub struct SeoProps {
    pub meta: PageMeta,
}

/// Rewrites the document head for the current page.
#[function_component(Seo)]
pub fn seo(props: &SeoProps) -> Html {
    use_effect_with_deps(
        move |meta: &PageMeta| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                apply_head(&document, meta);
            }
            || ()
        },
        props.meta.clone(),
    );

    html! {}
}

fn head_element(document: &Document, selector: &str, tag: &str) -> Option<Element> {
    if let Ok(Some(existing)) = document.query_selector(selector) {
        return Some(existing);
    }
    let head = document.head()?;
    let element = document.create_element(tag).ok()?;
    head.append_child(&element).ok()?;
    Some(element)
}

fn apply_head(document: &Document, meta: &PageMeta) {
    document.set_title(&meta.document_title());

    for tag in meta_tags(meta) {
        let selector = format!("meta[{}=\"{}\"]", tag.attr, tag.key);
        if let Some(element) = head_element(document, &selector, "meta") {
            let _ = element.set_attribute(tag.attr, tag.key);
            let _ = element.set_attribute("content", &tag.content);
        }
    }

    if let Some(link) = head_element(document, "link[rel=\"canonical\"]", "link") {
        let _ = link.set_attribute("rel", "canonical");
        let _ = link.set_attribute("href", &meta.canonical_url());
    }

    if let Some(script) = head_element(document, &format!("script#{}", JSON_LD_ID), "script") {
        script.set_id(JSON_LD_ID);
        let _ = script.set_attribute("type", "application/ld+json");
        script.set_text_content(Some(&json_ld(meta).to_string()));
    }
}
