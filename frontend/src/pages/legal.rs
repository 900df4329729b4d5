use yew::prelude::*;

use crate::components::seo::Seo;
use crate::config::SITE;
use crate::data::seo::{page_meta, PageKey};
use crate::utils::scroll::scroll_to_top;

const LAST_UPDATED: &str = "January 1, 2025";

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    page: PageKey,
    heading: AttrValue,
    sections: &'static [(&'static str, &'static str)],
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        props.page,
    );

    html! {
        <div class="legal-page">
            <Seo meta={page_meta(props.page)} />
            <h1>{props.heading.clone()}</h1>
            <p class="legal-updated">{format!("Last updated: {}", LAST_UPDATED)}</p>
            { for props.sections.iter().map(|(heading, body)| html! {
                <section class="legal-section">
                    <h2>{*heading}</h2>
                    <p>{*body}</p>
                </section>
            })}
            <p class="legal-contact">
                {"Questions about this policy? Contact "}
                <a href={format!("mailto:{}", SITE.legal_email)}>{SITE.legal_email}</a>
            </p>
        </div>
    }
}

const PRIVACY: &[(&str, &str)] = &[
    ("Information we collect", "When you join the waitlist we collect your name, email address and, optionally, your company. When you use Workblox we store the content you create and basic usage data."),
    ("How we use it", "We use your information to provide the service, to contact you about your account and, if you opt in, to send product updates. We never sell personal data."),
    ("Where it's stored", "Data is stored with our cloud provider in the region you select, encrypted in transit and at rest."),
    ("Your rights", "You can access, export or delete your data at any time from your account settings or by contacting us."),
    ("Cookies", "We use strictly necessary cookies to keep you signed in and privacy-friendly analytics without cross-site tracking."),
];

const TERMS: &[(&str, &str)] = &[
    ("Using Workblox", "You must be at least 16 years old and provide accurate information when creating an account."),
    ("Your content", "You own everything you put into Workblox. You grant us the limited rights needed to host and display it to the people you share it with."),
    ("Acceptable use", "Don't use Workblox to break the law, send spam or interfere with the service or other users."),
    ("Early access", "Early access features may change or be removed. We'll give notice before any paid plan applies to your workspace."),
    ("Liability", "Workblox is provided as is. To the extent permitted by law our liability is limited to the amount you paid us in the previous twelve months."),
];

#[function_component(Privacy)]
pub fn privacy() -> Html {
    html! { <LegalPage page={PageKey::Privacy} heading="Privacy Policy" sections={PRIVACY} /> }
}

#[function_component(Terms)]
pub fn terms() -> Html {
    html! { <LegalPage page={PageKey::Terms} heading="Terms of Service" sections={TERMS} /> }
}
