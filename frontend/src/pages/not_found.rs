use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::seo::Seo;
use crate::data::seo::{page_meta, PageKey};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <Seo meta={page_meta(PageKey::NotFound)} />
            <h1>{"404"}</h1>
            <p>{"We couldn't find the page you were looking for."}</p>
            <Link<Route> to={Route::Home} classes="hero-cta">{"Back to home"}</Link<Route>>
        </div>
    }
}
