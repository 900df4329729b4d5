use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SITE;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = web_sys::js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{SITE.title}</span>
                    <p>{"One calm place for your team's work."}</p>
                </div>
                <div class="footer-columns">
                    <div class="footer-column">
                        <h4>{"Product"}</h4>
                        <Link<Route> to={Route::Integrations}>{"Integrations"}</Link<Route>>
                        <Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>>
                        <Link<Route> to={Route::SignIn}>{"Early access"}</Link<Route>>
                    </div>
                    <div class="footer-column">
                        <h4>{"Company"}</h4>
                        <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                        <Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>>
                        <a href={format!("mailto:{}", SITE.contact_email)}>{"Contact"}</a>
                    </div>
                    <div class="footer-column">
                        <h4>{"Legal"}</h4>
                        <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                        <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                    </div>
                </div>
            </div>
            <p class="footer-copyright">{format!("© {} {}. All rights reserved.", year, SITE.title)}</p>
        </footer>
    }
}
