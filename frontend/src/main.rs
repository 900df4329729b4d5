use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod data {
    pub mod blog;
    pub mod faq;
    pub mod integrations;
    pub mod seo;
}
mod auth {
    pub mod otp;
    pub mod signin;
    pub mod validation;
    pub mod wizard;
}
mod components {
    pub mod footer;
    pub mod nav;
    pub mod scroll_progress;
    pub mod seo;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod blog_post;
    pub mod faq;
    pub mod home;
    pub mod integrations;
    pub mod legal;
    pub mod not_found;
    pub mod signin;
}
mod utils {
    pub mod accordion;
    pub mod registry;
    pub mod scroll;
    pub mod share;
}

use components::footer::Footer;
use components::nav::Nav;
use components::scroll_progress::ScrollProgress;
use pages::{
    about::About,
    blog::Blog,
    blog_post::BlogPostPage,
    faq::Faq,
    home::Home,
    integrations::Integrations,
    legal::{Privacy, Terms},
    not_found::NotFound,
    signin::SignIn,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/blog")]
    Blog,
    #[at("/blog/:id")]
    BlogPost { id: u32 },
    #[at("/faq")]
    Faq,
    #[at("/integrations")]
    Integrations,
    #[at("/signin")]
    SignIn,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Blog => html! { <Blog /> },
        Route::BlogPost { id } => html! { <BlogPostPage id={id} /> },
        Route::Faq => html! { <Faq /> },
        Route::Integrations => html! { <Integrations /> },
        Route::SignIn => html! { <SignIn /> },
        Route::Privacy => html! { <Privacy /> },
        Route::Terms => html! { <Terms /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <ScrollProgress />
            <Nav />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting {} site", config::SITE.title);
    yew::Renderer::<App>::new().render();
}
