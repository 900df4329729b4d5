use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::seo::Seo;
use crate::data::blog::{categories, BlogPost, POSTS};
use crate::data::seo::{page_meta, PageKey};
use crate::utils::scroll::scroll_to_top;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: &'static BlogPost,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = props.post;
    html! {
        <Link<Route> to={Route::BlogPost { id: post.id }} classes="post-card">
            <div class="post-card-banner" style={format!("background: {};", post.color)}>
                <span class="post-category">{post.category}</span>
            </div>
            <div class="post-card-body">
                <h3>{post.title}</h3>
                <p>{post.excerpt}</p>
                <div class="post-meta">
                    <span>{post.author}</span>
                    <span>{post.formatted_date()}</span>
                    <span>{post.read_time}</span>
                </div>
            </div>
        </Link<Route>>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let active = use_state(|| None::<&'static str>);

    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    let chip = |label: &'static str, value: Option<&'static str>| {
        let selected = *active == value;
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(value))
        };
        html! {
            <button class={classes!("category-chip", selected.then_some("active"))} {onclick}>
                {label}
            </button>
        }
    };

    let posts: Vec<&'static BlogPost> = POSTS
        .iter()
        .filter(|post| active.map_or(true, |category| post.category == category))
        .collect();

    html! {
        <div class="blog-page">
            <Seo meta={page_meta(PageKey::Blog)} />
            <section class="blog-hero">
                <h1>{"The Workblox Blog"}</h1>
                <p>{"Ideas on calmer, better-connected teamwork."}</p>
            </section>
            <div class="category-chips">
                {chip("All", None)}
                { for categories().into_iter().map(|category| chip(category, Some(category))) }
            </div>
            <div class="posts-grid">
                { for posts.into_iter().map(|post| html! { <PostCard {post} /> }) }
            </div>
        </div>
    }
}
