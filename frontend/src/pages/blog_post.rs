use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::seo::Seo;
use crate::data::blog::{find_post, related_posts};
use crate::data::seo::post_meta;
use crate::pages::blog::PostCard;
use crate::pages::not_found::NotFound;
use crate::utils::scroll::scroll_to_top;
use crate::utils::share::{copy_to_clipboard, linkedin_share_url, share_url, twitter_share_url};
use crate::Route;

const RELATED_LIMIT: usize = 3;

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub id: u32,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostProps) -> Html {
    let copied = use_state(|| false);

    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        props.id,
    );

    let Some(post) = find_post(props.id) else {
        return html! { <NotFound /> };
    };

    let url = share_url(&post.path());

    let on_copy = {
        let copied = copied.clone();
        let url = url.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            copy_to_clipboard(url.clone(), move |ok| {
                if ok {
                    copied.set(true);
                    let copied = copied.clone();
                    Timeout::new(2_000, move || copied.set(false)).forget();
                }
            });
        })
    };

    let related = related_posts(post, RELATED_LIMIT);

    html! {
        <article class="blog-post-page">
            <Seo meta={post_meta(post)} />
            <header class="post-header" style={format!("background: {};", post.color)}>
                <Link<Route> to={Route::Blog} classes="back-link">{"← All posts"}</Link<Route>>
                <span class="post-category">{post.category}</span>
                <h1>{post.title}</h1>
                <div class="post-meta">
                    <span>{format!("By {}", post.author)}</span>
                    <span>{post.formatted_date()}</span>
                    <span>{post.read_time}</span>
                </div>
            </header>

            <div class="post-body">
                <p class="post-intro">{post.content.introduction}</p>
                { for post.content.sections.iter().map(|section| html! {
                    <section class="post-section">
                        <h2>{section.heading}</h2>
                        <p>{section.content}</p>
                    </section>
                })}
                <p class="post-conclusion">{post.content.conclusion}</p>

                <div class="post-tags">
                    { for post.tags.iter().map(|tag| html! { <span class="post-tag">{format!("#{}", tag)}</span> }) }
                </div>

                <div class="share-bar">
                    <span>{"Share this post"}</span>
                    <a href={twitter_share_url(post.title, &url)} target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                    <a href={linkedin_share_url(&url)} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    <button class="copy-link-button" onclick={on_copy}>
                        {if *copied { "Link copied!" } else { "Copy link" }}
                    </button>
                </div>
            </div>

            if !related.is_empty() {
                <section class="related-posts">
                    <h2>{"Related posts"}</h2>
                    <div class="posts-grid">
                        { for related.into_iter().map(|post| html! { <PostCard {post} /> }) }
                    </div>
                </section>
            }
        </article>
    }
}
