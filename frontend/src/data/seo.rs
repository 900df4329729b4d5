use serde_json::{json, Value};

use crate::config::{self, SITE};
use crate::data::blog::BlogPost;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKey {
    Home,
    About,
    Blog,
    BlogPost,
    Faq,
    Integrations,
    SignIn,
    Privacy,
    Terms,
    NotFound,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub key: PageKey,
    pub title: String,
    pub description: String,
    pub path: String,
    pub og_type: &'static str,
    pub keywords: Vec<&'static str>,
    pub author: Option<String>,
    pub published: Option<String>,
}

impl PageMeta {
    fn new(key: PageKey, title: &str, description: &str, path: &str, keywords: &[&'static str]) -> Self {
        Self {
            key,
            title: title.to_string(),
            description: description.to_string(),
            path: path.to_string(),
            og_type: "website",
            keywords: keywords.to_vec(),
            author: None,
            published: None,
        }
    }

    pub fn document_title(&self) -> String {
        if self.key == PageKey::Home {
            SITE.title.to_string()
        } else {
            format!("{} | {}", self.title, SITE.title)
        }
    }

    pub fn canonical_url(&self) -> String {
        config::absolute_url(&self.path)
    }
}

/// `<meta>` element to upsert into the document head.
#[derive(Clone, Debug, PartialEq)]
pub struct MetaTag {
    /// `name` or `property`.
    pub attr: &'static str,
    pub key: &'static str,
    pub content: String,
}

impl MetaTag {
    fn name(key: &'static str, content: impl Into<String>) -> Self {
        Self { attr: "name", key, content: content.into() }
    }

    fn property(key: &'static str, content: impl Into<String>) -> Self {
        Self { attr: "property", key, content: content.into() }
    }
}

pub fn page_meta(key: PageKey) -> PageMeta {
    match key {
        PageKey::Home => PageMeta::new(
            key,
            "Home",
            SITE.description,
            "/",
            &["workspace", "project management", "automation", "integrations"],
        ),
        PageKey::About => PageMeta::new(
            key,
            "About",
            "Meet the team building Workblox and learn why we think work deserves one calm place.",
            "/about",
            &["about", "team", "mission"],
        ),
        PageKey::Blog => PageMeta::new(
            key,
            "Blog",
            "Guides on productivity, automation and connecting the tools your team already uses.",
            "/blog",
            &["blog", "productivity", "automation"],
        ),
        PageKey::BlogPost => PageMeta::new(
            key,
            "Blog",
            "Read the latest from the Workblox blog.",
            "/blog",
            &["blog"],
        ),
        PageKey::Faq => PageMeta::new(
            key,
            "FAQ",
            "Answers to common questions about Workblox features, pricing and security.",
            "/faq",
            &["faq", "pricing", "security"],
        ),
        PageKey::Integrations => PageMeta::new(
            key,
            "Integrations",
            "Connect Workblox to Slack, GitHub, Jira, Notion and dozens more tools.",
            "/integrations",
            &["integrations", "slack", "github", "jira"],
        ),
        PageKey::SignIn => PageMeta::new(
            key,
            "Sign in",
            "Sign in to your Workblox workspace or join the early access waitlist.",
            "/signin",
            &["sign in", "waitlist"],
        ),
        PageKey::Privacy => PageMeta::new(
            key,
            "Privacy Policy",
            "How Workblox collects, uses and protects your information.",
            "/privacy",
            &["privacy"],
        ),
        PageKey::Terms => PageMeta::new(
            key,
            "Terms of Service",
            "The terms that govern your use of Workblox.",
            "/terms",
            &["terms"],
        ),
        PageKey::NotFound => PageMeta::new(
            key,
            "Page not found",
            "The page you were looking for doesn't exist.",
            "/404",
            &[],
        ),
    }
}

pub fn post_meta(post: &BlogPost) -> PageMeta {
    let mut meta = page_meta(PageKey::BlogPost);
    meta.title = post.title.to_string();
    meta.description = post.excerpt.to_string();
    meta.path = post.path();
    meta.og_type = "article";
    meta.keywords = post.tags.to_vec();
    meta.author = Some(post.author.to_string());
    meta.published = Some(post.date.to_string());
    meta
}

pub fn meta_tags(meta: &PageMeta) -> Vec<MetaTag> {
    let title = meta.document_title();
    let url = meta.canonical_url();
    let mut tags = vec![
        MetaTag::name("description", meta.description.clone()),
        MetaTag::property("og:title", title.clone()),
        MetaTag::property("og:description", meta.description.clone()),
        MetaTag::property("og:type", meta.og_type),
        MetaTag::property("og:url", url),
        MetaTag::property("og:site_name", SITE.title),
        MetaTag::name("twitter:card", "summary_large_image"),
        MetaTag::name("twitter:site", SITE.twitter_handle),
        MetaTag::name("twitter:title", title),
        MetaTag::name("twitter:description", meta.description.clone()),
    ];
    if !meta.keywords.is_empty() {
        tags.push(MetaTag::name("keywords", meta.keywords.join(", ")));
    }
    if meta.key == PageKey::NotFound {
        tags.push(MetaTag::name("robots", "noindex"));
    }
    if let Some(published) = &meta.published {
        tags.push(MetaTag::property("article:published_time", published.clone()));
    }
    tags
}

/// Structured data for the `application/ld+json` block.
pub fn json_ld(meta: &PageMeta) -> Value {
    let site_url = config::get_site_url();
    match meta.key {
        PageKey::Home => json!({
            "@context": "https://schema.org",
            "@graph": [
                {
                    "@type": "Organization",
                    "name": SITE.title,
                    "url": site_url,
                    "logo": format!("{}/assets/logo.png", site_url),
                    "email": SITE.contact_email,
                },
                {
                    "@type": "WebSite",
                    "name": SITE.title,
                    "url": site_url,
                    "description": SITE.description,
                },
            ],
        }),
        PageKey::BlogPost => json!({
            "@context": "https://schema.org",
            "@type": "BlogPosting",
            "headline": meta.title,
            "description": meta.description,
            "url": meta.canonical_url(),
            "datePublished": meta.published,
            "author": { "@type": "Person", "name": meta.author },
            "publisher": { "@type": "Organization", "name": SITE.title, "url": site_url },
            "keywords": meta.keywords.join(", "),
        }),
        _ => json!({
            "@context": "https://schema.org",
            "@type": "WebPage",
            "name": meta.document_title(),
            "description": meta.description,
            "url": meta.canonical_url(),
            "isPartOf": { "@type": "WebSite", "name": SITE.title, "url": site_url },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::blog::find_post;

    #[test]
    fn home_title_is_site_title() {
        assert_eq!(page_meta(PageKey::Home).document_title(), "Workblox");
        assert_eq!(page_meta(PageKey::Faq).document_title(), "FAQ | Workblox");
    }

    #[test]
    fn canonical_url_uses_page_path() {
        let meta = page_meta(PageKey::Integrations);
        assert_eq!(meta.canonical_url(), format!("{}/integrations", config::get_site_url()));
        assert_eq!(page_meta(PageKey::Home).canonical_url(), config::get_site_url());
    }

    #[test]
    fn meta_tags_cover_open_graph_and_twitter() {
        let tags = meta_tags(&page_meta(PageKey::About));
        let find = |key: &str| tags.iter().find(|t| t.key == key).map(|t| t.content.clone());
        assert_eq!(find("og:title").as_deref(), Some("About | Workblox"));
        assert_eq!(find("og:type").as_deref(), Some("website"));
        assert!(find("twitter:card").is_some());
        assert!(find("robots").is_none());
        assert!(tags.iter().filter(|t| t.key.starts_with("og:")).all(|t| t.attr == "property"));
    }

    #[test]
    fn not_found_is_not_indexed() {
        let tags = meta_tags(&page_meta(PageKey::NotFound));
        assert!(tags.iter().any(|t| t.key == "robots" && t.content == "noindex"));
        assert!(tags.iter().all(|t| t.key != "keywords"));
    }

    #[test]
    fn blog_post_meta_is_an_article() {
        let post = find_post(2).unwrap();
        let meta = post_meta(post);
        assert_eq!(meta.og_type, "article");
        assert_eq!(meta.path, "/blog/2");
        assert!(meta_tags(&meta).iter().any(|t| t.key == "article:published_time" && t.content == "2025-02-03"));

        let doc = json_ld(&meta);
        assert_eq!(doc["@type"], "BlogPosting");
        assert_eq!(doc["headline"], post.title);
        assert_eq!(doc["author"]["name"], post.author);
    }

    #[test]
    fn home_json_ld_describes_the_organization() {
        let doc = json_ld(&page_meta(PageKey::Home));
        assert_eq!(doc["@graph"][0]["@type"], "Organization");
        assert_eq!(doc["@graph"][1]["@type"], "WebSite");
    }

    #[test]
    fn other_pages_are_web_pages() {
        let doc = json_ld(&page_meta(PageKey::Terms));
        assert_eq!(doc["@type"], "WebPage");
        assert_eq!(doc["name"], "Terms of Service | Workblox");
    }
}
