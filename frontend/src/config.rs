pub struct SiteConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub twitter_handle: &'static str,
    pub contact_email: &'static str,
    pub legal_email: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    title: "Workblox",
    description: "Workblox brings your team's tasks, docs and tools into one workspace. Automate the busywork and connect the apps you already use.",
    twitter_handle: "@workblox",
    contact_email: "hello@workblox.io",
    legal_email: "legal@workblox.io",
};

const DEFAULT_SITE_URL: &str = "https://workblox.io";

/// Canonical origin of the site, without a trailing slash.
pub fn get_site_url() -> String {
    option_env!("WORKBLOX_SITE_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_SITE_URL)
        .trim_end_matches('/')
        .to_string()
}

pub fn absolute_url(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return get_site_url();
    }
    if path.starts_with('/') {
        format!("{}{}", get_site_url(), path)
    } else {
        format!("{}/{}", get_site_url(), path)
    }
}
