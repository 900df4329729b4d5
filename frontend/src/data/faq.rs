#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaqCategory {
    Product,
    Features,
    Business,
    Technical,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 4] = [
        FaqCategory::Product,
        FaqCategory::Features,
        FaqCategory::Business,
        FaqCategory::Technical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FaqCategory::Product => "Product",
            FaqCategory::Features => "Features",
            FaqCategory::Business => "Business",
            FaqCategory::Technical => "Technical",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: FaqCategory,
}

impl FaqEntry {
    /// URL fragment for linking straight to this question.
    pub fn anchor(&self) -> String {
        let mut slug = String::new();
        for c in self.question.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        slug.trim_end_matches('-').to_string()
    }
}

/// Locates a question by its anchor, returning its category and its
/// position within that category.
pub fn find_by_anchor(anchor: &str) -> Option<(FaqCategory, usize)> {
    let anchor = anchor.trim_start_matches('#');
    FaqCategory::ALL.iter().find_map(|category| {
        faqs_in(*category)
            .iter()
            .position(|entry| entry.anchor() == anchor)
            .map(|index| (*category, index))
    })
}

const fn faq(category: FaqCategory, question: &'static str, answer: &'static str) -> FaqEntry {
    FaqEntry { question, answer, category }
}

pub const FAQS: &[FaqEntry] = &[
    faq(
        FaqCategory::Product,
        "What is Workblox?",
        "Workblox is a workspace that puts your team's tasks, documents and tools side by side. Instead of jumping between tabs, you plan, track and automate work from one place.",
    ),
    faq(
        FaqCategory::Product,
        "Who is Workblox for?",
        "Small and mid-sized teams that have outgrown spreadsheets but don't want to stitch together five separate tools. Operations, product and agency teams get the most out of it.",
    ),
    faq(
        FaqCategory::Product,
        "Is Workblox available today?",
        "We're in early access. Join the waitlist from the sign-in page and we'll send an invite as soon as a spot opens up.",
    ),
    faq(
        FaqCategory::Features,
        "Which tools does Workblox connect to?",
        "More than forty, including Slack, GitHub, Jira, Notion and Google Drive. The integrations page lists every connector and lets you search by name or category.",
    ),
    faq(
        FaqCategory::Features,
        "Can I automate repetitive work?",
        "Yes. Workflows react to events such as a task moving columns or a pull request merging, and can notify people, create follow-up tasks or update connected apps.",
    ),
    faq(
        FaqCategory::Features,
        "Does Workblox work on mobile?",
        "The web app is fully responsive, and native iOS and Android apps are planned for general availability.",
    ),
    faq(
        FaqCategory::Business,
        "How much does Workblox cost?",
        "Early access is free. Paid plans will be per seat with a free tier for teams of up to five people.",
    ),
    faq(
        FaqCategory::Business,
        "Do you offer discounts for non-profits and education?",
        "Yes. Registered non-profits and schools get 50% off any paid plan. Write to hello@workblox.io with proof of status.",
    ),
    faq(
        FaqCategory::Business,
        "Can I cancel at any time?",
        "Plans are month to month. You can export your data and cancel from the billing settings whenever you like.",
    ),
    faq(
        FaqCategory::Technical,
        "Where is my data stored?",
        "Data is stored in EU and US regions of our cloud provider, encrypted at rest and in transit. You choose the region when creating a workspace.",
    ),
    faq(
        FaqCategory::Technical,
        "Do you support single sign-on?",
        "SAML single sign-on and SCIM provisioning through Okta, Azure AD and Google Workspace are available on the business plan.",
    ),
    faq(
        FaqCategory::Technical,
        "Is there an API?",
        "A REST API and webhooks are available to every workspace. API keys are scoped per workspace and can be rotated at any time.",
    ),
];

/// Entries of one category, in table order.
pub fn faqs_in(category: FaqCategory) -> Vec<&'static FaqEntry> {
    FAQS.iter().filter(|entry| entry.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_is_populated() {
        for category in FaqCategory::ALL {
            assert!(!faqs_in(category).is_empty(), "{} has no entries", category.label());
        }
    }

    #[test]
    fn categories_partition_the_table() {
        let total: usize = FaqCategory::ALL.iter().map(|c| faqs_in(*c).len()).sum();
        assert_eq!(total, FAQS.len());
    }

    #[test]
    fn anchors_are_slugs() {
        assert_eq!(FAQS[0].anchor(), "what-is-workblox");
        assert_eq!(faqs_in(FaqCategory::Technical)[1].anchor(), "do-you-support-single-sign-on");
    }

    #[test]
    fn anchors_resolve_to_category_and_index() {
        assert_eq!(find_by_anchor("#is-there-an-api"), Some((FaqCategory::Technical, 2)));
        assert_eq!(find_by_anchor("can-i-cancel-at-any-time"), Some((FaqCategory::Business, 2)));
        assert_eq!(find_by_anchor("#nope"), None);
    }

    #[test]
    fn faqs_in_preserves_order() {
        let product = faqs_in(FaqCategory::Product);
        assert_eq!(product[0].question, "What is Workblox?");
        assert_eq!(product[2].question, "Is Workblox available today?");
    }
}
