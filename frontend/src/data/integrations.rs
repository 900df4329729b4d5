#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegrationCategory {
    Communication,
    ProjectManagement,
    Development,
    Design,
    Productivity,
    Crm,
    Marketing,
    Analytics,
    Finance,
    Storage,
    Support,
    Hr,
    Automation,
    Security,
    Calendar,
}

impl IntegrationCategory {
    pub const ALL: [IntegrationCategory; 15] = [
        IntegrationCategory::Communication,
        IntegrationCategory::ProjectManagement,
        IntegrationCategory::Development,
        IntegrationCategory::Design,
        IntegrationCategory::Productivity,
        IntegrationCategory::Crm,
        IntegrationCategory::Marketing,
        IntegrationCategory::Analytics,
        IntegrationCategory::Finance,
        IntegrationCategory::Storage,
        IntegrationCategory::Support,
        IntegrationCategory::Hr,
        IntegrationCategory::Automation,
        IntegrationCategory::Security,
        IntegrationCategory::Calendar,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IntegrationCategory::Communication => "Communication",
            IntegrationCategory::ProjectManagement => "Project Management",
            IntegrationCategory::Development => "Development",
            IntegrationCategory::Design => "Design",
            IntegrationCategory::Productivity => "Productivity",
            IntegrationCategory::Crm => "CRM",
            IntegrationCategory::Marketing => "Marketing",
            IntegrationCategory::Analytics => "Analytics",
            IntegrationCategory::Finance => "Finance",
            IntegrationCategory::Storage => "Storage",
            IntegrationCategory::Support => "Support",
            IntegrationCategory::Hr => "HR",
            IntegrationCategory::Automation => "Automation",
            IntegrationCategory::Security => "Security",
            IntegrationCategory::Calendar => "Calendar",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// What the category dropdown currently points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(IntegrationCategory),
}

impl CategorySelection {
    pub const ALL_LABEL: &'static str = "All";

    /// Parses a `<select>` value. Anything unrecognised shows everything.
    pub fn from_value(value: &str) -> Self {
        match IntegrationCategory::from_label(value) {
            Some(category) => CategorySelection::Only(category),
            None => CategorySelection::All,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            CategorySelection::All => Self::ALL_LABEL,
            CategorySelection::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: IntegrationCategory) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(selected) => *selected == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationEntry {
    pub name: &'static str,
    pub logo_url: &'static str,
    pub category: IntegrationCategory,
    pub description: &'static str,
}

impl IntegrationEntry {
    fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.label().to_lowercase().contains(needle)
    }
}

/// Entries visible for the given category and search text, in table order.
pub fn filter_integrations<'a>(
    entries: &'a [IntegrationEntry],
    selection: CategorySelection,
    query: &str,
) -> Vec<&'a IntegrationEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| selection.matches(entry.category))
        .filter(|entry| needle.is_empty() || entry.matches_query(&needle))
        .collect()
}

macro_rules! integration {
    ($name:expr, $logo:expr, $category:ident, $description:expr) => {
        IntegrationEntry {
            name: $name,
            logo_url: concat!("/assets/integrations/", $logo, ".svg"),
            category: IntegrationCategory::$category,
            description: $description,
        }
    };
}

pub const INTEGRATIONS: &[IntegrationEntry] = &[
    integration!("Slack", "slack", Communication, "Get task updates and approve requests without leaving your channels."),
    integration!("Microsoft Teams", "teams", Communication, "Post workflow notifications to Teams chats and meetings."),
    integration!("Zoom", "zoom", Communication, "Attach meeting links and recordings to the work they belong to."),
    integration!("Discord", "discord", Communication, "Send build and release alerts to your community server."),
    integration!("Jira", "jira", ProjectManagement, "Keep issues and sprints in sync between Jira and Workblox boards."),
    integration!("Asana", "asana", ProjectManagement, "Mirror Asana projects and tasks into your workspace."),
    integration!("Trello", "trello", ProjectManagement, "Turn Trello cards into tracked Workblox tasks."),
    integration!("Linear", "linear", ProjectManagement, "Two-way sync for Linear issues, cycles and labels."),
    integration!("GitHub", "github", Development, "Link pull requests and commits to tasks and close them on merge."),
    integration!("GitLab", "gitlab", Development, "Track merge requests and pipelines next to the work they ship."),
    integration!("Bitbucket", "bitbucket", Development, "Connect Git repositories hosted on Bitbucket Cloud to your boards."),
    integration!("Jenkins", "jenkins", Development, "Trigger jobs from workflows and report build status back."),
    integration!("Vercel", "vercel", Development, "See preview deployments on the tasks that produced them."),
    integration!("Sentry", "sentry", Development, "Create tasks from new errors and follow them to resolution."),
    integration!("Figma", "figma", Design, "Embed live Figma frames in specs and reviews."),
    integration!("Miro", "miro", Design, "Bring whiteboards into planning sessions."),
    integration!("Notion", "notion", Productivity, "Link Notion pages to projects and keep docs next to tasks."),
    integration!("Google Docs", "google-docs", Productivity, "Attach and preview documents on any task."),
    integration!("Evernote", "evernote", Productivity, "Turn notes into action items with one click."),
    integration!("Salesforce", "salesforce", Crm, "Kick off onboarding workflows when deals close."),
    integration!("HubSpot", "hubspot", Crm, "Sync contacts and companies with customer projects."),
    integration!("Pipedrive", "pipedrive", Crm, "Create follow-up tasks from pipeline stage changes."),
    integration!("Mailchimp", "mailchimp", Marketing, "Plan campaigns and track launches in one place."),
    integration!("Hootsuite", "hootsuite", Marketing, "Schedule social posts from your content calendar."),
    integration!("Google Analytics", "google-analytics", Analytics, "Pull traffic numbers into project dashboards."),
    integration!("Mixpanel", "mixpanel", Analytics, "Tie product metrics to the features that moved them."),
    integration!("Stripe", "stripe", Finance, "Follow payments and invoices alongside customer work."),
    integration!("QuickBooks", "quickbooks", Finance, "Send approved expenses straight to your books."),
    integration!("Google Drive", "google-drive", Storage, "Browse and attach Drive files from any task."),
    integration!("Dropbox", "dropbox", Storage, "Keep shared folders linked to the projects that use them."),
    integration!("OneDrive", "onedrive", Storage, "Attach OneDrive and SharePoint files to tasks."),
    integration!("Zendesk", "zendesk", Support, "Escalate tickets into engineering tasks automatically."),
    integration!("Intercom", "intercom", Support, "Turn customer conversations into feature requests."),
    integration!("BambooHR", "bamboohr", Hr, "Start onboarding checklists when a new hire is added."),
    integration!("Workday", "workday", Hr, "Keep team directories and time off in sync."),
    integration!("Zapier", "zapier", Automation, "Connect Workblox to thousands of apps without code."),
    integration!("Make", "make", Automation, "Build multi-step scenarios around Workblox events."),
    integration!("Okta", "okta", Security, "Single sign-on and automated user provisioning."),
    integration!("1Password", "1password", Security, "Share vault items securely with project members."),
    integration!("Google Calendar", "google-calendar", Calendar, "Show due dates and milestones on your calendar."),
    integration!("Outlook Calendar", "outlook", Calendar, "Block focus time for the tasks on your plate."),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[&IntegrationEntry]) -> Vec<&'static str> {
        entries.iter().map(|e| e.name).collect()
    }

    #[test]
    fn development_git_search_returns_repository_hosts_in_order() {
        let result = filter_integrations(
            INTEGRATIONS,
            CategorySelection::Only(IntegrationCategory::Development),
            "git",
        );
        assert_eq!(names(&result), vec!["GitHub", "GitLab", "Bitbucket"]);
    }

    #[test]
    fn defaults_return_everything() {
        let result = filter_integrations(INTEGRATIONS, CategorySelection::default(), "");
        assert_eq!(result.len(), INTEGRATIONS.len());
    }

    #[test]
    fn search_is_case_insensitive_and_covers_category_label() {
        let upper = filter_integrations(INTEGRATIONS, CategorySelection::All, "SLACK");
        assert_eq!(names(&upper), vec!["Slack"]);

        let by_label = filter_integrations(INTEGRATIONS, CategorySelection::All, "project management");
        assert!(!by_label.is_empty());
        assert!(by_label
            .iter()
            .all(|e| e.category == IntegrationCategory::ProjectManagement));
    }

    #[test]
    fn whitespace_in_query_is_matched_literally() {
        let trailing = filter_integrations(INTEGRATIONS, CategorySelection::All, "slack ");
        assert!(trailing.is_empty());

        let blank = filter_integrations(
            INTEGRATIONS,
            CategorySelection::Only(IntegrationCategory::Storage),
            "   ",
        );
        assert!(blank.is_empty());

        let phrase = filter_integrations(INTEGRATIONS, CategorySelection::All, "pull requests");
        assert_eq!(names(&phrase), vec!["GitHub"]);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let result = filter_integrations(INTEGRATIONS, CategorySelection::All, "no such tool");
        assert!(result.is_empty());
    }

    #[test]
    fn every_result_satisfies_the_predicate() {
        let queries = ["", "git", "sync", "TASK", "e", "slack ", " to ", "pull requests"];
        let mut selections = vec![CategorySelection::All];
        selections.extend(IntegrationCategory::ALL.iter().map(|c| CategorySelection::Only(*c)));

        for selection in &selections {
            for query in &queries {
                let result = filter_integrations(INTEGRATIONS, *selection, query);
                let needle = query.to_lowercase();
                for entry in &result {
                    assert!(INTEGRATIONS.contains(entry));
                    assert!(selection.matches(entry.category));
                    assert!(
                        needle.is_empty()
                            || entry.name.to_lowercase().contains(&needle)
                            || entry.description.to_lowercase().contains(&needle)
                            || entry.category.label().to_lowercase().contains(&needle)
                    );
                }
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let selection = CategorySelection::Only(IntegrationCategory::Development);
        let once: Vec<IntegrationEntry> = filter_integrations(INTEGRATIONS, selection, "task")
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<IntegrationEntry> = filter_integrations(&once, selection, "task")
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn selection_round_trips_through_select_values() {
        assert_eq!(CategorySelection::from_value("All"), CategorySelection::All);
        assert_eq!(
            CategorySelection::from_value("CRM"),
            CategorySelection::Only(IntegrationCategory::Crm)
        );
        assert_eq!(CategorySelection::from_value("Gardening"), CategorySelection::All);
        for category in IntegrationCategory::ALL {
            let selection = CategorySelection::Only(category);
            assert_eq!(CategorySelection::from_value(selection.value()), selection);
        }
    }

    #[test]
    fn every_category_has_at_least_one_entry() {
        for category in IntegrationCategory::ALL {
            assert!(INTEGRATIONS.iter().any(|e| e.category == category), "{:?}", category);
        }
    }
}
