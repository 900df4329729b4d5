use chrono::NaiveDate;

#[derive(Clone, Debug, PartialEq)]
pub struct BlogSection {
    pub heading: &'static str,
    pub content: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlogContent {
    pub introduction: &'static str,
    pub sections: &'static [BlogSection],
    pub conclusion: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub date: &'static str,
    pub read_time: &'static str,
    pub color: &'static str,
    pub author: &'static str,
    pub content: BlogContent,
    pub tags: &'static [&'static str],
}

impl BlogPost {
    pub fn path(&self) -> String {
        format!("/blog/{}", self.id)
    }

    /// "March 4, 2025", or the raw date string if it isn't ISO formatted.
    pub fn formatted_date(&self) -> String {
        match NaiveDate::parse_from_str(self.date, "%Y-%m-%d") {
            Ok(date) => date.format("%B %-d, %Y").to_string(),
            Err(_) => self.date.to_string(),
        }
    }
}

pub fn find_post(id: u32) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.id == id)
}

/// Other posts in the same category, table order, at most `limit`.
pub fn related_posts(post: &BlogPost, limit: usize) -> Vec<&'static BlogPost> {
    POSTS
        .iter()
        .filter(|other| other.category == post.category && other.id != post.id)
        .take(limit)
        .collect()
}

pub fn categories() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for post in POSTS {
        if !seen.contains(&post.category) {
            seen.push(post.category);
        }
    }
    seen
}

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "Why your team needs a single source of truth",
        excerpt: "Scattered tools cost more than subscription fees. Here's how consolidating work into one place gives hours back every week.",
        category: "Productivity",
        date: "2025-01-14",
        read_time: "5 min read",
        color: "linear-gradient(135deg, #6366f1, #8b5cf6)",
        author: "Maya Chen",
        content: BlogContent {
            introduction: "Most teams don't decide to spread their work across a dozen tools. It happens one reasonable choice at a time, until nobody is sure where the latest version of anything lives.",
            sections: &[
                BlogSection {
                    heading: "The hidden cost of context switching",
                    content: "Every hop between a chat app, a tracker and a doc editor costs attention. Across a team of ten, those minutes add up to days each month.",
                },
                BlogSection {
                    heading: "What a single source of truth looks like",
                    content: "It doesn't mean one tool for everything. It means one place where tasks, decisions and the links to everything else come together.",
                },
                BlogSection {
                    heading: "Getting started",
                    content: "Pick the project that hurts the most, move its tasks into one board, and connect the tools it already depends on. Expand once the team feels the difference.",
                },
            ],
            conclusion: "Consolidation is less about tools and more about habits. Start small, make the shared place the easiest place to look, and the rest follows.",
        },
        tags: &["productivity", "teams", "tooling"],
    },
    BlogPost {
        id: 2,
        title: "Five automations every operations team should set up",
        excerpt: "From onboarding checklists to overdue reminders, these workflows quietly remove hours of manual follow-up.",
        category: "Automation",
        date: "2025-02-03",
        read_time: "7 min read",
        color: "linear-gradient(135deg, #0ea5e9, #22d3ee)",
        author: "Daniel Okafor",
        content: BlogContent {
            introduction: "Automation works best on the boring parts of the job: the reminders, handoffs and status updates that nobody remembers to do consistently.",
            sections: &[
                BlogSection {
                    heading: "Onboarding checklists",
                    content: "Create the same set of tasks every time a new hire lands in your HR system, assigned to the right people with the right due dates.",
                },
                BlogSection {
                    heading: "Overdue nudges",
                    content: "Post a friendly message in the owner's channel when a task slips past its due date, instead of chasing it in standup.",
                },
                BlogSection {
                    heading: "Handoff notifications",
                    content: "When work moves from one column to the next, tell the next person it's their turn, along with the context they need.",
                },
            ],
            conclusion: "Start with one automation, watch it for a week, then add the next. Automations you trust are the ones that stick.",
        },
        tags: &["automation", "operations", "workflows"],
    },
    BlogPost {
        id: 3,
        title: "Running async standups that people actually read",
        excerpt: "Written standups can replace the daily meeting, if you design them for skimming.",
        category: "Productivity",
        date: "2025-02-20",
        read_time: "4 min read",
        color: "linear-gradient(135deg, #f59e0b, #f97316)",
        author: "Maya Chen",
        content: BlogContent {
            introduction: "A standup meeting is a fifteen minute interruption for the whole team. An async standup can carry the same information in two minutes of reading.",
            sections: &[
                BlogSection {
                    heading: "Keep it to three questions",
                    content: "What moved, what's next, what's blocked. Anything longer stops getting read by Wednesday.",
                },
                BlogSection {
                    heading: "Link, don't describe",
                    content: "Point at the task instead of retelling it. Readers who care can click through.",
                },
            ],
            conclusion: "Async standups reward consistency. Post at the same time every day and keep the format boring.",
        },
        tags: &["remote", "teams", "meetings"],
    },
    BlogPost {
        id: 4,
        title: "Connecting GitHub to your project board",
        excerpt: "Link pull requests to tasks so your board always reflects what has actually shipped.",
        category: "Integrations",
        date: "2025-03-04",
        read_time: "6 min read",
        color: "linear-gradient(135deg, #10b981, #14b8a6)",
        author: "Sam Rivera",
        content: BlogContent {
            introduction: "Boards drift out of date because updating them is a separate chore. Connecting your code host removes the chore entirely.",
            sections: &[
                BlogSection {
                    heading: "Reference tasks in branch names",
                    content: "Include the task key in the branch name and Workblox links every pull request from that branch automatically.",
                },
                BlogSection {
                    heading: "Close on merge",
                    content: "When a linked pull request merges, the task moves to done. No more cards stuck in review for a week after release.",
                },
            ],
            conclusion: "Once the board updates itself, people start trusting it again, and that's the whole point.",
        },
        tags: &["github", "integrations", "engineering"],
    },
    BlogPost {
        id: 5,
        title: "Choosing integrations without creating a mess",
        excerpt: "Every connected app is another place data can go stale. A short checklist for deciding what to connect.",
        category: "Integrations",
        date: "2025-03-18",
        read_time: "5 min read",
        color: "linear-gradient(135deg, #ec4899, #f43f5e)",
        author: "Sam Rivera",
        content: BlogContent {
            introduction: "It's tempting to connect everything on day one. Resist it, and connect the tools your workflows actually depend on.",
            sections: &[
                BlogSection {
                    heading: "Ask who owns the data",
                    content: "Each piece of information should have one home. Integrations should point at it, not copy it around.",
                },
                BlogSection {
                    heading: "Review quarterly",
                    content: "Remove connections nobody uses. Fewer moving parts means fewer surprises.",
                },
            ],
            conclusion: "A handful of well-chosen integrations beats forty half-configured ones.",
        },
        tags: &["integrations", "tooling"],
    },
    BlogPost {
        id: 6,
        title: "Introducing the Workblox early access program",
        excerpt: "We're opening Workblox to a first group of teams. Here's what's included and how to join.",
        category: "Company",
        date: "2025-04-01",
        read_time: "3 min read",
        color: "linear-gradient(135deg, #3b82f6, #6366f1)",
        author: "Priya Nair",
        content: BlogContent {
            introduction: "After a year of building with a handful of design partners, we're ready to let more teams in.",
            sections: &[
                BlogSection {
                    heading: "What's included",
                    content: "Boards, docs, workflows and the full integrations directory, free for the duration of early access.",
                },
                BlogSection {
                    heading: "How to join",
                    content: "Sign up for the waitlist from the sign-in page. We invite new teams every week.",
                },
            ],
            conclusion: "We can't wait to see what you build. Tell us what's missing, and we'll build that too.",
        },
        tags: &["announcement", "early access"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_post_by_id() {
        assert_eq!(find_post(4).map(|p| p.title), Some("Connecting GitHub to your project board"));
        assert!(find_post(999).is_none());
    }

    #[test]
    fn related_posts_share_category_and_exclude_self() {
        let post = find_post(1).unwrap();
        let related = related_posts(post, 3);
        assert_eq!(related.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
        assert!(related.iter().all(|p| p.category == post.category && p.id != post.id));
    }

    #[test]
    fn related_posts_respects_limit() {
        let post = find_post(4).unwrap();
        assert_eq!(related_posts(post, 0).len(), 0);
        assert_eq!(related_posts(post, 5).len(), 1);
    }

    #[test]
    fn lone_category_has_no_related_posts() {
        let post = find_post(6).unwrap();
        assert!(related_posts(post, 3).is_empty());
    }

    #[test]
    fn ids_are_unique() {
        for post in POSTS {
            assert_eq!(POSTS.iter().filter(|p| p.id == post.id).count(), 1);
        }
    }

    #[test]
    fn dates_format_for_display() {
        assert_eq!(find_post(2).unwrap().formatted_date(), "February 3, 2025");

        let mut post = find_post(2).unwrap().clone();
        post.date = "soon";
        assert_eq!(post.formatted_date(), "soon");
    }

    #[test]
    fn categories_are_listed_once_in_table_order() {
        assert_eq!(categories(), vec!["Productivity", "Automation", "Integrations", "Company"]);
    }
}
