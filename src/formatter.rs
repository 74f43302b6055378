use valq::query_value;

use crate::github::{Contributions, Item};

const COMMENT_PREVIEW_MAX_LEN: usize = 80;

#[derive(Debug, Clone, Copy)]
enum Section {
    Commits,
    CommitComments,
    IssueComments,
    Issues,
    PullRequests,
    Reviews,
}

impl Section {
    const ALL: [Section; 6] = [
        Section::Commits,
        Section::PullRequests,
        Section::Reviews,
        Section::Issues,
        Section::IssueComments,
        Section::CommitComments,
    ];

    fn heading(self) -> &'static str {
        match self {
            Section::Commits => "Commits",
            Section::CommitComments => "Commit comments",
            Section::IssueComments => "Issue comments",
            Section::Issues => "Issues",
            Section::PullRequests => "Pull requests",
            Section::Reviews => "Reviews",
        }
    }

    fn items(self, report: &Contributions) -> &[Item] {
        match self {
            Section::Commits => &report.commits,
            Section::CommitComments => &report.commit_comments,
            Section::IssueComments => &report.issue_comments,
            Section::Issues => &report.issues,
            Section::PullRequests => &report.pull_requests,
            Section::Reviews => &report.reviews,
        }
    }

    fn date(self, item: &Item) -> Option<&str> {
        match self {
            Section::Commits => query_value!(item.committedDate -> str),
            Section::CommitComments | Section::IssueComments => {
                query_value!(item.publishedAt -> str)
            }
            Section::Issues | Section::PullRequests | Section::Reviews => {
                query_value!(item.occurredAt -> str)
            }
        }
    }

    fn url(self, item: &Item) -> Option<&str> {
        match self {
            Section::Commits | Section::CommitComments | Section::IssueComments => {
                query_value!(item.url -> str)
            }
            Section::Issues => query_value!(item.issue.url -> str),
            Section::PullRequests => query_value!(item.pullRequest.url -> str),
            Section::Reviews => query_value!(item.pullRequestReview.url -> str),
        }
    }

    fn title(self, item: &Item) -> Option<&str> {
        match self {
            Section::Commits => query_value!(item.messageHeadline -> str),
            Section::CommitComments => query_value!(item.repository["nameWithOwner"] -> str),
            Section::IssueComments => query_value!(item.issue.title -> str),
            Section::Issues => query_value!(item.issue.title -> str),
            Section::PullRequests => query_value!(item.pullRequest.title -> str),
            Section::Reviews => query_value!(item.pullRequestReview.pullRequest.title -> str),
        }
    }

    fn body(self, item: &Item) -> Option<&str> {
        match self {
            Section::CommitComments | Section::IssueComments => query_value!(item.body -> str),
            Section::Reviews => query_value!(item.pullRequestReview.body -> str),
            _ => None,
        }
    }
}

pub fn format_markdown(host: &str, report: &Contributions, compact: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# {} on {host} [{}, {})\n\n",
        report.user.login,
        report.window.from.date_naive(),
        report.window.to.date_naive(),
    ));

    if Section::ALL.iter().all(|s| s.items(report).is_empty()) {
        out.push_str("_No activity found._\n");
        return out;
    }

    for section in Section::ALL {
        let items = section.items(report);
        if items.is_empty() {
            continue;
        }
        if !out.ends_with("\n\n") {
            out.push('\n');
        }
        out.push_str(&format!("## {} ({})\n\n", section.heading(), items.len()));

        for item in items {
            let date = section.date(item).map(display_date).unwrap_or_default();
            let url = section.url(item).unwrap_or("");
            match section.title(item) {
                Some(title) => out.push_str(&format!("- {date} {title} {url}\n")),
                None => out.push_str(&format!("- {date} {url}\n")),
            }

            if !compact
                && let Some(body) = section.body(item)
                && let Some(line) = first_line_preview(body)
            {
                out.push_str("  > ");
                out.push_str(&line);
                out.push('\n');
            }
        }
    }

    out
}

fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&chrono::Utc).date_naive().to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn first_line_preview(body: &str) -> Option<String> {
    let line = body.lines().next()?.trim();
    if line.is_empty() {
        return None;
    }
    if line.chars().count() <= COMMENT_PREVIEW_MAX_LEN {
        return Some(line.to_string());
    }
    let mut out: String = line.chars().take(COMMENT_PREVIEW_MAX_LEN).collect();
    out.push_str("...");
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{UserInfo, Window};
    use chrono::TimeZone;
    use serde_json::json;

    fn empty_report() -> Contributions {
        Contributions {
            user: UserInfo {
                id: "U1".to_string(),
                login: "octo".to_string(),
                name: None,
                url: "https://github.com/octo".to_string(),
            },
            window: Window::new(
                chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
                chrono::Utc.with_ymd_and_hms(2025, 1, 8, 0, 0, 0).unwrap(),
            ),
            commits: Vec::new(),
            commit_comments: Vec::new(),
            issue_comments: Vec::new(),
            issues: Vec::new(),
            pull_requests: Vec::new(),
            reviews: Vec::new(),
        }
    }

    fn sample_report() -> Contributions {
        let mut report = empty_report();
        report.issue_comments.push(json!({
            "url": "https://example.test/comment/1",
            "body": "hello\nworld",
            "publishedAt": "2025-01-02T10:00:00Z",
            "issue": { "title": "Issue A", "url": "https://example.test/issue/1" },
        }));
        report.commits.push(json!({
            "oid": "abc",
            "url": "https://example.test/commit/abc",
            "messageHeadline": "Fix parser",
            "committedDate": "2025-01-03T00:00:00+09:00",
        }));
        report
    }

    #[test]
    fn format_markdown_empty() {
        let out = format_markdown("github.com", &empty_report(), false);
        assert!(out.contains("# octo on github.com [2025-01-01, 2025-01-08)"));
        assert!(out.contains("_No activity found._"));
    }

    #[test]
    fn format_markdown_sections() {
        let out = format_markdown("github.com", &sample_report(), false);
        assert!(out.contains("## Commits (1)"));
        assert!(out.contains("- 2025-01-02 Fix parser https://example.test/commit/abc"));
        assert!(out.contains("## Issue comments (1)"));
        assert!(out.contains("- 2025-01-02 Issue A https://example.test/comment/1"));
        assert!(out.contains("  > hello"));
        assert!(!out.contains("> world"));
        assert!(!out.contains("## Reviews"));
        assert!(out.find("## Commits").unwrap() < out.find("## Issue comments").unwrap());
    }

    #[test]
    fn format_markdown_compact_omits_bodies() {
        let out = format_markdown("github.com", &sample_report(), true);
        assert!(out.contains("- 2025-01-02 Issue A https://example.test/comment/1"));
        assert!(!out.contains("> hello"));
    }

    #[test]
    fn long_preview_is_truncated() {
        let body = "x".repeat(COMMENT_PREVIEW_MAX_LEN + 5);
        let preview = first_line_preview(&body).unwrap();
        assert_eq!(preview.len(), COMMENT_PREVIEW_MAX_LEN + 3);
        assert!(preview.ends_with("..."));
    }
}
