mod formatter;
mod github;
use crate::github::prelude::*;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser, Debug)]
#[command(version, about = "GitHub contribution fetcher")]
struct Cli {
    #[arg(
        long,
        value_parser = parse_date,
        value_name = "YYYY-MM-DD",
        help = "Start date",
        default_value_t = today()
    )]
    from: chrono::NaiveDate,
    #[arg(
        long,
        value_parser = parse_date,
        value_name = "YYYY-MM-DD",
        help = "End date (inclusive)",
        default_value_t = today()
    )]
    to: chrono::NaiveDate,
    #[arg(
        long,
        value_name = "HOST",
        default_value = "github.com",
        help = "Target GitHub hostname",
        env = "GH_HOST"
    )]
    hostname: String,
    #[arg(
        long,
        value_name = "LOGIN",
        help = "User to report on [default: the authenticated user]"
    )]
    login: Option<String>,
    #[arg(
        long = "repo",
        value_parser = parse_repo,
        value_name = "OWNER/NAME",
        help = "Repository to collect commits from (repeatable)"
    )]
    repos: Vec<(String, String)>,
    #[arg(long, help = "Do not fetch changed files for commits")]
    no_files: bool,
    #[arg(short, long, help = "Use compact list output")]
    compact: bool,
    #[arg(long, help = "Print the report as JSON", conflicts_with = "compact")]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let Cli {
        from,
        to,
        hostname,
        login,
        repos,
        no_files,
        compact,
        json,
    } = Cli::parse();

    anyhow::ensure!(from <= to, "--from ({from}) is after --to ({to})");
    let window = Window::from_dates(from, to).context("date out of range")?;

    let client = Client::new(&hostname)?;
    let login = match login {
        Some(login) => login,
        None => query_viewer_login(&client).await?,
    };

    let options = FetchOptions { no_files };
    let report = fetch_all_contributions(&client, &login, &repos, window, options).await?;

    let output = if json {
        let mut out = serde_json::to_string_pretty(&report)?;
        out.push('\n');
        out
    } else {
        crate::formatter::format_markdown(&hostname, &report, compact)
    };
    print!("{output}");

    Ok(())
}

async fn fetch_all_contributions(
    client: &Client,
    login: &str,
    repos: &[(String, String)],
    window: Window,
    options: FetchOptions,
) -> anyhow::Result<Contributions> {
    let user = fetch_user_info(client, login)
        .await?
        .with_context(|| format!("user {login} not found"))?;

    let commits = futures::future::try_join_all(repos.iter().map(|(owner, name)| {
        fetch_repository_commits(client, &user.id, owner, name, window, options)
    }));

    let (commits, commit_comments, issue_comments, issues, pull_requests, reviews) = tokio::try_join!(
        commits,
        fetch_commit_comments(client, login, window, None),
        fetch_issue_comments(client, login, window, None),
        fetch_issues(client, login, window),
        fetch_pull_requests(client, login, window),
        fetch_pull_request_reviews(client, login, window),
    )?;

    Ok(Contributions {
        user,
        window,
        commits: commits.into_iter().flatten().collect(),
        commit_comments,
        issue_comments,
        issues,
        pull_requests,
        reviews,
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date(input: &str) -> anyhow::Result<chrono::NaiveDate, chrono::ParseError> {
    chrono::NaiveDate::parse_from_str(input, "%Y-%m-%d")
}

fn parse_repo(input: &str) -> Result<(String, String), String> {
    match input.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(format!("expected OWNER/NAME, got `{input}`")),
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_repo_splits_owner_and_name() {
        assert_eq!(
            parse_repo("rust-lang/rust").unwrap(),
            ("rust-lang".to_string(), "rust".to_string())
        );
    }

    #[test]
    fn parse_repo_rejects_malformed() {
        assert!(parse_repo("rust").is_err());
        assert!(parse_repo("/rust").is_err());
        assert!(parse_repo("rust-lang/").is_err());
        assert!(parse_repo("a/b/c").is_err());
    }

    #[test]
    fn cli_collects_repeated_repos() {
        let cli = Cli::try_parse_from([
            "gh-contrib",
            "--from",
            "2024-03-01",
            "--to",
            "2024-03-14",
            "--repo",
            "octo/one",
            "--repo",
            "octo/two",
            "--no-files",
        ])
        .unwrap();
        assert_eq!(cli.repos.len(), 2);
        assert_eq!(cli.repos[1], ("octo".to_string(), "two".to_string()));
        assert!(cli.no_files);
        assert_eq!(cli.login, None);
    }

    #[test]
    fn cli_rejects_compact_json() {
        assert!(Cli::try_parse_from(["gh-contrib", "--json", "--compact"]).is_err());
    }
}
