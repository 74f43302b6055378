use anyhow::Context;

const PUBLIC_TOKEN_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];
const ENTERPRISE_TOKEN_VARS: [&str; 2] = ["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"];

/// Resolves an API token for `host`: environment first, then `gh auth token`.
pub(super) fn fetch_token(host: &str) -> anyhow::Result<String> {
    if let Some((var, token)) = token_from_env(host) {
        tracing::debug!(host, var, "using token from environment");
        return Ok(token);
    }
    if let Some(token) = token_from_gh(host)? {
        tracing::debug!(host, "using token from gh");
        return Ok(token);
    }

    anyhow::bail!(
        "token for {host} not found. Please set `GH_TOKEN` or log in with `gh auth login`."
    );
}

fn token_vars(host: &str) -> [&'static str; 2] {
    if host.eq_ignore_ascii_case("github.com") {
        PUBLIC_TOKEN_VARS
    } else {
        ENTERPRISE_TOKEN_VARS
    }
}

fn token_from_env(host: &str) -> Option<(&'static str, String)> {
    token_vars(host).into_iter().find_map(|var| {
        let token = std::env::var(var).ok()?;
        let token = token.trim();
        (!token.is_empty()).then(|| (var, token.to_string()))
    })
}

fn token_from_gh(host: &str) -> anyhow::Result<Option<String>> {
    let output = match std::process::Command::new("gh")
        .args(["auth", "token", "--secure-storage", "--hostname", host])
        .output()
    {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).context("failed to execute `gh auth token`"),
    };

    if !output.status.success() {
        return Ok(None);
    }
    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok((!token.is_empty()).then_some(token))
}
