use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// A contribution record exactly as GitHub returned it. Only its date field
/// is ever inspected; everything else passes through untouched.
pub type Item = serde_json::Value;

/// Half-open time range `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Window {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl Window {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Whole UTC days from `from` through `to`, both inclusive.
    pub fn from_dates(from: NaiveDate, to: NaiveDate) -> Option<Self> {
        let start = from.and_hms_opt(0, 0, 0)?;
        let end = to.succ_opt()?.and_hms_opt(0, 0, 0)?;
        Some(Self {
            from: Utc.from_utc_datetime(&start),
            to: Utc.from_utc_datetime(&end),
        })
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from <= at && at < self.to
    }

    pub fn is_empty(&self) -> bool {
        self.from >= self.to
    }

    /// Consecutive sub-windows no longer than `max_span`, newest first.
    /// Together they cover exactly this window.
    pub fn split(&self, max_span: chrono::Duration) -> Vec<Window> {
        if self.is_empty() {
            return Vec::new();
        }
        if max_span <= chrono::Duration::zero() {
            return vec![*self];
        }

        let mut out = Vec::new();
        let mut end = self.to;
        while end > self.from {
            let start = end
                .checked_sub_signed(max_span)
                .map_or(self.from, |start| start.max(self.from));
            out.push(Window::new(start, end));
            end = start;
        }
        out
    }
}

/// Knobs for the repository commit fetch.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    /// Skip the per-commit REST lookup; commits then carry no `files` field.
    /// Defaults to `false`.
    pub no_files: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UserInfo {
    pub id: String,
    pub login: String,
    pub name: Option<String>,
    pub url: String,
}

/// Everything fetched for one user and window.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Contributions {
    pub user: UserInfo,
    pub window: Window,
    pub commits: Vec<Item>,
    pub commit_comments: Vec<Item>,
    pub issue_comments: Vec<Item>,
    pub issues: Vec<Item>,
    pub pull_requests: Vec<Item>,
    pub reviews: Vec<Item>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}
