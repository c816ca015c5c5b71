use serde::{Deserialize, Serialize};

/// Number of closed issues kept on the board (most recently updated first).
pub const CLOSED_LIMIT: usize = 10;

/// One dependency edge as `bd list --json` reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDependency {
    pub depends_on_id: String,
}

/// Wire shape of a single issue record from `bd list --json`.
///
/// Only the fields the board consumes are declared; everything optional
/// tolerates absence so a sparse payload never fails deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawIssue {
    pub id: String,
    pub title: String,
    pub status: Status,

    #[serde(default)]
    pub priority: u8,

    #[serde(default)]
    pub issue_type: String,

    #[serde(default)]
    pub owner: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub dependency_count: u32,

    #[serde(default)]
    pub dependencies: Vec<RawDependency>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Status {
    Open,
    Blocked,
    InProgress,
    Closed,

    // bd only emits the four statuses above; anything else lands here so a
    // record is shown rather than dropped.
    Unknown,
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "open" => Self::Open,
            "blocked" => Self::Blocked,
            "in_progress" => Self::InProgress,
            "closed" => Self::Closed,
            _ => Self::Unknown,
        }
    }
}

/// Normalized display shape for one issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub status: Status,
    pub priority: u8,
    pub kind: String,
    pub owner: String,
    pub blocked: bool,
    pub description: String,

    /// IDs of issues that must complete before this one (its blockers).
    pub blocked_by: Vec<String>,
}

impl From<RawIssue> for Issue {
    fn from(raw: RawIssue) -> Self {
        let blocked_by: Vec<String> = raw
            .dependencies
            .iter()
            .map(|d| d.depends_on_id.clone())
            .collect();

        // The blocker list is the source of truth; the count only fills in
        // when the payload omits the list entirely.
        let blocked = !blocked_by.is_empty() || raw.dependency_count > 0;

        Self {
            id: raw.id,
            title: raw.title,
            status: raw.status,
            priority: raw.priority,
            kind: raw.issue_type,
            owner: raw.owner.unwrap_or_default(),
            blocked,
            description: raw.description.unwrap_or_default(),
            blocked_by,
        }
    }
}

impl Issue {
    pub fn is_feature(&self) -> bool {
        self.kind == "feature"
    }
}

/// The three board columns.
#[derive(Debug, Clone, Default)]
pub struct StatusGroups {
    pub open: Vec<Issue>,
    pub in_progress: Vec<Issue>,
    pub closed: Vec<Issue>,
}

/// Partition issues into the three board columns.
///
/// A single stable pass: input order is preserved within each bucket, every
/// issue lands in exactly one bucket, and the closed bucket keeps only the
/// first `CLOSED_LIMIT` entries (the source returns most recently updated
/// first).
pub fn partition_by_status(issues: Vec<Issue>) -> StatusGroups {
    let mut groups = StatusGroups::default();

    for issue in issues {
        match issue.status {
            Status::Open | Status::Blocked | Status::Unknown => groups.open.push(issue),
            Status::InProgress => groups.in_progress.push(issue),
            Status::Closed => {
                if groups.closed.len() < CLOSED_LIMIT {
                    groups.closed.push(issue);
                }
            }
        }
    }

    groups
}
