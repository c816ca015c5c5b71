// Issue engine - fetching, normalization, and forest construction, independent of UI

pub mod source;
pub mod tree;
pub mod types;

pub use source::{SourceError, bd_version, fetch_grouped, fetch_status};
pub use tree::{TreeNode, build_forest};
pub use types::{CLOSED_LIMIT, Issue, RawIssue, Status, StatusGroups, partition_by_status};
