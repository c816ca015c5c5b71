// Dependency forest construction for one board column

use crate::engine::types::Issue;
use std::collections::{HashMap, HashSet};

/// One display row: the issue plus its precomputed tree-drawing prefix,
/// e.g. `"│  ├─ "`. Rebuilt from scratch on every refresh.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub issue: Issue,
    pub prefix: String,
}

/// Root marker glyphs. Three columns each so child connectors align under
/// the parent's priority badge; every nesting level adds exactly three.
const ROOT_FEATURE: &str = "◆  ";
const ROOT_PLAIN: &str = "   ";
const BRANCH_LAST: &str = "└─ ";
const BRANCH_MID: &str = "├─ ";
const CONT_OPEN: &str = "│  ";
const CONT_CLOSED: &str = "   ";

/// Build the display forest for one column's issue list.
///
/// The list is a closed set: blocker IDs that point outside it contribute no
/// edges. Feature issues are always roots, even when blocked in-set; any
/// issue never registered as a child is also a root. A depth-first pre-order
/// walk from each root (in input order) places every issue at its first
/// visit, so multi-parent edges and cycles cannot duplicate or loop. Issues
/// the walk never reaches (members of a rootless cycle) are appended with an
/// empty prefix so the output is always a bijection of the input.
pub fn build_forest(issues: &[Issue]) -> Vec<TreeNode> {
    let id_set: HashSet<&str> = issues.iter().map(|i| i.id.as_str()).collect();

    // parent id → children in input order
    let mut children: HashMap<&str, Vec<&Issue>> = HashMap::new();
    let mut has_parent: HashSet<&str> = HashSet::new();

    for issue in issues {
        for blocker_id in &issue.blocked_by {
            if !id_set.contains(blocker_id.as_str()) {
                continue;
            }
            children.entry(blocker_id.as_str()).or_default().push(issue);
            has_parent.insert(issue.id.as_str());
        }
    }

    let roots: Vec<&Issue> = issues
        .iter()
        .filter(|i| i.is_feature() || !has_parent.contains(i.id.as_str()))
        .collect();

    let (mut forest, visited) = walk_roots(&roots, &children);

    // Catch anything trapped in a cycle with no feature to anchor it
    for issue in issues {
        if !visited.contains(issue.id.as_str()) {
            forest.push(TreeNode {
                issue: issue.clone(),
                prefix: String::new(),
            });
        }
    }

    forest
}

/// Pre-order walk of every root. Pure: returns the rooted part of the forest
/// together with the set of visited IDs, leaving the orphan fallback to the
/// caller.
fn walk_roots<'a>(
    roots: &[&'a Issue],
    children: &HashMap<&str, Vec<&'a Issue>>,
) -> (Vec<TreeNode>, HashSet<&'a str>) {
    let mut forest = Vec::new();
    let mut visited: HashSet<&'a str> = HashSet::new();

    for root in roots {
        visit(root, None, true, children, &mut visited, &mut forest);
    }

    (forest, visited)
}

/// `continuation` is the vertical-bar padding inherited from ancestors;
/// `None` marks a root, which gets its type glyph instead of a connector.
fn visit<'a>(
    issue: &'a Issue,
    continuation: Option<&str>,
    is_last: bool,
    children: &HashMap<&str, Vec<&'a Issue>>,
    visited: &mut HashSet<&'a str>,
    forest: &mut Vec<TreeNode>,
) {
    if !visited.insert(issue.id.as_str()) {
        return;
    }

    let prefix = match continuation {
        None => {
            if issue.is_feature() {
                ROOT_FEATURE.to_string()
            } else {
                ROOT_PLAIN.to_string()
            }
        }
        Some(cont) => {
            let connector = if is_last { BRANCH_LAST } else { BRANCH_MID };
            format!("{}{}", cont, connector)
        }
    };

    let next_cont = match continuation {
        None => CONT_CLOSED.to_string(),
        Some(cont) => {
            let bar = if is_last { CONT_CLOSED } else { CONT_OPEN };
            format!("{}{}", cont, bar)
        }
    };

    forest.push(TreeNode {
        issue: issue.clone(),
        prefix,
    });

    if let Some(kids) = children.get(issue.id.as_str()) {
        let last = kids.len().saturating_sub(1);
        for (idx, child) in kids.iter().enumerate() {
            visit(child, Some(&next_cont), idx == last, children, visited, forest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::Status;

    fn issue(id: &str, kind: &str, blocked_by: &[&str]) -> Issue {
        Issue {
            id: id.to_string(),
            title: format!("title {}", id),
            status: Status::Open,
            priority: 2,
            kind: kind.to_string(),
            owner: String::new(),
            blocked: !blocked_by.is_empty(),
            description: String::new(),
            blocked_by: blocked_by.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn ids(forest: &[TreeNode]) -> Vec<&str> {
        forest.iter().map(|n| n.issue.id.as_str()).collect()
    }

    #[test]
    fn flat_list_stays_in_input_order() {
        let issues = vec![issue("a", "task", &[]), issue("b", "task", &[]), issue("c", "bug", &[])];
        let forest = build_forest(&issues);

        assert_eq!(ids(&forest), vec!["a", "b", "c"]);
        for node in &forest {
            assert_eq!(node.prefix, "   ");
        }
    }

    #[test]
    fn child_nests_under_its_blocker() {
        let issues = vec![issue("parent", "task", &[]), issue("child", "task", &["parent"])];
        let forest = build_forest(&issues);

        assert_eq!(ids(&forest), vec!["parent", "child"]);
        assert_eq!(forest[0].prefix, "   ");
        assert_eq!(forest[1].prefix, "   └─ ");
    }

    #[test]
    fn sibling_connectors_distinguish_last_child() {
        let issues = vec![
            issue("p", "task", &[]),
            issue("c1", "task", &["p"]),
            issue("c2", "task", &["p"]),
            issue("c3", "task", &["p"]),
        ];
        let forest = build_forest(&issues);

        assert_eq!(forest[1].prefix, "   ├─ ");
        assert_eq!(forest[2].prefix, "   ├─ ");
        assert_eq!(forest[3].prefix, "   └─ ");
    }

    #[test]
    fn grandchild_inherits_continuation_bars() {
        let issues = vec![
            issue("p", "task", &[]),
            issue("mid", "task", &["p"]),
            issue("tail", "task", &["p"]),
            issue("leaf", "task", &["mid"]),
        ];
        let forest = build_forest(&issues);

        // Walk order: p, mid (not last), leaf, tail (last)
        assert_eq!(ids(&forest), vec!["p", "mid", "leaf", "tail"]);
        assert_eq!(forest[1].prefix, "   ├─ ");
        // mid was not the last sibling, so the bar stays open above the leaf
        assert_eq!(forest[2].prefix, "   │  └─ ");
        assert_eq!(forest[3].prefix, "   └─ ");
    }

    #[test]
    fn each_level_adds_three_columns() {
        let issues = vec![
            issue("a", "task", &[]),
            issue("b", "task", &["a"]),
            issue("c", "task", &["b"]),
            issue("d", "task", &["c"]),
        ];
        let forest = build_forest(&issues);

        for (depth, node) in forest.iter().enumerate() {
            assert_eq!(node.prefix.chars().count(), 3 * (depth + 1));
        }
    }

    #[test]
    fn blocked_feature_walks_as_root_when_listed_first() {
        let issues = vec![issue("feat", "feature", &["dep"]), issue("dep", "task", &[])];
        let forest = build_forest(&issues);

        assert_eq!(ids(&forest), vec!["feat", "dep"]);
        assert_eq!(forest[0].prefix, "◆  ");
        assert_eq!(forest[1].prefix, "   ");
    }

    #[test]
    fn blocked_feature_reached_through_blocker_keeps_first_visit_position() {
        let issues = vec![issue("dep", "task", &[]), issue("feat", "feature", &["dep"])];
        let forest = build_forest(&issues);

        // feat is in the roots set, but dep's walk reaches it first and the
        // visited guard keeps it from appearing twice.
        assert_eq!(forest.len(), 2);
        let feat = forest.iter().find(|n| n.issue.id == "feat").expect("feat present");
        assert_eq!(feat.prefix, "   └─ ");
    }

    #[test]
    fn feature_root_gets_diamond_glyph() {
        let issues = vec![issue("feat", "feature", &[]), issue("t", "task", &[])];
        let forest = build_forest(&issues);

        assert_eq!(forest[0].prefix, "◆  ");
        assert_eq!(forest[1].prefix, "   ");
    }

    #[test]
    fn feature_anchors_a_cycle() {
        // feat ⇄ t: both have in-set parents, but feat is forced root, so the
        // walk enters the cycle and covers both.
        let issues = vec![issue("feat", "feature", &["t"]), issue("t", "task", &["feat"])];
        let forest = build_forest(&issues);

        assert_eq!(ids(&forest), vec!["feat", "t"]);
        assert_eq!(forest[0].prefix, "◆  ");
        assert_eq!(forest[1].prefix, "   └─ ");
    }

    #[test]
    fn multi_parent_child_appears_exactly_once() {
        let issues = vec![
            issue("p1", "task", &[]),
            issue("p2", "task", &[]),
            issue("shared", "task", &["p1", "p2"]),
        ];
        let forest = build_forest(&issues);

        assert_eq!(forest.len(), 3);
        let placements: Vec<usize> = forest
            .iter()
            .enumerate()
            .filter(|(_, n)| n.issue.id == "shared")
            .map(|(i, _)| i)
            .collect();
        // First visit (under p1) wins
        assert_eq!(placements, vec![1]);
    }

    #[test]
    fn rootless_cycle_falls_back_to_orphans() {
        let issues = vec![issue("a", "task", &["b"]), issue("b", "task", &["a"])];
        let forest = build_forest(&issues);

        assert_eq!(ids(&forest), vec!["a", "b"]);
        assert_eq!(forest[0].prefix, "");
        assert_eq!(forest[1].prefix, "");
    }

    #[test]
    fn orphans_follow_rooted_nodes() {
        let issues = vec![
            issue("cyc1", "task", &["cyc2"]),
            issue("cyc2", "task", &["cyc1"]),
            issue("free", "task", &[]),
        ];
        let forest = build_forest(&issues);

        assert_eq!(ids(&forest), vec!["free", "cyc1", "cyc2"]);
        assert_eq!(forest[0].prefix, "   ");
        assert_eq!(forest[1].prefix, "");
    }

    #[test]
    fn self_blocking_issue_does_not_loop() {
        let issues = vec![issue("selfy", "task", &["selfy"]), issue("t", "task", &[])];
        let forest = build_forest(&issues);

        // The self-edge marks it as having a parent, so it is unreachable
        // from any root and lands in the orphan fallback.
        assert_eq!(ids(&forest), vec!["t", "selfy"]);
        assert_eq!(forest[1].prefix, "");
    }

    #[test]
    fn out_of_set_blockers_are_ignored() {
        let issues = vec![issue("a", "task", &["not-here"])];
        let forest = build_forest(&issues);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].prefix, "   ");
    }

    #[test]
    fn output_length_always_matches_input() {
        let issues = vec![
            issue("a", "feature", &["b"]),
            issue("b", "task", &["a", "c"]),
            issue("c", "task", &["missing"]),
            issue("d", "task", &["d"]),
        ];
        let forest = build_forest(&issues);

        assert_eq!(forest.len(), issues.len());
        let mut seen: Vec<&str> = ids(&forest);
        seen.sort_unstable();
        assert_eq!(seen, vec!["a", "b", "c", "d"]);
    }
}
