//! Read-only traversal for debugging and visualization.

use std::fmt::Write as _;

use crate::{Node, Status};

/// Snapshot of one node visited by [`Node::walk`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeInfo<'a> {
    pub name: &'a str,
    pub depth: usize,
    /// Name of the owning composite or decorator, `None` for the root.
    pub parent: Option<&'a str>,
    pub status: Option<Status>,
    pub started: bool,
}

impl<C> Node<C> {
    /// Visits this node and its descendants in depth-first pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(NodeInfo<'a>)) {
        self.walk_inner(0, None, visit);
    }

    fn walk_inner<'a>(
        &'a self,
        depth: usize,
        parent: Option<&'a str>,
        visit: &mut impl FnMut(NodeInfo<'a>),
    ) {
        visit(NodeInfo {
            name: self.name(),
            depth,
            parent,
            status: self.status(),
            started: self.is_started(),
        });
        for child in self.children() {
            child.walk_inner(depth + 1, Some(self.name()), visit);
        }
    }
}

fn marker(status: Option<Status>) -> &'static str {
    match status {
        Some(Status::Running) => "[R]",
        Some(Status::Success) => "[S]",
        Some(Status::Failure) => "[F]",
        None => "[ ]",
    }
}

/// Renders the tree as an indented outline, one node per line.
pub fn render_tree<C>(root: &Node<C>) -> String {
    let mut out = String::new();
    root.walk(&mut |info| {
        let _ = writeln!(
            out,
            "{:indent$}{} {}",
            "",
            marker(info.status),
            info.name,
            indent = info.depth * 2
        );
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{action, condition, inverter, selector};

    fn tree() -> Node<bool> {
        selector(
            "Root",
            vec![
                condition("Flag", |flag: &bool| *flag),
                inverter(action("Fallback", |_: &mut bool| Status::Failure)),
            ],
        )
    }

    #[test]
    fn walk_reports_depth_and_parent() {
        let root = tree();
        let mut seen = Vec::new();
        root.walk(&mut |info| {
            let parent = info.parent.map(str::to_owned);
            seen.push((info.name.to_owned(), info.depth, parent));
        });

        assert_eq!(
            seen,
            vec![
                ("Root".to_owned(), 0, None),
                ("Flag".to_owned(), 1, Some("Root".to_owned())),
                ("Not(Fallback)".to_owned(), 1, Some("Root".to_owned())),
                ("Fallback".to_owned(), 2, Some("Not(Fallback)".to_owned())),
            ]
        );
    }

    #[test]
    fn render_marks_statuses() {
        let mut root = tree();
        root.update(&mut false);

        let rendered = render_tree(&root);
        assert_eq!(
            rendered,
            "[S] Root\n  [F] Flag\n  [S] Not(Fallback)\n    [F] Fallback\n"
        );
    }
}
