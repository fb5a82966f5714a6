//! Folding flat relative paths into a tree of folder and file nodes.

use crate::domain::model::{NodeKind, TreeNode};

/// Build a forest from `/`-separated relative paths.
///
/// Intermediate segments create a folder node at most once per sibling set;
/// later paths sharing the prefix descend into the existing node. The final
/// segment always appends a file node, so repeated input paths produce
/// repeated leaves. Siblings are sorted by segment name so output does not
/// depend on filesystem enumeration order.
pub fn build<I, S>(paths: I) -> Vec<TreeNode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut forest = Vec::new();
    for path in paths {
        insert(path.as_ref(), &mut forest);
    }
    sort_siblings(&mut forest);
    forest
}

fn insert(path: &str, forest: &mut Vec<TreeNode>) {
    let mut cursor = forest;
    let mut segments = path.split('/').peekable();

    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            cursor.push(TreeNode::file(segment));
            return;
        }

        // A file node never matches here; a file and a folder may share a
        // name among siblings without merging.
        let index = match cursor
            .iter()
            .position(|node| node.kind == NodeKind::Folder && node.path == segment)
        {
            Some(index) => index,
            None => {
                cursor.push(TreeNode::folder(segment));
                cursor.len() - 1
            }
        };
        cursor = cursor[index].children.get_or_insert_with(Vec::new);
    }
}

fn sort_siblings(nodes: &mut [TreeNode]) {
    nodes.sort_by(|a, b| a.path.cmp(&b.path));
    for node in nodes {
        if let Some(children) = node.children.as_mut() {
            sort_siblings(children);
        }
    }
}
