//! Box-drawing ASCII renderer for a [`SyntaxNode`] tree, the form `cfe-drv`
//! prints to the terminal once parsing succeeds.

use crate::ast::SyntaxNode;

/// Renders `root` as an indented tree using `├──`/`└──` connectors, one
/// node per line. The root has an empty prefix and is treated as a last
/// child of an implicit parent, so it too gets a `└── ` branch.
pub fn render_tree(root: &SyntaxNode) -> String {
    let mut out = String::new();
    out.push_str("└── ");
    out.push_str(&label(root));
    out.push('\n');
    write_children(&mut out, &root.children, "    ");
    out
}

fn label(node: &SyntaxNode) -> String {
    format!("{} ({}) [Line: {}]", node.kind, node.value, node.line)
}

fn write_children(out: &mut String, children: &[SyntaxNode], prefix: &str) {
    let count = children.len();
    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == count;
        out.push_str(prefix);
        out.push_str(if is_last { "└── " } else { "├── " });
        out.push_str(&label(child));
        out.push('\n');

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        write_children(out, &child.children, &child_prefix);
    }
}
