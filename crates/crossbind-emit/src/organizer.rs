use crossbind_ast::Declaration;
use indexmap::IndexMap;

/// Index of a node inside a [`NamespaceTree`] arena.
pub type NodeId = usize;

/// One level of namespace nesting.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceNode {
    /// Namespace name; empty only at the root ("global").
    pub name: String,
    /// Back-reference to the enclosing node, used only for error context.
    pub parent: Option<NodeId>,
    /// Child namespaces, keyed by name in first-seen order.
    pub children: IndexMap<String, NodeId>,
    /// Indices into the organized declaration slice, in input order.
    pub decls: Vec<usize>,
}

/// Namespace hierarchy for one emission run.
///
/// Arena-backed: nodes refer to each other by index, so the whole tree
/// frees as a unit. The tree is transient; it is rebuilt from the flat
/// declaration list at the start of every run and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceTree {
    nodes: Vec<NamespaceNode>,
}

impl NamespaceTree {
    pub const ROOT: NodeId = 0;

    fn new() -> Self {
        Self {
            nodes: vec![NamespaceNode {
                name: String::new(),
                parent: None,
                children: IndexMap::new(),
                decls: Vec::new(),
            }],
        }
    }

    pub fn node(&self, id: NodeId) -> &NamespaceNode {
        &self.nodes[id]
    }

    pub fn root(&self) -> &NamespaceNode {
        &self.nodes[Self::ROOT]
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Outermost-to-innermost path of namespace names for `id`.
    pub fn path(&self, id: NodeId) -> Vec<&str> {
        let mut parts = Vec::new();
        let mut current = Some(id);
        while let Some(i) = current {
            let node = &self.nodes[i];
            if !node.name.is_empty() {
                parts.push(node.name.as_str());
            }
            current = node.parent;
        }
        parts.reverse();
        parts
    }

    /// `a::b::name` rendering for error messages.
    pub fn qualified(&self, id: NodeId, name: &str) -> String {
        let mut parts = self.path(id);
        parts.push(name);
        parts.join("::")
    }

    /// Child of `parent` named `segment`, created if absent.
    fn descend(&mut self, parent: NodeId, segment: &str) -> NodeId {
        if let Some(&child) = self.nodes[parent].children.get(segment) {
            return child;
        }
        let id = self.nodes.len();
        self.nodes.push(NamespaceNode {
            name: segment.to_string(),
            parent: Some(parent),
            children: IndexMap::new(),
            decls: Vec::new(),
        });
        self.nodes[parent].children.insert(segment.to_string(), id);
        id
    }
}

/// Group a flat declaration list into its namespace hierarchy.
///
/// Paths arrive innermost-first and are walked outermost-first; a segment
/// matching an existing sibling merges into it, so same-named namespaces at
/// one level share a single emitted scope even when they came from
/// unrelated libraries. First-seen order is preserved for both children and
/// declarations; nothing is sorted or rebalanced.
pub fn organize(decls: &[Declaration]) -> NamespaceTree {
    let mut tree = NamespaceTree::new();
    for (idx, decl) in decls.iter().enumerate() {
        let mut at = NamespaceTree::ROOT;
        for segment in decl.namespace().iter().rev() {
            at = tree.descend(at, segment);
        }
        tree.nodes[at].decls.push(idx);
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbind_ast::EnumNode;
    use pretty_assertions::assert_eq;

    fn enum_in(name: &str, namespace: &[&str]) -> Declaration {
        Declaration::Enum(EnumNode {
            name: name.to_string(),
            namespace: namespace.iter().map(|s| s.to_string()).collect(),
            enumerators: vec![],
        })
    }

    #[test]
    fn test_global_declarations_attach_to_root() {
        let decls = vec![enum_in("A", &[]), enum_in("B", &[])];
        let tree = organize(&decls);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.root().decls, vec![0, 1]);
    }

    #[test]
    fn test_nested_path_walks_outermost_first() {
        // innermost-first path ["inner", "outer"] lands under outer::inner
        let decls = vec![enum_in("A", &["inner", "outer"])];
        let tree = organize(&decls);
        assert_eq!(tree.node_count(), 3);

        let &outer = tree.root().children.get("outer").unwrap();
        let &inner = tree.node(outer).children.get("inner").unwrap();
        assert_eq!(tree.node(inner).decls, vec![0]);
        assert_eq!(tree.path(inner), vec!["outer", "inner"]);
        assert_eq!(tree.qualified(inner, "A"), "outer::inner::A");
    }

    #[test]
    fn test_same_named_siblings_merge() {
        let decls = vec![
            enum_in("A", &["detail"]),
            enum_in("B", &["detail"]),
            enum_in("C", &["detail", "other"]),
        ];
        let tree = organize(&decls);
        // one top-level `detail`, one `other` with its own nested `detail`
        assert_eq!(tree.root().children.len(), 2);

        let &detail = tree.root().children.get("detail").unwrap();
        assert_eq!(tree.node(detail).decls, vec![0, 1]);
    }

    #[test]
    fn test_first_seen_order_is_preserved() {
        let decls = vec![
            enum_in("A", &["zeta"]),
            enum_in("B", &["alpha"]),
            enum_in("C", &["zeta"]),
        ];
        let tree = organize(&decls);
        let names: Vec<&str> = tree.root().children.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn test_organize_is_idempotent() {
        let decls = vec![
            enum_in("A", &[]),
            enum_in("B", &["ns", "outer"]),
            enum_in("C", &["ns", "outer"]),
            enum_in("D", &["outer"]),
        ];
        assert_eq!(organize(&decls), organize(&decls));
    }
}
