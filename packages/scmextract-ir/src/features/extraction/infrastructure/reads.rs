/*
 * READS Analysis - Variable usage tracking
 *
 * Extracts the variable names an expression reads.
 *
 * Rules:
 * - Every identifier is a read
 * - Call callees are not reads; only the arguments are
 * - Keyword argument names are not reads; their values are
 * - `obj.attr` reads `attr` (leaf naming) or `obj.attr` (qualified naming)
 * - `(n := expr)` reads `n` and records the binding `n ← reads(expr)`
 * - Comprehension loop variables and lambda parameters are local: they are
 *   removed from the reads of the body. The outermost comprehension
 *   iterable and lambda defaults are read in the enclosing scope.
 */

use std::collections::BTreeSet;
use tree_sitter::Node;

/// Reads and inline bindings found in one expression
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionReads {
    pub names: BTreeSet<String>,

    /// Walrus bindings: (name, reads of the bound value)
    pub bindings: Vec<(String, BTreeSet<String>)>,
}

/// Named children of `node`, collected so the cursor borrow ends here
pub(crate) fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// Expression reader bound to one source text
#[derive(Debug, Clone, Copy)]
pub struct ReadExtractor<'s> {
    source: &'s str,
    leaf_attributes: bool,
}

impl<'s> ReadExtractor<'s> {
    pub fn new(source: &'s str, leaf_attributes: bool) -> Self {
        Self {
            source,
            leaf_attributes,
        }
    }

    pub fn text(&self, node: Node) -> &'s str {
        self.source.get(node.byte_range()).unwrap_or("")
    }

    /// Variables read by `node`
    pub fn reads(&self, node: Node) -> ExpressionReads {
        let mut out = ExpressionReads::default();
        self.traverse(node, &mut out);
        out
    }

    /// Variable named by an attribute expression
    pub fn attribute_name(&self, node: Node) -> Option<String> {
        if !self.leaf_attributes {
            if let Some(qualified) = self.qualified_name(node) {
                return Some(qualified);
            }
        }
        node.child_by_field_name("attribute")
            .map(|attr| self.text(attr).to_string())
    }

    /// `a.b.c` for pure identifier chains
    fn qualified_name(&self, node: Node) -> Option<String> {
        match node.kind() {
            "identifier" => Some(self.text(node).to_string()),
            "attribute" => {
                let object = self.qualified_name(node.child_by_field_name("object")?)?;
                let attr = self.text(node.child_by_field_name("attribute")?);
                Some(format!("{}.{}", object, attr))
            }
            _ => None,
        }
    }

    fn traverse(&self, node: Node, out: &mut ExpressionReads) {
        match node.kind() {
            "identifier" => {
                out.names.insert(self.text(node).to_string());
            }
            "attribute" => {
                if !self.leaf_attributes {
                    if let Some(qualified) = self.qualified_name(node) {
                        out.names.insert(qualified);
                        return;
                    }
                }
                if let Some(attr) = node.child_by_field_name("attribute") {
                    out.names.insert(self.text(attr).to_string());
                }
                if let Some(object) = node.child_by_field_name("object") {
                    self.traverse(object, out);
                }
            }
            "call" => {
                // Callee contributes nothing
                if let Some(arguments) = node.child_by_field_name("arguments") {
                    self.traverse(arguments, out);
                }
            }
            "keyword_argument" => {
                if let Some(value) = node.child_by_field_name("value") {
                    self.traverse(value, out);
                }
            }
            "lambda" => self.lambda(node, out),
            "list_comprehension"
            | "set_comprehension"
            | "dictionary_comprehension"
            | "generator_expression" => self.comprehension(node, out),
            "named_expression" => {
                let (Some(name), Some(value)) = (
                    node.child_by_field_name("name"),
                    node.child_by_field_name("value"),
                ) else {
                    return;
                };
                let name = self.text(name).to_string();
                let inner = self.reads(value);
                out.names.insert(name.clone());
                out.bindings.push((name, inner.names));
                out.bindings.extend(inner.bindings);
            }
            "comment" => {}
            _ => {
                for child in named_children(node) {
                    self.traverse(child, out);
                }
            }
        }
    }

    fn comprehension(&self, node: Node, out: &mut ExpressionReads) {
        let mut bound = BTreeSet::new();
        let mut local = ExpressionReads::default();
        let mut outermost = true;

        for child in named_children(node) {
            if child.kind() != "for_in_clause" {
                self.traverse(child, &mut local);
                continue;
            }
            if let Some(left) = child.child_by_field_name("left") {
                self.bind_names(left, &mut bound);
            }
            let mut cursor = child.walk();
            let iterables: Vec<Node> = child.children_by_field_name("right", &mut cursor).collect();
            for iterable in iterables {
                if outermost {
                    self.traverse(iterable, out);
                } else {
                    self.traverse(iterable, &mut local);
                }
            }
            outermost = false;
        }

        Self::merge_local(out, local, &bound);
    }

    fn lambda(&self, node: Node, out: &mut ExpressionReads) {
        let mut bound = BTreeSet::new();
        if let Some(parameters) = node.child_by_field_name("parameters") {
            for parameter in named_children(parameters) {
                match parameter.kind() {
                    "default_parameter" | "typed_default_parameter" => {
                        if let Some(name) = parameter.child_by_field_name("name") {
                            self.bind_names(name, &mut bound);
                        }
                        if let Some(value) = parameter.child_by_field_name("value") {
                            self.traverse(value, out);
                        }
                    }
                    _ => self.bind_names(parameter, &mut bound),
                }
            }
        }

        let mut local = ExpressionReads::default();
        if let Some(body) = node.child_by_field_name("body") {
            self.traverse(body, &mut local);
        }
        Self::merge_local(out, local, &bound);
    }

    /// Identifiers bound by a target or parameter pattern
    fn bind_names(&self, node: Node, bound: &mut BTreeSet<String>) {
        match node.kind() {
            "identifier" => {
                bound.insert(self.text(node).to_string());
            }
            "attribute" | "subscript" => {}
            _ => {
                for child in named_children(node) {
                    self.bind_names(child, bound);
                }
            }
        }
    }

    fn merge_local(out: &mut ExpressionReads, local: ExpressionReads, bound: &BTreeSet<String>) {
        out.names
            .extend(local.names.into_iter().filter(|name| !bound.contains(name)));
        out.bindings.extend(local.bindings);
    }
}
