/*
 * Raw dependency collection
 *
 * Walks statements in program order and records, for every assignment
 * `target = expr`:
 *
 *     raw[target] += reads(expr) ∪ control_context
 *
 * - Augmented assignment and in-place updates (`x += e`, `xs.append(e)`,
 *   `xs[i] = e`) also add the target itself: the new value depends on the
 *   prior one.
 * - `if`/`elif`/`else`, `while`, `for` and `match` headers push the
 *   variables they read onto the control context for their bodies. An
 *   `elif`/`else` branch also carries the conditions of earlier branches.
 * - A `for` loop assigns its targets from the iterable, and the loop
 *   targets join the context of the body. Bodies are walked once.
 * - Function and class bodies are walked in place; calls are never inlined.
 * - Anything else contributes no edges.
 */

use std::collections::BTreeSet;
use tree_sitter::Node;

use super::reads::{named_children, ExpressionReads, ReadExtractor};
use crate::config::ExtractorOptions;
use crate::features::extraction::domain::{ControlContext, RawDependencies};
use crate::features::parsing::ParsedModule;

/// Collect the raw dependency mapping of a parsed module
pub fn collect_raw_dependencies(
    module: &ParsedModule,
    options: &ExtractorOptions,
) -> RawDependencies {
    let mut collector = DependencyCollector::new(module.source(), options);
    let mut ctx = ControlContext::new();
    collector.visit_block(module.root(), &mut ctx);
    collector.finish()
}

/// Assignment target with causes implied by the store itself
#[derive(Debug, Clone, PartialEq, Eq)]
struct Target {
    name: String,
    extra: BTreeSet<String>,
}

impl Target {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: BTreeSet::new(),
        }
    }
}

pub struct DependencyCollector<'s, 'o> {
    reads: ReadExtractor<'s>,
    options: &'o ExtractorOptions,
    raw: RawDependencies,
}

impl<'s, 'o> DependencyCollector<'s, 'o> {
    pub fn new(source: &'s str, options: &'o ExtractorOptions) -> Self {
        Self {
            reads: ReadExtractor::new(source, options.attribute_leaf_names),
            options,
            raw: RawDependencies::new(),
        }
    }

    pub fn finish(self) -> RawDependencies {
        self.raw
    }

    pub fn visit_block(&mut self, node: Node, ctx: &mut ControlContext) {
        for statement in named_children(node) {
            self.visit_statement(statement, ctx);
        }
    }

    pub fn visit_statement(&mut self, node: Node, ctx: &mut ControlContext) {
        match node.kind() {
            "expression_statement" => {
                for expr in named_children(node) {
                    self.visit_expression_statement(expr, ctx);
                }
            }
            "if_statement" => self.visit_if(node, ctx),
            "for_statement" => self.visit_for(node, ctx),
            "while_statement" => self.visit_while(node, ctx),
            "with_statement" => self.visit_with(node, ctx),
            "match_statement" => self.visit_match(node, ctx),
            "try_statement" => self.visit_nested_blocks(node, ctx),
            "function_definition" | "class_definition" => {
                if let Some(body) = node.child_by_field_name("body") {
                    self.visit_block(body, ctx);
                }
            }
            "decorated_definition" => {
                if let Some(definition) = node.child_by_field_name("definition") {
                    self.visit_statement(definition, ctx);
                }
            }
            "block" | "module" => self.visit_block(node, ctx),
            _ => {}
        }
    }

    fn visit_expression_statement(&mut self, expr: Node, ctx: &mut ControlContext) {
        match expr.kind() {
            "assignment" => self.visit_assignment(expr, ctx),
            "augmented_assignment" => self.visit_augmented_assignment(expr, ctx),
            "call" => self.visit_call_statement(expr, ctx),
            _ => {
                let reads = self.reads.reads(expr);
                self.record_bindings(reads.bindings, ctx);
            }
        }
    }

    /// `a = b = expr`, `a, b = expr`, `x: T = expr`
    fn visit_assignment(&mut self, node: Node, ctx: &mut ControlContext) {
        let mut target_nodes = Vec::new();
        let mut current = node;
        let value = loop {
            if let Some(left) = current.child_by_field_name("left") {
                target_nodes.push(left);
            }
            match current.child_by_field_name("right") {
                Some(right) if right.kind() == "assignment" => current = right,
                other => break other,
            }
        };

        // Bare annotation `x: int` binds nothing
        let Some(value) = value else {
            return;
        };

        let ExpressionReads { names, bindings } = self.reads.reads(value);
        self.record_bindings(bindings, ctx);

        for target_node in target_nodes {
            for target in self.targets(target_node) {
                let mut causes = names.clone();
                causes.extend(target.extra);
                self.record(&target.name, causes, ctx);
            }
        }
    }

    /// `x op= expr`: the prior value of `x` is a cause
    fn visit_augmented_assignment(&mut self, node: Node, ctx: &mut ControlContext) {
        let (Some(left), Some(right)) = (
            node.child_by_field_name("left"),
            node.child_by_field_name("right"),
        ) else {
            return;
        };

        let ExpressionReads { names, bindings } = self.reads.reads(right);
        self.record_bindings(bindings, ctx);

        for target in self.targets(left) {
            let mut causes = names.clone();
            causes.extend(target.extra);
            causes.insert(target.name.clone());
            self.record(&target.name, causes, ctx);
        }
    }

    /// `receiver.method(args)` where `method` mutates in place
    fn visit_call_statement(&mut self, call: Node, ctx: &mut ControlContext) {
        let ExpressionReads { names, bindings } = self.reads.reads(call);
        self.record_bindings(bindings, ctx);

        let Some(function) = call.child_by_field_name("function") else {
            return;
        };
        if function.kind() != "attribute" {
            return;
        }
        let (Some(method), Some(receiver)) = (
            function.child_by_field_name("attribute"),
            function.child_by_field_name("object"),
        ) else {
            return;
        };
        if !self.options.is_mutating_method(self.reads.text(method)) {
            return;
        }

        for target in self.targets(receiver) {
            let mut causes = names.clone();
            causes.extend(target.extra);
            causes.insert(target.name.clone());
            self.record(&target.name, causes, ctx);
        }
    }

    fn visit_if(&mut self, node: Node, ctx: &mut ControlContext) {
        let mut conditions = BTreeSet::new();
        if let Some(condition) = node.child_by_field_name("condition") {
            conditions.extend(self.header_reads(condition, ctx));
        }
        if let Some(consequence) = node.child_by_field_name("consequence") {
            self.visit_scoped(consequence, conditions.clone(), ctx);
        }

        let mut cursor = node.walk();
        let alternatives: Vec<Node> = node
            .children_by_field_name("alternative", &mut cursor)
            .collect();

        for alternative in alternatives {
            match alternative.kind() {
                "elif_clause" => {
                    if let Some(condition) = alternative.child_by_field_name("condition") {
                        conditions.extend(self.header_reads(condition, ctx));
                    }
                    if let Some(consequence) = alternative.child_by_field_name("consequence") {
                        self.visit_scoped(consequence, conditions.clone(), ctx);
                    }
                }
                "else_clause" => {
                    if let Some(body) = alternative.child_by_field_name("body") {
                        self.visit_scoped(body, conditions.clone(), ctx);
                    }
                }
                _ => {}
            }
        }
    }

    fn visit_for(&mut self, node: Node, ctx: &mut ControlContext) {
        let iterable = node
            .child_by_field_name("right")
            .map(|right| self.header_reads(right, ctx))
            .unwrap_or_default();
        let loop_targets = node
            .child_by_field_name("left")
            .map(|left| self.targets(left))
            .unwrap_or_default();

        for target in &loop_targets {
            let mut causes = iterable.clone();
            causes.extend(target.extra.iter().cloned());
            self.record(&target.name, causes, ctx);
        }

        let mut frame = iterable;
        frame.extend(loop_targets.into_iter().map(|t| t.name));

        ctx.push(frame);
        self.visit_loop_bodies(node, ctx);
        ctx.pop();
    }

    fn visit_while(&mut self, node: Node, ctx: &mut ControlContext) {
        let frame = node
            .child_by_field_name("condition")
            .map(|condition| self.header_reads(condition, ctx))
            .unwrap_or_default();

        ctx.push(frame);
        self.visit_loop_bodies(node, ctx);
        ctx.pop();
    }

    /// Loop body plus its `else:` clause, under the loop's context
    fn visit_loop_bodies(&mut self, node: Node, ctx: &mut ControlContext) {
        if let Some(body) = node.child_by_field_name("body") {
            self.visit_block(body, ctx);
        }
        if let Some(alternative) = node.child_by_field_name("alternative") {
            if let Some(body) = alternative.child_by_field_name("body") {
                self.visit_block(body, ctx);
            }
        }
    }

    fn visit_with(&mut self, node: Node, ctx: &mut ControlContext) {
        for clause in named_children(node) {
            if clause.kind() != "with_clause" {
                continue;
            }
            for item in named_children(clause) {
                if let Some(value) = item.child_by_field_name("value") {
                    self.visit_with_item(value, ctx);
                }
            }
        }
        if let Some(body) = node.child_by_field_name("body") {
            self.visit_block(body, ctx);
        }
    }

    /// `expr as alias` binds `alias ← reads(expr)`
    fn visit_with_item(&mut self, value: Node, ctx: &mut ControlContext) {
        if value.kind() != "as_pattern" {
            let reads = self.reads.reads(value);
            self.record_bindings(reads.bindings, ctx);
            return;
        }

        let (Some(expr), Some(alias)) = (value.named_child(0), value.child_by_field_name("alias"))
        else {
            return;
        };
        let ExpressionReads { names, bindings } = self.reads.reads(expr);
        self.record_bindings(bindings, ctx);

        for target in self.targets(alias) {
            let mut causes = names.clone();
            causes.extend(target.extra);
            self.record(&target.name, causes, ctx);
        }
    }

    fn visit_match(&mut self, node: Node, ctx: &mut ControlContext) {
        let mut cursor = node.walk();
        let subjects: Vec<Node> = node
            .children_by_field_name("subject", &mut cursor)
            .collect();

        let mut subject_reads = BTreeSet::new();
        for subject in subjects {
            subject_reads.extend(self.header_reads(subject, ctx));
        }

        let Some(body) = node.child_by_field_name("body") else {
            return;
        };
        for case in named_children(body) {
            if case.kind() != "case_clause" {
                continue;
            }
            let mut frame = subject_reads.clone();
            for child in named_children(case) {
                if child.kind() == "if_clause" {
                    frame.extend(self.header_reads(child, ctx));
                }
            }
            if let Some(consequence) = case.child_by_field_name("consequence") {
                self.visit_scoped(consequence, frame, ctx);
            }
        }
    }

    /// `try`/`except`/`else`/`finally` blocks, no extra context
    fn visit_nested_blocks(&mut self, node: Node, ctx: &mut ControlContext) {
        for child in named_children(node) {
            match child.kind() {
                "block" => self.visit_block(child, ctx),
                "except_clause" | "except_group_clause" | "else_clause" | "finally_clause" => {
                    self.visit_nested_blocks(child, ctx)
                }
                _ => {}
            }
        }
    }

    fn visit_scoped(&mut self, block: Node, frame: BTreeSet<String>, ctx: &mut ControlContext) {
        ctx.push(frame);
        self.visit_block(block, ctx);
        ctx.pop();
    }

    /// Reads of a branch/loop header; walrus bindings in it are recorded
    fn header_reads(&mut self, node: Node, ctx: &mut ControlContext) -> BTreeSet<String> {
        let ExpressionReads { names, bindings } = self.reads.reads(node);
        self.record_bindings(bindings, ctx);
        names
    }

    /// Variables written by an assignment pattern
    fn targets(&self, node: Node) -> Vec<Target> {
        match node.kind() {
            "identifier" => vec![Target::new(self.reads.text(node))],
            "attribute" => self
                .reads
                .attribute_name(node)
                .map(Target::new)
                .into_iter()
                .collect(),
            "subscript" => {
                // `xs[i] = v` updates `xs` in place
                let Some(base) = node.child_by_field_name("value") else {
                    return Vec::new();
                };
                let mut cursor = node.walk();
                let mut index_reads = BTreeSet::new();
                for index in node.children_by_field_name("subscript", &mut cursor) {
                    index_reads.extend(self.reads.reads(index).names);
                }
                self.targets(base)
                    .into_iter()
                    .map(|mut target| {
                        target.extra.extend(index_reads.iter().cloned());
                        target.extra.insert(target.name.clone());
                        target
                    })
                    .collect()
            }
            "pattern_list" | "tuple_pattern" | "list_pattern" | "tuple" | "list"
            | "expression_list" | "parenthesized_expression" | "list_splat_pattern"
            | "list_splat" | "as_pattern_target" => named_children(node)
                .into_iter()
                .flat_map(|child| self.targets(child))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn record_bindings(&mut self, bindings: Vec<(String, BTreeSet<String>)>, ctx: &ControlContext) {
        for (name, causes) in bindings {
            self.record(&name, causes, ctx);
        }
    }

    fn record(&mut self, target: &str, mut causes: BTreeSet<String>, ctx: &ControlContext) {
        if self.options.control_dependencies {
            causes.extend(ctx.variables());
        }
        self.raw.record(target, causes);
    }
}
