//! Control context
//!
//! Stack of variable sets read by the branch and loop headers enclosing the
//! statement being visited. Entering a block pushes a frame, leaving it
//! pops. Every assignment inside picks up the union of all frames as extra
//! causes.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct ControlContext {
    frames: Vec<BTreeSet<String>>,
}

impl ControlContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: BTreeSet<String>) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<BTreeSet<String>> {
        self.frames.pop()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Union of all frames currently in scope
    pub fn variables(&self) -> BTreeSet<String> {
        self.frames.iter().flatten().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.iter().all(BTreeSet::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_push_pop_scoping() {
        let mut ctx = ControlContext::new();
        assert!(ctx.is_empty());

        ctx.push(frame(&["i", "n"]));
        ctx.push(frame(&["flag"]));
        assert_eq!(ctx.depth(), 2);
        assert_eq!(ctx.variables(), frame(&["flag", "i", "n"]));

        ctx.pop();
        assert_eq!(ctx.variables(), frame(&["i", "n"]));

        ctx.pop();
        assert!(ctx.is_empty());
        assert!(ctx.pop().is_none());
    }

    #[test]
    fn test_overlapping_frames_union() {
        let mut ctx = ControlContext::new();
        ctx.push(frame(&["a"]));
        ctx.push(frame(&["a", "b"]));
        assert_eq!(ctx.variables(), frame(&["a", "b"]));
    }
}
