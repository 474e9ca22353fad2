//! Rust doesn't have a `defer` statement, but destructors run whenever a scope exits, whether
//! that's by falling off the end, by an early `return`, or by a panic unwinding through it. So
//! "run this later" is just "put it in something that runs it when it's dropped."

/// Runs a closure once, when it's dropped.
#[must_use = "the action runs as soon as the guard is dropped"]
pub struct ScopeGuard<F: FnOnce()> {
    action: Option<F>,
}

pub fn defer<F: FnOnce()>(action: F) -> ScopeGuard<F> {
    ScopeGuard {
        action: Some(action),
    }
}

impl<F: FnOnce()> Drop for ScopeGuard<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

/// A stack of deferred actions. When the stack is dropped, the actions run in the opposite
/// order they were pushed, the last one first.
///
/// Actions can call functions that make their own `DeferStack`. Those inner stacks are dropped
/// (and their actions run) before the outer action returns.
#[derive(Default)]
pub struct DeferStack<'a> {
    actions: Vec<Box<dyn FnOnce() + 'a>>,
}

impl<'a> DeferStack<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: impl FnOnce() + 'a) {
        self.actions.push(Box::new(action));
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Drop for DeferStack<'_> {
    fn drop(&mut self) {
        while let Some(action) = self.actions.pop() {
            action();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_guard_runs_at_scope_exit() {
        let log = RefCell::new(Vec::new());
        {
            let _guard = defer(|| log.borrow_mut().push("deferred"));
            log.borrow_mut().push("body");
        }
        assert_eq!(*log.borrow(), ["body", "deferred"]);
    }

    #[test]
    fn test_stack_runs_last_in_first_out() {
        let log = RefCell::new(Vec::new());
        {
            let mut defers = DeferStack::new();
            for n in 1..=3 {
                let log = &log;
                defers.push(move || log.borrow_mut().push(n));
            }
            assert_eq!(defers.len(), 3);
            assert!(log.borrow().is_empty());
        }
        assert_eq!(*log.borrow(), [3, 2, 1]);
    }

    #[test]
    fn test_empty_stack() {
        let defers = DeferStack::new();
        assert!(defers.is_empty());
        assert_eq!(defers.len(), 0);
    }

    #[test]
    fn test_nested_stacks_unwind_innermost_first() {
        let log = RefCell::new(Vec::new());
        {
            let mut outer = DeferStack::new();
            outer.push(|| {
                let mut inner = DeferStack::new();
                inner.push(|| log.borrow_mut().push("inner"));
                log.borrow_mut().push("outer");
            });
            outer.push(|| log.borrow_mut().push("first to run"));
        }
        assert_eq!(*log.borrow(), ["first to run", "outer", "inner"]);
    }

    #[test]
    fn test_actions_run_during_a_panic() {
        let log = RefCell::new(Vec::new());
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut defers = DeferStack::new();
            defers.push(|| log.borrow_mut().push(1));
            defers.push(|| log.borrow_mut().push(2));
            panic!("boom");
        }));
        assert!(result.is_err());
        assert_eq!(*log.borrow(), [2, 1]);
    }
}
