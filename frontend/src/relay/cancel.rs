use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Hook = Box<dyn FnOnce()>;

/// Shared flag for abandoning an in-flight request. Clones observe the same state.
#[derive(Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
    hooks: Rc<RefCell<Vec<Hook>>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Marks the token cancelled and runs registered hooks once.
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        let hooks: Vec<Hook> = self.hooks.borrow_mut().drain(..).collect();
        for hook in hooks {
            hook();
        }
    }

    /// Runs `hook` on cancellation, immediately if already cancelled.
    pub fn on_cancel(&self, hook: impl FnOnce() + 'static) {
        if self.is_cancelled() {
            hook();
        } else {
            self.hooks.borrow_mut().push(Box::new(hook));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());
        token.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn test_hooks_run_exactly_once() {
        let token = CancelToken::new();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        token.on_cancel(move || counter.set(counter.get() + 1));
        token.cancel();
        token.cancel();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_hook_registered_after_cancel_runs_immediately() {
        let token = CancelToken::new();
        token.cancel();
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        token.on_cancel(move || flag.set(true));
        assert!(ran.get());
    }
}
