use crate::action::Action;
use crate::middleware::{Context, Middleware, Next};

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware<A> {
    /// Actions for which this returns `true` are not logged
    skip: Option<fn(&A) -> bool>,
}

impl<A> LoggingMiddleware<A> {
    pub fn new() -> Self {
        Self { skip: None }
    }

    /// Skip logging for noisy actions (e.g. high-frequency participant updates)
    pub fn skipping(skip: fn(&A) -> bool) -> Self {
        Self { skip: Some(skip) }
    }

    fn should_log(&self, action: &A) -> bool {
        self.skip.map_or(true, |skip| !skip(action))
    }
}

impl<A> Default for LoggingMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A: Action> Middleware<S, A> for LoggingMiddleware<A> {
    fn handle(&mut self, action: A, _ctx: &Context<'_, S, A>, next: Next<'_, S, A>) {
        if self.should_log(&action) {
            log::debug!("Action: {:?}", action);
        }
        next.run(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum TestAction {
        Tick,
        Quit,
    }

    #[test]
    fn test_logs_everything_by_default() {
        let middleware = LoggingMiddleware::<TestAction>::new();
        assert!(middleware.should_log(&TestAction::Tick));
        assert!(middleware.should_log(&TestAction::Quit));
    }

    #[test]
    fn test_skip_filter() {
        let middleware =
            LoggingMiddleware::skipping(|action: &TestAction| matches!(action, TestAction::Tick));
        assert!(!middleware.should_log(&TestAction::Tick));
        assert!(middleware.should_log(&TestAction::Quit));
    }
}
