//! Throttling of repeated actions
//!
//! Some actions are triggered by UI gestures that users tend to repeat (double
//! taps on the camera button, hammering "end call"). The throttler lets the first
//! occurrence of a keyed action through and consumes identical ones until the
//! timeout has elapsed. Actions without a key are never throttled.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::action::Action;
use crate::middleware::{Context, Middleware, Next};

/// Maps an action to its throttle key, `None` means "never throttle"
pub type KeyGenerator<A> = Box<dyn Fn(&A) -> Option<String> + Send>;

/// Decides whether an action may pass, based on when its key was last seen
pub struct Throttler<A> {
    timeout: Duration,
    key_generator: KeyGenerator<A>,
    last_seen: HashMap<String, Instant>,
}

impl<A> Throttler<A> {
    pub fn new<F>(timeout: Duration, key_generator: F) -> Self
    where
        F: Fn(&A) -> Option<String> + Send + 'static,
    {
        Self {
            timeout,
            key_generator: Box::new(key_generator),
            last_seen: HashMap::new(),
        }
    }

    /// Check an action against the wall clock
    pub fn should_process(&mut self, action: &A) -> bool {
        self.should_process_at(action, Instant::now())
    }

    /// Check an action at a given instant
    pub fn should_process_at(&mut self, action: &A, now: Instant) -> bool {
        let Some(key) = (self.key_generator)(action) else {
            return true;
        };

        match self.last_seen.get(&key) {
            Some(last) if now.saturating_duration_since(*last) < self.timeout => false,
            _ => {
                let timeout = self.timeout;
                self.last_seen
                    .retain(|_, last| now.saturating_duration_since(*last) < timeout);
                self.last_seen.insert(key, now);
                true
            }
        }
    }
}

/// Middleware that consumes actions rejected by a [`Throttler`]
pub struct ThrottleMiddleware<A> {
    throttler: Throttler<A>,
}

impl<A> ThrottleMiddleware<A> {
    pub fn new<F>(timeout: Duration, key_generator: F) -> Self
    where
        F: Fn(&A) -> Option<String> + Send + 'static,
    {
        Self {
            throttler: Throttler::new(timeout, key_generator),
        }
    }
}

impl<S, A: Action> Middleware<S, A> for ThrottleMiddleware<A> {
    fn handle(&mut self, action: A, _ctx: &Context<'_, S, A>, next: Next<'_, S, A>) {
        if self.throttler.should_process(&action) {
            next.run(action);
        } else {
            log::debug!("ThrottleMiddleware: dropping repeated {:?}", action);
        }
    }
}
