//! Middleware system
//!
//! Middleware sits between dispatch and the reducer and handles cross-cutting
//! concerns: logging, throttling, and side effects against external services.
//!
//! ```text
//! Action → Middleware 1 → Middleware 2 → … → Reducer → publish
//! ```
//!
//! Middlewares compose like an onion. The first one registered is the outermost
//! wrapper, so it sees every action first. Each middleware decides what to do
//! with the action:
//! - pass it on with [`Next::run`] (possibly after inspecting state),
//! - consume it by dropping `next` (the action never reaches the reducer and
//!   nothing is published),
//! - start an asynchronous effect that dispatches follow-up actions through a
//!   cloned [`Dispatcher`] once it completes.
//!
//! Middleware runs on the store worker thread, so `handle` must return quickly.
//! Anything that waits on an external service belongs in a spawned task.
//!
//! ## Example
//!
//! ```rust
//! use composite_redux::{Action, Context, Middleware, Next};
//!
//! #[derive(Debug)]
//! enum Ping {
//!     Sent,
//!     Answered,
//! }
//!
//! impl Action for Ping {}
//!
//! struct AutoAnswer;
//!
//! impl Middleware<u32, Ping> for AutoAnswer {
//!     fn handle(&mut self, action: Ping, ctx: &Context<'_, u32, Ping>, next: Next<'_, u32, Ping>) {
//!         if matches!(action, Ping::Sent) {
//!             ctx.dispatch(Ping::Answered);
//!         }
//!         next.run(action);
//!     }
//! }
//! ```

use std::sync::Arc;

use crate::dispatcher::Dispatcher;
use crate::shared::Shared;

pub mod logging;
pub mod throttle;

/// Interceptor in the dispatch pipeline
pub trait Middleware<S, A>: Send {
    /// Handle an action on its way to the reducer
    ///
    /// - `action`: the action being processed (owned, pass it on via `next`)
    /// - `ctx`: read access to the current state and a way to dispatch follow-ups
    /// - `next`: the rest of the chain; dropping it consumes the action
    fn handle(&mut self, action: A, ctx: &Context<'_, S, A>, next: Next<'_, S, A>);
}

/// What a middleware may do with the store while handling an action
pub struct Context<'a, S, A> {
    shared: &'a Shared<S>,
    dispatcher: &'a Dispatcher<A>,
}

impl<'a, S, A> Context<'a, S, A> {
    pub(crate) fn new(shared: &'a Shared<S>, dispatcher: &'a Dispatcher<A>) -> Self {
        Self { shared, dispatcher }
    }

    /// Current state snapshot (read-only)
    pub fn state(&self) -> Arc<S> {
        self.shared.snapshot()
    }

    /// Queue a follow-up action behind everything already queued
    pub fn dispatch(&self, action: A) {
        self.dispatcher.dispatch(action);
    }

    /// Owned dispatch handle to move into asynchronous effects
    pub fn dispatcher(&self) -> Dispatcher<A> {
        self.dispatcher.clone()
    }
}

/// Continuation to the remaining middlewares and finally the reducer
pub struct Next<'a, S, A> {
    chain: &'a mut [Box<dyn Middleware<S, A>>],
    ctx: &'a Context<'a, S, A>,
    terminal: &'a mut dyn FnMut(A),
}

impl<'a, S, A> Next<'a, S, A> {
    pub(crate) fn new(
        chain: &'a mut [Box<dyn Middleware<S, A>>],
        ctx: &'a Context<'a, S, A>,
        terminal: &'a mut dyn FnMut(A),
    ) -> Self {
        Self {
            chain,
            ctx,
            terminal,
        }
    }

    /// Pass the action to the next middleware, or to the reducer if this was
    /// the innermost one
    pub fn run(self, action: A) {
        let Next {
            chain,
            ctx,
            terminal,
        } = self;
        match chain.split_first_mut() {
            Some((head, rest)) => {
                let next = Next {
                    chain: rest,
                    ctx,
                    terminal,
                };
                head.handle(action, ctx, next);
            }
            None => terminal(action),
        }
    }
}
