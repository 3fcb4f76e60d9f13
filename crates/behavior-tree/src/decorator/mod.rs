//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or execution.
//! The child is a constructor argument, so a decorator can never be ticked
//! without one.
//!
//! [`AlwaysFail`], [`AlwaysSucceed`], [`UntilFail`] and [`UntilSuccess`] call
//! the child's update directly rather than ticking it: the child never sees
//! its start/end hooks while wrapped by one of them.

mod conditional;
mod repeater;

pub use conditional::ConditionalDecorator;
pub use repeater::Repeater;

use crate::{Behavior, Node, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    child: Node<C>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn update(&mut self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }

    fn invalidate(&mut self) {
        self.child.invalidate();
    }
}

/// Returns `Failure` whatever the child returns, except while it is running.
pub struct AlwaysFail<C> {
    child: Node<C>,
}

impl<C> AlwaysFail<C> {
    /// Wraps `child`, reporting `Failure` once it finishes.
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for AlwaysFail<C> {
    fn update(&mut self, ctx: &mut C) -> Status {
        match self.child.update(ctx) {
            Status::Running => Status::Running,
            _ => Status::Failure,
        }
    }

    fn invalidate(&mut self) {
        self.child.invalidate();
    }
}

/// Returns `Success` whatever the child returns, except while it is running.
///
/// This is useful for:
/// - Optional behaviors that shouldn't cause a sequence to fail
/// - Logging/debugging nodes that observe state without affecting control flow
pub struct AlwaysSucceed<C> {
    child: Node<C>,
}

impl<C> AlwaysSucceed<C> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for AlwaysSucceed<C> {
    fn update(&mut self, ctx: &mut C) -> Status {
        match self.child.update(ctx) {
            Status::Running => Status::Running,
            _ => Status::Success,
        }
    }

    fn invalidate(&mut self) {
        self.child.invalidate();
    }
}

/// Keeps running its child until the child fails, then succeeds.
pub struct UntilFail<C> {
    child: Node<C>,
}

impl<C> UntilFail<C> {
    /// Wraps `child`, running it until it fails.
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for UntilFail<C> {
    fn update(&mut self, ctx: &mut C) -> Status {
        match self.child.update(ctx) {
            Status::Failure => Status::Success,
            _ => Status::Running,
        }
    }

    fn invalidate(&mut self) {
        self.child.invalidate();
    }
}

/// Keeps running its child until the child succeeds, then succeeds.
pub struct UntilSuccess<C> {
    child: Node<C>,
}

impl<C> UntilSuccess<C> {
    /// Wraps `child`, running it until it succeeds.
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for UntilSuccess<C> {
    fn update(&mut self, ctx: &mut C) -> Status {
        match self.child.update(ctx) {
            Status::Success => Status::Success,
            _ => Status::Running,
        }
    }

    fn invalidate(&mut self) {
        self.child.invalidate();
    }
}
