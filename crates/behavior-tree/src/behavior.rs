//! Core behavior trait and the node lifecycle wrapper.
//!
//! This module defines the [`Behavior`] trait, which is the authoring
//! interface for every node kind, and [`Node`], which owns a boxed behavior
//! together with its current [`Status`] and runs the start/update/end
//! lifecycle around it. The trait is generic over a context type `C`, which
//! is threaded unmodified through every tick.

use crate::{AbortType, Status};

/// A behavior tree node that can be evaluated against a context.
///
/// Implementors only provide the per-activation hooks; the stored status and
/// the decision of when to call each hook belong to [`Node`].
pub trait Behavior<C>: Send {
    /// Called immediately before the first update of an activation.
    ///
    /// Use it to reset any state left over from the previous run.
    fn on_start(&mut self) {}

    /// Performs the node's work for one tick.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Nodes can read
    ///   agent state and modify it.
    ///
    /// # Returns
    ///
    /// - `Status::Success` / `Status::Failure` when the activation is over
    /// - `Status::Running` to be ticked again on the next pass
    fn update(&mut self, ctx: &mut C) -> Status;

    /// Called when an update returns anything other than `Running`.
    fn on_end(&mut self) {}

    /// Drops per-activation state held below this node.
    ///
    /// [`Node::invalidate`] resets the node's own status first; composites
    /// and decorators override this to invalidate their children.
    fn invalidate(&mut self) {}

    /// Evaluates this node for an abort check.
    ///
    /// Only called on nodes tagged conditional. The default runs
    /// [`update`](Behavior::update) directly, skipping the start/end hooks so
    /// polling does not disturb activation state.
    fn poll(&mut self, ctx: &mut C) -> Status {
        self.update(ctx)
    }

    /// Whether this behavior is side-effect free and may be polled by abort
    /// scans.
    ///
    /// [`Node::new`] reads this to tag the node. Every [`Conditional`] type in
    /// this crate returns `true`.
    fn is_conditional(&self) -> bool {
        false
    }

    /// Abort flags for composites; everything else reports none.
    fn abort_type(&self) -> AbortType {
        AbortType::NONE
    }

    /// The highest-priority child, for composites.
    fn first_child(&self) -> Option<&Node<C>> {
        None
    }

    /// Mutable access to the highest-priority child, for composites.
    fn first_child_mut(&mut self) -> Option<&mut Node<C>> {
        None
    }
}

/// Marker for behaviors that are side-effect free and safe to poll
/// speculatively.
///
/// Only conditional nodes take part in abort scans. Implementors should also
/// return `true` from [`Behavior::is_conditional`]; otherwise they are tagged
/// only when wrapped with [`Node::conditional`].
pub trait Conditional<C>: Behavior<C> {}

/// A behavior plus its lifecycle state.
pub struct Node<C> {
    behavior: Box<dyn Behavior<C>>,
    status: Status,
    conditional: bool,
    name: &'static str,
}

impl<C: 'static> Node<C> {
    /// Wraps a behavior, tagging it conditional when
    /// [`Behavior::is_conditional`] says so.
    pub fn new<B: Behavior<C> + 'static>(behavior: B) -> Self {
        Self {
            conditional: behavior.is_conditional(),
            behavior: Box::new(behavior),
            status: Status::Invalid,
            name: short_type_name::<B>(),
        }
    }

    /// Wraps a conditional behavior, tagging it whatever its
    /// [`Behavior::is_conditional`] reports.
    pub fn conditional<B: Conditional<C> + 'static>(behavior: B) -> Self {
        Self {
            conditional: true,
            ..Self::new(behavior)
        }
    }
}

impl<C> Node<C> {
    /// Runs one lifecycle step: start if inactive, update, end unless running.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        if self.status == Status::Invalid {
            self.behavior.on_start();
        }

        self.status = self.behavior.update(ctx);
        tracing::trace!(node = self.name, status = %self.status, "tick");

        if self.status != Status::Running {
            self.behavior.on_end();
        }

        self.status
    }

    /// Runs the behavior's update directly.
    ///
    /// Neither hook runs and the stored status is left untouched.
    pub fn update(&mut self, ctx: &mut C) -> Status {
        self.behavior.update(ctx)
    }

    /// Evaluates the node for an abort check without touching its lifecycle.
    pub fn poll(&mut self, ctx: &mut C) -> Status {
        self.behavior.poll(ctx)
    }

    /// Marks this node and everything below it as inactive.
    pub fn invalidate(&mut self) {
        self.status = Status::Invalid;
        self.behavior.invalidate();
    }

    /// Status produced by the most recent tick.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns `true` if abort scans may poll this node.
    #[inline]
    pub fn is_conditional(&self) -> bool {
        self.conditional
    }

    #[inline]
    pub fn abort_type(&self) -> AbortType {
        self.behavior.abort_type()
    }

    /// Returns `true` if this is a composite whose first child is conditional.
    pub fn is_first_child_conditional(&self) -> bool {
        self.behavior
            .first_child()
            .is_some_and(Node::is_conditional)
    }

    /// The wrapped composite's highest-priority child, if any.
    pub fn first_child_mut(&mut self) -> Option<&mut Node<C>> {
        self.behavior.first_child_mut()
    }

    /// Type name of the wrapped behavior, without module path.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<C> std::fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("status", &self.status)
            .field("conditional", &self.conditional)
            .finish()
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
