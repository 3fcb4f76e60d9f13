//! Priority-ordered composites that drive one child per tick.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::CompositeCore;
use crate::{AbortType, Behavior, Node, Status};

/// Executes child behaviors in order until one fails.
///
/// # Semantics
///
/// Each tick drives only the active child:
/// - `Running` from the child is returned unchanged
/// - `Failure` from the child is returned and rewinds the cursor
/// - `Success` moves the cursor on and returns `Running`, so the next child
///   runs on the next tick
/// - `Success` from the last child returns `Success` and rewinds the cursor
///
/// This is a short-circuited logical AND spread across ticks. With
/// [`AbortType::SELF`] the sequence re-polls its earlier conditional children
/// every tick and restarts from the first one that no longer succeeds.
pub struct Sequence<C> {
    core: CompositeCore<C>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given children and no aborts.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self {
            core: CompositeCore::new("Sequence", children, AbortType::NONE),
        }
    }

    /// Sets the abort flags, replacing the default `AbortType::NONE`.
    pub fn with_abort_type(mut self, abort_type: AbortType) -> Self {
        self.core.abort_type = abort_type;
        self
    }

    /// Shared composite state, for inspecting the cursor and children.
    pub fn core(&self) -> &CompositeCore<C> {
        &self.core
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn on_start(&mut self) {
        self.core.on_start();
    }

    fn update(&mut self, ctx: &mut C) -> Status {
        self.core.step(ctx, Status::Success)
    }

    fn on_end(&mut self) {
        self.core.on_end();
    }

    fn invalidate(&mut self) {
        self.core.invalidate();
    }

    fn abort_type(&self) -> AbortType {
        self.core.abort_type()
    }

    fn first_child(&self) -> Option<&Node<C>> {
        self.core.first_child()
    }

    fn first_child_mut(&mut self) -> Option<&mut Node<C>> {
        self.core.first_child_mut()
    }
}

/// Executes child behaviors in order until one succeeds.
///
/// # Semantics
///
/// Each tick drives only the active child:
/// - `Running` from the child is returned unchanged
/// - `Success` from the child is returned and rewinds the cursor
/// - `Failure` moves the cursor on and returns `Running`
/// - `Failure` from the last child returns `Failure` and rewinds the cursor
///
/// This is a short-circuited logical OR spread across ticks. While a
/// lower-priority child runs, the selector re-polls higher-priority branches
/// that opted into aborts and switches back as soon as one would succeed.
pub struct Selector<C> {
    core: CompositeCore<C>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given children and no aborts.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self {
            core: CompositeCore::new("Selector", children, AbortType::NONE),
        }
    }

    /// Sets the abort flags, replacing the default `AbortType::NONE`.
    pub fn with_abort_type(mut self, abort_type: AbortType) -> Self {
        self.core.abort_type = abort_type;
        self
    }

    /// Shared composite state, for inspecting the cursor and children.
    pub fn core(&self) -> &CompositeCore<C> {
        &self.core
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn on_start(&mut self) {
        self.core.on_start();
    }

    fn update(&mut self, ctx: &mut C) -> Status {
        self.core.step(ctx, Status::Failure)
    }

    fn on_end(&mut self) {
        self.core.on_end();
    }

    fn invalidate(&mut self) {
        self.core.invalidate();
    }

    fn abort_type(&self) -> AbortType {
        self.core.abort_type()
    }

    fn first_child(&self) -> Option<&Node<C>> {
        self.core.first_child()
    }

    fn first_child_mut(&mut self) -> Option<&mut Node<C>> {
        self.core.first_child_mut()
    }
}

/// A [`Sequence`] whose children are shuffled at the start of every
/// activation.
pub struct RandomSequence<C> {
    inner: Sequence<C>,
    rng: StdRng,
}

impl<C> RandomSequence<C> {
    /// Creates a random sequence seeded from OS entropy.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self {
            inner: Sequence::new(children),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a random sequence with a reproducible shuffle order.
    pub fn with_seed(children: Vec<Node<C>>, seed: u64) -> Self {
        Self {
            inner: Sequence::new(children),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sets the abort flags, replacing the default `AbortType::NONE`.
    pub fn with_abort_type(mut self, abort_type: AbortType) -> Self {
        self.inner = self.inner.with_abort_type(abort_type);
        self
    }

    /// Shared composite state, for inspecting the cursor and children.
    pub fn core(&self) -> &CompositeCore<C> {
        self.inner.core()
    }
}

impl<C> Behavior<C> for RandomSequence<C> {
    fn on_start(&mut self) {
        self.inner.on_start();
        self.inner.core.children.shuffle(&mut self.rng);
    }

    fn update(&mut self, ctx: &mut C) -> Status {
        self.inner.update(ctx)
    }

    fn on_end(&mut self) {
        self.inner.on_end();
    }

    fn invalidate(&mut self) {
        self.inner.invalidate();
    }

    fn abort_type(&self) -> AbortType {
        self.inner.abort_type()
    }

    fn first_child(&self) -> Option<&Node<C>> {
        self.inner.first_child()
    }

    fn first_child_mut(&mut self) -> Option<&mut Node<C>> {
        self.inner.first_child_mut()
    }
}

/// A [`Selector`] whose children are shuffled at the start of every
/// activation.
pub struct RandomSelector<C> {
    inner: Selector<C>,
    rng: StdRng,
}

impl<C> RandomSelector<C> {
    /// Creates a random selector seeded from OS entropy.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self {
            inner: Selector::new(children),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a random selector with a reproducible shuffle order.
    pub fn with_seed(children: Vec<Node<C>>, seed: u64) -> Self {
        Self {
            inner: Selector::new(children),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sets the abort flags, replacing the default `AbortType::NONE`.
    pub fn with_abort_type(mut self, abort_type: AbortType) -> Self {
        self.inner = self.inner.with_abort_type(abort_type);
        self
    }

    /// Shared composite state, for inspecting the cursor and children.
    pub fn core(&self) -> &CompositeCore<C> {
        self.inner.core()
    }
}

impl<C> Behavior<C> for RandomSelector<C> {
    fn on_start(&mut self) {
        self.inner.on_start();
        self.inner.core.children.shuffle(&mut self.rng);
    }

    fn update(&mut self, ctx: &mut C) -> Status {
        self.inner.update(ctx)
    }

    fn on_end(&mut self) {
        self.inner.on_end();
    }

    fn invalidate(&mut self) {
        self.inner.invalidate();
    }

    fn abort_type(&self) -> AbortType {
        self.inner.abort_type()
    }

    fn first_child(&self) -> Option<&Node<C>> {
        self.inner.first_child()
    }

    fn first_child_mut(&mut self) -> Option<&mut Node<C>> {
        self.inner.first_child_mut()
    }
}
