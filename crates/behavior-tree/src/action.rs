//! Leaf behaviors.
//!
//! Leaves do the actual work of a tree or poll a condition. Conditions are
//! side-effect free: they only see the context through a shared reference and
//! implement [`Conditional`], so they can be polled by abort scans.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Behavior, BehaviorTree, Conditional, Status};

/// Wraps a closure so one-off actions don't need their own type.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, Node, Status};
///
/// let mut node = Node::new(Action::new(|hp: &mut i32| {
///     *hp += 1;
///     Status::Success
/// }));
/// let mut hp = 9;
/// assert_eq!(node.tick(&mut hp), Status::Success);
/// assert_eq!(hp, 10);
/// ```
pub struct Action<F> {
    action: F,
}

impl<F> Action<F> {
    /// Wraps `action`, called once per update.
    pub fn new(action: F) -> Self {
        Self { action }
    }
}

impl<C, F> Behavior<C> for Action<F>
where
    F: FnMut(&mut C) -> Status + Send,
{
    fn update(&mut self, ctx: &mut C) -> Status {
        (self.action)(ctx)
    }
}

/// Wraps a predicate over the context: `true` is `Success`, `false` is
/// `Failure`.
pub struct Condition<F> {
    predicate: F,
}

impl<F> Condition<F> {
    /// Wraps `predicate`; `true` maps to `Success`.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<C, F> Behavior<C> for Condition<F>
where
    F: FnMut(&C) -> bool + Send,
{
    fn update(&mut self, ctx: &mut C) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }

    fn is_conditional(&self) -> bool {
        true
    }
}

impl<C, F> Conditional<C> for Condition<F> where F: FnMut(&C) -> bool + Send {}

/// Emits a message through `tracing` and succeeds. Handy for debugging.
#[derive(Clone, Debug)]
pub struct Log {
    text: String,
    is_error: bool,
}

impl Log {
    /// Logs `text` at info level.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Logs at error level instead of info.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::new(text)
        }
    }
}

impl<C> Behavior<C> for Log {
    fn update(&mut self, _ctx: &mut C) -> Status {
        if self.is_error {
            tracing::error!(target: "behavior_tree::log", "{}", self.text);
        } else {
            tracing::info!(target: "behavior_tree::log", "{}", self.text);
        }
        Status::Success
    }
}

/// Runs until a wall-clock duration has elapsed, then succeeds.
///
/// The clock starts on the first update of each activation, so a tree that
/// ticks at its own rate still waits the full duration.
#[derive(Clone, Debug)]
pub struct Wait {
    duration: Duration,
    started: Option<Instant>,
}

impl Wait {
    /// Waits for `duration` of wall-clock time per activation.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started: None,
        }
    }
}

impl<C> Behavior<C> for Wait {
    fn on_start(&mut self) {
        self.started = None;
    }

    fn update(&mut self, _ctx: &mut C) -> Status {
        let started = *self.started.get_or_insert_with(Instant::now);
        if started.elapsed() >= self.duration {
            Status::Success
        } else {
            Status::Running
        }
    }
}

/// Succeeds with a fixed probability on every evaluation.
pub struct RandomProbability {
    probability: f64,
    rng: StdRng,
}

impl RandomProbability {
    /// # Panics
    ///
    /// Panics if `probability` is not within `[0, 1]`.
    pub fn new(probability: f64) -> Self {
        Self::with_rng(probability, StdRng::from_entropy())
    }

    /// Same as [`new`](Self::new) with a reproducible random stream.
    pub fn with_seed(probability: f64, seed: u64) -> Self {
        Self::with_rng(probability, StdRng::seed_from_u64(seed))
    }

    fn with_rng(probability: f64, rng: StdRng) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "success probability must be within [0, 1], got {probability}"
        );
        Self { probability, rng }
    }
}

impl<C> Behavior<C> for RandomProbability {
    fn update(&mut self, _ctx: &mut C) -> Status {
        Status::from_bool(self.rng.gen_bool(self.probability))
    }

    fn is_conditional(&self) -> bool {
        true
    }
}

impl<C> Conditional<C> for RandomProbability {}

/// Runs a whole nested tree as a single leaf.
///
/// Every update ticks the nested root once, with the nested tree's own
/// context, and succeeds. The nested tree's update period does not apply.
pub struct SubTree<T> {
    tree: BehaviorTree<T>,
}

impl<T> SubTree<T> {
    /// Wraps `tree` as a leaf.
    pub fn new(tree: BehaviorTree<T>) -> Self {
        Self { tree }
    }

    /// The nested tree.
    pub fn tree(&self) -> &BehaviorTree<T> {
        &self.tree
    }
}

impl<C, T: Send> Behavior<C> for SubTree<T> {
    fn update(&mut self, _ctx: &mut C) -> Status {
        self.tree.tick_root();
        Status::Success
    }
}
