//! The tree driver.
//!
//! [`BehaviorTree`] owns the root node and the context, and decides how many
//! times the root is ticked for a given amount of elapsed time.

use crate::{Node, Status, TreeConfig};

/// Owns a root node and the context threaded through every tick.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, BehaviorTree, Node, Status, TreeConfig};
///
/// let root = Node::new(Action::new(|ticks: &mut u32| {
///     *ticks += 1;
///     Status::Running
/// }));
/// let mut tree = BehaviorTree::with_config(0, root, TreeConfig::with_update_period(0.5));
///
/// assert_eq!(tree.tick(0.25), 0);
/// assert_eq!(tree.tick(0.25), 1);
/// assert_eq!(*tree.context(), 1);
/// ```
pub struct BehaviorTree<C> {
    root: Node<C>,
    context: C,
    config: TreeConfig,
    elapsed: f64,
}

impl<C> BehaviorTree<C> {
    /// Creates a driver with the default update period.
    pub fn new(context: C, root: Node<C>) -> Self {
        Self::with_config(context, root, TreeConfig::default())
    }

    /// Creates a driver; the first root tick happens once a full period has
    /// elapsed.
    pub fn with_config(context: C, root: Node<C>, config: TreeConfig) -> Self {
        Self {
            root,
            context,
            elapsed: config.update_period,
            config,
        }
    }

    /// Advances the driver by `delta_secs` seconds of elapsed time.
    ///
    /// Returns how many times the root was ticked. Without a positive update
    /// period every call ticks once. Otherwise the root ticks once for every
    /// full period that has run out since the last tick, so a long frame
    /// catches up with several ticks. A non-finite delta is ignored.
    pub fn tick(&mut self, delta_secs: f64) -> usize {
        let period = self.config.update_period;
        if period <= 0.0 || period.is_nan() {
            self.tick_root();
            return 1;
        }

        if !delta_secs.is_finite() {
            tracing::warn!(delta_secs, "ignoring non-finite frame time");
            return 0;
        }

        self.elapsed -= delta_secs;
        if self.elapsed > 0.0 {
            return 0;
        }

        // Every period that ran out, counting the one the budget ended in.
        let mut ticks = (-self.elapsed / period).floor() as usize + 1;
        self.elapsed += ticks as f64 * period;
        while self.elapsed <= 0.0 {
            self.elapsed += period;
            ticks += 1;
        }

        for _ in 0..ticks {
            self.tick_root();
        }

        if ticks > 1 {
            tracing::debug!(ticks, delta_secs, period, "behavior tree caught up");
        }
        ticks
    }

    /// Ticks the root once, ignoring the update period.
    pub fn tick_root(&mut self) -> Status {
        self.root.tick(&mut self.context)
    }

    /// Status of the root after its most recent tick.
    pub fn status(&self) -> Status {
        self.root.status()
    }

    /// The root node.
    pub fn root(&self) -> &Node<C> {
        &self.root
    }

    /// The context handed to every node.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Mutable access to the context between ticks.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Drops the tree and returns its context.
    pub fn into_context(self) -> C {
        self.context
    }

    /// The driver configuration.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;

    fn counting_tree(config: TreeConfig) -> BehaviorTree<u32> {
        let root = Node::new(Action::new(|ticks: &mut u32| {
            *ticks += 1;
            Status::Running
        }));
        BehaviorTree::with_config(0, root, config)
    }

    #[test]
    fn non_positive_period_ticks_every_call() {
        for period in [0.0, -1.0] {
            let mut tree = counting_tree(TreeConfig::with_update_period(period));
            assert_eq!(tree.tick(0.0), 1);
            assert_eq!(tree.tick(100.0), 1);
            assert_eq!(*tree.context(), 2);
        }
    }

    #[test]
    fn accumulates_until_period_elapses() {
        let mut tree = counting_tree(TreeConfig::with_update_period(1.0));

        assert_eq!(tree.tick(0.5), 0);
        assert_eq!(tree.tick(0.25), 0);
        assert_eq!(tree.tick(0.25), 1);
        assert_eq!(*tree.context(), 1);
    }

    #[test]
    fn long_frame_catches_up() {
        let mut tree = counting_tree(TreeConfig::with_update_period(1.0));

        assert_eq!(tree.tick(3.5), 3);
        assert_eq!(*tree.context(), 3);
        // 0.5s of budget left over from the catch-up.
        assert_eq!(tree.tick(0.25), 0);
        assert_eq!(tree.tick(0.25), 1);
    }

    #[test]
    fn non_finite_delta_is_skipped() {
        let mut tree = counting_tree(TreeConfig::with_update_period(0.5));

        assert_eq!(tree.tick(f64::NAN), 0);
        assert_eq!(tree.tick(f64::INFINITY), 0);
        assert_eq!(tree.tick(0.25), 0);
        assert_eq!(tree.tick(0.25), 1);
        assert_eq!(*tree.context(), 1);
    }

    #[test]
    fn huge_delta_catches_up_exactly() {
        let mut tree = counting_tree(TreeConfig::with_update_period(0.25));

        assert_eq!(tree.tick(2000.0), 8000);
        assert_eq!(*tree.context(), 8000);
        assert_eq!(tree.tick(0.125), 0);
        assert_eq!(tree.tick(0.125), 1);
    }

    #[test]
    fn tick_root_ignores_period() {
        let mut tree = counting_tree(TreeConfig::default());
        assert_eq!(tree.tick_root(), Status::Running);
        assert_eq!(tree.status(), Status::Running);
        assert_eq!(tree.into_context(), 1);
    }
}
