use crate::{Behavior, Node, Status};

/// Ticks its child a fixed number of times, one tick per pass.
///
/// The iteration count is reset at the start of every activation. With a
/// count of zero the repeater succeeds without touching its child.
pub struct Repeater<C> {
    child: Node<C>,
    count: u32,
    end_on_failure: bool,
    repeat_forever: bool,
    iterations: u32,
}

impl<C> Repeater<C> {
    /// Repeats `child` `count` times.
    pub fn new(child: Node<C>, count: u32) -> Self {
        Self {
            child,
            count,
            end_on_failure: false,
            repeat_forever: false,
            iterations: 0,
        }
    }

    /// Repeats `child` until the repeater is invalidated.
    pub fn forever(child: Node<C>) -> Self {
        Self {
            repeat_forever: true,
            ..Self::new(child, 0)
        }
    }

    /// Stops early, with `Success`, the first time the child fails.
    pub fn end_on_failure(mut self, end_on_failure: bool) -> Self {
        self.end_on_failure = end_on_failure;
        self
    }

    /// Child ticks performed in the current activation, saturating at
    /// `u32::MAX`.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    fn is_done(&self) -> bool {
        !self.repeat_forever && self.iterations == self.count
    }
}

impl<C> Behavior<C> for Repeater<C> {
    fn on_start(&mut self) {
        self.iterations = 0;
    }

    fn update(&mut self, ctx: &mut C) -> Status {
        // Checked before ticking as well, in case the count is zero.
        if self.is_done() {
            return Status::Success;
        }

        let status = self.child.tick(ctx);
        self.iterations = self.iterations.saturating_add(1);

        if self.end_on_failure && status == Status::Failure {
            return Status::Success;
        }

        if self.is_done() {
            return Status::Success;
        }

        Status::Running
    }

    fn invalidate(&mut self) {
        self.child.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Hits {
        count: u32,
    }

    struct Hit(Status);
    impl Behavior<Hits> for Hit {
        fn update(&mut self, ctx: &mut Hits) -> Status {
            ctx.count += 1;
            self.0
        }
    }

    #[test]
    fn zero_count_succeeds_without_ticking_child() {
        let mut repeater = Node::new(Repeater::new(Node::new(Hit(Status::Success)), 0));
        let mut ctx = Hits::default();

        assert_eq!(repeater.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.count, 0);
    }

    #[test]
    fn repeats_once_per_tick_until_count() {
        let mut repeater = Node::new(Repeater::new(Node::new(Hit(Status::Success)), 3));
        let mut ctx = Hits::default();

        assert_eq!(repeater.tick(&mut ctx), Status::Running);
        assert_eq!(repeater.tick(&mut ctx), Status::Running);
        assert_eq!(repeater.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.count, 3);
    }

    #[test]
    fn failures_count_as_iterations_by_default() {
        let mut repeater = Node::new(Repeater::new(Node::new(Hit(Status::Failure)), 2));
        let mut ctx = Hits::default();

        assert_eq!(repeater.tick(&mut ctx), Status::Running);
        assert_eq!(repeater.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn end_on_failure_stops_early() {
        let repeater = Repeater::new(Node::new(Hit(Status::Failure)), 5).end_on_failure(true);
        let mut repeater = Node::new(repeater);
        let mut ctx = Hits::default();

        assert_eq!(repeater.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.count, 1);
    }

    #[test]
    fn forever_never_finishes() {
        let mut repeater = Node::new(Repeater::forever(Node::new(Hit(Status::Success))));
        let mut ctx = Hits::default();

        for _ in 0..10 {
            assert_eq!(repeater.tick(&mut ctx), Status::Running);
        }
        assert_eq!(ctx.count, 10);
    }

    #[test]
    fn forever_saturates_the_iteration_count() {
        let mut repeater = Repeater::forever(Node::new(Hit(Status::Success)));
        repeater.iterations = u32::MAX - 1;
        let mut ctx = Hits::default();

        assert_eq!(repeater.update(&mut ctx), Status::Running);
        assert_eq!(repeater.update(&mut ctx), Status::Running);
        assert_eq!(repeater.iterations(), u32::MAX);
        assert_eq!(ctx.count, 2);
    }

    #[test]
    fn new_activation_resets_iterations() {
        let mut repeater = Node::new(Repeater::new(Node::new(Hit(Status::Success)), 2));
        let mut ctx = Hits::default();

        repeater.tick(&mut ctx);
        repeater.tick(&mut ctx);
        repeater.invalidate();

        assert_eq!(repeater.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.count, 3);
    }
}
