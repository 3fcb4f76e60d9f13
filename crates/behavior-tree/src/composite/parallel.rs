//! Composites that tick every child on every pass.
//!
//! "Parallel" means all children are evaluated within one synchronous pass,
//! not concurrently. Children that already finished on an earlier pass are
//! ticked again, and siblings are not invalidated when the pass
//! short-circuits.

use super::CompositeCore;
use crate::{AbortType, Behavior, Node, Status};

/// Succeeds once every child succeeds; fails as soon as any child fails.
pub struct Parallel<C> {
    core: CompositeCore<C>,
}

impl<C> Parallel<C> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self {
            core: CompositeCore::new("Parallel", children, AbortType::NONE),
        }
    }
}

impl<C> Behavior<C> for Parallel<C> {
    fn on_start(&mut self) {
        self.core.on_start();
    }

    fn update(&mut self, ctx: &mut C) -> Status {
        let mut all_succeeded = true;
        for child in self.core.children_mut() {
            match child.tick(ctx) {
                Status::Failure => return Status::Failure,
                Status::Success => {}
                _ => all_succeeded = false,
            }
        }

        if all_succeeded {
            Status::Success
        } else {
            Status::Running
        }
    }

    fn on_end(&mut self) {
        self.core.on_end();
    }

    fn invalidate(&mut self) {
        self.core.invalidate();
    }

    fn first_child(&self) -> Option<&Node<C>> {
        self.core.first_child()
    }

    fn first_child_mut(&mut self) -> Option<&mut Node<C>> {
        self.core.first_child_mut()
    }
}

/// Succeeds as soon as any child succeeds; fails once every child fails.
pub struct ParallelSelector<C> {
    core: CompositeCore<C>,
}

impl<C> ParallelSelector<C> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self {
            core: CompositeCore::new("ParallelSelector", children, AbortType::NONE),
        }
    }
}

impl<C> Behavior<C> for ParallelSelector<C> {
    fn on_start(&mut self) {
        self.core.on_start();
    }

    fn update(&mut self, ctx: &mut C) -> Status {
        let mut all_failed = true;
        for child in self.core.children_mut() {
            match child.tick(ctx) {
                Status::Success => return Status::Success,
                Status::Failure => {}
                _ => all_failed = false,
            }
        }

        if all_failed {
            Status::Failure
        } else {
            Status::Running
        }
    }

    fn on_end(&mut self) {
        self.core.on_end();
    }

    fn invalidate(&mut self) {
        self.core.invalidate();
    }

    fn first_child(&self) -> Option<&Node<C>> {
        self.core.first_child()
    }

    fn first_child_mut(&mut self) -> Option<&mut Node<C>> {
        self.core.first_child_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counters {
        ticks: [u32; 3],
    }

    /// Replays a fixed script of results, one per update.
    struct Script {
        slot: usize,
        results: Vec<Status>,
        next: usize,
    }

    impl Script {
        fn node(slot: usize, results: &[Status]) -> Node<Counters> {
            Node::new(Script {
                slot,
                results: results.to_vec(),
                next: 0,
            })
        }
    }

    impl Behavior<Counters> for Script {
        fn update(&mut self, ctx: &mut Counters) -> Status {
            ctx.ticks[self.slot] += 1;
            let status = self.results[self.next.min(self.results.len() - 1)];
            self.next += 1;
            status
        }
    }

    use Status::{Failure, Running, Success};

    #[test]
    fn parallel_fails_in_the_same_pass() {
        let mut par = Node::new(Parallel::new(vec![
            Script::node(0, &[Running]),
            Script::node(1, &[Failure]),
            Script::node(2, &[Success]),
        ]));
        let mut ctx = Counters::default();

        assert_eq!(par.tick(&mut ctx), Failure);
        // Short-circuit: the child after the failing one never ran.
        assert_eq!(ctx.ticks, [1, 1, 0]);
    }

    #[test]
    fn parallel_runs_until_every_child_succeeds() {
        let mut par = Node::new(Parallel::new(vec![
            Script::node(0, &[Success]),
            Script::node(1, &[Running, Success]),
        ]));
        let mut ctx = Counters::default();

        assert_eq!(par.tick(&mut ctx), Running);
        assert_eq!(par.tick(&mut ctx), Success);
        // Finished children are ticked again on later passes.
        assert_eq!(ctx.ticks[0], 2);
    }

    #[test]
    fn parallel_selector_succeeds_in_the_same_pass() {
        let mut par = Node::new(ParallelSelector::new(vec![
            Script::node(0, &[Running]),
            Script::node(1, &[Success]),
            Script::node(2, &[Failure]),
        ]));
        let mut ctx = Counters::default();

        assert_eq!(par.tick(&mut ctx), Success);
        assert_eq!(ctx.ticks, [1, 1, 0]);
    }

    #[test]
    fn parallel_selector_fails_when_every_child_fails() {
        let mut par = Node::new(ParallelSelector::new(vec![
            Script::node(0, &[Failure]),
            Script::node(1, &[Running, Failure]),
        ]));
        let mut ctx = Counters::default();

        assert_eq!(par.tick(&mut ctx), Running);
        assert_eq!(par.tick(&mut ctx), Failure);
    }
}
