//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! Children are kept in priority order (index 0 is the highest priority).
//! [`CompositeCore`] holds what every composite shares: the child list, the
//! cursor of the active child, and the bookkeeping for conditional aborts.
//!
//! - [`Sequence`] / [`Selector`]: one child per tick, AND / OR logic
//! - [`RandomSequence`] / [`RandomSelector`]: same, with children shuffled
//!   at the start of each activation
//! - [`Parallel`] / [`ParallelSelector`]: every child on every tick

mod parallel;
mod sequence;

pub use parallel::{Parallel, ParallelSelector};
pub use sequence::{RandomSelector, RandomSequence, Selector, Sequence};

use crate::{AbortType, Node, Status};

/// State shared by every composite node.
pub struct CompositeCore<C> {
    children: Vec<Node<C>>,
    current: usize,
    abort_type: AbortType,
    has_lower_priority_conditional_abort: bool,
}

impl<C> CompositeCore<C> {
    /// Creates the shared composite state.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A composite with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(kind: &str, children: Vec<Node<C>>, abort_type: AbortType) -> Self {
        assert!(!children.is_empty(), "{kind} must have at least one child");
        Self {
            children,
            current: 0,
            abort_type,
            has_lower_priority_conditional_abort: false,
        }
    }

    #[inline]
    pub fn children(&self) -> &[Node<C>] {
        &self.children
    }

    #[inline]
    pub fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut self.children
    }

    /// Index of the active child.
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn abort_type(&self) -> AbortType {
        self.abort_type
    }

    #[inline]
    pub fn has_lower_priority_conditional_abort(&self) -> bool {
        self.has_lower_priority_conditional_abort
    }

    /// Starts a fresh activation.
    ///
    /// Lower-priority aborts are declared one level down, so the children are
    /// scanned here for a composite that opts in and starts with a conditional.
    pub fn on_start(&mut self) {
        self.has_lower_priority_conditional_abort = self.children.iter().any(|child| {
            child.abort_type().contains(AbortType::LOWER_PRIORITY)
                && child.is_first_child_conditional()
        });
        self.current = 0;
    }

    /// Invalidates every child so the next activation starts clean.
    pub fn on_end(&mut self) {
        self.invalidate();
    }

    pub fn invalidate(&mut self) {
        for child in &mut self.children {
            child.invalidate();
        }
    }

    /// Runs the abort scans that apply before the active child is ticked.
    ///
    /// `status_check` is the result a higher-priority child had when the
    /// cursor moved past it: `Success` for sequences, `Failure` for selectors.
    pub fn handle_conditional_aborts(&mut self, ctx: &mut C, status_check: Status) {
        if self.has_lower_priority_conditional_abort {
            self.update_lower_priority_abort_conditional(ctx, status_check);
        }

        if self.abort_type.contains(AbortType::SELF) {
            self.update_self_abort_conditional(ctx, status_check);
        }
    }

    /// Re-polls the conditional children before the cursor.
    ///
    /// The earliest child whose result differs from `status_check` becomes
    /// the active child again, and it and everything after it are
    /// invalidated.
    pub fn update_self_abort_conditional(&mut self, ctx: &mut C, status_check: Status) {
        for i in 0..self.current {
            let child = &mut self.children[i];
            if !child.is_conditional() {
                continue;
            }

            let status = child.poll(ctx);
            if status != status_check {
                tracing::debug!(index = i, %status, "self abort");
                self.abort_to(i);
                break;
            }
        }
    }

    /// Re-polls the leading conditional of each higher-priority child
    /// composite that declares `LOWER_PRIORITY`.
    ///
    /// Same divergence rule as
    /// [`update_self_abort_conditional`](Self::update_self_abort_conditional).
    pub fn update_lower_priority_abort_conditional(&mut self, ctx: &mut C, status_check: Status) {
        for i in 0..self.current {
            let composite = &mut self.children[i];
            if !composite.abort_type().contains(AbortType::LOWER_PRIORITY) {
                continue;
            }

            let Some(conditional) = composite
                .first_child_mut()
                .filter(|first| first.is_conditional())
            else {
                continue;
            };

            let status = conditional.poll(ctx);
            if status != status_check {
                tracing::debug!(index = i, %status, "lower priority abort");
                self.abort_to(i);
                break;
            }
        }
    }

    /// Ticks the active child and moves the cursor on `continue_on`.
    ///
    /// Shared by [`Sequence`] (`continue_on == Success`) and [`Selector`]
    /// (`continue_on == Failure`). `Running` is returned as is; any other
    /// result ends the run, rewinds the cursor and is returned. Getting
    /// through the last child returns `continue_on` and rewinds the cursor;
    /// otherwise the next child is tried on the next tick.
    pub(crate) fn step(&mut self, ctx: &mut C, continue_on: Status) -> Status {
        if self.current != 0 {
            self.handle_conditional_aborts(ctx, continue_on);
        }

        let status = self.children[self.current].tick(ctx);
        if status == Status::Running {
            return status;
        }
        if status != continue_on {
            self.current = 0;
            return status;
        }

        self.current += 1;
        if self.current == self.children.len() {
            self.current = 0;
            return continue_on;
        }

        Status::Running
    }

    fn abort_to(&mut self, index: usize) {
        self.current = index;
        for child in &mut self.children[index..] {
            child.invalidate();
        }
    }

    pub(crate) fn first_child(&self) -> Option<&Node<C>> {
        self.children.first()
    }

    pub(crate) fn first_child_mut(&mut self) -> Option<&mut Node<C>> {
        self.children.first_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Behavior, Conditional};

    #[derive(Default)]
    struct Flags {
        open: bool,
        polls: u32,
    }

    struct IsOpen;
    impl Behavior<Flags> for IsOpen {
        fn update(&mut self, ctx: &mut Flags) -> Status {
            ctx.polls += 1;
            Status::from_bool(ctx.open)
        }
    }
    impl Conditional<Flags> for IsOpen {}

    struct Busy;
    impl Behavior<Flags> for Busy {
        fn update(&mut self, _ctx: &mut Flags) -> Status {
            Status::Running
        }
    }

    fn guarded(abort_type: AbortType) -> Node<Flags> {
        let sequence = Sequence::new(vec![Node::conditional(IsOpen), Node::new(Busy)]);
        Node::new(sequence.with_abort_type(abort_type))
    }

    #[test]
    #[should_panic(expected = "Sequence must have at least one child")]
    fn empty_composite_panics() {
        let _ = Sequence::<Flags>::new(Vec::new());
    }

    #[test]
    fn on_start_detects_lower_priority_children() {
        let mut core = CompositeCore::new(
            "Selector",
            vec![guarded(AbortType::LOWER_PRIORITY), Node::new(Busy)],
            AbortType::NONE,
        );
        core.on_start();
        assert!(core.has_lower_priority_conditional_abort());

        let mut plain = CompositeCore::new(
            "Selector",
            vec![guarded(AbortType::SELF), Node::new(Busy)],
            AbortType::NONE,
        );
        plain.on_start();
        assert!(!plain.has_lower_priority_conditional_abort());
    }

    #[test]
    fn self_abort_rewinds_to_first_divergent_conditional() {
        let mut core = CompositeCore::new(
            "Sequence",
            vec![
                Node::conditional(IsOpen),
                Node::conditional(IsOpen),
                Node::new(Busy),
            ],
            AbortType::SELF,
        );
        let mut ctx = Flags {
            open: true,
            ..Flags::default()
        };
        core.on_start();
        core.current = 2;
        core.children[2].tick(&mut ctx);

        ctx.open = false;
        core.update_self_abort_conditional(&mut ctx, Status::Success);

        assert_eq!(core.current(), 0);
        assert_eq!(ctx.polls, 1, "scan stops at the first divergence");
        assert_eq!(core.children[2].status(), Status::Invalid);
    }

    #[test]
    fn self_abort_ignores_matching_conditionals() {
        let mut core = CompositeCore::new(
            "Sequence",
            vec![Node::conditional(IsOpen), Node::new(Busy)],
            AbortType::SELF,
        );
        let mut ctx = Flags {
            open: true,
            ..Flags::default()
        };
        core.on_start();
        core.current = 1;
        core.children[1].tick(&mut ctx);

        core.update_self_abort_conditional(&mut ctx, Status::Success);
        assert_eq!(core.current(), 1);
        assert_eq!(core.children[1].status(), Status::Running);
    }

    #[test]
    fn lower_priority_abort_polls_first_child_of_flagged_composites() {
        let mut core = CompositeCore::new(
            "Selector",
            vec![guarded(AbortType::LOWER_PRIORITY), Node::new(Busy)],
            AbortType::NONE,
        );
        let mut ctx = Flags::default();
        core.on_start();
        core.current = 1;
        core.children[1].tick(&mut ctx);

        core.update_lower_priority_abort_conditional(&mut ctx, Status::Failure);
        assert_eq!(core.current(), 1);

        ctx.open = true;
        core.update_lower_priority_abort_conditional(&mut ctx, Status::Failure);
        assert_eq!(core.current(), 0);
        assert_eq!(core.children[1].status(), Status::Invalid);
        assert_eq!(ctx.polls, 2);
    }
}
