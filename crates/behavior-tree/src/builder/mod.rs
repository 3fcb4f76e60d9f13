//! Builder utilities for ergonomic behavior tree construction.
//!
//! Two styles are available:
//!
//! - Shorthand functions that replace verbose
//!   `Node::new(Sequence::new(vec![...]))` with `sequence(vec![...])`.
//! - [`TreeBuilder`], a fluent stack-based builder where decorators close
//!   themselves after their single child and composites are closed with
//!   [`end_composite`](TreeBuilder::end_composite).

mod fluent;

pub use fluent::TreeBuilder;

use crate::{
    AbortType, Action, AlwaysFail, AlwaysSucceed, Condition, ConditionalDecorator, Inverter, Node,
    Parallel, ParallelSelector, Repeater, Selector, Sequence, Status, UntilFail, UntilSuccess,
};

/// Creates a sequence node.
///
/// Shorthand for `Node::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Node::new(Sequence::new(children))
}

/// Creates a sequence node with the given abort flags.
#[inline]
pub fn sequence_with_abort<C: 'static>(abort_type: AbortType, children: Vec<Node<C>>) -> Node<C> {
    Node::new(Sequence::new(children).with_abort_type(abort_type))
}

/// Creates a selector node.
///
/// Shorthand for `Node::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Node::new(Selector::new(children))
}

/// Creates a selector node with the given abort flags.
#[inline]
pub fn selector_with_abort<C: 'static>(abort_type: AbortType, children: Vec<Node<C>>) -> Node<C> {
    Node::new(Selector::new(children).with_abort_type(abort_type))
}

/// Creates a parallel node.
///
/// Shorthand for `Node::new(Parallel::new(children))`.
#[inline]
pub fn parallel<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Node::new(Parallel::new(children))
}

/// Creates a parallel selector node.
///
/// Shorthand for `Node::new(ParallelSelector::new(children))`.
#[inline]
pub fn parallel_selector<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Node::new(ParallelSelector::new(children))
}

/// Creates an inverter node.
///
/// Shorthand for `Node::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Node<C>) -> Node<C> {
    Node::new(Inverter::new(child))
}

/// Creates an always-succeed node.
///
/// Shorthand for `Node::new(AlwaysSucceed::new(child))`.
#[inline]
pub fn always_succeed<C: 'static>(child: Node<C>) -> Node<C> {
    Node::new(AlwaysSucceed::new(child))
}

/// Creates an always-fail node.
///
/// Shorthand for `Node::new(AlwaysFail::new(child))`.
#[inline]
pub fn always_fail<C: 'static>(child: Node<C>) -> Node<C> {
    Node::new(AlwaysFail::new(child))
}

/// Creates a repeater that ticks `child` `count` times.
///
/// Shorthand for `Node::new(Repeater::new(child, count))`.
#[inline]
pub fn repeater<C: 'static>(count: u32, child: Node<C>) -> Node<C> {
    Node::new(Repeater::new(child, count))
}

/// Creates an until-fail node.
///
/// Shorthand for `Node::new(UntilFail::new(child))`.
#[inline]
pub fn until_fail<C: 'static>(child: Node<C>) -> Node<C> {
    Node::new(UntilFail::new(child))
}

/// Creates an until-success node.
///
/// Shorthand for `Node::new(UntilSuccess::new(child))`.
#[inline]
pub fn until_success<C: 'static>(child: Node<C>) -> Node<C> {
    Node::new(UntilSuccess::new(child))
}

/// Creates a conditional decorator that re-evaluates `predicate` on every
/// update. The resulting node carries the conditional tag.
#[inline]
pub fn guard<C, P>(predicate: P, child: Node<C>) -> Node<C>
where
    C: 'static,
    P: FnMut(&C) -> bool + Send + 'static,
{
    Node::conditional(ConditionalDecorator::new(Condition::new(predicate), child))
}

/// Creates an action leaf from a closure.
#[inline]
pub fn action<C, F>(action: F) -> Node<C>
where
    C: 'static,
    F: FnMut(&mut C) -> Status + Send + 'static,
{
    Node::new(Action::new(action))
}

/// Creates a conditional leaf from a predicate.
#[inline]
pub fn condition<C, P>(predicate: P) -> Node<C>
where
    C: 'static,
    P: FnMut(&C) -> bool + Send + 'static,
{
    Node::conditional(Condition::new(predicate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthands_compose() {
        let mut root = selector(vec![
            sequence(vec![
                condition(|hp: &i32| *hp < 5),
                action(|hp: &mut i32| {
                    *hp += 10;
                    Status::Success
                }),
            ]),
            always_succeed(action(|_: &mut i32| Status::Failure)),
        ]);
        let mut hp = 2;

        // Condition passes, then the heal runs.
        assert_eq!(root.tick(&mut hp), Status::Running);
        assert_eq!(root.tick(&mut hp), Status::Success);
        assert_eq!(hp, 12);
    }

    #[test]
    fn guard_is_conditional() {
        let node = guard(|open: &bool| *open, action(|_: &mut bool| Status::Success));
        assert!(node.is_conditional());
    }
}
