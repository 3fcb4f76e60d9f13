use std::time::Duration;

use crate::error::{BuildError, Result};
use crate::{
    AbortType, Action, AlwaysFail, AlwaysSucceed, BehaviorTree, Condition, ConditionalDecorator,
    Inverter, Log, Node, Parallel, ParallelSelector, RandomProbability, RandomSelector,
    RandomSequence, Repeater, Selector, Sequence, Status, SubTree, TreeConfig, UntilFail,
    UntilSuccess, Wait,
};

type CompositeFactory<C> = Box<dyn FnOnce(Vec<Node<C>>) -> Node<C>>;
type DecoratorFactory<C> = Box<dyn FnOnce(Node<C>) -> Node<C>>;

/// A parent that is still collecting children.
enum OpenParent<C> {
    Composite {
        kind: &'static str,
        children: Vec<Node<C>>,
        make: CompositeFactory<C>,
    },
    Decorator {
        make: DecoratorFactory<C>,
    },
}

/// Fluent, stack-based tree builder.
///
/// Leaves attach to the parent on top of the stack. Decorators close as soon
/// as their single child is complete; composites stay open until
/// [`end_composite`](Self::end_composite). The first assembly mistake is
/// remembered and returned by [`build`](Self::build); calls after it are
/// ignored.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{AbortType, Status, TreeBuilder};
///
/// struct Guard {
///     sees_intruder: bool,
///     steps: u32,
/// }
///
/// let mut tree = TreeBuilder::begin(Guard { sees_intruder: false, steps: 0 })
///     .selector(AbortType::NONE)
///         .sequence(AbortType::LOWER_PRIORITY)
///             .condition(|g: &Guard| g.sees_intruder)
///             .log("intruder!")
///         .end_composite()
///         .action(|g: &mut Guard| {
///             g.steps += 1;
///             Status::Running
///         })
///     .end_composite()
///     .build()
///     .unwrap();
///
/// tree.tick_root();
/// tree.tick_root();
/// assert_eq!(tree.context().steps, 1);
/// ```
pub struct TreeBuilder<C> {
    context: C,
    stack: Vec<OpenParent<C>>,
    root: Option<Node<C>>,
    error: Option<BuildError>,
}

impl<C: 'static> TreeBuilder<C> {
    /// Starts an empty builder around `context`.
    pub fn begin(context: C) -> Self {
        Self {
            context,
            stack: Vec::new(),
            root: None,
            error: None,
        }
    }

    // ---------------------------------------------------------------------
    // Leaves
    // ---------------------------------------------------------------------

    /// Adds an action leaf.
    pub fn action<F>(self, action: F) -> Self
    where
        F: FnMut(&mut C) -> Status + Send + 'static,
    {
        self.leaf("action", Node::new(Action::new(action)))
    }

    /// Adds an action leaf whose `true` / `false` maps to `Success` / `Failure`.
    pub fn action_bool<F>(self, mut action: F) -> Self
    where
        F: FnMut(&mut C) -> bool + Send + 'static,
    {
        self.leaf(
            "action",
            Node::new(Action::new(move |ctx: &mut C| Status::from_bool(action(ctx)))),
        )
    }

    /// Adds a conditional leaf.
    pub fn condition<P>(self, predicate: P) -> Self
    where
        P: FnMut(&C) -> bool + Send + 'static,
    {
        self.leaf("condition", Node::conditional(Condition::new(predicate)))
    }

    /// Adds a leaf that logs `text` and succeeds.
    pub fn log(self, text: impl Into<String>) -> Self {
        self.leaf("log", Node::new(Log::new(text)))
    }

    /// Adds a leaf that runs for `duration` of wall-clock time.
    pub fn wait(self, duration: Duration) -> Self {
        self.leaf("wait", Node::new(Wait::new(duration)))
    }

    /// Adds a conditional leaf that succeeds with the given probability.
    pub fn random_probability(self, probability: f64) -> Self {
        self.leaf(
            "random_probability",
            Node::conditional(RandomProbability::new(probability)),
        )
    }

    /// Adds a leaf that runs a whole nested tree.
    pub fn sub_tree<T: Send + 'static>(self, tree: BehaviorTree<T>) -> Self {
        self.leaf("sub_tree", Node::new(SubTree::new(tree)))
    }

    // ---------------------------------------------------------------------
    // Decorators
    // ---------------------------------------------------------------------

    /// Inverts the next node.
    pub fn inverter(self) -> Self {
        self.decorator(|child| Node::new(Inverter::new(child)))
    }

    /// Makes the next node report `Failure` once it finishes.
    pub fn always_fail(self) -> Self {
        self.decorator(|child| Node::new(AlwaysFail::new(child)))
    }

    /// Makes the next node report `Success` once it finishes.
    pub fn always_succeed(self) -> Self {
        self.decorator(|child| Node::new(AlwaysSucceed::new(child)))
    }

    /// Repeats the next node `count` times.
    pub fn repeater(self, count: u32) -> Self {
        self.decorator(move |child| Node::new(Repeater::new(child, count)))
    }

    /// Runs the next node until it fails.
    pub fn until_fail(self) -> Self {
        self.decorator(|child| Node::new(UntilFail::new(child)))
    }

    /// Runs the next node until it succeeds.
    pub fn until_success(self) -> Self {
        self.decorator(|child| Node::new(UntilSuccess::new(child)))
    }

    /// Runs the next node only while `predicate` holds.
    pub fn conditional_decorator<P>(self, predicate: P, should_reevaluate: bool) -> Self
    where
        P: FnMut(&C) -> bool + Send + 'static,
    {
        self.decorator(move |child| {
            let decorator = ConditionalDecorator::new(Condition::new(predicate), child)
                .should_reevaluate(should_reevaluate);
            Node::conditional(decorator)
        })
    }

    // ---------------------------------------------------------------------
    // Composites
    // ---------------------------------------------------------------------

    /// Opens a sequence with the given abort flags.
    pub fn sequence(self, abort_type: AbortType) -> Self {
        self.composite("Sequence", move |children| {
            Node::new(Sequence::new(children).with_abort_type(abort_type))
        })
    }

    /// Opens a selector with the given abort flags.
    pub fn selector(self, abort_type: AbortType) -> Self {
        self.composite("Selector", move |children| {
            Node::new(Selector::new(children).with_abort_type(abort_type))
        })
    }

    /// Opens a sequence that shuffles its children on every activation.
    pub fn random_sequence(self) -> Self {
        self.composite("RandomSequence", |children| {
            Node::new(RandomSequence::new(children))
        })
    }

    /// Opens a selector that shuffles its children on every activation.
    pub fn random_selector(self) -> Self {
        self.composite("RandomSelector", |children| {
            Node::new(RandomSelector::new(children))
        })
    }

    /// Opens a parallel composite.
    pub fn parallel(self) -> Self {
        self.composite("Parallel", |children| Node::new(Parallel::new(children)))
    }

    /// Opens a parallel selector.
    pub fn parallel_selector(self) -> Self {
        self.composite("ParallelSelector", |children| {
            Node::new(ParallelSelector::new(children))
        })
    }

    /// Closes the composite on top of the stack.
    pub fn end_composite(mut self) -> Self {
        if self.error.is_some() {
            return self;
        }

        match self.stack.pop() {
            Some(OpenParent::Composite {
                kind,
                children,
                make,
            }) => {
                if children.is_empty() {
                    self.error = Some(BuildError::EmptyComposite { kind });
                    return self;
                }
                self.close(make(children));
            }
            Some(decorator @ OpenParent::Decorator { .. }) => {
                self.stack.push(decorator);
                self.error = Some(BuildError::NotAComposite { found: "a decorator" });
            }
            None => {
                self.error = Some(BuildError::NotAComposite { found: "empty" });
            }
        }
        self
    }

    // ---------------------------------------------------------------------
    // Build
    // ---------------------------------------------------------------------

    /// Builds the tree with the default [`TreeConfig`].
    pub fn build(self) -> Result<BehaviorTree<C>> {
        self.build_with_config(TreeConfig::default())
    }

    /// Builds the tree with the given driver configuration.
    pub fn build_with_config(self, config: TreeConfig) -> Result<BehaviorTree<C>> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if !self.stack.is_empty() {
            return Err(BuildError::UnclosedParents(self.stack.len()));
        }
        let root = self.root.ok_or(BuildError::EmptyTree)?;

        tracing::debug!(root = root.name(), "behavior tree built");
        Ok(BehaviorTree::with_config(self.context, root, config))
    }

    fn leaf(mut self, leaf: &'static str, node: Node<C>) -> Self {
        if self.error.is_some() {
            return self;
        }
        if self.stack.is_empty() {
            self.error = Some(BuildError::NoParent { leaf });
            return self;
        }
        self.close(node);
        self
    }

    fn decorator(mut self, make: impl FnOnce(Node<C>) -> Node<C> + 'static) -> Self {
        if self.error.is_none() {
            self.stack.push(OpenParent::Decorator {
                make: Box::new(make),
            });
        }
        self
    }

    fn composite(
        mut self,
        kind: &'static str,
        make: impl FnOnce(Vec<Node<C>>) -> Node<C> + 'static,
    ) -> Self {
        if self.error.is_none() {
            self.stack.push(OpenParent::Composite {
                kind,
                children: Vec::new(),
                make: Box::new(make),
            });
        }
        self
    }

    /// Hands a finished node to the parent on top of the stack.
    ///
    /// Decorators close as soon as they receive their child, which may cascade
    /// through several stacked decorators. With nothing left on the stack the
    /// node becomes the root.
    fn close(&mut self, mut node: Node<C>) {
        loop {
            match self.stack.last_mut() {
                Some(OpenParent::Composite { children, .. }) => {
                    children.push(node);
                    return;
                }
                Some(OpenParent::Decorator { .. }) => {
                    let Some(OpenParent::Decorator { make }) = self.stack.pop() else {
                        unreachable!("stack top was just matched as a decorator");
                    };
                    node = make(node);
                }
                None => {
                    self.root = Some(node);
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Agent {
        hungry: bool,
        meals: u32,
        naps: u32,
    }

    fn eat(agent: &mut Agent) -> Status {
        agent.meals += 1;
        agent.hungry = false;
        Status::Success
    }

    fn nap(agent: &mut Agent) -> Status {
        agent.naps += 1;
        Status::Success
    }

    #[test]
    fn builds_nested_tree() {
        let mut tree = TreeBuilder::begin(Agent {
            hungry: true,
            ..Agent::default()
        })
        .selector(AbortType::NONE)
        .sequence(AbortType::NONE)
        .condition(|a: &Agent| a.hungry)
        .action(eat)
        .end_composite()
        .action(nap)
        .end_composite()
        .build_with_config(TreeConfig::every_call())
        .expect("tree should build");

        tree.tick(0.0); // condition
        tree.tick(0.0); // eat
        assert_eq!(tree.status(), Status::Success);
        assert_eq!(tree.context().meals, 1);

        tree.tick(0.0); // not hungry: selector moves on
        tree.tick(0.0); // nap
        assert_eq!(tree.context().naps, 1);
    }

    #[test]
    fn decorators_close_after_one_child() {
        let mut tree = TreeBuilder::begin(Agent::default())
            .sequence(AbortType::NONE)
            .inverter()
            .always_fail()
            .action(nap)
            .action(nap)
            .end_composite()
            .build()
            .expect("tree should build");

        // inverter(always_fail(nap)) succeeds, then the second nap runs.
        assert_eq!(tree.tick_root(), Status::Running);
        assert_eq!(tree.tick_root(), Status::Success);
        assert_eq!(tree.context().naps, 2);
    }

    #[test]
    fn decorator_can_be_the_root() {
        let tree = TreeBuilder::begin(Agent::default())
            .repeater(2)
            .sequence(AbortType::NONE)
            .action(nap)
            .end_composite()
            .build()
            .expect("tree should build");

        assert_eq!(tree.root().name(), "Repeater");
    }

    #[test]
    fn conditional_decorator_is_tagged() {
        let tree = TreeBuilder::begin(Agent::default())
            .conditional_decorator(|a: &Agent| a.hungry, true)
            .action(eat)
            .build()
            .expect("tree should build");

        assert!(tree.root().is_conditional());
    }

    #[test]
    fn leaf_without_parent_is_rejected() {
        let result = TreeBuilder::begin(Agent::default()).action(nap).build();
        assert!(matches!(result, Err(BuildError::NoParent { leaf: "action" })));
    }

    #[test]
    fn end_composite_on_decorator_is_rejected() {
        let result = TreeBuilder::begin(Agent::default())
            .sequence(AbortType::NONE)
            .inverter()
            .end_composite()
            .build();
        assert!(matches!(result, Err(BuildError::NotAComposite { .. })));
    }

    #[test]
    fn empty_composite_is_rejected() {
        let result = TreeBuilder::begin(Agent::default())
            .parallel()
            .end_composite()
            .build();
        assert_eq!(
            result.err(),
            Some(BuildError::EmptyComposite { kind: "Parallel" })
        );
    }

    #[test]
    fn empty_and_unclosed_trees_are_rejected() {
        let empty = TreeBuilder::begin(Agent::default()).build();
        assert_eq!(empty.err(), Some(BuildError::EmptyTree));

        let unclosed = TreeBuilder::begin(Agent::default())
            .selector(AbortType::NONE)
            .action(nap)
            .build();
        assert_eq!(unclosed.err(), Some(BuildError::UnclosedParents(1)));
    }
}
