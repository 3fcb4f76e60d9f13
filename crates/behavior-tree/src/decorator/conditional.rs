use crate::{Behavior, Conditional, Node, Status};

/// Runs its child only while a conditional holds.
///
/// By default the conditional is re-evaluated on every update. With
/// `should_reevaluate` off, the first result of an activation is cached until
/// the next activation; abort scans still force a fresh evaluation through
/// [`Behavior::poll`].
///
/// The decorator is itself conditional, so it can head a branch that aborts
/// lower-priority work however it is wrapped into a [`Node`].
pub struct ConditionalDecorator<C> {
    conditional: Box<dyn Behavior<C>>,
    child: Node<C>,
    should_reevaluate: bool,
    conditional_status: Status,
}

impl<C: 'static> ConditionalDecorator<C> {
    /// Guards `child` with `conditional`, re-evaluated on every update.
    pub fn new<K>(conditional: K, child: Node<C>) -> Self
    where
        K: Conditional<C> + 'static,
    {
        Self {
            conditional: Box::new(conditional),
            child,
            should_reevaluate: true,
            conditional_status: Status::Invalid,
        }
    }
}

impl<C> ConditionalDecorator<C> {
    pub fn should_reevaluate(mut self, should_reevaluate: bool) -> Self {
        self.should_reevaluate = should_reevaluate;
        self
    }

    /// Evaluates the conditional, honoring the cache unless `force` is set.
    pub fn execute_conditional(&mut self, ctx: &mut C, force: bool) -> Status {
        if force || self.should_reevaluate || self.conditional_status == Status::Invalid {
            self.conditional_status = self.conditional.update(ctx);
        }
        self.conditional_status
    }
}

impl<C> Behavior<C> for ConditionalDecorator<C> {
    fn on_start(&mut self) {
        self.conditional_status = Status::Invalid;
    }

    fn update(&mut self, ctx: &mut C) -> Status {
        if self.execute_conditional(ctx, false) == Status::Success {
            self.child.tick(ctx)
        } else {
            Status::Failure
        }
    }

    fn invalidate(&mut self) {
        self.conditional_status = Status::Invalid;
        self.child.invalidate();
    }

    fn poll(&mut self, ctx: &mut C) -> Status {
        self.execute_conditional(ctx, true)
    }

    fn is_conditional(&self) -> bool {
        true
    }
}

impl<C> Conditional<C> for ConditionalDecorator<C> {}
