//! Behavior tree engine with conditional aborts.
//!
//! Trees are built from [`Node`]s wrapping [`Behavior`] implementations and
//! driven by a [`BehaviorTree`], which owns the root together with a
//! caller-supplied context value that is handed to every node on every tick.
//!
//! - **Multi-tick nodes**: a node may report `Running` and continue on the
//!   next tick
//! - **Conditional aborts**: composites re-check conditional children and
//!   preempt the running branch when one flips
//! - **Rate limiting**: the driver ticks the root on a fixed update period
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes, [`Conditional`] marks the
//!   side-effect free ones
//! - [`Status`]: Success, Failure, Running, or Invalid (not yet ticked)
//! - Composite nodes: [`Sequence`], [`Selector`], [`RandomSequence`],
//!   [`RandomSelector`], [`Parallel`], [`ParallelSelector`]
//! - Decorator nodes: [`Inverter`], [`AlwaysFail`], [`AlwaysSucceed`],
//!   [`Repeater`], [`UntilFail`], [`UntilSuccess`], [`ConditionalDecorator`]
//! - Leaves: [`Action`], [`Condition`], [`Log`], [`Wait`],
//!   [`RandomProbability`], [`SubTree`]
//! - Assembly: [`TreeBuilder`] and the shorthands in [`builder`]

pub mod abort;
pub mod action;
pub mod behavior;
pub mod builder;
pub mod composite;
pub mod config;
pub mod decorator;
pub mod error;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use abort::AbortType;
pub use action::{Action, Condition, Log, RandomProbability, SubTree, Wait};
pub use behavior::{Behavior, Conditional, Node};
pub use builder::TreeBuilder;
pub use composite::{
    CompositeCore, Parallel, ParallelSelector, RandomSelector, RandomSequence, Selector, Sequence,
};
pub use config::TreeConfig;
pub use decorator::{
    AlwaysFail, AlwaysSucceed, ConditionalDecorator, Inverter, Repeater, UntilFail, UntilSuccess,
};
pub use error::BuildError;
pub use status::Status;
pub use tree::BehaviorTree;
