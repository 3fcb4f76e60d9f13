//! The guard agent and its behavior tree.

use behavior_tree::error::Result;
use behavior_tree::{AbortType, BehaviorTree, Status, TreeBuilder, TreeConfig};

const WAYPOINTS: [i32; 2] = [0, 6];

/// Everything the guard's tree reads and writes.
#[derive(Debug, Default)]
pub struct World {
    pub guard: i32,
    pub intruder: Option<i32>,
    pub captures: u32,
    pub patrol_legs: u32,
    next_waypoint: usize,
}

impl World {
    pub fn sees_intruder(&self) -> bool {
        self.intruder.is_some()
    }

    /// Walks one step toward the intruder, catching it on arrival.
    pub fn chase(&mut self) -> Status {
        let Some(target) = self.intruder else {
            return Status::Failure;
        };

        if self.guard == target {
            self.intruder = None;
            self.captures += 1;
            tracing::info!(position = self.guard, "intruder caught");
            return Status::Success;
        }

        self.guard += (target - self.guard).signum();
        Status::Running
    }

    /// Walks one step toward the current waypoint.
    pub fn patrol(&mut self) -> Status {
        let target = WAYPOINTS[self.next_waypoint];
        if self.guard == target {
            self.next_waypoint = (self.next_waypoint + 1) % WAYPOINTS.len();
            self.patrol_legs += 1;
            tracing::debug!(waypoint = target, "waypoint reached");
            return Status::Success;
        }

        self.guard += (target - self.guard).signum();
        Status::Running
    }
}

/// Builds the guard tree: chase when an intruder is visible, otherwise patrol.
///
/// The chase branch aborts lower priority work, so a patrol leg in progress
/// is dropped as soon as the intruder shows up.
pub fn guard_tree(world: World, config: TreeConfig) -> Result<BehaviorTree<World>> {
    TreeBuilder::begin(world)
        .selector(AbortType::NONE)
        .sequence(AbortType::LOWER_PRIORITY)
        .condition(World::sees_intruder)
        .log("intruder spotted")
        .action(World::chase)
        .end_composite()
        .sequence(AbortType::NONE)
        .action(World::patrol)
        .end_composite()
        .end_composite()
        .build_with_config(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> BehaviorTree<World> {
        guard_tree(World::default(), TreeConfig::every_call()).unwrap()
    }

    #[test]
    fn patrols_between_waypoints() {
        let mut tree = tree();
        for _ in 0..20 {
            tree.tick(0.0);
        }

        assert!(tree.context().patrol_legs >= 2);
        assert_eq!(tree.context().captures, 0);
    }

    #[test]
    fn intruder_interrupts_patrol() {
        let mut tree = tree();
        // Leave the guard mid-way through a patrol leg.
        for _ in 0..5 {
            tree.tick(0.0);
        }
        assert!(tree.context().guard > 0);

        tree.context_mut().intruder = Some(-2);
        for _ in 0..30 {
            tree.tick(0.0);
            if tree.context().captures > 0 {
                break;
            }
        }

        let world = tree.context();
        assert_eq!(world.captures, 1);
        assert_eq!(world.guard, -2);
        assert_eq!(world.intruder, None);
    }
}
