//! Defines the Bevy [Plugin] for a [FlowFieldGrid]
//!
//! Any entity with a [FlowFieldGrid] component is driven by the events of
//! [grid_layer] and has its agent moved each frame by [agent_layer].
//!

use crate::prelude::*;
use bevy::prelude::*;

pub mod agent_layer;
pub mod grid_layer;

/// Mutations of the grid are applied before agents are advanced so that an agent never walks a stale path
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum OrderingSet {
	/// Apply terrain and endpoint changes
	Mutate,
	/// Move agents along their paths
	Advance,
}

pub struct FlowFieldGridPlugin;

impl Plugin for FlowFieldGridPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.register_type::<Ordinal>()
			.register_type::<GridDimensions>()
			.register_type::<FieldCell>()
			.register_type::<Path>()
			.register_type::<AgentState>()
			.register_type::<PathFollower>()
			.add_event::<grid_layer::EventToggleObstacle>()
			.add_event::<grid_layer::EventSetGoal>()
			.add_event::<grid_layer::EventSetStart>()
			.add_event::<grid_layer::EventResetAgent>()
			.add_event::<grid_layer::EventPathUpdated>()
			.configure_sets(Update, (OrderingSet::Mutate, OrderingSet::Advance).chain())
			.add_systems(
				Update,
				(
					(
						grid_layer::process_obstacle_toggles,
						grid_layer::process_goal_updates,
						grid_layer::process_start_updates,
						grid_layer::process_agent_resets,
					)
						.chain()
						.in_set(OrderingSet::Mutate),
					agent_layer::advance_agents.in_set(OrderingSet::Advance),
				),
			);
	}
}
