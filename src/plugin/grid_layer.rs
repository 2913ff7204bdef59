//! Events for editing the terrain and endpoints of a [FlowFieldGrid].
//!
//! Each event is applied to every [FlowFieldGrid] in the world in the order
//! the events were written. Within a frame obstacle toggles are applied
//! first, then goals, then starts, then agent resets. A rejected event is
//! logged and otherwise ignored.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Flip a cell between passable and impassable
#[derive(Event, Clone, Copy, Debug)]
pub struct EventToggleObstacle(pub FieldCell);

/// Set the goal cell
#[derive(Event, Clone, Copy, Debug)]
pub struct EventSetGoal(pub FieldCell);

/// Set the start cell
#[derive(Event, Clone, Copy, Debug)]
pub struct EventSetStart(pub FieldCell);

/// Place the agent back at the beginning of its path
#[derive(Event, Clone, Copy, Debug, Default)]
pub struct EventResetAgent;

/// Written after the fields and path of a grid have been recalculated
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventPathUpdated {
	/// Entity of the recalculated [FlowFieldGrid]
	entity: Entity,
	/// Number of cells in the new [Path], `0` when there is no route
	path_length: usize,
}

impl EventPathUpdated {
	/// Create a new instance of [EventPathUpdated]
	pub fn new(entity: Entity, path_length: usize) -> Self {
		EventPathUpdated {
			entity,
			path_length,
		}
	}
	pub fn get_entity(&self) -> Entity {
		self.entity
	}
	pub fn get_path_length(&self) -> usize {
		self.path_length
	}
}

/// Announce the outcome of a mutation of the grid of `entity`
fn report(
	entity: Entity,
	grid: &FlowFieldGrid,
	result: Result<(), GridError>,
	event_path_updated: &mut EventWriter<EventPathUpdated>,
) {
	match result {
		Ok(()) => {
			event_path_updated.write(EventPathUpdated::new(entity, grid.get_path().len()));
		}
		Err(e) => warn!("Grid {:?} rejected update, {}", entity, e),
	}
}

/// Read [EventToggleObstacle] and flip the terrain of each grid
#[cfg(not(tarpaulin_include))]
pub fn process_obstacle_toggles(
	mut events: EventReader<EventToggleObstacle>,
	mut grid_q: Query<(Entity, &mut FlowFieldGrid)>,
	mut event_path_updated: EventWriter<EventPathUpdated>,
) {
	for event in events.read() {
		for (entity, mut grid) in grid_q.iter_mut() {
			let result = grid.toggle_obstacle(event.0);
			report(entity, &grid, result, &mut event_path_updated);
		}
	}
}

/// Read [EventSetGoal] and move the goal of each grid
#[cfg(not(tarpaulin_include))]
pub fn process_goal_updates(
	mut events: EventReader<EventSetGoal>,
	mut grid_q: Query<(Entity, &mut FlowFieldGrid)>,
	mut event_path_updated: EventWriter<EventPathUpdated>,
) {
	for event in events.read() {
		for (entity, mut grid) in grid_q.iter_mut() {
			let result = grid.set_goal(event.0);
			report(entity, &grid, result, &mut event_path_updated);
		}
	}
}

/// Read [EventSetStart] and move the start of each grid
#[cfg(not(tarpaulin_include))]
pub fn process_start_updates(
	mut events: EventReader<EventSetStart>,
	mut grid_q: Query<(Entity, &mut FlowFieldGrid)>,
	mut event_path_updated: EventWriter<EventPathUpdated>,
) {
	for event in events.read() {
		for (entity, mut grid) in grid_q.iter_mut() {
			let result = grid.set_start(event.0);
			report(entity, &grid, result, &mut event_path_updated);
		}
	}
}

/// Read [EventResetAgent] and place each agent at the start of its path
#[cfg(not(tarpaulin_include))]
pub fn process_agent_resets(
	mut events: EventReader<EventResetAgent>,
	mut grid_q: Query<&mut FlowFieldGrid>,
) {
	// several resets in one frame have the same effect as one
	if events.read().count() == 0 {
		return;
	}
	for mut grid in grid_q.iter_mut() {
		grid.reset_agent();
	}
}
