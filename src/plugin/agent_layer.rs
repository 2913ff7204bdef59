//! Moves the agent of each [FlowFieldGrid] along its path every frame
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Advance every active agent by the frame time
#[cfg(not(tarpaulin_include))]
pub fn advance_agents(mut grid_q: Query<(Entity, &mut FlowFieldGrid)>, time: Res<Time>) {
	let delta = time.delta_secs();
	for (entity, mut grid) in grid_q.iter_mut() {
		if !grid.get_agent().is_active() {
			continue;
		}
		let (position, active) = grid.advance_agent(delta);
		if !active {
			debug!("Agent of grid {:?} arrived at {}", entity, position);
		}
	}
}
