//! The [FlowFieldGrid] owns the terrain of a world along with every field
//! derived from it, the optional start and goal cells, the [Path] between
//! them and a [PathFollower] travelling along that path.
//!
//! Every successful mutation (setting an endpoint or toggling an obstacle)
//! recalculates synchronously before returning:
//!
//! 1. When a goal is set the [WaveField], [IntegrationField] and [FlowField] are rebuilt in full, otherwise they are cleared
//! 2. When both the start and goal are set the [Path] is extracted from the [FlowField], otherwise it is emptied
//! 3. The [PathFollower] is reset onto the new [Path], becoming inactive if it is empty
//!
//! A rejected mutation returns a [GridError] and leaves all state untouched.
//!
//! Callers toggling many obstacles at once pay for a full recalculation on
//! each toggle. Building a [CostField] up front and using
//! [FlowFieldGrid::from_cost_field] avoids this.
//!

use bevy::prelude::*;

use crate::prelude::*;

/// Default speed of a [PathFollower] in cells per second
const DEFAULT_AGENT_CELLS_PER_SECOND: f32 = 2.0;

/// Terrain, fields, endpoints, path and agent of a single grid
#[derive(Component, Clone, Debug)]
pub struct FlowFieldGrid {
	/// Size of the grid, fixed at creation
	dimensions: GridDimensions,
	/// Terrain
	cost_field: CostField,
	/// Hop counts to the goal
	wave_field: WaveField,
	/// Hop counts refined by distance to the goal
	integration_field: IntegrationField,
	/// Direction of travel of each cell
	flow_field: FlowField,
	/// Cell the [Path] begins from
	start: Option<FieldCell>,
	/// Cell every direction leads to
	goal: Option<FieldCell>,
	/// Route from `start` to `goal`
	path: Path,
	/// Follows `path`
	agent: PathFollower,
}

impl FlowFieldGrid {
	/// Create a fully passable grid of `dimensions` with no start or goal
	pub fn new(dimensions: GridDimensions) -> Self {
		let cost_field = CostField::from_dimensions(&dimensions);
		FlowFieldGrid::build(dimensions, cost_field)
	}
	/// Create a grid over existing terrain with each cell spanning `tile_size` world units
	pub fn from_cost_field(cost_field: CostField, tile_size: f32) -> Self {
		let dimensions =
			GridDimensions::new(cost_field.get_width(), cost_field.get_height(), tile_size);
		FlowFieldGrid::build(dimensions, cost_field)
	}
	/// Assemble a grid with empty fields over `cost_field`
	fn build(dimensions: GridDimensions, cost_field: CostField) -> Self {
		let (width, height) = (dimensions.get_width(), dimensions.get_height());
		FlowFieldGrid {
			dimensions,
			cost_field,
			wave_field: WaveField::new(width, height),
			integration_field: IntegrationField::new(width, height),
			flow_field: FlowField::new(width, height),
			start: None,
			goal: None,
			path: Path::default(),
			agent: PathFollower::new(dimensions.get_tile_size() * DEFAULT_AGENT_CELLS_PER_SECOND),
		}
	}
	/// Replace the speed of the [PathFollower]. Panics if the speed is negative or not finite
	pub fn with_agent_speed(mut self, speed: f32) -> Self {
		self.agent.set_speed(speed);
		self
	}
	pub fn get_dimensions(&self) -> &GridDimensions {
		&self.dimensions
	}
	pub fn get_cost_field(&self) -> &CostField {
		&self.cost_field
	}
	pub fn get_wave_field(&self) -> &WaveField {
		&self.wave_field
	}
	pub fn get_integration_field(&self) -> &IntegrationField {
		&self.integration_field
	}
	pub fn get_flow_field(&self) -> &FlowField {
		&self.flow_field
	}
	pub fn get_goal(&self) -> Option<FieldCell> {
		self.goal
	}
	pub fn get_start(&self) -> Option<FieldCell> {
		self.start
	}
	/// The route from the start to the goal, empty if either is unset or no route exists
	pub fn get_path(&self) -> &Path {
		&self.path
	}
	pub fn get_agent(&self) -> &PathFollower {
		&self.agent
	}
	/// Largest wave distance of the current fields, useful for scaling a heatmap
	pub fn get_max_wave_distance(&self) -> i32 {
		self.wave_field.get_max_distance()
	}
	/// Check that `field_cell` can be used as an endpoint
	fn validate_endpoint(&self, field_cell: FieldCell) -> Result<(), GridError> {
		if !self.dimensions.is_in_bounds(field_cell) {
			return Err(GridError::OutOfBounds(field_cell));
		}
		if !self.cost_field.is_passable(field_cell) {
			return Err(GridError::Blocked(field_cell));
		}
		Ok(())
	}
	/// Set the cell actors path towards. Rejected if it is out of bounds, impassable or the current start
	pub fn set_goal(&mut self, field_cell: FieldCell) -> Result<(), GridError> {
		self.validate_endpoint(field_cell)?;
		if self.start == Some(field_cell) {
			return Err(GridError::ConflictsWithStart(field_cell));
		}
		self.goal = Some(field_cell);
		self.recompute();
		Ok(())
	}
	/// Set the cell the [Path] begins from. Rejected if it is out of bounds, impassable or the current goal
	pub fn set_start(&mut self, field_cell: FieldCell) -> Result<(), GridError> {
		self.validate_endpoint(field_cell)?;
		if self.goal == Some(field_cell) {
			return Err(GridError::ConflictsWithGoal(field_cell));
		}
		self.start = Some(field_cell);
		self.recompute();
		Ok(())
	}
	/// Set the goal to the cell containing a world `position`
	pub fn set_goal_from_xy(&mut self, position: Vec2) -> Result<(), GridError> {
		let field_cell = self
			.dimensions
			.get_field_cell_from_xy(position)
			.ok_or(GridError::PositionOutOfBounds(position))?;
		self.set_goal(field_cell)
	}
	/// Set the start to the cell containing a world `position`
	pub fn set_start_from_xy(&mut self, position: Vec2) -> Result<(), GridError> {
		let field_cell = self
			.dimensions
			.get_field_cell_from_xy(position)
			.ok_or(GridError::PositionOutOfBounds(position))?;
		self.set_start(field_cell)
	}
	/// Unset the goal, clearing every field and the [Path]
	pub fn clear_goal(&mut self) {
		self.goal = None;
		self.recompute();
	}
	/// Unset the start, clearing the [Path]
	pub fn clear_start(&mut self) {
		self.start = None;
		self.recompute();
	}
	/// Flip a cell between passable and impassable. The start and goal cells cannot be toggled
	pub fn toggle_obstacle(&mut self, field_cell: FieldCell) -> Result<(), GridError> {
		if !self.dimensions.is_in_bounds(field_cell) {
			return Err(GridError::OutOfBounds(field_cell));
		}
		if self.start == Some(field_cell) {
			return Err(GridError::ConflictsWithStart(field_cell));
		}
		if self.goal == Some(field_cell) {
			return Err(GridError::ConflictsWithGoal(field_cell));
		}
		self.cost_field.toggle(field_cell);
		self.recompute();
		Ok(())
	}
	/// Toggle the obstacle state of the cell containing a world `position`
	pub fn toggle_obstacle_at_xy(&mut self, position: Vec2) -> Result<(), GridError> {
		let field_cell = self
			.dimensions
			.get_field_cell_from_xy(position)
			.ok_or(GridError::PositionOutOfBounds(position))?;
		self.toggle_obstacle(field_cell)
	}
	/// Whether a cell is impassable, [None] if out of bounds
	pub fn is_obstacle(&self, field_cell: FieldCell) -> Option<bool> {
		self.dimensions
			.is_in_bounds(field_cell)
			.then(|| !self.cost_field.is_passable(field_cell))
	}
	/// Direction an actor standing in `field_cell` should step, [None] if out of bounds
	pub fn get_flow_direction(&self, field_cell: FieldCell) -> Option<Ordinal> {
		self.dimensions
			.is_in_bounds(field_cell)
			.then(|| self.flow_field.get_field_cell_value(field_cell))
	}
	/// Hop count from `field_cell` to the goal ([UNVISITED] if unreachable), [None] if out of bounds
	pub fn get_wave_distance(&self, field_cell: FieldCell) -> Option<i32> {
		self.dimensions
			.is_in_bounds(field_cell)
			.then(|| self.wave_field.get_field_cell_value(field_cell))
	}
	/// Integration cost of `field_cell` ([UNVISITED_INTEGRATION] if unreachable), [None] if out of bounds
	pub fn get_integration_cost(&self, field_cell: FieldCell) -> Option<f32> {
		self.dimensions
			.is_in_bounds(field_cell)
			.then(|| self.integration_field.get_field_cell_value(field_cell))
	}
	/// Place the agent back at the start of the current [Path]
	pub fn reset_agent(&mut self) {
		self.agent.reset(&self.path, &self.dimensions);
	}
	/// Move the agent along the [Path] by `delta_time` seconds, returning its position and whether it is still travelling
	pub fn advance_agent(&mut self, delta_time: f32) -> (Vec2, bool) {
		self.agent.advance(delta_time)
	}
	/// Rebuild the fields and the [Path] from the current terrain and endpoints
	fn recompute(&mut self) {
		match self.goal {
			Some(goal) => {
				self.wave_field.calculate_field(goal, &self.cost_field);
				self.integration_field.calculate_field(
					goal,
					self.dimensions.get_tile_size(),
					&self.wave_field,
					&self.cost_field,
				);
				self.flow_field
					.calculate(goal, &self.integration_field, &self.cost_field);
			}
			None => {
				self.wave_field.clear();
				self.integration_field.clear();
				self.flow_field.clear();
			}
		}
		self.path = match (self.start, self.goal) {
			(Some(start), Some(goal)) => {
				Path::from_flow_field(start, goal, &self.flow_field, &self.cost_field)
			}
			_ => Path::default(),
		};
		self.reset_agent();
		debug!(
			"Recomputed grid, goal {:?}, {} reachable cells, max wave distance {}, path length {}",
			self.goal,
			self.wave_field.count_visited(),
			self.wave_field.get_max_distance(),
			self.path.len()
		);
	}
}
