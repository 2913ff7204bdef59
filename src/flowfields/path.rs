//! A [Path] is an explicit list of [FieldCell] found by following the
//! directions of a [FlowField] from a start cell until the goal is reached.
//!
//! Following the field is greedy, there is no search involved. The walk is
//! abandoned and an empty [Path] returned if:
//!
//! * the start or goal lie outside of the grid
//! * a cell without a direction is met before the goal (dead-end)
//! * a step would leave the grid or land on an impassable cell
//! * more steps are taken than there are cells in the grid (the directions form a loop)
//!
//! A partially walked route is never returned.
//!

use bevy::prelude::*;

use crate::prelude::*;

/// Ordered cells from a start to a goal inclusive, or empty when no route exists
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Reflect)]
pub struct Path(Vec<FieldCell>);

impl Path {
	/// Create a new instance of [Path]
	pub fn new(cells: Vec<FieldCell>) -> Self {
		Path(cells)
	}
	/// Get a reference to the cells of the path
	pub fn get(&self) -> &Vec<FieldCell> {
		&self.0
	}
	/// Whether no route exists
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
	/// Number of cells in the path including the start and goal
	pub fn len(&self) -> usize {
		self.0.len()
	}
	/// Remove all cells from the path
	pub fn clear(&mut self) {
		self.0.clear();
	}
	/// First cell of the path
	pub fn first(&self) -> Option<&FieldCell> {
		self.0.first()
	}
	/// Last cell of the path
	pub fn last(&self) -> Option<&FieldCell> {
		self.0.last()
	}
	/// Walk the `flow_field` from `start` until `goal` is reached. See the module docs for when an empty [Path] is produced
	pub fn from_flow_field(
		start: FieldCell,
		goal: FieldCell,
		flow_field: &FlowField,
		cost_field: &CostField,
	) -> Self {
		if !cost_field.is_in_bounds(start)
			|| !cost_field.is_in_bounds(goal)
			|| !flow_field.is_in_bounds(start)
			|| !flow_field.is_in_bounds(goal)
		{
			trace!("Path endpoints {:?} -> {:?} are off the grid", start, goal);
			return Path::default();
		}
		let step_limit = cost_field.get_width() * cost_field.get_height();
		let mut cells = vec![start];
		let mut current = start;
		let mut steps = 0;
		while current != goal {
			if steps >= step_limit {
				trace!("Path from {:?} exceeded {} steps", start, step_limit);
				return Path::default();
			}
			steps += 1;
			let direction = flow_field.get_field_cell_value(current);
			if direction == Ordinal::Zero {
				trace!("Path from {:?} dead-ends at {:?}", start, current);
				return Path::default();
			}
			let (dx, dy) = direction.offset();
			let column = current.get_column() as i64 + dx as i64;
			let row = current.get_row() as i64 + dy as i64;
			if column < 0 || row < 0 {
				return Path::default();
			}
			let next = FieldCell::new(column as usize, row as usize);
			if !cost_field.is_in_bounds(next) || !cost_field.is_passable(next) {
				trace!("Path from {:?} stepped onto {:?}", start, next);
				return Path::default();
			}
			cells.push(next);
			current = next;
		}
		Path(cells)
	}
	/// Whether every consecutive pair of cells is a single step between passable cells that doesn't cut the corner of an impassable cell. An empty path is trivially valid
	pub fn is_valid_route(&self, cost_field: &CostField) -> bool {
		if let Some(first) = self.0.first() {
			if !cost_field.is_in_bounds(*first) || !cost_field.is_passable(*first) {
				return false;
			}
		}
		self.0.windows(2).all(|pair| {
			match Ordinal::cell_to_cell_direction(pair[1].get_column_row(), pair[0].get_column_row()) {
				Some(ord) => cost_field.get_traversable_neighbour(pair[0], ord) == Some(pair[1]),
				None => false,
			}
		})
	}
}
