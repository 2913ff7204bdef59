//! The IntegrationField contains a 2D array of desirability values produced
//! by combining the [WaveField] with the straight line distance of each
//! [FieldCell] to the goal.
//!
//! The hop count alone is a poor gradient, every cell in a ring around the
//! goal shares the same value and so any of them is as good as the other. By
//! adding the euclidean distance to the goal the ring is sorted so that cells
//! nearer the goal in space are preferred:
//!
//! ```text
//! cost = wave_distance * tile_size + floor(euclidean_distance * tile_size)
//! ```
//!
//! `tile_size` converts both terms into world units so that they are of
//! comparable magnitude. With a `tile_size` of `60` a goal in the centre of a
//! `5x5` open grid gives:
//!
//! ```text
//!  _____________________________
//! |     |     |     |     |     |
//! | 289 | 254 | 240 | 254 | 289 |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! | 254 | 144 | 120 | 144 | 254 |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! | 240 | 120 |  0  | 120 | 240 |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! | 254 | 144 | 120 | 144 | 254 |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! | 289 | 254 | 240 | 254 | 289 |
//! |_____|_____|_____|_____|_____|
//! ```
//!
//! Unreachable and impassable cells are [UNVISITED_INTEGRATION].
//!

use crate::flowfields::fields::impl_field;
use crate::prelude::*;

/// Integration costs, `field[column][row]`
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationField {
	/// Cost of each cell
	field: Vec<Vec<f32>>,
}

impl_field!(IntegrationField, f32, "IntegrationField");

impl IntegrationField {
	/// Creates a new [IntegrationField] where every cell is [UNVISITED_INTEGRATION]
	pub fn new(width: usize, height: usize) -> Self {
		IntegrationField {
			field: vec![vec![UNVISITED_INTEGRATION; height]; width],
		}
	}
	/// Reset every cell to [UNVISITED_INTEGRATION]
	pub fn clear(&mut self) {
		for column in self.field.iter_mut() {
			column.fill(UNVISITED_INTEGRATION);
		}
	}
	/// Whether `field_cell` has an integration cost. Panics if out of bounds
	pub fn is_reachable(&self, field_cell: FieldCell) -> bool {
		self.get_field_cell_value(field_cell) >= 0.0
	}
	/// Score every cell the `wave_field` reached by its hop count and
	/// distance to the `goal`. If the `goal` is off the grid the field is left
	/// untouched
	pub fn calculate_field(
		&mut self,
		goal: FieldCell,
		tile_size: f32,
		wave_field: &WaveField,
		cost_field: &CostField,
	) {
		if !cost_field.is_in_bounds(goal) {
			return;
		}
		if self.get_width() != cost_field.get_width()
			|| self.get_height() != cost_field.get_height()
		{
			*self = IntegrationField::new(cost_field.get_width(), cost_field.get_height());
		}
		for column in 0..self.get_width() {
			for row in 0..self.get_height() {
				let field_cell = FieldCell::new(column, row);
				let wave = wave_field.get_field_cell_value(field_cell);
				let value = if wave != UNVISITED && cost_field.is_passable(field_cell) {
					let euclidean = field_cell.distance(&goal);
					wave as f32 * tile_size + (euclidean * tile_size).floor()
				} else {
					UNVISITED_INTEGRATION
				};
				self.set_field_cell_value(value, field_cell);
			}
		}
	}
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	/// Build the wave and integration fields of an open grid
	fn open_grid(size: usize, goal: FieldCell, tile_size: f32) -> IntegrationField {
		let cost_field = CostField::new(size, size);
		let mut wave_field = WaveField::new(size, size);
		wave_field.calculate_field(goal, &cost_field);
		let mut int_field = IntegrationField::new(size, size);
		int_field.calculate_field(goal, tile_size, &wave_field, &cost_field);
		int_field
	}
	#[test]
	fn basic_field() {
		let int_field = open_grid(5, FieldCell::new(2, 2), 60.0);
		let rows: [[f32; 5]; 5] = [
			[289.0, 254.0, 240.0, 254.0, 289.0],
			[254.0, 144.0, 120.0, 144.0, 254.0],
			[240.0, 120.0,   0.0, 120.0, 240.0],
			[254.0, 144.0, 120.0, 144.0, 254.0],
			[289.0, 254.0, 240.0, 254.0, 289.0],
		];
		for (row, values) in rows.iter().enumerate() {
			for (column, value) in values.iter().enumerate() {
				assert_eq!(*value, int_field.get_field_cell_value(FieldCell::new(column, row)));
			}
		}
	}
	#[test]
	fn unit_tile_size() {
		let int_field = open_grid(5, FieldCell::new(2, 2), 1.0);
		// 2 hops + floor(2.83)
		assert_eq!(4.0, int_field.get_field_cell_value(FieldCell::new(0, 0)));
		// 2 hops + floor(2.0)
		assert_eq!(4.0, int_field.get_field_cell_value(FieldCell::new(2, 0)));
	}
	#[test]
	fn blocked_and_unreached_cells() {
		//  _____
		// |_|X|_|
		// |X|_|_|
		// |_|_|g|
		let mut cost_field = CostField::new(3, 3);
		cost_field.set_field_cell_value(BLOCKED, FieldCell::new(1, 0));
		cost_field.set_field_cell_value(BLOCKED, FieldCell::new(0, 1));
		let goal = FieldCell::new(2, 2);
		let mut wave_field = WaveField::new(3, 3);
		wave_field.calculate_field(goal, &cost_field);
		let mut int_field = IntegrationField::new(3, 3);
		int_field.calculate_field(goal, 60.0, &wave_field, &cost_field);
		assert!(!int_field.is_reachable(FieldCell::new(0, 0)));
		assert!(!int_field.is_reachable(FieldCell::new(1, 0)));
		assert!(!int_field.is_reachable(FieldCell::new(0, 1)));
		assert_eq!(0.0, int_field.get_field_cell_value(goal));
		// 1 hop + floor(1.41 * 60)
		assert_eq!(144.0, int_field.get_field_cell_value(FieldCell::new(1, 1)));
	}
	#[test]
	fn goal_off_grid_leaves_field_untouched() {
		let cost_field = CostField::new(3, 3);
		let wave_field = WaveField::new(3, 3);
		let mut int_field = IntegrationField::new(3, 3);
		int_field.set_field_cell_value(7.0, FieldCell::new(0, 0));
		int_field.calculate_field(FieldCell::new(9, 9), 1.0, &wave_field, &cost_field);
		assert_eq!(7.0, int_field.get_field_cell_value(FieldCell::new(0, 0)));
	}
}
