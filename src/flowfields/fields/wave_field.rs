//! The WaveField contains a 2D array of hop counts from each [FieldCell] to the
//! goal, produced by a "bushfire" wave propagation over the [CostField].
//!
//! When a goal is set the field is reset to [UNVISITED] and the goal cell is
//! set to `0`. A breadth-first wavefront then expands from the goal:
//!
//! 1. Pop the oldest cell from the queue
//! 2. Inspect all 8 of its neighbours, skipping any that are off the grid, impassable, already visited or reached by cutting the corner of an impassable cell
//! 3. Each remaining neighbour is one hop further from the goal than the current cell, record it and push it onto the queue
//! 4. Repeat until the queue is empty
//!
//! As every step costs one hop regardless of direction the wave expands as a
//! square (the underlying `CostField` is fully passable here):
//!
//! ```text
//!  _____________________________
//! |     |     |     |     |     |
//! |  2  |  2  |  2  |  2  |  2  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  2  |  1  |  1  |  1  |  2  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  2  |  1  |  0  |  1  |  2  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  2  |  1  |  1  |  1  |  2  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  2  |  2  |  2  |  2  |  2  |
//! |_____|_____|_____|_____|_____|
//! ```
//!
//! Breadth-first order guarantees that the first visit of a cell assigns its
//! minimum hop count. Cells the wave cannot reach keep the [UNVISITED] value.
//!

use std::collections::VecDeque;

use crate::flowfields::fields::impl_field;
use crate::prelude::*;

/// Hop counts to the goal, `field[column][row]`
#[derive(Clone, Debug, PartialEq)]
pub struct WaveField {
	/// Distance of each cell
	field: Vec<Vec<i32>>,
	/// Largest distance assigned by the last calculation, used to scale heatmap style visualisations
	max_distance: i32,
}

impl_field!(WaveField, i32, "WaveField");

impl WaveField {
	/// Creates a new [WaveField] where every cell is [UNVISITED]
	pub fn new(width: usize, height: usize) -> Self {
		WaveField {
			field: vec![vec![UNVISITED; height]; width],
			max_distance: 0,
		}
	}
	/// Reset every cell to [UNVISITED]
	pub fn clear(&mut self) {
		for column in self.field.iter_mut() {
			column.fill(UNVISITED);
		}
		self.max_distance = 0;
	}
	/// Largest hop count found by the last calculation
	pub fn get_max_distance(&self) -> i32 {
		self.max_distance
	}
	/// Whether the wave reached `field_cell`. Panics if out of bounds
	pub fn is_visited(&self, field_cell: FieldCell) -> bool {
		self.get_field_cell_value(field_cell) != UNVISITED
	}
	/// Number of cells the wave reached, including the goal
	pub fn count_visited(&self) -> usize {
		self.field
			.iter()
			.map(|column| column.iter().filter(|v| **v != UNVISITED).count())
			.sum()
	}
	/// Propagate a wave outwards from `goal` across the passable cells of `cost_field`.
	///
	/// If the `goal` is off the grid or impassable the field is left fully
	/// [UNVISITED], which is a valid empty result rather than an error
	pub fn calculate_field(&mut self, goal: FieldCell, cost_field: &CostField) {
		if self.get_width() != cost_field.get_width()
			|| self.get_height() != cost_field.get_height()
		{
			*self = WaveField::new(cost_field.get_width(), cost_field.get_height());
		} else {
			self.clear();
		}
		if !cost_field.is_in_bounds(goal) || !cost_field.is_passable(goal) {
			return;
		}
		self.set_field_cell_value(0, goal);
		let mut queue = VecDeque::new();
		queue.push_back(goal);
		while let Some(current) = queue.pop_front() {
			let next_distance = self.get_field_cell_value(current) + 1;
			for ord in Ordinal::ALL.iter() {
				if let Some(neighbour) = cost_field.get_traversable_neighbour(current, *ord) {
					if !self.is_visited(neighbour) {
						self.set_field_cell_value(next_distance, neighbour);
						self.max_distance = self.max_distance.max(next_distance);
						queue.push_back(neighbour);
					}
				}
			}
		}
	}
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	/// Expected field laid out as rows of the grid, flipped into `field[column][row]`
	fn columns(rows: &[&[i32]]) -> Vec<Vec<i32>> {
		let mut field = vec![vec![0; rows.len()]; rows[0].len()];
		for (row, values) in rows.iter().enumerate() {
			for (column, value) in values.iter().enumerate() {
				field[column][row] = *value;
			}
		}
		field
	}
	#[test]
	fn basic_field() {
		let cost_field = CostField::new(5, 5);
		let mut wave_field = WaveField::new(5, 5);
		wave_field.calculate_field(FieldCell::new(2, 2), &cost_field);
		let actual = columns(&[
			&[2, 2, 2, 2, 2],
			&[2, 1, 1, 1, 2],
			&[2, 1, 0, 1, 2],
			&[2, 1, 1, 1, 2],
			&[2, 2, 2, 2, 2],
		]);
		assert_eq!(actual.as_slice(), wave_field.get());
		assert_eq!(2, wave_field.get_max_distance());
	}
	#[test]
	fn wall_with_gap() {
		// goal top left, row 2 blocked apart from the last column
		let mut cost_field = CostField::new(5, 5);
		for column in 0..4 {
			cost_field.set_field_cell_value(BLOCKED, FieldCell::new(column, 2));
		}
		let mut wave_field = WaveField::new(5, 5);
		wave_field.calculate_field(FieldCell::new(0, 0), &cost_field);
		let actual = columns(&[
			&[ 0,  1,  2,  3,  4],
			&[ 1,  1,  2,  3,  4],
			&[-1, -1, -1, -1,  5],
			&[10,  9,  8,  7,  6],
			&[10,  9,  8,  7,  7],
		]);
		assert_eq!(actual.as_slice(), wave_field.get());
		assert_eq!(10, wave_field.get_max_distance());
	}
	#[test]
	fn diagonal_squeeze_is_not_allowed() {
		//  _____
		// |_|X|_|
		// |X|g|_|
		// |_|_|_|
		// the top left corner can only be reached by squeezing between two walls
		let mut cost_field = CostField::new(3, 3);
		cost_field.set_field_cell_value(BLOCKED, FieldCell::new(1, 0));
		cost_field.set_field_cell_value(BLOCKED, FieldCell::new(0, 1));
		let mut wave_field = WaveField::new(3, 3);
		wave_field.calculate_field(FieldCell::new(1, 1), &cost_field);
		assert_eq!(UNVISITED, wave_field.get_field_cell_value(FieldCell::new(0, 0)));
		assert_eq!(1, wave_field.get_field_cell_value(FieldCell::new(2, 2)));
		assert_eq!(6, wave_field.count_visited());
	}
	#[test]
	fn blocked_goal_gives_empty_field() {
		let mut cost_field = CostField::new(4, 4);
		cost_field.set_field_cell_value(BLOCKED, FieldCell::new(3, 3));
		let mut wave_field = WaveField::new(4, 4);
		wave_field.calculate_field(FieldCell::new(0, 0), &cost_field);
		assert_eq!(16 - 1, wave_field.count_visited());
		wave_field.calculate_field(FieldCell::new(3, 3), &cost_field);
		assert_eq!(0, wave_field.count_visited());
		assert_eq!(0, wave_field.get_max_distance());
	}
	#[test]
	fn goal_off_grid_gives_empty_field() {
		let cost_field = CostField::new(4, 4);
		let mut wave_field = WaveField::new(4, 4);
		wave_field.calculate_field(FieldCell::new(4, 0), &cost_field);
		assert_eq!(0, wave_field.count_visited());
	}
	#[test]
	fn resizes_to_cost_field() {
		let cost_field = CostField::new(6, 2);
		let mut wave_field = WaveField::new(1, 1);
		wave_field.calculate_field(FieldCell::new(0, 0), &cost_field);
		assert_eq!(6, wave_field.get_width());
		assert_eq!(2, wave_field.get_height());
		assert_eq!(5, wave_field.get_max_distance());
	}
}
