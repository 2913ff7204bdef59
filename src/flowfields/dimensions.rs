//! The fixed size of a grid and the scale of each of its cells in world space
//!

use crate::prelude::*;
use bevy::prelude::*;

/// The dimensions of the grid the fields are calculated over
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Component, Clone, Copy, Debug, PartialEq, Reflect)]
pub struct GridDimensions {
	/// Number of columns
	width: usize,
	/// Number of rows
	height: usize,
	/// World units spanned by a single cell along either axis.
	///
	/// This is also the scalar used by the [IntegrationField] to bring a
	/// count of wave steps and a straight line distance to the goal onto
	/// comparable magnitudes
	tile_size: f32,
}

impl GridDimensions {
	/// Create a new instance of [GridDimensions]. A grid is created once and never resized, it must contain at least one cell and the `tile_size` must be positive
	pub fn new(width: usize, height: usize, tile_size: f32) -> Self {
		if width == 0 || height == 0 {
			panic!(
				"Grid dimensions `({}, {})` cannot hold any cells, both must be greater than zero",
				width, height
			);
		}
		if tile_size <= 0.0 || !tile_size.is_finite() {
			panic!("Tile size must be a positive number, found {}", tile_size);
		}
		GridDimensions {
			width,
			height,
			tile_size,
		}
	}
	/// Get the number of columns
	pub fn get_width(&self) -> usize {
		self.width
	}
	/// Get the number of rows
	pub fn get_height(&self) -> usize {
		self.height
	}
	/// Get the world size of a cell
	pub fn get_tile_size(&self) -> f32 {
		self.tile_size
	}
	/// Total number of cells in the grid
	pub fn get_cell_count(&self) -> usize {
		self.width * self.height
	}
	/// Whether `field_cell` lies inside the grid
	pub fn is_in_bounds(&self, field_cell: FieldCell) -> bool {
		field_cell.get_column() < self.width && field_cell.get_row() < self.height
	}
	/// Step from `field_cell` in the direction of `ordinal`, [None] if the step leaves the grid
	pub fn get_cell_neighbour(&self, field_cell: FieldCell, ordinal: Ordinal) -> Option<FieldCell> {
		let (dx, dy) = ordinal.offset();
		let column = field_cell.get_column() as i64 + dx as i64;
		let row = field_cell.get_row() as i64 + dy as i64;
		if column < 0 || row < 0 || column >= self.width as i64 || row >= self.height as i64 {
			return None;
		}
		Some(FieldCell::new(column as usize, row as usize))
	}
	/// Based on a grid cells `(column, row)` position find all of its neighbours including diagonal directions, paired with the [Ordinal] leading to them
	pub fn get_all_cell_neighbours(&self, field_cell: FieldCell) -> Vec<(Ordinal, FieldCell)> {
		Ordinal::ALL
			.iter()
			.filter_map(|ord| {
				self.get_cell_neighbour(field_cell, *ord)
					.map(|neighbour| (*ord, neighbour))
			})
			.collect()
	}
	/// Find the [FieldCell] containing a world `position`. The world origin is the top-left corner of cell `(0, 0)` with `y` growing along the rows. Returns [None] when the position lies outside of the grid
	pub fn get_field_cell_from_xy(&self, position: Vec2) -> Option<FieldCell> {
		if !position.x.is_finite() || !position.y.is_finite() {
			return None;
		}
		let column = (position.x / self.tile_size).floor();
		let row = (position.y / self.tile_size).floor();
		if column < 0.0 || row < 0.0 || column >= self.width as f32 || row >= self.height as f32 {
			return None;
		}
		Some(FieldCell::new(column as usize, row as usize))
	}
	/// Get the world position of the centre of a [FieldCell]. Returns [None] if the cell is outside of the grid
	pub fn get_xy_from_field_cell(&self, field_cell: FieldCell) -> Option<Vec2> {
		if !self.is_in_bounds(field_cell) {
			return None;
		}
		Some(Vec2::new(
			(field_cell.get_column() as f32 + 0.5) * self.tile_size,
			(field_cell.get_row() as f32 + 0.5) * self.tile_size,
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn valid_dimensions() {
		let dims = GridDimensions::new(28, 27, 60.0);
		assert_eq!(28 * 27, dims.get_cell_count());
	}
	#[test]
	#[should_panic]
	fn zero_width() {
		GridDimensions::new(0, 3, 1.0);
	}
	#[test]
	#[should_panic]
	fn negative_tile_size() {
		GridDimensions::new(3, 3, -2.0);
	}
	#[test]
	fn corner_neighbours() {
		let dims = GridDimensions::new(10, 10, 1.0);
		let result = dims.get_all_cell_neighbours(FieldCell::new(0, 0));
		let actual = vec![
			(Ordinal::East, FieldCell::new(1, 0)),
			(Ordinal::South, FieldCell::new(0, 1)),
			(Ordinal::SouthEast, FieldCell::new(1, 1)),
		];
		assert_eq!(actual, result);
	}
	#[test]
	fn far_corner_neighbours() {
		let dims = GridDimensions::new(10, 10, 1.0);
		let result = dims.get_all_cell_neighbours(FieldCell::new(9, 9));
		let actual = vec![
			(Ordinal::North, FieldCell::new(9, 8)),
			(Ordinal::West, FieldCell::new(8, 9)),
			(Ordinal::NorthWest, FieldCell::new(8, 8)),
		];
		assert_eq!(actual, result);
	}
	#[test]
	fn centre_has_eight_neighbours() {
		let dims = GridDimensions::new(10, 10, 1.0);
		let result = dims.get_all_cell_neighbours(FieldCell::new(4, 4));
		assert_eq!(8, result.len());
	}
	#[test]
	fn world_to_field_cell() {
		let dims = GridDimensions::new(28, 27, 60.0);
		let result = dims.get_field_cell_from_xy(Vec2::new(125.0, 61.0));
		assert_eq!(Some(FieldCell::new(2, 1)), result);
	}
	#[test]
	fn world_outside_grid() {
		let dims = GridDimensions::new(28, 27, 60.0);
		assert_eq!(None, dims.get_field_cell_from_xy(Vec2::new(-1.0, 10.0)));
		assert_eq!(None, dims.get_field_cell_from_xy(Vec2::new(10.0, 1620.0)));
		assert_eq!(None, dims.get_field_cell_from_xy(Vec2::new(f32::NAN, 10.0)));
	}
	#[test]
	fn field_cell_centre() {
		let dims = GridDimensions::new(28, 27, 60.0);
		let result = dims.get_xy_from_field_cell(FieldCell::new(2, 1));
		assert_eq!(Some(Vec2::new(150.0, 90.0)), result);
		assert_eq!(None, dims.get_xy_from_field_cell(FieldCell::new(28, 0)));
	}
}
