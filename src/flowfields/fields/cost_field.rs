//! The CostField contains a 2D array of 8-bit values describing the terrain of
//! the grid. A value of 1 is the default and means the field cell can be
//! walked over, a value of 255 is a special case that indicates that the field
//! cell is strictly forbidden from being used in a pathing calculation
//! (effectively saying there is a wall or cliff/impassable terrain there).
//!
//! An example cost field may look:
//!
//! ```text
//!  _______________________________
//! |     |     |     |     |     |
//! |  1  |  1  |  1  |  1  |  1  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  1  |  1  | 255 | 255 |  1  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  1  |  1  |  1  | 255 |  1  |
//! |_____|_____|_____|_____|_____|
//! ```
//!
//! Cells are toggled between the two states by the terrain editing operations
//! of [crate::prelude::FlowFieldGrid].
//!

use crate::flowfields::fields::impl_field;
use crate::prelude::*;

/// Terrain costs of the grid, `field[column][row]`
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CostField {
	/// Cost of each cell
	field: Vec<Vec<u8>>,
}

impl_field!(CostField, u8, "CostField");

impl CostField {
	/// Create a new [CostField] of `width` columns and `height` rows where every cell is passable
	pub fn new(width: usize, height: usize) -> Self {
		CostField {
			field: vec![vec![PASSABLE; height]; width],
		}
	}
	/// Create a [CostField] sized to `dimensions` where every cell is passable
	pub fn from_dimensions(dimensions: &GridDimensions) -> Self {
		CostField::new(dimensions.get_width(), dimensions.get_height())
	}
	/// Whether the cell can be walked over. Panics if out of bounds
	pub fn is_passable(&self, field_cell: FieldCell) -> bool {
		self.get_field_cell_value(field_cell) != BLOCKED
	}
	/// Flip a cell between [PASSABLE] and [BLOCKED], returning whether it is now passable
	pub fn toggle(&mut self, field_cell: FieldCell) -> bool {
		let now_passable = !self.is_passable(field_cell);
		let value = if now_passable { PASSABLE } else { BLOCKED };
		self.set_field_cell_value(value, field_cell);
		now_passable
	}
	/// Tests whether moving from `field_cell` in a diagonal direction would cut the corner of an impassable cell.
	///
	/// A diagonal move is only permitted when both orthogonal cells it passes
	/// between are passable, i.e from `o` the move to `~` is forbidden:
	///
	/// ```text
	///   X ~
	///   o _
	/// ```
	///
	/// Orthogonal moves never cut a corner. A diagonal leaving the edge of the field is always cut
	pub fn is_diagonal_cut(&self, field_cell: FieldCell, ordinal: Ordinal) -> bool {
		if !ordinal.is_diagonal() {
			return false;
		}
		let (dx, dy) = ordinal.offset();
		let column = field_cell.get_column() as i64 + dx as i64;
		let row = field_cell.get_row() as i64 + dy as i64;
		if column < 0 || row < 0 {
			return true;
		}
		// sharing the row of the move
		let horizontal = FieldCell::new(column as usize, field_cell.get_row());
		// sharing the column of the move
		let vertical = FieldCell::new(field_cell.get_column(), row as usize);
		!self.is_in_bounds(horizontal)
			|| !self.is_in_bounds(vertical)
			|| !self.is_passable(horizontal)
			|| !self.is_passable(vertical)
	}
	/// Find the neighbour of `field_cell` in the direction of `ordinal` provided that an actor is permitted to step to it: it lies on the grid, is passable and the step doesn't cut a corner
	pub fn get_traversable_neighbour(
		&self,
		field_cell: FieldCell,
		ordinal: Ordinal,
	) -> Option<FieldCell> {
		if ordinal == Ordinal::Zero {
			return None;
		}
		let (dx, dy) = ordinal.offset();
		let column = field_cell.get_column() as i64 + dx as i64;
		let row = field_cell.get_row() as i64 + dy as i64;
		if column < 0 || row < 0 {
			return None;
		}
		let neighbour = FieldCell::new(column as usize, row as usize);
		if !self.is_in_bounds(neighbour)
			|| !self.is_passable(neighbour)
			|| self.is_diagonal_cut(field_cell, ordinal)
		{
			return None;
		}
		Some(neighbour)
	}
	/// Number of impassable cells in the field
	pub fn count_blocked(&self) -> usize {
		self.field
			.iter()
			.map(|column| column.iter().filter(|v| **v == BLOCKED).count())
			.sum()
	}
	/// Only passability matters to the algorithm, any value that isn't
	/// [BLOCKED] is flattened to [PASSABLE]
	#[cfg(any(feature = "ron", feature = "csv", feature = "heightmap"))]
	fn normalise(&mut self) {
		for column in self.field.iter_mut() {
			for value in column.iter_mut() {
				if *value != BLOCKED {
					*value = PASSABLE;
				}
			}
		}
	}
	/// From a `ron` file generate the [CostField]
	#[cfg(feature = "ron")]
	pub fn from_ron(path: &str) -> Result<Self, TerrainLoadError> {
		let file = std::fs::File::open(path)?;
		let mut field: CostField =
			ron::de::from_reader(file).map_err(|e| TerrainLoadError::Ron(e.to_string()))?;
		let height = field.field.first().map_or(0, |c| c.len());
		if field.field.is_empty() || height == 0 || field.field.iter().any(|c| c.len() != height)
		{
			return Err(TerrainLoadError::Dimensions(format!(
				"{} columns of uneven or zero length",
				field.field.len()
			)));
		}
		field.normalise();
		Ok(field)
	}
	/// From a `csv` file generate the [CostField]. Each line of the file is a row of the grid and each value is the `u8` cost of a column in that row
	#[cfg(feature = "csv")]
	pub fn from_csv(path: &str) -> Result<Self, TerrainLoadError> {
		let data = std::fs::File::open(path)?;
		let mut rdr = csv::ReaderBuilder::new()
			.has_headers(false)
			.from_reader(data);
		let mut rows: Vec<Vec<u8>> = Vec::new();
		for record in rdr.records() {
			let record = record?;
			let mut row = Vec::with_capacity(record.len());
			for value in record.iter() {
				let value_u8: u8 = value
					.trim()
					.parse()
					.map_err(|_| TerrainLoadError::Parse(value.to_string()))?;
				row.push(value_u8);
			}
			rows.push(row);
		}
		let width = rows.first().map_or(0, |r| r.len());
		if width == 0 || rows.iter().any(|r| r.len() != width) {
			return Err(TerrainLoadError::Dimensions(format!(
				"{} rows of uneven or zero length",
				rows.len()
			)));
		}
		let mut cost_field = CostField::new(width, rows.len());
		for (row, values) in rows.iter().enumerate() {
			for (column, value) in values.iter().enumerate() {
				cost_field.set_field_cell_value(*value, FieldCell::new(column, row));
			}
		}
		cost_field.normalise();
		Ok(cost_field)
	}
	/// Create a [CostField] from an image where each pixel represents a
	/// [FieldCell]. Dark pixels (average channel value below `128`) are
	/// impassable, all others are passable
	#[cfg(feature = "heightmap")]
	pub fn from_heightmap(path: &str) -> Result<Self, TerrainLoadError> {
		use photon_rs::native::open_image;
		let img = open_image(path).map_err(|e| TerrainLoadError::Heightmap(format!("{:?}", e)))?;
		let img_width = img.get_width() as usize;
		let img_height = img.get_height() as usize;
		if img_width == 0 || img_height == 0 {
			return Err(TerrainLoadError::Dimensions(format!(
				"image is {}x{} pixels",
				img_width, img_height
			)));
		}
		let raw_pixels = img.get_raw_pixels();
		// raw pixels are arranged from the top left of the image in sets of
		// Red, Green, Blue, (Alpha)
		let chunk_size = if raw_pixels.len() == img_width * img_height * 4 {
			4
		} else {
			3
		};
		let mut cost_field = CostField::new(img_width, img_height);
		for (i, px) in raw_pixels.chunks(chunk_size).enumerate() {
			if i >= img_width * img_height || px.len() < 3 {
				break;
			}
			// careful of u8 overflow
			let colour_avg = (px[0] as f32 + px[1] as f32 + px[2] as f32) / 3.0;
			let value = if colour_avg < 128.0 { BLOCKED } else { PASSABLE };
			cost_field.set_field_cell_value(value, FieldCell::new(i % img_width, i / img_width));
		}
		cost_field.normalise();
		Ok(cost_field)
	}
}
