//! The kinds of fields used by the algorithm
//!

pub mod cost_field;
pub mod flow_field;
pub mod integration_field;
pub mod wave_field;

use bevy::prelude::*;

/// Defines required access to field arrays.
///
/// Fields are stored column first, i.e `field[column][row]`. Accessing a
/// [FieldCell] outside of the field is a logic error and will panic, callers
/// are expected to validate coordinates before using them
pub trait Field<T> {
	/// Get a reference to the field array
	fn get(&self) -> &[Vec<T>];
	/// Retrieve a field cell value
	fn get_field_cell_value(&self, field_cell: FieldCell) -> T;
	/// Set a field cell to a value
	fn set_field_cell_value(&mut self, value: T, field_cell: FieldCell);
	/// Number of columns in the field
	fn get_width(&self) -> usize {
		self.get().len()
	}
	/// Number of rows in the field
	fn get_height(&self) -> usize {
		self.get().first().map_or(0, |column| column.len())
	}
	/// Whether `field_cell` lies inside the field
	fn is_in_bounds(&self, field_cell: FieldCell) -> bool {
		field_cell.get_column() < self.get_width() && field_cell.get_row() < self.get_height()
	}
}

/// Panics with a description of an out of bounds access to the field `name`
fn out_of_bounds(name: &str, action: &str, field_cell: FieldCell, width: usize, height: usize) -> ! {
	panic!(
		"Cannot {} a {} value, index out of bounds. Asked for column {}, row {}, field column length is {}, field row length is {}",
		action,
		name,
		field_cell.get_column(),
		field_cell.get_row(),
		width,
		height
	)
}

/// Implements [Field] for a newtype-like struct storing its cells in a
/// `field: Vec<Vec<T>>` member
macro_rules! impl_field {
	($field:ty, $value:ty, $name:literal) => {
		impl $crate::flowfields::fields::Field<$value> for $field {
			fn get(&self) -> &[Vec<$value>] {
				&self.field
			}
			fn get_field_cell_value(&self, field_cell: $crate::prelude::FieldCell) -> $value {
				if !self.is_in_bounds(field_cell) {
					$crate::flowfields::fields::out_of_bounds(
						$name,
						"get",
						field_cell,
						self.get_width(),
						self.get_height(),
					);
				}
				self.field[field_cell.get_column()][field_cell.get_row()]
			}
			fn set_field_cell_value(&mut self, value: $value, field_cell: $crate::prelude::FieldCell) {
				if !self.is_in_bounds(field_cell) {
					$crate::flowfields::fields::out_of_bounds(
						$name,
						"set",
						field_cell,
						self.get_width(),
						self.get_height(),
					);
				}
				self.field[field_cell.get_column()][field_cell.get_row()] = value;
			}
		}
	};
}
pub(crate) use impl_field;

/// ID of a cell within a field
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash, Reflect)]
pub struct FieldCell((usize, usize));

impl FieldCell {
	/// Create a new instance of [FieldCell]
	pub fn new(column: usize, row: usize) -> Self {
		FieldCell((column, row))
	}
	/// Get the `(column, row)` tuple
	pub fn get_column_row(&self) -> (usize, usize) {
		self.0
	}
	/// Get the column
	pub fn get_column(&self) -> usize {
		self.0 .0
	}
	/// Get the row
	pub fn get_row(&self) -> usize {
		self.0 .1
	}
	/// Squared straight line distance between two cells measured in cells
	pub fn squared_distance(&self, other: &FieldCell) -> usize {
		let dx = self.get_column().abs_diff(other.get_column());
		let dy = self.get_row().abs_diff(other.get_row());
		dx * dx + dy * dy
	}
	/// Straight line distance between two cells measured in cells
	pub fn distance(&self, other: &FieldCell) -> f32 {
		(self.squared_distance(other) as f32).sqrt()
	}
}

impl From<(usize, usize)> for FieldCell {
	fn from(column_row: (usize, usize)) -> Self {
		FieldCell(column_row)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn squared_distance_is_symmetric() {
		let a = FieldCell::new(1, 7);
		let b = FieldCell::new(4, 3);
		assert_eq!(25, a.squared_distance(&b));
		assert_eq!(25, b.squared_distance(&a));
	}
	#[test]
	fn distance_diagonal() {
		let a = FieldCell::new(0, 0);
		let b = FieldCell::new(1, 1);
		assert!((a.distance(&b) - std::f32::consts::SQRT_2).abs() < f32::EPSILON);
	}
	#[test]
	fn from_tuple() {
		let result: FieldCell = (3, 9).into();
		assert_eq!(FieldCell::new(3, 9), result);
		assert_eq!((3, 9), result.get_column_row());
	}
}
