//! Error types for mutating a [crate::prelude::FlowFieldGrid] and for loading
//! terrain from disk.
//!
//! Nothing in the pathfinding calculation itself can fail, an unreachable goal
//! or a dead-end path is represented by an empty field or [crate::prelude::Path].
//! These errors describe requests which were rejected before any state was
//! changed.

use std::fmt;

use bevy::math::Vec2;

use crate::prelude::FieldCell;

/// Reasons a mutation of the grid was rejected. A rejected mutation leaves the grid untouched
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridError {
	/// The cell lies outside of the grid
	OutOfBounds(FieldCell),
	/// The world position doesn't correspond to any cell of the grid
	PositionOutOfBounds(Vec2),
	/// The cell is impassable and cannot be used as a start or goal
	Blocked(FieldCell),
	/// The cell is the current start
	ConflictsWithStart(FieldCell),
	/// The cell is the current goal
	ConflictsWithGoal(FieldCell),
}

impl fmt::Display for GridError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GridError::OutOfBounds(c) => write!(f, "{:?} lies outside of the grid", c.get_column_row()),
			GridError::PositionOutOfBounds(p) => {
				write!(f, "World position {} lies outside of the grid", p)
			}
			GridError::Blocked(c) => write!(f, "{:?} is impassable", c.get_column_row()),
			GridError::ConflictsWithStart(c) => {
				write!(f, "{:?} is the current start", c.get_column_row())
			}
			GridError::ConflictsWithGoal(c) => {
				write!(f, "{:?} is the current goal", c.get_column_row())
			}
		}
	}
}

impl std::error::Error for GridError {}

/// Errors that can occur when loading a [crate::prelude::CostField] from disk
#[derive(Debug)]
pub enum TerrainLoadError {
	/// Failed to read the file
	Io(std::io::Error),
	/// The file is not a valid `ron` representation of a field
	Ron(String),
	/// The file is not valid `csv`
	#[cfg(feature = "csv")]
	Csv(csv::Error),
	/// A value could not be read as a `u8` cost
	Parse(String),
	/// The terrain is empty or not rectangular
	Dimensions(String),
	/// The image could not be opened
	Heightmap(String),
}

impl fmt::Display for TerrainLoadError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TerrainLoadError::Io(e) => write!(f, "Failed opening terrain file: {}", e),
			TerrainLoadError::Ron(msg) => write!(f, "Failed deserializing CostField: {}", msg),
			#[cfg(feature = "csv")]
			TerrainLoadError::Csv(e) => write!(f, "Failed reading CostField csv: {}", e),
			TerrainLoadError::Parse(value) => {
				write!(f, "Expected a u8 terrain cost, found `{}`", value)
			}
			TerrainLoadError::Dimensions(msg) => write!(f, "Invalid terrain dimensions, {}", msg),
			TerrainLoadError::Heightmap(msg) => write!(f, "Failed to open heightmap: {}", msg),
		}
	}
}

impl std::error::Error for TerrainLoadError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			TerrainLoadError::Io(e) => Some(e),
			#[cfg(feature = "csv")]
			TerrainLoadError::Csv(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for TerrainLoadError {
	fn from(e: std::io::Error) -> Self {
		TerrainLoadError::Io(e)
	}
}

#[cfg(feature = "csv")]
impl From<csv::Error> for TerrainLoadError {
	fn from(e: csv::Error) -> Self {
		TerrainLoadError::Csv(e)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn grid_error_message() {
		let e = GridError::ConflictsWithGoal(FieldCell::new(2, 3));
		assert_eq!("(2, 3) is the current goal", e.to_string());
	}
	#[test]
	fn io_error_has_source() {
		use std::error::Error;
		let e: TerrainLoadError =
			std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
		assert!(e.source().is_some());
		assert!(e.to_string().starts_with("Failed opening terrain file"));
	}
}
