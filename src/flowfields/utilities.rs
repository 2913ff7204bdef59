//! Useful structures and tools used by the fields
//!

use bevy::prelude::*;

/// Terrain cost of an ordinary traversable [crate::prelude::FieldCell]
pub const PASSABLE: u8 = 1;
/// Terrain cost marking a [crate::prelude::FieldCell] as impassable
pub const BLOCKED: u8 = 255;
/// Wave distance of a [crate::prelude::FieldCell] the bushfire never reached
pub const UNVISITED: i32 = -1;
/// Integration cost of a [crate::prelude::FieldCell] that is unreachable or blocked
pub const UNVISITED_INTEGRATION: f32 = -1.0;

/// Convenience way of accessing the 8 directions of movement between
/// neighbouring cells of a grid and the directions stored in
/// [crate::prelude::FlowField]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash, Reflect)]
pub enum Ordinal {
	North,
	East,
	South,
	West,
	NorthEast,
	SouthEast,
	SouthWest,
	NorthWest,
	/// Special case, used to indicate a goal, unreachable or blocked cell in the [crate::prelude::FlowField]
	#[default]
	Zero,
}

impl Ordinal {
	/// Every direction of movement, orthogonals first. When two neighbours
	/// are otherwise indistinguishable the earlier entry wins
	pub const ALL: [Ordinal; 8] = [
		Ordinal::North,
		Ordinal::East,
		Ordinal::South,
		Ordinal::West,
		Ordinal::NorthEast,
		Ordinal::SouthEast,
		Ordinal::SouthWest,
		Ordinal::NorthWest,
	];
	/// The `(column, row)` step this direction represents, north being towards row `0`
	pub fn offset(&self) -> (i32, i32) {
		match self {
			Ordinal::North => (0, -1),
			Ordinal::East => (1, 0),
			Ordinal::South => (0, 1),
			Ordinal::West => (-1, 0),
			Ordinal::NorthEast => (1, -1),
			Ordinal::SouthEast => (1, 1),
			Ordinal::SouthWest => (-1, 1),
			Ordinal::NorthWest => (-1, -1),
			Ordinal::Zero => (0, 0),
		}
	}
	/// Find the [Ordinal] of a `(column, row)` step, [None] if the step is not between adjacent cells
	pub fn from_offset(offset: (i32, i32)) -> Option<Self> {
		match offset {
			(0, -1) => Some(Ordinal::North),
			(1, -1) => Some(Ordinal::NorthEast),
			(1, 0) => Some(Ordinal::East),
			(1, 1) => Some(Ordinal::SouthEast),
			(0, 1) => Some(Ordinal::South),
			(-1, 1) => Some(Ordinal::SouthWest),
			(-1, 0) => Some(Ordinal::West),
			(-1, -1) => Some(Ordinal::NorthWest),
			(0, 0) => Some(Ordinal::Zero),
			_ => None,
		}
	}
	/// Whether the direction moves along both axes at once
	pub fn is_diagonal(&self) -> bool {
		matches!(
			self,
			Ordinal::NorthEast | Ordinal::SouthEast | Ordinal::SouthWest | Ordinal::NorthWest
		)
	}
	/// Returns the opposite [Ordinal] of the current
	pub fn inverse(&self) -> Ordinal {
		match self {
			Ordinal::North => Ordinal::South,
			Ordinal::East => Ordinal::West,
			Ordinal::South => Ordinal::North,
			Ordinal::West => Ordinal::East,
			Ordinal::NorthEast => Ordinal::SouthWest,
			Ordinal::SouthEast => Ordinal::NorthWest,
			Ordinal::SouthWest => Ordinal::NorthEast,
			Ordinal::NorthWest => Ordinal::SouthEast,
			Ordinal::Zero => Ordinal::Zero,
		}
	}
	/// The step as a unit length vector, `(0, 0)` for [Ordinal::Zero]. Note
	/// that `y` follows the row direction so north is negative
	pub fn as_unit_vec2(&self) -> Vec2 {
		let (x, y) = self.offset();
		Vec2::new(x as f32, y as f32).normalize_or_zero()
	}
	/// For two cells next to each other it can be useful to find the [Ordinal] pointing from the `source` to the `target`. Returns [None] if they are not orthogonally or diagonally adjacent
	pub fn cell_to_cell_direction(target: (usize, usize), source: (usize, usize)) -> Option<Self> {
		let direction = (
			target.0 as i32 - source.0 as i32,
			target.1 as i32 - source.1 as i32,
		);
		match Ordinal::from_offset(direction) {
			Some(Ordinal::Zero) | None => None,
			ord => ord,
		}
	}
}
