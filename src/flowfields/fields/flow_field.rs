//! A [FlowField] is a 2D array of [Ordinal] directions. Each points from a
//! [FieldCell] to the neighbour an actor should step to next in order to
//! reach the goal. A steering pipeline/character controller can read the
//! [FlowField] directly to provide movement, or a [crate::prelude::Path] can be
//! extracted from it.
//!

use crate::flowfields::fields::impl_field;
use crate::prelude::*;

/// Direction of travel from each cell, `field[column][row]`
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct FlowField {
	/// Direction of each cell
	field: Vec<Vec<Ordinal>>,
}

impl_field!(FlowField, Ordinal, "FlowField");

impl FlowField {
	/// Create a new [FlowField] where every cell is [Ordinal::Zero]
	pub fn new(width: usize, height: usize) -> Self {
		FlowField {
			field: vec![vec![Ordinal::Zero; height]; width],
		}
	}
	/// Reset every cell to [Ordinal::Zero]
	pub fn clear(&mut self) {
		for column in self.field.iter_mut() {
			column.fill(Ordinal::Zero);
		}
	}
	/// Calculate the [FlowField] from a fully populated [IntegrationField].
	///
	/// Each reachable cell other than the `goal` points to its cheapest
	/// neighbour. Neighbours which are impassable, unreachable or would need
	/// a corner to be cut are ignored. On an exact tie of integration cost the
	/// neighbour closest to the goal wins, after that the earliest in
	/// [Ordinal::ALL]. The goal, unreachable and impassable cells are
	/// [Ordinal::Zero]
	pub fn calculate(
		&mut self,
		goal: FieldCell,
		integration_field: &IntegrationField,
		cost_field: &CostField,
	) {
		if self.get_width() != cost_field.get_width()
			|| self.get_height() != cost_field.get_height()
		{
			*self = FlowField::new(cost_field.get_width(), cost_field.get_height());
		} else {
			self.clear();
		}
		if !cost_field.is_in_bounds(goal) {
			return;
		}
		for column in 0..self.get_width() {
			for row in 0..self.get_height() {
				let field_cell = FieldCell::new(column, row);
				if field_cell == goal || !integration_field.is_reachable(field_cell) {
					continue;
				}
				let direction =
					cheapest_neighbour(field_cell, goal, integration_field, cost_field);
				self.set_field_cell_value(direction, field_cell);
			}
		}
	}
}

/// Find the [Ordinal] pointing to the eligible neighbour of `field_cell` with the lowest integration cost, [Ordinal::Zero] if there are none
fn cheapest_neighbour(
	field_cell: FieldCell,
	goal: FieldCell,
	integration_field: &IntegrationField,
	cost_field: &CostField,
) -> Ordinal {
	// (direction, integration cost, squared distance to goal)
	let mut cheapest: Option<(Ordinal, f32, usize)> = None;
	for ord in Ordinal::ALL.iter() {
		let Some(neighbour) = cost_field.get_traversable_neighbour(field_cell, *ord) else {
			continue;
		};
		if !integration_field.is_reachable(neighbour) {
			continue;
		}
		let cost = integration_field.get_field_cell_value(neighbour);
		let squared_distance = neighbour.squared_distance(&goal);
		let is_better = match cheapest {
			None => true,
			Some((_, best_cost, best_distance)) => {
				cost < best_cost || (cost == best_cost && squared_distance < best_distance)
			}
		};
		if is_better {
			cheapest = Some((*ord, cost, squared_distance));
		}
	}
	cheapest.map_or(Ordinal::Zero, |(ord, _, _)| ord)
}
