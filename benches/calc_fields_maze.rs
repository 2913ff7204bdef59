//! Measure recalculating every field of a grid containing a snake-like maze of
//! impassable cells running up and down the entire grid.
//!
//! Grid is 200 by 200 cells, the goal sits in the bottom right corner so the
//! wave must wind through every corridor
//!
//! ```txt
//!  _____________________________
//! |__|__|__|xx|__|__|__|xx|__|__|
//! |__|xx|__|xx|__|xx|__|xx|__|xx|
//! |__|xx|__|xx|__|xx|__|xx|__|xx|
//! |__|xx|__|xx|__|xx|__|xx|__|xx|
//! |__|xx|__|__|__|xx|__|__|__|xx|
//! ```
//!

use bevy_bushfire_flowfield::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Build terrain where every odd column is a wall with a gap alternating between the bottom and top row
fn maze(width: usize, height: usize) -> CostField {
	let mut cost_field = CostField::new(width, height);
	for column in (1..width).step_by(2) {
		let gap = if (column / 2) % 2 == 0 { height - 1 } else { 0 };
		for row in 0..height {
			if row != gap {
				cost_field.set_field_cell_value(BLOCKED, FieldCell::new(column, row));
			}
		}
	}
	cost_field
}

/// Set the goal, triggering a full recalculation
fn calc(grid: &mut FlowFieldGrid, goal: FieldCell) {
	grid.set_goal(goal).unwrap();
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("algorithm_use");
	group.significance_level(0.05).sample_size(50);
	let mut grid = FlowFieldGrid::from_cost_field(maze(200, 200), 16.0);
	group.bench_function("calc_fields_maze", |b| {
		b.iter(|| calc(black_box(&mut grid), black_box(FieldCell::new(198, 199))))
	});
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
