//! Measure the cost of editing terrain while both endpoints are set, each
//! toggle recalculates every field and the path
//!
//! Grid is 100 by 100 cells
//!

use bevy_bushfire_flowfield::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Toggle a short vertical line of cells on and back off again
fn toggle(grid: &mut FlowFieldGrid) {
	for row in 40..60 {
		grid.toggle_obstacle(FieldCell::new(50, row)).unwrap();
	}
	for row in 40..60 {
		grid.toggle_obstacle(FieldCell::new(50, row)).unwrap();
	}
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("algorithm_use");
	group.significance_level(0.05).sample_size(20);
	let mut grid = FlowFieldGrid::new(GridDimensions::new(100, 100, 16.0));
	grid.set_goal(FieldCell::new(99, 50)).unwrap();
	grid.set_start(FieldCell::new(0, 50)).unwrap();
	group.bench_function("toggle_obstacles", |b| b.iter(|| toggle(black_box(&mut grid))));
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
