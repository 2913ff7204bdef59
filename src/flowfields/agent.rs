//! A [PathFollower] moves a point through world space along the cells of a
//! [Path] at a constant speed.
//!
//! Each cell of the path becomes a waypoint at the centre of that cell. On
//! every [PathFollower::advance] the follower steps towards the current
//! waypoint, if the step would reach or overshoot it the follower snaps onto
//! the waypoint and targets the next one. Once the last waypoint has been
//! reached the follower becomes [AgentState::Inactive].
//!
//! ```text
//!  Inactive --reset(non-empty path)--> Active --last waypoint reached--> Inactive
//! ```
//!

use bevy::prelude::*;

use crate::prelude::*;

/// Whether a [PathFollower] is travelling
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum AgentState {
	/// No path to follow or the end of the path has been reached
	#[default]
	Inactive,
	/// Moving along a path
	Active,
}

/// A point entity travelling along a [Path] waypoint by waypoint
#[derive(Component, Clone, Debug, PartialEq, Reflect)]
pub struct PathFollower {
	/// Continuous world position
	position: Vec2,
	/// Index of the waypoint currently being moved towards
	cursor: usize,
	/// Whether travelling
	state: AgentState,
	/// World units travelled per second
	speed: f32,
	/// Centres of each cell of the path being followed
	waypoints: Vec<Vec2>,
}

impl PathFollower {
	/// Create an [AgentState::Inactive] follower moving at `speed` world units per second. The speed must be a finite number no less than zero
	pub fn new(speed: f32) -> Self {
		check_speed(speed);
		PathFollower {
			position: Vec2::ZERO,
			cursor: 0,
			state: AgentState::Inactive,
			speed,
			waypoints: Vec::new(),
		}
	}
	/// Get the world position
	pub fn get_position(&self) -> Vec2 {
		self.position
	}
	/// Get the index of the waypoint being travelled to
	pub fn get_cursor(&self) -> usize {
		self.cursor
	}
	/// Get the current state
	pub fn get_state(&self) -> AgentState {
		self.state
	}
	/// Whether the follower is moving along a path
	pub fn is_active(&self) -> bool {
		self.state == AgentState::Active
	}
	/// Get the speed in world units per second
	pub fn get_speed(&self) -> f32 {
		self.speed
	}
	/// Set the speed in world units per second. Panics if the speed is negative or not finite
	pub fn set_speed(&mut self, speed: f32) {
		check_speed(speed);
		self.speed = speed;
	}
	/// Get the world space waypoints being followed
	pub fn get_waypoints(&self) -> &[Vec2] {
		&self.waypoints
	}
	/// Place the follower at the start of `path` and begin moving along it.
	///
	/// An empty path leaves the follower [AgentState::Inactive] without
	/// moving it
	pub fn reset(&mut self, path: &Path, dimensions: &GridDimensions) {
		self.waypoints = path
			.get()
			.iter()
			.filter_map(|cell| dimensions.get_xy_from_field_cell(*cell))
			.collect();
		self.cursor = 0;
		if self.waypoints.len() != path.len() {
			// a cell outside of the grid cannot be travelled to
			self.waypoints.clear();
		}
		match self.waypoints.first() {
			Some(first) => {
				self.position = *first;
				self.state = AgentState::Active;
			}
			None => {
				self.state = AgentState::Inactive;
			}
		}
	}
	/// Stop moving and forget the current path
	pub fn deactivate(&mut self) {
		self.waypoints.clear();
		self.cursor = 0;
		self.state = AgentState::Inactive;
	}
	/// Move towards the current waypoint by `speed * delta_time`, returning the new position and whether the follower is still active. Does nothing when inactive
	pub fn advance(&mut self, delta_time: f32) -> (Vec2, bool) {
		if self.state == AgentState::Inactive {
			return (self.position, false);
		}
		let Some(target) = self.waypoints.get(self.cursor).copied() else {
			self.state = AgentState::Inactive;
			return (self.position, false);
		};
		let to_target = target - self.position;
		let distance = to_target.length();
		let step = self.speed * delta_time.max(0.0);
		if step >= distance {
			self.position = target;
			self.cursor += 1;
		} else {
			self.position += to_target / distance * step;
		}
		if self.cursor >= self.waypoints.len() {
			self.state = AgentState::Inactive;
		}
		(self.position, self.is_active())
	}
}

/// A follower must never move away from its waypoint
fn check_speed(speed: f32) {
	if speed < 0.0 || !speed.is_finite() {
		panic!("Agent speed must be a finite number no less than zero, found {}", speed);
	}
}
