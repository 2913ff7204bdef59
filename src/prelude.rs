//! `use bevy_bushfire_flowfield::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::flowfields::{
	agent::*,
	dimensions::*,
	fields::{cost_field::*, flow_field::*, integration_field::*, wave_field::*, *},
	grid::*,
	path::*,
	utilities::*,
};

#[doc(hidden)]
pub use crate::{
	error::*,
	plugin::{agent_layer::*, grid_layer::*, *},
};
