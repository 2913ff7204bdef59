//! Flowfields are a means of handling pathfinding for a crowd of actors.
//!
//! [Fixing Pathfinding Once and For All](https://web.archive.org/web/20150905073624/http://www.ai-blog.net/archives/000152.html)
//!
//! [jdxdev](https://www.jdxdev.com/blog/2020/05/03/flowfields/)
//!
//! [leifnode](https://leifnode.com/2013/12/flow-field-pathfinding/)
//!
//! A single fixed size grid is described by a series of fields, each
//! derived from the one before it whenever the terrain or goal changes:
//!
//! ```text
//! CostField --bushfire--> WaveField --+ distance--> IntegrationField --cheapest neighbour--> FlowField
//! ```
//!
//! Cells are indexed `(column, row)` from the top-left corner of the grid.
//!
//! Definitions:
//!
//! * Cost field - 8-bit field where a value of 255 represents impassable terrain and 1 represents passable terrain
//! * Wave field - the number of 8-directional hops from each cell to the goal found by a breadth-first "bushfire" propagation outwards from the goal
//! * Integration field - the wave field refined by the straight line distance of each cell to the goal so that neighbouring cells can be ranked
//! * Flow field - for each cell the [utilities::Ordinal] pointing to its most desirable neighbour
//! * Path - the cells visited by greedily following the flow field from a start cell to the goal
//!
//! ```text
//!  _____________________________
//! |__|__|__|__|__|__|__|__|__|__|
//! |__|__|__|__|__|__|__|__|__|__|
//! |__|__|__|__|__|__|__|__|__|__|
//! |__|__|__|__|__|__|__|__|__|__|
//! |__|__|__|__|__|__|__|__|__|__|
//! ```
//!

pub mod agent;
pub mod dimensions;
pub mod fields;
pub mod grid;
pub mod path;
pub mod utilities;
