//! Route declaration, validation and matching.

mod matcher;
pub mod pattern;
mod table;

pub use matcher::{path_segments, RouteMatch};
pub use table::{RouteEntry, RouteId, RouteTable, ViewFn};
