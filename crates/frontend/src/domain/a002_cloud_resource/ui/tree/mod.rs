//! Cloud Resources Tree UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: `GET /cloud-resources` request
//! - view_model.rs: CloudResourcesVm with collapse state and refresh flow
//! - view.rs: Main component CloudResources
//! - tree_row.rs: Rendering of one flattened tree line

mod model;
mod tree_row;
mod view;
mod view_model;

pub use view::CloudResources;
pub use view_model::CloudResourcesVm;
