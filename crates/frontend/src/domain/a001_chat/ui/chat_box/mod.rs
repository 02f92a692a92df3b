//! Chat Box UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: `POST /chat` request
//! - view_model.rs: ChatBoxVm with RwSignals and the send flow
//! - view.rs: Main component ChatBox

mod model;
mod view;
mod view_model;

pub use view::ChatBox;
pub use view_model::ChatBoxVm;
