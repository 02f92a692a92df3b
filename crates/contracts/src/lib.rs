//! Shared data model for the cloud assistant console.
//!
//! Everything here is platform-neutral: the frontend crate renders these
//! types, and the pure state transitions (send planning, resource
//! normalization, refresh sequencing, tree flattening) are tested natively.

pub mod domain;
pub mod shared;
