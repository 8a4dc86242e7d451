//! State Management
//!
//! Transient view state shared across the component tree.

pub mod view;

pub use view::{provide_view_state, ViewState};
