//! Register screen state
//!
//! - [`state`]: filter, refresh, last-sync, language and view cells
//! - [`events`]: user events and the paging they drive

mod events;
mod state;

pub use events::{HealthModule, RegisterAction, RegisterEvent, RegisterPaging};
pub use state::{Language, RegisterFilterState, RegisterFilterType};
