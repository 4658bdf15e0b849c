//! State holders behind the FHIRCore screens.
//!
//! Every piece of screen state lives in an [`ObservableCell`]: writers
//! replace the value, readers either clone it or subscribe for updates.
//!
//! # Module Structure
//!
//! - [`cell`]: watch-backed observable cell
//! - [`register`]: register filter state, register events and paging
//! - [`appsetting`]: application id entry and configuration loading
//! - [`sync`]: sync job status broadcasting

pub mod appsetting;
pub mod cell;
pub mod error;
pub mod register;
pub mod sync;

pub use appsetting::{AppSelection, AppSettingState};
pub use cell::ObservableCell;
pub use error::{EngineError, Result};
pub use register::{
    HealthModule, Language, RegisterAction, RegisterEvent, RegisterFilterState,
    RegisterFilterType, RegisterPaging,
};
pub use sync::{SyncBroadcaster, SyncJobStatus};
