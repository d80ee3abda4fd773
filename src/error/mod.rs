//! Error handling for collection operations.
//!
//! - **Categories**: [`ErrorCategory`] separates transport failures from
//!   application (non-2xx) and protocol failures
//! - **Operations**: [`Operation`] carries the fixed per-operation messages
//! - **Unified error**: [`SyncError`] is what every sync call returns
//!
//! Failures are handled where the operation was started; nothing here is
//! meant to bubble past the controller.

mod category;
mod operation;
mod sync_error;

pub use category::ErrorCategory;
pub use operation::Operation;
pub use sync_error::SyncError;

/// Type alias for Results of sync operations.
pub type SyncResult<T> = Result<T, SyncError>;
