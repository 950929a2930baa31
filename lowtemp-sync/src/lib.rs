//! Settings sync controller for the low-temperature measurement panel.
//!
//! Reconciles three sources of truth for one configuration record:
//! a local durable cache, in-memory user edits, and push updates from a
//! remote peer over a message channel. Issues save requests and
//! interprets their acknowledgements.
//!
//! # Architecture
//!
//! - **Protocol**: tagged envelope frames exchanged with the peer
//! - **Channel**: the transport capability the host injects
//! - **Controller**: owns the record and reconciles the three sources
//! - **Panel**: the data the rendering layer binds to
//!
//! All operations run on the host's event loop; the only background
//! work is two idempotent flag-clearing timers (initial-load timeout,
//! saved-indicator reset).
//!
//! # Example
//!
//! ```
//! use lowtemp_store::MemoryStore;
//! use lowtemp_sync::{PanelConfig, SettingsController};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let controller = SettingsController::new(PanelConfig::default(), store, None);
//! ```

pub mod channel;
mod controller;
mod error;
pub mod panel;
pub mod protocol;

pub use channel::MessageChannel;
pub use controller::{FieldEdit, PanelConfig, SaveCallback, SettingsController, SETTINGS_KEY};
pub use error::{SyncError, SyncResult};
pub use panel::{FieldSpec, PanelStatus, PANEL_FIELDS};
pub use protocol::PanelMessage;
