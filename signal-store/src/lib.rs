//! Signal Store
//!
//! A keyed registry of reactive value cells ("signals") for front-end state.
//! Each cell is independently readable, writable and observable. Creation
//! is guarded: adding an existing key fails instead of overwriting, and
//! reading or updating a missing key fails instead of creating it.
//!
//! # Architecture
//!
//! - `reactive`: the cell capability (`Cell`, `CellFactory`) and the default
//!   observable cell, `Signal`
//! - `registry`: typed keys, the `SignalRegistry` itself, seeding from an
//!   initial state, and the shared `SignalService` handle
//! - `error`: the `RegistryError` taxonomy
//!
//! # Example
//!
//! ```rust
//! use signal_store::reactive::SubscriberId;
//! use signal_store::{state_shape, SignalService};
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! pub struct User {
//!     pub name: String,
//!     pub age: u32,
//! }
//!
//! state_shape! {
//!     pub struct AppState {
//!         user: User => USER,
//!         test: String => TEST,
//!     }
//! }
//!
//! // Build once in the composition root, then clone into consumers
//! let state: SignalService = SignalService::new(AppState {
//!     user: User::default(),
//!     test: String::new(),
//! })?;
//!
//! let user = state.get_signal(&AppState::USER)?;
//! user.subscribe(SubscriberId::new(), || println!("user changed"));
//!
//! state.update_signal(&AppState::USER, User { name: "Alan".into(), age: 30 })?;
//! assert_eq!(user.get().name, "Alan");
//! assert_eq!(state.get_signal(&AppState::TEST)?.get(), "");
//! # Ok::<(), signal_store::RegistryError>(())
//! ```

pub mod error;
pub mod reactive;
pub mod registry;

pub use error::{RegistryError, Result};
pub use reactive::{Cell, CellFactory, Signal, SignalFactory};
pub use registry::{Key, SignalRegistry, SignalService, StateShape};
