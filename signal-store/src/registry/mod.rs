//! Signal Registry
//!
//! A keyed collection of independently observable cells, seeded from an
//! initial state record.
//!
//! # Overview
//!
//! - `Key<T>` names a cell and fixes its value type.
//! - `SignalRegistry` owns the cells and enforces that every key is added
//!   once before it is read or updated.
//! - `StateShape` describes an initial-state record; the registry seeds one
//!   cell per top-level property through its own `add_signal`.
//! - `SignalService` shares one registry among many consumers.

mod key;
mod service;
mod shape;
mod signal_registry;

pub use key::{Key, KeyName};
pub use service::SignalService;
pub use shape::StateShape;
pub use signal_registry::SignalRegistry;
