//! Reactive Primitives
//!
//! The observable value slots the registry stores.
//!
//! # Concepts
//!
//! ## Cells
//!
//! A cell is any value slot that can be read and written, where a write
//! notifies observers. The `Cell` trait captures exactly that, and a
//! `CellFactory` builds cells for arbitrary value types so the registry can
//! stay generic over the reactivity engine behind them.
//!
//! ## Signals
//!
//! `Signal` is the cell this crate ships. It holds a value behind a lock and
//! calls every attached subscriber after each write. Clones share state.
//!
//! ## Subscribers
//!
//! A subscriber is a callback identified by a `SubscriberId`. There is no
//! automatic dependency tracking here: observers attach explicitly.

mod cell;
mod signal;
mod subscriber;

pub use cell::{Cell, CellFactory, CellValue, SignalFactory};
pub use signal::Signal;
pub use subscriber::SubscriberId;
