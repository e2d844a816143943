//! Cell Capability
//!
//! The registry never assumes a particular reactivity engine. It only needs
//! a value slot that can be read and written, where writing notifies
//! whoever is observing. `Cell` describes that slot and `CellFactory` tells
//! the registry how to build one for any value type.
//!
//! The default factory, `SignalFactory`, produces this crate's `Signal`.

use super::signal::Signal;

/// Bound on every value stored in a cell.
pub trait CellValue: Clone + Send + Sync + 'static {}

impl<T> CellValue for T where T: Clone + Send + Sync + 'static {}

/// An observable mutable value slot.
///
/// Clones must share state: a value written through one clone is visible
/// through every other. The registry hands out clones as handles.
pub trait Cell<T>: Clone + Send + Sync + 'static {
    /// Read the current value.
    fn get(&self) -> T;

    /// Replace the current value and notify observers.
    fn set(&self, value: T);
}

/// A family of cells, one cell type per value type.
pub trait CellFactory: 'static {
    type Handle<T: CellValue>: Cell<T>;

    /// Create a cell initialized to `value`.
    fn create<T: CellValue>(value: T) -> Self::Handle<T>;
}

/// Builds `Signal` cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalFactory;

impl CellFactory for SignalFactory {
    type Handle<T: CellValue> = Signal<T>;

    fn create<T: CellValue>(value: T) -> Signal<T> {
        Signal::new(value)
    }
}

impl<T: CellValue> Cell<T> for Signal<T> {
    fn get(&self) -> T {
        Signal::get(self)
    }

    fn set(&self, value: T) {
        Signal::set(self, value)
    }
}
