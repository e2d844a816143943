//! Signal Registry
//!
//! The registry maps key names to cells. Each key is added exactly once,
//! either while seeding from the initial state or later through
//! `add_signal`, and keeps the same cell for the registry's whole lifetime.
//!
//! # Invariants
//!
//! - `add_signal` never overwrites: a second add for a name fails with
//!   `DuplicateKey` and leaves the existing cell untouched.
//! - `get_signal` and `update_signal` never create: a missing name fails
//!   with `KeyNotFound`.
//! - `update_signal` writes through the existing cell. The cell object bound
//!   to a name never changes.
//! - The value type of a name is fixed by its first add. Addressing it with
//!   a key of another type fails with `TypeMismatch`.
//!
//! Cells are stored type-erased and recovered by downcasting to the
//! factory's handle type for the key's value type.

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{RegistryError, Result};
use crate::reactive::{Cell, CellFactory, CellValue, SignalFactory};

use super::key::{Key, KeyName};
use super::shape::StateShape;

/// One registered cell, type-erased.
struct Slot {
    cell: Box<dyn Any + Send + Sync>,
    value_type: &'static str,
}

impl Slot {
    fn new<F: CellFactory, T: CellValue>(payload: T) -> Self {
        Self {
            cell: Box::new(F::create(payload)),
            value_type: type_name::<T>(),
        }
    }
}

/// Keyed collection of independently observable cells.
///
/// # Example
///
/// ```rust
/// use signal_store::{Key, SignalRegistry};
///
/// const TEST: Key<String> = Key::new("test");
///
/// let mut registry: SignalRegistry = SignalRegistry::default();
/// registry.add_signal(&TEST, "default".to_string())?;
/// registry.update_signal(&TEST, "updated".to_string())?;
/// assert_eq!(registry.get_signal(&TEST)?.get(), "updated");
/// # Ok::<(), signal_store::RegistryError>(())
/// ```
pub struct SignalRegistry<F: CellFactory = SignalFactory> {
    cells: IndexMap<KeyName, Slot>,
    _factory: PhantomData<fn() -> F>,
}

impl<F: CellFactory> SignalRegistry<F> {
    /// Create a registry seeded with one cell per property of `initial`.
    ///
    /// Seeding goes through `add_signal`, so it fails exactly as a runtime
    /// add would.
    pub fn new<S: StateShape>(initial: S) -> Result<Self> {
        let mut registry = Self::empty();
        initial.seed(&mut registry)?;
        debug!(signals = registry.len(), "registry seeded");
        Ok(registry)
    }

    /// Create a registry with no cells.
    pub fn empty() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty registry with room for `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: IndexMap::with_capacity(capacity),
            _factory: PhantomData,
        }
    }

    /// Register a new cell under `key`, initialized to `payload`.
    pub fn add_signal<T: CellValue>(&mut self, key: &Key<T>, payload: T) -> Result<()> {
        match self.cells.entry(key.to_name()) {
            Entry::Occupied(_) => {
                debug!(key = %key, "rejected add of existing signal");
                Err(RegistryError::duplicate(key.name()))
            }
            Entry::Vacant(entry) => {
                entry.insert(Slot::new::<F, T>(payload));
                debug!(key = %key, value_type = type_name::<T>(), "signal added");
                Ok(())
            }
        }
    }

    /// Get a handle to the cell under `key`.
    ///
    /// The handle shares state with the stored cell: reads see later
    /// updates and subscriptions observe them.
    pub fn get_signal<T: CellValue>(&self, key: &Key<T>) -> Result<F::Handle<T>> {
        self.lookup(key).cloned()
    }

    /// Write `payload` into the existing cell under `key`.
    pub fn update_signal<T: CellValue>(&self, key: &Key<T>, payload: T) -> Result<()> {
        write_cell(key, self.lookup(key)?, payload);
        Ok(())
    }

    /// Whether a cell is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.cells.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Registered key names in the order they were added.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.cells.keys().map(|name| &**name)
    }

    /// Shared existence and type check behind `get_signal` and
    /// `update_signal`.
    fn lookup<T: CellValue>(&self, key: &Key<T>) -> Result<&F::Handle<T>> {
        let Some(slot) = self.cells.get(key.name()) else {
            debug!(key = %key, "lookup of missing signal");
            return Err(RegistryError::not_found(key.name()));
        };
        slot.cell
            .downcast_ref::<F::Handle<T>>()
            .ok_or_else(|| RegistryError::TypeMismatch {
                key: key.name().to_owned(),
                expected: type_name::<T>(),
                found: slot.value_type,
            })
    }
}

/// Write path shared by every `update_signal`.
pub(crate) fn write_cell<T: CellValue, C: Cell<T>>(key: &Key<T>, cell: &C, payload: T) {
    cell.set(payload);
    trace!(key = %key, "signal updated");
}

impl<F: CellFactory> Default for SignalRegistry<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: CellFactory> fmt::Debug for SignalRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.cells.iter().map(|(name, slot)| (name, slot.value_type)))
            .finish()
    }
}
