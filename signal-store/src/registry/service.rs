//! Shared Registry Service
//!
//! Several parts of an application usually need the same registry. A
//! `SignalService` is a cheap, cloneable handle to one registry, built once
//! in the composition root and passed to every consumer. It forwards the
//! three registry operations and adds nothing else.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::reactive::{CellFactory, CellValue, SignalFactory};

use super::key::Key;
use super::shape::StateShape;
use super::signal_registry::{write_cell, SignalRegistry};

/// Cloneable handle to one shared `SignalRegistry`.
pub struct SignalService<F: CellFactory = SignalFactory> {
    registry: Arc<RwLock<SignalRegistry<F>>>,
}

impl<F: CellFactory> SignalService<F> {
    /// Build the shared registry from an initial state.
    pub fn new<S: StateShape>(initial: S) -> Result<Self> {
        SignalRegistry::new(initial).map(Self::from_registry)
    }

    /// Share an already built registry.
    pub fn from_registry(registry: SignalRegistry<F>) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn add_signal<T: CellValue>(&self, key: &Key<T>, payload: T) -> Result<()> {
        self.registry.write().add_signal(key, payload)
    }

    pub fn get_signal<T: CellValue>(&self, key: &Key<T>) -> Result<F::Handle<T>> {
        self.registry.read().get_signal(key)
    }

    /// The registry lock is released before the write so observers may call
    /// back into the service.
    pub fn update_signal<T: CellValue>(&self, key: &Key<T>, payload: T) -> Result<()> {
        let cell = self.get_signal(key)?;
        write_cell(key, &cell, payload);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.read().contains(name)
    }

    pub fn len(&self) -> usize {
        self.registry.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }

    /// Registered key names in insertion order, copied out of the lock.
    pub fn keys(&self) -> Vec<String> {
        self.registry.read().keys().map(str::to_owned).collect()
    }
}

impl<F: CellFactory> Clone for SignalService<F> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<F: CellFactory> Default for SignalService<F> {
    fn default() -> Self {
        Self::from_registry(SignalRegistry::default())
    }
}

impl<F: CellFactory> fmt::Debug for SignalService<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SignalService")
            .field(&*self.registry.read())
            .finish()
    }
}
