//! Property-based invariant tests for the signal registry.
//!
//! 1. Every seeded property is readable with its seeded value.
//! 2. Unknown keys fail both get and update with `KeyNotFound`.
//! 3. Re-adding a known key fails with `DuplicateKey` and keeps the value.
//! 4. The last update wins.
//! 5. Consecutive reads agree.
//! 6. Updating one key never changes another.

use std::collections::BTreeMap;

use proptest::prelude::*;
use signal_store::{Key, RegistryError, SignalRegistry, StateShape};

/// A dynamic record: every property holds an `i64`.
#[derive(Debug, Clone)]
struct Record(BTreeMap<String, i64>);

impl StateShape for Record {
    fn seed<F: signal_store::CellFactory>(
        self,
        registry: &mut SignalRegistry<F>,
    ) -> signal_store::Result<()> {
        for (name, value) in self.0 {
            registry.add_signal(&Key::<i64>::dynamic(name), value)?;
        }
        Ok(())
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn record_strategy() -> impl Strategy<Value = BTreeMap<String, i64>> {
    prop::collection::btree_map("[a-z]{1,8}", any::<i64>(), 1..12)
}

fn seeded(record: &BTreeMap<String, i64>) -> SignalRegistry {
    SignalRegistry::new(Record(record.clone())).expect("keys in a map are unique")
}

fn key(name: &str) -> Key<i64> {
    Key::dynamic(name.to_owned())
}

fn read(registry: &SignalRegistry, name: &str) -> i64 {
    registry.get_signal(&key(name)).expect("key was seeded").get()
}

// ── Invariants ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn seeded_properties_are_readable(record in record_strategy()) {
        let registry = seeded(&record);
        prop_assert_eq!(registry.len(), record.len());
        for (name, value) in &record {
            prop_assert_eq!(read(&registry, name), *value);
        }
    }

    #[test]
    fn unknown_keys_are_not_found(
        record in record_strategy(),
        missing in "[A-Z]{1,8}",
        payload in any::<i64>(),
    ) {
        let registry = seeded(&record);
        let is_not_found = matches!(
            registry.get_signal(&key(&missing)),
            Err(RegistryError::KeyNotFound { .. })
        );
        prop_assert!(is_not_found);
        let is_not_found = matches!(
            registry.update_signal(&key(&missing), payload),
            Err(RegistryError::KeyNotFound { .. })
        );
        prop_assert!(is_not_found);
        prop_assert!(!registry.contains(&missing));
    }

    #[test]
    fn readding_fails_and_keeps_value(
        record in record_strategy(),
        index in any::<prop::sample::Index>(),
        payload in any::<i64>(),
    ) {
        let mut registry = seeded(&record);
        let (name, original) = index.get(&record.iter().collect::<Vec<_>>()).clone();

        let err = registry.add_signal(&key(name), payload).unwrap_err();
        prop_assert_eq!(err.key(), Some(name.as_str()));
        let is_duplicate = matches!(err, RegistryError::DuplicateKey { .. });
        prop_assert!(is_duplicate);
        prop_assert_eq!(read(&registry, name), *original);
        prop_assert_eq!(registry.len(), record.len());
    }

    #[test]
    fn last_update_wins_and_reads_agree(
        record in record_strategy(),
        index in any::<prop::sample::Index>(),
        updates in prop::collection::vec(any::<i64>(), 1..8),
    ) {
        let registry = seeded(&record);
        let names: Vec<&String> = record.keys().collect();
        let name = *index.get(&names);

        for value in &updates {
            registry.update_signal(&key(name), *value).unwrap();
        }

        let last = *updates.last().unwrap();
        prop_assert_eq!(read(&registry, name), last);
        prop_assert_eq!(read(&registry, name), read(&registry, name));
    }

    #[test]
    fn updates_are_isolated(
        record in record_strategy(),
        index in any::<prop::sample::Index>(),
        payload in any::<i64>(),
    ) {
        let registry = seeded(&record);
        let names: Vec<&String> = record.keys().collect();
        let target = *index.get(&names);

        registry.update_signal(&key(target), payload).unwrap();

        for (name, value) in &record {
            if name != target {
                prop_assert_eq!(read(&registry, name), *value);
            }
        }
    }
}
