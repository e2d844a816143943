//! Seeding
//!
//! A state shape is the initial-state record a registry is built from. Each
//! top-level property becomes one cell, added through `add_signal` so that
//! seeded and runtime-added keys behave identically.
//!
//! Shapes come from three places:
//!
//! - the `state_shape!` macro, which declares a struct together with one
//!   typed `Key` constant per field;
//! - a hand-written `StateShape` impl;
//! - any `Serialize` record via `SignalRegistry::from_record`, which seeds
//!   one `serde_json::Value` cell per property (feature `serde`).

use crate::error::Result;
use crate::reactive::CellFactory;

use super::signal_registry::SignalRegistry;

/// An initial-state record that can seed a registry.
pub trait StateShape {
    /// Add one cell per top-level property to `registry`.
    fn seed<F: CellFactory>(self, registry: &mut SignalRegistry<F>) -> Result<()>;
}

impl StateShape for () {
    fn seed<F: CellFactory>(self, _registry: &mut SignalRegistry<F>) -> Result<()> {
        Ok(())
    }
}

/// Declare a state struct, a typed key per field, and its seeding.
///
/// Each field is written `name: Type => KEY_CONST`. The key is named after
/// the field.
///
/// ```rust
/// use signal_store::{state_shape, SignalRegistry};
///
/// state_shape! {
///     #[derive(Debug, Clone, Default)]
///     pub struct AppState {
///         test: String => TEST,
///         clicks: u32 => CLICKS,
///     }
/// }
///
/// let registry: SignalRegistry = SignalRegistry::new(AppState {
///     test: "default".into(),
///     clicks: 0,
/// })?;
/// assert_eq!(registry.get_signal(&AppState::TEST)?.get(), "default");
/// assert_eq!(AppState::CLICKS.name(), "clicks");
/// # Ok::<(), signal_store::RegistryError>(())
/// ```
#[macro_export]
macro_rules! state_shape {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $key:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $name {
            $(
                pub const $key: $crate::Key<$ty> = $crate::Key::new(stringify!($field));
            )*
        }

        impl $crate::StateShape for $name {
            fn seed<F: $crate::reactive::CellFactory>(
                self,
                registry: &mut $crate::SignalRegistry<F>,
            ) -> $crate::Result<()> {
                $(
                    registry.add_signal(&Self::$key, self.$field)?;
                )*
                Ok(())
            }
        }
    };
}

#[cfg(feature = "serde")]
mod record {
    use serde::Serialize;
    use serde_json::{Map, Value};

    use crate::error::{RegistryError, Result};
    use crate::reactive::CellFactory;
    use crate::registry::{Key, SignalRegistry};

    use super::StateShape;

    impl StateShape for Map<String, Value> {
        fn seed<F: CellFactory>(self, registry: &mut SignalRegistry<F>) -> Result<()> {
            for (name, value) in self {
                registry.add_signal(&Key::<Value>::dynamic(name), value)?;
            }
            Ok(())
        }
    }

    impl<F: CellFactory> SignalRegistry<F> {
        /// Seed a registry from any record that serializes to an object.
        ///
        /// Every top-level property becomes a `serde_json::Value` cell,
        /// addressed with `Key::<Value>::dynamic(name)`.
        pub fn from_record<S: Serialize + ?Sized>(initial: &S) -> Result<Self> {
            match serde_json::to_value(initial)? {
                Value::Object(properties) => Self::new(properties),
                other => Err(RegistryError::NotARecord {
                    found: json_kind(&other),
                }),
            }
        }
    }

    fn json_kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

}
