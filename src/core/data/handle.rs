//! Opaque handles issued by a variable store.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! store_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

store_handle!(
    /// Identity of a collection in the store.
    CollectionId
);
store_handle!(
    /// Identity of a mode, unique across the store.
    ModeId
);
store_handle!(
    /// Identity of a variable in the store. Alias values point at one of these.
    VariableId
);
