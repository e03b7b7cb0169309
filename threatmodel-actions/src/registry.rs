//! Threat model action identifiers
//!
//! Each identifier names one kind of state change in the threat model store.
//! They are exposed three ways:
//!
//! - flat string constants (`THREATMODEL_SAVE`, ...) for consumers comparing raw tokens
//! - the closed [`ActionType`] enum
//! - the aggregate lookup table from short keys (`save`, `fetchAll`, ...) to identifiers
//!
//! Both tables are generated from the declarations below,
//! so a key can only ever point at a declared identifier.
//!
//! # Example
//!
//! ```
//! use threatmodel_actions::registry::{self, ActionKey, ActionType, THREATMODEL_FETCH_ALL};
//!
//! assert_eq!(registry::resolve("fetchAll"), Some(THREATMODEL_FETCH_ALL));
//! assert_eq!(ActionKey::Save.action_type(), ActionType::Save);
//! assert_eq!(registry::resolve("doesNotExist"), None);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::action::{Action, ActionCategory, ActionSummary};
use crate::error::RegistryError;

macro_rules! action_types {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $ident:ident, $category:ident;
        )*
    ) => {
        $(
            $(#[$meta])*
            pub const $ident: &str = stringify!($ident);
        )*

        /// Closed set of threat model action identifiers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ActionType {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl ActionType {
            /// Every identifier, in declaration order
            pub const fn all() -> &'static [ActionType] {
                &[$(ActionType::$variant,)*]
            }

            /// The identifier string
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(ActionType::$variant => $ident,)*
                }
            }

            /// Look up the enum case for an identifier string
            pub fn from_identifier(identifier: &str) -> Option<ActionType> {
                match identifier {
                    $($ident => Some(ActionType::$variant),)*
                    _ => None,
                }
            }

            /// Category of this identifier
            pub const fn category_enum(&self) -> ActionTypeCategory {
                match self {
                    $(ActionType::$variant => ActionTypeCategory::$category,)*
                }
            }
        }
    };
}

macro_rules! action_keys {
    ($($variant:ident => $key:literal => $target:ident;)*) => {
        /// Short convenience keys of the aggregate lookup table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ActionKey {
            $($variant,)*
        }

        static MAPPING: &[(&str, &str)] = &[
            $(($key, ActionType::$target.as_str()),)*
        ];

        impl ActionKey {
            /// Every key, in table order
            pub const fn all() -> &'static [ActionKey] {
                &[$(ActionKey::$variant,)*]
            }

            /// The short key string
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(ActionKey::$variant => $key,)*
                }
            }

            /// Look up a key by its short name. Matching is exact and case-sensitive.
            pub fn from_key(key: &str) -> Option<ActionKey> {
                match key {
                    $($key => Some(ActionKey::$variant),)*
                    _ => None,
                }
            }

            /// The identifier this key stands for
            pub const fn action_type(self) -> ActionType {
                match self {
                    $(ActionKey::$variant => ActionType::$target,)*
                }
            }
        }

        impl ActionType {
            /// The short key for this identifier, if it has one
            pub const fn key(self) -> Option<ActionKey> {
                match self {
                    $(ActionType::$target => Some(ActionKey::$variant),)*
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    };
}

// Alphabetical by identifier; `ActionType::all()` follows this order.
action_types! {
    /// The loaded threat model was cleared
    Clear => THREATMODEL_CLEAR, Threatmodel;
    /// The contributor list of the threat model changed
    ContributorsUpdated => THREATMODEL_CONTRIBUTORS_UPDATED, Threatmodel;
    /// A new threat model was created
    Create => THREATMODEL_CREATE, Threatmodel;
    /// A diagram within the threat model was selected
    DiagramSelected => THREATMODEL_DIAGRAM_SELECTED, Diagram;
    /// A diagram within the threat model was updated
    DiagramUpdated => THREATMODEL_DIAGRAM_UPDATED, Diagram;
    /// A single threat model was fetched
    Fetch => THREATMODEL_FETCH, Threatmodel;
    /// All threat models were fetched
    FetchAll => THREATMODEL_FETCH_ALL, Threatmodel;
    /// The threat model was restored from its immutable copy
    Restore => THREATMODEL_RESTORE, Threatmodel;
    /// The threat model was saved
    Save => THREATMODEL_SAVE, Threatmodel;
    /// A threat model was selected
    Selected => THREATMODEL_SELECTED, Threatmodel;
    /// An immutable copy of the threat model was taken
    SetImmutableCopy => THREATMODEL_SET_IMMUTABLE_COPY, Threatmodel;
    /// The threat model version was updated
    Update => THREATMODEL_UPDATE, Threatmodel;
}

// ContributorsUpdated has no key: consumers reference it directly.
action_keys! {
    Clear => "clear" => Clear;
    Create => "create" => Create;
    DiagramSelected => "diagramSelected" => DiagramSelected;
    DiagramUpdated => "diagramUpdated" => DiagramUpdated;
    Fetch => "fetch" => Fetch;
    FetchAll => "fetchAll" => FetchAll;
    Restore => "restore" => Restore;
    Save => "save" => Save;
    Selected => "selected" => Selected;
    SetImmutableCopy => "setImmutableCopy" => SetImmutableCopy;
    SetVersion => "setVersion" => Update;
}

/// Categories of [`ActionType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionTypeCategory {
    /// Whole threat model lifecycle
    Threatmodel,
    /// Diagrams inside a threat model
    Diagram,
}

impl ActionTypeCategory {
    /// Get all category values
    pub fn all() -> &'static [Self] {
        &[Self::Threatmodel, Self::Diagram]
    }

    /// Get category name as string
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Threatmodel => "threatmodel",
            Self::Diagram => "diagram",
        }
    }

    /// Look up a category by its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.name() == name)
    }
}

impl ActionType {
    /// Category name of this identifier. Every identifier is categorized.
    pub const fn category(&self) -> Option<&'static str> {
        Some(self.category_enum().name())
    }

    /// Returns true for the `diagram` category
    pub fn is_diagram(&self) -> bool {
        matches!(self.category_enum(), ActionTypeCategory::Diagram)
    }
}

/// Resolve a short key to its identifier string.
///
/// Unknown keys yield `None`; nothing is fabricated.
pub fn resolve(key: &str) -> Option<&'static str> {
    ActionKey::from_key(key).map(|k| k.action_type().as_str())
}

/// The aggregate lookup table as `(key, identifier)` pairs, in table order.
pub fn mapping() -> &'static [(&'static str, &'static str)] {
    MAPPING
}

impl ActionKey {
    /// The identifier string this key stands for
    pub const fn identifier(self) -> &'static str {
        self.action_type().as_str()
    }
}

impl From<ActionKey> for ActionType {
    fn from(key: ActionKey) -> Self {
        key.action_type()
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionType::from_identifier(s)
            .ok_or_else(|| RegistryError::UnknownIdentifier(s.to_string()))
    }
}

impl FromStr for ActionKey {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKey::from_key(s).ok_or_else(|| RegistryError::UnknownKey(s.to_string()))
    }
}

impl Serialize for ActionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ActionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for ActionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ActionKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Action for ActionType {
    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl ActionSummary for ActionType {
    fn summary(&self) -> String {
        self.as_str().to_string()
    }
}

impl ActionCategory for ActionType {
    type Category = ActionTypeCategory;

    fn category(&self) -> Option<&'static str> {
        ActionType::category(self)
    }

    fn category_enum(&self) -> Self::Category {
        ActionType::category_enum(self)
    }
}
