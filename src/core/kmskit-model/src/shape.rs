//! Declarative generators for wire shapes and string enumerations.
//!
//! A shape is a record of independently optional fields. Each field is
//! declared once with its kind, Rust type, wire name and accessor names:
//!
//! ```text
//! text key_id: String => "KeyId" { key_id, set_key_id, with_key_id }
//! ```
//!
//! Field kinds:
//!
//! | Kind     | Stored as              | Getter returns        | `with_*` takes              |
//! |----------|------------------------|-----------------------|-----------------------------|
//! | `text`   | `Option<String>`       | `Option<&str>`        | `impl Into<String>`         |
//! | `value`  | `Option<T>` (`Copy`)   | `Option<T>`           | `impl Into<T>`              |
//! | `choice` | `Option<E>` (wire enum)| `Option<E>` (cloned)  | `impl Into<E>`              |
//! | `blob`   | `Option<Blob>`         | `Option<&[u8]>`       | `impl Into<Blob>`           |
//! | `object` | `Option<T>`            | `Option<&T>`          | `T`                         |
//! | `list`   | `Option<Vec<T>>`       | `&[T]`                | items, appended             |
//! | `map`    | `Option<BTreeMap<..>>` | `Option<&BTreeMap>`   | one key/value pair, inserted|
//!
//! Equality and hashing go through the same view as the getters, so an
//! unset list and an empty list are indistinguishable.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Blob, SecretBlob, Timestamp};

/// Diagnostic rendering of a field value inside a shape's `Display` output.
pub(crate) trait RenderField {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Adapter so a [`RenderField`] value can be used with `write!`.
pub(crate) struct Rendered<'a, T: ?Sized>(pub(crate) &'a T);

impl<T: RenderField + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

macro_rules! render_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RenderField for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

render_via_display!(String, bool, i32, i64, Blob, SecretBlob, Timestamp);

impl<T: RenderField> RenderField for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<V: RenderField> RenderField for BTreeMap<String, V> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=", key)?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

/// Storage type of a field given its kind.
macro_rules! field_type {
    (list, $ty:ty) => { ::std::vec::Vec<$ty> };
    (map, $ty:ty) => { ::std::collections::BTreeMap<::std::string::String, $ty> };
    ($kind:ident, $ty:ty) => { $ty };
}

/// The value a field contributes to equality and hashing.
macro_rules! field_view {
    (list, $value:expr) => { $value.as_deref().unwrap_or(&[]) };
    ($kind:ident, $value:expr) => { &$value };
}

/// Getter, setter and fluent setter for one field.
macro_rules! field_accessors {
    (text; $(#[$doc:meta])* $field:ident: $ty:ty => $wire:literal { $get:ident, $set:ident, $with:ident }) => {
        $(#[$doc])*
        pub fn $get(&self) -> Option<&str> {
            self.$field.as_deref()
        }

        #[doc = concat!("Sets `", $wire, "`; `None` clears it.")]
        pub fn $set(&mut self, value: Option<$ty>) {
            self.$field = value;
        }

        #[doc = concat!("Sets `", $wire, "` and returns `self` for chaining.")]
        pub fn $with(mut self, value: impl Into<$ty>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
    (value; $(#[$doc:meta])* $field:ident: $ty:ty => $wire:literal { $get:ident, $set:ident, $with:ident }) => {
        $(#[$doc])*
        pub fn $get(&self) -> Option<$ty> {
            self.$field
        }

        #[doc = concat!("Sets `", $wire, "`; `None` clears it.")]
        pub fn $set(&mut self, value: Option<$ty>) {
            self.$field = value;
        }

        #[doc = concat!("Sets `", $wire, "` and returns `self` for chaining.")]
        pub fn $with(mut self, value: impl Into<$ty>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
    (blob; $(#[$doc:meta])* $field:ident: $ty:ty => $wire:literal { $get:ident, $set:ident, $with:ident }) => {
        $(#[$doc])*
        pub fn $get(&self) -> Option<&[u8]> {
            self.$field.as_ref().map(|blob| blob.as_bytes())
        }

        #[doc = concat!("Sets `", $wire, "`; `None` clears it.")]
        pub fn $set(&mut self, value: Option<$ty>) {
            self.$field = value;
        }

        #[doc = concat!("Sets `", $wire, "` and returns `self` for chaining.")]
        pub fn $with(mut self, value: impl Into<$ty>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
    (choice; $(#[$doc:meta])* $field:ident: $ty:ty => $wire:literal { $get:ident, $set:ident, $with:ident }) => {
        $(#[$doc])*
        pub fn $get(&self) -> Option<$ty> {
            self.$field.clone()
        }

        #[doc = concat!("Sets `", $wire, "`; `None` clears it.")]
        pub fn $set(&mut self, value: Option<$ty>) {
            self.$field = value;
        }

        #[doc = concat!("Sets `", $wire, "` and returns `self` for chaining.")]
        pub fn $with(mut self, value: impl Into<$ty>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
    (object; $(#[$doc:meta])* $field:ident: $ty:ty => $wire:literal { $get:ident, $set:ident, $with:ident }) => {
        $(#[$doc])*
        pub fn $get(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }

        #[doc = concat!("Sets `", $wire, "`; `None` clears it.")]
        pub fn $set(&mut self, value: Option<$ty>) {
            self.$field = value;
        }

        #[doc = concat!("Sets `", $wire, "` and returns `self` for chaining.")]
        pub fn $with(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };
    (list; $(#[$doc:meta])* $field:ident: $ty:ty => $wire:literal { $get:ident, $set:ident, $with:ident }) => {
        $(#[$doc])*
        ///
        /// Returns an empty slice when the list was never set.
        pub fn $get(&self) -> &[$ty] {
            self.$field.as_deref().unwrap_or(&[])
        }

        #[doc = concat!("Replaces `", $wire, "`; `None` resets it to unset.")]
        pub fn $set(&mut self, value: Option<Vec<$ty>>) {
            self.$field = value;
        }

        #[doc = concat!("Appends to `", $wire, "` and returns `self` for chaining.")]
        pub fn $with<I, V>(mut self, values: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<$ty>,
        {
            self.$field
                .get_or_insert_with(Vec::new)
                .extend(values.into_iter().map(Into::into));
            self
        }
    };
    (map; $(#[$doc:meta])* $field:ident: $ty:ty => $wire:literal { $get:ident, $set:ident, $with:ident }) => {
        $(#[$doc])*
        pub fn $get(&self) -> Option<&::std::collections::BTreeMap<String, $ty>> {
            self.$field.as_ref()
        }

        #[doc = concat!("Replaces `", $wire, "`; `None` clears it.")]
        pub fn $set(&mut self, value: Option<::std::collections::BTreeMap<String, $ty>>) {
            self.$field = value;
        }

        #[doc = concat!("Inserts one entry into `", $wire, "` and returns `self` for chaining.")]
        pub fn $with(mut self, key: impl Into<String>, value: impl Into<$ty>) -> Self {
            self.$field
                .get_or_insert_with(::std::collections::BTreeMap::new)
                .insert(key.into(), value.into());
            self
        }
    };
}

/// Declares a wire shape.
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $kind:ident $field:ident: $ty:ty => $wire:literal { $get:ident, $set:ident, $with:ident }
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                $field: Option<$crate::shape::field_type!($kind, $ty)>,
            )*
        }

        impl $name {
            #[doc = concat!("Creates an empty `", stringify!($name), "` with every field unset.")]
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $crate::shape::field_accessors!(
                    $kind; $(#[$fmeta])* $field: $ty => $wire { $get, $set, $with }
                );
            )*
        }

        impl PartialEq for $name {
            #[allow(unused_variables)]
            fn eq(&self, other: &Self) -> bool {
                true $(
                    && $crate::shape::field_view!($kind, self.$field)
                        == $crate::shape::field_view!($kind, other.$field)
                )*
            }
        }

        impl Eq for $name {}

        impl ::std::hash::Hash for $name {
            #[allow(unused_variables)]
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $(
                    ::std::hash::Hash::hash($crate::shape::field_view!($kind, self.$field), state);
                )*
            }
        }

        impl ::std::fmt::Display for $name {
            #[allow(unused_mut)]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut parts: Vec<String> = Vec::new();
                $(
                    if let Some(value) = &self.$field {
                        parts.push(format!("{}: {}", $wire, $crate::shape::Rendered(value)));
                    }
                )*
                write!(f, "{{{}}}", parts.join(","))
            }
        }

        impl $crate::shape::RenderField for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    };
}

/// Declares a closed, string-backed enumeration.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $literal:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const VALUES: &'static [$name] = &[$($name::$variant),+];

            /// The wire literal of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $literal,)+
                }
            }

            /// Resolves a wire literal (exact, case-sensitive match).
            ///
            /// # Errors
            ///
            /// Returns an invalid-argument [`ModelError`](crate::ModelError) when the
            /// input is empty or matches no variant.
            pub fn from_value(value: &str) -> Result<Self, $crate::ModelError> {
                value.parse()
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    "" => Err($crate::ModelError::EmptyValue {
                        kind: stringify!($name),
                    }),
                    $($literal => Ok($name::$variant),)+
                    other => Err($crate::ModelError::UnknownValue {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <::std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }

        impl $crate::shape::RenderField for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Declares a string-backed enumeration for fields the service fills in.
///
/// `from_value` and `FromStr` accept only the declared literals, while
/// deserialization keeps any other literal in `Unknown` so a response using
/// a newer value still decodes.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $literal:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A literal this version does not recognize, kept verbatim.
            Unknown(String),
        }

        impl $name {
            /// Every known variant, in declaration order.
            pub const VALUES: &'static [$name] = &[$($name::$variant),+];

            /// The wire literal of this variant.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $literal,)+
                    $name::Unknown(raw) => raw.as_str(),
                }
            }

            /// Whether this value came from a literal outside [`Self::VALUES`].
            pub fn is_unknown(&self) -> bool {
                matches!(self, $name::Unknown(_))
            }

            /// Resolves a wire literal (exact, case-sensitive match).
            ///
            /// # Errors
            ///
            /// Returns an invalid-argument [`ModelError`](crate::ModelError) when the
            /// input is empty or matches no known variant.
            pub fn from_value(value: &str) -> Result<Self, $crate::ModelError> {
                value.parse()
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    "" => Err($crate::ModelError::EmptyValue {
                        kind: stringify!($name),
                    }),
                    $($literal => Ok($name::$variant),)+
                    other => Err($crate::ModelError::UnknownValue {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                match raw.parse() {
                    Ok(known) => Ok(known),
                    Err(_) => Ok($name::Unknown(raw)),
                }
            }
        }

        impl $crate::shape::RenderField for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use field_accessors;
pub(crate) use field_view;
pub(crate) use field_type;
pub(crate) use shape;
pub(crate) use string_enum;
pub(crate) use wire_enum;
