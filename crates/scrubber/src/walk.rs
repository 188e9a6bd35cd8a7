//! Structural traversal.
//!
//! Every value the scrubber can walk implements [`Scrub`]. Leaves decide what
//! happens to them from the [`Context`] they are visited with: the field or key
//! name they sit under and any override inherited from an enclosing field.
//!
//! | Shape | Children visited with |
//! |---|---|
//! | record | declared field name, field override (or the inherited one) |
//! | map | entry key, inherited override |
//! | sequence | no name, inherited override |
//! | `Option` / `Box` | unchanged context |
//!
//! Records describe their fields through [`Record::visit_fields`]; the
//! [`scrub_record!`](crate::scrub_record) macro writes both impls from a field
//! list.

use crate::{Scrubber, Tag};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

/// Coarse shape of a value, used to reject non-composite roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Record, map or sequence
    Composite,
    /// String leaf
    Text,
    /// Number, boolean, null or absent
    Scalar,
    /// Value the scrubber does not look into
    Opaque,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Shape::Composite => "composite",
            Shape::Text => "text",
            Shape::Scalar => "scalar",
            Shape::Opaque => "opaque",
        };
        write!(f, "{}", s)
    }
}

/// Where a value sits in the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context<'a> {
    /// Field or key name, if the value is keyed.
    pub name: Option<&'a str>,
    /// Override from this field or an enclosing one.
    pub tag: Option<Tag>,
}

impl<'a> Context<'a> {
    /// Context of a top-level value.
    pub fn root() -> Context<'static> {
        Context::default()
    }

    /// Context of a value under `name` with no override.
    pub fn named(name: &'a str) -> Self {
        Context {
            name: Some(name),
            tag: None,
        }
    }

    /// Context of a sequence element.
    pub fn element(self) -> Context<'static> {
        Context {
            name: None,
            tag: self.tag,
        }
    }

    /// Context of a map entry.
    pub fn entry<'k>(self, key: &'k str) -> Context<'k> {
        Context {
            name: Some(key),
            tag: self.tag,
        }
    }

    /// Context of a record field; the field's own override wins.
    pub fn field<'k>(self, name: &'k str, tag: Option<Tag>) -> Context<'k> {
        Context {
            name: Some(name),
            tag: tag.or(self.tag),
        }
    }
}

/// A value the scrubber can walk and redact in place.
pub trait Scrub {
    /// Redact `self` in place.
    ///
    /// Containers must visit children through [`Scrubber::visit`] so that
    /// `Ignore` overrides are honoured.
    fn scrub(&mut self, scrubber: &Scrubber, ctx: Context<'_>);

    /// Shape of this value.
    fn shape(&self) -> Shape {
        Shape::Composite
    }
}

/// A typed record with named fields.
pub trait Record {
    /// Hand every scrubbable field to `fields`.
    fn visit_fields(&mut self, fields: &mut Fields<'_>);
}

/// Receives the fields of a [`Record`].
pub struct Fields<'s> {
    scrubber: &'s Scrubber,
    inherited: Option<Tag>,
}

impl<'s> Fields<'s> {
    pub(crate) fn new(scrubber: &'s Scrubber, inherited: Option<Tag>) -> Self {
        Self {
            scrubber,
            inherited,
        }
    }

    /// Visit a field without an override.
    pub fn field<T: Scrub + ?Sized>(&mut self, name: &str, value: &mut T) -> &mut Self {
        self.visit(name, None, value)
    }

    /// Visit a field with an explicit override.
    pub fn tagged<T: Scrub + ?Sized>(&mut self, name: &str, tag: Tag, value: &mut T) -> &mut Self {
        self.visit(name, Some(tag), value)
    }

    /// Visit a field with an optional override.
    pub fn visit<T: Scrub + ?Sized>(
        &mut self,
        name: &str,
        tag: Option<Tag>,
        value: &mut T,
    ) -> &mut Self {
        let ctx = Context {
            name: None,
            tag: self.inherited,
        }
        .field(name, tag);
        self.scrubber.visit(value, ctx);
        self
    }
}

/// Walk the fields of a record.
pub fn scrub_record<R: Record + ?Sized>(record: &mut R, scrubber: &Scrubber, ctx: Context<'_>) {
    if ctx.tag == Some(Tag::Ignore) {
        return;
    }
    let mut fields = Fields::new(scrubber, ctx.tag);
    record.visit_fields(&mut fields);
}

/// Implement [`Record`] and [`Scrub`] for a struct from its field list.
///
/// Field names default to the identifier; `as "Name"` overrides it and
/// `=> Hash | Redact | Ignore` attaches an override.
///
/// ```
/// use scrubber::{scrub_record, Scrubber};
///
/// #[derive(Clone)]
/// struct Login {
///     username: String,
///     email: String,
///     note: String,
/// }
///
/// scrub_record!(Login {
///     username,
///     email => Ignore,
///     note as "Comment",
/// });
///
/// let mut login = Login {
///     username: "foo".into(),
///     email: "foo@bar.com".into(),
///     note: "ping foo@bar.com".into(),
/// };
/// Scrubber::global().scrub(&mut login).unwrap();
/// assert_eq!(login.username, "[redacted:md5:acbd18db4cc2f85cedef654fccc4a4d8]");
/// assert_eq!(login.email, "foo@bar.com");
/// assert_eq!(login.note, "ping [redacted:email]");
/// ```
#[macro_export]
macro_rules! scrub_record {
    ($ty:ty { $($field:ident $(as $name:literal)? $(=> $tag:ident)?),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn visit_fields(&mut self, fields: &mut $crate::Fields<'_>) {
                $(
                    fields.visit(
                        $crate::__scrub_field_name!($field $(, $name)?),
                        $crate::__scrub_field_tag!($($tag)?),
                        &mut self.$field,
                    );
                )*
            }
        }

        impl $crate::Scrub for $ty {
            fn scrub(&mut self, scrubber: &$crate::Scrubber, ctx: $crate::Context<'_>) {
                $crate::walk::scrub_record(self, scrubber, ctx)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __scrub_field_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $name:literal) => {
        $name
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __scrub_field_tag {
    () => {
        ::core::option::Option::None
    };
    ($tag:ident) => {
        ::core::option::Option::Some($crate::Tag::$tag)
    };
}

impl Scrub for String {
    fn scrub(&mut self, scrubber: &Scrubber, ctx: Context<'_>) {
        let action = scrubber.leaf_action(ctx);
        scrubber.scrub_string(self, action);
    }

    fn shape(&self) -> Shape {
        Shape::Text
    }
}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scrub for $ty {
                fn scrub(&mut self, _: &Scrubber, _: Context<'_>) {}

                fn shape(&self) -> Shape {
                    Shape::Scalar
                }
            }
        )*
    };
}

impl_scalar!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl<T: Scrub> Scrub for Option<T> {
    fn scrub(&mut self, scrubber: &Scrubber, ctx: Context<'_>) {
        if let Some(value) = self {
            value.scrub(scrubber, ctx);
        }
    }

    fn shape(&self) -> Shape {
        match self {
            Some(value) => value.shape(),
            None => Shape::Scalar,
        }
    }
}

impl<T: Scrub + ?Sized> Scrub for Box<T> {
    fn scrub(&mut self, scrubber: &Scrubber, ctx: Context<'_>) {
        (**self).scrub(scrubber, ctx);
    }

    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Scrub> Scrub for [T] {
    fn scrub(&mut self, scrubber: &Scrubber, ctx: Context<'_>) {
        for item in self.iter_mut() {
            scrubber.visit(item, ctx.element());
        }
    }
}

impl<T: Scrub, const N: usize> Scrub for [T; N] {
    fn scrub(&mut self, scrubber: &Scrubber, ctx: Context<'_>) {
        self.as_mut_slice().scrub(scrubber, ctx);
    }
}

impl<T: Scrub> Scrub for Vec<T> {
    fn scrub(&mut self, scrubber: &Scrubber, ctx: Context<'_>) {
        self.as_mut_slice().scrub(scrubber, ctx);
    }
}

impl<T: Scrub> Scrub for VecDeque<T> {
    fn scrub(&mut self, scrubber: &Scrubber, ctx: Context<'_>) {
        for item in self.iter_mut() {
            scrubber.visit(item, ctx.element());
        }
    }
}

impl<K: AsRef<str>, V: Scrub, S: BuildHasher> Scrub for HashMap<K, V, S> {
    fn scrub(&mut self, scrubber: &Scrubber, ctx: Context<'_>) {
        for (key, value) in self.iter_mut() {
            scrubber.visit(value, ctx.entry(key.as_ref()));
        }
    }
}

impl<K: AsRef<str>, V: Scrub> Scrub for BTreeMap<K, V> {
    fn scrub(&mut self, scrubber: &Scrubber, ctx: Context<'_>) {
        for (key, value) in self.iter_mut() {
            scrubber.visit(value, ctx.entry(key.as_ref()));
        }
    }
}

/// A value its owner vouches for; the scrubber never looks inside.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Trusted<T>(pub T);

impl<T> Trusted<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Trusted<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Trusted<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> Scrub for Trusted<T> {
    fn scrub(&mut self, _: &Scrubber, _: Context<'_>) {}

    fn shape(&self) -> Shape {
        Shape::Opaque
    }
}
