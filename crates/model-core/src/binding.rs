//! Traits every resource type implements.

use std::fmt::Debug;

use clustermgmt_json::{JsonError, JsonReader, JsonWriter};

use crate::{BuildError, FieldSet, Kinds, ResourceClass};

/// Bit recording that an identifiable value is only a link.
pub const LINK_BIT: u32 = 0;
/// Bit recording that `id` was set.
pub const ID_BIT: u32 = 1;
/// Bit recording that `href` was set.
pub const HREF_BIT: u32 = 2;

/// A mutable, fluent constructor for an immutable value.
///
/// `build` does not consume or change the builder, so it may be called any
/// number of times.
pub trait Build: Clone + Debug + Default {
    type Target;

    fn build(&self) -> Result<Self::Target, BuildError>;

    /// Replaces the whole builder state with a deep copy of `value`.
    /// `None` leaves the builder untouched.
    #[must_use]
    fn copy(self, value: Option<&Self::Target>) -> Self;
}

/// A value that can be written to and read from JSON, and turned back into a
/// builder.
pub trait Binding: Clone + Debug + PartialEq + Sized {
    type Builder: Build<Target = Self>;

    /// Builder pre-filled with a deep copy of `self`.
    fn to_builder(&self) -> Self::Builder {
        Self::Builder::default().copy(Some(self))
    }

    fn write_json(&self, writer: &mut JsonWriter);

    fn read_json(reader: &mut JsonReader<'_>) -> Result<Self, JsonError>;
}

/// A presence-tracked resource type.
pub trait Resource: Binding + Default {
    const KINDS: Kinds;
    const CLASS: ResourceClass;

    fn fields(&self) -> FieldSet;

    /// `true` when no declared field is present.
    fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    fn builder() -> Self::Builder {
        Self::Builder::default()
    }
}

/// A resource addressable on the server: it carries `kind`, `id` and `href`
/// and may be a link standing in for the full object.
pub trait Identifiable: Resource {
    fn link(&self) -> bool {
        self.fields().contains(LINK_BIT)
    }

    /// `<Type>Link` when the value is a link, `<Type>` otherwise.
    fn kind(&self) -> &'static str {
        if self.link() {
            Self::KINDS.link
        } else {
            Self::KINDS.object
        }
    }

    fn id(&self) -> &str {
        self.get_id().unwrap_or_default()
    }

    fn get_id(&self) -> Option<&str>;

    fn href(&self) -> &str {
        self.get_href().unwrap_or_default()
    }

    fn get_href(&self) -> Option<&str>;
}

/// Kind of a possibly missing value: `<Type>Nil` for `None`.
pub fn kind_of<T: Identifiable>(value: Option<&T>) -> &'static str {
    value.map_or(T::KINDS.nil, Identifiable::kind)
}

/// `true` for `None` and for values with no declared field present.
pub fn is_empty<T: Resource>(value: Option<&T>) -> bool {
    value.map_or(true, Resource::is_empty)
}

/// `id` and `href` storage of identifiable resources.
#[doc(hidden)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub href: String,
}

/// Identity storage slot of a generated resource: `()` for plain records,
/// [`Identity`] for identifiable ones.
#[doc(hidden)]
pub trait IdentitySlot: Clone + Debug + Default + PartialEq {
    const CLASS: ResourceClass;

    /// First bit available to declared fields.
    const OFFSET: u32;

    fn is_empty(fields: FieldSet) -> bool;

    fn write_members(&self, fields: FieldSet, kinds: &Kinds, writer: &mut JsonWriter);

    /// Reads `key` if it is one of the identity members. Returns `false`,
    /// without consuming anything, for any other key.
    fn read_member(
        &mut self,
        fields: &mut FieldSet,
        kinds: &Kinds,
        reader: &mut JsonReader<'_>,
        key: &str,
    ) -> Result<bool, JsonError>;
}

impl IdentitySlot for () {
    const CLASS: ResourceClass = ResourceClass::Struct;
    const OFFSET: u32 = 0;

    fn is_empty(fields: FieldSet) -> bool {
        fields.is_empty()
    }

    fn write_members(&self, _: FieldSet, _: &Kinds, _: &mut JsonWriter) {}

    fn read_member(
        &mut self,
        _: &mut FieldSet,
        _: &Kinds,
        _: &mut JsonReader<'_>,
        _: &str,
    ) -> Result<bool, JsonError> {
        Ok(false)
    }
}

impl IdentitySlot for Identity {
    const CLASS: ResourceClass = ResourceClass::Class;
    const OFFSET: u32 = HREF_BIT + 1;

    // The link flag alone does not make a value non-empty.
    fn is_empty(fields: FieldSet) -> bool {
        fields.without(LINK_BIT).is_empty()
    }

    fn write_members(&self, fields: FieldSet, kinds: &Kinds, writer: &mut JsonWriter) {
        writer.write_key("kind");
        writer.write_str(if fields.contains(LINK_BIT) {
            kinds.link
        } else {
            kinds.object
        });
        if fields.contains(ID_BIT) {
            writer.write_key("id");
            writer.write_str(&self.id);
        }
        if fields.contains(HREF_BIT) {
            writer.write_key("href");
            writer.write_str(&self.href);
        }
    }

    fn read_member(
        &mut self,
        fields: &mut FieldSet,
        kinds: &Kinds,
        reader: &mut JsonReader<'_>,
        key: &str,
    ) -> Result<bool, JsonError> {
        match key {
            "kind" => {
                let kind = reader.read_str()?;
                *fields = fields.set(LINK_BIT, kind == kinds.link);
            }
            "id" => {
                self.id = reader.read_str()?;
                *fields = fields.with(ID_BIT);
            }
            "href" => {
                self.href = reader.read_str()?;
                *fields = fields.with(HREF_BIT);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Skips the value of a key the resource does not declare.
#[doc(hidden)]
pub fn skip_unknown(
    reader: &mut JsonReader<'_>,
    resource: &'static str,
    key: &str,
) -> Result<(), JsonError> {
    tracing::trace!(resource, key, "skipping unknown field");
    reader.skip_value()
}
