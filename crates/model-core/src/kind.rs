//! Wire kind names.

/// Whether a resource is a plain record or an addressable server object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceClass {
    /// Plain record; lists of it are written as bare JSON arrays.
    Struct,
    /// Object with `kind`, `id`, `href` and a link flag; lists of it are
    /// written as `{"kind", "href", "items"}` envelopes.
    Class,
}

/// The six `kind` names used on the wire for one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kinds {
    /// `<Type>`
    pub object: &'static str,
    /// `<Type>Link`
    pub link: &'static str,
    /// `<Type>Nil`
    pub nil: &'static str,
    /// `<Type>List`
    pub list: &'static str,
    /// `<Type>ListLink`
    pub list_link: &'static str,
    /// `<Type>ListNil`
    pub list_nil: &'static str,
}

/// Builds the [`Kinds`] of a type from its object kind name.
///
/// ```
/// use clustermgmt_model_core::{kinds, Kinds};
///
/// const KINDS: Kinds = kinds!("Cluster");
/// assert_eq!(KINDS.list_link, "ClusterListLink");
/// ```
#[macro_export]
macro_rules! kinds {
    ($kind:literal) => {
        $crate::Kinds {
            object: $kind,
            link: concat!($kind, "Link"),
            nil: concat!($kind, "Nil"),
            list: concat!($kind, "List"),
            list_link: concat!($kind, "ListLink"),
            list_nil: concat!($kind, "ListNil"),
        }
    };
}
