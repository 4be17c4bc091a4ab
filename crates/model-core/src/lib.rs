//! Presence-tracked data binding for clustermgmt resources.
//!
//! Every resource type is an immutable value paired with a fluent builder.
//! Values remember which fields were explicitly assigned in a [`FieldSet`],
//! so a field set to its zero value is told apart from one never set, and
//! only present fields are written to JSON.
//!
//! Resource types are declared with [`resource!`]; lists of them are
//! [`List`] values built with [`ListBuilder`]. The functions in this crate
//! root move values to and from JSON.
//!
//! ```
//! use clustermgmt_model_core::{marshal_to_string, resource, unmarshal, Resource};
//!
//! resource! {
//!     pub struct Limits("Limits") {
//!         cpu: string = "cpu",
//!         memory: string = "memory",
//!     }
//! }
//!
//! let limits: Limits = unmarshal(r#"{"cpu":"100m"}"#).unwrap();
//! assert_eq!(limits.get_cpu(), Some("100m"));
//! assert_eq!(limits.get_memory(), None);
//! assert!(!Resource::is_empty(&limits));
//! assert_eq!(marshal_to_string(&limits), r#"{"cpu":"100m"}"#);
//! ```

mod binding;
mod codec;
mod error;
mod kind;
mod list;
mod macros;
mod presence;
mod scalar;

pub use binding::{
    is_empty, kind_of, Binding, Build, Identifiable, Resource, HREF_BIT, ID_BIT, LINK_BIT,
};
pub use codec::{
    marshal, marshal_list, marshal_to_string, marshal_to_vec, unmarshal, unmarshal_list,
    unmarshal_list_envelope,
};
pub use error::BuildError;
pub use kind::{Kinds, ResourceClass};
pub use list::{List, ListBuilder};
pub use presence::{field_bit, FieldSet};
pub use scalar::{Scalar, ScalarRef};

pub use clustermgmt_json::{JsonError, Source};

#[doc(hidden)]
pub mod __private {
    pub use crate::binding::{skip_unknown, Identity, IdentitySlot};
    pub use clustermgmt_json::{JsonError, JsonReader, JsonWriter, Source};
    pub use paste::paste;
}
