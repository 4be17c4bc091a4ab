//! Cluster management resource types.
//!
//! Each type is an immutable value built through its builder; every field
//! tracks whether it was explicitly set. See [`clustermgmt_model_core`] for
//! the shared machinery.
//!
//! ```
//! use clustermgmt_model::{
//!     marshal_monitoring_stack_resource_to_string, unmarshal_monitoring_stack_resource,
//!     MonitoringStackResourceBuilder,
//! };
//!
//! let limits = MonitoringStackResourceBuilder::new().cpu("100m").build().unwrap();
//! let json = marshal_monitoring_stack_resource_to_string(&limits);
//! assert_eq!(json, r#"{"cpu":"100m"}"#);
//!
//! let back = unmarshal_monitoring_stack_resource(json.as_str()).unwrap();
//! assert_eq!(back.get_memory(), None);
//! assert_eq!(back, limits);
//! ```

mod cluster;
mod ingress;
mod monitoring;

pub use cluster::*;
pub use ingress::*;
pub use monitoring::*;

pub use clustermgmt_model_core::{
    is_empty, kind_of, Binding, Build, BuildError, FieldSet, Identifiable, JsonError, List,
    ListBuilder, Resource, Source,
};
