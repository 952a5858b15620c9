#![warn(
    rust_2018_idioms,
    elided_lifetimes_in_paths,
    clippy::all,
    clippy::nursery
)]

//! Dynamic service type resolution for generic ROS-style service tooling.
//!
//! A service-calling tool that should work with *any* service type cannot
//! name request and response types at compile time. This crate resolves them
//! at runtime instead: [`DynamicService`] takes a service type name such as
//! `"std_srvs/SetBool"` and looks up the base, `Request`, and `Response`
//! types in a [`TypeRegistry`].
//!
//! ```
//! use ros_service_tools::{DynamicService, MessageCatalog};
//!
//! let catalog = MessageCatalog::with_std_srvs();
//! let srv = DynamicService::load(&catalog, "std_srvs/SetBool").unwrap();
//! assert_eq!(srv.request().full_name(), "std_srvs/SetBoolRequest");
//! ```

pub mod dynamic_service;
pub mod error;
pub mod message;
pub mod registry;

pub use dynamic_service::DynamicService;
pub use error::ResolveError;
pub use message::ServiceTypeName;
pub use registry::{MessageCatalog, MessageType, TypeHandle, TypeRegistry};
