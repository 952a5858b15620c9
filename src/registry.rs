use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::message::ServiceTypeName;

/// Descriptor of a loaded message type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageType {
    package: String,
    name: String,
}

impl MessageType {
    pub fn new(package: &str, name: &str) -> Self {
        Self {
            package: package.to_owned(),
            name: name.to_owned(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.package, self.name)
    }
}

/// Opaque, cheaply clonable reference to a loaded message type descriptor.
pub type TypeHandle = Arc<MessageType>;

/// Maps a fully-qualified message type name to a loaded type descriptor.
///
/// Absence is `None`; the registry never fails in any other way. Lookups are
/// assumed to be in-memory and near-instant, so there are no timeout or
/// retry semantics.
pub trait TypeRegistry {
    fn resolve(&self, type_name: &str) -> Option<TypeHandle>;
}

/// In-memory [`TypeRegistry`], keyed by package and unqualified type name.
#[derive(Debug, Default)]
pub struct MessageCatalog {
    messages: HashMap<String, HashMap<String, TypeHandle>>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-populated with the common `std_srvs` services, so a
    /// generic tool can call them without any registration step.
    pub fn with_std_srvs() -> Self {
        let mut catalog = Self::new();
        for service in ["Empty", "SetBool", "Trigger"] {
            catalog.register_service(&ServiceTypeName::new("std_srvs", service));
        }
        catalog
    }

    /// Registers one message type under its package and unqualified name.
    pub fn insert(&mut self, message: MessageType) {
        self.messages
            .entry(message.package().to_owned())
            .or_default()
            .insert(message.name().to_owned(), Arc::new(message));
    }

    /// Registers a service type together with its `Request` and `Response`
    /// message types.
    pub fn register_service(&mut self, service: &ServiceTypeName) {
        let package = service.package_name();
        let name = service.type_name();
        self.insert(MessageType::new(package, name));
        self.insert(MessageType::new(package, &format!("{name}Request")));
        self.insert(MessageType::new(package, &format!("{name}Response")));
    }
}

impl TypeRegistry for MessageCatalog {
    fn resolve(&self, type_name: &str) -> Option<TypeHandle> {
        let (package, name) = type_name.split_once('/')?;
        self.messages.get(package)?.get(name).cloned()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert_and_resolve() {
        let mut catalog = MessageCatalog::new();
        catalog.insert(MessageType::new("std_msgs", "Header"));

        let handle = catalog.resolve("std_msgs/Header").unwrap();
        assert_eq!(handle.package(), "std_msgs");
        assert_eq!(handle.name(), "Header");
        assert_eq!(handle.full_name(), "std_msgs/Header");
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        let catalog = MessageCatalog::with_std_srvs();
        assert!(catalog.resolve("std_srvs/NoSuchSrv").is_none());
        assert!(catalog.resolve("bogus/SetBool").is_none());
    }

    #[test]
    fn malformed_names_resolve_to_none() {
        let catalog = MessageCatalog::with_std_srvs();
        assert!(catalog.resolve("SetBool").is_none());
        assert!(catalog.resolve("").is_none());
    }

    #[test]
    fn register_service_covers_all_three_types() {
        let mut catalog = MessageCatalog::new();
        catalog.register_service(&ServiceTypeName::new("example_interfaces", "AddTwoInts"));

        for name in [
            "example_interfaces/AddTwoInts",
            "example_interfaces/AddTwoIntsRequest",
            "example_interfaces/AddTwoIntsResponse",
        ] {
            let handle = catalog.resolve(name).unwrap();
            assert_eq!(handle.full_name(), name);
        }
    }

    #[test]
    fn std_srvs_starter_set() {
        let catalog = MessageCatalog::with_std_srvs();
        for service in ["Empty", "SetBool", "Trigger"] {
            assert!(catalog.resolve(&format!("std_srvs/{service}")).is_some());
            assert!(catalog
                .resolve(&format!("std_srvs/{service}Request"))
                .is_some());
            assert!(catalog
                .resolve(&format!("std_srvs/{service}Response"))
                .is_some());
        }
    }
}
