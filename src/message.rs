use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a service type, e.g. `std_srvs/SetBool`.
///
/// The request and response type names are derived from the base name by
/// appending the literal suffixes `Request` and `Response`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTypeName {
    package_name: String,
    type_name: String,
}

impl ServiceTypeName {
    pub fn new(package_name: &str, type_name: &str) -> Self {
        Self {
            package_name: package_name.to_owned(),
            type_name: type_name.to_owned(),
        }
    }

    /// Parses a `"package/ServiceName"` string. Returns `None` if the name
    /// has no package separator.
    pub fn parse(full_name: &str) -> Option<Self> {
        let (package_name, type_name) = full_name.split_once('/')?;
        if package_name.is_empty() || type_name.is_empty() {
            return None;
        }
        Some(Self::new(package_name, type_name))
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn base_name(&self) -> String {
        format!("{}/{}", self.package_name, self.type_name)
    }

    pub fn request_type_name(&self) -> String {
        self.base_name() + "Request"
    }

    pub fn response_type_name(&self) -> String {
        self.base_name() + "Response"
    }
}

impl fmt::Display for ServiceTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package_name, self.type_name)
    }
}
