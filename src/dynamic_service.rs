use log::error;

use crate::{
    error::ResolveError,
    registry::{TypeHandle, TypeRegistry},
};

/// Resolves the types of a service message at runtime.
///
/// Given a service type name such as `"std_srvs/SetBool"`, resolution looks
/// up three types in the registry, in this fixed order: the base service
/// type, the request type (suffix `Request`), and the response type (suffix
/// `Response`). Either all three resolve, or no instance is produced.
#[derive(Debug, Clone)]
pub struct DynamicService {
    name: String,
    base: TypeHandle,
    request: TypeHandle,
    response: TypeHandle,
}

impl DynamicService {
    /// Resolves all three types of the named service.
    ///
    /// Resolution stops at the first type the registry does not know; the
    /// error names the exact concatenated type name that failed.
    pub fn load<R>(registry: &R, name: &str) -> Result<Self, ResolveError>
    where
        R: TypeRegistry + ?Sized,
    {
        let base = Self::load_submsg(registry, name, "")?;
        let request = Self::load_submsg(registry, name, "Request")?;
        let response = Self::load_submsg(registry, name, "Response")?;
        Ok(Self {
            name: name.to_owned(),
            base,
            request,
            response,
        })
    }

    /// Like [`load`](Self::load), but on failure logs the diagnostic and
    /// terminates the process with a non-zero status.
    ///
    /// Intended for generic service-calling tools, which cannot do anything
    /// useful with a partially resolved service type.
    pub fn load_or_exit<R>(registry: &R, name: &str) -> Self
    where
        R: TypeRegistry + ?Sized,
    {
        match Self::load(registry, name) {
            Ok(service) => service,
            Err(err) => {
                error!("{err}");
                std::process::exit(1);
            }
        }
    }

    fn load_submsg<R>(registry: &R, name: &str, suffix: &str) -> Result<TypeHandle, ResolveError>
    where
        R: TypeRegistry + ?Sized,
    {
        let full_name = format!("{name}{suffix}");
        registry
            .resolve(&full_name)
            .ok_or(ResolveError::UnresolvableType(full_name))
    }

    /// The service type name this instance was resolved from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> &TypeHandle {
        &self.base
    }

    pub fn request(&self) -> &TypeHandle {
        &self.request
    }

    pub fn response(&self) -> &TypeHandle {
        &self.response
    }
}
