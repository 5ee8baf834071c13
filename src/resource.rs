//! Resource groups exposed by the cAdvisor REST API and their path templates.

/// Placeholder substituted with a container identifier.
pub const CONTAINER_ID_PLACEHOLDER: &str = "{container_id}";

/// One of the three cAdvisor resource groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// `/machine`: host hardware and OS information.
    Machine,
    /// `/spec/{container_id}`: the specification of one container.
    ContainerSpec,
    /// `/stats/{container_id}`: resource usage of one or all containers.
    ContainerStats,
}

impl Resource {
    /// Returns the path template of this resource group.
    pub const fn template(self) -> &'static str {
        match self {
            Resource::Machine => "/machine",
            Resource::ContainerSpec => "/spec/{container_id}",
            Resource::ContainerStats => "/stats/{container_id}",
        }
    }

    /// Builds the request path for this resource group.
    ///
    /// The identifier is substituted verbatim into templates that carry a placeholder and
    /// ignored otherwise. Without an identifier:
    ///
    /// - [`Resource::Machine`] yields `/machine`.
    /// - [`Resource::ContainerStats`] yields `/stats/`, addressing all containers.
    /// - [`Resource::ContainerSpec`] keeps the placeholder, so the request is malformed.
    ///   Callers must supply an identifier for this resource.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cadvisor_client::Resource;
    /// assert_eq!(Resource::ContainerStats.path(Some("abc123")), "/stats/abc123");
    /// assert_eq!(Resource::ContainerStats.path(None), "/stats/");
    /// assert_eq!(Resource::ContainerSpec.path(None), "/spec/{container_id}");
    /// ```
    pub fn path(self, container_id: Option<&str>) -> String {
        let template = self.template();
        if !template.contains(CONTAINER_ID_PLACEHOLDER) {
            return template.to_owned();
        }
        match (self, container_id) {
            (_, Some(id)) => template.replace(CONTAINER_ID_PLACEHOLDER, id),
            (Resource::ContainerStats, None) => template.replace(CONTAINER_ID_PLACEHOLDER, ""),
            (_, None) => template.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_path_ignores_identifier() {
        assert_eq!(Resource::Machine.path(None), "/machine");
        assert_eq!(Resource::Machine.path(Some("abc123")), "/machine");
    }

    #[test]
    fn test_container_stats_paths() {
        assert_eq!(Resource::ContainerStats.path(Some("abc123")), "/stats/abc123");
        assert_eq!(Resource::ContainerStats.path(None), "/stats/");
    }

    #[test]
    fn test_container_spec_paths() {
        assert_eq!(Resource::ContainerSpec.path(Some("abc123")), "/spec/abc123");
        assert_eq!(Resource::ContainerSpec.path(None), "/spec/{container_id}");
    }

    #[test]
    fn test_identifier_is_not_validated() {
        assert_eq!(
            Resource::ContainerStats.path(Some("docker/0a1b2c")),
            "/stats/docker/0a1b2c"
        );
        assert_eq!(Resource::ContainerSpec.path(Some("")), "/spec/");
    }
}
