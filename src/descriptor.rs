//! Plugin descriptor — the static record identifying this plugin to the host.

use serde::Serialize;

/// Lifecycle hook the host triggers via the hidden `post-install` command.
pub(crate) type PostInstallHook = fn() -> anyhow::Result<()>;

/// Target audience a plugin's commands operate against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Target {
    /// Not scoped to any particular backend.
    Global,
    Kubernetes,
    MissionControl,
}

/// Command group the host files the plugin under in its help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) enum CmdGroup {
    Admin,
    Build,
    Manage,
    Run,
    System,
}

/// Static metadata describing this plugin binary.
///
/// Serialized (minus the hook) as part of the `info` command output the host
/// parses during discovery. Field names are part of the wire format.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PluginDescriptor {
    /// Unique plugin name, a single token (e.g. "imgpkg").
    pub name: String,

    /// Human-readable description, printed verbatim by `describe`.
    pub description: String,

    /// Target audience for the plugin's commands.
    pub target: Target,

    /// Plugin version, a semantic version (leading "v" tolerated).
    pub version: String,

    /// Git commit the binary was built from.
    #[serde(rename = "buildSHA")]
    pub build_sha: String,

    /// Command group the host files the plugin under.
    pub group: CmdGroup,

    /// Invoked by the hidden `post-install` command. None means the plugin
    /// needs no post-install configuration.
    #[serde(skip)]
    pub post_install_hook: Option<PostInstallHook>,
}

impl PluginDescriptor {
    /// Check the descriptor invariants the host relies on.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.name.is_empty() {
            return Err(DescriptorError::EmptyName);
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(DescriptorError::InvalidName {
                name: self.name.clone(),
            });
        }
        parse_version(&self.version).map_err(|source| DescriptorError::InvalidVersion {
            version: self.version.clone(),
            source,
        })?;
        Ok(())
    }
}

/// Parse a semantic version, tolerating the leading "v" release tags carry.
fn parse_version(version: &str) -> Result<semver::Version, semver::Error> {
    semver::Version::parse(version.strip_prefix('v').unwrap_or(version))
}

/// The descriptor plus runtime metadata, the full `info` command payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PluginInfo<'a> {
    #[serde(flatten)]
    pub descriptor: &'a PluginDescriptor,

    /// Version of the plugin-runtime layer this binary was built against.
    /// Must be a valid semantic version.
    pub plugin_runtime_version: &'a str,
}

impl<'a> PluginInfo<'a> {
    /// Combine the descriptor with the runtime version, enforcing the semver
    /// invariant on the latter.
    pub fn new(
        descriptor: &'a PluginDescriptor,
        runtime_version: &'a str,
    ) -> Result<Self, DescriptorError> {
        parse_version(runtime_version).map_err(|source| DescriptorError::InvalidVersion {
            version: runtime_version.to_string(),
            source,
        })?;
        Ok(Self {
            descriptor,
            plugin_runtime_version: runtime_version,
        })
    }
}

/// Descriptor invariant violations. All of these are unrecoverable
/// configuration errors surfaced at plugin construction.
#[derive(Debug, thiserror::Error)]
pub(crate) enum DescriptorError {
    #[error("plugin name is empty")]
    EmptyName,
    #[error("plugin name '{name}' contains whitespace")]
    InvalidName { name: String },
    #[error("'{version}' is not a valid semantic version: {source}")]
    InvalidVersion {
        version: String,
        source: semver::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> PluginDescriptor {
        PluginDescriptor {
            name: "imgpkg".to_string(),
            description: "Store configuration and image references as OCI artifacts".to_string(),
            target: Target::Global,
            version: "v0.1.0".to_string(),
            build_sha: "abc1234".to_string(),
            group: CmdGroup::Manage,
            post_install_hook: None,
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_descriptor() {
        assert!(descriptor().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut desc = descriptor();
        desc.name = String::new();
        assert!(matches!(desc.validate(), Err(DescriptorError::EmptyName)));
    }

    #[test]
    fn test_validate_rejects_name_with_whitespace() {
        let mut desc = descriptor();
        desc.name = "img pkg".to_string();
        assert!(matches!(
            desc.validate(),
            Err(DescriptorError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_semver_version() {
        let mut desc = descriptor();
        desc.version = "latest".to_string();
        assert!(matches!(
            desc.validate(),
            Err(DescriptorError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_version_without_v_prefix() {
        let mut desc = descriptor();
        desc.version = "1.2.3-rc.1".to_string();
        assert!(desc.validate().is_ok());
    }

    #[test]
    fn test_descriptor_json_field_names() {
        let value = serde_json::to_value(descriptor()).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["name"], "imgpkg");
        assert_eq!(obj["target"], "global");
        assert_eq!(obj["group"], "Manage");
        assert_eq!(obj["buildSHA"], "abc1234");
        // The hook is an internal function pointer, never serialized.
        assert!(!obj.contains_key("postInstallHook"));
    }

    #[test]
    fn test_plugin_info_flattens_descriptor_fields() {
        let desc = descriptor();
        let info = PluginInfo::new(&desc, "0.2.0").unwrap();
        let value = serde_json::to_value(&info).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["name"], "imgpkg");
        assert_eq!(obj["version"], "v0.1.0");
        assert_eq!(obj["pluginRuntimeVersion"], "0.2.0");
    }

    #[test]
    fn test_plugin_info_rejects_invalid_runtime_version() {
        let desc = descriptor();
        assert!(matches!(
            PluginInfo::new(&desc, "not-a-version"),
            Err(DescriptorError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_plugin_info_round_trips_through_json() {
        let desc = descriptor();
        let info = PluginInfo::new(&desc, "0.2.0").unwrap();
        let json = serde_json::to_string(&info).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["description"], desc.description);
        assert_eq!(parsed["target"], "global");
        assert_eq!(parsed["pluginRuntimeVersion"], "0.2.0");
    }
}
