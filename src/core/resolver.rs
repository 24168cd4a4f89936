use crate::core::{ConfigProvider, DeviceCategory};
use crate::utils::error::Result;
use crate::utils::validation::validate_view_name;

/// Category-to-prefix mapping. Built once at startup, read-only afterwards;
/// Normal always maps to the empty prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMapping {
    mobile: String,
    tablet: String,
}

impl PrefixMapping {
    pub fn new(mobile: String, tablet: String) -> Self {
        Self { mobile, tablet }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            config.mobile_prefix().to_string(),
            config.tablet_prefix().to_string(),
        )
    }

    pub fn prefix_for(&self, device: DeviceCategory) -> &str {
        match device {
            DeviceCategory::Normal => "",
            DeviceCategory::Mobile => &self.mobile,
            DeviceCategory::Tablet => &self.tablet,
        }
    }
}

impl Default for PrefixMapping {
    fn default() -> Self {
        Self::new("mobile/".to_string(), "tablet/".to_string())
    }
}

/// Maps a logical view name and a device category onto the template path the
/// rendering engine should load.
#[derive(Debug, Clone)]
pub struct ViewResolver {
    prefixes: PrefixMapping,
}

impl ViewResolver {
    pub fn new(prefixes: PrefixMapping) -> Self {
        Self { prefixes }
    }

    /// Deterministic: the same (view name, device) pair always yields the same
    /// path. An empty view name is rejected rather than producing a bare prefix.
    pub fn resolve(&self, view_name: &str, device: DeviceCategory) -> Result<String> {
        validate_view_name("view_name", view_name)?;

        let prefix = self.prefixes.prefix_for(device);
        Ok(format!("{}{}", prefix, view_name))
    }
}

impl Default for ViewResolver {
    fn default() -> Self {
        Self::new(PrefixMapping::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_keeps_view_name() {
        let resolver = ViewResolver::default();
        assert_eq!(
            resolver.resolve("home", DeviceCategory::Normal).unwrap(),
            "home"
        );
    }

    #[test]
    fn test_mobile_prepends_prefix() {
        let resolver = ViewResolver::default();
        assert_eq!(
            resolver.resolve("home", DeviceCategory::Mobile).unwrap(),
            "mobile/home"
        );
    }

    #[test]
    fn test_tablet_prepends_prefix() {
        let resolver = ViewResolver::default();
        assert_eq!(
            resolver.resolve("home", DeviceCategory::Tablet).unwrap(),
            "tablet/home"
        );
    }

    #[test]
    fn test_custom_prefixes() {
        let resolver = ViewResolver::new(PrefixMapping::new(
            "m/".to_string(),
            "t/".to_string(),
        ));
        assert_eq!(
            resolver.resolve("index", DeviceCategory::Mobile).unwrap(),
            "m/index"
        );
        assert_eq!(
            resolver.resolve("index", DeviceCategory::Tablet).unwrap(),
            "t/index"
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = ViewResolver::default();
        let first = resolver.resolve("about", DeviceCategory::Mobile).unwrap();
        let second = resolver.resolve("about", DeviceCategory::Mobile).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_view_name_is_rejected() {
        let resolver = ViewResolver::default();
        assert!(resolver.resolve("", DeviceCategory::Normal).is_err());
        assert!(resolver.resolve("", DeviceCategory::Mobile).is_err());
    }

    #[test]
    fn test_nested_view_name() {
        let resolver = ViewResolver::default();
        assert_eq!(
            resolver
                .resolve("shop/cart", DeviceCategory::Tablet)
                .unwrap(),
            "tablet/shop/cart"
        );
    }
}
