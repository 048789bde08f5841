use shared::AssetConfig;
use web_sys::Element;

pub const MOUNT_ID: &str = "app";
pub const ASSET_BASE_ATTR: &str = "data-asset-base";

/// Builds the asset configuration from the optional `data-asset-base` value.
///
/// A bad value is logged and replaced by the default so the header still renders.
pub fn resolve_asset_config(raw: Option<String>) -> AssetConfig {
    match raw {
        None => AssetConfig::default(),
        Some(raw) => match AssetConfig::new(&raw) {
            Ok(config) => {
                log::info!("Using asset base {}", config.base_url());
                config
            }
            Err(e) => {
                log::warn!(
                    "Ignoring {}=\"{}\": {}; falling back to {}",
                    ASSET_BASE_ATTR,
                    raw,
                    e,
                    AssetConfig::DEFAULT_BASE
                );
                AssetConfig::default()
            }
        },
    }
}

/// The element with id `app`, else `<body>`.
pub fn mount_point() -> Option<Element> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id(MOUNT_ID)
        .or_else(|| document.body().map(Element::from))
}

pub fn asset_config_for(element: &Element) -> AssetConfig {
    resolve_asset_config(element.get_attribute(ASSET_BASE_ATTR))
}
