use crate::constants::CONFIG_ATTR_PREFIX;
use folio_core::{FolioConfig, OVERRIDE_KEYS};
use web_sys as web;

/// Defaults plus any `data-*` overrides present on `<body>`.
pub fn load(document: &web::Document) -> FolioConfig {
    let Some(body) = document.body() else {
        return FolioConfig::default();
    };
    let present: Vec<(&str, String)> = OVERRIDE_KEYS
        .iter()
        .filter_map(|key| {
            body.get_attribute(&format!("{}{}", CONFIG_ATTR_PREFIX, key))
                .map(|v| (*key, v))
        })
        .collect();
    let (config, rejected) = FolioConfig::default()
        .with_overrides(present.iter().map(|(k, v)| (*k, v.as_str())));
    let applied = present.len() - rejected.len();
    for e in rejected {
        log::warn!("[config] ignoring override: {}", e);
    }
    if applied > 0 {
        log::info!("[config] applied {} override(s)", applied);
    }
    config
}
