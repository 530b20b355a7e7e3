use tracing::{debug, warn};

use super::{NameTemplate, Settings, SettingsPaths, defaults};

/// Repairs a freshly decoded document.
///
/// Empty endpoints get their built-in default. A feed whose cache file is
/// absent gets its "never fetched" ETag so the next refresh downloads it
/// unconditionally.
pub(super) fn verify_settings(paths: &SettingsPaths, mut settings: Settings) -> Settings {
    if settings.titles_json_url.is_empty() {
        debug!("Title catalog URL empty, using default");
        settings.titles_json_url = defaults::DEFAULT_TITLES_JSON_URL.to_string();
    }

    if settings.versions_json_url.is_empty() {
        debug!("Version catalog URL empty, using default");
        settings.versions_json_url = defaults::DEFAULT_VERSIONS_JSON_URL.to_string();
    }

    if !paths.titles_cache().exists() {
        settings.titles_etag = defaults::TITLES_ETAG_SENTINEL.to_string();
    }

    if !paths.versions_cache().exists() {
        settings.versions_etag = defaults::VERSIONS_ETAG_SENTINEL.to_string();
    }

    let organize = &settings.organize_options;
    for (field, template) in [
        ("folder_name_template", &organize.folder_name_template),
        ("file_name_template", &organize.file_name_template),
    ] {
        let unknown = NameTemplate::new(template).unknown_placeholders();
        if !unknown.is_empty() {
            warn!(field, placeholders = ?unknown, "Unknown placeholders in organize template");
        }
    }

    settings
}
