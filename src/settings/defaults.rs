//! Built-in constants used when no settings document exists or a field is empty.

use super::template::TemplateToken;

/// File name of the settings document inside the working directory.
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Cached title catalog file name.
pub const TITLES_JSON_FILENAME: &str = "titles.json";

/// Cached version catalog file name.
pub const VERSIONS_JSON_FILENAME: &str = "versions.json";

/// Log file name inside the working directory.
pub const LOG_FILENAME: &str = "slm.log";

/// Default title catalog endpoint.
pub const DEFAULT_TITLES_JSON_URL: &str = "https://tinfoil.media/repo/db/titles.json";

/// Default version catalog endpoint.
pub const DEFAULT_VERSIONS_JSON_URL: &str =
    "https://raw.githubusercontent.com/blawar/titledb/master/versions.json";

/// "Never fetched" ETag for the title catalog.
pub const TITLES_ETAG_SENTINEL: &str = "W/\"a5b02845cf6bd61:0\"";

/// "Never fetched" ETag for the version catalog.
pub const VERSIONS_ETAG_SENTINEL: &str = "W/\"2ef50d1cb6bd61:0\"";

/// DLC shipped inside its base game; never reported as missing.
pub const BUNDLED_DLC_TITLE_ID: &str = "01007F600B135007";

/// Rows per page in the graphical listing.
pub const GUI_PAGE_SIZE: u32 = 100;

/// Default folder name template: `{TITLE_NAME}`.
pub fn folder_name_template() -> String {
    format!("{{{}}}", TemplateToken::TitleName)
}

/// Default file name template: `{TITLE_NAME} ({DLC_NAME})[{TITLE_ID}][v{VERSION}]`.
pub fn file_name_template() -> String {
    format!(
        "{{{}}} ({{{}}})[{{{}}}][v{{{}}}]",
        TemplateToken::TitleName,
        TemplateToken::DlcName,
        TemplateToken::TitleId,
        TemplateToken::Version
    )
}

pub(super) fn gui_page_size() -> u32 {
    GUI_PAGE_SIZE
}

pub(super) fn switch_safe_file_names() -> bool {
    true
}

pub(super) fn ignore_dlc_title_ids() -> Vec<String> {
    vec![BUNDLED_DLC_TITLE_ID.to_string()]
}
