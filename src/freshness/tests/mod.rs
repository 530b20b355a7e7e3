//! Unit tests for version ordering and catalog feed metadata.

#![allow(clippy::unwrap_used)]

use std::cmp::Ordering;

use crate::{
    freshness::{APP_VERSION, CatalogFeed, compare_versions, parse_version},
    settings::{Settings, SettingsPaths, defaults},
};

#[test]
fn build_version_matches_published_release_line() {
    assert_eq!(compare_versions("1.9.0", APP_VERSION).unwrap(), Ordering::Equal);
    assert_eq!(compare_versions("1.10.0", APP_VERSION).unwrap(), Ordering::Greater);
}

#[test]
fn version_ordering_is_numeric() {
    assert_eq!(compare_versions("1.10.0", "1.9.0").unwrap(), Ordering::Greater);
    assert_eq!(compare_versions("1.9.0", "1.9.0").unwrap(), Ordering::Equal);
    assert_eq!(compare_versions("1.2.0", "1.10.0").unwrap(), Ordering::Less);
    assert_eq!(compare_versions("2.0.0", "1.99.99").unwrap(), Ordering::Greater);
}

#[test]
fn version_short_forms_are_padded() {
    assert_eq!(parse_version("1.9").unwrap(), parse_version("1.9.0").unwrap());
    assert_eq!(parse_version("2").unwrap().to_string(), "2.0.0");
    assert_eq!(compare_versions("v1.10", "1.9.5").unwrap(), Ordering::Greater);
}

#[test]
fn version_prerelease_sorts_before_release() {
    assert_eq!(
        compare_versions("1.10.0-beta.1", "1.10.0").unwrap(),
        Ordering::Less
    );
    assert_eq!(parse_version("1.2-rc.1").unwrap().to_string(), "1.2.0-rc.1");
}

#[test]
fn version_garbage_is_rejected() {
    assert!(parse_version("").is_err());
    assert!(parse_version("latest").is_err());
    assert!(parse_version("1.2.3.4").is_err());
    assert!(compare_versions("1.0.0", "x").is_err());
}

#[test]
fn catalog_feed_parses_names() {
    assert_eq!("titles".parse::<CatalogFeed>().unwrap(), CatalogFeed::Titles);
    assert_eq!("versions".parse::<CatalogFeed>().unwrap(), CatalogFeed::Versions);
    assert!("dlc".parse::<CatalogFeed>().is_err());

    for feed in CatalogFeed::ALL {
        assert_eq!(feed.name().parse::<CatalogFeed>().unwrap(), feed);
    }
}

#[test]
fn catalog_feed_maps_settings_fields() {
    let mut settings = Settings::default();

    CatalogFeed::Titles.set_etag(&mut settings, "\"abc\"".to_string());
    CatalogFeed::Versions.set_etag(&mut settings, "\"def\"".to_string());

    assert_eq!(settings.titles_etag, "\"abc\"");
    assert_eq!(settings.versions_etag, "\"def\"");
    assert_eq!(CatalogFeed::Titles.url(&settings), defaults::DEFAULT_TITLES_JSON_URL);
    assert_eq!(
        CatalogFeed::Versions.url(&settings),
        defaults::DEFAULT_VERSIONS_JSON_URL
    );
    assert_eq!(CatalogFeed::Titles.sentinel(), defaults::TITLES_ETAG_SENTINEL);
}

#[test]
fn catalog_feed_without_cache_cannot_revalidate() {
    let paths = SettingsPaths::new("/nonexistent/slm-test");
    let mut settings = Settings::default();
    CatalogFeed::Titles.set_etag(&mut settings, "\"abc\"".to_string());

    assert!(!CatalogFeed::Titles.can_revalidate(&settings, &paths));
    assert!(!CatalogFeed::Versions.can_revalidate(&settings, &paths));
    assert!(
        CatalogFeed::Titles
            .cache_file(&paths)
            .ends_with(defaults::TITLES_JSON_FILENAME)
    );
}
