use std::cmp::Ordering;

use semver::Version;

/// Parses a release version leniently.
///
/// Accepts a leading `v` and pads missing minor/patch components, so `"1.9"`
/// and `"v1.9.0"` both parse as `1.9.0`.
///
/// # Errors
/// Returns the `semver` error if the normalised string is not a version.
pub fn parse_version(raw: &str) -> Result<Version, semver::Error> {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    let core_end = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
    let (core, suffix) = trimmed.split_at(core_end);

    let mut normalised = core.to_string();
    for _ in core.split('.').count()..3 {
        normalised.push_str(".0");
    }
    normalised.push_str(suffix);

    Version::parse(&normalised)
}

/// Orders two version strings numerically by major, minor and patch.
///
/// `"1.10.0"` is greater than `"1.9.0"`.
///
/// # Errors
/// Returns the `semver` error of whichever side fails to parse.
pub fn compare_versions(left: &str, right: &str) -> Result<Ordering, semver::Error> {
    Ok(parse_version(left)?.cmp(&parse_version(right)?))
}
