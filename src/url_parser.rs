//! Site URL parser for deriving Graph site paths from SharePoint URLs.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, SharePointError};

/// Browser URL of a site, e.g. `https://contoso.sharepoint.com/sites/Marketing`.
static BROWSER_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://([a-zA-Z0-9-]+\.sharepoint\.com)/(sites|teams)/([^/?#]+)")
        .expect("Invalid browser URL regex")
});

/// Already-normalized Graph site path, e.g. `contoso.sharepoint.com:/sites/Marketing`.
static SITE_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9-]+\.sharepoint\.com:/(sites|teams)/[^/?#]+$")
        .expect("Invalid site path regex")
});

/// Bare tenant hostname, addressing the tenant root site.
static HOSTNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9-]+\.sharepoint\.com$").expect("Invalid hostname regex")
});

/// Derive the Graph site path for a site from a URL or pre-built path.
///
/// Supports the following forms:
/// - `https://<host>.sharepoint.com/sites/<name>` (browser URL; extra path
///   segments and query parameters are ignored)
/// - `<host>.sharepoint.com:/sites/<name>` (Graph path, passed through)
/// - `<host>.sharepoint.com` (tenant root site)
///
/// `/teams/` sites are accepted alongside `/sites/`.
///
/// # Examples
///
/// ```
/// use sp_drive::url_parser::site_path;
///
/// let path = site_path("https://contoso.sharepoint.com/sites/Marketing").unwrap();
/// assert_eq!(path, "contoso.sharepoint.com:/sites/Marketing");
///
/// let path = site_path("contoso.sharepoint.com:/sites/Marketing").unwrap();
/// assert_eq!(path, "contoso.sharepoint.com:/sites/Marketing");
/// ```
pub fn site_path(url_or_path: &str) -> Result<String> {
    let trimmed = url_or_path.trim();

    if let Some(captures) = BROWSER_URL_REGEX.captures(trimmed) {
        return Ok(format!(
            "{}:/{}/{}",
            &captures[1], &captures[2], &captures[3]
        ));
    }

    if SITE_PATH_REGEX.is_match(trimmed) || HOSTNAME_REGEX.is_match(trimmed) {
        return Ok(trimmed.to_string());
    }

    Err(SharePointError::InvalidSiteUrl(url_or_path.to_string()))
}
