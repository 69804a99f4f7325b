use crate::UrlError;
use url::Url;

/// Parses and validates a listing root URL
///
/// The listing root must be an absolute HTTP(S) URL with a host whose path
/// ends in `/`, because page N is addressed relative to it as `page/N/`.
///
/// # Examples
///
/// ```
/// use actions_harvest::url::parse_listing_url;
///
/// assert!(parse_listing_url("https://www.whitehouse.gov/presidential-actions/").is_ok());
/// assert!(parse_listing_url("https://www.whitehouse.gov/presidential-actions").is_err());
/// ```
pub fn parse_listing_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost(url_str.to_string()));
    }

    if !url.path().ends_with('/') {
        return Err(UrlError::NotADirectory(url_str.to_string()));
    }

    Ok(url)
}

/// Returns the URL of listing page `number`
///
/// Page 1 is the listing root itself; page N > 1 is `{base}page/N/`.
pub fn page_url(base: &Url, number: u32) -> Url {
    if number <= 1 {
        return base.clone();
    }

    let mut url = base.clone();
    let path = format!("{}page/{}/", base.path(), number);
    url.set_path(&path);
    url
}

/// Returns the listing's section path without surrounding slashes
///
/// `https://www.whitehouse.gov/presidential-actions/` yields `presidential-actions`.
pub fn listing_section(base: &Url) -> String {
    base.path().trim_matches('/').to_string()
}

/// Returns the scheme, host and (non-default) port of the listing root
///
/// `https://www.whitehouse.gov/presidential-actions/` yields `https://www.whitehouse.gov`.
pub fn listing_origin(base: &Url) -> String {
    base.origin().ascii_serialization()
}
