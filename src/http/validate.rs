use url::Url;

/// Returns true when `raw` parses and carries both a scheme and a non-empty
/// network location (`host[:port]`). Scheme values are not restricted.
#[must_use]
pub fn validate_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| {
        !url.scheme().is_empty() && url.host_str().is_some_and(|host| !host.is_empty())
    })
}
