use url::Url;

/// Returns the network location of a URL: userinfo, host and explicit port
///
/// The port is only present when the URL names a non-default one; `url`
/// drops default ports while parsing. Credentials are kept, so a URL with
/// `user:pw@` in front of the host has a different network location from
/// the bare host.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitemap_gen::url::netloc;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(netloc(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(netloc(&url), Some("127.0.0.1:8080".to_string()));
///
/// let url = Url::parse("http://user:pw@example.com/").unwrap();
/// assert_eq!(netloc(&url), Some("user:pw@example.com".to_string()));
/// ```
pub fn netloc(url: &Url) -> Option<String> {
    let host = url.host_str().filter(|h| !h.is_empty())?;

    let mut location = String::new();
    if !url.username().is_empty() || url.password().is_some() {
        location.push_str(url.username());
        if let Some(password) = url.password() {
            location.push(':');
            location.push_str(password);
        }
        location.push('@');
    }

    location.push_str(host);
    if let Some(port) = url.port() {
        location.push(':');
        location.push_str(&port.to_string());
    }

    Some(location)
}

/// Decides whether `candidate` belongs to the same site as `seed`
///
/// Exact network-location equality: subdomains and differing credentials
/// are different sites, and the scheme does not take part in the
/// comparison. URLs without a host are never internal.
pub fn is_internal(seed: &Url, candidate: &Url) -> bool {
    match (netloc(seed), netloc(candidate)) {
        (Some(seed_loc), Some(candidate_loc)) => seed_loc == candidate_loc,
        _ => false,
    }
}
