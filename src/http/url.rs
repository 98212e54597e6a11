//! URL helpers.

use crate::error::{Error, Result};

use reqwest::{Response, Url};

/// Appends path segments to `base`, percent-encoding each one.
///
/// Segments are never interpreted, so a clip called `x:y` or `a?b` stays a
/// path segment instead of turning into a scheme or a query.
pub fn join_segments<'a, I>(base: &Url, segments: I) -> Result<Url>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::InvalidUrl(format!("\"{}\" cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Renders a URL for humans, with percent-encoding undone.
///
/// Falls back to the encoded form when the decoded bytes are not UTF-8.
pub fn display_url(url: &Url) -> String {
    match urlencoding::decode(url.as_str()) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => url.to_string(),
    }
}

/// Turns a non-2xx response into [`Error::Status`].
///
/// The response is consumed on failure so its connection is released before
/// the error is returned.
pub fn ensure_success(res: Response) -> Result<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    Err(Error::Status {
        status,
        url: display_url(res.url()),
    })
}
