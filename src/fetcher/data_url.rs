//! `data:` URL decoding

use base64::Engine;

use super::FetchError;

/// Decode the payload of a `data:` URL
///
/// Supports base64 payloads (`;base64,`) and percent-encoded payloads.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>, FetchError> {
    let rest = url
        .get(5..)
        .filter(|_| url[..5].eq_ignore_ascii_case("data:"))
        .ok_or_else(|| FetchError::InvalidDataUrl(truncate(url)))?;

    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| FetchError::InvalidDataUrl(truncate(url)))?;

    let is_base64 = meta
        .rsplit(';')
        .next()
        .is_some_and(|param| param.trim().eq_ignore_ascii_case("base64"));

    if is_base64 {
        let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let decoded = urlencoding::decode(&compact)
            .map_err(|e| FetchError::InvalidDataUrl(format!("{}: {e}", truncate(url))))?;
        base64::engine::general_purpose::STANDARD
            .decode(decoded.as_bytes())
            .map_err(|e| FetchError::InvalidDataUrl(format!("{}: {e}", truncate(url))))
    } else {
        Ok(urlencoding::decode_binary(payload.as_bytes()).into_owned())
    }
}

/// Keep error messages readable for multi-megabyte data URLs
fn truncate(url: &str) -> String {
    const MAX: usize = 64;
    match url.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &url[..idx]),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_payload() {
        assert_eq!(decode_data_url("data:text/plain;base64,aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn test_percent_encoded_payload() {
        assert_eq!(
            decode_data_url("data:image/svg+xml,%3Csvg%2F%3E").unwrap(),
            b"<svg/>"
        );
    }

    #[test]
    fn test_missing_comma_is_invalid() {
        assert!(matches!(
            decode_data_url("data:text/plain;base64"),
            Err(FetchError::InvalidDataUrl(_))
        ));
    }

    #[test]
    fn test_bad_base64_is_invalid() {
        assert!(decode_data_url("data:;base64,@@@").is_err());
    }
}
