//! `srcset` candidate rewriting

/// Rewrite every candidate URL of a `srcset` value
///
/// Candidates are split on commas; each keeps its width or density
/// descriptor. `rename` receives the candidate URL and returns its
/// replacement. Commas inside URLs (data URIs) are not supported.
pub fn rewrite_srcset<R>(srcset: &str, mut rename: R) -> String
where
    R: FnMut(&str) -> String,
{
    srcset
        .split(',')
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .map(|candidate| {
            let (url, descriptor) = candidate
                .split_once(char::is_whitespace)
                .map_or((candidate, ""), |(url, rest)| (url, rest.trim()));
            let renamed = rename(url);
            if descriptor.is_empty() {
                renamed
            } else {
                format!("{renamed} {descriptor}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
