use super::Locale;

/// Rewrites the first path segment of `current_path` to `target` when it
/// already names a locale, otherwise prepends the target as a new first
/// segment. Fragments are dropped; a locale switch is a full page load.
pub fn switch_locale_path(current_path: &str, target: Locale) -> String {
    let path = current_path.split('#').next().unwrap_or(current_path);
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.first() {
        Some(first) if Locale::from_segment(first).is_some() => {
            segments[0] = target.as_str();
        }
        _ => segments.insert(0, target.as_str()),
    }

    format!("/{}", segments.join("/"))
}

/// The cross-page route for a section that is absent from the current
/// document: `/<locale>#<section>`.
pub fn section_href(locale: Locale, section_id: &str) -> String {
    format!("/{locale}#{section_id}")
}

/// Replaces the fragment of `route` with `#<section_id>`, keeping the path.
/// Used after a successful in-page scroll: replace, never push.
pub fn replace_fragment(route: &str, section_id: &str) -> String {
    let path = route.split('#').next().unwrap_or(route);
    format!("{path}#{section_id}")
}
