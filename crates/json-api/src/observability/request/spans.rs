//! HTTP span helpers.

use uuid::Uuid;

const ID_PLACEHOLDER: &str = "{id}";

/// Collapse record identifiers in `path` so spans and metrics group by route.
///
/// Both time-ordered UUIDs and legacy millisecond ids count as identifiers.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if is_identifier(segment) {
                ID_PLACEHOLDER
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

fn is_identifier(segment: &str) -> bool {
    Uuid::parse_str(segment).is_ok()
        || (!segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()))
}
