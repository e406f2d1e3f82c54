//! Route names for request spans.

use uuid::Uuid;

/// Replaces identifier segments with placeholders, so `/api/products/1712345678901`
/// is reported as `/api/products/{id}`.
pub(super) fn route_name(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if is_identifier(segment) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

fn is_identifier(segment: &str) -> bool {
    let numeric = !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit());

    numeric || Uuid::parse_str(segment).is_ok()
}
