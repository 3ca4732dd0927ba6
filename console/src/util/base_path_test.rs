use super::*;

// =============================================================
// API base derivation
// =============================================================

#[test]
fn api_base_from_root_path() {
    assert_eq!(api_base_from("/"), "/api/v1");
    assert_eq!(api_base_from(""), "/api/v1");
}

#[test]
fn api_base_from_root_index_html() {
    assert_eq!(api_base_from("/index.html"), "/api/v1");
}

#[test]
fn api_base_from_sub_path() {
    assert_eq!(api_base_from("/radius/"), "/radius/api/v1");
    assert_eq!(api_base_from("/apps/radius"), "/apps/radius/api/v1");
}

#[test]
fn api_base_from_sub_path_strips_trailing_index_html() {
    assert_eq!(api_base_from("/radius/index.html"), "/radius/api/v1");
}

#[test]
fn api_base_from_keeps_other_html_segments() {
    assert_eq!(api_base_from("/radius/admin.html"), "/radius/admin.html/api/v1");
}

#[test]
fn api_base_from_collapses_duplicate_slashes() {
    assert_eq!(api_base_from("//apps//radius//"), "/apps/radius/api/v1");
}

#[test]
fn api_base_from_is_stable_on_repeat() {
    let first = api_base_from("/radius/index.html");
    assert_eq!(api_base_from("/radius/index.html"), first);
}

// =============================================================
// Route base and login URL
// =============================================================

#[test]
fn route_base_from_root_is_empty() {
    assert_eq!(route_base_from("/"), "");
    assert_eq!(route_base_from("/index.html"), "");
}

#[test]
fn route_base_from_sub_path_has_no_trailing_slash() {
    assert_eq!(route_base_from("/radius/"), "/radius");
    assert_eq!(route_base_from("/radius/index.html"), "/radius");
}

#[test]
fn login_url_from_root() {
    assert_eq!(login_url_from("/"), "/login");
}

#[test]
fn login_url_from_sub_path() {
    assert_eq!(login_url_from("/radius/index.html"), "/radius/login");
}
