//! Base-path resolution for reverse-proxy deployments.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console is served as static files by the RADIUS backend, possibly
//! under an arbitrary sub-path behind a reverse proxy (`/radius/`, say).
//! API and route paths are derived from the page URL so nothing assumes the
//! application lives at `/`. Debug builds always talk to the dev server root.

#[cfg(test)]
#[path = "base_path_test.rs"]
mod base_path_test;

const DEV_API_BASE: &str = "/api/v1";

/// Derive the API root from a page pathname.
///
/// Strips a trailing `index.html` segment, keeps the remaining directory
/// segments as the deployment prefix, then appends `api/v1`. Duplicate path
/// separators are collapsed.
pub fn api_base_from(pathname: &str) -> String {
    let base = deployment_prefix(pathname);
    if base.is_empty() {
        DEV_API_BASE.to_owned()
    } else {
        collapse_slashes(&format!("{base}/api/v1"))
    }
}

/// Derive the client-side routing base from a page pathname.
///
/// Empty for root deployments, `"/sub/path"` (no trailing slash) otherwise.
pub fn route_base_from(pathname: &str) -> String {
    deployment_prefix(pathname)
}

/// Absolute URL of the login view under the same deployment prefix.
pub fn login_url_from(pathname: &str) -> String {
    format!("{}/login", route_base_from(pathname))
}

fn deployment_prefix(pathname: &str) -> String {
    let mut segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    if segments.last() == Some(&"index.html") {
        segments.pop();
    }
    if segments.is_empty() {
        String::new()
    } else {
        format!("/{}", segments.join("/"))
    }
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for ch in path.chars() {
        if ch == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(ch);
    }
    out
}

#[cfg(feature = "csr")]
fn current_pathname() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

/// API root for the current deployment.
pub fn api_base() -> String {
    #[cfg(feature = "csr")]
    {
        if cfg!(debug_assertions) {
            return DEV_API_BASE.to_owned();
        }
        current_pathname().map_or_else(|| DEV_API_BASE.to_owned(), |path| api_base_from(&path))
    }
    #[cfg(not(feature = "csr"))]
    {
        DEV_API_BASE.to_owned()
    }
}

/// Routing base for the current deployment.
pub fn route_base() -> String {
    #[cfg(feature = "csr")]
    {
        if cfg!(debug_assertions) {
            return String::new();
        }
        current_pathname().map_or_else(String::new, |path| route_base_from(&path))
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Login URL for the current deployment.
pub fn login_url() -> String {
    format!("{}/login", route_base())
}
