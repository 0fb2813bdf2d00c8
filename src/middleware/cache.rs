use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const STATIC_EXTENSIONS: [&str; 10] = [
    ".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".ico", ".css", ".js", ".woff2",
];

/// Paths whose content only changes with a deploy.
fn is_cacheable(path: &str) -> bool {
    path.starts_with("/static/")
        || path == "/robots.txt"
        || path == "/sitemap.xml"
        || path == "/opengraph-image"
        || path == "/twitter-image"
        || STATIC_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Middleware to set cache control headers
/// - Static files and SEO artifacts: cached for a day
/// - Pages: never cached, the contact page carries a per-view id
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let cacheable = is_cacheable(req.uri().path());
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    if cacheable {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=86400"),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}
