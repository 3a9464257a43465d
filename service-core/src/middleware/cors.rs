use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// CORS policy that admits every origin, method and header with credentials.
///
/// Browsers reject a literal `*` next to `Access-Control-Allow-Credentials`,
/// so the origin, requested method and requested headers are mirrored back.
pub fn permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
