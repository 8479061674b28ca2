use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub mod routes;
pub mod state;

pub use state::AppState;

use routes::{activities, activity};

pub const INDEX_PATH: &str = "/static/index.html";

/// API routes only; static assets are mounted by the binary.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name",
            get(activities::activity_handler),
        )
        .route(
            "/activities/:activity_name/signup",
            post(activity::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activity::unregister_handler),
        );
    with_layers(routes).with_state(state)
}

// Panics become 500s inside the header layer so they are not cached either.
fn with_layers<S>(routes: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    routes
        .layer(CatchPanicLayer::new())
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn explode() -> &'static str {
        panic!("handler failure")
    }

    #[tokio::test]
    async fn panic_response_is_not_cached() {
        let app = with_layers(Router::new().route("/explode", get(explode)));
        let response = app
            .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[CACHE_CONTROL], "no-store");
    }
}
