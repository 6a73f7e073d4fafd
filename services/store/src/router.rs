use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use marquee_core::health::{healthz, not_found, readyz};
use marquee_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    account::{
        login, login_form, logout, password_change, password_change_done, password_change_form,
        register, register_form,
    },
    cart::{add_to_cart, remove_from_cart, view_cart},
    catalog::{list_movies, movie_detail},
    order::{place_order, view_orders},
    review::{create_review, delete_review, edit_review, edit_review_form, review_form},
};
use crate::state::AppState;

/// Build the store router. Images under `media_root` are served at `state.media_url`.
pub fn build_router(state: AppState, media_root: &str) -> Router {
    let mut router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Catalog
        .route("/", get(list_movies))
        .route("/movies/{id}/", get(movie_detail))
        // Reviews
        .route("/movies/{id}/review/", get(review_form).post(create_review))
        .route("/review/{id}/edit/", get(edit_review_form).post(edit_review))
        .route("/review/{id}/delete/", post(delete_review))
        // Accounts
        .route("/accounts/register/", get(register_form).post(register))
        .route("/accounts/login/", get(login_form).post(login))
        .route("/accounts/logout/", post(logout))
        .route(
            "/accounts/password_change/",
            get(password_change_form).post(password_change),
        )
        .route("/accounts/password_change/done/", get(password_change_done))
        // Cart
        .route("/cart/", get(view_cart))
        .route("/add_to_cart/{movie_id}/", post(add_to_cart))
        .route("/remove_from_cart/{item_id}/", post(remove_from_cart))
        // Orders
        .route("/place_order/", post(place_order))
        .route("/orders/", get(view_orders));

    let media_prefix = state.media_url.trim_end_matches('/').to_owned();
    if !media_prefix.is_empty() {
        router = router.nest_service(&media_prefix, ServeDir::new(media_root));
    }

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
