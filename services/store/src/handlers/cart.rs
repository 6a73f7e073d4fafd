use axum::{
    Json,
    extract::{Path, State},
    response::Redirect,
};
use rust_decimal::Decimal;
use serde::Serialize;

use marquee_auth_types::identity::CurrentUser;
use marquee_domain::id::{CartItemId, MovieId, UserId};

use crate::domain::types::cart_total;
use crate::error::StoreServiceError;
use crate::handlers::MovieView;
use crate::state::AppState;
use crate::usecase::cart::{AddToCartUseCase, RemoveFromCartUseCase, ViewCartUseCase};

const CART_PATH: &str = "/cart/";

// ── GET /cart/ ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CartLineView {
    pub id: CartItemId,
    pub movie: MovieView,
    pub quantity: i32,
    pub subtotal: Decimal,
}

#[derive(Serialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub total: Decimal,
}

pub async fn view_cart(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<CartView>, StoreServiceError> {
    let usecase = ViewCartUseCase {
        cart: state.cart_repo(),
    };
    let lines = usecase.execute(UserId(user.user_id)).await?;
    let total = cart_total(&lines);
    let items = lines
        .into_iter()
        .map(|line| CartLineView {
            id: line.item.id,
            quantity: line.item.quantity,
            subtotal: line.subtotal(),
            movie: MovieView::new(&state, line.movie),
        })
        .collect();
    Ok(Json(CartView { items, total }))
}

// ── POST /add_to_cart/{movie_id}/ ────────────────────────────────────────────

pub async fn add_to_cart(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(movie_id): Path<MovieId>,
) -> Result<Redirect, StoreServiceError> {
    let usecase = AddToCartUseCase {
        movies: state.movie_repo(),
        cart: state.cart_repo(),
    };
    usecase.execute(UserId(user.user_id), movie_id).await?;
    Ok(Redirect::to(CART_PATH))
}

// ── POST /remove_from_cart/{item_id}/ ────────────────────────────────────────

pub async fn remove_from_cart(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(item_id): Path<CartItemId>,
) -> Result<Redirect, StoreServiceError> {
    let usecase = RemoveFromCartUseCase {
        cart: state.cart_repo(),
    };
    usecase.execute(UserId(user.user_id), item_id).await?;
    Ok(Redirect::to(CART_PATH))
}
