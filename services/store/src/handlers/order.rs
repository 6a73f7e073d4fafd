use axum::{Json, extract::State, response::Redirect};
use chrono::{DateTime, Utc};
use serde::Serialize;

use marquee_auth_types::identity::CurrentUser;
use marquee_domain::id::{OrderId, UserId};

use crate::error::StoreServiceError;
use crate::handlers::MovieView;
use crate::state::AppState;
use crate::usecase::order::{ListOrdersUseCase, PlaceOrderUseCase};

const ORDERS_PATH: &str = "/orders/";

// ── POST /place_order/ ───────────────────────────────────────────────────────

pub async fn place_order(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Result<Redirect, StoreServiceError> {
    let usecase = PlaceOrderUseCase {
        cart: state.cart_repo(),
        orders: state.order_repo(),
    };
    usecase.execute(UserId(user.user_id)).await?;
    Ok(Redirect::to(ORDERS_PATH))
}

// ── GET /orders/ ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct OrderView {
    pub id: OrderId,
    #[serde(serialize_with = "marquee_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    pub movies: Vec<MovieView>,
}

#[derive(Serialize)]
pub struct OrdersView {
    pub orders: Vec<OrderView>,
}

pub async fn view_orders(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<OrdersView>, StoreServiceError> {
    let usecase = ListOrdersUseCase {
        orders: state.order_repo(),
    };
    let orders = usecase.execute(UserId(user.user_id)).await?;
    Ok(Json(OrdersView {
        orders: orders
            .into_iter()
            .map(|order| OrderView {
                id: order.id,
                created_at: order.created_at,
                movies: order
                    .movies
                    .into_iter()
                    .map(|movie| MovieView::new(&state, movie))
                    .collect(),
            })
            .collect(),
    }))
}
