pub mod account;
pub mod cart;
pub mod catalog;
pub mod order;
pub mod review;

use axum::{
    Form,
    extract::{FromRequest, Request, rejection::FormRejection},
    http::header::CONTENT_TYPE,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, de::DeserializeOwned};

use marquee_domain::id::{MovieId, ReviewId, UserId};

use crate::domain::types::{Movie, Review};
use crate::error::StoreServiceError;
use crate::state::AppState;

/// Urlencoded form body. A POST with no body and no `Content-Type` reads as
/// the empty form; other rejections become `MALFORMED_FORM` JSON errors.
pub struct FormBody<T>(pub T);

impl<T, S> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = StoreServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bodyless = !req.headers().contains_key(CONTENT_TYPE);
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(Self(value)),
            Err(FormRejection::InvalidFormContentType(_)) if bodyless => Ok(Self(T::default())),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

/// Location of a movie's detail page.
pub(crate) fn movie_detail_path(id: MovieId) -> String {
    format!("/movies/{id}/")
}

#[derive(Serialize)]
pub struct MovieView {
    pub id: MovieId,
    pub title: String,
    pub price: Decimal,
    pub description: String,
    pub image_url: Option<String>,
    pub release_date: NaiveDate,
}

impl MovieView {
    pub(crate) fn new(state: &AppState, movie: Movie) -> Self {
        Self {
            image_url: movie.image.as_deref().map(|path| state.media_url_for(path)),
            id: movie.id,
            title: movie.title,
            price: movie.price,
            description: movie.description,
            release_date: movie.release_date,
        }
    }
}

#[derive(Serialize)]
pub struct ReviewView {
    pub id: ReviewId,
    pub movie_id: MovieId,
    pub user_id: UserId,
    pub username: String,
    pub content: String,
    #[serde(serialize_with = "marquee_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewView {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            movie_id: review.movie_id,
            user_id: review.user_id,
            username: review.username,
            content: review.content,
            created_at: review.created_at,
        }
    }
}

/// The logged-in user as shown on every page.
#[derive(Serialize)]
pub struct ViewerView {
    pub id: UserId,
    pub username: String,
}

impl From<marquee_auth_types::identity::CurrentUser> for ViewerView {
    fn from(user: marquee_auth_types::identity::CurrentUser) -> Self {
        Self {
            id: UserId(user.user_id),
            username: user.username,
        }
    }
}

/// An empty form: the field names a client should submit.
#[derive(Serialize)]
pub struct FormView {
    pub fields: &'static [&'static str],
}
