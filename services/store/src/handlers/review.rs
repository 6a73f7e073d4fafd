use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};

use marquee_auth_types::identity::CurrentUser;
use marquee_domain::id::{MovieId, ReviewId, UserId};

use crate::error::StoreServiceError;
use crate::handlers::{FormBody, FormView, MovieView, ReviewView, movie_detail_path};
use crate::state::AppState;
use crate::usecase::review::{
    CreateReviewOutcome, CreateReviewUseCase, DeleteReviewUseCase, EditReviewUseCase,
    GetOwnedReviewUseCase, ReviewFormOutcome, ReviewFormUseCase,
};

const REVIEW_FIELDS: &[&str] = &["content"];

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ReviewForm {
    pub content: Option<String>,
}

// ── GET /movies/{id}/review/ ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ReviewFormView {
    pub movie: MovieView,
    pub form: FormView,
}

pub async fn review_form(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(movie_id): Path<MovieId>,
) -> Result<Response, StoreServiceError> {
    let usecase = ReviewFormUseCase {
        movies: state.movie_repo(),
        reviews: state.review_repo(),
    };
    match usecase.execute(movie_id, UserId(user.user_id)).await? {
        ReviewFormOutcome::Show(movie) => Ok(Json(ReviewFormView {
            movie: MovieView::new(&state, movie),
            form: FormView {
                fields: REVIEW_FIELDS,
            },
        })
        .into_response()),
        ReviewFormOutcome::AlreadyReviewed => {
            Ok(Redirect::to(&movie_detail_path(movie_id)).into_response())
        }
    }
}

// ── POST /movies/{id}/review/ ────────────────────────────────────────────────

pub async fn create_review(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(movie_id): Path<MovieId>,
    FormBody(form): FormBody<ReviewForm>,
) -> Result<Redirect, StoreServiceError> {
    let usecase = CreateReviewUseCase {
        movies: state.movie_repo(),
        reviews: state.review_repo(),
    };
    let outcome = usecase
        .execute(movie_id, UserId(user.user_id), form.content.as_deref())
        .await?;
    if let CreateReviewOutcome::Created(review) = &outcome {
        tracing::debug!(review_id = %review.id, movie_id = %movie_id, "review created");
    }
    Ok(Redirect::to(&movie_detail_path(movie_id)))
}

// ── GET /review/{id}/edit/ ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EditReviewView {
    pub review: ReviewView,
    pub form: FormView,
}

pub async fn edit_review_form(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(review_id): Path<ReviewId>,
) -> Result<Json<EditReviewView>, StoreServiceError> {
    let usecase = GetOwnedReviewUseCase {
        reviews: state.review_repo(),
    };
    let review = usecase.execute(review_id, UserId(user.user_id)).await?;
    Ok(Json(EditReviewView {
        review: review.into(),
        form: FormView {
            fields: REVIEW_FIELDS,
        },
    }))
}

// ── POST /review/{id}/edit/ ──────────────────────────────────────────────────

pub async fn edit_review(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(review_id): Path<ReviewId>,
    FormBody(form): FormBody<ReviewForm>,
) -> Result<Redirect, StoreServiceError> {
    let usecase = EditReviewUseCase {
        reviews: state.review_repo(),
    };
    let output = usecase
        .execute(review_id, UserId(user.user_id), form.content.as_deref())
        .await?;
    Ok(Redirect::to(&movie_detail_path(output.movie_id)))
}

// ── POST /review/{id}/delete/ ────────────────────────────────────────────────

pub async fn delete_review(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(review_id): Path<ReviewId>,
) -> Result<Redirect, StoreServiceError> {
    let usecase = DeleteReviewUseCase {
        reviews: state.review_repo(),
    };
    let movie_id = usecase.execute(review_id, UserId(user.user_id)).await?;
    Ok(Redirect::to(&movie_detail_path(movie_id)))
}
