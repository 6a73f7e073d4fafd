use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use marquee_auth_types::identity::MaybeUser;
use marquee_domain::id::{MovieId, UserId};

use crate::error::StoreServiceError;
use crate::handlers::{MovieView, ReviewView, ViewerView};
use crate::state::AppState;
use crate::usecase::catalog::{GetMovieDetailUseCase, ListMoviesUseCase};

// ── GET / ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct MovieListView {
    pub user: Option<ViewerView>,
    pub query: String,
    pub movies: Vec<MovieView>,
}

pub async fn list_movies(
    MaybeUser(user): MaybeUser,
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<MovieListView>, StoreServiceError> {
    let usecase = ListMoviesUseCase {
        movies: state.movie_repo(),
    };
    let movies = usecase.execute(query.q.as_deref()).await?;
    Ok(Json(MovieListView {
        user: user.map(Into::into),
        query: query.q.unwrap_or_default(),
        movies: movies
            .into_iter()
            .map(|movie| MovieView::new(&state, movie))
            .collect(),
    }))
}

// ── GET /movies/{id}/ ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MovieDetailView {
    pub user: Option<ViewerView>,
    pub movie: MovieView,
    pub reviews: Vec<ReviewView>,
    pub user_review: Option<ReviewView>,
}

pub async fn movie_detail(
    MaybeUser(user): MaybeUser,
    State(state): State<AppState>,
    Path(movie_id): Path<MovieId>,
) -> Result<Json<MovieDetailView>, StoreServiceError> {
    let usecase = GetMovieDetailUseCase {
        movies: state.movie_repo(),
        reviews: state.review_repo(),
    };
    let viewer = user.as_ref().map(|u| UserId(u.user_id));
    let detail = usecase.execute(movie_id, viewer).await?;
    Ok(Json(MovieDetailView {
        user: user.map(Into::into),
        movie: MovieView::new(&state, detail.movie),
        reviews: detail.reviews.into_iter().map(Into::into).collect(),
        user_review: detail.user_review.map(Into::into),
    }))
}
