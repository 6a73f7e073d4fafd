use marquee_domain::id::{MovieId, UserId};

use crate::domain::repository::{MovieRepository, ReviewRepository};
use crate::domain::types::{Movie, NewMovie, Review};
use crate::error::StoreServiceError;

// ── ListMovies ───────────────────────────────────────────────────────────────

pub struct ListMoviesUseCase<M: MovieRepository> {
    pub movies: M,
}

impl<M: MovieRepository> ListMoviesUseCase<M> {
    /// A blank query lists the whole catalog.
    pub async fn execute(&self, query: Option<&str>) -> Result<Vec<Movie>, StoreServiceError> {
        let query = query.filter(|q| !q.is_empty());
        self.movies.search(query).await
    }
}

// ── GetMovieDetail ───────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MovieDetail {
    pub movie: Movie,
    /// Newest first.
    pub reviews: Vec<Review>,
    /// The viewer's own review, when logged in and present.
    pub user_review: Option<Review>,
}

pub struct GetMovieDetailUseCase<M: MovieRepository, R: ReviewRepository> {
    pub movies: M,
    pub reviews: R,
}

impl<M: MovieRepository, R: ReviewRepository> GetMovieDetailUseCase<M, R> {
    pub async fn execute(
        &self,
        movie_id: MovieId,
        viewer: Option<UserId>,
    ) -> Result<MovieDetail, StoreServiceError> {
        let movie = self
            .movies
            .find_by_id(movie_id)
            .await?
            .ok_or(StoreServiceError::MovieNotFound)?;
        let reviews = self.reviews.list_by_movie(movie_id).await?;
        let user_review = viewer.and_then(|viewer| {
            reviews
                .iter()
                .find(|review| review.user_id == viewer)
                .cloned()
        });
        Ok(MovieDetail {
            movie,
            reviews,
            user_review,
        })
    }
}

// ── SeedCatalog ──────────────────────────────────────────────────────────────

/// Parse a seed file: a JSON array of movies.
pub fn parse_seed(json: &str) -> Result<Vec<NewMovie>, StoreServiceError> {
    serde_json::from_str(json)
        .map_err(|e| StoreServiceError::Internal(anyhow::Error::new(e).context("parse seed file")))
}

pub struct SeedCatalogUseCase<M: MovieRepository> {
    pub movies: M,
}

impl<M: MovieRepository> SeedCatalogUseCase<M> {
    /// Insert `seed` into an empty catalog in one transaction. Returns how many
    /// movies were added.
    pub async fn execute(&self, seed: &[NewMovie]) -> Result<usize, StoreServiceError> {
        if self.movies.count().await? > 0 {
            tracing::info!("catalog already populated, skipping seed");
            return Ok(0);
        }
        let count = self.movies.create_many(seed).await?;
        tracing::info!(count, "catalog seeded");
        Ok(count)
    }
}
