use marquee_domain::id::{MovieId, ReviewId, UserId};

use crate::domain::repository::{MovieRepository, ReviewRepository};
use crate::domain::types::{Movie, Review, meaningful_content};
use crate::error::StoreServiceError;

// ── ReviewForm (GET) ─────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ReviewFormOutcome {
    Show(Movie),
    AlreadyReviewed,
}

pub struct ReviewFormUseCase<M: MovieRepository, R: ReviewRepository> {
    pub movies: M,
    pub reviews: R,
}

impl<M: MovieRepository, R: ReviewRepository> ReviewFormUseCase<M, R> {
    pub async fn execute(
        &self,
        movie_id: MovieId,
        user_id: UserId,
    ) -> Result<ReviewFormOutcome, StoreServiceError> {
        let movie = self
            .movies
            .find_by_id(movie_id)
            .await?
            .ok_or(StoreServiceError::MovieNotFound)?;
        if self
            .reviews
            .find_by_movie_and_user(movie_id, user_id)
            .await?
            .is_some()
        {
            return Ok(ReviewFormOutcome::AlreadyReviewed);
        }
        Ok(ReviewFormOutcome::Show(movie))
    }
}

// ── CreateReview ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CreateReviewOutcome {
    Created(Review),
    AlreadyReviewed,
    EmptyContent,
}

pub struct CreateReviewUseCase<M: MovieRepository, R: ReviewRepository> {
    pub movies: M,
    pub reviews: R,
}

impl<M: MovieRepository, R: ReviewRepository> CreateReviewUseCase<M, R> {
    pub async fn execute(
        &self,
        movie_id: MovieId,
        user_id: UserId,
        content: Option<&str>,
    ) -> Result<CreateReviewOutcome, StoreServiceError> {
        self.movies
            .find_by_id(movie_id)
            .await?
            .ok_or(StoreServiceError::MovieNotFound)?;
        if self
            .reviews
            .find_by_movie_and_user(movie_id, user_id)
            .await?
            .is_some()
        {
            return Ok(CreateReviewOutcome::AlreadyReviewed);
        }
        let Some(content) = meaningful_content(content) else {
            return Ok(CreateReviewOutcome::EmptyContent);
        };
        let review = self.reviews.create(movie_id, user_id, content).await?;
        Ok(CreateReviewOutcome::Created(review))
    }
}

// ── GetOwnedReview ───────────────────────────────────────────────────────────

pub struct GetOwnedReviewUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> GetOwnedReviewUseCase<R> {
    pub async fn execute(
        &self,
        review_id: ReviewId,
        user_id: UserId,
    ) -> Result<Review, StoreServiceError> {
        self.reviews
            .find_owned(review_id, user_id)
            .await?
            .ok_or(StoreServiceError::ReviewNotFound)
    }
}

// ── EditReview ───────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct EditReviewOutput {
    pub movie_id: MovieId,
    pub updated: bool,
}

pub struct EditReviewUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> EditReviewUseCase<R> {
    pub async fn execute(
        &self,
        review_id: ReviewId,
        user_id: UserId,
        content: Option<&str>,
    ) -> Result<EditReviewOutput, StoreServiceError> {
        let review = self
            .reviews
            .find_owned(review_id, user_id)
            .await?
            .ok_or(StoreServiceError::ReviewNotFound)?;
        let updated = match meaningful_content(content) {
            Some(content) => {
                self.reviews.update_content(review.id, content).await?;
                true
            }
            None => false,
        };
        Ok(EditReviewOutput {
            movie_id: review.movie_id,
            updated,
        })
    }
}

// ── DeleteReview ─────────────────────────────────────────────────────────────

pub struct DeleteReviewUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> DeleteReviewUseCase<R> {
    /// Returns the movie the review belonged to.
    pub async fn execute(
        &self,
        review_id: ReviewId,
        user_id: UserId,
    ) -> Result<MovieId, StoreServiceError> {
        let review = self
            .reviews
            .find_owned(review_id, user_id)
            .await?
            .ok_or(StoreServiceError::ReviewNotFound)?;
        self.reviews.delete(review.id).await?;
        Ok(review.movie_id)
    }
}
