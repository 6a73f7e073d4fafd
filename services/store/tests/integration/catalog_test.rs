use marquee_domain::id::{MovieId, UserId};
use marquee_store::domain::repository::ReviewRepository;
use marquee_store::domain::types::NewMovie;
use marquee_store::error::StoreServiceError;
use marquee_store::usecase::catalog::{
    GetMovieDetailUseCase, ListMoviesUseCase, SeedCatalogUseCase,
};

use crate::helpers::MemoryStore;

#[tokio::test]
async fn should_find_movie_by_title_substring() {
    let store = MemoryStore::with_movies(&["The Matrix", "Heat", "Matrix Reloaded"]);
    let uc = ListMoviesUseCase {
        movies: store.clone(),
    };

    let movies = uc.execute(Some("matrix")).await.unwrap();

    let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["The Matrix", "Matrix Reloaded"]);
}

#[tokio::test]
async fn should_return_empty_list_for_unmatched_query() {
    let store = MemoryStore::with_movies(&["The Matrix", "Heat"]);
    let uc = ListMoviesUseCase { movies: store };

    let movies = uc.execute(Some("casablanca")).await.unwrap();

    assert!(movies.is_empty());
}

#[tokio::test]
async fn should_list_everything_for_blank_query() {
    let store = MemoryStore::with_movies(&["The Matrix", "Heat"]);
    let uc = ListMoviesUseCase { movies: store };

    assert_eq!(uc.execute(Some("")).await.unwrap().len(), 2);
    assert_eq!(uc.execute(None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn should_show_detail_with_reviews_newest_first() {
    let store = MemoryStore::new();
    let movie_id = store.add_movie("Heat", "12.00");
    let alice = store.add_user("alice", "pw");
    let bob = store.add_user("bob", "pw");
    store.create(movie_id, alice, "first").await.unwrap();
    store.create(movie_id, bob, "second").await.unwrap();

    let uc = GetMovieDetailUseCase {
        movies: store.clone(),
        reviews: store.clone(),
    };
    let detail = uc.execute(movie_id, Some(alice)).await.unwrap();

    assert_eq!(detail.movie.title, "Heat");
    let contents: Vec<_> = detail.reviews.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(contents, ["second", "first"]);
    let own = detail.user_review.expect("alice's review");
    assert_eq!(own.content, "first");
    assert_eq!(own.username, "alice");
}

#[tokio::test]
async fn should_omit_user_review_for_anonymous_viewer() {
    let store = MemoryStore::new();
    let movie_id = store.add_movie("Heat", "12.00");
    let alice = store.add_user("alice", "pw");
    store.create(movie_id, alice, "great").await.unwrap();

    let uc = GetMovieDetailUseCase {
        movies: store.clone(),
        reviews: store.clone(),
    };
    let anonymous = uc.execute(movie_id, None).await.unwrap();
    let stranger = uc.execute(movie_id, Some(UserId(4242))).await.unwrap();

    assert_eq!(anonymous.reviews.len(), 1);
    assert!(anonymous.user_review.is_none());
    assert!(stranger.user_review.is_none());
}

#[tokio::test]
async fn should_return_not_found_for_unknown_movie() {
    let store = MemoryStore::new();
    let uc = GetMovieDetailUseCase {
        movies: store.clone(),
        reviews: store,
    };

    let result = uc.execute(MovieId(99), None).await;

    assert!(
        matches!(result, Err(StoreServiceError::MovieNotFound)),
        "expected MovieNotFound, got {result:?}"
    );
}

fn seed() -> Vec<NewMovie> {
    vec![
        NewMovie {
            title: "Alien".into(),
            price: "9.99".parse().unwrap(),
            description: String::new(),
            image: Some("movie_images/alien.jpg".into()),
            release_date: None,
        },
        NewMovie {
            title: "Heat".into(),
            price: "12.00".parse().unwrap(),
            description: String::new(),
            image: None,
            release_date: None,
        },
    ]
}

#[tokio::test]
async fn should_seed_empty_catalog() {
    let store = MemoryStore::new();
    let uc = SeedCatalogUseCase {
        movies: store.clone(),
    };

    let added = uc.execute(&seed()).await.unwrap();

    assert_eq!(added, 2);
    let list = ListMoviesUseCase { movies: store };
    assert_eq!(list.execute(None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn should_leave_populated_catalog_alone() {
    let store = MemoryStore::with_movies(&["Existing"]);
    let uc = SeedCatalogUseCase {
        movies: store.clone(),
    };

    let added = uc.execute(&seed()).await.unwrap();

    assert_eq!(added, 0);
    let list = ListMoviesUseCase { movies: store };
    assert_eq!(list.execute(None).await.unwrap().len(), 1);
}
