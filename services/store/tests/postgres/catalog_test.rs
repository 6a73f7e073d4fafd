use marquee_store::domain::repository::MovieRepository;
use marquee_store::usecase::catalog::{ListMoviesUseCase, SeedCatalogUseCase};

use crate::common::{TestContext, new_movie};

fn titles(movies: &[marquee_store::domain::types::Movie]) -> Vec<&str> {
    movies.iter().map(|movie| movie.title.as_str()).collect()
}

#[tokio::test]
async fn should_search_titles_ignoring_case_in_id_order() {
    let ctx = TestContext::new().await;
    ctx.add_movies(&[
        ("The Matrix", "9.99"),
        ("Heat", "12.00"),
        ("matrix reloaded", "8.50"),
    ])
    .await;
    let uc = ListMoviesUseCase {
        movies: ctx.state.movie_repo(),
    };

    let found = uc.execute(Some("MATRIX")).await.unwrap();
    let all = uc.execute(Some("")).await.unwrap();

    assert_eq!(titles(&found), vec!["The Matrix", "matrix reloaded"]);
    assert_eq!(titles(&all), vec!["The Matrix", "Heat", "matrix reloaded"]);
}

#[tokio::test]
async fn should_match_like_wildcards_literally() {
    let ctx = TestContext::new().await;
    ctx.add_movies(&[
        ("100% Love", "5.00"),
        ("1000 Love", "5.00"),
        ("a_b", "5.00"),
        ("axb", "5.00"),
        (r"back\slash", "5.00"),
    ])
    .await;
    let repo = ctx.state.movie_repo();

    assert_eq!(titles(&repo.search(Some("100%")).await.unwrap()), vec!["100% Love"]);
    assert_eq!(titles(&repo.search(Some("a_b")).await.unwrap()), vec!["a_b"]);
    assert_eq!(titles(&repo.search(Some(r"k\s")).await.unwrap()), vec![r"back\slash"]);
}

#[tokio::test]
async fn should_default_release_date_and_keep_price_scale() {
    let ctx = TestContext::new().await;
    let ids = ctx.add_movies(&[("Heat", "12.5")]).await;

    let movie = ctx
        .state
        .movie_repo()
        .find_by_id(ids[0])
        .await
        .unwrap()
        .unwrap();

    assert_eq!(movie.price.to_string(), "12.50");
    assert_eq!(movie.release_date, chrono::Utc::now().date_naive());
}

#[tokio::test]
async fn should_seed_all_movies_or_none() {
    let ctx = TestContext::new().await;
    let uc = SeedCatalogUseCase {
        movies: ctx.state.movie_repo(),
    };
    let too_long = "x".repeat(201);

    let failed = uc
        .execute(&[new_movie("Alien", "9.99"), new_movie(&too_long, "1.00")])
        .await;
    let count_after_failure = ctx.state.movie_repo().count().await.unwrap();
    let added = uc
        .execute(&[new_movie("Alien", "9.99"), new_movie("Heat", "12.00")])
        .await
        .unwrap();

    assert!(failed.is_err(), "expected the oversized title to fail");
    assert_eq!(count_after_failure, 0);
    assert_eq!(added, 2);
    assert_eq!(ctx.state.movie_repo().count().await.unwrap(), 2);
}
