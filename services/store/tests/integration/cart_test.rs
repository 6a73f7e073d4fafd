use rust_decimal::Decimal;

use marquee_domain::id::{CartItemId, MovieId};
use marquee_store::domain::repository::CartRepository;
use marquee_store::domain::types::cart_total;
use marquee_store::error::StoreServiceError;
use marquee_store::usecase::cart::{AddToCartUseCase, RemoveFromCartUseCase, ViewCartUseCase};

use crate::helpers::MemoryStore;

fn add_uc(store: &MemoryStore) -> AddToCartUseCase<MemoryStore, MemoryStore> {
    AddToCartUseCase {
        movies: store.clone(),
        cart: store.clone(),
    }
}

#[tokio::test]
async fn should_create_item_with_quantity_one() {
    let store = MemoryStore::new();
    let movie_id = store.add_movie("Heat", "12.00");
    let alice = store.add_user("alice", "pw");

    let item = add_uc(&store).execute(alice, movie_id).await.unwrap();

    assert_eq!(item.quantity, 1);
    assert_eq!(store.cart_items(alice), vec![item]);
}

#[tokio::test]
async fn should_increment_quantity_on_repeat_add() {
    let store = MemoryStore::new();
    let movie_id = store.add_movie("Heat", "12.00");
    let alice = store.add_user("alice", "pw");
    let uc = add_uc(&store);

    uc.execute(alice, movie_id).await.unwrap();
    uc.execute(alice, movie_id).await.unwrap();

    let items = store.cart_items(alice);
    assert_eq!(items.len(), 1, "expected one cart item, got {items:?}");
    assert_eq!(items[0].quantity, 2);
}

#[tokio::test]
async fn should_saturate_quantity_at_max() {
    let store = MemoryStore::new();
    let movie_id = store.add_movie("Heat", "12.00");
    let alice = store.add_user("alice", "pw");
    let uc = add_uc(&store);
    let item = uc.execute(alice, movie_id).await.unwrap();
    store.set_quantity(item.id, i32::MAX).await.unwrap();

    let item = uc.execute(alice, movie_id).await.unwrap();

    assert_eq!(item.quantity, i32::MAX);
    assert_eq!(store.cart_items(alice)[0].quantity, i32::MAX);
}

#[tokio::test]
async fn should_keep_carts_separate_per_user() {
    let store = MemoryStore::new();
    let movie_id = store.add_movie("Heat", "12.00");
    let alice = store.add_user("alice", "pw");
    let bob = store.add_user("bob", "pw");
    let uc = add_uc(&store);

    uc.execute(alice, movie_id).await.unwrap();
    uc.execute(bob, movie_id).await.unwrap();

    assert_eq!(store.cart_items(alice)[0].quantity, 1);
    assert_eq!(store.cart_items(bob)[0].quantity, 1);
}

#[tokio::test]
async fn should_return_not_found_when_adding_unknown_movie() {
    let store = MemoryStore::new();
    let alice = store.add_user("alice", "pw");

    let result = add_uc(&store).execute(alice, MovieId(404)).await;

    assert!(matches!(result, Err(StoreServiceError::MovieNotFound)));
    assert!(store.cart_items(alice).is_empty());
}

#[tokio::test]
async fn should_view_cart_with_total() {
    let store = MemoryStore::new();
    let heat = store.add_movie("Heat", "12.00");
    let alien = store.add_movie("Alien", "9.99");
    let alice = store.add_user("alice", "pw");
    let uc = add_uc(&store);
    uc.execute(alice, heat).await.unwrap();
    uc.execute(alice, alien).await.unwrap();
    uc.execute(alice, alien).await.unwrap();

    let lines = ViewCartUseCase {
        cart: store.clone(),
    }
    .execute(alice)
    .await
    .unwrap();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].movie.title, "Alien");
    assert_eq!(lines[1].subtotal(), "19.98".parse::<Decimal>().unwrap());
    assert_eq!(cart_total(&lines), "31.98".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn should_remove_own_item() {
    let store = MemoryStore::new();
    let movie_id = store.add_movie("Heat", "12.00");
    let alice = store.add_user("alice", "pw");
    let item = add_uc(&store).execute(alice, movie_id).await.unwrap();

    RemoveFromCartUseCase {
        cart: store.clone(),
    }
    .execute(alice, item.id)
    .await
    .unwrap();

    assert!(store.cart_items(alice).is_empty());
}

#[tokio::test]
async fn should_not_remove_someone_elses_item() {
    let store = MemoryStore::new();
    let movie_id = store.add_movie("Heat", "12.00");
    let alice = store.add_user("alice", "pw");
    let mallory = store.add_user("mallory", "pw");
    let item = add_uc(&store).execute(alice, movie_id).await.unwrap();
    let uc = RemoveFromCartUseCase {
        cart: store.clone(),
    };

    let foreign = uc.execute(mallory, item.id).await;
    let unknown = uc.execute(alice, CartItemId(9999)).await;

    assert!(matches!(foreign, Err(StoreServiceError::CartItemNotFound)));
    assert!(matches!(unknown, Err(StoreServiceError::CartItemNotFound)));
    assert_eq!(store.cart_items(alice).len(), 1);
}
