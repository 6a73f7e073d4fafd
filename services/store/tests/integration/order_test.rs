use marquee_store::usecase::cart::AddToCartUseCase;
use marquee_store::usecase::order::{ListOrdersUseCase, PlaceOrderUseCase};

use crate::helpers::MemoryStore;

fn place_uc(store: &MemoryStore) -> PlaceOrderUseCase<MemoryStore, MemoryStore> {
    PlaceOrderUseCase {
        cart: store.clone(),
        orders: store.clone(),
    }
}

#[tokio::test]
async fn should_not_create_order_for_empty_cart() {
    let store = MemoryStore::new();
    let alice = store.add_user("alice", "pw");

    let placed = place_uc(&store).execute(alice).await.unwrap();

    assert!(placed.is_none());
    assert_eq!(store.order_count(), 0);
}

#[tokio::test]
async fn should_link_every_cart_movie_and_empty_cart() {
    let store = MemoryStore::new();
    let heat = store.add_movie("Heat", "12.00");
    let alien = store.add_movie("Alien", "9.99");
    let ran = store.add_movie("Ran", "7.50");
    let alice = store.add_user("alice", "pw");
    let add = AddToCartUseCase {
        movies: store.clone(),
        cart: store.clone(),
    };
    for movie_id in [heat, alien, ran, alien] {
        add.execute(alice, movie_id).await.unwrap();
    }

    let order_id = place_uc(&store)
        .execute(alice)
        .await
        .unwrap()
        .expect("order placed");

    assert_eq!(store.order_count(), 1);
    assert!(store.cart_items(alice).is_empty());
    let orders = ListOrdersUseCase {
        orders: store.clone(),
    }
    .execute(alice)
    .await
    .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order_id);
    let mut movie_ids: Vec<_> = orders[0].movies.iter().map(|m| m.id).collect();
    movie_ids.sort();
    assert_eq!(movie_ids, vec![heat, alien, ran]);
}

#[tokio::test]
async fn should_leave_other_carts_untouched() {
    let store = MemoryStore::new();
    let heat = store.add_movie("Heat", "12.00");
    let alice = store.add_user("alice", "pw");
    let bob = store.add_user("bob", "pw");
    let add = AddToCartUseCase {
        movies: store.clone(),
        cart: store.clone(),
    };
    add.execute(alice, heat).await.unwrap();
    add.execute(bob, heat).await.unwrap();

    place_uc(&store).execute(alice).await.unwrap();

    assert!(store.cart_items(alice).is_empty());
    assert_eq!(store.cart_items(bob).len(), 1);
}

#[tokio::test]
async fn should_list_only_own_orders_newest_first() {
    let store = MemoryStore::new();
    let heat = store.add_movie("Heat", "12.00");
    let alice = store.add_user("alice", "pw");
    let bob = store.add_user("bob", "pw");
    let add = AddToCartUseCase {
        movies: store.clone(),
        cart: store.clone(),
    };
    add.execute(alice, heat).await.unwrap();
    let first = place_uc(&store).execute(alice).await.unwrap().unwrap();
    add.execute(alice, heat).await.unwrap();
    let second = place_uc(&store).execute(alice).await.unwrap().unwrap();

    let list = ListOrdersUseCase {
        orders: store.clone(),
    };
    let alice_orders = list.execute(alice).await.unwrap();
    let bob_orders = list.execute(bob).await.unwrap();

    let ids: Vec<_> = alice_orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![second, first]);
    assert!(bob_orders.is_empty());
}
