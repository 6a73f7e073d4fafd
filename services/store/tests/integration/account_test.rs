use marquee_domain::form::NON_FIELD_ERRORS;
use marquee_domain::id::UserId;
use marquee_store::domain::repository::{PasswordHasher, UserRepository};
use marquee_store::error::StoreServiceError;
use marquee_store::usecase::account::{
    ChangePasswordInput, ChangePasswordUseCase, LoginUseCase, RegisterInput, RegisterUseCase,
};

use crate::helpers::{MemoryStore, PlainHasher};

fn register_uc(store: &MemoryStore) -> RegisterUseCase<MemoryStore, PlainHasher> {
    RegisterUseCase {
        users: store.clone(),
        hasher: PlainHasher,
    }
}

fn input(username: &str, password1: &str, password2: &str) -> RegisterInput {
    RegisterInput {
        username: username.into(),
        email: String::new(),
        password1: password1.into(),
        password2: password2.into(),
    }
}

fn form_errors(result: Result<impl std::fmt::Debug, StoreServiceError>) -> marquee_domain::form::FormErrors {
    match result {
        Err(StoreServiceError::InvalidForm(errors)) => errors,
        other => panic!("expected InvalidForm, got {other:?}"),
    }
}

#[tokio::test]
async fn should_register_valid_user() {
    let store = MemoryStore::new();

    let user = register_uc(&store)
        .execute(input("cinephile", "kurosawa-1950", "kurosawa-1950"))
        .await
        .unwrap();

    assert_eq!(user.username, "cinephile");
    assert!(PlainHasher.verify(&user.password_hash, "kurosawa-1950").unwrap());
    assert!(store.find_by_username("cinephile").await.unwrap().is_some());
}

#[tokio::test]
async fn should_reject_mismatched_passwords() {
    let store = MemoryStore::new();

    let errors = form_errors(
        register_uc(&store)
            .execute(input("cinephile", "kurosawa-1950", "kurosawa-1951"))
            .await,
    );

    assert_eq!(
        errors.get("password2"),
        ["The two password fields didn’t match."]
    );
    assert!(store.find_by_username("cinephile").await.unwrap().is_none());
}

#[tokio::test]
async fn should_reject_weak_passwords() {
    let store = MemoryStore::new();

    let short_numeric = form_errors(register_uc(&store).execute(input("alice", "1234", "1234")).await);
    let common = form_errors(
        register_uc(&store)
            .execute(input("alice", "password", "password"))
            .await,
    );
    let similar = form_errors(
        register_uc(&store)
            .execute(input("alice", "alice-rocks", "alice-rocks"))
            .await,
    );

    let messages = short_numeric.get("password2");
    assert!(messages.iter().any(|m| m.contains("too short")));
    assert!(messages.iter().any(|m| m.contains("entirely numeric")));
    assert!(common.get("password2").iter().any(|m| m.contains("too common")));
    assert!(similar.get("password2").iter().any(|m| m.contains("too similar")));
}

#[tokio::test]
async fn should_reject_taken_username_ignoring_case() {
    let store = MemoryStore::new();
    store.add_user("Alice", "whatever-pw");

    let errors = form_errors(
        register_uc(&store)
            .execute(input("alice", "kurosawa-1950", "kurosawa-1950"))
            .await,
    );

    assert_eq!(
        errors.get("username"),
        ["A user with that username already exists."]
    );
}

#[tokio::test]
async fn should_reject_bad_username_and_email() {
    let store = MemoryStore::new();

    let errors = form_errors(
        register_uc(&store)
            .execute(RegisterInput {
                username: "no spaces".into(),
                email: "not-an-email".into(),
                password1: "kurosawa-1950".into(),
                password2: "kurosawa-1950".into(),
            })
            .await,
    );

    assert!(errors.has("username"));
    assert_eq!(errors.get("email"), ["Enter a valid email address."]);
}

#[tokio::test]
async fn should_require_every_field() {
    let store = MemoryStore::new();

    let errors = form_errors(register_uc(&store).execute(RegisterInput::default()).await);

    assert_eq!(errors.get("username"), ["This field is required."]);
    assert_eq!(errors.get("password1"), ["This field is required."]);
    assert_eq!(errors.get("password2"), ["This field is required."]);
    assert!(!errors.has("email"));
}

#[tokio::test]
async fn should_log_in_with_correct_password() {
    let store = MemoryStore::new();
    let id = store.add_user("alice", "kurosawa-1950");
    let uc = LoginUseCase {
        users: store,
        hasher: PlainHasher,
    };

    let user = uc.execute("alice", "kurosawa-1950").await.unwrap();

    assert_eq!(user.id, id);
}

#[tokio::test]
async fn should_reject_wrong_password_and_unknown_user_alike() {
    let store = MemoryStore::new();
    store.add_user("alice", "kurosawa-1950");
    let uc = LoginUseCase {
        users: store,
        hasher: PlainHasher,
    };

    let wrong = form_errors(uc.execute("alice", "nope").await);
    let unknown = form_errors(uc.execute("nobody", "kurosawa-1950").await);

    assert_eq!(wrong, unknown);
    assert_eq!(wrong.get(NON_FIELD_ERRORS).len(), 1);
}

#[tokio::test]
async fn should_change_password() {
    let store = MemoryStore::new();
    let id = store.add_user("alice", "kurosawa-1950");
    let uc = ChangePasswordUseCase {
        users: store.clone(),
        hasher: PlainHasher,
    };

    uc.execute(
        id,
        ChangePasswordInput {
            old_password: "kurosawa-1950".into(),
            new_password1: "ozu-tokyo-1953".into(),
            new_password2: "ozu-tokyo-1953".into(),
        },
    )
    .await
    .unwrap();

    let stored = UserRepository::find_by_id(&store, id).await.unwrap().unwrap();
    assert!(PlainHasher.verify(&stored.password_hash, "ozu-tokyo-1953").unwrap());
}

#[tokio::test]
async fn should_reject_wrong_old_password() {
    let store = MemoryStore::new();
    let id = store.add_user("alice", "kurosawa-1950");
    let uc = ChangePasswordUseCase {
        users: store.clone(),
        hasher: PlainHasher,
    };

    let errors = form_errors(
        uc.execute(
            id,
            ChangePasswordInput {
                old_password: "guess".into(),
                new_password1: "ozu-tokyo-1953".into(),
                new_password2: "ozu-tokyo-1953".into(),
            },
        )
        .await,
    );

    assert!(errors.has("old_password"));
    let stored = UserRepository::find_by_id(&store, id).await.unwrap().unwrap();
    assert!(PlainHasher.verify(&stored.password_hash, "kurosawa-1950").unwrap());
}

#[tokio::test]
async fn should_return_user_not_found_for_stale_session() {
    let uc = ChangePasswordUseCase {
        users: MemoryStore::new(),
        hasher: PlainHasher,
    };

    let result = uc.execute(UserId(31337), ChangePasswordInput::default()).await;

    assert!(matches!(result, Err(StoreServiceError::UserNotFound)));
}
