use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
    sea_query::{Expr, Func},
};

use marquee_core::sea_ext::FilterContainsCi;
use marquee_domain::id::{CartItemId, MovieId, OrderId, ReviewId, UserId};
use marquee_store_schema::{cart_items, movies, order_movies, orders, reviews, users};

use crate::domain::repository::{
    CartRepository, MovieRepository, OrderRepository, ReviewRepository, UserRepository,
};
use crate::domain::types::{CartItem, CartLine, Movie, NewMovie, NewUser, Order, Review, User};
use crate::error::StoreServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreServiceError> {
        let model = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn username_taken(&self, username: &str) -> Result<bool, StoreServiceError> {
        let count = users::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(users::Column::Username)))
                    .eq(username.to_lowercase()),
            )
            .count(&self.db)
            .await
            .context("count users by username")?;
        Ok(count > 0)
    }

    async fn create(&self, user: &NewUser) -> Result<User, StoreServiceError> {
        let model = users::ActiveModel {
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            date_joined: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(user_from_model(model))
    }

    async fn set_password_hash(
        &self,
        id: UserId,
        password_hash: &str,
    ) -> Result<(), StoreServiceError> {
        users::ActiveModel {
            id: Set(id.0),
            password_hash: Set(password_hash.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update password hash")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: UserId(model.id),
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        date_joined: model.date_joined,
    }
}

// ── Movie repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMovieRepository {
    pub db: DatabaseConnection,
}

impl MovieRepository for DbMovieRepository {
    async fn search(&self, query: Option<&str>) -> Result<Vec<Movie>, StoreServiceError> {
        let mut select = movies::Entity::find().order_by_asc(movies::Column::Id);
        if let Some(query) = query {
            select = select.filter_contains_ci(movies::Column::Title, query);
        }
        let models = select.all(&self.db).await.context("search movies")?;
        Ok(models.into_iter().map(movie_from_model).collect())
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, StoreServiceError> {
        let model = movies::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find movie by id")?;
        Ok(model.map(movie_from_model))
    }

    async fn count(&self) -> Result<u64, StoreServiceError> {
        let count = movies::Entity::find()
            .count(&self.db)
            .await
            .context("count movies")?;
        Ok(count)
    }

    async fn create_many(&self, batch: &[NewMovie]) -> Result<usize, StoreServiceError> {
        if batch.is_empty() {
            return Ok(0);
        }
        let today = Utc::now().date_naive();
        let models: Vec<movies::ActiveModel> = batch
            .iter()
            .map(|movie| movies::ActiveModel {
                title: Set(movie.title.clone()),
                price: Set(movie.price),
                description: Set(movie.description.clone()),
                image: Set(movie.image.clone()),
                release_date: Set(movie.release_date.unwrap_or(today)),
                ..Default::default()
            })
            .collect();
        let count = models.len();
        self.db
            .transaction::<_, (), sea_orm::DbErr>(move |txn| {
                Box::pin(async move {
                    movies::Entity::insert_many(models)
                        .exec_without_returning(txn)
                        .await?;
                    Ok(())
                })
            })
            .await
            .context("create movies")?;
        Ok(count)
    }
}

fn movie_from_model(model: movies::Model) -> Movie {
    Movie {
        id: MovieId(model.id),
        title: model.title,
        price: model.price,
        description: model.description,
        image: model.image,
        release_date: model.release_date,
    }
}

// ── Review repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReviewRepository {
    pub db: DatabaseConnection,
}

impl ReviewRepository for DbReviewRepository {
    async fn list_by_movie(&self, movie_id: MovieId) -> Result<Vec<Review>, StoreServiceError> {
        let rows = reviews::Entity::find()
            .filter(reviews::Column::MovieId.eq(movie_id.0))
            .order_by_desc(reviews::Column::CreatedAt)
            .order_by_desc(reviews::Column::Id)
            .find_also_related(users::Entity)
            .all(&self.db)
            .await
            .context("list reviews by movie")?;
        Ok(rows.into_iter().map(review_from_row).collect())
    }

    async fn find_by_movie_and_user(
        &self,
        movie_id: MovieId,
        user_id: UserId,
    ) -> Result<Option<Review>, StoreServiceError> {
        let row = reviews::Entity::find()
            .filter(reviews::Column::MovieId.eq(movie_id.0))
            .filter(reviews::Column::UserId.eq(user_id.0))
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .context("find review by movie and user")?;
        Ok(row.map(review_from_row))
    }

    async fn find_owned(
        &self,
        id: ReviewId,
        user_id: UserId,
    ) -> Result<Option<Review>, StoreServiceError> {
        let row = reviews::Entity::find_by_id(id.0)
            .filter(reviews::Column::UserId.eq(user_id.0))
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .context("find owned review")?;
        Ok(row.map(review_from_row))
    }

    async fn create(
        &self,
        movie_id: MovieId,
        user_id: UserId,
        content: &str,
    ) -> Result<Review, StoreServiceError> {
        let model = reviews::ActiveModel {
            movie_id: Set(movie_id.0),
            user_id: Set(user_id.0),
            content: Set(content.to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create review")?;
        let author = users::Entity::find_by_id(user_id.0)
            .one(&self.db)
            .await
            .context("find review author")?;
        Ok(review_from_row((model, author)))
    }

    async fn update_content(&self, id: ReviewId, content: &str) -> Result<(), StoreServiceError> {
        reviews::ActiveModel {
            id: Set(id.0),
            content: Set(content.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update review content")?;
        Ok(())
    }

    async fn delete(&self, id: ReviewId) -> Result<(), StoreServiceError> {
        reviews::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete review")?;
        Ok(())
    }
}

fn review_from_row((model, author): (reviews::Model, Option<users::Model>)) -> Review {
    Review {
        id: ReviewId(model.id),
        movie_id: MovieId(model.movie_id),
        user_id: UserId(model.user_id),
        username: author.map(|u| u.username).unwrap_or_default(),
        content: model.content,
        created_at: model.created_at,
    }
}

// ── Cart repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCartRepository {
    pub db: DatabaseConnection,
}

impl CartRepository for DbCartRepository {
    async fn list(&self, user_id: UserId) -> Result<Vec<CartLine>, StoreServiceError> {
        let rows = cart_items::Entity::find()
            .filter(cart_items::Column::UserId.eq(user_id.0))
            .order_by_asc(cart_items::Column::Id)
            .find_also_related(movies::Entity)
            .all(&self.db)
            .await
            .context("list cart items")?;
        Ok(rows
            .into_iter()
            .filter_map(|(item, movie)| {
                Some(CartLine {
                    item: cart_item_from_model(item),
                    movie: movie_from_model(movie?),
                })
            })
            .collect())
    }

    async fn find(
        &self,
        user_id: UserId,
        movie_id: MovieId,
    ) -> Result<Option<CartItem>, StoreServiceError> {
        let model = cart_items::Entity::find()
            .filter(cart_items::Column::UserId.eq(user_id.0))
            .filter(cart_items::Column::MovieId.eq(movie_id.0))
            .one(&self.db)
            .await
            .context("find cart item")?;
        Ok(model.map(cart_item_from_model))
    }

    async fn create(
        &self,
        user_id: UserId,
        movie_id: MovieId,
    ) -> Result<CartItem, StoreServiceError> {
        let model = cart_items::ActiveModel {
            user_id: Set(user_id.0),
            movie_id: Set(movie_id.0),
            quantity: Set(1),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create cart item")?;
        Ok(cart_item_from_model(model))
    }

    async fn set_quantity(&self, id: CartItemId, quantity: i32) -> Result<(), StoreServiceError> {
        cart_items::ActiveModel {
            id: Set(id.0),
            quantity: Set(quantity),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update cart item quantity")?;
        Ok(())
    }

    async fn delete_owned(
        &self,
        id: CartItemId,
        user_id: UserId,
    ) -> Result<bool, StoreServiceError> {
        let result = cart_items::Entity::delete_many()
            .filter(cart_items::Column::Id.eq(id.0))
            .filter(cart_items::Column::UserId.eq(user_id.0))
            .exec(&self.db)
            .await
            .context("delete cart item")?;
        Ok(result.rows_affected > 0)
    }
}

fn cart_item_from_model(model: cart_items::Model) -> CartItem {
    CartItem {
        id: CartItemId(model.id),
        user_id: UserId(model.user_id),
        movie_id: MovieId(model.movie_id),
        quantity: model.quantity,
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreServiceError> {
        let orders = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id.0))
            .order_by_desc(orders::Column::CreatedAt)
            .order_by_desc(orders::Column::Id)
            .all(&self.db)
            .await
            .context("list orders by user")?;
        let linked = orders
            .load_many_to_many(movies::Entity, order_movies::Entity, &self.db)
            .await
            .context("load order movies")?;

        Ok(orders
            .into_iter()
            .zip(linked)
            .map(|(order, mut models)| {
                models.sort_by_key(|m| m.id);
                Order {
                    id: OrderId(order.id),
                    user_id: UserId(order.user_id),
                    created_at: order.created_at,
                    movies: models.into_iter().map(movie_from_model).collect(),
                }
            })
            .collect())
    }

    async fn create_from_cart(
        &self,
        user_id: UserId,
        movie_ids: &[MovieId],
        cart_item_ids: &[CartItemId],
    ) -> Result<OrderId, StoreServiceError> {
        let movie_ids: Vec<i32> = movie_ids.iter().map(|id| id.0).collect();
        let cart_item_ids: Vec<i32> = cart_item_ids.iter().map(|id| id.0).collect();
        let order_id = self
            .db
            .transaction::<_, i32, sea_orm::DbErr>(move |txn| {
                Box::pin(async move {
                    let order = orders::ActiveModel {
                        user_id: Set(user_id.0),
                        created_at: Set(Utc::now()),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    if !movie_ids.is_empty() {
                        order_movies::Entity::insert_many(movie_ids.iter().map(|&movie_id| {
                            order_movies::ActiveModel {
                                order_id: Set(order.id),
                                movie_id: Set(movie_id),
                            }
                        }))
                        .exec_without_returning(txn)
                        .await?;
                    }

                    cart_items::Entity::delete_many()
                        .filter(cart_items::Column::Id.is_in(cart_item_ids))
                        .filter(cart_items::Column::UserId.eq(user_id.0))
                        .exec(txn)
                        .await?;
                    Ok(order.id)
                })
            })
            .await
            .context("create order from cart")?;
        Ok(OrderId(order_id))
    }
}
