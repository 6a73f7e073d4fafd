use marquee_domain::form::{FormErrors, NON_FIELD_ERRORS};
use marquee_domain::id::UserId;
use marquee_domain::user::{is_valid_email, validate_password, validate_username};

use crate::domain::repository::{PasswordHasher, UserRepository};
use crate::domain::types::{NewUser, User};
use crate::error::StoreServiceError;

const REQUIRED: &str = "This field is required.";
const USERNAME_TAKEN: &str = "A user with that username already exists.";
const INVALID_EMAIL: &str = "Enter a valid email address.";
const PASSWORD_MISMATCH: &str = "The two password fields didn’t match.";
const INVALID_LOGIN: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";
const INCORRECT_OLD_PASSWORD: &str =
    "Your old password was entered incorrectly. Please enter it again.";

/// Check a new password pair. Strength problems are reported on `second_field`.
fn check_new_password(
    errors: &mut FormErrors,
    (first_field, first): (&str, &str),
    (second_field, second): (&str, &str),
    username: &str,
) {
    if first.is_empty() {
        errors.add(first_field, REQUIRED);
    }
    if second.is_empty() {
        errors.add(second_field, REQUIRED);
    }
    if first.is_empty() || second.is_empty() {
        return;
    }
    if first != second {
        errors.add(second_field, PASSWORD_MISMATCH);
        return;
    }
    for problem in validate_password(second, username) {
        errors.add(second_field, problem.to_string());
    }
}

// ── Register ─────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
}

pub struct RegisterUseCase<U: UserRepository, H: PasswordHasher> {
    pub users: U,
    pub hasher: H,
}

impl<U: UserRepository, H: PasswordHasher> RegisterUseCase<U, H> {
    pub async fn execute(&self, input: RegisterInput) -> Result<User, StoreServiceError> {
        let username = input.username.trim();
        let email = input.email.trim();
        let mut errors = FormErrors::new();

        match validate_username(username) {
            Ok(()) => {
                if self.users.username_taken(username).await? {
                    errors.add("username", USERNAME_TAKEN);
                }
            }
            Err(e) => errors.add("username", e.to_string()),
        }
        if !email.is_empty() && !is_valid_email(email) {
            errors.add("email", INVALID_EMAIL);
        }
        check_new_password(
            &mut errors,
            ("password1", &input.password1),
            ("password2", &input.password2),
            username,
        );
        errors.into_result()?;

        let password_hash = self.hasher.hash(&input.password1)?;
        let user = self
            .users
            .create(&NewUser {
                username: username.to_owned(),
                email: email.to_owned(),
                password_hash,
            })
            .await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginUseCase<U: UserRepository, H: PasswordHasher> {
    pub users: U,
    pub hasher: H,
}

impl<U: UserRepository, H: PasswordHasher> LoginUseCase<U, H> {
    pub async fn execute(&self, username: &str, password: &str) -> Result<User, StoreServiceError> {
        let username = username.trim();
        let mut errors = FormErrors::new();
        if username.is_empty() {
            errors.add("username", REQUIRED);
        }
        if password.is_empty() {
            errors.add("password", REQUIRED);
        }
        errors.into_result()?;

        if let Some(user) = self.users.find_by_username(username).await? {
            if self.hasher.verify(&user.password_hash, password)? {
                return Ok(user);
            }
        }
        tracing::debug!(username, "login rejected");
        let mut errors = FormErrors::new();
        errors.add(NON_FIELD_ERRORS, INVALID_LOGIN);
        Err(errors.into())
    }
}

// ── ChangePassword ───────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct ChangePasswordInput {
    pub old_password: String,
    pub new_password1: String,
    pub new_password2: String,
}

pub struct ChangePasswordUseCase<U: UserRepository, H: PasswordHasher> {
    pub users: U,
    pub hasher: H,
}

impl<U: UserRepository, H: PasswordHasher> ChangePasswordUseCase<U, H> {
    pub async fn execute(
        &self,
        user_id: UserId,
        input: ChangePasswordInput,
    ) -> Result<User, StoreServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(StoreServiceError::UserNotFound)?;

        let mut errors = FormErrors::new();
        if input.old_password.is_empty() {
            errors.add("old_password", REQUIRED);
        } else if !self.hasher.verify(&user.password_hash, &input.old_password)? {
            errors.add("old_password", INCORRECT_OLD_PASSWORD);
        }
        check_new_password(
            &mut errors,
            ("new_password1", &input.new_password1),
            ("new_password2", &input.new_password2),
            &user.username,
        );
        errors.into_result()?;

        let password_hash = self.hasher.hash(&input.new_password1)?;
        self.users.set_password_hash(user.id, &password_hash).await?;
        tracing::info!(user_id = %user.id, "password changed");
        Ok(User {
            password_hash,
            ..user
        })
    }
}
