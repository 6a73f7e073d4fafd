use axum::{
    Json,
    extract::{Query, State},
    response::Redirect,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use anyhow::Context as _;
use marquee_auth_types::cookie::{clear_session_cookie, set_session_cookie};
use marquee_auth_types::identity::{CurrentUser, SessionSettings};
use marquee_auth_types::token::issue_session;
use marquee_domain::id::UserId;

use crate::domain::types::User;
use crate::error::StoreServiceError;
use crate::handlers::{FormBody, FormView, ViewerView};
use crate::state::AppState;
use crate::usecase::account::{
    ChangePasswordInput, ChangePasswordUseCase, LoginUseCase, RegisterInput, RegisterUseCase,
};

const HOME_PATH: &str = "/";
const PASSWORD_CHANGE_DONE_PATH: &str = "/accounts/password_change/done/";

/// Sign `user` in on the returned jar.
fn start_session(
    jar: CookieJar,
    settings: &SessionSettings,
    user: &User,
) -> Result<CookieJar, StoreServiceError> {
    let (token, _) = issue_session(
        user.id.0,
        &user.username,
        &settings.secret,
        settings.ttl_secs,
    )
    .context("issue session")?;
    Ok(set_session_cookie(
        jar,
        token,
        settings.ttl_secs,
        settings.secure_cookie,
    ))
}

/// Post-login target: local absolute paths only, otherwise `/`.
pub(crate) fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path)
            if path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\") =>
        {
            path
        }
        _ => HOME_PATH,
    }
}

// ── /accounts/register/ ──────────────────────────────────────────────────────

const REGISTER_FIELDS: &[&str] = &["username", "email", "password1", "password2"];

pub async fn register_form() -> Json<FormView> {
    Json(FormView {
        fields: REGISTER_FIELDS,
    })
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
}

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    FormBody(form): FormBody<RegisterForm>,
) -> Result<(CookieJar, Redirect), StoreServiceError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        hasher: state.password_hasher(),
    };
    let user = usecase
        .execute(RegisterInput {
            username: form.username,
            email: form.email,
            password1: form.password1,
            password2: form.password2,
        })
        .await?;
    let jar = start_session(jar, &state.session, &user)?;
    Ok((jar, Redirect::to(HOME_PATH)))
}

// ── /accounts/login/ ─────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct NextQuery {
    pub next: Option<String>,
}

#[derive(Serialize)]
pub struct LoginView {
    pub fields: &'static [&'static str],
    pub next: String,
}

pub async fn login_form(Query(query): Query<NextQuery>) -> Json<LoginView> {
    Json(LoginView {
        fields: &["username", "password"],
        next: safe_next(query.next.as_deref()).to_owned(),
    })
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub next: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    Query(query): Query<NextQuery>,
    jar: CookieJar,
    FormBody(form): FormBody<LoginForm>,
) -> Result<(CookieJar, Redirect), StoreServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        hasher: state.password_hasher(),
    };
    let user = usecase.execute(&form.username, &form.password).await?;
    let jar = start_session(jar, &state.session, &user)?;
    let next = form.next.or(query.next);
    Ok((jar, Redirect::to(safe_next(next.as_deref()))))
}

// ── POST /accounts/logout/ ───────────────────────────────────────────────────

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    (
        clear_session_cookie(jar, state.session.secure_cookie),
        Redirect::to(HOME_PATH),
    )
}

// ── /accounts/password_change/ ───────────────────────────────────────────────

const PASSWORD_CHANGE_FIELDS: &[&str] = &["old_password", "new_password1", "new_password2"];

pub async fn password_change_form(_user: CurrentUser) -> Json<FormView> {
    Json(FormView {
        fields: PASSWORD_CHANGE_FIELDS,
    })
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct PasswordChangeForm {
    pub old_password: String,
    pub new_password1: String,
    pub new_password2: String,
}

pub async fn password_change(
    user: CurrentUser,
    State(state): State<AppState>,
    jar: CookieJar,
    FormBody(form): FormBody<PasswordChangeForm>,
) -> Result<(CookieJar, Redirect), StoreServiceError> {
    let usecase = ChangePasswordUseCase {
        users: state.user_repo(),
        hasher: state.password_hasher(),
    };
    let user = usecase
        .execute(
            UserId(user.user_id),
            ChangePasswordInput {
                old_password: form.old_password,
                new_password1: form.new_password1,
                new_password2: form.new_password2,
            },
        )
        .await?;
    let jar = start_session(jar, &state.session, &user)?;
    Ok((jar, Redirect::to(PASSWORD_CHANGE_DONE_PATH)))
}

#[derive(Serialize)]
pub struct PasswordChangeDoneView {
    pub user: ViewerView,
    pub message: &'static str,
}

pub async fn password_change_done(user: CurrentUser) -> Json<PasswordChangeDoneView> {
    Json(PasswordChangeDoneView {
        user: user.into(),
        message: "Your password was changed.",
    })
}
