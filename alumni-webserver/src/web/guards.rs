use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::{
    core::{prelude::*, usecases},
    web::jwt,
};
use alumni_application::error::AppError;
use alumni_core::usecases::Error as ParameterError;

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    account_id: Option<String>,
}

impl Auth {
    pub fn account_id(&self) -> Result<&str> {
        self.account_id
            .as_deref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn bearer_tokens(&self) -> &Vec<String> {
        &self.bearer_tokens
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    async fn account_id_from_jwt_in_header(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<String> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .filter_map(|token| jwt_state.validate_token_and_get_user_id(token).ok())
            .next()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        let account_id = Self::account_id_from_jwt_in_header(request, &bearer_tokens).await;
        Outcome::Success(Self {
            bearer_tokens,
            account_id,
        })
    }
}

/// The id of an authenticated user.
///
/// The user might have been deleted after the token has been issued,
/// flows must still resolve the account before using it.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn user<R: UserRepo>(&self, repo: &R) -> Result<User> {
        Ok(usecases::authorize_user_by_id(repo, self.id())?)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_id() {
            Ok(id) => Outcome::Success(Account(id.to_owned())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct Version(pub &'static str);
