//! Auth Commands
//!
//! Frontend bindings for the login command.

use serde::Serialize;
use storefront_core::{GatewayError, Session};

use super::{call, to_args};

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

pub async fn login(username: &str, password: &str) -> Result<Session, GatewayError> {
    let js_args = to_args(&LoginArgs { username, password })?;
    call("login", js_args).await
}
