//! Login Flow
//!
//! Required-field validation followed by a single authenticate call.
//! Every authentication failure collapses into one generic message.

use crate::gateway::AuthGateway;
use crate::product::Session;

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Validated, non-empty credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Both fields must be non-empty
pub fn validate(username: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let errors = FieldErrors {
        username: username.is_empty().then_some(USERNAME_REQUIRED),
        password: password.is_empty().then_some(PASSWORD_REQUIRED),
    };
    if errors.is_empty() {
        Ok(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    } else {
        Err(errors)
    }
}

/// Result of one submit
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Validation failed, nothing was sent
    Invalid(FieldErrors),
    Authenticated(Session),
    /// Any authenticate failure
    Rejected,
}

impl LoginOutcome {
    /// Form-level message to display, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            LoginOutcome::Rejected => Some(INVALID_CREDENTIALS),
            _ => None,
        }
    }

    pub fn field_errors(&self) -> FieldErrors {
        match self {
            LoginOutcome::Invalid(errors) => errors.clone(),
            _ => FieldErrors::default(),
        }
    }
}

/// Submits credentials to an auth gateway
#[derive(Debug, Clone, Copy)]
pub struct LoginFlow<A> {
    gateway: A,
}

impl<A: AuthGateway> LoginFlow<A> {
    pub fn new(gateway: A) -> Self {
        Self { gateway }
    }

    pub async fn submit(&self, username: &str, password: &str) -> LoginOutcome {
        let credentials = match validate(username, password) {
            Ok(credentials) => credentials,
            Err(errors) => return LoginOutcome::Invalid(errors),
        };

        match self.gateway.login(&credentials.username, &credentials.password).await {
            Ok(session) => {
                log::info!("[LOGIN] Authenticated as {}", session.username);
                LoginOutcome::Authenticated(session)
            }
            Err(e) => {
                log::warn!("[LOGIN] Authentication failed: {}", e);
                LoginOutcome::Rejected
            }
        }
    }
}
