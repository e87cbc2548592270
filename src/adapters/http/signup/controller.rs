//! Signup controller.
//!
//! Gates, in order:
//! 1. required fields present (`name`, `email`, `password`, `passwordConfirmation`)
//! 2. email is a string accepted by the [`EmailValidator`]
//! 3. password, confirmation and name are strings, and password equals its
//!    confirmation
//! 4. account created through [`AddAccount`]
//!
//! Gates 1-3 answer 400. Any collaborator fault during 2-4 becomes a 500,
//! and that conversion happens in [`Controller::handle`] and nowhere else.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::adapters::http::errors::HttpError;
use crate::adapters::http::helpers::{bad_request, ok, server_error};
use crate::adapters::http::protocol::{Controller, HttpRequest, HttpResponse};
use crate::domain::foundation::DomainError;
use crate::ports::{AddAccount, EmailValidator};

use super::dto::{AccountResponse, RequiredFields, SignUpResponseBody};

pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    /// Runs every gate. `Err` means a collaborator faulted.
    async fn sign_up(
        &self,
        body: &Value,
    ) -> Result<HttpResponse<SignUpResponseBody>, DomainError> {
        let fields = match RequiredFields::check(body) {
            Ok(fields) => fields,
            Err(error) => return Ok(reject(error)),
        };

        let email = match fields.email() {
            Ok(email) => email,
            Err(error) => return Ok(reject(error)),
        };
        if !self.email_validator.is_valid(email)? {
            return Ok(reject(HttpError::invalid_param("email")));
        }

        let form = match fields.into_form() {
            Ok(form) => form,
            Err(error) => return Ok(reject(error)),
        };
        if !form.passwords_match() {
            return Ok(reject(HttpError::invalid_param("passwordConfirmation")));
        }

        let account = self.add_account.add(form.into_command()).await?;

        Ok(ok(AccountResponse::from(account)))
    }
}

fn reject(error: HttpError) -> HttpResponse<SignUpResponseBody> {
    tracing::debug!(reason = %error, "signup rejected");
    bad_request(error)
}

#[async_trait]
impl Controller for SignUpController {
    type Body = SignUpResponseBody;

    async fn handle(&self, request: HttpRequest) -> HttpResponse<SignUpResponseBody> {
        match self.sign_up(&request.body).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(code = %error.code(), reason = error.message(), "signup failed");
                server_error()
            }
        }
    }
}
