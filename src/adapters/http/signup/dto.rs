//! DTOs for the signup endpoint.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;

use crate::adapters::http::errors::HttpError;
use crate::domain::account::{Account, AddAccountCommand};

/// Fields every signup body must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "password", "passwordConfirmation"];

/// Signup body that carries every required field.
///
/// Only presence has been checked. Each gate decodes the fields it needs,
/// so a badly typed password never outranks a bad email.
pub struct RequiredFields<'a> {
    body: &'a Value,
}

impl<'a> RequiredFields<'a> {
    /// Reports the first field of [`REQUIRED_FIELDS`] that is absent or falsy
    /// (`null`, `false`, `0`, `""`). A body that is not an object has no fields.
    pub fn check(body: &'a Value) -> Result<Self, HttpError> {
        match REQUIRED_FIELDS
            .iter()
            .find(|field| !is_truthy(body.get(**field)))
        {
            Some(field) => Err(HttpError::missing_param(*field)),
            None => Ok(Self { body }),
        }
    }

    /// The submitted email, for the email gate.
    pub fn email(&self) -> Result<&'a str, HttpError> {
        text_field(self.body, "email")
    }

    /// Decodes the remaining fields in gate order: `password`,
    /// `passwordConfirmation`, then `name`.
    pub fn into_form(self) -> Result<SignUpForm, HttpError> {
        let email = self.email()?.to_owned();
        let password = text_field(self.body, "password")?;
        let password_confirmation = text_field(self.body, "passwordConfirmation")?;
        let name = text_field(self.body, "name")?;

        Ok(SignUpForm {
            name: name.to_owned(),
            email,
            password: SecretString::new(password.to_owned()),
            password_confirmation: SecretString::new(password_confirmation.to_owned()),
        })
    }
}

/// Fully typed signup body.
#[derive(Debug)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub password_confirmation: SecretString,
}

impl SignUpForm {
    /// Exact string equality between password and confirmation.
    pub fn passwords_match(&self) -> bool {
        self.password.expose_secret() == self.password_confirmation.expose_secret()
    }

    /// Drops the confirmation and builds the use case input.
    pub fn into_command(self) -> AddAccountCommand {
        AddAccountCommand {
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |v| v != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn text_field<'a>(body: &'a Value, field: &str) -> Result<&'a str, HttpError> {
    body.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| HttpError::invalid_param(field))
}

/// Created account as returned to the client.
///
/// `password` is the stored hash. It is returned as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            name: account.name,
            email: account.email,
            password: account.password,
        }
    }
}

/// Body of a signup response: the created account or an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SignUpResponseBody {
    Account(AccountResponse),
    Error(HttpError),
}

impl From<AccountResponse> for SignUpResponseBody {
    fn from(account: AccountResponse) -> Self {
        Self::Account(account)
    }
}

impl From<HttpError> for SignUpResponseBody {
    fn from(error: HttpError) -> Self {
        Self::Error(error)
    }
}
