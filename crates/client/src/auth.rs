//! Registration, login, and the stored session token
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error_notice, Client, Error, MsgResp, Navigator, RequestError, Result, Storage, Transport,
    ValidationError, LOGIN_PATH, COURSES_PATH, TOKEN_KEY,
};

/// Shown before sending the user back to the login view
pub const LOGIN_REQUIRED: &str = "You must log in to continue.";

/// Shown after a successful login
pub const LOGIN_SUCCESSFUL: &str = "Login successful";

/// Body of a login request
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: Password,
}

/// Body of a registration request
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub username: String,
    pub password: Password,
    pub role: String,
}

impl Registration {
    /// Every field must be non-empty
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() || self.password.as_ref().is_empty() || self.role.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }
}

/// Response given by the login endpoint
#[derive(Deserialize, Clone)]
pub struct LoginResp {
    pub access_token: Option<String>,
    pub role: Option<String>,
}

impl std::fmt::Debug for LoginResp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResp")
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("role", &self.role)
            .finish()
    }
}

/// Show the login notice and go to the login view. Callers should stop what they were doing.
pub fn require_login_or_redirect(ui: &mut impl Navigator) {
    ui.alert(LOGIN_REQUIRED);
    ui.navigate(LOGIN_PATH);
}

impl<T: Transport, S: Storage> Client<T, S> {
    /// Create an account. Nothing is sent unless all three fields are filled in.
    pub fn register_user(
        &self,
        ui: &mut impl Navigator,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<()> {
        let registration = Registration {
            username: username.to_string(),
            password: password.to_string().into(),
            role: role.to_string(),
        };
        if let Err(e) = registration.validate() {
            ui.alert(&e.to_string());
            return Err(e.into());
        }

        match self
            .post("/register", &registration, false)
            .and_then(|resp| Self::decode::<MsgResp>(&resp))
        {
            Ok(resp) => {
                info!("registered user {} as {}", username, role);
                ui.alert(&resp.into_notice());
                Ok(())
            }
            Err(e) => {
                warn!("registration of {} failed: {}", username, e);
                let e = Error::from(e);
                ui.alert(&error_notice(&e));
                Err(e)
            }
        }
    }

    /// Log in, keeping the returned token and moving on to the course list.
    ///
    /// Any previously stored token is only replaced once a new one has been received.
    pub fn login_user(
        &mut self,
        ui: &mut impl Navigator,
        username: &str,
        password: &str,
    ) -> Result<LoginResp> {
        match self.try_login(username, password) {
            Ok(resp) => {
                info!("logged in as {} (role {:?})", username, resp.role);
                ui.alert(LOGIN_SUCCESSFUL);
                ui.navigate(COURSES_PATH);
                Ok(resp)
            }
            Err(e) => {
                warn!("login as {} failed: {}", username, e);
                ui.alert(&error_notice(&e));
                Err(e)
            }
        }
    }

    fn try_login(&mut self, username: &str, password: &str) -> Result<LoginResp> {
        let creds = Credentials {
            username: username.to_string(),
            password: password.to_string().into(),
        };
        let resp = self.post("/login", &creds, false)?;
        let resp: LoginResp = Self::decode(&resp)?;
        let Some(token) = resp.access_token.as_deref().filter(|t| !t.is_empty()) else {
            return Err(RequestError::MissingToken.into());
        };
        self.storage.set(TOKEN_KEY, token)?;

        Ok(resp)
    }

    /// Forget the stored token and go back to the login view
    pub fn logout(&mut self, ui: &mut impl Navigator) -> Result<()> {
        self.storage.remove(TOKEN_KEY)?;
        info!("logged out");
        ui.navigate(LOGIN_PATH);
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }
}

/// A password, wrapped so we don't print it by accident
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Password (******)")
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Password(value)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
