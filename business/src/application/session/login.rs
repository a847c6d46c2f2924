use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::{Credentials, Session};
use crate::domain::session::use_cases::login::{LoginParams, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub credentials: Credentials,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<Session, SessionError> {
        if !self.credentials.matches(&params.username, &params.password) {
            self.logger
                .warn(&format!("Rejected login for user: {}", params.username));
            return Err(SessionError::InvalidCredentials);
        }

        self.logger
            .info(&format!("User logged in: {}", params.username));
        Ok(Session {
            username: params.username,
        })
    }
}
