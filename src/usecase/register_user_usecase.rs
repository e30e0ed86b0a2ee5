use tracing::{info, instrument, warn};

use crate::domain::{
    error::DomainError,
    models::user::User,
    repositories::user_repository::UserRepository,
    services::password_service::PasswordEncoder,
};

pub struct RegisterUserUsecase<R: UserRepository, P: PasswordEncoder> {
    user_repository: R,
    password_encoder: P,
}

impl<R: UserRepository, P: PasswordEncoder> RegisterUserUsecase<R, P> {
    pub fn new(user_repository: R, password_encoder: P) -> Self {
        Self {
            user_repository,
            password_encoder,
        }
    }

    /// Encode the password and store the new user.
    ///
    /// The encoder runs exactly once and the store is only reached with its output.
    /// Either failure is returned unchanged and nothing is retried.
    #[instrument(skip(self, raw_password))]
    pub async fn register(
        &self,
        username: String,
        raw_password: String,
        email: String,
    ) -> Result<(), DomainError> {
        // Encode password
        let encoded_password = self.password_encoder.encode(&raw_password).map_err(|e| {
            warn!(error = %e, "password encoding failed");
            e
        })?;

        let user = User::new(username, encoded_password, email);

        self.user_repository.save(user).await.map_err(|e| {
            warn!(error = %e, "failed to save user");
            DomainError::from(e)
        })?;

        info!("user registered");
        Ok(())
    }
}
