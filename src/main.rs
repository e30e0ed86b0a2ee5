mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    infrastructure::{
        argon2_password_encoder::Argon2PasswordEncoder, database, logging::init_logging,
        settings::Settings, user_repository::SeaOrmUserRepository,
    },
    presentation::handlers::user_handler::create_user_router,
    usecase::register_user_usecase::RegisterUserUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a missing .env file is fine, the environment may already be set
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;
    init_logging(&settings.log_level)?;

    let db = database::connect(&settings).await?;
    database::ensure_schema(&db).await?;

    let user_repository = SeaOrmUserRepository::new(db);
    let password_encoder = Argon2PasswordEncoder::new();
    let register_user_usecase = RegisterUserUsecase::new(user_repository, password_encoder);

    let app = Router::new()
        .route("/", get(|| async { "Registration service is running" }))
        .nest("/api", create_user_router(register_user_usecase))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&settings.http_addr).await?;
    info!(addr = %settings.http_addr, "listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
