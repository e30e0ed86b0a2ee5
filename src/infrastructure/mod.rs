pub mod argon2_password_encoder;
pub mod database;
pub mod entity;
pub mod logging;
pub mod settings;
pub mod user_repository;
