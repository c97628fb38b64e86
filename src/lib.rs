#[cfg(feature = "data")]
pub mod domain;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{configure, run};

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;
    use validator::Validate;

    use crate::models::config::ServerConfig;
    use crate::repository::InMemoryRepository;
    use crate::routes::api::{api_v1_fields, api_v1_predict};
    use crate::routes::main::{show_form, submit_form};
    use crate::services::client::HttpPredictionClient;

    /// Registers every route of the application.
    ///
    /// Expects [`InMemoryRepository`], [`HttpPredictionClient`] and [`Tera`] as
    /// app data, plus session and flash message middleware.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(
            web::scope("/api")
                .service(api_v1_fields)
                .service(api_v1_predict),
        )
        .service(show_form)
        .service(submit_form);
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        server_config
            .validate()
            .map_err(|e| std::io::Error::other(format!("Invalid server config: {e}")))?;

        let client = HttpPredictionClient::new(
            server_config.predict_url.as_str(),
            server_config.predict_timeout(),
        )
        .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;
        log::info!("Forwarding predictions to {}", client.endpoint());

        let repo = InMemoryRepository::new(server_config.max_sessions);

        // Keys and stores for sessions and flash messages.
        let secret_key = Key::from(server_config.secret.as_bytes());

        let message_store = CookieMessageStore::builder(secret_key.clone()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        let cookie_secure = server_config.cookie_secure;

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(message_framework.clone())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                        .cookie_secure(cookie_secure)
                        .build(),
                )
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", "./assets"))
                .configure(configure)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(client.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
