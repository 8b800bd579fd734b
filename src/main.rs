use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use coursegen_server::{
    app_state::AppState,
    config::Config,
    errors::json_error_handler,
    handlers::{generate_content, health_check, index},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config);

    log::info!("Starting HTTP server on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(index)
            .service(health_check)
            .service(generate_content)
    })
    .bind((host, port))?
    .run()
    .await
}
