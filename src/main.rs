use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use tracing::info;

use formsample::config::AppConfig;
use formsample::pages::{AppStartTime, FormService, HealthService, HomeService};
use formsample::system::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 记录程序启动时间
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    dotenv().ok();

    // Load configurations and set up logging
    let config = AppConfig::get();
    let _log_guard = init_logging(config);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server at http://{}", bind_address);

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_start_time.clone()))
            .route("/", web::get().to(HomeService::index))
            .route("/form", web::get().to(FormService::show))
            .route("/form", web::post().to(FormService::submit))
            .service(
                web::scope("/healthz")
                    .route("", web::get().to(HealthService::health_check))
                    .route("/ready", web::get().to(HealthService::readiness_check))
                    .route("/live", web::get().to(HealthService::liveness_check)),
            )
    })
    .bind(bind_address)?
    .run()
    .await
}
