use crate::{
    api::{employee, health, leave_request},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_cors::Cors;
use actix_web::{HttpResponse, error::InternalError, middleware::Condition, web};
use serde_json::json;

pub type LimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter settings. Built once at startup; the limiter itself is
/// skipped when the configured rate is 0.
pub fn limiter_config(requests_per_min: u32) -> anyhow::Result<LimiterConfig> {
    let burst = requests_per_min.max(1);
    let per_ms = (60_000 / u64::from(burst)).max(1);
    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(burst)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("invalid rate limit: {requests_per_min} per minute"))
}

/// CORS for the browser frontend served from `Config::base_url`.
pub fn cors(config: &Config) -> Cors {
    config
        .cors_origins()
        .into_iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

// Malformed bodies get the same `{"message": ..}` shape as ledger errors.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let resp = HttpResponse::BadRequest().json(json!({ "message": err.to_string() }));
        InternalError::from_response(err, resp).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: &LimiterConfig) {
    cfg.app_data(json_config());
    cfg.service(health::health);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Condition::new(config.rate_per_min > 0, Governor::new(limiter)))
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // /employees/next-id
                    .service(
                        web::resource("/next-id").route(web::get().to(employee::next_employee_id)),
                    )
                    // /employees/{id}/balance
                    .service(
                        web::resource("/{employee_id}/balance")
                            .route(web::get().to(employee::get_balance)),
                    ),
            )
            .service(
                web::scope("/leaves")
                    .service(
                        web::resource("/apply").route(web::post().to(leave_request::apply_leave)),
                    )
                    .service(
                        web::resource("/approve")
                            .route(web::post().to(leave_request::approve_leave)),
                    )
                    .service(
                        web::resource("/reject").route(web::post().to(leave_request::reject_leave)),
                    )
                    .service(
                        web::resource("/pending")
                            .route(web::get().to(leave_request::pending_leaves)),
                    )
                    .service(
                        web::resource("/next-id").route(web::get().to(leave_request::next_leave_id)),
                    ),
            ),
    );
}
