use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use std::time::Instant;
use tracing::{info, trace};

use crate::data;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

pub struct HealthService;

impl HealthService {
    pub async fn health_check(app_start_time: web::Data<AppStartTime>) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let now = chrono::Utc::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u64;

        // 没有外部依赖，数据集在编译期就绪，始终 healthy
        let health_response = json!({
            "status": "healthy",
            "timestamp": now.to_rfc3339(),
            "uptime": uptime_seconds,
            "checks": {
                "dataset": {
                    "entries": data::all().len(),
                }
            },
            "response_time_ms": start_time.elapsed().as_millis()
        });

        info!(
            "Health check completed in {:?}, uptime: {}s",
            start_time.elapsed(),
            uptime_seconds
        );

        HttpResponse::Ok()
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(health_response)
    }

    // 简单的就绪检查，只返回 200 状态码
    pub async fn readiness_check() -> impl Responder {
        trace!("Received readiness check request");

        HttpResponse::Ok()
            .append_header(("Content-Type", "text/plain"))
            .body("OK")
    }

    // 活跃性检查
    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}
