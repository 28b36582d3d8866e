use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::{debug, error};

use super::{render, templates};
use crate::data;

/// Counter state rides in the query string; the page itself is stateless.
#[derive(Debug, Deserialize)]
pub struct CounterQuery {
    #[serde(default)]
    count: Option<String>,
}

pub struct HomeService;

impl HomeService {
    /// 首页：计数器 + 示例数据概要
    ///
    /// `?count=` carries the current count; a malformed value falls back
    /// to 0 instead of erroring. The dataset summary is memoized (see
    /// [`data::evolvable_count`]) while the count re-renders on every
    /// navigation.
    pub async fn index(query: web::Query<CounterQuery>) -> impl Responder {
        let count: i64 = query
            .count
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0);
        debug!("Rendering home page, count={}", count);

        let html = render::render(
            templates::HOME,
            &[
                ("%COUNT%", count.to_string()),
                ("%DEC_HREF%", format!("/?count={}", count.saturating_sub(1))),
                ("%INC_HREF%", format!("/?count={}", count.saturating_add(1))),
                ("%EVOLVABLE_COUNT%", data::evolvable_count().to_string()),
                ("%TOTAL_COUNT%", data::all().len().to_string()),
            ],
        );

        match html {
            Ok(body) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(body),
            Err(e) => {
                error!("Failed to render home page: {}", e);
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}
