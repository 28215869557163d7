use actix_web::{web, HttpResponse};
use log::{debug, info, warn};

use crate::features::derive_features;
use crate::form::PredictForm;
use crate::model::ModelHost;
use crate::page::render_index;

/// Registers every route. The caller supplies `web::Data<ModelHost>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(serve_homepage))
        .route("/predict", web::post().to(predict))
        .route("/health", web::get().to(health_check));
}

async fn serve_homepage() -> HttpResponse {
    html(render_index(&PredictForm::default(), None))
}

async fn predict(
    pairs: web::Form<Vec<(String, String)>>,
    model: web::Data<ModelHost>,
) -> actix_web::Result<HttpResponse> {
    let form = PredictForm::from_pairs(pairs.into_inner());
    let inputs = form.parse().map_err(|e| {
        warn!("rejected prediction request: {e}");
        e
    })?;

    let features = derive_features(&inputs);
    match serde_json::to_string(&features) {
        Ok(json) => debug!("derived features {json}"),
        Err(e) => debug!("derived features {features:?} (not serializable: {e})"),
    }

    let outcome = model.predict(&features).map_err(|e| {
        warn!("no verdict for request: {e}");
        e
    })?;
    info!("prediction: {outcome}");

    let prediction_text = format!("Result: {outcome}");
    Ok(html(render_index(&form, Some(&prediction_text))))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("Student Pass Predictor is running!")
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
