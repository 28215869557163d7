use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use log::info;

use study_pass::config::Config;
use study_pass::model::ModelHost;
use study_pass::routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    info!("loading classifier from {}", config.model_path.display());
    let model = ModelHost::load(&config.model_path).with_context(|| {
        format!(
            "put the classifier artifact at {} or point MODEL_PATH at it",
            config.model_path.display()
        )
    })?;
    let model = web::Data::new(model);

    info!(
        "starting Student Pass Predictor on http://{}:{}",
        config.host, config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(model.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("cannot bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
