use scribble_base::log;
use scribble_infer::{DigitNetConfig, Inference, ModelSlot, ModelSource};
use scribble_pad::{Session, SessionConfig};
use std::env;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    scribble_base::init_stdout_logger();

    let mut args = env::args().skip(1);
    let Some(image_path) = args.next() else {
        eprintln!("usage: scribble-classify <image> [correct-digit]");
        std::process::exit(2);
    };
    let correction = args.next();

    let model_path: PathBuf = env::var("SCRIBBLE_MODEL_PATH")
        .unwrap_or_else(|_| "models/digits.safetensors".to_string())
        .into();
    let model_config = match env::var("SCRIBBLE_MODEL_CONFIG") {
        Ok(path) => DigitNetConfig::from_file(path)?,
        Err(_) => DigitNetConfig::default(),
    };

    log::info!("Model: {}", model_path.display());

    let inference = Inference::cpu();
    let slot = ModelSlot::new();
    let load = slot.spawn_load(async move {
        inference
            .use_digit_classifier(ModelSource::File(model_path), model_config)
            .await
    });

    let config = SessionConfig::default();
    let bar_width = config.bar_width;
    let mut session = Session::new(config, slot)?;

    let bytes = std::fs::read(&image_path)?;
    session.upload(&bytes).await?;

    if let Err(err) = load.await? {
        log::error!("model load failed: {err}");
    }

    match session.classify().await {
        Ok(prediction) => print!("{}", prediction.render_text(bar_width)),
        Err(err) => match err.notice() {
            Some(notice) => println!("{notice}"),
            None => return Err(err.into()),
        },
    }

    if let Some(text) = correction {
        match session.submit_correction(&text) {
            Ok(count) => println!("Added feedback sample: {count}"),
            Err(err) => println!("{}", err.notice().unwrap_or("correction rejected")),
        }
    }

    Ok(())
}
