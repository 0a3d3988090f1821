use piscine_practice::storage::{MemoryStore, ReadOnlyEframeStore};
use piscine_practice::{PracticeApp, PracticeConfig, PracticeSession, QuestionBank};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = PracticeConfig::from_env();
    let bank = match &config.catalog_path {
        Some(path) => QuestionBank::from_path(path)?,
        None => QuestionBank::embedded()?,
    };
    log::info!(
        "loaded {} questions from {}",
        bank.len(),
        config.source_label
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Piscine Practice")
            .with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Piscine Practice",
        options,
        Box::new(move |cc| {
            let session = match cc.storage {
                Some(storage) => PracticeSession::new(bank, &ReadOnlyEframeStore(storage), config),
                None => PracticeSession::new(bank, &MemoryStore::new(), config),
            };
            Ok(Box::new(PracticeApp::new(session)))
        }),
    )?;
    Ok(())
}
