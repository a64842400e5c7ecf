//! Color Mixer main entry point

fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mixer_frontend=debug,mixer_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Color Mixer");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Color Mixer"),
        ..Default::default()
    };

    eframe::run_native(
        "mixer",
        native_options,
        Box::new(|cc| Ok(Box::new(mixer_frontend::ColorMixerApp::new(cc)))),
    )
}
