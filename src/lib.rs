pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod notification;
pub mod preset;
pub mod render;
pub mod serialize;
pub mod session;
pub mod state;
pub mod storage;
pub mod theme;
pub mod worker;

pub use error::{AppError, AppResult};
pub use model::{Config, ConfigPath, ConfigValue, LayoutVariant, PathMutator};
pub use preset::PresetRegistry;
pub use render::{render, DeviceFrame, RenderSpec};
pub use session::{EditorSession, ImportReport, Preview};
pub use state::ConfigStore;
pub use theme::{Palette, ThemeRegistry};

/// Entrypoint used by presentation layers: installs logging, reads
/// `config.json` and opens a session that notifies through the desktop.
pub fn launch() -> EditorSession {
    logging::init();
    tracing::info!("starting stylecraft");

    let app_config = config::load_app_config();
    let session =
        EditorSession::from_app_config(&app_config, Box::new(notification::DesktopNotifier));

    tracing::info!(theme = session.theme(), "startup complete");
    session
}
