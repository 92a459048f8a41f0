//! The editing session driven by the presentation layer.
//!
//! A session owns the [`ConfigStore`], the active palette and the preview
//! device frame. Every user action maps onto one method here and completes
//! before the next one starts; the only deferred work is reading an import
//! file, which runs on a worker thread and is committed by
//! [`EditorSession::poll_imports`].

mod import;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::model::{Config, ConfigPath, ConfigValue, LayoutVariant};
use crate::notification::{DesktopNotifier, Notifier};
use crate::preset::PresetRegistry;
use crate::render::{self, DeviceFrame, FrameSpec, RenderSpec};
use crate::serialize::{self, ImportedDocument, SerializeError};
use crate::state::{ConfigStore, StateError};
use crate::storage::{self, StorageError};
use crate::theme::{Palette, ThemeRegistry};

pub use import::ImportTicket;
use import::{CompletedRead, ImportQueue};

const INVALID_JSON_MESSAGE: &str = "Invalid JSON";
const INCOMPLETE_CONFIG_MESSAGE: &str = "Imported file is not a complete style configuration";

/// What an import did to the theme selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeChange {
    /// The document carried no theme.
    Unchanged,
    Switched(&'static str),
    /// The document named a theme that does not exist; the active one is kept.
    Ignored(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub config_applied: bool,
    pub theme: ThemeChange,
}

#[derive(Debug)]
pub enum ImportReport {
    Applied {
        ticket: ImportTicket,
        outcome: ImportOutcome,
    },
    Failed {
        ticket: ImportTicket,
        error: AppError,
    },
    /// A newer import was triggered before this one finished reading.
    Superseded { ticket: ImportTicket },
}

impl ImportReport {
    pub fn ticket(&self) -> ImportTicket {
        match self {
            Self::Applied { ticket, .. }
            | Self::Failed { ticket, .. }
            | Self::Superseded { ticket } => *ticket,
        }
    }
}

/// Everything the presentation layer needs to draw the live preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub frame: FrameSpec,
    pub layout: RenderSpec,
}

pub struct EditorSession {
    store: ConfigStore,
    palette: &'static Palette,
    device: DeviceFrame,
    export_dir: Option<PathBuf>,
    notifier: Box<dyn Notifier>,
    imports: ImportQueue,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::with_notifier(Box::new(DesktopNotifier))
    }

    pub fn with_notifier(notifier: Box<dyn Notifier>) -> Self {
        Self::from_app_config(&AppConfig::default(), notifier)
    }

    /// Unknown names in `app_config` are logged and replaced by the built-in
    /// defaults.
    pub fn from_app_config(app_config: &AppConfig, notifier: Box<dyn Notifier>) -> Self {
        let baseline = match app_config.baseline_preset.as_deref() {
            Some(name) => PresetRegistry::lookup(name).unwrap_or_else(|err| {
                tracing::warn!(%err, "configured baseline preset ignored");
                PresetRegistry::baseline()
            }),
            None => PresetRegistry::baseline(),
        };
        let palette = match app_config.initial_theme.as_deref() {
            Some(name) => ThemeRegistry::lookup(name).unwrap_or_else(|err| {
                tracing::warn!(%err, "configured initial theme ignored");
                ThemeRegistry::default_palette()
            }),
            None => ThemeRegistry::default_palette(),
        };

        tracing::info!(theme = palette.name, "editor session started");
        Self {
            store: ConfigStore::new(baseline.clone()),
            palette,
            device: DeviceFrame::default(),
            export_dir: app_config.export_dir.clone(),
            notifier,
            imports: ImportQueue::default(),
        }
    }

    pub fn config(&self) -> Arc<Config> {
        self.store.current()
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }

    pub fn theme(&self) -> &'static str {
        self.palette.name
    }

    pub fn palette(&self) -> &'static Palette {
        self.palette
    }

    pub fn device(&self) -> DeviceFrame {
        self.device
    }

    pub fn export_dir(&self) -> Option<&Path> {
        self.export_dir.as_deref()
    }

    pub fn select_theme(&mut self, name: &str) -> AppResult<&'static Palette> {
        let palette = ThemeRegistry::lookup(name)?;
        tracing::info!(theme = palette.name, "theme selected");
        self.palette = palette;
        Ok(palette)
    }

    pub fn select_preset(&mut self, name: &str) -> AppResult<Arc<Config>> {
        let preset = PresetRegistry::lookup(name)?;
        tracing::info!(preset = name, "preset selected");
        Ok(self.store.replace(preset.clone()))
    }

    pub fn update(&mut self, path: ConfigPath, value: ConfigValue) -> AppResult<Arc<Config>> {
        Ok(self.store.update(path, value)?)
    }

    /// Applies raw control input, addressing the leaf by its dotted path.
    pub fn update_str(&mut self, path: &str, raw: &str) -> AppResult<Arc<Config>> {
        let rejected = |source| StateError::RejectedUpdate {
            revision: self.store.revision(),
            source,
        };
        let path: ConfigPath = path.parse().map_err(rejected)?;
        let value = path.parse_value(raw).map_err(rejected)?;
        self.update(path, value)
    }

    pub fn set_layout(&mut self, variant: LayoutVariant) -> AppResult<Arc<Config>> {
        self.update(ConfigPath::CurrentLayout, ConfigValue::Layout(variant))
    }

    pub fn set_device(&mut self, device: DeviceFrame) {
        self.device = device;
    }

    pub fn reset(&mut self) -> Arc<Config> {
        tracing::info!("config reset to baseline");
        self.store.reset()
    }

    pub fn export(&self) -> AppResult<String> {
        Ok(serialize::export(&self.store.current(), self.palette.name)?)
    }

    pub fn export_to_dir(&self, dir: &Path) -> AppResult<PathBuf> {
        let contents = self.export()?;
        Ok(storage::write_export(dir, &contents)?)
    }

    /// Exports into the directory named by `export_dir` in `config.json`.
    pub fn export_to_configured_dir(&self) -> AppResult<PathBuf> {
        let dir = self
            .export_dir
            .as_deref()
            .ok_or(StorageError::MissingExportDir)?;
        self.export_to_dir(dir)
    }

    /// Parses `text` and applies it. On failure the user is notified and
    /// neither the config nor the theme changes.
    pub fn import_text(&mut self, text: &str) -> AppResult<ImportOutcome> {
        let document = serialize::import(text).map_err(|err| {
            let message = match &err {
                SerializeError::InvalidConfig(_) => INCOMPLETE_CONFIG_MESSAGE,
                _ => INVALID_JSON_MESSAGE,
            };
            tracing::warn!(%err, "import rejected");
            self.notifier.notify(message);
            err
        })?;
        Ok(self.apply_document(document))
    }

    /// Starts reading `path` in the background. The result is applied by a
    /// later [`EditorSession::poll_imports`].
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> ImportTicket {
        self.imports.spawn(path.as_ref())
    }

    pub fn pending_imports(&self) -> usize {
        self.imports.in_flight()
    }

    /// Applies imports whose reads have finished.
    pub fn poll_imports(&mut self) -> Vec<ImportReport> {
        let completed = self.imports.poll();
        self.apply_reads(completed)
    }

    /// Blocks until every pending import has been read, then applies them.
    pub fn finish_imports(&mut self) -> Vec<ImportReport> {
        let completed = self.imports.wait_all();
        self.apply_reads(completed)
    }

    pub fn render(&self) -> Preview {
        Preview {
            frame: self.device.spec(),
            layout: render::render(&self.store.current(), self.palette),
        }
    }

    fn apply_reads(&mut self, completed: Vec<CompletedRead>) -> Vec<ImportReport> {
        completed
            .into_iter()
            .map(|read| {
                let ticket = read.ticket;
                if read.superseded {
                    tracing::info!(
                        ticket = ticket.0,
                        path = %read.path.display(),
                        "discarding import superseded by a newer one"
                    );
                    return ImportReport::Superseded { ticket };
                }
                let result = read
                    .contents
                    .map_err(|err| {
                        tracing::warn!(%err, "import read failed");
                        self.notifier.notify(&err.to_string());
                        AppError::from(err)
                    })
                    .and_then(|text| self.import_text(&text));
                match result {
                    Ok(outcome) => ImportReport::Applied { ticket, outcome },
                    Err(error) => ImportReport::Failed { ticket, error },
                }
            })
            .collect()
    }

    fn apply_document(&mut self, document: ImportedDocument) -> ImportOutcome {
        let config_applied = match document.config {
            Some(config) => {
                self.store.replace(config);
                true
            }
            None => false,
        };

        let theme = match document.theme {
            None => ThemeChange::Unchanged,
            Some(name) => match ThemeRegistry::lookup(&name) {
                Ok(palette) => {
                    self.palette = palette;
                    ThemeChange::Switched(palette.name)
                }
                Err(_) => {
                    tracing::warn!(theme = %name, "imported theme is unknown; keeping current");
                    ThemeChange::Ignored(name)
                }
            },
        };

        tracing::info!(config_applied, ?theme, "import applied");
        ImportOutcome {
            config_applied,
            theme,
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("store", &self.store)
            .field("theme", &self.palette.name)
            .field("device", &self.device)
            .field("pending_imports", &self.imports.in_flight())
            .finish()
    }
}
