use std::sync::Arc;

use super::error::{StateError, StateResult};
use super::event::{ChangeCause, StoreSnapshot};
use crate::model::{Config, ConfigPath, ConfigValue, PathMutator};

type Observer = Box<dyn Fn(&StoreSnapshot)>;

/// Owns the current [`Config`] and hands out immutable snapshots.
pub struct ConfigStore {
    current: Arc<Config>,
    default: Arc<Config>,
    revision: u64,
    observers: Vec<Observer>,
}

impl ConfigStore {
    /// `default` is the baseline `reset` returns to for the lifetime of the store.
    pub fn new(default: Config) -> Self {
        let default = Arc::new(default);
        Self {
            current: Arc::clone(&default),
            default,
            revision: 0,
            observers: Vec::new(),
        }
    }

    pub fn current(&self) -> Arc<Config> {
        Arc::clone(&self.current)
    }

    pub fn default_config(&self) -> &Config {
        &self.default
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, observer: impl Fn(&StoreSnapshot) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn update(&mut self, path: ConfigPath, value: ConfigValue) -> StateResult<Arc<Config>> {
        tracing::debug!(%path, ?value, revision = self.revision, "request config update");
        let next = PathMutator::set(&self.current, path, value).map_err(|source| {
            tracing::warn!(%path, %source, "config update rejected");
            StateError::RejectedUpdate {
                revision: self.revision,
                source,
            }
        })?;

        self.commit(Arc::new(next), ChangeCause::Update(path));
        Ok(self.current())
    }

    pub fn replace(&mut self, config: Config) -> Arc<Config> {
        self.commit(Arc::new(config), ChangeCause::Replace);
        self.current()
    }

    pub fn reset(&mut self) -> Arc<Config> {
        let default = Arc::clone(&self.default);
        self.commit(default, ChangeCause::Reset);
        self.current()
    }

    fn commit(&mut self, config: Arc<Config>, cause: ChangeCause) {
        self.current = config;
        self.revision += 1;
        tracing::debug!(revision = self.revision, ?cause, "config committed");

        if self.observers.is_empty() {
            return;
        }
        let snapshot = StoreSnapshot {
            revision: self.revision,
            cause,
            config: self.current(),
        };
        for observer in &self.observers {
            observer(&snapshot);
        }
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("revision", &self.revision)
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Align, LayoutVariant, MutationError};
    use crate::preset::PresetRegistry;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store() -> ConfigStore {
        ConfigStore::new(PresetRegistry::baseline().clone())
    }

    #[test]
    fn update_commits_new_snapshot_without_touching_old_one() {
        let mut store = store();
        let before = store.current();

        let after = store
            .update(ConfigPath::ButtonRadius, ConfigValue::Px(40))
            .expect("button radius update should apply");

        assert_eq!(after.button.radius, 40);
        assert_eq!(before.button.radius, 20);
        assert_eq!(store.current().button.align, Align::Center);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn rejected_update_leaves_store_unchanged() {
        let mut store = store();
        let before = store.current();

        let err = store
            .update(ConfigPath::LayoutBg, ConfigValue::Px(3))
            .expect_err("pixel value for a color leaf should fail");

        assert!(matches!(
            err,
            StateError::RejectedUpdate {
                revision: 0,
                source: MutationError::TypeMismatch { .. }
            }
        ));
        assert_eq!(store.current(), before);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn reset_always_returns_the_fixed_default() {
        let mut store = store();
        store
            .update(ConfigPath::CurrentLayout, LayoutVariant::B.into())
            .unwrap();
        store.replace(PresetRegistry::lookup("Clean").unwrap().clone());

        let first = store.reset();
        store.update(ConfigPath::GalleryGap, ConfigValue::Px(0)).unwrap();
        let second = store.reset();

        assert_eq!(*first, *PresetRegistry::baseline());
        assert_eq!(first, second);
        assert_eq!(store.default_config(), PresetRegistry::baseline());
    }

    #[test]
    fn replace_installs_the_whole_config() {
        let mut store = store();
        store.update(ConfigPath::TypographySize, ConfigValue::Px(59)).unwrap();

        let clean = PresetRegistry::lookup("Clean").unwrap().clone();
        let current = store.replace(clean.clone());

        assert_eq!(*current, clean);
    }

    #[test]
    fn observers_see_every_commit_in_order() {
        let mut store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |snapshot| {
            sink.borrow_mut()
                .push((snapshot.revision, snapshot.cause, snapshot.config.button.radius));
        });

        store.update(ConfigPath::ButtonRadius, ConfigValue::Px(7)).unwrap();
        let _ = store.update(ConfigPath::ButtonRadius, ConfigValue::Unset);
        store.reset();

        assert_eq!(
            *seen.borrow(),
            vec![
                (1, ChangeCause::Update(ConfigPath::ButtonRadius), 7),
                (2, ChangeCause::Reset, 20),
            ]
        );
    }
}
