//! Observable theme store
//!
//! `ThemeStore` owns the single "which theme is active" value. The
//! application root creates one and hands out [`ThemeContext`] handles to
//! consumers. Theme instances themselves are immutable statics; only the
//! pointer to the active one changes.
//!
//! Changes are pushed: subscribers run synchronously, on the caller's
//! thread, after every change of the active theme. Mutations are serialized,
//! so listeners see changes in the order they were made, even when several
//! threads share the store. A listener must not mutate the store it is
//! subscribed to.

use crate::error::{Result, ThemeError};
use crate::preference::{MemoryPreferences, PreferenceProvider, ThemePreference};
use crate::theme::{ColorScheme, Theme, ThemeBundle};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock, Weak};

/// Callback invoked with the newly active theme
pub type ThemeListener = dyn Fn(&'static Theme) + Send + Sync;

struct StoreInner {
    bundle: ThemeBundle,
    provider: Box<dyn PreferenceProvider>,
    preference: RwLock<ThemePreference>,
    /// OS signal; `None` until the platform reports it
    system: RwLock<Option<ColorScheme>>,
    listeners: Mutex<FxHashMap<u64, Arc<ThemeListener>>>,
    next_listener: AtomicU64,
    /// Held from the write through the last notification
    changes: Mutex<()>,
}

impl StoreInner {
    fn new(
        bundle: ThemeBundle,
        provider: Box<dyn PreferenceProvider>,
        preference: ThemePreference,
    ) -> Arc<Self> {
        Arc::new(Self {
            bundle,
            provider,
            preference: RwLock::new(preference),
            system: RwLock::new(None),
            listeners: Mutex::new(FxHashMap::default()),
            next_listener: AtomicU64::new(1),
            changes: Mutex::new(()),
        })
    }

    fn begin_change(&self) -> MutexGuard<'_, ()> {
        self.changes.lock().unwrap()
    }

    fn resolved_scheme(&self) -> Option<ColorScheme> {
        let preference = *self.preference.read().unwrap();
        preference.resolve(*self.system.read().unwrap())
    }

    fn snapshot(&self) -> &'static Theme {
        match self.resolved_scheme() {
            Some(ColorScheme::Dark) => self.bundle.dark,
            _ => self.bundle.light,
        }
    }

    /// Run `change`, then notify listeners if the active theme moved
    fn apply(&self, _changes: &MutexGuard<'_, ()>, change: impl FnOnce(&Self)) {
        let before = self.snapshot();
        change(self);
        let after = self.snapshot();

        if std::ptr::eq(before, after) {
            return;
        }

        tracing::debug!(
            "ThemeStore: active theme {} -> {}",
            before.color_scheme(),
            after.color_scheme()
        );

        // Snapshot listeners so a callback may subscribe/unsubscribe
        let listeners: Vec<Arc<ThemeListener>> =
            self.listeners.lock().unwrap().values().cloned().collect();
        tracing::trace!("ThemeStore: notifying {} listener(s)", listeners.len());
        for listener in listeners {
            listener(after);
        }
    }

    fn store_preference(
        &self,
        changes: &MutexGuard<'_, ()>,
        preference: ThemePreference,
    ) -> Result<()> {
        self.provider.store(preference)?;
        self.apply(changes, |inner| *inner.preference.write().unwrap() = preference);
        Ok(())
    }

    fn set_preference(&self, preference: ThemePreference) -> Result<()> {
        let changes = self.begin_change();
        self.store_preference(&changes, preference)
    }

    fn toggle(&self) -> Result<ThemePreference> {
        let changes = self.begin_change();
        let next = match self.resolved_scheme() {
            Some(ColorScheme::Dark) => ThemePreference::Light,
            _ => ThemePreference::Dark,
        };
        self.store_preference(&changes, next)?;
        Ok(next)
    }

    fn set_system_scheme(&self, scheme: Option<ColorScheme>) {
        let changes = self.begin_change();
        self.apply(&changes, |inner| *inner.system.write().unwrap() = scheme);
    }
}

/// Root-owned theme state
pub struct ThemeStore {
    inner: Arc<StoreInner>,
}

impl ThemeStore {
    /// Create a store, loading the persisted preference from `provider`.
    ///
    /// The OS signal starts unresolved; feed it with
    /// [`set_system_scheme`](Self::set_system_scheme).
    pub fn new(bundle: ThemeBundle, provider: impl PreferenceProvider + 'static) -> Result<Self> {
        Self::with_fallback(bundle, provider, ThemePreference::System)
    }

    /// Like [`new`](Self::new), using `fallback` when nothing is stored yet
    pub fn with_fallback(
        bundle: ThemeBundle,
        provider: impl PreferenceProvider + 'static,
        fallback: ThemePreference,
    ) -> Result<Self> {
        let preference = provider.load()?.unwrap_or(fallback);
        tracing::debug!("ThemeStore: initial preference {}", preference);

        Ok(Self {
            inner: StoreInner::new(bundle, Box::new(provider), preference),
        })
    }

    /// Built-in themes with a non-persistent preference
    pub fn in_memory(preference: ThemePreference) -> Self {
        Self {
            inner: StoreInner::new(
                ThemeBundle::currensee(),
                Box::new(MemoryPreferences::with_value(preference)),
                preference,
            ),
        }
    }

    /// Handle for consumers; fails with `OutsideProvider` once the store is dropped
    pub fn context(&self) -> ThemeContext {
        ThemeContext {
            store: Arc::downgrade(&self.inner),
        }
    }

    // ========== Snapshot ==========

    /// The active theme: dark iff the resolved scheme is dark, otherwise light
    pub fn get_snapshot(&self) -> &'static Theme {
        self.inner.snapshot()
    }

    /// Resolved scheme, `None` while a `System` preference awaits the OS signal
    pub fn resolved_scheme(&self) -> Option<ColorScheme> {
        self.inner.resolved_scheme()
    }

    pub fn preference(&self) -> ThemePreference {
        *self.inner.preference.read().unwrap()
    }

    pub fn bundle(&self) -> ThemeBundle {
        self.inner.bundle
    }

    // ========== Mutation ==========

    /// Persist and apply a preference
    pub fn set_preference(&self, preference: ThemePreference) -> Result<()> {
        self.inner.set_preference(preference)
    }

    /// Flip between explicit light and dark; never selects `System`
    pub fn toggle(&self) -> Result<ThemePreference> {
        self.inner.toggle()
    }

    /// Receive the OS color-scheme signal
    pub fn set_system_scheme(&self, scheme: Option<ColorScheme>) {
        self.inner.set_system_scheme(scheme);
    }

    // ========== Subscription ==========

    /// Register a listener; it stays registered while the returned guard lives.
    ///
    /// The listener runs while the store holds its change lock, so it must
    /// not call back into a mutating method.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&'static Theme) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .lock()
            .unwrap()
            .insert(id, Arc::new(listener));

        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().unwrap().len()
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("bundle", &self.inner.bundle.name)
            .field("preference", &self.preference())
            .field("resolved", &self.resolved_scheme())
            .finish()
    }
}

/// Listener registration; dropping it unsubscribes
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    store: Weak<StoreInner>,
}

impl Subscription {
    /// Explicitly unsubscribe (same as dropping)
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.listeners.lock().unwrap().remove(&self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Consumer handle onto a [`ThemeStore`]
///
/// Every operation fails with [`ThemeError::OutsideProvider`] when the
/// handle is detached or its store has been dropped.
#[derive(Clone, Default)]
pub struct ThemeContext {
    store: Weak<StoreInner>,
}

impl ThemeContext {
    /// A handle bound to no store
    pub fn detached() -> Self {
        Self::default()
    }

    fn inner(&self) -> Result<Arc<StoreInner>> {
        self.store.upgrade().ok_or(ThemeError::OutsideProvider)
    }

    /// The active theme
    pub fn theme(&self) -> Result<&'static Theme> {
        Ok(self.inner()?.snapshot())
    }

    pub fn resolved_scheme(&self) -> Result<Option<ColorScheme>> {
        Ok(self.inner()?.resolved_scheme())
    }

    pub fn preference(&self) -> Result<ThemePreference> {
        Ok(*self.inner()?.preference.read().unwrap())
    }

    pub fn set_preference(&self, preference: ThemePreference) -> Result<()> {
        self.inner()?.set_preference(preference)
    }

    pub fn toggle(&self) -> Result<ThemePreference> {
        self.inner()?.toggle()
    }
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("attached", &(self.store.strong_count() > 0))
            .finish()
    }
}
