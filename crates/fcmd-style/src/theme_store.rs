#![forbid(unsafe_code)]

//! Process-wide theme store with change notifications.
//!
//! Many independent renderers observe one palette, so the store is shared
//! state by necessity. It hands out [`Palette`] snapshots behind `Arc`;
//! a paint pass takes one snapshot up front and resolves every cell against
//! it, so a palette swap can never tear a pass in half.
//!
//! Listeners are registered with [`ThemeStore::subscribe`], which returns a
//! [`ThemeSubscription`] guard; dropping the guard deregisters the listener.
//! Notifications are delivered synchronously on the calling thread. The
//! store is internally locked so the global instance is sound, but the
//! application is expected to perform palette writes and paints on the UI
//! thread; listeners must not subscribe or unsubscribe from inside a
//! notification.
//!
//! # Example
//! ```
//! use fcmd_style::{palettes, ThemeEvent, ThemeStore};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let store = ThemeStore::new(palettes::dark());
//! let repaints = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&repaints);
//! let _guard = store.subscribe(move |event| {
//!     if matches!(event, ThemeEvent::ColorsChanged) {
//!         counter.fetch_add(1, Ordering::Relaxed);
//!     }
//! });
//!
//! store.set_palette(palettes::light());
//! assert_eq!(repaints.load(Ordering::Relaxed), 1);
//! ```

use crate::font::{FontId, FontSpec};
use crate::palette::{Palette, palettes};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, RwLock, Weak};

/// A theme change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEvent {
    /// One or more palette colors changed.
    ColorsChanged,
    /// The font of the named slot changed.
    FontChanged(FontId),
}

type Listener = Box<dyn Fn(&ThemeEvent) + Send + Sync>;

struct StoreShared {
    palette: RwLock<Arc<Palette>>,
    listeners: RwLock<Vec<(u64, Listener)>>,
    next_listener_id: AtomicU64,
}

/// Shared store owning the active palette.
///
/// Cloning a `ThemeStore` clones a handle to the same store.
#[derive(Clone)]
pub struct ThemeStore {
    shared: Arc<StoreShared>,
}

static GLOBAL: OnceLock<ThemeStore> = OnceLock::new();

impl ThemeStore {
    /// Create a store owning the given palette.
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            shared: Arc::new(StoreShared {
                palette: RwLock::new(Arc::new(palette)),
                listeners: RwLock::new(Vec::new()),
                next_listener_id: AtomicU64::new(0),
            }),
        }
    }

    /// The process-wide store.
    ///
    /// Lazily initialized on first access with the environment-detected
    /// preset. Components constructed before the first theme load observe
    /// that preset until [`ThemeStore::set_palette`] replaces it.
    pub fn global() -> &'static ThemeStore {
        GLOBAL.get_or_init(|| ThemeStore::new(palettes::detect()))
    }

    /// Take a snapshot of the active palette.
    ///
    /// The snapshot is immutable; later palette swaps do not affect it.
    #[must_use]
    pub fn palette(&self) -> Arc<Palette> {
        Arc::clone(&self.shared.palette.read().expect("theme store lock poisoned"))
    }

    /// Replace the active palette and notify listeners.
    ///
    /// Always broadcasts [`ThemeEvent::ColorsChanged`]; additionally
    /// broadcasts a table-font change when the new palette carries a
    /// different table font.
    pub fn set_palette(&self, palette: Palette) {
        let font_changed = {
            let mut current = self
                .shared
                .palette
                .write()
                .expect("theme store lock poisoned");
            let font_changed = current.table_font != palette.table_font;
            *current = Arc::new(palette);
            font_changed
        };
        tracing::debug!(font_changed, "palette replaced");
        self.notify(&ThemeEvent::ColorsChanged);
        if font_changed {
            self.notify(&ThemeEvent::FontChanged(FontId::FileTable));
        }
    }

    /// Replace the table font, keeping all colors.
    ///
    /// No-op (and no notification) if the font is unchanged.
    pub fn set_table_font(&self, font: FontSpec) {
        {
            let mut current = self
                .shared
                .palette
                .write()
                .expect("theme store lock poisoned");
            if current.table_font == font {
                return;
            }
            let mut palette = Palette::clone(&current);
            palette.table_font = font;
            *current = Arc::new(palette);
        }
        tracing::debug!("table font replaced");
        self.notify(&ThemeEvent::FontChanged(FontId::FileTable));
    }

    /// Broadcast a font change for a slot the palette does not own.
    ///
    /// The wider theme system calls this when fonts outside the table
    /// (status bar, editor, ...) change; table-font changes go through
    /// [`ThemeStore::set_table_font`] instead so the palette stays in sync.
    pub fn font_changed(&self, id: FontId) {
        self.notify(&ThemeEvent::FontChanged(id));
    }

    /// Register a listener; the returned guard deregisters it on drop.
    #[must_use]
    pub fn subscribe(&self, listener: impl Fn(&ThemeEvent) + Send + Sync + 'static) -> ThemeSubscription {
        let id = self.shared.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.shared
            .listeners
            .write()
            .expect("theme store lock poisoned")
            .push((id, Box::new(listener)));
        tracing::debug!(listener_id = id, "theme listener registered");
        ThemeSubscription {
            shared: Arc::downgrade(&self.shared),
            id,
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.shared
            .listeners
            .read()
            .expect("theme store lock poisoned")
            .len()
    }

    fn notify(&self, event: &ThemeEvent) {
        let listeners = self
            .shared
            .listeners
            .read()
            .expect("theme store lock poisoned");
        for (_, listener) in listeners.iter() {
            listener(event);
        }
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

/// Guard for a registered theme listener.
///
/// Dropping the guard deregisters the listener; a renderer that holds its
/// guard for its own lifetime is guaranteed to be deregistered on disposal.
#[must_use = "dropping the subscription deregisters the listener"]
pub struct ThemeSubscription {
    shared: Weak<StoreShared>,
    id: u64,
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared
                .listeners
                .write()
                .expect("theme store lock poisoned")
                .retain(|(id, _)| *id != self.id);
            tracing::debug!(listener_id = self.id, "theme listener deregistered");
        }
    }
}

impl std::fmt::Debug for ThemeSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSubscription")
            .field("id", &self.id)
            .finish()
    }
}
