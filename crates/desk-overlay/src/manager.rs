use std::collections::HashMap;

use crate::error::OverlayError;

/// A modal surface the manager can show and hide.
pub trait Dialog {
    fn show_modal(&mut self);
    fn close(&mut self);
}

struct Registration {
    dialog: Box<dyn Dialog>,
    can_force_close: bool,
}

/// Tracks which registered dialog, if any, is active.
///
/// ```text
///             open(a)                 open(b), b can force-close
///   (none) ───────────► active = a ─────────────────────────────► active = b
///      ▲                    │   close(a) / cancel(a)
///      └────────────────────┘
/// ```
#[derive(Default)]
pub struct OverlayManager {
    overlays: HashMap<String, Registration>,
    active: Option<String>,
}

impl std::fmt::Debug for OverlayManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&str> = self.overlays.keys().map(String::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("OverlayManager")
            .field("overlays", &ids)
            .field("active", &self.active)
            .finish()
    }
}

impl OverlayManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The id of the active dialog.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn is_registered(&self, id: &str) -> bool {
        self.overlays.contains_key(id)
    }

    /// Register a dialog under `id`.
    ///
    /// With `can_force_close`, opening this dialog closes whichever other
    /// dialog is active instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::AlreadyRegistered`] if `id` is taken.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        dialog: Box<dyn Dialog>,
        can_force_close: bool,
    ) -> Result<(), OverlayError> {
        let id = id.into();
        if self.overlays.contains_key(&id) {
            return Err(OverlayError::AlreadyRegistered(id));
        }
        self.overlays.insert(
            id,
            Registration {
                dialog,
                can_force_close,
            },
        );
        Ok(())
    }

    /// Show `id` and make it the active dialog.
    ///
    /// # Errors
    ///
    /// - [`OverlayError::NotRegistered`] if `id` is unknown.
    /// - [`OverlayError::AlreadyActive`] if `id` is already active.
    /// - [`OverlayError::AnotherActive`] if another dialog is active and `id`
    ///   cannot force-close it.
    pub fn open(&mut self, id: &str) -> Result<(), OverlayError> {
        let can_force_close = self
            .overlays
            .get(id)
            .map(|r| r.can_force_close)
            .ok_or_else(|| OverlayError::NotRegistered(id.to_string()))?;

        if let Some(active) = self.active.clone() {
            if active == id {
                return Err(OverlayError::AlreadyActive(active));
            }
            if !can_force_close {
                return Err(OverlayError::AnotherActive {
                    requested: id.to_string(),
                    active,
                });
            }
            tracing::debug!(closing = %active, opening = id, "force-closing active overlay");
            self.close(Some(&active))?;
        }

        if let Some(registration) = self.overlays.get_mut(id) {
            registration.dialog.show_modal();
        }
        self.active = Some(id.to_string());
        Ok(())
    }

    /// Hide `id` (the active dialog when `None`) and clear the active slot.
    ///
    /// # Errors
    ///
    /// - [`OverlayError::NotRegistered`] if `id` is unknown, or `None` was
    ///   passed while nothing is active.
    /// - [`OverlayError::NotActive`] if no dialog is active.
    /// - [`OverlayError::AnotherActive`] if a different dialog is active.
    pub fn close(&mut self, id: Option<&str>) -> Result<(), OverlayError> {
        let target = match id.or(self.active.as_deref()) {
            Some(target) => target.to_string(),
            None => return Err(OverlayError::NotRegistered(String::new())),
        };
        if !self.overlays.contains_key(&target) {
            return Err(OverlayError::NotRegistered(target));
        }
        match self.active.as_deref() {
            None => return Err(OverlayError::NotActive(target)),
            Some(active) if active != target => {
                return Err(OverlayError::AnotherActive {
                    requested: target,
                    active: active.to_string(),
                });
            }
            Some(_) => {}
        }

        if let Some(registration) = self.overlays.get_mut(&target) {
            registration.dialog.close();
        }
        self.active = None;
        Ok(())
    }

    /// The dialog was dismissed from outside (e.g. Escape). Clears the
    /// active slot without calling [`Dialog::close`].
    pub fn cancel(&mut self, id: &str) {
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
    }
}
