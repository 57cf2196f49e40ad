use std::cell::RefCell;
use std::rc::Rc;

use crate::error::OverlayError;
use crate::manager::{Dialog, OverlayManager};

/// Why a password is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordReason {
    NeedPassword,
    IncorrectPassword,
}

/// Which label the prompt should show when opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptLabel {
    Enter,
    Invalid,
}

impl PromptLabel {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Enter => "Enter the password:",
            Self::Invalid => "Invalid password. Please try again.",
        }
    }
}

/// Receives the password, or [`OverlayError::PromptCancelled`].
pub type PasswordCallback = Box<dyn FnOnce(Result<String, OverlayError>) + Send>;

type Pending = Rc<RefCell<Option<PasswordCallback>>>;

/// The registered dialog. Any close while the prompt is armed, including a
/// force-close by another dialog, reports a cancellation.
struct PromptDialog {
    inner: Box<dyn Dialog>,
    pending: Pending,
}

impl Dialog for PromptDialog {
    fn show_modal(&mut self) {
        self.inner.show_modal();
    }

    fn close(&mut self) {
        self.inner.close();
        let pending = self.pending.borrow_mut().take();
        if let Some(callback) = pending {
            tracing::debug!("password prompt closed while waiting; cancelling");
            callback(Err(OverlayError::PromptCancelled));
        }
    }
}

/// Password dialog controller.
///
/// Registers its dialog with `can_force_close`, so opening it displaces any
/// other active dialog. The callback armed by [`Self::set_update_callback`]
/// fires at most once: with the submitted password, or with a cancellation
/// when the prompt is dismissed or closed before a submit.
pub struct PasswordPrompt {
    id: String,
    pending: Pending,
    reason: Option<PasswordReason>,
}

impl std::fmt::Debug for PasswordPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordPrompt")
            .field("id", &self.id)
            .field("armed", &self.pending.borrow().is_some())
            .field("reason", &self.reason)
            .finish()
    }
}

impl PasswordPrompt {
    /// Register `dialog` under `id` and build the controller for it.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::AlreadyRegistered`] if `id` is taken.
    pub fn new(
        manager: &mut OverlayManager,
        id: impl Into<String>,
        dialog: Box<dyn Dialog>,
    ) -> Result<Self, OverlayError> {
        let id = id.into();
        let pending = Pending::default();
        let dialog = PromptDialog {
            inner: dialog,
            pending: Rc::clone(&pending),
        };
        manager.register(id.clone(), Box::new(dialog), true)?;
        Ok(Self {
            id,
            pending,
            reason: None,
        })
    }

    /// Arm the prompt. Replaces any callback that has not fired yet.
    pub fn set_update_callback(&mut self, callback: PasswordCallback, reason: PasswordReason) {
        *self.pending.borrow_mut() = Some(callback);
        self.reason = Some(reason);
    }

    /// Show the prompt. Returns the label to display.
    ///
    /// # Errors
    ///
    /// Returns the [`OverlayManager::open`] errors; the prompt itself is
    /// left armed.
    pub fn open(&mut self, manager: &mut OverlayManager) -> Result<PromptLabel, OverlayError> {
        manager.open(&self.id)?;
        Ok(if self.reason == Some(PasswordReason::IncorrectPassword) {
            PromptLabel::Invalid
        } else {
            PromptLabel::Enter
        })
    }

    /// Hide the prompt if it is the active dialog. An armed callback
    /// receives [`OverlayError::PromptCancelled`].
    pub fn close(&self, manager: &mut OverlayManager) {
        if manager.active() == Some(self.id.as_str()) {
            // Active and registered, so close cannot fail.
            let _ = manager.close(Some(&self.id));
        }
    }

    /// Submit what the user typed. Empty input is ignored and leaves the
    /// prompt open. Returns whether the callback fired.
    pub fn submit(&mut self, manager: &mut OverlayManager, input: &str) -> bool {
        if input.is_empty() {
            return false;
        }
        self.invoke(manager, Ok(input.to_string()))
    }

    /// The user dismissed the prompt. Returns whether the callback fired.
    pub fn cancel(&mut self, manager: &mut OverlayManager) -> bool {
        manager.cancel(&self.id);
        self.invoke(manager, Err(OverlayError::PromptCancelled))
    }

    fn invoke(&mut self, manager: &mut OverlayManager, outcome: Result<String, OverlayError>) -> bool {
        let pending = self.pending.borrow_mut().take();
        let Some(callback) = pending else {
            return false;
        };
        self.close(manager);
        callback(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::tests::{Log, Recording};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<Result<String, OverlayError>>>>;

    fn recorder(seen: &Seen) -> PasswordCallback {
        let seen = Arc::clone(seen);
        Box::new(move |outcome| seen.lock().unwrap().push(outcome))
    }

    fn setup(log: &Log) -> (OverlayManager, PasswordPrompt) {
        let mut manager = OverlayManager::new();
        manager
            .register("props", Recording::boxed("props", log), false)
            .unwrap();
        let prompt =
            PasswordPrompt::new(&mut manager, "password", Recording::boxed("password", log)).unwrap();
        (manager, prompt)
    }

    #[test]
    fn submit_delivers_password_and_closes() {
        let log = Log::default();
        let (mut manager, mut prompt) = setup(&log);
        let seen = Seen::default();

        prompt.set_update_callback(recorder(&seen), PasswordReason::NeedPassword);
        assert_eq!(prompt.open(&mut manager).unwrap(), PromptLabel::Enter);
        assert!(prompt.submit(&mut manager, "s3cret"));

        assert_eq!(manager.active(), None);
        assert_eq!(*seen.lock().unwrap(), vec![Ok("s3cret".to_string())]);
        assert_eq!(*log.borrow(), vec!["show password", "close password"]);
    }

    #[test]
    fn empty_submit_is_ignored() {
        let log = Log::default();
        let (mut manager, mut prompt) = setup(&log);
        let seen = Seen::default();

        prompt.set_update_callback(recorder(&seen), PasswordReason::NeedPassword);
        prompt.open(&mut manager).unwrap();

        assert!(!prompt.submit(&mut manager, ""));
        assert_eq!(manager.active(), Some("password"));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn callback_fires_at_most_once() {
        let log = Log::default();
        let (mut manager, mut prompt) = setup(&log);
        let seen = Seen::default();

        prompt.set_update_callback(recorder(&seen), PasswordReason::NeedPassword);
        prompt.open(&mut manager).unwrap();
        assert!(prompt.submit(&mut manager, "first"));
        assert!(!prompt.cancel(&mut manager));
        assert!(!prompt.submit(&mut manager, "second"));

        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn cancel_reports_cancellation() {
        let log = Log::default();
        let (mut manager, mut prompt) = setup(&log);
        let seen = Seen::default();

        prompt.set_update_callback(recorder(&seen), PasswordReason::NeedPassword);
        prompt.open(&mut manager).unwrap();
        assert!(prompt.cancel(&mut manager));

        assert_eq!(manager.active(), None);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Err(OverlayError::PromptCancelled)]
        );
    }

    #[test]
    fn incorrect_password_shows_invalid_label() {
        let log = Log::default();
        let (mut manager, mut prompt) = setup(&log);

        prompt.set_update_callback(Box::new(|_| {}), PasswordReason::IncorrectPassword);
        assert_eq!(prompt.open(&mut manager).unwrap(), PromptLabel::Invalid);
    }

    #[test]
    fn prompt_force_closes_other_overlay() {
        let log = Log::default();
        let (mut manager, mut prompt) = setup(&log);
        manager.open("props").unwrap();

        prompt.set_update_callback(Box::new(|_| {}), PasswordReason::NeedPassword);
        prompt.open(&mut manager).unwrap();

        assert_eq!(manager.active(), Some("password"));
        assert_eq!(
            *log.borrow(),
            vec!["show props", "close props", "show password"]
        );
    }

    #[test]
    fn displaced_prompt_reports_cancellation() {
        let log = Log::default();
        let (mut manager, mut prompt) = setup(&log);
        manager
            .register("confirm", Recording::boxed("confirm", &log), true)
            .unwrap();
        let seen = Seen::default();

        prompt.set_update_callback(recorder(&seen), PasswordReason::NeedPassword);
        prompt.open(&mut manager).unwrap();
        manager.open("confirm").unwrap();

        assert_eq!(manager.active(), Some("confirm"));
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Err(OverlayError::PromptCancelled)]
        );
        assert!(!prompt.submit(&mut manager, "late"));
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(
            *log.borrow(),
            vec!["show password", "close password", "show confirm"]
        );
    }

    #[test]
    fn explicit_close_cancels_armed_prompt() {
        let log = Log::default();
        let (mut manager, mut prompt) = setup(&log);
        let seen = Seen::default();

        prompt.set_update_callback(recorder(&seen), PasswordReason::NeedPassword);
        prompt.open(&mut manager).unwrap();
        prompt.close(&mut manager);

        assert_eq!(manager.active(), None);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Err(OverlayError::PromptCancelled)]
        );
    }

    #[test]
    fn close_leaves_other_active_overlay_alone() {
        let log = Log::default();
        let (mut manager, prompt) = setup(&log);
        manager.open("props").unwrap();

        prompt.close(&mut manager);

        assert_eq!(manager.active(), Some("props"));
    }
}
