use std::io::{BufRead, Write};
use std::sync::mpsc;

use desk_overlay::{Dialog, OverlayManager, PasswordPrompt, PasswordReason};

const PASSWORD_DIALOG: &str = "password";

/// Terminal stand-in for the password dialog. The label is written by the
/// reading loop; showing and hiding only need to be traced.
struct TerminalDialog;

impl Dialog for TerminalDialog {
    fn show_modal(&mut self) {
        tracing::trace!(dialog = PASSWORD_DIALOG, "shown");
    }

    fn close(&mut self) {
        tracing::trace!(dialog = PASSWORD_DIALOG, "closed");
    }
}

/// Ask for the login password on stdin. Input is not hidden.
pub fn read_password() -> anyhow::Result<String> {
    read_password_from(std::io::stdin().lock(), &mut std::io::stderr())
}

/// Read lines until a non-empty one arrives. End of input cancels.
fn read_password_from(input: impl BufRead, out: &mut impl Write) -> anyhow::Result<String> {
    let mut manager = OverlayManager::new();
    let mut prompt = PasswordPrompt::new(&mut manager, PASSWORD_DIALOG, Box::new(TerminalDialog))?;

    let (tx, rx) = mpsc::channel();
    prompt.set_update_callback(
        Box::new(move |outcome| {
            let _ = tx.send(outcome);
        }),
        PasswordReason::NeedPassword,
    );

    let label = prompt.open(&mut manager)?;
    write!(out, "{} ", label.text())?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if prompt.submit(&mut manager, line.trim_end_matches('\r')) {
            break;
        }
        write!(out, "{} ", label.text())?;
        out.flush()?;
    }
    // No-op when a password was already delivered.
    prompt.cancel(&mut manager);

    let outcome = rx.recv()?;
    Ok(outcome?)
}
