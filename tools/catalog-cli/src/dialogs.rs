//! Terminal implementation of the dialog boundary.

use async_trait::async_trait;
use catalog_app::{ConfirmRequest, Dialogs, Notification, NotificationLevel};
use dialoguer::Select;
use tracing::{debug, warn};

use crate::output::Output;
use crate::prompt;

/// Confirmations via dialoguer, notifications via [`Output`].
pub struct TerminalDialogs {
    output: Output,
    interactive: bool,
    assume_yes: bool,
}

impl TerminalDialogs {
    pub fn new(output: Output, interactive: bool) -> Self {
        Self {
            output,
            interactive,
            assume_yes: false,
        }
    }

    /// Answer every confirmation with yes.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }
}

#[async_trait]
impl Dialogs for TerminalDialogs {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        if self.assume_yes {
            debug!(title = %request.title, "confirmation assumed");
            return true;
        }
        if !self.interactive {
            self.output
                .warn("Confirmation needed but no terminal is attached. Pass --yes to proceed.");
            return false;
        }

        self.output.warn(&request.title);
        for line in request.body.lines() {
            println!("  {}", line);
        }

        let items = [request.confirm_label, request.cancel_label];
        let answer = prompt::ask(move || {
            Select::new()
                .with_prompt("Choose")
                .items(&items)
                .default(1)
                .interact()
        })
        .await;

        match answer {
            Ok(choice) => choice == 0,
            Err(e) => {
                warn!(error = %e, "confirmation prompt failed");
                false
            }
        }
    }

    fn notify(&self, notification: Notification) {
        let separator = if notification.title.ends_with(['!', '?', '.']) {
            " "
        } else {
            ": "
        };
        let msg = format!("{}{}{}", notification.title, separator, notification.body);
        match notification.level {
            NotificationLevel::Success => self.output.success(&msg),
            NotificationLevel::Error => self.output.error(&msg),
            NotificationLevel::Info => self.output.info(&msg),
        }
    }
}
