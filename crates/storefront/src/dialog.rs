//! Blocking dialogs shown to the shopper.
//!
//! The host decides how to present them (terminal prompt, browser modal).
//! Both calls block until the shopper answers, which keeps every event
//! handler run-to-completion.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Host-provided modal dialogs.
pub trait Dialog {
    /// Show an informational message.
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question. Returns `true` if the shopper confirmed.
    fn confirm(&mut self, message: &str) -> bool;
}

/// A dialog message captured by [`ScriptedDialog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMessage {
    Alert(String),
    Confirm(String),
}

#[derive(Debug, Default)]
struct Script {
    answers: VecDeque<bool>,
    shown: Vec<DialogMessage>,
}

/// Dialog with pre-recorded answers that logs everything it shows.
///
/// Confirmations beyond the scripted answers are declined. Clones share
/// the same script.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDialog {
    script: Rc<RefCell<Script>>,
}

impl ScriptedDialog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for upcoming confirmations.
    #[must_use]
    pub fn answering(self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.script.borrow_mut().answers.extend(answers);
        self
    }

    /// Everything shown so far, in order.
    #[must_use]
    pub fn shown(&self) -> Vec<DialogMessage> {
        self.script.borrow().shown.clone()
    }

    /// Alerts shown so far.
    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.script
            .borrow()
            .shown
            .iter()
            .filter_map(|m| match m {
                DialogMessage::Alert(text) => Some(text.clone()),
                DialogMessage::Confirm(_) => None,
            })
            .collect()
    }
}

impl Dialog for ScriptedDialog {
    fn alert(&mut self, message: &str) {
        self.script
            .borrow_mut()
            .shown
            .push(DialogMessage::Alert(message.to_owned()));
    }

    fn confirm(&mut self, message: &str) -> bool {
        let mut script = self.script.borrow_mut();
        script.shown.push(DialogMessage::Confirm(message.to_owned()));
        script.answers.pop_front().unwrap_or(false)
    }
}
