// Collaborators the task store talks to: confirmation, notification, rendering
//
// Closures implement each trait, so tests and embedders can pass
// `|msg: &str| true` instead of writing a type.

use crate::task::Task;

/// Blocking yes/no prompt asked before destructive operations
pub trait Confirmer {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Non-blocking informational or warning message
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Consumer of the visible task list, called after every state change
pub trait Renderer {
    fn render(&mut self, tasks: &[&Task]);
}

impl<F: FnMut(&str) -> bool> Confirmer for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

impl<F: FnMut(&str)> Notifier for F {
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

impl<F: FnMut(&[&Task])> Renderer for F {
    fn render(&mut self, tasks: &[&Task]) {
        self(tasks)
    }
}

/// Confirmer that always answers the same way
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirmer for AutoConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}
