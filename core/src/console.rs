//! Console email notifier for development.

use crate::environment::EmailNotifier;
use tracing::info;

/// Console email notifier.
///
/// Logs notifications and prints them to stdout instead of delivering them.
///
/// # Examples
///
/// ```
/// use todo_list_core::{ConsoleNotifier, EmailNotifier};
///
/// let notifier = ConsoleNotifier::new();
/// notifier.notify("user@example.com", "Your ToDoList is almost full");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Create a new console notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EmailNotifier for ConsoleNotifier {
    fn notify(&self, address: &str, message: &str) {
        info!(to = %address, "📧 Notification Email (Development Mode)");
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                   NOTIFICATION EMAIL                         ║");
        println!("╠══════════════════════════════════════════════════════════════╣");
        println!("║ To: {address:<57}║");
        println!("╠══════════════════════════════════════════════════════════════╣");

        // Wrap on char boundaries to fit in box
        let chars: Vec<char> = message.chars().collect();
        for chunk in chars.chunks(60) {
            let line: String = chunk.iter().collect();
            println!("║ {line:<61}║");
        }

        println!("╚══════════════════════════════════════════════════════════════╝\n");
    }
}
