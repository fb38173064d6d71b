use crate::admin::application::ports::outgoing::notifier::Notifier;

/// Notifier adapter that routes toasts to the structured log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!(toast = "success", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(toast = "error", "{message}");
    }
}
