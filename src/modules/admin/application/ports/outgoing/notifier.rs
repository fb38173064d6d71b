/// Port for user-facing toasts.
///
/// Every mutating admin operation emits exactly one success or error
/// notification; list fetches are the single silent exception.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, message: &str);
}
