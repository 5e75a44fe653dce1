/// Logging port used by the shopping list service.
///
/// The business crate only talks to this trait; adapters decide where the
/// messages end up.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn debug(&self, message: &str);
}
