use business::domain::logger::Logger;
use tracing::{debug, info, warn};

const TARGET: &str = "shopping_list";

/// Forwards business log messages to `tracing`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
