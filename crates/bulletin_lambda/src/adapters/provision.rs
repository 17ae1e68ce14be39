use crate::runtime::contract::QueueSettings;

/// Control-plane port for the bulletin queue. Implementations must be
/// idempotent by queue name: requesting an existing queue returns its
/// address without error.
pub trait QueueProvisioner {
    fn ensure_queue(&self, settings: &QueueSettings) -> Result<String, String>;
}
