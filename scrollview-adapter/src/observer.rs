use alloc::sync::Arc;

use crate::ScrollElement;

/// The injected resize-observation capability.
///
/// Mirrors the platform facility's shape: [`Self::observe`] registers an element for
/// box-size notifications, [`Self::disconnect`] unregisters everything. How notifications
/// are delivered is up to the host implementation — typically by calling
/// [`crate::ScrollbarController::on_resize`] from its callback.
///
/// `disconnect` must be idempotent, and disconnecting a watcher that never observed
/// anything must be a no-op.
pub trait ResizeWatch {
    fn observe(&mut self, target: Arc<dyn ScrollElement + Send + Sync>);
    fn disconnect(&mut self);
}

/// Fallback for host environments without a resize-observation facility.
///
/// Both operations are silent no-ops; detection then only happens on manual
/// `update`/`on_resize` calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopResizeWatch;

impl ResizeWatch for NoopResizeWatch {
    fn observe(&mut self, _target: Arc<dyn ScrollElement + Send + Sync>) {}

    fn disconnect(&mut self) {}
}
