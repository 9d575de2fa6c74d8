//! Host-side shadow of the device's CFG pipeline.

use super::config::RegisterConfig;

/// Two-deep history of CFG values.
///
/// If the current SPI transaction is numbered N, `active` was written at N-2
/// and applied at the end of conversion N-1: it decides whether N carries a
/// readback echo. `pending` was written at N-1; the data returned by N is the
/// first to reflect it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PipelineShadow {
    pending: RegisterConfig,
    active: RegisterConfig,
}

impl PipelineShadow {
    pub(crate) fn new(initial: RegisterConfig) -> Self {
        Self {
            pending: initial,
            active: initial,
        }
    }

    pub(crate) fn active(&self) -> &RegisterConfig {
        &self.active
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> &RegisterConfig {
        &self.pending
    }

    /// Record one completed transaction. A transaction without a CFG write
    /// re-affirms the value that just became active.
    pub(crate) fn advance(&mut self, written: Option<&RegisterConfig>) {
        self.active = self.pending;
        self.pending = written.copied().unwrap_or(self.active);
    }
}
