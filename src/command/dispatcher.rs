//! Command dispatcher
//!
//! Owns the registry, the injected RNG and the sweep timing. Each command is
//! handled to completion before the next one is read, so no locking is
//! needed anywhere in the command path.

use super::{collect, Command};
use crate::config::CollectionTiming;
use crate::protocol::{MessageWriter, Response};
use crate::registry::Registry;
use anyhow::Result;
use rand::Rng;
use tokio::io::AsyncWrite;
use tracing::info;

/// Maps recognized commands to registry and telemetry actions
pub struct Dispatcher<R> {
    registry: Registry,
    rng: R,
    timing: CollectionTiming,
}

impl<R: Rng> Dispatcher<R> {
    pub fn new(registry: Registry, rng: R, timing: CollectionTiming) -> Self {
        Self {
            registry,
            rng,
            timing,
        }
    }

    /// Handle one command, writing every response it produces
    pub async fn dispatch<W: AsyncWrite + Unpin>(
        &mut self,
        command: Command,
        out: &mut MessageWriter<W>,
    ) -> Result<()> {
        match command {
            Command::Hello => out.send(&Response::Hello).await,
            Command::ListDevices => {
                out.send(&Response::DeviceList(self.registry.list().to_vec()))
                    .await
            }
            Command::CollectNow => {
                info!("collection sweep over {} device(s)", self.registry.len());
                collect::run_sweep(&self.registry, &mut self.rng, &self.timing, out).await
            }
            Command::DeleteAll => {
                self.registry.remove_all();
                out.send(&Response::AllDeleted).await
            }
            Command::DeleteNode(id) => {
                // The protocol acknowledges the delete whether or not the id
                // existed; the host treats the event as confirmation only.
                let removed = self.registry.remove_by_id(&id);
                info!(%id, removed, "delete node");
                out.send(&Response::Deleted { id }).await
            }
            Command::RegisterNew => out.send(&Response::RegisterModeActive).await,
            Command::CancelRegister => out.send(&Response::RegisterCancelled).await,
        }
    }

    /// Registry contents, for inspection
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
