//! Bulk collection sweep
//!
//! Walks the registry in stored order, simulating per-device latency and
//! transient drop-outs. Exactly one finished event closes every sweep,
//! whatever the registry size.

use crate::config::CollectionTiming;
use crate::protocol::{MessageWriter, Response};
use crate::registry::Registry;
use crate::telemetry;
use anyhow::Result;
use rand::Rng;
use tokio::io::AsyncWrite;
use tokio::time::sleep;
use tracing::debug;

/// Run one sweep across the registry, streaming results as they are drawn
pub async fn run_sweep<R, W>(
    registry: &Registry,
    rng: &mut R,
    timing: &CollectionTiming,
    out: &mut MessageWriter<W>,
) -> Result<()>
where
    R: Rng,
    W: AsyncWrite + Unpin,
{
    if registry.is_empty() {
        out.send(&Response::NoDevices).await?;
        out.send(&Response::CollectionFinished).await?;
        return Ok(());
    }

    for device in registry.list() {
        sleep(timing.per_device_delay).await;

        let unreachable = rng.gen::<f64>() < timing.offline_probability;
        if unreachable {
            // One-shot delivery failure; the stored status stays untouched.
            debug!("simulating drop-out for {}", device.id);
            out.send(&Response::Offline {
                id: device.id.clone(),
            })
            .await?;
        } else {
            out.send(&Response::Reading(telemetry::sample(rng, device)))
                .await?;
        }
    }

    sleep(timing.settle_delay).await;
    out.send(&Response::CollectionFinished).await?;
    Ok(())
}
