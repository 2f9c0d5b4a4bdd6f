//! The command-processing session
//!
//! One logical task owns the transport: announce readiness, then read bytes,
//! frame them into commands and handle each to completion before reading
//! again. Bytes arriving during a long-running sweep wait in the transport
//! buffer, so command order is preserved.

use crate::command::{Command, Dispatcher};
use crate::config::SimConfig;
use crate::framer::LineFramer;
use crate::protocol::{MessageWriter, Response};
use crate::registry::Registry;
use anyhow::Result;
use rand::Rng;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tracing::{debug, info};

/// Run the protocol session until the stream ends or fails
pub async fn run<S, R>(stream: S, config: &SimConfig, registry: Registry, rng: R) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
    R: Rng,
{
    let (mut reader, writer) = tokio::io::split(stream);
    let mut out = MessageWriter::new(writer);
    let mut framer = if config.strict_framing {
        LineFramer::strict()
    } else {
        LineFramer::new()
    };
    let mut dispatcher = Dispatcher::new(registry, rng, config.timing.clone());

    out.send(&Response::Ready).await?;
    info!("listening for commands");

    let mut buf = vec![0u8; 4096];
    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            info!("host closed the stream");
            return Ok(());
        }

        for line in framer.feed(&buf[..n]) {
            match Command::parse(&line) {
                Some(command) => {
                    debug!("received: {line}");
                    dispatcher.dispatch(command, &mut out).await?;
                }
                None => debug!("ignoring unrecognized command: {line}"),
            }
        }
    }
}
