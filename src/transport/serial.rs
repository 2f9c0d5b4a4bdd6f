//! Serial transport implementation for the host link

use crate::transport::{TransportConnector, TransportStream};
use anyhow::{Context as _, Result};
use async_trait::async_trait;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use tokio_serial::{SerialPortBuilderExt, SerialStream};

/// Serial stream wrapper implementing TransportStream
pub struct SerialTransportStream {
    inner: SerialStream,
}

impl SerialTransportStream {
    pub fn new(stream: SerialStream) -> Self {
        Self { inner: stream }
    }
}

impl AsyncRead for SerialTransportStream {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_read(cx, buf)
    }
}

impl AsyncWrite for SerialTransportStream {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.inner).poll_write(cx, buf)
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_flush(cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_shutdown(cx)
    }
}

#[async_trait]
impl TransportStream for SerialTransportStream {
    async fn shutdown(&mut self) -> Result<()> {
        tokio::io::AsyncWriteExt::shutdown(&mut self.inner).await?;
        Ok(())
    }
}

/// Connector that opens a named serial port at a fixed baud rate
pub struct SerialConnector {
    port: String,
    baud_rate: u32,
}

impl SerialConnector {
    pub fn new(port: String, baud_rate: u32) -> Self {
        Self { port, baud_rate }
    }
}

#[async_trait]
impl TransportConnector for SerialConnector {
    type Stream = SerialTransportStream;

    async fn connect(&self) -> Result<Self::Stream> {
        let stream = tokio_serial::new(self.port.as_str(), self.baud_rate)
            .open_native_async()
            .with_context(|| format!("failed to open serial port {}", self.port))?;
        Ok(SerialTransportStream::new(stream))
    }

    fn name(&self) -> String {
        format!("{}@{}", self.port, self.baud_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_name() {
        let connector = SerialConnector::new("COM11".into(), 115_200);
        assert_eq!(connector.name(), "COM11@115200");
    }
}
