//! Host Bridge

use std::io::{self, Write};

use thiserror::Error;

use super::CheckoutPayload;

/// Errors raised while handing a checkout message to the host.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The message could not be serialized.
    #[error("failed to serialize checkout message: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The transport failed.
    #[error("failed to deliver checkout message: {0}")]
    Io(#[from] io::Error),

    /// The host refused the message.
    #[error("host rejected checkout message: {0}")]
    Rejected(String),
}

/// The host application that receives checkout messages.
///
/// The host is expected to close the shopping view after a successful
/// submission; the storefront does not wait for a reply.
pub trait HostBridge {
    /// Hands one checkout message to the host.
    ///
    /// # Errors
    ///
    /// Returns a [`BridgeError`] if the message could not be delivered.
    fn submit(&mut self, payload: &CheckoutPayload) -> Result<(), BridgeError>;
}

/// Bridge that writes each message as one line of JSON.
#[derive(Debug)]
pub struct JsonBridge<W> {
    writer: W,
}

impl<W: Write> JsonBridge<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> HostBridge for JsonBridge<W> {
    fn submit(&mut self, payload: &CheckoutPayload) -> Result<(), BridgeError> {
        serde_json::to_writer(&mut self.writer, payload)?;

        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        Ok(())
    }
}

impl<B: HostBridge + ?Sized> HostBridge for &mut B {
    fn submit(&mut self, payload: &CheckoutPayload) -> Result<(), BridgeError> {
        (**self).submit(payload)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::checkout::{CHECKOUT_ACTION, CheckoutLine};

    use super::*;

    fn payload() -> CheckoutPayload {
        CheckoutPayload {
            action: CHECKOUT_ACTION.to_string(),
            products: vec![CheckoutLine {
                id: "design".to_string(),
                name: "UI/UX Design".to_string(),
                price: Decimal::new(5_000, 0),
                quantity: 2,
            }],
            total: Decimal::new(10_000, 0),
            payment_method: "nspk".to_string(),
            payment_method_name: "QR NSPK".to_string(),
        }
    }

    #[test]
    fn json_bridge_writes_one_line_per_message() -> TestResult {
        let mut bridge = JsonBridge::new(Vec::new());

        bridge.submit(&payload())?;
        bridge.submit(&payload())?;

        let written = String::from_utf8(bridge.into_inner())?;
        let lines: Vec<&str> = written.lines().collect();

        assert_eq!(lines.len(), 2);

        let decoded: CheckoutPayload =
            serde_json::from_str(lines.first().ok_or("no line written")?)?;

        assert_eq!(decoded, payload());

        Ok(())
    }
}
