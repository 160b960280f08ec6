use async_trait::async_trait;
use tracing::info;

/// Delivery channel for signup one-time passwords.
#[async_trait]
pub trait OtpNotifier: Send + Sync {
    async fn send_otp(&self, email: &str, otp: &str) -> anyhow::Result<()>;
}

/// Stub channel: the code goes to the server log instead of a real
/// messaging provider.
pub struct LogNotifier;

#[async_trait]
impl OtpNotifier for LogNotifier {
    async fn send_otp(&self, email: &str, otp: &str) -> anyhow::Result<()> {
        info!(%email, %otp, "signup otp");
        Ok(())
    }
}
