use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

#[automock]
#[async_trait]
pub trait ContainerClient {
    /// Round-trips to the container engine. `Ok` means the daemon answered.
    async fn ping(&self) -> Result<()>;
}
