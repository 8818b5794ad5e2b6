//! Service-specific tests

mod session_store;

// Common test utilities for services
pub mod common {
    use std::time::Duration;
    use tokio::time::timeout;

    /// Standard timeout for async operations in tests
    pub const TEST_TIMEOUT: Duration = Duration::from_millis(500);

    /// Run an async operation under the standard timeout
    pub async fn with_timeout<T, F>(future: F) -> Result<T, tokio::time::error::Elapsed>
    where
        F: std::future::Future<Output = T>,
    {
        timeout(TEST_TIMEOUT, future).await
    }
}
