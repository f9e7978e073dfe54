use crate::{ClientCode, ClientList, DiagnosticReport, ServiceInfo};

/// Remote side of the dashboard: the client registry and the diagnostic
/// service behind it.
#[async_trait::async_trait]
pub trait DashboardService: Send + Sync + 'static {
    /// Greeting served from the backend root, useful as a reachability check.
    async fn info(&self) -> anyhow::Result<ServiceInfo>;

    async fn clients(&self) -> anyhow::Result<ClientList>;

    /// Runs diagnostics for one client. The backend keeps a single request
    /// busy for a couple of seconds, callers should expect that latency.
    async fn diagnose(&self, client_code: ClientCode) -> anyhow::Result<DiagnosticReport>;
}
