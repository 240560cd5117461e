//! Admin ports — the backend's destructive/export endpoints and the host
//! surface used to talk to the operator.

use std::future::Future;

use trapcam_domain::admin::ClearResponse;
use trapcam_domain::error::TrapcamError;

/// Backend endpoints reserved for the station operator.
pub trait AdminGateway {
    /// Ask the backend to wipe its data log, forwarding `password` as-is.
    ///
    /// A rejected password is *not* an error: it comes back as a
    /// [`ClearResponse`] whose status is not the cleared marker.
    fn clear_data(
        &self,
        password: &str,
    ) -> impl Future<Output = Result<ClearResponse, TrapcamError>> + Send;

    /// Location the host should open to download the data log as CSV.
    fn export_location(&self) -> String;
}

/// Operator-facing capabilities of the host environment.
pub trait HostUi {
    /// Ask the operator for a line of input. `None` when they cancel.
    fn prompt(&self, message: &str) -> impl Future<Output = Option<String>> + Send;

    /// Show a blocking notice.
    fn alert(&self, message: &str);

    /// Start over: reload every gallery and the status display.
    fn reload(&self);

    /// Open `location` (used for downloads).
    fn navigate(&self, location: &str);
}

impl<T: AdminGateway + Send + Sync> AdminGateway for std::sync::Arc<T> {
    fn clear_data(
        &self,
        password: &str,
    ) -> impl Future<Output = Result<ClearResponse, TrapcamError>> + Send {
        (**self).clear_data(password)
    }

    fn export_location(&self) -> String {
        (**self).export_location()
    }
}

impl<T: HostUi + Send + Sync> HostUi for std::sync::Arc<T> {
    fn prompt(&self, message: &str) -> impl Future<Output = Option<String>> + Send {
        (**self).prompt(message)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message);
    }

    fn reload(&self) {
        (**self).reload();
    }

    fn navigate(&self, location: &str) {
        (**self).navigate(location);
    }
}
