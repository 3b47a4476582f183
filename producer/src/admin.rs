//! Best-effort launch of the broker management console.

use tracing::{info, warn};

use crate::config::Config;

/// Queue view of the broker's management console.
pub const ADMIN_SITE_URL: &str = "http://localhost:15672/#/queues";

/// Open the operator's default browser at the management console.
///
/// Gated by `Config::offer_admin_site`; a failed launch is logged and
/// otherwise ignored.
pub fn offer_admin_site(config: &Config) {
    if !config.offer_admin_site {
        return;
    }

    match webbrowser::open(ADMIN_SITE_URL) {
        Ok(_) => info!(url = ADMIN_SITE_URL, "admin_site_opened"),
        Err(e) => warn!(url = ADMIN_SITE_URL, error = %e, "admin_site_open_failed"),
    }
}
