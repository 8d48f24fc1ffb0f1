//! Events delivered to the browser's select! loop

use advocates_application::{GatewayError, LoadTicket};
use advocates_domain::{Advocate, Page};

/// Outcome of a background page fetch
#[derive(Debug)]
pub struct FetchEvent {
    pub ticket: LoadTicket,
    pub result: Result<Page<Advocate>, GatewayError>,
}
