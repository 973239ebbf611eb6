//! Common traits for StackHawk list responses

use super::pagination::Page;

/// Trait for list responses that wrap their items in a named field
///
/// Each endpoint uses its own envelope key (`users`, `teams`, `applications`,
/// `applicationScanResults`). Implement this for the response struct to use
/// it with `HawkClient::fetch_page()`.
pub trait Envelope<T> {
    /// Consume self and return the decoded page
    fn into_page(self) -> Page<T>;
}
