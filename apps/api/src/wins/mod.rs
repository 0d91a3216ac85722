// Achievement store gateway: CRUD over logged wins plus the single polish write path.
// Handlers and the export flow only see the `WinStore` trait.

pub mod handlers;
#[cfg(test)]
pub mod memory;
pub mod pg;
pub mod store;
pub mod validation;
