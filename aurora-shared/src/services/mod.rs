/// Services built on top of the models
///
/// - `alerts`: Alert listing, lookup, acknowledgment, and creation

pub mod alerts;

pub use alerts::{AlertService, NewAlert};
