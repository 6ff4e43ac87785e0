// Adapters layer: concrete implementations for external systems (http, storage, notify).

pub mod http;
pub mod notify;
pub mod storage;
