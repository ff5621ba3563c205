mod service;

pub use service::ArticleSyncService;
