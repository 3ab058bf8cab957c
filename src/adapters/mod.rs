// Adapters layer: concrete implementations for external systems.

pub mod http_page;

pub use http_page::HttpPage;
