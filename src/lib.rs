//! Library entry for Lingora exposing the language registry, the SSR
//! metadata helper and configuration loading for integration tests and
//! embedding applications.

pub mod config;
pub mod i18n;
pub mod ssr;
pub mod util;
