//! Integration tests for the Jacaré Autopeças storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p jacare-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart state surviving across page sessions on disk
//! - `page_events` - Full event flows through the storefront router
