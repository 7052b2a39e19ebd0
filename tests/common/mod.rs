//! Shared fixtures for integration tests

pub mod mock_server;
pub mod raw_server;
