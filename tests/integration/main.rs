//! Integration tests for the harvester
//!
//! These tests use wiremock to create mock HTTP servers and test
//! fetching, crawling and persistence end-to-end.

mod crawl_tests;
mod support;
