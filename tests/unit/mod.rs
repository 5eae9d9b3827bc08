//! Integration tests for the option-ladder-optimizer library.

mod ladder_tests;
mod service_tests;
