//! Integration tests for the parameter system

// Tests for the Parameters collection
mod parameters_tests;
