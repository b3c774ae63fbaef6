//! Unit tests for the reveal drawer.

mod layers_tests;
