//! Module containing tests for the data-level entry points.
mod from_data_tests;
