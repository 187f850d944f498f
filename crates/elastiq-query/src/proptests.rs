//! Property-based tests for the query builder.
