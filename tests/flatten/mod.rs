//! Integration tests for flattening nested collections of results


// Union of columns across heterogeneous results
mod column_union_tests;

// Recognition of leaves, custom variants and hints
mod dispatch_tests;
