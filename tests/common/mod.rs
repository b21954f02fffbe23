#![allow(unused_imports)]

pub use dagcheck_test_utils::builders;
pub use dagcheck_test_utils::init_tracing;
