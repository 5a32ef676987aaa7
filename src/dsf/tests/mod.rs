pub(crate) mod test_utils;
mod validation_tests;
