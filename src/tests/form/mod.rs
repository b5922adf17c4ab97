mod reducer_tests;
mod validation_tests;
