mod input_tests;
mod startup_tests;
