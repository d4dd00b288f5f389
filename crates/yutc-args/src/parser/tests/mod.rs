mod grammar_tests;
mod json_serialization_tests;
