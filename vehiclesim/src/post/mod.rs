pub mod comparison_result;
