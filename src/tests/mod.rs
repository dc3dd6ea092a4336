pub mod test_parallel;
