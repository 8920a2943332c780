mod test_bench;
mod test_errors;
mod test_list;
mod test_test_mode;
