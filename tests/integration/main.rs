//! Integration tests for hackterm.


mod cli_test;
mod launch_test;
mod lifecycle_test;
mod store_test;
