mod node_tests;
mod parser_compat_tests;
