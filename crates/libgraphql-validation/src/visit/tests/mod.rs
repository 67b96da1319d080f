mod parallel_visitor_tests;
