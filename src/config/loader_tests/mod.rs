mod mock_fs;

mod parsing_tests;
