mod irr_calculator_tests;
