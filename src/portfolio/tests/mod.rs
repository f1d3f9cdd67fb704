mod portfolio_aggregator_tests;
