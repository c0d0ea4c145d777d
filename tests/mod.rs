mod factory_tests;
mod strategy_tests;
mod support;
