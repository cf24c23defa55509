/// Entity persistence tests against a live Postgres
pub mod service_record_tests;
