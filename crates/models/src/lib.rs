pub mod errors;
pub mod db;
pub mod catalog;
pub mod service_record;

#[cfg(test)]
mod tests;
