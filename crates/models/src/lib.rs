pub mod errors;
pub mod db;
pub mod partition;

#[cfg(test)]
mod tests;
