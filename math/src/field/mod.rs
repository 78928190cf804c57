pub mod element;
pub mod errors;
pub mod fields;
pub mod traits;
pub mod u64_prime_field;
