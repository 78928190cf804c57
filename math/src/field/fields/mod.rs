pub mod stark101_prime_field;
