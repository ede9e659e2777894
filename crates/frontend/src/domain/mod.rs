pub mod primes;
