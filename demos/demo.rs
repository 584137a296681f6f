//! Demonstrates the reference filter against string and integer values.
//!
//! Run with: RUST_LOG=debug cargo run --example demo

use seenset::membership::BloomFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let url1 = "https://example.com/";
    let url2 = "https://github.com/rust-lang";

    let number1 = 13423_i32;
    let number2 = 22131_i32;

    let mut filter = BloomFilter::new();

    println!("{}", filter.query(url1));
    println!("{}", filter.query(url2));
    filter.insert(url1);
    filter.insert(url2);
    println!("{}", filter.query(url1));
    println!("{}", filter.query(url2));

    println!("{}", filter.query(&number1));
    println!("{}", filter.query(&number2));
    filter.insert(&number1);
    filter.insert(&number2);
    println!("{}", filter.query(&number1));
    println!("{}", filter.query(&number2));

    println!(
        "bits set: {}, estimated false positive rate: {:e}",
        filter.bits_set(),
        filter.estimated_false_positive_rate()
    );
}
