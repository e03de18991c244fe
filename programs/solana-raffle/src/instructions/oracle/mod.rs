pub mod fulfill_random_words;

pub use fulfill_random_words::*;
