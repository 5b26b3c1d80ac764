pub mod user_reader;

pub use user_reader::UserReader;
