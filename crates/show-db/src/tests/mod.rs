use crate::Database;

fn test_db() -> Database {
    Database::open_in_memory_unseeded().expect("Failed to create test DB")
}
