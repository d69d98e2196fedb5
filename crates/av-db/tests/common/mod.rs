mod fixtures;
mod test_db;

pub use fixtures::{federated_identity, local_identity};
pub use test_db::create_test_pool;
