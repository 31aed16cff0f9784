//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! Container-backed tests need Docker and are marked `#[ignore]`; run them with
//! `cargo test -- --ignored`.
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let username = builder.username("alice");
//!     let item_name = builder.name("item", "main");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_item");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(12345);
    /// assert_eq!(builder.name("item", "main"), "test-item-12345-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A username that fits the 150-character column
    pub fn username(&self, suffix: &str) -> String {
        format!("user{}_{}", self.seed % 1_000_000, suffix)
    }

    /// A password that satisfies the account password rules
    pub fn password(&self) -> String {
        format!("pw-{:016x}", self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    use std::fmt::Debug;

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a slice is sorted by `key` in non-increasing order
    pub fn assert_sorted_desc<T, K: PartialOrd + Debug>(values: &[T], key: impl Fn(&T) -> K) {
        for pair in values.windows(2) {
            let (a, b) = (key(&pair[0]), key(&pair[1]));
            assert!(a >= b, "expected descending order, found {:?} before {:?}", a, b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.username("a"), builder2.username("a"));
        assert_eq!(builder1.name("item", "test"), builder2.name("item", "test"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.name("item", "x"), builder2.name("item", "x"));
    }

    #[test]
    fn test_password_length_is_accepted() {
        let password = TestDataBuilder::new(7).password();
        assert!((8..=128).contains(&password.chars().count()));
    }

    #[test]
    fn test_assert_sorted_desc() {
        assertions::assert_sorted_desc(&[3, 3, 2, 1], |v| *v);
    }

    #[test]
    #[should_panic(expected = "expected descending order")]
    fn test_assert_sorted_desc_panics() {
        assertions::assert_sorted_desc(&[1, 2], |v| *v);
    }
}
