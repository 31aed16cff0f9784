pub use sea_orm_migration::prelude::*;

mod m20241201_000000_create_users;
mod m20241201_000001_create_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241201_000000_create_users::Migration),
            Box::new(m20241201_000001_create_items::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered_users_then_items() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        assert_eq!(
            names,
            vec![
                "m20241201_000000_create_users",
                "m20241201_000001_create_items"
            ]
        );
    }
}
