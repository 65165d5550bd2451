//! # Rowhaus Demo
//!
//! A tour of the CRUD surface and the predicate query builder:
//! - Defining a record type with a manual `TableRecord` impl
//! - Builder-validated create/update/delete commands
//! - Dynamic queries compiled from per-column comparators
//!
//! Requires a reachable PostgreSQL instance (see the config below).

use rowhaus::prelude::*;

/// A simple user model demonstrating basic field types
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl TableRecord for User {
    type Id = i64;

    fn table_name() -> &'static str {
        "demo_users"
    }

    fn identifier_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "name", "email", "age"]
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("🚀 Rowhaus Demo");
    println!("===============");

    // 1. Database setup
    let config = DatabaseConfig::new(
        "localhost".to_string(),
        5432,
        "rowhaus".to_string(),
        "postgres".to_string(),
        "password".to_string(),
        1,    // min_connections
        5,    // max_connections
        30,   // connection_timeout_seconds
        600,  // idle_timeout_seconds
        3600, // max_lifetime_seconds
    );

    let rowhaus = Rowhaus::new(config).await?;
    rowhaus.health_check().await?;
    println!("✅ Connected to PostgreSQL");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS demo_users (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            age INT NOT NULL
        )",
    )
    .execute(rowhaus.pool())
    .await?;

    let users = TableStore::<User>::new(rowhaus.pool().clone())?;

    // 2. Create
    let command = CreateCommand::<User>::builder()
        .set("name", "Ada Lovelace")
        .set("email", "ada@example.com")
        .set("age", 36)
        .build()?;
    let ada = users.create(command).await?;
    println!("✅ Created user {} (id {})", ada.name, ada.id);

    let command = CreateCommand::<User>::builder()
        .set("name", "Grace Hopper")
        .set("email", "grace@example.com")
        .set("age", 45)
        .build()?;
    let grace = users.create(command).await?;
    println!("✅ Created user {} (id {})", grace.name, grace.id);

    // 3. Read
    let fetched = users.get(&ada.id).await?;
    println!("🔎 get({}) -> {:?}", ada.id, fetched.map(|u| u.name));

    let everyone = users.get_all().await?;
    println!("🔎 get_all() -> {} users", everyone.len());

    // 4. Dynamic query: adults whose name starts with a capital G
    let command = QueryCommand::<User>::builder()
        .filter("age", Comparator::gte(18))
        .filter("name", Comparator::like("G%"))
        .build()?;
    let matches = users.query(command).await?;
    println!("🔎 query(age >= 18 AND name LIKE 'G%') -> {} rows", matches.len());

    // 5. Update
    let command = UpdateCommand::<User>::builder(ada.id).set("age", 37).build()?;
    users.update(command).await?;
    let updated = users.get(&ada.id).await?.expect("just updated");
    println!("✏️  Updated {}'s age to {}", updated.name, updated.age);

    // 6. Delete
    let deleted = users.delete(DeleteCommand::new(grace.id)).await?;
    println!("🗑️  Deleted grace: {}", deleted);

    Ok(())
}
