use crate::db::DbPool;

pub struct Migration {
    pub name: &'static str,
    pub sql: &'static str,
}

pub fn all_migrations() -> Vec<Migration> {
    vec![
        Migration {
            name: "001_initial_schema",
            sql: "-- initial schema created by init_db, this is a placeholder
                  SELECT 1;",
        },
        Migration {
            name: "002_resolution_indexes",
            sql: "CREATE INDEX IF NOT EXISTS idx_resolutions_alert ON resolutions(alert_id);
                  CREATE INDEX IF NOT EXISTS idx_resolutions_submitted ON resolutions(submitted_at);",
        },
    ]
}

pub fn run_pending(pool: &DbPool) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let conn = pool.get()?;
    let applied_set: std::collections::HashSet<String> = conn
        .prepare("SELECT name FROM migrations ORDER BY id")?
        .query_map([], |row| row.get::<_, String>(0))?
        .filter_map(|r| r.ok())
        .collect();

    let mut newly_applied = Vec::new();

    for migration in all_migrations() {
        if !applied_set.contains(migration.name) {
            conn.execute_batch(migration.sql)?;
            conn.execute(
                "INSERT INTO migrations (name) VALUES (?1)",
                [migration.name],
            )?;
            newly_applied.push(migration.name.to_string());
        }
    }

    Ok(newly_applied)
}

pub fn applied(pool: &DbPool) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let conn = pool.get()?;
    let names: Vec<String> = conn
        .prepare("SELECT name FROM migrations ORDER BY id")?
        .query_map([], |row| row.get(0))?
        .filter_map(|r| r.ok())
        .collect();
    Ok(names)
}
