//! Storage schema for projects.
//!
//! The table is declared for installers; no handler reads or writes it.

/// Table name, without the site prefix
pub const PROJECTS_TABLE: &str = "semantix_projects";

/// Default character set clause
pub const DEFAULT_CHARSET_COLLATE: &str =
    "DEFAULT CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_520_ci";

/// `CREATE TABLE` statement for the projects table under `prefix`.
pub fn projects_table_ddl(prefix: &str, charset_collate: &str) -> String {
    let columns = [
        "id mediumint(9) NOT NULL AUTO_INCREMENT",
        "name varchar(255) NOT NULL",
        "url varchar(255) NOT NULL",
        "description text",
        "status varchar(50) DEFAULT 'active'",
        "created_at datetime DEFAULT CURRENT_TIMESTAMP",
        "updated_at datetime DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP",
        "PRIMARY KEY (id)",
    ];

    let body = columns
        .iter()
        .map(|c| format!("    {}", c))
        .collect::<Vec<_>>()
        .join(",\n");
    let suffix = if charset_collate.is_empty() {
        String::new()
    } else {
        format!(" {}", charset_collate)
    };

    format!(
        "CREATE TABLE {}{} (\n{}\n){};",
        prefix, PROJECTS_TABLE, body, suffix
    )
}
