//! Builds parameterized SELECT, INSERT, UPSERT and DELETE text from a static table descriptor.

/// Static description of one entity table. Column names come from code, never from requests.
#[derive(Clone, Copy, Debug)]
pub struct TableSpec {
    pub name: &'static str,
    pub id_column: &'static str,
    /// Non-identifier columns, in the order the entity binds its values.
    pub columns: &'static [&'static str],
    /// Identifier is assigned by the database (BIGSERIAL) when absent.
    pub generated_id: bool,
}

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn placeholders(from: usize, count: usize) -> String {
    (from..from + count)
        .map(|n| format!("${}", n))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Identifier first, then the remaining columns.
fn select_column_list(table: &TableSpec) -> String {
    std::iter::once(table.id_column)
        .chain(table.columns.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

fn column_list(table: &TableSpec) -> String {
    table.columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// SELECT every row, ordered by identifier.
pub fn select_all(table: &TableSpec) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.id_column)
    )
}

/// SELECT by identifier. Caller binds the id as $1.
pub fn select_by_id(table: &TableSpec) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        select_column_list(table),
        quoted(table.name),
        quoted(table.id_column)
    )
}

/// INSERT without the identifier, letting the database generate it. Binds columns as $1..$n.
pub fn insert_generated(table: &TableSpec) -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table.name),
        column_list(table),
        placeholders(1, table.columns.len()),
        select_column_list(table)
    )
}

/// INSERT with an explicit identifier, replacing every column when the row exists.
/// Binds the id as $1 and columns as $2..$n+1.
pub fn upsert(table: &TableSpec) -> String {
    let assignments = table
        .columns
        .iter()
        .map(|c| format!("{} = EXCLUDED.{}", quoted(c), quoted(c)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT ({}) DO UPDATE SET {} RETURNING {}",
        quoted(table.name),
        select_column_list(table),
        placeholders(1, table.columns.len() + 1),
        quoted(table.id_column),
        assignments,
        select_column_list(table)
    )
}

/// DELETE by identifier. Caller binds the id as $1.
pub fn delete_by_id(table: &TableSpec) -> String {
    format!(
        "DELETE FROM {} WHERE {} = $1",
        quoted(table.name),
        quoted(table.id_column)
    )
}
