//! Message Repository

use super::{RepoError, RepoResult, category};
use shared::models::{Message, MessageCreate, MessageUpdate};
use sqlx::SqlitePool;

const MESSAGE_SELECT: &str = "SELECT id, category_id, title, body, is_active FROM message";

/// Find all messages, including inactive ones (admin view)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Message>> {
    let sql = format!("{MESSAGE_SELECT} ORDER BY title");
    let rows = sqlx::query_as::<_, Message>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

/// Public catalog listing: active messages, optional category filter and
/// case-insensitive text search over title/body.
pub async fn list_public(
    pool: &SqlitePool,
    category_id: Option<i64>,
    q: Option<&str>,
) -> RepoResult<Vec<Message>> {
    let mut qb: sqlx::QueryBuilder<sqlx::Sqlite> = sqlx::QueryBuilder::new(
        "SELECT id, category_id, title, body, is_active FROM message WHERE is_active = 1",
    );
    if let Some(cid) = category_id {
        qb.push(" AND category_id = ").push_bind(cid);
    }
    if let Some(q) = q
        && !q.trim().is_empty()
    {
        let pattern = format!("%{}%", q.trim());
        qb.push(" AND (title LIKE ")
            .push_bind(pattern.clone())
            .push(" OR body LIKE ")
            .push_bind(pattern)
            .push(")");
    }
    qb.push(" ORDER BY title");
    let rows = qb.build_query_as::<Message>().fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Message>> {
    let sql = format!("{MESSAGE_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Message>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: MessageCreate) -> RepoResult<Message> {
    if data.title.trim().is_empty() || data.body.trim().is_empty() {
        return Err(RepoError::Validation(
            "Message title and body must not be empty".into(),
        ));
    }
    // Referential check at creation time only — deactivating a category later
    // does not cascade.
    category::find_by_id(pool, data.category_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", data.category_id)))?;

    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO message (id, category_id, title, body, is_active) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(id)
    .bind(data.category_id)
    .bind(&data.title)
    .bind(&data.body)
    .bind(data.is_active.unwrap_or(true))
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create message".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: MessageUpdate) -> RepoResult<Message> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Message {id} not found")))?;

    if let Some(cid) = data.category_id {
        category::find_by_id(pool, cid)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Category {cid} not found")))?;
    }
    if let Some(ref title) = data.title
        && title.trim().is_empty()
    {
        return Err(RepoError::Validation("Message title must not be empty".into()));
    }
    if let Some(ref body) = data.body
        && body.trim().is_empty()
    {
        return Err(RepoError::Validation("Message body must not be empty".into()));
    }

    sqlx::query(
        "UPDATE message SET category_id = COALESCE(?1, category_id), title = COALESCE(?2, title), body = COALESCE(?3, body), is_active = COALESCE(?4, is_active) WHERE id = ?5",
    )
    .bind(data.category_id)
    .bind(data.title)
    .bind(data.body)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Message {id} not found")))
}

/// Hard delete a message. Orders keep their message_id reference for history.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM message WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Message {id} not found")));
    }
    Ok(true)
}

// ── Bulk import ─────────────────────────────────────────────────────

/// One parsed import block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBlock {
    pub category: String,
    pub title: String,
    pub body: String,
}

const FALLBACK_CATEGORY: &str = "Sem Categoria";

/// Parse marker-formatted import text.
///
/// Lines starting with `Categoria:` open a category section, `Título:` (or
/// `Titulo:`) starts a message, following lines accumulate into its body and
/// `---` closes it. A trailing unterminated block is flushed. Blocks without
/// a title or body are dropped, matching the historical import behavior.
pub fn parse_import(text: &str) -> Vec<ImportBlock> {
    let mut blocks = Vec::new();
    let mut current_cat: Option<String> = None;
    let mut current_title: Option<String> = None;
    let mut buffer: Vec<&str> = Vec::new();

    let mut flush =
        |cat: &Option<String>, title: &mut Option<String>, buffer: &mut Vec<&str>| {
            if let (Some(cat), Some(t)) = (cat.as_deref(), title.take())
                && !t.trim().is_empty()
                && !buffer.is_empty()
            {
                blocks.push(ImportBlock {
                    category: cat.to_string(),
                    title: t.trim().to_string(),
                    body: buffer.join("\n").trim().to_string(),
                });
            }
            buffer.clear();
        };

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("Categoria:") {
            flush(&current_cat, &mut current_title, &mut buffer);
            let name = rest.trim();
            current_cat = Some(if name.is_empty() {
                FALLBACK_CATEGORY.to_string()
            } else {
                name.to_string()
            });
            continue;
        }
        if let Some(rest) = line
            .strip_prefix("Título:")
            .or_else(|| line.strip_prefix("Titulo:"))
        {
            flush(&current_cat, &mut current_title, &mut buffer);
            current_title = Some(rest.trim().to_string());
            continue;
        }
        if line == "---" {
            flush(&current_cat, &mut current_title, &mut buffer);
            continue;
        }
        buffer.push(line);
    }
    // Final flush for an unterminated trailing block
    flush(&current_cat, &mut current_title, &mut buffer);

    blocks
}

/// Import marker-formatted text into the catalog.
///
/// Categories are created on demand; returns the number of messages created.
pub async fn import_text(pool: &SqlitePool, text: &str) -> RepoResult<usize> {
    let blocks = parse_import(text);
    let mut imported = 0usize;
    for block in blocks {
        let cat = match category::find_by_name(pool, &block.category).await? {
            Some(c) => c,
            None => {
                category::create(
                    pool,
                    shared::models::CategoryCreate {
                        name: block.category.clone(),
                        is_active: Some(true),
                    },
                )
                .await?
            }
        };
        create(
            pool,
            MessageCreate {
                category_id: cat.id,
                title: block.title,
                body: block.body,
                is_active: Some(true),
            },
        )
        .await?;
        imported += 1;
    }
    Ok(imported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_marker_formatted_text() {
        let text = "Categoria: Aniversário\n\
                    Título: Clássica\n\
                    Primeira linha.\n\
                    Segunda linha.\n\
                    ---\n\
                    Título: Curta\n\
                    Só uma linha.\n";
        let blocks = parse_import(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].category, "Aniversário");
        assert_eq!(blocks[0].title, "Clássica");
        assert_eq!(blocks[0].body, "Primeira linha.\nSegunda linha.");
        // Trailing block without `---` is flushed
        assert_eq!(blocks[1].title, "Curta");
    }

    #[test]
    fn category_switch_flushes_pending_block() {
        let text = "Categoria: Amor\n\
                    Título: Romântica\n\
                    Corpo.\n\
                    Categoria: Amizade\n\
                    Título: Parceiros\n\
                    Outro corpo.\n";
        let blocks = parse_import(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].category, "Amor");
        assert_eq!(blocks[1].category, "Amizade");
    }

    #[test]
    fn titleless_or_bodyless_blocks_are_dropped() {
        let text = "Categoria: Amor\n\
                    Corpo sem título.\n\
                    ---\n\
                    Título: Sem corpo\n\
                    ---\n";
        assert!(parse_import(text).is_empty());
    }

    #[test]
    fn empty_category_name_falls_back() {
        let text = "Categoria:\nTítulo: T\nCorpo.\n";
        let blocks = parse_import(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].category, "Sem Categoria");
    }

    #[test]
    fn text_without_markers_yields_nothing() {
        assert!(parse_import("apenas texto solto\nsem marcadores").is_empty());
    }
}
