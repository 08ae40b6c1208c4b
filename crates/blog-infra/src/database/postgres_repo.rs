//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, Condition, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use blog_core::domain::{Post, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::{PageMeta, PageRequest, PostRepository};

use super::entity::post::{self, Entity as PostEntity};

/// SeaORM-backed implementation of the post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Newest first; ties on `date` broken by id so ordering stays
    /// deterministic.
    fn ordered() -> Select<PostEntity> {
        PostEntity::find()
            .order_by_desc(post::Column::Date)
            .order_by_asc(post::Column::Id)
    }
}

/// Literal substring match: `%`, `_` and the escape character itself must
/// not act as ILIKE wildcards when they appear in the query.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn query_err(err: DbErr) -> RepoError {
    let msg = err.to_string();
    if msg.contains("duplicate") || msg.contains("unique") {
        RepoError::Constraint(msg)
    } else {
        RepoError::Query(msg)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = post.into();
        let saved = active.insert(&self.db).await.map_err(query_err)?;
        Ok(saved.into())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let rows = Self::ordered().all(&self.db).await.map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_page(&self, req: PageRequest) -> Result<(Vec<Post>, PageMeta), RepoError> {
        let paginator = Self::ordered().paginate(&self.db, req.limit);
        let totals = paginator.num_items_and_pages().await.map_err(query_err)?;

        // SeaORM pages are zero-based; the API contract is one-based.
        let rows = paginator.fetch_page(req.page - 1).await.map_err(query_err)?;

        let meta = PageMeta {
            total: totals.number_of_items,
            page: req.page,
            limit: req.limit,
            total_pages: totals.number_of_pages,
        };
        Ok((rows.into_iter().map(Into::into).collect(), meta))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(row.map(Into::into))
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let Some(row) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?
        else {
            return Ok(None);
        };

        let mut current: Post = row.into();
        patch.apply_to(&mut current);

        let active: post::ActiveModel = current.into();
        let updated = active.update(&self.db).await.map_err(query_err)?;
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find().count(&self.db).await.map_err(query_err)
    }

    async fn find_recent(&self, limit: u64) -> Result<Vec<Post>, RepoError> {
        let rows = Self::ordered()
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError> {
        let pattern = like_pattern(query);

        // The date match is defined as ILIKE over the text rendering of the
        // timestamp; category arrays are flattened before matching.
        let condition = Condition::any()
            .add(Expr::col(post::Column::Title).ilike(pattern.as_str()))
            .add(Expr::cust_with_values(
                "array_to_string(\"category\", ',') ILIKE ?",
                [pattern.clone()],
            ))
            .add(Expr::cust_with_values(
                "CAST(\"date\" AS TEXT) ILIKE ?",
                [pattern.clone()],
            ));

        let rows = Self::ordered()
            .filter(condition)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("alice"), "%alice%");
        assert_eq!(like_pattern("100%_done"), "%100\\%\\_done%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }
}
