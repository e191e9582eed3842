//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, Order, QueryFilter, QueryOrder};
use uuid::Uuid;

use blog_core::domain::{ListOptions, NewPost, Post, PostChanges, PostFilter, SortField, SortOrder};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

fn sort_column(field: SortField) -> post::Column {
    match field {
        SortField::Id => post::Column::Id,
        SortField::Title => post::Column::Title,
        SortField::Author => post::Column::Author,
        SortField::Contents => post::Column::Contents,
        SortField::Tags => post::Column::Tags,
        SortField::CreatedAt => post::Column::CreatedAt,
        SortField::UpdatedAt => post::Column::UpdatedAt,
    }
}

fn sort_order(order: SortOrder) -> Order {
    match order {
        SortOrder::Ascending => Order::Asc,
        SortOrder::Descending => Order::Desc,
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = post.into();
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into())
    }

    async fn find(
        &self,
        filter: PostFilter,
        options: ListOptions,
    ) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(?filter, ?options, "Listing posts");

        let query = match filter {
            PostFilter::All => PostEntity::find(),
            PostFilter::Author(author) => {
                PostEntity::find().filter(post::Column::Author.eq(author))
            }
            PostFilter::Tag(tag) => {
                PostEntity::find().filter(Expr::cust_with_values("$1 = ANY(\"tags\")", [tag]))
            }
        };

        let result = query
            .order_by(sort_column(options.sort_by), sort_order(options.sort_order))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        match post::ActiveModel::for_update(id, changes).update(&self.db).await {
            Ok(model) => Ok(Some(model.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(RepoError::Query(e.to_string())),
        }
    }
}
