//! Post entity for SeaORM.

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use blog_core::domain::{NewPost, PostChanges};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub contents: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// Stamps the store-side fields: a fresh id and `created_at` on insert,
/// `updated_at` on every save.
#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        if insert {
            if self.id.is_not_set() {
                self.id = Set(Uuid::new_v4());
            }
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

impl ActiveModel {
    /// Partial update of the row with `id`; only present fields are written.
    pub fn for_update(id: Uuid, changes: PostChanges) -> Self {
        Self {
            id: Set(id),
            title: changes.title.map(Set).unwrap_or(NotSet),
            author: changes.author.map(|a| Set(Some(a))).unwrap_or(NotSet),
            contents: changes.contents.map(|c| Set(Some(c))).unwrap_or(NotSet),
            tags: changes.tags.map(Set).unwrap_or(NotSet),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for blog_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            contents: model.contents,
            tags: model.tags,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from a validated draft to an insertable ActiveModel.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title().to_owned()),
            author: Set(post.author().map(str::to_owned)),
            contents: Set(post.contents().map(str::to_owned)),
            tags: Set(post.tags().to_vec()),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}
