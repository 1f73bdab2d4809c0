use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entities::genre,
    error::{StoreError, StoreResult},
    models::Genre,
};

#[derive(Clone)]
pub struct GenreStorage {
    db: DatabaseConnection,
}

impl GenreStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Genre>> {
        let rows =
            genre::Entity::find().order_by_asc(genre::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(|m| Genre { id: m.id, name: m.name }).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> StoreResult<Genre> {
        genre::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(|m| Genre { id: m.id, name: m.name })
            .ok_or(StoreError::GenreNotFound(id))
    }
}
