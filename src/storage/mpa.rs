use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entities::rating,
    error::{StoreError, StoreResult},
    models::Mpa,
};

#[derive(Clone)]
pub struct MpaStorage {
    db: DatabaseConnection,
}

impl MpaStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Mpa>> {
        let rows =
            rating::Entity::find().order_by_asc(rating::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(|m| Mpa { id: m.id, name: m.name }).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> StoreResult<Mpa> {
        rating::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(|m| Mpa { id: m.id, name: m.name })
            .ok_or(StoreError::RatingNotFound(id))
    }
}
