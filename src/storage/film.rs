use std::collections::{BTreeSet, HashSet};

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    FromQueryResult, NotSet, QueryFilter, Set, Statement, TransactionTrait,
};
use tracing::debug;

use crate::{
    entities::{film, film_genre, like},
    error::{StoreError, StoreResult},
    mapper::{self, FilmRow},
    models::{Film, Genre},
};

const FILM_SELECT: &str = "\
SELECT f.id, f.name, f.description, f.release_date, f.duration, \
       r.id AS rating_id, r.name AS rating_name, \
       g.id AS genre_id, g.name AS genre_name, \
       l.user_id AS like_user_id \
FROM film f \
JOIN ratings r ON f.rating_id = r.id \
LEFT JOIN films_genres fg ON f.id = fg.film_id \
LEFT JOIN genres g ON fg.genre_id = g.id \
LEFT JOIN likes l ON f.id = l.film_id";

#[derive(Clone)]
pub struct FilmStorage {
    db: DatabaseConnection,
}

impl FilmStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add(&self, mut film: Film) -> StoreResult<Film> {
        let txn = self.db.begin().await?;

        let model = film::ActiveModel {
            id: NotSet,
            name: Set(film.name.clone()),
            description: Set(film.description.clone()),
            release_date: Set(film.release_date.to_string()),
            duration: Set(film.duration),
            rating_id: Set(film.mpa.id),
        };
        let inserted =
            film::Entity::insert(model).exec(&txn).await.map_err(StoreError::from_write)?;
        film.id = inserted.last_insert_id;

        insert_genres(&txn, film.id, &film.genres).await?;
        insert_likes(&txn, film.id, &film.likes).await?;

        txn.commit().await?;
        debug!(id = film.id, "film inserted");
        Ok(film)
    }

    pub async fn update(&self, film: Film) -> StoreResult<Film> {
        let txn = self.db.begin().await?;

        let model = film::ActiveModel {
            id: NotSet,
            name: Set(film.name.clone()),
            description: Set(film.description.clone()),
            release_date: Set(film.release_date.to_string()),
            duration: Set(film.duration),
            rating_id: Set(film.mpa.id),
        };
        film::Entity::update_many()
            .set(model)
            .filter(film::Column::Id.eq(film.id))
            .exec(&txn)
            .await
            .map_err(StoreError::from_write)?;

        film_genre::Entity::delete_many()
            .filter(film_genre::Column::FilmId.eq(film.id))
            .exec(&txn)
            .await?;
        insert_genres(&txn, film.id, &film.genres).await?;

        like::Entity::delete_many().filter(like::Column::FilmId.eq(film.id)).exec(&txn).await?;
        insert_likes(&txn, film.id, &film.likes).await?;

        txn.commit().await?;
        debug!(id = film.id, "film updated");
        Ok(film)
    }

    pub async fn remove(&self, id: i64) -> StoreResult<()> {
        // association rows go with the parent via ON DELETE CASCADE
        film::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Film>> {
        let stmt = Statement::from_string(
            self.db.get_database_backend(),
            format!("{FILM_SELECT} ORDER BY f.id"),
        );
        let rows = FilmRow::find_by_statement(stmt).all(&self.db).await?;
        mapper::collect_films(rows)
    }

    pub async fn find_by_id(&self, id: i64) -> StoreResult<Film> {
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            format!("{FILM_SELECT} WHERE f.id = ?"),
            [id.into()],
        );
        let rows = FilmRow::find_by_statement(stmt).all(&self.db).await?;
        mapper::collect_films(rows)?.into_iter().next().ok_or(StoreError::FilmNotFound(id))
    }
}

async fn insert_genres(
    txn: &DatabaseTransaction,
    film_id: i64,
    genres: &BTreeSet<Genre>,
) -> StoreResult<()> {
    for genre in genres {
        let row = film_genre::ActiveModel { film_id: Set(film_id), genre_id: Set(genre.id) };
        film_genre::Entity::insert(row).exec(txn).await.map_err(StoreError::from_write)?;
    }
    Ok(())
}

async fn insert_likes(
    txn: &DatabaseTransaction,
    film_id: i64,
    likes: &HashSet<i64>,
) -> StoreResult<()> {
    for user_id in likes {
        let row = like::ActiveModel { film_id: Set(film_id), user_id: Set(*user_id) };
        like::Entity::insert(row).exec(txn).await.map_err(StoreError::from_write)?;
    }
    Ok(())
}
