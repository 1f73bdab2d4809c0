use std::collections::{BTreeSet, HashMap, HashSet, hash_map::Entry};

use sea_orm::FromQueryResult;

use crate::{
    error::StoreResult,
    models::{Film, Genre, Mpa, User},
};

#[derive(Debug, FromQueryResult)]
pub struct FilmRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_date: String,
    pub duration: i32,
    pub rating_id: i64,
    pub rating_name: String,
    pub genre_id: Option<i64>,
    pub genre_name: Option<String>,
    pub like_user_id: Option<i64>,
}

#[derive(Debug, FromQueryResult)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    pub birthday: String,
    pub friend_id: Option<i64>,
}

pub fn collect_films(rows: impl IntoIterator<Item = FilmRow>) -> StoreResult<Vec<Film>> {
    let mut order = Vec::new();
    let mut films: HashMap<i64, Film> = HashMap::new();

    for row in rows {
        let film = match films.entry(row.id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                order.push(row.id);
                entry.insert(Film {
                    id: row.id,
                    name: row.name,
                    description: row.description,
                    release_date: row.release_date.parse()?,
                    duration: row.duration,
                    mpa: Mpa { id: row.rating_id, name: row.rating_name },
                    genres: BTreeSet::new(),
                    likes: HashSet::new(),
                })
            }
        };

        // 0 is the legacy "no child here" marker in joined rows, never a real id
        if let (Some(id), Some(name)) = (row.genre_id, row.genre_name) {
            if id != 0 {
                film.genres.insert(Genre { id, name });
            }
        }
        if let Some(user_id) = row.like_user_id {
            if user_id != 0 {
                film.likes.insert(user_id);
            }
        }
    }

    Ok(order.into_iter().filter_map(|id| films.remove(&id)).collect())
}

pub fn collect_users(rows: impl IntoIterator<Item = UserRow>) -> StoreResult<Vec<User>> {
    let mut order = Vec::new();
    let mut users: HashMap<i64, User> = HashMap::new();

    for row in rows {
        let user = match users.entry(row.id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                order.push(row.id);
                entry.insert(User {
                    id: row.id,
                    email: row.email,
                    login: row.login,
                    name: row.name,
                    birthday: row.birthday.parse()?,
                    friends: HashSet::new(),
                })
            }
        };

        if let Some(friend_id) = row.friend_id {
            if friend_id != 0 {
                user.friends.insert(friend_id);
            }
        }
    }

    Ok(order.into_iter().filter_map(|id| users.remove(&id)).collect())
}
