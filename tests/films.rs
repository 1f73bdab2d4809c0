mod common;

use std::collections::{BTreeSet, HashSet};

use filmorate::{FilmStorage, Genre, StoreError, UserStorage};

fn genre(id: i64) -> Genre {
    Genre { id, name: String::new() }
}

#[tokio::test]
async fn add_then_find_round_trips_the_genre_set() {
    let db = common::setup().await;
    let films = FilmStorage::new(db);

    let mut film = common::film("Interstellar");
    film.genres = BTreeSet::from([genre(1), genre(2)]);

    let film = films.add(film).await.unwrap();
    assert!(film.id > 0);

    let found = films.find_by_id(film.id).await.unwrap();
    let genre_ids: BTreeSet<i64> = found.genres.iter().map(|g| g.id).collect();
    assert_eq!(genre_ids, BTreeSet::from([1, 2]));
    // reference names are hydrated from the store on reads
    assert!(found.genres.iter().all(|g| !g.name.is_empty()));
    assert_eq!(found.mpa.name, "G");
}

#[tokio::test]
async fn film_without_genres_comes_back_with_empty_sets() {
    let db = common::setup().await;
    let films = FilmStorage::new(db.clone());
    let users = UserStorage::new(db);

    let film = films.add(common::film("Up")).await.unwrap();

    let found = films.find_by_id(film.id).await.unwrap();
    assert!(found.genres.is_empty());
    assert!(found.likes.is_empty());

    // a like lands through the replace-all update path
    let fan = users.add(common::user("fan@example.com", "fan")).await.unwrap();
    let mut updated = found;
    updated.likes = HashSet::from([fan.id]);
    films.update(updated).await.unwrap();

    let found = films.find_by_id(film.id).await.unwrap();
    assert_eq!(found.likes, HashSet::from([fan.id]));
}

#[tokio::test]
async fn update_replaces_the_whole_genre_set() {
    let db = common::setup().await;
    let films = FilmStorage::new(db);

    let mut film = common::film("Memento");
    film.genres = BTreeSet::from([genre(1), genre(2)]);
    let mut film = films.add(film).await.unwrap();

    film.genres = BTreeSet::from([genre(3)]);
    films.update(film.clone()).await.unwrap();

    let found = films.find_by_id(film.id).await.unwrap();
    let genre_ids: BTreeSet<i64> = found.genres.iter().map(|g| g.id).collect();
    assert_eq!(genre_ids, BTreeSet::from([3]));
}

#[tokio::test]
async fn update_with_empty_genre_set_clears_associations() {
    let db = common::setup().await;
    let films = FilmStorage::new(db);

    let mut film = common::film("Alien");
    film.genres = BTreeSet::from([genre(4)]);
    let mut film = films.add(film).await.unwrap();

    film.genres = BTreeSet::new();
    films.update(film.clone()).await.unwrap();

    let found = films.find_by_id(film.id).await.unwrap();
    assert!(found.genres.is_empty());
}

#[tokio::test]
async fn repeated_reads_yield_equal_aggregates() {
    let db = common::setup().await;
    let films = FilmStorage::new(db);

    let mut film = common::film("Arrival");
    film.genres = BTreeSet::from([genre(2), genre(4)]);
    let film = films.add(film).await.unwrap();

    let first = films.find_by_id(film.id).await.unwrap();
    let second = films.find_by_id(film.id).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn find_all_returns_every_film_in_id_order() {
    let db = common::setup().await;
    let films = FilmStorage::new(db);

    let first = films.add(common::film("First")).await.unwrap();
    let mut second = common::film("Second");
    second.genres = BTreeSet::from([genre(1)]);
    let second = films.add(second).await.unwrap();

    let all = films.find_all().await.unwrap();
    let ids: Vec<i64> = all.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(all[1].genres.len(), 1);
}

#[tokio::test]
async fn find_by_id_for_missing_film_carries_the_id() {
    let db = common::setup().await;
    let films = FilmStorage::new(db);

    let err = films.find_by_id(9999).await.unwrap_err();
    assert!(matches!(err, StoreError::FilmNotFound(9999)));
    assert!(err.to_string().contains("9999"));
}

#[tokio::test]
async fn unknown_rating_id_is_a_constraint_violation() {
    let db = common::setup().await;
    let films = FilmStorage::new(db);

    let mut film = common::film("Unrated");
    film.mpa.id = 999;
    let err = films.add(film).await.unwrap_err();
    assert!(matches!(err, StoreError::ConstraintViolation(_)));
}

#[tokio::test]
async fn unknown_genre_id_rolls_back_the_whole_add() {
    let db = common::setup().await;
    let films = FilmStorage::new(db);

    let mut film = common::film("Half Written");
    film.genres = BTreeSet::from([genre(999)]);
    let err = films.add(film).await.unwrap_err();
    assert!(matches!(err, StoreError::ConstraintViolation(_)));

    // the scalar row from the failed transaction must not be visible
    assert!(films.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn remove_deletes_the_film_and_its_associations() {
    let db = common::setup().await;
    let films = FilmStorage::new(db);

    let mut film = common::film("Gone");
    film.genres = BTreeSet::from([genre(1)]);
    let film = films.add(film).await.unwrap();

    films.remove(film.id).await.unwrap();
    assert!(matches!(
        films.find_by_id(film.id).await.unwrap_err(),
        StoreError::FilmNotFound(_)
    ));
}
