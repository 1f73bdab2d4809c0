#![allow(dead_code)]

use std::collections::{BTreeSet, HashSet};

use filmorate::{Film, Mpa, User, db};
use jiff::civil::Date;
use sea_orm::{ConnectOptions, DatabaseConnection};

// single connection so every query sees the same in-memory database
pub async fn setup() -> DatabaseConnection {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .try_init();

    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    db::connect_and_migrate(opts).await.expect("in-memory database")
}

pub fn film(name: &str) -> Film {
    Film {
        id: 0,
        name: name.to_string(),
        description: String::new(),
        release_date: Date::constant(2009, 5, 29),
        duration: 96,
        mpa: Mpa { id: 1, name: String::new() },
        genres: BTreeSet::new(),
        likes: HashSet::new(),
    }
}

pub fn user(email: &str, login: &str) -> User {
    User {
        id: 0,
        email: email.to_string(),
        login: login.to_string(),
        name: None,
        birthday: Date::constant(1990, 1, 1),
        friends: HashSet::new(),
    }
}
