pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod mapper;
pub mod models;
pub mod storage;

pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use models::{Film, Genre, Mpa, User};
pub use storage::{FilmStorage, GenreStorage, MpaStorage, UserStorage};
