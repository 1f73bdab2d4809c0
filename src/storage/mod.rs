mod film;
mod genre;
mod mpa;
mod user;

pub use film::FilmStorage;
pub use genre::GenreStorage;
pub use mpa::MpaStorage;
pub use user::UserStorage;
