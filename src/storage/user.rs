use std::collections::HashSet;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    FromQueryResult, NotSet, QueryFilter, Set, Statement, TransactionTrait,
};
use tracing::debug;

use crate::{
    entities::{friend, user},
    error::{StoreError, StoreResult},
    mapper::{self, UserRow},
    models::User,
};

const USER_SELECT: &str = "\
SELECT u.id, u.email, u.login, u.name, u.birthday, fr.friend_id \
FROM users u \
LEFT JOIN friends fr ON u.id = fr.user_id AND fr.confirm = 1";

#[derive(Clone)]
pub struct UserStorage {
    db: DatabaseConnection,
}

impl UserStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add(&self, mut user: User) -> StoreResult<User> {
        let txn = self.db.begin().await?;

        let model = user::ActiveModel {
            id: NotSet,
            email: Set(user.email.clone()),
            login: Set(user.login.clone()),
            name: Set(user.name.clone()),
            birthday: Set(user.birthday.to_string()),
        };
        let inserted =
            user::Entity::insert(model).exec(&txn).await.map_err(StoreError::from_write)?;
        user.id = inserted.last_insert_id;

        insert_friends(&txn, user.id, &user.friends).await?;

        txn.commit().await?;
        debug!(id = user.id, "user inserted");
        Ok(user)
    }

    pub async fn update(&self, user: User) -> StoreResult<User> {
        let txn = self.db.begin().await?;

        let model = user::ActiveModel {
            id: NotSet,
            email: Set(user.email.clone()),
            login: Set(user.login.clone()),
            name: Set(user.name.clone()),
            birthday: Set(user.birthday.to_string()),
        };
        user::Entity::update_many()
            .set(model)
            .filter(user::Column::Id.eq(user.id))
            .exec(&txn)
            .await
            .map_err(StoreError::from_write)?;

        friend::Entity::delete_many()
            .filter(friend::Column::UserId.eq(user.id))
            .exec(&txn)
            .await?;
        insert_friends(&txn, user.id, &user.friends).await?;

        txn.commit().await?;
        debug!(id = user.id, "user updated");
        Ok(user)
    }

    pub async fn remove(&self, id: i64) -> StoreResult<()> {
        user::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn find_all(&self) -> StoreResult<Vec<User>> {
        let stmt = Statement::from_string(
            self.db.get_database_backend(),
            format!("{USER_SELECT} ORDER BY u.id"),
        );
        let rows = UserRow::find_by_statement(stmt).all(&self.db).await?;
        mapper::collect_users(rows)
    }

    pub async fn find_by_id(&self, id: i64) -> StoreResult<User> {
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            format!("{USER_SELECT} WHERE u.id = ?"),
            [id.into()],
        );
        let rows = UserRow::find_by_statement(stmt).all(&self.db).await?;
        mapper::collect_users(rows)?.into_iter().next().ok_or(StoreError::UserNotFound(id))
    }
}

async fn insert_friends(
    txn: &DatabaseTransaction,
    user_id: i64,
    friends: &HashSet<i64>,
) -> StoreResult<()> {
    for friend_id in friends {
        let row = friend::ActiveModel {
            user_id: Set(user_id),
            friend_id: Set(*friend_id),
            confirm: Set(true),
        };
        friend::Entity::insert(row).exec(txn).await.map_err(StoreError::from_write)?;
    }
    Ok(())
}
