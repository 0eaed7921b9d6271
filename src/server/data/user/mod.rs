use sea_orm::{ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder};

use crate::server::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every user, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    ///
    /// Fails with a foreign key error while favorite links still reference the user.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod get_all {
        use holocron_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect users returned in ID order
        #[tokio::test]
        async fn returns_users_ordered_by_id() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::User)
                .with_mock_user(2)
                .with_mock_user(1)
                .build()
                .await?;

            let user_repo = UserRepository::new(&test.db);
            let users = user_repo.get_all().await?;

            let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
            assert_eq!(ids, vec![1, 2]);

            Ok(())
        }

        /// Expect empty Vec when no users exist
        #[tokio::test]
        async fn returns_empty_for_no_users() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;

            let user_repo = UserRepository::new(&test.db);
            let users = user_repo.get_all().await?;

            assert!(users.is_empty());

            Ok(())
        }

        /// Expect Error when the user table has not been created
        #[tokio::test]
        async fn fails_when_tables_are_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get_all().await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_id {
        use holocron_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Ok(Some(_)) when existing user is found
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            let user_model = test.user().insert_mock_user(1).await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get_by_id(user_model.id).await?;

            assert_eq!(result, Some(user_model));

            Ok(())
        }

        /// Expect Ok(None) when user is not found
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;

            let nonexistent_user_id = 1;
            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get_by_id(nonexistent_user_id).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod delete {
        use holocron_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect one row affected when deleting an existing user
        #[tokio::test]
        async fn deletes_existing_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            let user_model = test.user().insert_mock_user(1).await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.delete(user_model.id).await?;

            assert_eq!(result.rows_affected, 1);
            assert!(user_repo.get_by_id(user_model.id).await?.is_none());

            Ok(())
        }

        /// Expect zero rows affected when the user does not exist
        #[tokio::test]
        async fn returns_no_rows_for_nonexistent_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.delete(1).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }

        /// Expect Error when the user still has favorite links
        #[tokio::test]
        async fn fails_while_favorites_reference_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_favorite_tables()
                .with_mock_user(1)
                .with_mock_planet()
                .with_favorite_planet(1, 1)
                .build()
                .await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.delete(1).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
