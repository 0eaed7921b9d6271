use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user built from [`factory::mock_user_model`]; `n` keeps the email unique.
    pub async fn insert_mock_user(&self, n: i32) -> Result<UserModel, TestError> {
        let user = factory::mock_user_model(n);

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                name: ActiveValue::Set(user.name),
                email: ActiveValue::Set(user.email),
                password: ActiveValue::Set(user.password),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
