use super::SeaOrmStorage;
use crate::entity::persons::ActiveModel as PersonActiveModel;
use crate::entity::prelude::{Persons, Users};
use crate::entity::users::ActiveModel;
use crate::errors::{CourseError, Result};
use crate::models::{
    persons::{entities::Person, requests::CreatePersonRequest},
    users::{
        entities::{Identity, User},
        requests::CreateUserRequest,
    },
};
use crate::utils::validate::{validate_email, validate_url};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        if req.username.trim().is_empty() {
            return Err(CourseError::validation("Username must not be empty"));
        }

        let model = ActiveModel {
            username: Set(req.username),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            is_superuser: Set(req.is_superuser),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseError::from_db("创建用户失败", e))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询用户失败", e))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 删除用户
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseError::from_db("删除用户失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建人员档案
    pub async fn create_person_impl(&self, req: CreatePersonRequest) -> Result<Person> {
        validate_email(&req.academic_email).map_err(CourseError::validation)?;
        for url in [&req.github_url, &req.linkedin_url].into_iter().flatten() {
            validate_url(url).map_err(CourseError::validation)?;
        }

        let model = PersonActiveModel {
            user_id: Set(req.user_id),
            employee_id: Set(req.employee_id),
            academic_email: Set(req.academic_email),
            github_url: Set(req.github_url),
            linkedin_url: Set(req.linkedin_url),
            image: Set(req.image),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseError::from_db("创建人员档案失败", e))?;

        Ok(result.into_person())
    }

    /// 通过用户 ID 获取人员档案
    pub async fn get_person_by_user_id_impl(&self, user_id: i64) -> Result<Option<Person>> {
        let result = Persons::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询人员档案失败", e))?;

        Ok(result.map(|m| m.into_person()))
    }

    /// 删除人员档案
    pub async fn delete_person_impl(&self, user_id: i64) -> Result<bool> {
        let result = Persons::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseError::from_db("删除人员档案失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 获取用户及其人员档案
    pub async fn get_identity_impl(&self, user_id: i64) -> Result<Option<Identity>> {
        let result = Users::find_by_id(user_id)
            .find_also_related(Persons)
            .one(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询用户身份失败", e))?;

        Ok(result.map(|(user, person)| Identity {
            user: user.into_user(),
            person: person.map(|p| p.into_person()),
        }))
    }
}
