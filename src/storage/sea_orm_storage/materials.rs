use super::SeaOrmStorage;
use crate::entity::file_materials::{ActiveModel, Column, Entity as FileMaterials};
use crate::entity::url_materials::{
    ActiveModel as UrlActiveModel, Column as UrlColumn, Entity as UrlMaterials,
};
use crate::errors::{CourseError, Result};
use crate::models::materials::{
    entities::{FileMaterial, UrlMaterial},
    requests::{CreateFileMaterialRequest, CreateUrlMaterialRequest},
};
use crate::utils::validate::{validate_material_name, validate_url};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建文件资料
    pub async fn create_file_material_impl(
        &self,
        req: CreateFileMaterialRequest,
    ) -> Result<FileMaterial> {
        validate_material_name(&req.name).map_err(CourseError::validation)?;
        if req.file.trim().is_empty() {
            return Err(CourseError::validation("Material file path must not be empty"));
        }

        let model = ActiveModel {
            name: Set(req.name),
            title: Set(req.title),
            description: Set(req.description),
            file: Set(req.file),
            semester_id: Set(req.semester_id),
            access_control: Set(req.access_control.level()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseError::from_db("创建文件资料失败", e))?;

        Ok(result.into_file_material())
    }

    /// 通过 ID 获取文件资料
    pub async fn get_file_material_by_id_impl(&self, id: i64) -> Result<Option<FileMaterial>> {
        let result = FileMaterials::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询文件资料失败", e))?;

        Ok(result.map(|m| m.into_file_material()))
    }

    /// 通过名称获取文件资料
    pub async fn find_file_material_by_name_impl(
        &self,
        name: &str,
    ) -> Result<Option<FileMaterial>> {
        let result = FileMaterials::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询文件资料失败", e))?;

        Ok(result.map(|m| m.into_file_material()))
    }

    /// 删除文件资料
    pub async fn delete_file_material_impl(&self, id: i64) -> Result<bool> {
        let result = FileMaterials::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseError::from_db("删除文件资料失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建链接资料
    pub async fn create_url_material_impl(
        &self,
        req: CreateUrlMaterialRequest,
    ) -> Result<UrlMaterial> {
        validate_material_name(&req.name).map_err(CourseError::validation)?;
        validate_url(&req.url).map_err(CourseError::validation)?;

        let model = UrlActiveModel {
            name: Set(req.name),
            title: Set(req.title),
            description: Set(req.description),
            url: Set(req.url),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseError::from_db("创建链接资料失败", e))?;

        Ok(result.into_url_material())
    }

    /// 通过名称获取链接资料
    pub async fn find_url_material_by_name_impl(&self, name: &str) -> Result<Option<UrlMaterial>> {
        let result = UrlMaterials::find()
            .filter(UrlColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询链接资料失败", e))?;

        Ok(result.map(|m| m.into_url_material()))
    }

    /// 删除链接资料
    pub async fn delete_url_material_impl(&self, id: i64) -> Result<bool> {
        let result = UrlMaterials::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseError::from_db("删除链接资料失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
