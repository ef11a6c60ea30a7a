use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use tracing::{debug, error, info, warn};

use super::{MaterialService, access};
use crate::errors::{CourseError, Result};
use crate::middlewares::ResolveIdentity;
use crate::models::materials::entities::FileMaterial;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn handle_download(
    service: &MaterialService,
    request: &HttpRequest,
    name: String,
) -> ActixResult<HttpResponse> {
    if name.is_empty() {
        return Ok(HttpResponse::BadRequest().finish());
    }

    let storage = service.get_storage(request);

    let material = match lookup_material(storage.as_ref(), &name).await {
        Ok(Some(m)) => m,
        Ok(None) => {
            debug!("Material not found: {}", name);
            return Ok(HttpResponse::NotFound().finish());
        }
        Err(e) => {
            error!("Material lookup failed for {}: {}", name, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DatabaseError,
                    "Material lookup failed",
                )),
            );
        }
    };

    let identity = ResolveIdentity::extract_identity(request);
    match access::has_access(storage.as_ref(), identity.as_ref(), &material).await {
        Ok(true) => {}
        Ok(false) => {
            info!(
                "Download of {} denied for {} (requires {})",
                material.name,
                identity
                    .as_ref()
                    .map(|i| i.display_name())
                    .unwrap_or_else(|| "anonymous".to_string()),
                material.access_control
            );
            return Ok(HttpResponse::Forbidden().finish());
        }
        Err(e) => {
            error!("Access check failed for {}: {}", material.name, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DatabaseError,
                    "Access check failed",
                )),
            );
        }
    }

    let media = service.get_media(request);
    let bytes = match media.read(&material.file).await {
        Ok(bytes) => bytes,
        Err(CourseError::NotFound(msg)) => {
            warn!("Stored file for {} is missing: {}", material.name, msg);
            return Ok(HttpResponse::NotFound().finish());
        }
        Err(e) => {
            error!("Failed to read stored file for {}: {}", material.name, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FileReadError,
                    "File read failed",
                )),
            );
        }
    };

    let file_name = material.file_name();
    debug!("Serving {} ({} bytes)", file_name, bytes.len());

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "application/octet-stream"))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={file_name}"),
        ))
        .body(bytes))
}

/// 先按资料名精确查找；找不到时把路径段视为下载文件名（资料名 + 扩展名）
async fn lookup_material(storage: &dyn Storage, name: &str) -> Result<Option<FileMaterial>> {
    if let Some(material) = storage.find_file_material_by_name(name).await? {
        return Ok(Some(material));
    }

    let Some((stem, _)) = name.rsplit_once('.') else {
        return Ok(None);
    };
    if stem.is_empty() {
        return Ok(None);
    }

    Ok(storage
        .find_file_material_by_name(stem)
        .await?
        .filter(|material| material.file_name() == name))
}
