pub mod access;
pub mod download;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::storage::{MediaStore, Storage};

pub struct MaterialService {
    storage: Option<Arc<dyn Storage>>,
    media: Option<MediaStore>,
}

impl MaterialService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            media: None,
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 未注册资料目录时使用配置中的根目录
    pub(crate) fn get_media(&self, request: &HttpRequest) -> MediaStore {
        if let Some(media) = &self.media {
            media.clone()
        } else {
            request
                .app_data::<web::Data<MediaStore>>()
                .map(|media| media.get_ref().clone())
                .unwrap_or_else(MediaStore::from_config)
        }
    }

    // Handle material download
    pub async fn handle_download(
        &self,
        request: &HttpRequest,
        name: String,
    ) -> ActixResult<HttpResponse> {
        download::handle_download(self, request, name).await
    }
}
