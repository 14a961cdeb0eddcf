//! Two-phase video submission.
//!
//! A submission asks for an upload destination, `PUT`s the raw file there and then creates the
//! video record pointing at the returned object path. The first failure aborts the whole
//! submission; nothing is retried.

use chrono::NaiveDate;

use crate::{
    client::api::{self, ApiError},
    model::video::{CreateVideoDto, RequestUploadUrlDto, UploadUrlDto, VideoDto, VideoSource},
};

/// Video form fields other than the file
#[derive(Clone, Debug, PartialEq)]
pub struct VideoForm {
    pub player_id: i32,
    pub source: VideoSource,
    pub match_date: NaiveDate,
    pub opponent: String,
    pub competition: String,
    pub minutes_played: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[allow(async_fn_in_trait)]
pub trait UploadTransport {
    async fn request_upload_url(
        &self,
        request: &RequestUploadUrlDto,
    ) -> Result<UploadUrlDto, ApiError>;

    async fn put_file(
        &self,
        upload_url: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError>;

    async fn create_video(&self, video: &CreateVideoDto) -> Result<VideoDto, ApiError>;
}

/// Sends the submission to the real API
pub struct HttpUploadTransport;

impl UploadTransport for HttpUploadTransport {
    async fn request_upload_url(
        &self,
        request: &RequestUploadUrlDto,
    ) -> Result<UploadUrlDto, ApiError> {
        api::post("/api/uploads/request-url", request).await
    }

    async fn put_file(
        &self,
        upload_url: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        api::put_bytes(upload_url, content_type, bytes).await
    }

    async fn create_video(&self, video: &CreateVideoDto) -> Result<VideoDto, ApiError> {
        api::post("/api/videos", video).await
    }
}

pub async fn submit_video<T: UploadTransport>(
    transport: &T,
    form: VideoForm,
    file: SelectedFile,
) -> Result<VideoDto, ApiError> {
    let destination = transport
        .request_upload_url(&RequestUploadUrlDto {
            file_name: file.name,
            content_type: file.content_type.clone(),
            size_bytes: file.bytes.len() as i64,
        })
        .await?;

    transport
        .put_file(&destination.upload_url, &file.content_type, file.bytes)
        .await?;

    transport
        .create_video(&CreateVideoDto {
            player_id: form.player_id,
            object_path: destination.object_path,
            source: form.source,
            match_date: form.match_date,
            opponent: form.opponent,
            competition: form.competition,
            minutes_played: form.minutes_played,
        })
        .await
}
