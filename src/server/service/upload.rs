//! Two-phase upload destinations.
//!
//! Phase one issues a single-use upload URL backed by an `upload_slot` row. Phase two streams the
//! request body straight to disk under the configured upload root. The slot is claimed before
//! any bytes are written so a second `PUT` is refused while the first is still streaming; a
//! failed write releases the claim again.

use std::path::PathBuf;

use axum::body::Bytes;
use chrono::Utc;
use dioxus_logger::tracing;
use futures::{Stream, StreamExt};
use sea_orm::DatabaseConnection;
use tokio::{fs, io::AsyncWriteExt};

use crate::{
    model::video::{is_video_content_type, RequestUploadUrlDto, UploadUrlDto},
    server::{
        data::upload::{NewUploadSlot, UploadSlotRepository},
        error::{upload::UploadError, Error},
        model::app::UploadSettings,
        util::random::url_token,
    },
};

pub struct UploadService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a UploadSettings,
}

impl<'a> UploadService<'a> {
    pub fn new(db: &'a DatabaseConnection, settings: &'a UploadSettings) -> Self {
        Self { db, settings }
    }

    /// Issues an upload destination for one file
    pub async fn request_url(
        &self,
        user_id: i32,
        request: &RequestUploadUrlDto,
    ) -> Result<UploadUrlDto, Error> {
        if request.file_name.trim().is_empty() {
            return Err(Error::Validation("File name is required".to_string()));
        }
        if !is_video_content_type(&request.content_type) {
            return Err(UploadError::UnsupportedContentType(request.content_type.clone()).into());
        }
        if !(1..=self.settings.max_bytes).contains(&request.size_bytes) {
            return Err(UploadError::InvalidSize {
                size: request.size_bytes,
                max: self.settings.max_bytes,
            }
            .into());
        }

        let token = url_token(32);
        let object_path = format!(
            "videos/{}/{}",
            url_token(12),
            sanitize_file_name(&request.file_name)
        );
        let expires_at = Utc::now().naive_utc() + self.settings.slot_ttl;

        UploadSlotRepository::new(self.db)
            .create(NewUploadSlot {
                token: &token,
                object_path: &object_path,
                user_id,
                file_name: request.file_name.trim(),
                content_type: request.content_type.trim(),
                size_bytes: request.size_bytes,
                expires_at,
            })
            .await?;

        tracing::debug!(user_id = %user_id, "Issued upload slot for {}", object_path);

        Ok(UploadUrlDto {
            upload_url: format!("/api/uploads/{}", token),
            object_path,
            expires_at,
        })
    }

    /// Streams an upload body into the slot identified by `token`
    ///
    /// # Returns
    /// - `Ok(object_path)` - File stored
    /// - `Err(UploadError::SlotNotFound)` - Unknown token or a slot owned by another user
    /// - `Err(UploadError::SlotExpired)` - Destination expired before the upload started, or was
    ///   purged before the body finished
    /// - `Err(UploadError::AlreadyUploaded)` - The slot already received a file
    /// - `Err(UploadError::PayloadTooLarge)` - Body exceeded the declared size
    pub async fn receive<S, E>(&self, user_id: i32, token: &str, body: S) -> Result<String, Error>
    where
        S: Stream<Item = Result<Bytes, E>> + Unpin,
        E: std::fmt::Display,
    {
        let repository = UploadSlotRepository::new(self.db);

        let slot = match repository.find_by_token(token).await? {
            Some(slot) if slot.user_id == user_id => slot,
            _ => return Err(UploadError::SlotNotFound.into()),
        };

        if slot.uploaded_at.is_some() {
            return Err(UploadError::AlreadyUploaded.into());
        }

        let now = Utc::now().naive_utc();
        if slot.expires_at < now {
            return Err(UploadError::SlotExpired.into());
        }

        if !repository.claim(slot.id, now).await? {
            return Err(UploadError::AlreadyUploaded.into());
        }

        let destination = self.path_for(&slot.object_path);

        let written = match write_limited(&destination, body, slot.size_bytes).await {
            Ok(written) => written,
            Err(e) => {
                let _ = fs::remove_file(&destination).await;
                repository.release(slot.id).await?;

                return Err(e);
            }
        };

        let still_claimed = repository
            .find_by_token(token)
            .await?
            .is_some_and(|current| current.id == slot.id && current.uploaded_at.is_some());
        if !still_claimed {
            tracing::warn!(
                user_id = %user_id,
                "Upload slot for {} was purged while receiving",
                slot.object_path
            );
            let _ = fs::remove_file(&destination).await;

            return Err(UploadError::SlotExpired.into());
        }

        tracing::debug!(
            user_id = %user_id,
            "Stored {} bytes at {}",
            written,
            slot.object_path
        );

        Ok(slot.object_path)
    }

    /// Removes slots that will never become a video, along with any stored file
    ///
    /// Unclaimed slots go once their destination expires. Claimed slots get one more TTL
    /// counted from the claim, so an upload in progress or awaiting its video keeps its slot.
    ///
    /// Returns the amount of slots removed.
    pub async fn purge_stale(&self) -> Result<u64, Error> {
        let repository = UploadSlotRepository::new(self.db);

        let now = Utc::now().naive_utc();
        let uploaded_before = now - self.settings.slot_ttl;

        let stale = repository.get_stale(now, uploaded_before).await?;
        let mut removed = 0;

        for slot in stale {
            if !repository
                .delete_if_stale(slot.id, now, uploaded_before)
                .await?
            {
                continue;
            }
            removed += 1;

            if slot.uploaded_at.is_some() {
                if let Err(e) = fs::remove_file(self.path_for(&slot.object_path)).await {
                    tracing::warn!("Failed to remove orphaned upload {}: {}", slot.object_path, e);
                }
            }
        }

        Ok(removed)
    }

    pub fn path_for(&self, object_path: &str) -> PathBuf {
        self.settings.root.join(object_path)
    }
}

async fn write_limited<S, E>(destination: &PathBuf, mut body: S, limit: i64) -> Result<i64, Error>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: std::fmt::Display,
{
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut file = fs::File::create(destination).await?;
    let mut written: i64 = 0;

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| std::io::Error::other(e.to_string()))?;

        written += chunk.len() as i64;
        if written > limit {
            return Err(UploadError::PayloadTooLarge {
                received: written,
                declared: limit,
            }
            .into());
        }

        file.write_all(&chunk).await?;
    }

    file.flush().await?;

    Ok(written)
}

/// Keeps the final path component with anything outside `[A-Za-z0-9._-]` replaced
pub fn sanitize_file_name(file_name: &str) -> String {
    let name = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    match cleaned.trim_matches('.') {
        "" => "upload".to_string(),
        cleaned => cleaned.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Bytes;
    use futures::stream;

    use crate::model::video::RequestUploadUrlDto;

    pub fn request(size_bytes: i64) -> RequestUploadUrlDto {
        RequestUploadUrlDto {
            file_name: "match highlights.mp4".to_string(),
            content_type: "video/mp4".to_string(),
            size_bytes,
        }
    }

    pub fn body(
        chunks: &[&'static [u8]],
    ) -> stream::Iter<std::vec::IntoIter<Result<Bytes, std::io::Error>>> {
        stream::iter(
            chunks
                .iter()
                .map(|chunk| Ok(Bytes::from_static(chunk)))
                .collect::<Vec<_>>(),
        )
    }

    /// Token portion of an issued upload URL
    pub fn token(upload_url: &str) -> &str {
        upload_url.trim_start_matches("/api/uploads/")
    }

    mod sanitize_file_name {
        use crate::server::service::upload::sanitize_file_name;

        #[test]
        fn strips_directories_and_unsafe_characters() {
            assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
            assert_eq!(sanitize_file_name("C:\\clips\\final cut.mov"), "final_cut.mov");
            assert_eq!(sanitize_file_name("..."), "upload");
        }
    }

    mod request_url {
        use pitchpass_test_utils::prelude::*;

        use crate::server::{
            error::{upload::UploadError, Error},
            model::app::AppState,
            service::upload::{tests::request, UploadService},
        };

        /// Expect a single-use URL and a sanitized object path
        #[tokio::test]
        async fn issues_upload_destination() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::UploadSlot)?;
            let state: AppState = test.state();

            let dto = UploadService::new(&state.db, &state.uploads)
                .request_url(1, &request(1024))
                .await
                .unwrap();

            assert!(dto.upload_url.starts_with("/api/uploads/"));
            assert!(dto.object_path.starts_with("videos/"));
            assert!(dto.object_path.ends_with("/match_highlights.mp4"));

            Ok(())
        }

        /// Expect non-video files to be refused
        #[tokio::test]
        async fn rejects_non_video_content() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::UploadSlot)?;
            let state: AppState = test.state();

            let mut pdf = request(1024);
            pdf.content_type = "application/pdf".to_string();
            let result = UploadService::new(&state.db, &state.uploads)
                .request_url(1, &pdf)
                .await;

            assert!(matches!(
                result,
                Err(Error::UploadError(UploadError::UnsupportedContentType(_)))
            ));

            Ok(())
        }

        /// Expect empty and oversized declarations to be refused
        #[tokio::test]
        async fn rejects_size_outside_limit() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::UploadSlot)?;
            let mut state: AppState = test.state();
            state.uploads.max_bytes = 100;

            let service = UploadService::new(&state.db, &state.uploads);

            for size in [0, 101] {
                let result = service.request_url(1, &request(size)).await;
                assert!(matches!(
                    result,
                    Err(Error::UploadError(UploadError::InvalidSize { .. }))
                ));
            }

            Ok(())
        }
    }

    mod receive {
        use axum::body::Bytes;
        use chrono::{Duration, Utc};
        use futures::{stream, StreamExt};
        use pitchpass_test_utils::prelude::*;
        use sea_orm::{sea_query::Expr, ColumnTrait, EntityTrait, QueryFilter};

        use crate::server::{
            data::upload::UploadSlotRepository,
            error::{upload::UploadError, Error},
            model::app::AppState,
            service::upload::{
                tests::{body, request, token},
                UploadService,
            },
        };

        /// Expect the body to land at the object path
        #[tokio::test]
        async fn stores_file_at_object_path() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::UploadSlot)?;
            let state: AppState = test.state();
            let service = UploadService::new(&state.db, &state.uploads);

            let dto = service.request_url(1, &request(6)).await.unwrap();
            let stored = service
                .receive(1, token(&dto.upload_url), body(&[b"abc", b"def"]))
                .await
                .unwrap();

            assert_eq!(stored, dto.object_path);
            let contents = tokio::fs::read(service.path_for(&dto.object_path)).await?;
            assert_eq!(contents, b"abcdef");

            Ok(())
        }

        /// Expect a second upload to the same destination to conflict
        #[tokio::test]
        async fn refuses_second_upload() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::UploadSlot)?;
            let state: AppState = test.state();
            let service = UploadService::new(&state.db, &state.uploads);

            let dto = service.request_url(1, &request(3)).await.unwrap();
            service
                .receive(1, token(&dto.upload_url), body(&[b"abc"]))
                .await
                .unwrap();

            let result = service
                .receive(1, token(&dto.upload_url), body(&[b"abc"]))
                .await;

            assert!(matches!(
                result,
                Err(Error::UploadError(UploadError::AlreadyUploaded))
            ));

            Ok(())
        }

        /// Expect an expired destination to be gone
        #[tokio::test]
        async fn refuses_expired_slot() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!(entity::prelude::UploadSlot)?;
            let expired = Utc::now().naive_utc() - Duration::seconds(1);
            test.upload().insert_slot(1, "expired-token", expired).await?;
            let state: AppState = test.state();

            let result = UploadService::new(&state.db, &state.uploads)
                .receive(1, "expired-token", body(&[b"abc"]))
                .await;

            assert!(matches!(
                result,
                Err(Error::UploadError(UploadError::SlotExpired))
            ));

            Ok(())
        }

        /// Expect an oversized body to be refused and the slot to stay usable
        #[tokio::test]
        async fn refuses_oversized_body_and_releases_slot() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::UploadSlot)?;
            let state: AppState = test.state();
            let service = UploadService::new(&state.db, &state.uploads);

            let dto = service.request_url(1, &request(4)).await.unwrap();
            let result = service
                .receive(1, token(&dto.upload_url), body(&[b"abc", b"def"]))
                .await;

            assert!(matches!(
                result,
                Err(Error::UploadError(UploadError::PayloadTooLarge { .. }))
            ));
            assert!(!service.path_for(&dto.object_path).exists());

            let retried = service
                .receive(1, token(&dto.upload_url), body(&[b"abcd"]))
                .await;
            assert!(retried.is_ok());

            Ok(())
        }

        /// Expect cleanup running mid-stream to leave a claimed slot usable for its video
        #[tokio::test]
        async fn survives_cleanup_during_stream() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::UploadSlot)?;
            let state: AppState = test.state();
            let service = UploadService::new(&state.db, &state.uploads);

            let dto = service.request_url(1, &request(6)).await.unwrap();
            let slot_token = token(&dto.upload_url).to_string();

            let db = state.db.clone();
            let uploads = state.uploads.clone();
            let expire_then_purge = {
                let slot_token = slot_token.clone();
                async move {
                    entity::prelude::UploadSlot::update_many()
                        .col_expr(
                            entity::upload_slot::Column::ExpiresAt,
                            Expr::value(Utc::now().naive_utc() - Duration::seconds(1)),
                        )
                        .filter(entity::upload_slot::Column::Token.eq(slot_token))
                        .exec(&db)
                        .await
                        .unwrap();

                    let purged = UploadService::new(&db, &uploads).purge_stale().await.unwrap();
                    assert_eq!(purged, 0);

                    Ok::<_, std::io::Error>(Bytes::from_static(b"def"))
                }
            };
            let body = body(&[b"abc"])
                .chain(stream::once(expire_then_purge))
                .boxed_local();

            let stored = service.receive(1, &slot_token, body).await.unwrap();

            assert!(service.path_for(&stored).exists());
            let repository = UploadSlotRepository::new(&state.db);
            let slot = repository.find_by_token(&slot_token).await?.unwrap();
            assert!(repository.consume(slot.id).await?);

            Ok(())
        }

        /// Expect an upload whose slot vanished mid-stream to fail and leave no file behind
        #[tokio::test]
        async fn fails_when_slot_removed_during_stream() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::UploadSlot)?;
            let state: AppState = test.state();
            let service = UploadService::new(&state.db, &state.uploads);

            let dto = service.request_url(1, &request(6)).await.unwrap();
            let slot_token = token(&dto.upload_url).to_string();

            let db = state.db.clone();
            let remove_slot = {
                let slot_token = slot_token.clone();
                async move {
                    entity::prelude::UploadSlot::delete_many()
                        .filter(entity::upload_slot::Column::Token.eq(slot_token))
                        .exec(&db)
                        .await
                        .unwrap();

                    Ok::<_, std::io::Error>(Bytes::from_static(b"def"))
                }
            };
            let body = body(&[b"abc"])
                .chain(stream::once(remove_slot))
                .boxed_local();

            let result = service.receive(1, &slot_token, body).await;

            assert!(matches!(
                result,
                Err(Error::UploadError(UploadError::SlotExpired))
            ));
            assert!(!service.path_for(&dto.object_path).exists());

            Ok(())
        }

        /// Expect another user's token to look like an unknown one
        #[tokio::test]
        async fn hides_slots_of_other_users() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::UploadSlot)?;
            let state: AppState = test.state();
            let service = UploadService::new(&state.db, &state.uploads);

            let dto = service.request_url(1, &request(3)).await.unwrap();
            let result = service
                .receive(2, token(&dto.upload_url), body(&[b"abc"]))
                .await;

            assert!(matches!(
                result,
                Err(Error::UploadError(UploadError::SlotNotFound))
            ));

            Ok(())
        }
    }
}
