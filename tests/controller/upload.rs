use axum::{
    body::Body,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use pitchpass::{
    model::{
        role::Role,
        video::{CreateVideoDto, RequestUploadUrlDto, UploadUrlDto, VideoDto, VideoSource},
    },
    server::controller::{
        upload::{put_upload, request_upload_url},
        video::create_video,
    },
};
use pitchpass_test_utils::prelude::*;

use crate::util::{json_body, sign_in, status_of};

const CLIP: &[u8] = b"not really an mp4 but the server never looks";

fn upload_request() -> Json<RequestUploadUrlDto> {
    Json(RequestUploadUrlDto {
        file_name: "derby.mp4".to_string(),
        content_type: "video/mp4".to_string(),
        size_bytes: CLIP.len() as i64,
    })
}

fn token(destination: &UploadUrlDto) -> String {
    destination
        .upload_url
        .trim_start_matches("/api/uploads/")
        .to_string()
}

#[tokio::test]
/// Expect the issued destination to accept the file once and the path to become a video
async fn two_phase_upload_creates_video() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let coach = test.user().insert_user("coach", "team").await?;
    let player = test.player().insert_player("Kofi Mensah", "Ghana").await?;
    sign_in(&test, coach.id, Role::Team).await;

    let result = request_upload_url(State(test.state()), test.session.clone(), upload_request()).await;
    assert!(result.is_ok());
    let destination: UploadUrlDto = json_body(result.unwrap().into_response()).await;

    let stored = put_upload(
        State(test.state()),
        test.session.clone(),
        Path(token(&destination)),
        Body::from(CLIP),
    )
    .await;
    assert_eq!(status_of(stored), StatusCode::NO_CONTENT);

    let result = create_video(
        State(test.state()),
        test.session.clone(),
        Json(CreateVideoDto {
            player_id: player.id,
            object_path: destination.object_path.clone(),
            source: VideoSource::Manual,
            match_date: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
            opponent: "Hearts of Oak".to_string(),
            competition: "Premier League".to_string(),
            minutes_played: 90,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let video: VideoDto = json_body(resp).await;
    assert_eq!(video.player_id, player.id);
    assert!(!video.processed);

    Ok(())
}

#[tokio::test]
/// Expect 409 when the same destination receives a second file
async fn second_upload_conflicts() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let coach = test.user().insert_user("coach", "team").await?;
    sign_in(&test, coach.id, Role::Team).await;

    let result = request_upload_url(State(test.state()), test.session.clone(), upload_request()).await;
    let destination: UploadUrlDto = json_body(result.unwrap().into_response()).await;

    let first = put_upload(
        State(test.state()),
        test.session.clone(),
        Path(token(&destination)),
        Body::from(CLIP),
    )
    .await;
    assert_eq!(status_of(first), StatusCode::NO_CONTENT);

    let second = put_upload(
        State(test.state()),
        test.session.clone(),
        Path(token(&destination)),
        Body::from(CLIP),
    )
    .await;
    assert_eq!(status_of(second), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 413 when the body is larger than the declared size
async fn oversized_body_rejected() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let coach = test.user().insert_user("coach", "team").await?;
    sign_in(&test, coach.id, Role::Team).await;

    let result = request_upload_url(State(test.state()), test.session.clone(), upload_request()).await;
    let destination: UploadUrlDto = json_body(result.unwrap().into_response()).await;

    let mut oversized = CLIP.to_vec();
    oversized.extend_from_slice(b"trailing bytes");

    let stored = put_upload(
        State(test.state()),
        test.session.clone(),
        Path(token(&destination)),
        Body::from(oversized),
    )
    .await;
    assert_eq!(status_of(stored), StatusCode::PAYLOAD_TOO_LARGE);

    Ok(())
}

#[tokio::test]
/// Expect 404 for a token issued to another user
async fn foreign_destination_not_found() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let owner = test.user().insert_user("coach", "team").await?;
    let intruder = test.user().insert_user("rival", "team").await?;
    sign_in(&test, owner.id, Role::Team).await;

    let result = request_upload_url(State(test.state()), test.session.clone(), upload_request()).await;
    let destination: UploadUrlDto = json_body(result.unwrap().into_response()).await;

    sign_in(&test, intruder.id, Role::Team).await;
    let stored = put_upload(
        State(test.state()),
        test.session.clone(),
        Path(token(&destination)),
        Body::from(CLIP),
    )
    .await;
    assert_eq!(status_of(stored), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect scouts to be refused upload destinations
async fn scouts_cannot_upload() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let scout = test.user().insert_user("scout", "scout").await?;
    sign_in(&test, scout.id, Role::Scout).await;

    let result = request_upload_url(State(test.state()), test.session.clone(), upload_request()).await;

    assert_eq!(status_of(result), StatusCode::FORBIDDEN);

    Ok(())
}
