use axum::{extract::State, http::StatusCode, response::IntoResponse};
use pitchpass::{
    model::role::Role,
    server::controller::{
        admin::list_audit_logs, embassy::list_verifications, federation::get_nationality_map,
        scouting::list_inquiries,
    },
};
use pitchpass_test_utils::prelude::*;

use crate::util::{sign_in, status_of};

#[tokio::test]
/// Expect 401 from a protected endpoint without a session
async fn protected_endpoint_requires_session() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let result = list_verifications(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::UNAUTHORIZED
    );

    Ok(())
}

#[tokio::test]
/// Expect 403 when a club user calls embassy, admin, scouting and federation endpoints
async fn team_role_is_kept_out_of_other_tables() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let coach = test.user().insert_user("coach", "team").await?;
    sign_in(&test, coach.id, Role::Team).await;

    let statuses = [
        status_of(list_verifications(State(test.state()), test.session.clone()).await),
        status_of(list_audit_logs(State(test.state()), test.session.clone()).await),
        status_of(list_inquiries(State(test.state()), test.session.clone()).await),
        status_of(get_nationality_map(State(test.state()), test.session.clone()).await),
    ];

    assert!(statuses.iter().all(|status| *status == StatusCode::FORBIDDEN));

    Ok(())
}

#[tokio::test]
/// Expect each role to reach its own listing
async fn roles_reach_their_own_endpoints() -> Result<(), TestError> {
    let mut test = test_setup_with_all_tables!()?;
    let consul = test.user().insert_user("consul", "embassy").await?;
    sign_in(&test, consul.id, Role::Embassy).await;

    let result = list_verifications(State(test.state()), test.session.clone()).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let admin = test.user().insert_user("root", "admin").await?;
    sign_in(&test, admin.id, Role::Admin).await;

    let result = list_audit_logs(State(test.state()), test.session.clone()).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}
