//! End-to-end action tests against a mock service.
//!
//! The mock server stands in for both the OAuth token endpoint and the SaaS
//! REST API; the environment's service-URL override points the account base
//! URL at it, same as a staging deployment would.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rrs_connector::config::{Environment, OAUTH_AUDIENCE};
use rrs_connector::error::AppError;
use rrs_connector::handlers::{
    enrich_ip_address_handler, enrich_storage_handler, job_status_handler,
    take_snapshot_handler, test_connectivity_handler, volume_offline_handler,
};
use rrs_connector::models::{
    EnrichIpParams, EnrichStorageParams, JobStatusParams, TakeSnapshotParams, VolumeInfo,
    VolumeOfflineParams,
};
use rrs_connector::registry::dispatch;
use rrs_connector::services::get_oauth_token;
use rrs_connector::{ActionReport, Asset};

fn test_asset() -> Asset {
    Asset::new("example.com", "client-id", "client-secret", "acct-1")
}

fn test_env(server: &MockServer) -> Environment {
    Environment {
        oauth_url: format!("{}/oauth/token", server.uri()),
        audience: OAUTH_AUDIENCE.to_string(),
        service_url: Some(format!("{}/rps/v1/account", server.uri())),
        verify_ssl: true,
        timeout: Duration::from_secs(30),
    }
}

/// Mount the token endpoint expecting exactly `expected_calls` requests.
async fn mount_token_endpoint(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-token",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_token_sends_client_credentials_grant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=client-id"))
        .and(body_string_contains("client_secret=client-secret"))
        .and(body_string_contains("audience="))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "test-token"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let token = get_oauth_token(&test_asset(), &test_env(&server))
        .await
        .expect("token fetch should succeed");
    assert_eq!(token, "test-token");
}

#[tokio::test]
async fn get_token_never_caches_across_calls() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 2).await;

    let env = test_env(&server);
    let asset = test_asset();
    let first = get_oauth_token(&asset, &env).await.expect("first call");
    let second = get_oauth_token(&asset, &env).await.expect("second call");
    assert!(!first.is_empty());
    assert_eq!(first, second);
    // expect(2) on the mock verifies a second request actually went out
}

#[tokio::test]
async fn get_token_rejects_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not_a_token": true})))
        .mount(&server)
        .await;

    let err = get_oauth_token(&test_asset(), &test_env(&server))
        .await
        .expect_err("malformed payload must fail");
    assert!(matches!(err, AppError::Authentication(_)));
}

#[tokio::test]
async fn get_token_requires_credentials() {
    let server = MockServer::start().await;
    let asset = Asset::new("example.com", "", "", "acct-1");

    let err = get_oauth_token(&asset, &test_env(&server))
        .await
        .expect_err("empty credentials must fail");
    assert!(matches!(err, AppError::Configuration(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_connectivity_reports_auth_rejection_without_service_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid client"))
        .expect(1)
        .mount(&server)
        .await;

    let failure = test_connectivity_handler(&test_asset(), &test_env(&server))
        .await
        .expect_err("connectivity must fail on 401");
    assert!(failure.message().contains("401"));
    assert!(failure.message().contains("invalid client"));
    assert!(matches!(failure.kind(), AppError::Authentication(_)));
    // only the token request reached the server
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_connectivity_succeeds_when_token_is_issued() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    test_connectivity_handler(&test_asset(), &test_env(&server))
        .await
        .expect("connectivity should succeed");
}

#[tokio::test]
async fn enrich_ip_preserves_server_order_and_reports_success() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/rps/v1/account/acct-1/enrich/ip-address"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_string_contains("10.0.0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"job_id": "j-2", "status": "running"},
            {"job_id": "j-1", "status": "queued"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let params = EnrichIpParams {
        ip_address: "10.0.0.1".to_string(),
    };
    let mut report = ActionReport::default();
    let output = enrich_ip_address_handler(&params, &mut report, &test_asset(), &test_env(&server))
        .await
        .expect("enrichment should succeed");

    assert_eq!(output.jobs.len(), 2);
    assert_eq!(output.jobs[0].job_id, "j-2");
    assert_eq!(output.jobs[1].job_id, "j-1");
    assert_eq!(
        report.message.as_deref(),
        Some("IP address '10.0.0.1' enriched successfully")
    );
    assert!(report.summary.is_some());
}

#[tokio::test]
async fn enrich_storage_maps_volume_records() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/rps/v1/account/acct-1/enrich/storage"))
        .and(query_param("agent_id", "agent-123"))
        .and(query_param("system_id", "sys-456"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"volume_uuid": "u1", "volume_name": "v1", "svm_name": "s1"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let params = EnrichStorageParams {
        agent_id: "agent-123".to_string(),
        system_id: "sys-456".to_string(),
    };
    let mut report = ActionReport::default();
    let output = enrich_storage_handler(&params, &mut report, &test_asset(), &test_env(&server))
        .await
        .expect("enrichment should succeed");

    assert_eq!(
        output.volumes,
        vec![VolumeInfo {
            volume_uuid: "u1".to_string(),
            volume_name: "v1".to_string(),
            svm_name: "s1".to_string(),
        }]
    );
    assert_eq!(
        report.message.as_deref(),
        Some("Storage enriched successfully for agent 'agent-123' and system 'sys-456'")
    );
}

#[tokio::test]
async fn enrich_storage_surfaces_status_and_body_on_rejection() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/rps/v1/account/acct-1/enrich/storage"))
        .respond_with(ResponseTemplate::new(500).set_body_string("volume backend unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let params = EnrichStorageParams {
        agent_id: "agent-123".to_string(),
        system_id: "sys-456".to_string(),
    };
    let mut report = ActionReport::default();
    let failure = enrich_storage_handler(&params, &mut report, &test_asset(), &test_env(&server))
        .await
        .expect_err("rejection must fail the action");

    assert!(failure.message().starts_with("Failed to enrich storage: "));
    assert!(failure.message().contains("500"));
    assert!(failure.message().contains("volume backend unavailable"));
    assert!(matches!(
        failure.kind(),
        AppError::RemoteRejection { status: 500, .. }
    ));
    // summaries are only set on the success path
    assert!(report.summary.is_none());
    assert!(report.message.is_none());
}

#[tokio::test]
async fn enrich_storage_rejects_mismatched_body() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/rps/v1/account/acct-1/enrich/storage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"volumes": "not-a-list"})))
        .mount(&server)
        .await;

    let params = EnrichStorageParams {
        agent_id: "agent-123".to_string(),
        system_id: "sys-456".to_string(),
    };
    let mut report = ActionReport::default();
    let failure = enrich_storage_handler(&params, &mut report, &test_asset(), &test_env(&server))
        .await
        .expect_err("shape mismatch must fail the action");
    assert!(matches!(failure.kind(), AppError::Decode(_)));
}

#[tokio::test]
async fn job_status_leaves_optional_fields_unset() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/rps/v1/account/acct-1/job/status"))
        .and(query_param("job_id", "job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_id": "job-1",
            "status": "success",
            "records": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = JobStatusParams {
        job_id: "job-1".to_string(),
    };
    let mut report = ActionReport::default();
    let output = job_status_handler(&params, &mut report, &test_asset(), &test_env(&server))
        .await
        .expect("status check should succeed");

    assert_eq!(output.status, "success");
    assert!(output.records.is_empty());
    assert!(output.source.is_none());
    assert!(output.message.is_none());
    assert_eq!(
        report.message.as_deref(),
        Some("Job 'job-1' status retrieved successfully: success")
    );
}

#[tokio::test]
async fn read_only_action_issues_independent_requests() {
    let server = MockServer::start().await;
    // a fresh token and a fresh service call per invocation
    mount_token_endpoint(&server, 2).await;
    Mock::given(method("GET"))
        .and(path("/rps/v1/account/acct-1/job/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_id": "job-1",
            "status": "running",
            "records": []
        })))
        .expect(2)
        .mount(&server)
        .await;

    let params = JobStatusParams {
        job_id: "job-1".to_string(),
    };
    let asset = test_asset();
    let env = test_env(&server);
    let mut report = ActionReport::default();
    let first = job_status_handler(&params, &mut report, &asset, &env)
        .await
        .expect("first call");
    let second = job_status_handler(&params, &mut report, &asset, &env)
        .await
        .expect("second call");
    assert_eq!(first, second);
}

#[tokio::test]
async fn take_snapshot_passes_record_through() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/rps/v1/account/acct-1/storage/take-snapshot"))
        .and(body_string_contains("vol-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snapshot_id": "snap-1",
            "state": "created"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = TakeSnapshotParams {
        volume_id: "vol-123".to_string(),
        agent_id: "agent-123".to_string(),
        system_id: "sys-456".to_string(),
    };
    let mut report = ActionReport::default();
    let output = take_snapshot_handler(&params, &mut report, &test_asset(), &test_env(&server))
        .await
        .expect("snapshot should succeed");

    assert_eq!(output.record["snapshot_id"], json!("snap-1"));
    assert_eq!(output.record["state"], json!("created"));
    assert_eq!(
        report.message.as_deref(),
        Some("Snapshot for volume 'vol-123' taken successfully")
    );
}

#[tokio::test]
async fn volume_offline_surfaces_job_id() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/rps/v1/account/acct-1/storage/take-volume-offline"))
        .and(body_string_contains("vol-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_id": "off-1",
            "state": "started"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = VolumeOfflineParams {
        volume_id: "vol-123".to_string(),
        agent_id: "agent-123".to_string(),
        system_id: "sys-456".to_string(),
    };
    let mut report = ActionReport::default();
    let output = volume_offline_handler(&params, &mut report, &test_asset(), &test_env(&server))
        .await
        .expect("offline request should succeed");

    assert_eq!(output.job_id.as_deref(), Some("off-1"));
    assert_eq!(output.record["state"], json!("started"));
    assert_eq!(
        report.message.as_deref(),
        Some("Volume 'vol-123' taken offline successfully")
    );
}

#[tokio::test]
async fn dispatch_runs_action_by_identifier() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/rps/v1/account/acct-1/enrich/storage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let mut report = ActionReport::default();
    let output = dispatch(
        "enrich_storage",
        json!({"agent_id": "agent-123", "system_id": "sys-456"}),
        &mut report,
        &test_asset(),
        &test_env(&server),
    )
    .await
    .expect("dispatch should succeed");
    assert_eq!(output, json!({"volumes": []}));
}

#[tokio::test]
async fn dispatch_rejects_unknown_identifier_and_bad_params() {
    let server = MockServer::start().await;
    let asset = test_asset();
    let env = test_env(&server);

    let mut report = ActionReport::default();
    let failure = dispatch("detonate_file", json!({}), &mut report, &asset, &env)
        .await
        .expect_err("unknown action must fail");
    assert!(failure.message().contains("unknown action"));

    let failure = dispatch("enrich_ip_address", json!({}), &mut report, &asset, &env)
        .await
        .expect_err("missing params must fail");
    assert!(failure.message().contains("invalid parameters"));
    assert!(matches!(failure.kind(), AppError::Configuration(_)));
    // neither failure reached the network
    assert!(server.received_requests().await.unwrap().is_empty());
}
