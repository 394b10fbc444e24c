use super::*;
use actix_web::{http::StatusCode, test};
use common::UPDATE_FAILED;
use sea_orm::{MockDatabase, MockExecResult};

fn budi(id_user: UserID) -> UpdateUserRequest {
    UpdateUserRequest {
        id_user,
        nama: "Budi".to_string(),
        email: "b@x.com".to_string(),
        no_handphone: "0812".to_string(),
        alamat: "Jl. B".to_string(),
    }
}

#[actix_web::test]
async fn update_fails() {
    let db = MockDatabase::new(sea_orm::DatabaseBackend::Postgres)
        .append_exec_errors([sea_orm::error::DbErr::Exec(
            sea_orm::error::RuntimeErr::Internal("test".to_string()),
        )])
        .into_connection();

    let res = update_user(&db, &budi(2)).await;

    assert!(matches!(
        res,
        Err(ApiError::Database {
            op: OperationKind::Update,
            ..
        })
    ));
}

#[actix_web::test]
async fn update_touches_one_row() {
    let db = MockDatabase::new(sea_orm::DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let res = update_user(&db, &budi(1)).await;

    assert_eq!(res.unwrap(), 1);
    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("UPDATE"));
    assert!(log.contains("\\\"id_user\\\""), "{log}");
    assert!(log.contains("$5"), "values must be bound: {log}");
    assert!(!log.contains("\\\"password\\\""), "update must not touch password: {log}");
}

#[actix_web::test]
async fn update_missing_user_still_succeeds() {
    let db = MockDatabase::new(sea_orm::DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let app = test::init_service(
        actix_web::App::new()
            .app_data(web::Data::new(db))
            .configure(configure),
    )
    .await;
    let req = test::TestRequest::default()
        .method(Method::PUT)
        .set_json(budi(99))
        .uri("/user")
        .to_request();

    let resp: MessageResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp, MessageResponse::new(USER_UPDATED));
}

#[actix_web::test]
async fn update_request_fails_with_internal_error() {
    let db = MockDatabase::new(sea_orm::DatabaseBackend::Postgres)
        .append_exec_errors([sea_orm::error::DbErr::Exec(
            sea_orm::error::RuntimeErr::Internal("test".to_string()),
        )])
        .into_connection();
    let app = test::init_service(
        actix_web::App::new()
            .app_data(web::Data::new(db))
            .configure(configure),
    )
    .await;
    let req = test::TestRequest::default()
        .method(Method::PUT)
        .set_json(budi(1))
        .uri("/user")
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body, ErrorResponse::new(UPDATE_FAILED));
}

#[actix_web::test]
async fn update_without_id_is_rejected() {
    let db = MockDatabase::new(sea_orm::DatabaseBackend::Postgres).into_connection();
    let app = test::init_service(
        actix_web::App::new()
            .app_data(web::Data::new(db))
            .configure(configure),
    )
    .await;
    let req = test::TestRequest::default()
        .method(Method::PUT)
        .set_json(serde_json::json!({"nama":"Budi","email":"b@x.com","no_handphone":"0812","alamat":"Jl. B"}))
        .uri("/user")
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.missing, vec!["id_user"]);
}
