use crate::database::*;
use crate::error::{ApiError, OperationKind};
use crate::password::{hash_password, PasswordError};
use actix_web::{
    body::BoxBody, http::Method, web, HttpRequest, HttpResponse, Responder, Result,
};
use common::{backend::*, UserID, USER_ADDED, USER_DELETED, USER_UPDATED};
use log::{error, info, warn};
use sea_orm::{entity::prelude::*, sea_query::Expr, ActiveValue::NotSet, Set};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A parsed /user request, one variant per HTTP method
#[derive(Debug, Clone, PartialEq)]
pub enum UserOperation {
    List,
    Create(CreateUserRequest),
    Update(UpdateUserRequest),
    Delete(DeleteUserRequest),
}

impl UserOperation {
    /// Pick the operation for `method` and validate `body` against its required fields.
    /// GET ignores the body entirely.
    pub fn from_request(method: &Method, body: &[u8]) -> Result<Self, ApiError> {
        match *method {
            Method::GET => Ok(UserOperation::List),
            Method::POST => parse_body(body, &CreateUserRequest::REQUIRED).map(Self::Create),
            Method::PUT => parse_body(body, &UpdateUserRequest::REQUIRED).map(Self::Update),
            Method::DELETE => parse_body(body, &DeleteUserRequest::REQUIRED).map(Self::Delete),
            _ => Err(ApiError::MethodNotAllowed(method.clone())),
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            UserOperation::List => OperationKind::List,
            UserOperation::Create(_) => OperationKind::Create,
            UserOperation::Update(_) => OperationKind::Update,
            UserOperation::Delete(_) => OperationKind::Delete,
        }
    }
}

/// Deserialize a JSON object body, reporting every absent or null key in `required` at once.
/// An empty body counts as an empty object.
fn parse_body<T: DeserializeOwned>(body: &[u8], required: &[&'static str]) -> Result<T, ApiError> {
    let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))?
    };
    let fields = value
        .as_object()
        .ok_or_else(|| ApiError::MalformedBody("expected a JSON object".to_owned()))?;
    let missing: Vec<&'static str> = required
        .iter()
        .copied()
        .filter(|key| fields.get(*key).map_or(true, Value::is_null))
        .collect();
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }
    serde_json::from_value(value).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

/// What a successful operation sends back
#[derive(Debug, PartialEq)]
pub enum UserReply {
    Users(ReadUsersResponse),
    Message(MessageResponse),
}

impl Responder for UserReply {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self {
            UserReply::Users(users) => HttpResponse::Ok().json(users),
            UserReply::Message(msg) => HttpResponse::Ok().json(msg),
        }
    }
}

/// get /user returns every row in storage order.
/// NOTE: the stored password hashes are part of the response.
async fn list_users<C: ConnectionTrait>(db: &C) -> Result<ReadUsersResponse, ApiError> {
    let users = user::Entity::find().all(db).await.map_err(|e| {
        error!("couldn't fetch users: {}", e);
        ApiError::database(OperationKind::List)(e)
    })?;
    Ok(users.into_iter().map(ReadUserResponse::from).collect())
}

/// post /user inserts one user, returns the id the database assigned
async fn create_user<C: ConnectionTrait>(
    db: &C,
    req: &CreateUserRequest,
) -> Result<UserID, ApiError> {
    // argon2 is slow on purpose, keep it off the worker thread
    let plaintext = req.password.clone();
    let password = web::block(move || hash_password(&plaintext))
        .await
        .map_err(|e| PasswordError::Hash(e.to_string()))
        .and_then(|hashed| hashed)
        .map_err(|e| {
            error!("couldn't hash password: {}", e);
            ApiError::from(e)
        })?;
    let user_model = user::ActiveModel {
        id_user: NotSet,
        nama: Set(req.nama.clone()),
        email: Set(req.email.clone()),
        password: Set(password),
        no_handphone: Set(req.no_handphone.clone()),
        alamat: Set(req.alamat.clone()),
    };
    let inserted = user_model.insert(db).await.map_err(|e| {
        error!("user not inserted: {}", e);
        ApiError::database(OperationKind::Create)(e)
    })?;
    Ok(inserted.id_user)
}

/// put /user overwrites every field but the password.
/// Zero matched rows still counts as success.
async fn update_user<C: ConnectionTrait>(
    db: &C,
    req: &UpdateUserRequest,
) -> Result<u64, ApiError> {
    let res = user::Entity::update_many()
        .col_expr(user::Column::Nama, Expr::value(req.nama.clone()))
        .col_expr(user::Column::Email, Expr::value(req.email.clone()))
        .col_expr(user::Column::NoHandphone, Expr::value(req.no_handphone.clone()))
        .col_expr(user::Column::Alamat, Expr::value(req.alamat.clone()))
        .filter(user::Column::IdUser.eq(req.id_user))
        .exec(db)
        .await
        .map_err(|e| {
            error!("couldn't update user {}: {}", req.id_user, e);
            ApiError::database(OperationKind::Update)(e)
        })?;
    if res.rows_affected == 0 {
        warn!("update matched no user with id_user {}", req.id_user);
    }
    Ok(res.rows_affected)
}

/// delete /user removes one user.
/// Zero matched rows still counts as success.
async fn delete_user<C: ConnectionTrait>(
    db: &C,
    req: &DeleteUserRequest,
) -> Result<u64, ApiError> {
    let res = user::Entity::delete_by_id(req.id_user)
        .exec(db)
        .await
        .map_err(|e| {
            error!("couldn't delete user {}: {}", req.id_user, e);
            ApiError::database(OperationKind::Delete)(e)
        })?;
    if res.rows_affected == 0 {
        warn!("delete matched no user with id_user {}", req.id_user);
    }
    Ok(res.rows_affected)
}

/// Run one parsed operation against `db`
pub async fn handle<C: ConnectionTrait>(db: &C, op: UserOperation) -> Result<UserReply, ApiError> {
    match op {
        UserOperation::List => list_users(db).await.map(UserReply::Users),
        UserOperation::Create(req) => {
            let id = create_user(db, &req).await?;
            info!("created user {}", id);
            Ok(UserReply::Message(MessageResponse::new(USER_ADDED)))
        }
        UserOperation::Update(req) => {
            update_user(db, &req).await?;
            Ok(UserReply::Message(MessageResponse::new(USER_UPDATED)))
        }
        UserOperation::Delete(req) => {
            delete_user(db, &req).await?;
            Ok(UserReply::Message(MessageResponse::new(USER_DELETED)))
        }
    }
}

/// /user endpoint, every method lands here and is dispatched by [`UserOperation`]
async fn user_request(
    data: web::Data<DatabaseConnection>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<UserReply, ApiError> {
    let op = UserOperation::from_request(req.method(), &body).map_err(|e| {
        warn!("rejected {} /user: {}", req.method(), e);
        e
    })?;
    info!("user_request: {:?}", op.kind());
    handle(data.get_ref(), op).await
}

/// Register the /user resource on an app
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/user").to(user_request));
}

#[cfg(test)]
#[path = "./tests/test_parse.rs"]
mod test_parse;
#[cfg(test)]
#[path = "./tests/test_list.rs"]
mod test_list;
#[cfg(test)]
#[path = "./tests/test_create.rs"]
mod test_create;
#[cfg(test)]
#[path = "./tests/test_update.rs"]
mod test_update;
#[cfg(test)]
#[path = "./tests/test_delete.rs"]
mod test_delete;
#[cfg(test)]
#[path = "./tests/test_properties.rs"]
mod test_properties;
#[cfg(test)]
#[path = "./tests/testcontainer_common_utils.rs"]
mod testcontainer_common_utils;
#[cfg(test)]
#[path = "./tests/end_to_end.test.rs"]
mod end_to_end;
