use actix_web::{post, web};

use crate::services::credentials::CredentialService;
use crate::types::account::Account;
use crate::types::response::{ApiResponse, ApiResult};

#[post("/register/")]
async fn register(
    _req: actix_web::HttpRequest,
    service: web::Data<CredentialService>,
    body: web::Json<Account>,
) -> ApiResult<bool> {
    let account = body.into_inner();
    let created = service.register(&account).await?;

    Ok(ApiResponse::Ok(created))
}
