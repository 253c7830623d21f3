use actix_web::{post, web};
use log::info;

use crate::services::credentials::CredentialService;
use crate::types::account::Account;
use crate::types::response::{ApiResponse, ApiResult};

#[post("/login/")]
async fn login(
    _req: actix_web::HttpRequest,
    service: web::Data<CredentialService>,
    body: web::Json<Account>,
) -> ApiResult<bool> {
    info!("Login attempt for user: {}", body.user_name);

    let account = body.into_inner();
    let granted = service.login(&account).await?;

    Ok(ApiResponse::Ok(granted))
}
