pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    devices::{confirm_device_request::ConfirmDeviceRequest, devices::confirm_device},
    error::ApiError,
    error::Result as ApiResult,
    service_token::get_service_token,
    sign_in::{
        release_request::ReleaseRequest,
        sign_in::{release_credential, sign_in},
        sign_in_denied::SignInDenied,
        sign_in_request::SignInRequest,
        sign_in_response::SignInResponse,
    },
    users::{
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{get_user, get_user_by_email, list_users},
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
