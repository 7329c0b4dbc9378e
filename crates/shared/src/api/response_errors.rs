use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! response_error {
    ($name:ident {
        $(
            #[code($variant_code:expr)]
            #[error($variant_msg:literal)]
            $variant:ident
            $({ $($var_struct_body_tt:tt)* })?
        ,)*
    }) => {

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
        pub enum $name {
            $(
                #[error($variant_msg)]
                $variant $({
                    $($var_struct_body_tt)*
                })?,
            )*
        }

        impl $name {
            pub fn status_code(&self) -> StatusCode {
                match self {
                    $( $name::$variant { .. } => $variant_code, )*
                }
            }
        }
    };
}

response_error!(AddExerciseError {
    #[code(StatusCode::NOT_FOUND)]
    #[error("user not found")]
    UserNotFound,
    #[code(StatusCode::BAD_REQUEST)]
    #[error("invalid duration: {value}")]
    InvalidDuration { value: String },
    #[code(StatusCode::BAD_REQUEST)]
    #[error("invalid date: {value}")]
    InvalidDate { value: String },
});

response_error!(LogError {
    #[code(StatusCode::BAD_REQUEST)]
    #[error("missing userId")]
    MissingUserId,
    #[code(StatusCode::NOT_FOUND)]
    #[error("user not found")]
    UserNotFound,
    #[code(StatusCode::BAD_REQUEST)]
    #[error("invalid {field} date: {value}")]
    InvalidDate { field: String, value: String },
    #[code(StatusCode::BAD_REQUEST)]
    #[error("invalid limit: {value}")]
    InvalidLimit { value: String },
});
