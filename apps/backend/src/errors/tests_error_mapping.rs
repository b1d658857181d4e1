use actix_web::http::StatusCode;

use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

#[test]
fn every_domain_error_maps_to_its_wire_code() {
    let cases = [
        (DomainError::InvalidStage, ErrorCode::InvalidStage),
        (DomainError::AlreadyBanned, ErrorCode::AlreadyBanned),
        (DomainError::StageBanned, ErrorCode::StageBanned),
        (DomainError::AlreadyPicked, ErrorCode::AlreadyPicked),
        (DomainError::PhaseMismatch, ErrorCode::PhaseMismatch),
        (DomainError::QuotaExhausted, ErrorCode::QuotaExhausted),
        (DomainError::NothingToUndo, ErrorCode::NothingToUndo),
        (DomainError::InvalidMode, ErrorCode::InvalidMode),
        (DomainError::CannotAdvance, ErrorCode::CannotAdvance),
        (DomainError::UnknownAction, ErrorCode::UnknownAction),
    ];
    for (err, code) in cases {
        assert_eq!(err.code(), code, "{err}");
    }
}

#[test]
fn domain_errors_become_400_validation_app_errors() {
    let app_err = AppError::from(DomainError::QuotaExhausted);
    assert_eq!(app_err.status(), StatusCode::BAD_REQUEST);
    match app_err {
        AppError::Validation { code, detail } => {
            assert_eq!(code, ErrorCode::QuotaExhausted);
            assert_eq!(detail, "ban quota exhausted");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn app_error_statuses() {
    assert_eq!(
        AppError::bad_request(ErrorCode::BadRequest, "nope").status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::not_found(ErrorCode::NotFound, "missing").status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        AppError::internal("boom").status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::config("bad env").status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
