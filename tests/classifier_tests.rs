//! Classifier behaviour on the failed-call shapes the admin client sees

use std::sync::Arc;

use libadmin_errors::{
    messages::VIETNAMESE, ClassifiedError, ErrorCategory, ErrorClassifier, MessageCatalog, RawError,
};
use serde_json::json;

const NETWORK: &str = "Lỗi kết nối mạng. Vui lòng kiểm tra kết nối internet";
const TIMEOUT: &str = "Yêu cầu quá thời gian chờ. Vui lòng thử lại";

fn classifier() -> ErrorClassifier {
    ErrorClassifier::new(VIETNAMESE.clone())
}

#[test]
fn test_book_not_found_message() {
    let raw = RawError::http(404, Some(json!({"message": "Book not found"})));
    let result = classifier().classify(&raw, "X");

    assert_eq!(result.message, "Không tìm thấy sách");
    assert_eq!(result.category, ErrorCategory::NotFound);
}

#[test]
fn test_missing_status_is_network() {
    let result = classifier().classify(&RawError::network(), "X");
    assert_eq!(result, ClassifiedError::new(NETWORK, ErrorCategory::Network));
}

#[test]
fn test_network_ignores_body() {
    let raw = RawError {
        status_code: None,
        body: Some(json!({"errorCode": "BOOK_NOT_FOUND", "message": "Book not found"})),
        is_timeout: false,
    };
    assert_eq!(classifier().classify(&raw, "X").category, ErrorCategory::Network);
}

#[test]
fn test_timeout_wins() {
    assert_eq!(
        classifier().classify(&RawError::timeout(), "X"),
        ClassifiedError::new(TIMEOUT, ErrorCategory::Timeout)
    );

    let raw = RawError {
        status_code: Some(404),
        body: Some(json!({"errorCode": "BOOK_NOT_FOUND"})),
        is_timeout: true,
    };
    assert_eq!(classifier().classify(&raw, "X").category, ErrorCategory::Timeout);
}

#[test]
fn test_first_validation_error() {
    let raw = RawError::http(
        400,
        Some(json!({
            "errorCode": "VALIDATION_FAILED",
            "message": "Validation error",
            "validationErrors": [
                {"field": "email", "message": "invalid format"},
                {"field": "name", "message": "required"}
            ]
        })),
    );
    let result = classifier().classify(&raw, "X");

    assert_eq!(result.message, "email: invalid format");
    assert_eq!(result.category, ErrorCategory::Validation);
}

#[test]
fn test_status_fallback_beats_default() {
    let raw = RawError::http(403, Some(json!({})));
    let result = classifier().classify(&raw, "X");

    assert_eq!(result.message, "Bạn không có quyền thực hiện thao tác này");
    assert_eq!(result.category, ErrorCategory::Permission);
}

#[test]
fn test_unknown_status_uses_default() {
    let result = classifier().classify(&RawError::http(418, None), "X");
    assert_eq!(result, ClassifiedError::new("X", ErrorCategory::Unknown));
}

#[test]
fn test_exact_translation_independent_of_default() {
    let raw = RawError::http(409, Some(json!({"message": "Role name already exists"})));
    let a = classifier().classify(&raw, "first default");
    let b = classifier().classify(&raw, "second default");

    assert_eq!(a.message, "Tên vai trò đã tồn tại");
    assert_eq!(a, b);
}

#[test]
fn test_same_input_same_output() {
    let classifier = classifier();
    let inputs = [
        RawError::network(),
        RawError::timeout(),
        RawError::http(500, Some(json!({"message": "Internal server error at /books"}))),
        RawError::http(401, Some(json!({"code": "INVALID_REFRESH_TOKEN"}))),
        RawError::http(418, Some(json!("not an object"))),
    ];

    for raw in &inputs {
        assert_eq!(classifier.classify(raw, "X"), classifier.classify(raw, "X"));
    }
}

#[test]
fn test_error_code_categories() {
    let cases = [
        (401, "INVALID_REFRESH_TOKEN", ErrorCategory::Auth, "Phiên đăng nhập đã hết hạn"),
        (403, "FORBIDDEN", ErrorCategory::Permission, "Bạn không có quyền truy cập tài nguyên này"),
        (404, "PUBLISHER_NOT_FOUND", ErrorCategory::NotFound, "Không tìm thấy nhà xuất bản"),
        (409, "CATEGORY_ALREADY_EXISTS", ErrorCategory::Conflict, "Danh mục đã tồn tại"),
        (500, "INTERNAL_ERROR", ErrorCategory::Server, "Lỗi máy chủ nội bộ. Vui lòng thử lại sau"),
    ];

    for (status, code, category, message) in cases {
        let raw = RawError::http(status, Some(json!({ "code": code })));
        assert_eq!(
            classifier().classify(&raw, "X"),
            ClassifiedError::new(message, category),
            "code {}",
            code
        );
    }
}

#[test]
fn test_templated_quantity_message() {
    let raw = RawError::http(
        400,
        Some(json!({"message": "Cannot delete book with available quantity. Current quantity: 3"})),
    );
    let result = classifier().classify(&raw, "X");

    assert_eq!(
        result.message,
        "Không thể xóa sách còn số lượng khả dụng. Số lượng hiện tại: 3"
    );
    assert_eq!(result.category, ErrorCategory::Validation);
}

#[test]
fn test_html_error_page_kept_verbatim() {
    let raw = RawError::from_response(502, "Bad Gateway", Some("text/html"), "<html>proxy</html>");
    let result = classifier().classify(&raw, "X");

    assert_eq!(result.message, "<html>proxy</html>");
    assert_eq!(result.category, ErrorCategory::Server);
}

#[test]
fn test_non_object_body_degrades() {
    let raw = RawError::http(418, Some(json!([1, 2, 3])));
    assert_eq!(
        classifier().classify(&raw, "X"),
        ClassifiedError::new("X", ErrorCategory::Unknown)
    );
}

#[test]
fn test_injected_catalog() {
    let catalog = MessageCatalog::from_json_str(
        r#"{
            "phrases": {"Book not found": "No such book"},
            "statuses": {"403": "Access denied"},
            "networkMessage": "You are offline"
        }"#,
    )
    .unwrap();
    let classifier = ErrorClassifier::new(Arc::new(catalog));

    let raw = RawError::http(404, Some(json!({"message": "Book not found"})));
    assert_eq!(classifier.classify(&raw, "X").message, "No such book");
    assert_eq!(classifier.classify(&RawError::http(403, None), "X").message, "Access denied");
    assert_eq!(classifier.classify(&RawError::network(), "X").message, "You are offline");
    // No 404 entry in this catalog, no body: default applies
    assert_eq!(
        classifier.classify(&RawError::http(404, None), "X"),
        ClassifiedError::new("X", ErrorCategory::Unknown)
    );
}

#[test]
fn test_empty_message_falls_back_to_status() {
    let raw = RawError::http(404, Some(json!({"message": ""})));
    assert_eq!(
        classifier().classify(&raw, "X"),
        ClassifiedError::new("Không tìm thấy tài nguyên", ErrorCategory::NotFound)
    );
}

#[test]
fn test_empty_synthetic_message_uses_default() {
    let raw = RawError::from_response(599, "", Some("text/plain"), "");
    assert_eq!(raw.body, Some(json!({"message": ""})));
    assert_eq!(
        classifier().classify(&raw, "X"),
        ClassifiedError::new("X", ErrorCategory::Unknown)
    );

    let raw = RawError::from_response(499, "", None, "");
    assert_eq!(
        classifier().classify(&raw, "X"),
        ClassifiedError::new("X", ErrorCategory::Unknown)
    );
}
