use acctview_core::errors::{AcctViewError, ExError, ExErrorKind};
use acctview_core::lists::ListKind;
use acctview_core_types::RequestId;

#[test]
fn test_unknown_list_verifiable_by_kind() {
    let err = "reports".parse::<ListKind>().unwrap_err();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.list(), Some("reports"));
}

#[test]
fn test_invalid_input_message_survives_conversion() {
    let err = AcctViewError::invalid_input("page must be a positive integer");

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.code(), "ERR_INVALID_INPUT");
    assert!(ex_err.message().contains("page must be a positive integer"));
}

#[test]
fn test_builder_context() {
    let request_id = RequestId::from_string("req-1".to_string());
    let err = ExError::new(ExErrorKind::Internal)
        .with_op("export_csv")
        .with_list("orders")
        .with_request_id(request_id.clone())
        .with_message("boom");

    assert_eq!(err.op(), Some("export_csv"));
    assert_eq!(err.request_id(), Some(&request_id));
    assert_eq!(
        err.to_string(),
        "[ERR_INTERNAL] in operation 'export_csv': boom (list: orders) (request_id: req-1)"
    );
}

#[test]
fn test_serde_json_error_converts() {
    let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
    let err: AcctViewError = json_err.into();
    assert_eq!(err.kind(), ExErrorKind::Serialization);
}
