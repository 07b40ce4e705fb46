use super::*;

#[test]
fn unauthorized_is_found_through_context() {
    let err = anyhow::Error::from(Unauthorized::new("list files")).context("refresh");
    assert!(is_unauthorized(&err));
    assert!(server_message(&err).is_none());
}

#[test]
fn server_message_is_found_through_context() {
    let err = anyhow::Error::from(ServerMessage::new(401, "Invalid email or password".into()))
        .context("login status");
    assert_eq!(server_message(&err), Some("Invalid email or password"));
    assert!(!is_unauthorized(&err));
}

#[test]
fn plain_errors_are_neither() {
    let err = anyhow::anyhow!("list files status: 500 Internal Server Error");
    assert!(!is_unauthorized(&err));
    assert!(server_message(&err).is_none());
}
