use super::*;

#[test]
fn from_transport_detects_abort_as_timeout() {
    assert_eq!(
        ClientError::from_transport("The operation was aborted.", 5000),
        ClientError::Timeout(5000)
    );
    assert_eq!(ClientError::from_transport("Timeout exceeded", 250), ClientError::Timeout(250));
}

#[test]
fn from_transport_keeps_other_messages_as_network() {
    assert_eq!(
        ClientError::from_transport("connection refused", 5000),
        ClientError::Network("connection refused".to_owned())
    );
}

#[test]
fn display_messages_are_readable() {
    assert_eq!(ClientError::Http { status: 502 }.to_string(), "request failed with status 502");
    assert_eq!(ClientError::Timeout(5000).to_string(), "request timed out after 5000 ms");
    assert_eq!(ClientError::Unavailable.to_string(), "not available outside the browser");
}
