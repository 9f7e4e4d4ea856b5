use email_metadata::*;

// --- Envelope ---

#[test]
fn test_envelope_get_case_insensitive() {
    let envelope: Envelope = [("Subject", "Hello"), ("X-Mailer", "mutt")]
        .into_iter()
        .collect();

    assert_eq!(envelope.get("subject"), "Hello");
    assert_eq!(envelope.get("SUBJECT"), "Hello");
    assert_eq!(envelope.get("x-mailer"), "mutt");
}

#[test]
fn test_envelope_missing_header_is_empty() {
    let envelope = Envelope::new();
    assert_eq!(envelope.get("to"), "");
}

#[test]
fn test_envelope_first_occurrence_wins() {
    let mut envelope = Envelope::new();
    envelope.insert("Received", "first");
    envelope.insert("RECEIVED", "second");

    assert_eq!(envelope.get("received"), "first");
}

#[test]
fn test_envelope_insert_mixed_case_name() {
    let envelope: Envelope = [("Message-ID", "<a@b>")].into_iter().collect();
    assert_eq!(envelope.get("message-id"), "<a@b>");
}

#[test]
fn test_envelope_empty_value() {
    let envelope: Envelope = [("Cc", ""), ("cc", "later")].into_iter().collect();
    assert_eq!(envelope.get("cc"), "");
}

// --- EnvelopeRecord ---

#[test]
fn test_record_columns() {
    assert_eq!(
        EnvelopeRecord::COLUMNS.join(","),
        "id,path,date,dst,to,from,subject,cc"
    );
}

#[test]
fn test_record_default_is_empty() {
    let record = EnvelopeRecord::default();
    assert_eq!(record.id, "");
    assert_eq!(record.cc, "");
}
