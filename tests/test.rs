
use std::{fs, path::Path};

use example_document::ExampleDocument;
use pretty_assertions::assert_eq;
use suggestion_diff::{AcceptanceState, DiffSpan, apply_accepted, render_spans};

#[test]
fn test_document_changes() {
    for doc in &get_all_documents() {
        doc.assert_changes(&doc.compute());
    }
}

#[test]
fn test_document_accept_all() {
    for doc in &get_all_documents() {
        let script = doc.compute();

        assert_eq!(script.apply_all(doc.old_text()).unwrap(), doc.new_text());
    }
}

#[test]
fn test_document_accept_nothing() {
    for doc in &get_all_documents() {
        let script = doc.compute();

        assert_eq!(
            apply_accepted(doc.old_text(), &script, &AcceptanceState::new(&script)).unwrap(),
            doc.old_text()
        );
    }
}

#[test]
fn test_document_partial_acceptance() {
    for doc in &get_all_documents() {
        let script = doc.compute();

        for (acceptance, expected) in doc.partial_acceptances() {
            assert_eq!(
                apply_accepted(doc.old_text(), &script, &acceptance).unwrap(),
                expected
            );
        }
    }
}

#[test]
fn test_document_spans_match_partial_acceptance() {
    for doc in &get_all_documents() {
        let script = doc.compute();

        for (acceptance, expected) in doc.partial_acceptances() {
            let visible: String = render_spans(doc.old_text(), &script, &acceptance)
                .unwrap()
                .iter()
                .filter(|span| span.is_visible_in_result())
                .map(DiffSpan::text)
                .collect();

            assert_eq!(visible, expected);
        }
    }
}

fn get_all_documents() -> Vec<ExampleDocument> {
    let examples_dir = Path::new("tests/examples");
    let entries = fs::read_dir(examples_dir)
        .expect("Failed to read examples directory")
        .collect::<Vec<_>>();

    let mut documents = Vec::new();

    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("yml") {
            documents.extend(ExampleDocument::all_from_yaml(&path));
        }
    }

    assert!(!documents.is_empty(), "No example documents found");

    documents
}
