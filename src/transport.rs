//! Request and response bodies for exposing the diff engine over a wire
//! format, e.g. as JSON from a web service.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    AcceptanceState, DiffError, EditOperation, EditScript, Granularity, OperationId,
    apply_accepted, compute_diff,
};

/// Asks for the changes between two versions of a document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DiffRequest {
    pub old_content: String,
    pub new_content: String,
    #[serde(default)]
    pub granularity: Granularity,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DiffResponse {
    pub changes: EditScript,
}

impl DiffRequest {
    #[must_use]
    pub fn compute(&self) -> DiffResponse {
        let changes = compute_diff(&self.old_content, &self.new_content, self.granularity);
        debug!(
            "Answering a {} level diff request with {} change(s)",
            self.granularity,
            changes.len()
        );

        DiffResponse { changes }
    }
}

/// Asks for the original text with a subset of the changes applied.
/// `accepted` lists operation ids such as `"change-0"`, referring to the
/// positions of the operations in `changes`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApplyRequest {
    pub original_text: String,
    pub changes: Vec<EditOperation>,
    #[serde(default)]
    pub accepted: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApplyResponse {
    pub text: String,
}

impl ApplyRequest {
    /// # Errors
    ///
    /// Returns `DiffError::InvalidInput` for ids that can't be parsed and
    /// `DiffError::ConsistencyViolation` if the changes don't fit the
    /// original text.
    pub fn apply(&self) -> Result<ApplyResponse, DiffError> {
        let acceptance = self
            .accepted
            .iter()
            .map(|id| id.parse::<OperationId>())
            .collect::<Result<AcceptanceState, _>>()?;
        let script = EditScript::from_operations(self.changes.clone());

        Ok(ApplyResponse {
            text: apply_accepted(&self.original_text, &script, &acceptance)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ConsistencyViolation;

    #[test]
    fn test_diff_request() {
        let request: DiffRequest = serde_yaml::from_str(
            "old_content: \"The Smart City\"\nnew_content: \"The City\"\n",
        )
        .unwrap();
        assert_eq!(request.granularity, Granularity::Word);

        let response = request.compute();

        assert_snapshot!(serde_yaml::to_string(&response).unwrap(), @r"
        changes:
        - type: delete
          start_pos: 4
          end_pos: 10
          old_text: 'Smart '
          new_text: ''
          line_number: 1
          token_index: 2
        ");
    }

    #[test]
    fn test_apply_request() {
        let request: ApplyRequest = serde_yaml::from_str(
            r"
original_text: The Smart City
changes:
  - type: delete
    start_pos: 4
    end_pos: 10
    old_text: 'Smart '
  - type: insert
    start_pos: 14
    end_pos: 14
    new_text: ' Project'
accepted: [change-1]
",
        )
        .unwrap();

        assert_eq!(
            request.apply().unwrap(),
            ApplyResponse {
                text: "The Smart City Project".to_owned()
            }
        );
    }

    #[test]
    fn test_word_index_is_read_as_token_index() {
        let request: ApplyRequest = serde_yaml::from_str(
            r"
original_text: The Smart City
changes:
  - type: replace
    start_pos: 4
    end_pos: 9
    old_text: Smart
    new_text: Green
    line_number: 1
    word_index: 2
accepted: [change-0]
",
        )
        .unwrap();

        assert_eq!(request.changes[0].token_index(), 2);
        assert_eq!(request.apply().unwrap().text, "The Green City");

        let serialized = serde_yaml::to_string(&request.changes[0]).unwrap();
        assert!(serialized.contains("token_index: 2"));
        assert!(!serialized.contains("word_index"));
    }

    #[test]
    fn test_apply_request_errors() {
        let mut request = ApplyRequest {
            original_text: "abc".to_owned(),
            changes: vec![EditOperation::create_delete(0, "a".to_owned()).unwrap()],
            accepted: vec!["first".to_owned()],
        };
        assert!(matches!(request.apply(), Err(DiffError::InvalidInput { .. })));

        request.accepted = vec!["change-1".to_owned()];
        assert_eq!(
            request.apply(),
            Err(ConsistencyViolation::UnknownOperation {
                operation: OperationId::new(1)
            }
            .into())
        );
    }

    #[test]
    fn test_granularity_is_parsed() {
        let request: Result<DiffRequest, _> =
            serde_yaml::from_str("old_content: a\nnew_content: b\ngranularity: sentence\n");
        assert!(request.is_err());

        let request: DiffRequest =
            serde_yaml::from_str("old_content: ab\nnew_content: ac\ngranularity: character\n")
                .unwrap();
        assert_eq!(request.compute().changes.len(), 1);
    }
}
