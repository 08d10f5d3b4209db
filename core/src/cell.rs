use serde::{Deserialize, Serialize};

/// One cell as served by the generator endpoint.
///
/// `value` carries the clue for a shown cell and the solution for a hidden
/// one; the `char` type rejects empty or multi-character payloads at the
/// deserialization boundary.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleCell {
    pub is_hidden: bool,
    pub value: char,
}

impl PuzzleCell {
    pub const fn clue(value: char) -> Self {
        Self {
            is_hidden: false,
            value,
        }
    }

    pub const fn hidden(value: char) -> Self {
        Self {
            is_hidden: true,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_are_camel_case() {
        let cell: PuzzleCell = serde_json::from_str(r#"{"isHidden":true,"value":"5"}"#).unwrap();
        assert_eq!(cell, PuzzleCell::hidden('5'));

        let json = serde_json::to_string(&PuzzleCell::clue('3')).unwrap();
        assert_eq!(json, r#"{"isHidden":false,"value":"3"}"#);
    }

    #[test]
    fn multi_character_values_are_rejected() {
        assert!(serde_json::from_str::<PuzzleCell>(r#"{"isHidden":false,"value":"12"}"#).is_err());
        assert!(serde_json::from_str::<PuzzleCell>(r#"{"isHidden":false,"value":""}"#).is_err());
    }
}
