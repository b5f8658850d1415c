use serde::{Deserialize, Serialize};

/// Echo payload for `GET /query/parameter`, built fresh per request.
///
/// An absent `param2` is omitted from the encoded body; decoders accept a
/// missing field or an explicit `null` as absence. Absence is never `0`.
#[derive(Debug, Serialize, Clone, Deserialize, PartialEq, Eq)]
pub struct QueryParameters {
    pub param1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param2: Option<i64>,
}
