//! JSON codec for [`BkTree`]: the tree is stored as the array of its live
//! terms, or `null` when it has none.

use std::fmt;

use serde::de::{Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use super::BkTree;
use crate::error::{IndexError, Result};

const EXPECTED_ARRAY: &str = "BkTree: array expected";

impl Serialize for BkTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_empty() {
            serializer.serialize_none()
        } else {
            serializer.collect_seq(self.terms())
        }
    }
}

struct TermsVisitor;

impl<'de> Visitor<'de> for TermsVisitor {
    type Value = BkTree;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(EXPECTED_ARRAY)
    }

    fn visit_none<E: serde::de::Error>(self) -> std::result::Result<BkTree, E> {
        Ok(BkTree::new())
    }

    fn visit_unit<E: serde::de::Error>(self) -> std::result::Result<BkTree, E> {
        Ok(BkTree::new())
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<BkTree, D::Error> {
        deserializer.deserialize_seq(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<BkTree, A::Error> {
        let mut tree = BkTree::new();
        while let Some(term) = seq.next_element::<String>()? {
            tree.add(term);
        }
        tracing::debug!(terms = tree.len(), "decoded bk-tree");
        Ok(tree)
    }
}

impl<'de> Deserialize<'de> for BkTree {
    /// Rebuilds the tree by re-inserting every term. Fuzziness is not part of
    /// the encoding and comes back as [`DEFAULT_FUZZINESS`](super::DEFAULT_FUZZINESS).
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_option(TermsVisitor)
    }
}

impl BkTree {
    /// Encode the live terms as a JSON array (`null` for an empty tree).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| IndexError::SerializationError(e.to_string()))
    }

    /// Decode a tree from a JSON array of terms or `null`.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| IndexError::SerializationError(e.to_string()))?;
        match value {
            serde_json::Value::Null | serde_json::Value::Array(_) => serde_json::from_value(value)
                .map_err(|e| IndexError::SerializationError(e.to_string())),
            _ => Err(IndexError::MalformedEncoding(EXPECTED_ARRAY.to_string())),
        }
    }
}
