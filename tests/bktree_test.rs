//! Integration tests for the BK-tree indexes

use simindex::{BkTree, ContentBkTree, IndexError, Set, DEFAULT_FUZZINESS};

#[test]
fn test_kitten_scenario() {
    let mut tree = BkTree::with_fuzziness(1);
    for term in ["kitten", "sitten", "bitten"] {
        tree.add(term);
    }
    assert!(tree.has("mitten"));
    assert!(!tree.has("zzzzzz"));
}

#[test]
fn test_delete_lifecycle() {
    let mut tree: BkTree = ["alpha", "beta", "gamma", "delta"].into_iter().collect();
    assert_eq!(tree.len(), 4);

    assert!(tree.del("beta"));
    assert!(!tree.has_within("beta", 0));
    assert!(!tree.del("beta"));
    assert_eq!(tree.len(), 3);

    // the other terms are untouched
    for term in ["alpha", "gamma", "delta"] {
        assert!(tree.has_within(term, 0));
    }
}

#[test]
fn test_json_round_trip() {
    let mut tree = BkTree::with_fuzziness(4);
    tree.extend(["north", "south", "east", "west", "northeast", "southwest"]);
    tree.del("east");

    let json = tree.to_json().unwrap();
    let decoded: BkTree = serde_json::from_str(&json).unwrap();

    let original: Set<&str> = tree.terms().collect();
    let restored: Set<&str> = decoded.terms().collect();
    assert_eq!(original, restored);
    assert_eq!(decoded.fuzziness(), DEFAULT_FUZZINESS);
}

#[test]
fn test_json_inside_a_document() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Dictionary {
        name: String,
        words: BkTree,
    }

    let json = r#"{"name":"colors","words":["red","green","blue"]}"#;
    let doc: Dictionary = serde_json::from_str(json).unwrap();
    assert_eq!(doc.words.len(), 3);
    assert!(doc.words.has("gren"));

    let empty: Dictionary = serde_json::from_str(r#"{"name":"none","words":null}"#).unwrap();
    assert!(empty.words.is_empty());
    assert!(serde_json::to_string(&empty).unwrap().contains(r#""words":null"#));
}

#[test]
fn test_json_malformed() {
    assert!(matches!(
        BkTree::from_json(r#"{"words":[]}"#),
        Err(IndexError::MalformedEncoding(_))
    ));
}

#[test]
fn test_content_tree_spelling_suggestions() {
    let mut dict = ContentBkTree::new();
    let words = [("receive", 1), ("recipe", 2), ("deceive", 3), ("relieve", 4), ("achieve", 5)];
    for (word, id) in words {
        dict.insert(word, id);
    }

    let suggestions = dict.search("recieve", 2);
    // transposed "ie" costs two substitutions
    assert!(suggestions.has(&1));
    assert!(suggestions.has(&2));
    assert!(suggestions.has(&4));
    assert!(!suggestions.has(&3));
    assert!(!suggestions.has(&5));
}
