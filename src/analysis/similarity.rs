//! Loose skill-name equivalence used when comparing extracted skills against
//! role requirement lists.

/// Common abbreviations and aliases that the vocabulary may not have folded
/// into one canonical name. Checked both directions.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("machine learning", &["ml", "artificial intelligence", "ai"]),
    ("natural language processing", &["nlp"]),
    ("computer vision", &["cv"]),
    ("deep learning", &["dl", "neural networks"]),
    ("tensorflow", &["tf"]),
    ("scikit-learn", &["sklearn"]),
    ("postgresql", &["postgres"]),
    ("javascript", &["js"]),
    ("artificial intelligence", &["ai", "machine learning", "ml"]),
    ("business intelligence", &["bi"]),
];

/// True when two skill names should count as the same requirement. Exact
/// match after lowercasing, a known synonym pair, or substring containment
/// for names longer than two characters.
pub fn skills_similar(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return true;
    }

    for (name, aliases) in SYNONYMS {
        if (a == *name && aliases.contains(&b.as_str()))
            || (b == *name && aliases.contains(&a.as_str()))
        {
            return true;
        }
    }

    // Guard against two-letter fragments like "r" or "go" matching inside
    // unrelated words.
    if a.len() > 2 && b.len() > 2 && (a.contains(&b) || b.contains(&a)) {
        return true;
    }

    false
}
