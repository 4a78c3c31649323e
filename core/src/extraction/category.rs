use crate::types::AttributeTriple;
use std::collections::BTreeSet;

/// Attribute domain used for category derivation
///
/// Each domain pairs the substring that selects its triples with the
/// sentinel emitted when no triple in the domain is flagged present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Anatomical findings; empty set renders as "normal"
    AnatomicalFinding,
    /// Diseases; empty set renders as "no disease"
    Disease,
}

impl Domain {
    /// Substring matched against the triple's category field
    pub fn substring(&self) -> &'static str {
        match self {
            Domain::AnatomicalFinding => "anatomicalfinding",
            Domain::Disease => "disease",
        }
    }

    /// Sentinel returned when the domain has no present attributes
    pub fn empty_label(&self) -> &'static str {
        match self {
            Domain::AnatomicalFinding => "normal",
            Domain::Disease => "no disease",
        }
    }
}

/// Derives the categorical label for one domain from a record's triples
///
/// # Algorithm
///
/// 1. Keep triples whose category field contains the domain substring
/// 2. Keep triples whose flag is the literal "yes"
/// 3. Strip literal apostrophes from each label, then collect into a set
///    (deduplicated, sorted alphabetically); quote-variant labels collapse
/// 4. Empty set returns the domain sentinel; otherwise labels are joined
///    with ", "
pub fn classify(triples: &[AttributeTriple], domain: Domain) -> String {
    let labels: BTreeSet<String> = triples
        .iter()
        .filter(|t| t.category.contains(domain.substring()))
        .filter(|t| t.is_present())
        .map(|t| t.label.replace('\'', ""))
        .collect();

    if labels.is_empty() {
        domain.empty_label().to_string()
    } else {
        labels.into_iter().collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::parse_attributes;
    use std::collections::HashSet;

    fn triples(attributes: &str) -> Vec<AttributeTriple> {
        parse_attributes(attributes, "test").unwrap()
    }

    #[test]
    fn test_classify_no_matching_domain() {
        let t = triples("disease|yes|pneumonia");
        assert_eq!(classify(&t, Domain::AnatomicalFinding), "normal");
    }

    #[test]
    fn test_classify_no_yes_flags() {
        let t = triples("anatomicalfinding|no|lung opacity,disease|no|pneumonia");
        assert_eq!(classify(&t, Domain::AnatomicalFinding), "normal");
        assert_eq!(classify(&t, Domain::Disease), "no disease");
    }

    #[test]
    fn test_classify_empty_triples() {
        assert_eq!(classify(&[], Domain::Disease), "no disease");
    }

    #[test]
    fn test_classify_single_label() {
        let t = triples("anatomicalfinding|yes|lung opacity");
        assert_eq!(classify(&t, Domain::AnatomicalFinding), "lung opacity");
    }

    #[test]
    fn test_classify_strips_apostrophes() {
        let t = triples("disease|yes|'copd/emphysema'");
        assert_eq!(classify(&t, Domain::Disease), "copd/emphysema");
    }

    #[test]
    fn test_classify_quote_variant_labels_collapse() {
        // 'edema' and edema are the same label once quotes are stripped.
        let t = triples("disease|yes|'edema',disease|yes|edema");
        assert_eq!(classify(&t, Domain::Disease), "edema");
    }

    #[test]
    fn test_classify_deduplicates_labels() {
        let t = triples(
            "anatomicalfinding|yes|lung opacity,anatomicalfinding|yes|lung opacity,\
             anatomicalfinding|yes|atelectasis",
        );
        let result = classify(&t, Domain::AnatomicalFinding);
        let labels: HashSet<&str> = result.split(", ").collect();
        assert_eq!(
            labels,
            HashSet::from(["lung opacity", "atelectasis"])
        );
    }

    #[test]
    fn test_classify_sorted_join() {
        let t = triples("disease|yes|pneumonia,disease|yes|copd/emphysema");
        assert_eq!(classify(&t, Domain::Disease), "copd/emphysema, pneumonia");
    }

    #[test]
    fn test_classify_ignores_other_domain() {
        let t = triples("disease|yes|pneumonia,anatomicalfinding|yes|lung opacity");
        assert_eq!(classify(&t, Domain::AnatomicalFinding), "lung opacity");
        assert_eq!(classify(&t, Domain::Disease), "pneumonia");
    }
}
