use super::tokenizer::normalize;

/// Place-name synonym groups (IT⇄EN), canonical key first. The table is
/// compiled in and not editable at runtime; entries are stored normalized.
const ALIAS_TABLE: &[(&str, &[&str])] = &[
    (
        "dolomiti",
        &["dolomites", "alto adige", "south tyrol", "sudtirolo", "trentino"],
    ),
    ("islanda", &["iceland"]),
    ("norvegia", &["norway", "lofoten"]),
    ("toscana", &["tuscany", "val d'orcia"]),
    ("venezia", &["venice"]),
    ("firenze", &["florence"]),
    ("roma", &["rome"]),
    ("sicilia", &["sicily"]),
    ("liguria", &["cinque terre"]),
    ("giappone", &["japan"]),
    ("stati uniti", &["usa", "united states"]),
];

/// Expands a raw query into its search terms.
///
/// The normalized query is looked up against every group, matching either the
/// canonical key or any synonym. On a hit the whole group is returned together
/// with the query itself, deduplicated; on a miss the query is the only term.
pub fn expand_query(raw: &str) -> Vec<String> {
    let query = normalize(raw);

    for (key, synonyms) in ALIAS_TABLE {
        let hit = normalize(key) == query || synonyms.iter().any(|s| normalize(s) == query);
        if !hit {
            continue;
        }

        let mut terms = vec![normalize(key)];
        for synonym in *synonyms {
            let candidate = normalize(synonym);
            if !terms.contains(&candidate) {
                terms.push(candidate);
            }
        }
        if !terms.contains(&query) {
            terms.push(query);
        }
        return terms;
    }

    vec![query]
}
