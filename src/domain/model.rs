use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// One raw input row: the field values exactly as they appeared in the table.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field at `index`, or "" when the row is shorter.
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A commercial actor at the analyzed property. Serialized key names follow
/// the downstream document format (Norwegian, camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub rank: String,
    pub navn: String,
    #[serde(rename = "type")]
    pub actor_type: String,
    pub adresse: String,
    pub kommune: String,
    pub omsetning: Option<f64>,
    pub kjede_prosent: Option<String>,
    pub yoy_vekst: Option<f64>,
    pub ansatte_lokalt: i64,
    pub ansatte_kjede: i64,
    pub kjede_lokasjoner: i64,
    pub markedsandel: Option<f64>,
}

/// Category name -> occurrence count, remembering first-insertion order so
/// that serialization and top-N reporting stay stable across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryCounts {
    order: Vec<String>,
    counts: HashMap<String, u64>,
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `category`, registering it on first sight.
    pub fn record(&mut self, category: &str) {
        if let Some(count) = self.counts.get_mut(category) {
            *count += 1;
        } else {
            self.order.push(category.to_string());
            self.counts.insert(category.to_string(), 1);
        }
    }

    pub fn get(&self, category: &str) -> Option<u64> {
        self.counts.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(|category| (category.as_str(), self.counts[category]))
    }

    /// Up to `n` entries by descending count; the sort is stable, so ties
    /// keep insertion order.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (category, count) in self.iter() {
            map.serialize_entry(category, &count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryCounts {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = CategoryCounts;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to count")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut counts = CategoryCounts::new();
                while let Some((category, count)) = access.next_entry::<String, u64>()? {
                    if counts.counts.insert(category.clone(), count).is_none() {
                        counts.order.push(category);
                    }
                }
                Ok(counts)
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

/// Run-level metadata block embedded in the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub total_actors: usize,
    pub categories: usize,
    pub generated_date: String,
    pub source: String,
}

/// The complete output document for one property analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorDocument {
    pub eiendom_id: String,
    pub actors: Vec<Actor>,
    pub category_stats: CategoryCounts,
    pub metadata: Metadata,
}

/// What the aggregation phase hands to the writer.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub actors: Vec<Actor>,
    pub categories: CategoryCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_from(categories: &[&str]) -> CategoryCounts {
        let mut counts = CategoryCounts::new();
        for category in categories {
            counts.record(category);
        }
        counts
    }

    #[test]
    fn test_category_counts_keep_insertion_order() {
        let counts = counts_from(&["Servering", "Handel", "Servering", "Trening"]);

        let seen: Vec<&str> = counts.iter().map(|(category, _)| category).collect();
        assert_eq!(seen, vec!["Servering", "Handel", "Trening"]);
        assert_eq!(counts.get("Servering"), Some(2));
        assert_eq!(counts.get("Handel"), Some(1));
        assert_eq!(counts.get("Frisør"), None);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_top_sorts_by_count_then_insertion() {
        let counts = counts_from(&["A", "B", "B", "C", "D", "D"]);

        // B=2 and D=2 tie; B was inserted first. A=1 and C=1 tie; A first.
        assert_eq!(counts.top(3), vec![("B", 2), ("D", 2), ("A", 1)]);
    }

    #[test]
    fn test_top_handles_short_maps() {
        let counts = counts_from(&["A"]);
        assert_eq!(counts.top(5), vec![("A", 1)]);
        assert!(CategoryCounts::new().top(5).is_empty());
    }

    #[test]
    fn test_category_counts_serialize_in_insertion_order() {
        let counts = counts_from(&["Zoo", "Apotek", "Zoo"]);
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"Zoo":2,"Apotek":1}"#);
    }

    #[test]
    fn test_category_counts_round_trip() {
        let counts = counts_from(&["Servering", "Handel", "Servering"]);
        let json = serde_json::to_string(&counts).unwrap();
        let back: CategoryCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counts);
    }

    #[test]
    fn test_actor_serializes_missing_numbers_as_null() {
        let actor = Actor {
            rank: "1".to_string(),
            navn: "Bakeriet".to_string(),
            actor_type: "Servering".to_string(),
            adresse: "Storgata 1".to_string(),
            kommune: "Bergen".to_string(),
            omsetning: None,
            kjede_prosent: None,
            yoy_vekst: None,
            ansatte_lokalt: 0,
            ansatte_kjede: 0,
            kjede_lokasjoner: 0,
            markedsandel: None,
        };

        let json = serde_json::to_value(&actor).unwrap();
        assert!(json.get("omsetning").unwrap().is_null());
        assert!(json.get("kjedeProsent").unwrap().is_null());
        assert!(json.get("yoyVekst").unwrap().is_null());
        assert!(json.get("markedsandel").unwrap().is_null());
        assert_eq!(json.get("type").unwrap(), "Servering");
        assert_eq!(json.get("ansatteLokalt").unwrap(), 0);
    }

    #[test]
    fn test_raw_row_field_defaults_to_empty() {
        let row = RawRow::new(vec!["1".to_string(), "Kafé".to_string()]);
        assert_eq!(row.field(0), "1");
        assert_eq!(row.field(1), "Kafé");
        assert_eq!(row.field(5), "");
        assert_eq!(row.len(), 2);
        assert!(!row.is_empty());
    }
}
