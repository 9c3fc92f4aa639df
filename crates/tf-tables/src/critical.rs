//! Critical-point reference data, kept as text records.

use crate::column::normalize_header;

/// Generic table of critical properties (one row per substance).
///
/// Column layout varies between sources, so cells are kept verbatim and
/// parsed on demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriticalTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CriticalTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row with any cell equal to `substance` (case-insensitive), so
    /// both the name and the formula column match.
    pub fn find(&self, substance: &str) -> Option<CriticalRecord<'_>> {
        let wanted = substance.trim();
        self.rows
            .iter()
            .find(|row| row.iter().any(|cell| cell.trim().eq_ignore_ascii_case(wanted)))
            .map(|cells| CriticalRecord {
                headers: &self.headers,
                cells,
            })
    }
}

/// One substance's row of a [`CriticalTable`].
#[derive(Debug, Clone, Copy)]
pub struct CriticalRecord<'a> {
    headers: &'a [String],
    cells: &'a [String],
}

impl<'a> CriticalRecord<'a> {
    /// Raw cell under a header, matched after normalisation.
    pub fn get(&self, header: &str) -> Option<&'a str> {
        let wanted = normalize_header(header);
        self.headers
            .iter()
            .position(|h| normalize_header(h) == wanted)
            .and_then(|i| self.cells.get(i))
            .map(|s| s.trim())
    }

    /// Numeric cell under a header.
    pub fn value(&self, header: &str) -> Option<f64> {
        self.get(header).and_then(|s| s.parse().ok())
    }

    /// (header, cell) pairs in column order.
    pub fn iter(self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.headers
            .iter()
            .zip(self.cells.iter())
            .map(|(h, c)| (h.as_str(), c.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CriticalTable {
        CriticalTable::new(
            vec!["Substance".into(), "Formula".into(), "Temperature (K)".into()],
            vec![
                vec!["Ammonia".into(), "NH3".into(), "405.5".into()],
                vec!["Water".into(), "H2O".into(), " 647.1 ".into()],
            ],
        )
    }

    #[test]
    fn find_by_name_or_formula() {
        let t = table();
        assert_eq!(t.find("water").and_then(|r| r.get("Formula")), Some("H2O"));
        assert_eq!(t.find("h2o").and_then(|r| r.get("Substance")), Some("Water"));
        assert!(t.find("helium").is_none());
    }

    #[test]
    fn numeric_lookup_normalises_header() {
        let t = table();
        let water = t.find("Water").unwrap();
        assert_eq!(water.value("temperature k"), Some(647.1));
        assert_eq!(water.value("Substance"), None);
        assert_eq!(water.iter().count(), 3);
    }
}
