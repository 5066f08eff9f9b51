mod loader;
mod record;

pub use loader::{from_reader, load, LoadReport};
pub use record::HouseRecord;

/// An ordered collection of house records.
///
/// Order is significant: training walks the records front to back on every
/// epoch, so two datasets with the same records in a different order may
/// fit different coefficients.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<HouseRecord>,
}

impl Dataset {
    /// Creates a new dataset from owned records, keeping their order.
    pub fn new(records: Vec<HouseRecord>) -> Self {
        Self { records }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn records(&self) -> &[HouseRecord] {
        &self.records
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, HouseRecord> {
        self.records.iter()
    }
}

impl From<Vec<HouseRecord>> for Dataset {
    fn from(records: Vec<HouseRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<HouseRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = HouseRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a HouseRecord;
    type IntoIter = std::slice::Iter<'a, HouseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
