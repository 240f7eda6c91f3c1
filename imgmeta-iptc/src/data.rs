use imgmeta_common::error::{TagError, ValueError};
use imgmeta_common::iptc::{DataSet, IptcType, CHARACTER_SET, UTF8_CHARACTER_SET};
use imgmeta_common::registry::{self, TagInfo};

use crate::error::Result;
use crate::{iim, Value};

/// One dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datum {
    key: DataSet,
    data: Vec<u8>,
}

impl Datum {
    pub fn new(key: DataSet, data: Vec<u8>) -> Self {
        Self { key, data }
    }

    /// Encodes and checks the value against the length limits of the dataset
    pub fn from_value(key: DataSet, value: &Value) -> std::result::Result<Self, TagError> {
        let data = value.encode();

        if let Some(info) = registry::iptc_dataset(key) {
            if data.len() > info.max_len {
                return Err(ValueError::invalid(format!(
                    "{} bytes exceed the maximum length of {}",
                    data.len(),
                    info.max_len
                ))
                .with_key(key));
            }
        }

        Ok(Self::new(key, data))
    }

    pub fn key(&self) -> DataSet {
        self.key
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn type_(&self) -> IptcType {
        type_for(self.key)
    }

    pub fn info(&self) -> TagInfo {
        registry::iptc_info(self.key)
    }

    pub fn value(&self) -> std::result::Result<Value, TagError> {
        Value::decode(self.type_(), &self.data).map_err(|err| err.with_key(self.key))
    }

    pub fn raw_value(&self) -> std::result::Result<String, TagError> {
        self.value().map(|x| x.to_raw_string())
    }
}

fn type_for(key: DataSet) -> IptcType {
    registry::iptc_dataset(key).map_or(IptcType::Undefined, |x| x.type_)
}

fn is_repeatable(key: DataSet) -> bool {
    registry::iptc_dataset(key).map_or(true, |x| x.repeatable)
}

/// IPTC store
///
/// Datasets keep the order in which they were read or added. A key can occur
/// several times if the dataset is repeatable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IptcData {
    entries: Vec<Datum>,
}

impl IptcData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads an IIM dataset stream
    pub fn decode(data: &[u8]) -> Result<Self> {
        let entries = iim::decode(data)?
            .into_iter()
            .map(|(key, data)| Datum::new(key, data))
            .collect();

        Ok(Self { entries })
    }

    /// Writes the IIM dataset stream
    ///
    /// Datasets are grouped by record, keeping their order within a record.
    /// If text outside of ASCII is present and no character set is declared,
    /// UTF-8 is declared.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let charset = Datum::new(CHARACTER_SET, UTF8_CHARACTER_SET.to_vec());
        let mut entries: Vec<&Datum> = self.entries.iter().collect();
        entries.sort_by_key(|x| x.key.record);

        if self.needs_charset() {
            let pos = entries
                .iter()
                .position(|x| x.key > CHARACTER_SET)
                .unwrap_or(entries.len());
            entries.insert(pos, &charset);
        }

        iim::encode(entries.into_iter().map(|x| (x.key, x.data.as_slice())))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Datum> {
        self.entries.iter()
    }

    /// Distinct keys in order of their first occurrence
    pub fn keys(&self) -> Vec<DataSet> {
        let mut keys = Vec::new();
        for datum in &self.entries {
            if !keys.contains(&datum.key) {
                keys.push(datum.key);
            }
        }
        keys
    }

    pub fn contains(&self, key: DataSet) -> bool {
        self.entries.iter().any(|x| x.key == key)
    }

    /// Number of repetitions of a dataset
    pub fn count(&self, key: DataSet) -> usize {
        self.entries.iter().filter(|x| x.key == key).count()
    }

    /// All repetitions of a dataset
    pub fn get(&self, key: DataSet) -> std::result::Result<Vec<&Datum>, TagError> {
        let datums: Vec<_> = self.entries.iter().filter(|x| x.key == key).collect();

        if datums.is_empty() {
            Err(TagError::KeyNotFound(key.to_string()))
        } else {
            Ok(datums)
        }
    }

    pub fn raw_values(&self, key: DataSet) -> std::result::Result<Vec<String>, TagError> {
        self.get(key)?.into_iter().map(Datum::raw_value).collect()
    }

    /// Sets one repetition from its raw string form
    ///
    /// An index equal to the number of repetitions appends a new one.
    pub fn set_raw_value(
        &mut self,
        key: DataSet,
        index: usize,
        raw: &str,
    ) -> std::result::Result<(), TagError> {
        let value = Value::from_raw_string(type_for(key), raw).map_err(|err| err.with_key(key))?;
        self.set_value(key, index, &value)
    }

    pub fn set_value(
        &mut self,
        key: DataSet,
        index: usize,
        value: &Value,
    ) -> std::result::Result<(), TagError> {
        let count = self.count(key);
        if index > count {
            return Err(ValueError::invalid(format!(
                "index {index} is beyond the {count} existing repetitions"
            ))
            .with_key(key));
        }
        if index > 0 && !is_repeatable(key) {
            return Err(TagError::NonRepeatableTag(key.to_string()));
        }

        let datum = Datum::from_value(key, value)?;
        match self.positions(key).get(index) {
            Some(&pos) => self.replace(pos, datum),
            None => self.append(datum),
        }

        Ok(())
    }

    /// Replaces all repetitions of a dataset
    ///
    /// Existing repetitions are overwritten in order, additional values are
    /// appended and leftover repetitions are removed. Nothing is changed if
    /// any of the values is invalid.
    pub fn set_raw_values(
        &mut self,
        key: DataSet,
        raw: &[impl AsRef<str>],
    ) -> std::result::Result<(), TagError> {
        let type_ = type_for(key);
        let values = raw
            .iter()
            .map(|x| Value::from_raw_string(type_, x.as_ref()).map_err(|err| err.with_key(key)))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        self.set_values(key, &values)
    }

    pub fn set_values(&mut self, key: DataSet, values: &[Value]) -> std::result::Result<(), TagError> {
        if values.len() > 1 && !is_repeatable(key) {
            return Err(TagError::NonRepeatableTag(key.to_string()));
        }

        let datums = values
            .iter()
            .map(|x| Datum::from_value(key, x))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let positions = self.positions(key);
        let mut datums = datums.into_iter();

        for &pos in &positions {
            match datums.next() {
                Some(datum) => self.replace(pos, datum),
                None => break,
            }
        }

        for datum in datums {
            self.append(datum);
        }

        // Remove leftovers from the back to keep the positions valid
        for &pos in positions.iter().skip(values.len()).rev() {
            self.entries.remove(pos);
        }

        Ok(())
    }

    /// Removes all repetitions of a dataset
    pub fn delete(&mut self, key: DataSet) -> std::result::Result<Vec<Datum>, TagError> {
        if !self.contains(key) {
            return Err(TagError::KeyNotFound(key.to_string()));
        }

        let (removed, kept) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|x| x.key == key);
        self.entries = kept;

        Ok(removed)
    }

    /// Removes one repetition of a dataset
    pub fn delete_at(&mut self, key: DataSet, index: usize) -> std::result::Result<Datum, TagError> {
        let pos = self
            .positions(key)
            .get(index)
            .copied()
            .ok_or_else(|| TagError::KeyNotFound(format!("{key}[{index}]")))?;

        Ok(self.entries.remove(pos))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keywords
    pub fn keywords(&self) -> Vec<String> {
        self.raw_values(KEYWORDS).unwrap_or_default()
    }

    /// Combines `DateCreated` and `TimeCreated`
    #[cfg(feature = "chrono")]
    pub fn date_time_created(&self) -> Option<imgmeta_common::datetime::DateTime> {
        use chrono::TimeZone;
        use imgmeta_common::datetime::DateTime;

        let Ok(Value::Date(date)) = self.first(DATE_CREATED)?.value() else {
            return None;
        };
        let date = date.to_chrono()?;

        match self.first(TIME_CREATED).map(Datum::value) {
            Some(Ok(Value::Time(time))) => {
                let (time, offset) = time.to_chrono()?;
                let datetime = offset.from_local_datetime(&date.and_time(time)).single()?;
                Some(DateTime::FixedOffset(datetime))
            }
            _ => Some(DateTime::Naive(date.and_hms_opt(0, 0, 0)?)),
        }
    }

    #[cfg(feature = "chrono")]
    fn first(&self, key: DataSet) -> Option<&Datum> {
        self.entries.iter().find(|x| x.key == key)
    }

    fn needs_charset(&self) -> bool {
        !self.contains(CHARACTER_SET)
            && self
                .entries
                .iter()
                .any(|x| x.type_() == IptcType::String && !x.data.is_ascii())
    }

    fn positions(&self, key: DataSet) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, x)| x.key == key)
            .map(|(pos, _)| pos)
            .collect()
    }

    fn replace(&mut self, pos: usize, datum: Datum) {
        if let Some(existing) = self.entries.get_mut(pos) {
            *existing = datum;
        }
    }

    /// Appends behind the last repetition of the same dataset
    fn append(&mut self, datum: Datum) {
        match self.positions(datum.key).last() {
            Some(&pos) => self.entries.insert(pos.saturating_add(1), datum),
            None => self.entries.push(datum),
        }
    }
}

const KEYWORDS: DataSet = DataSet::new(2, 25);
#[cfg(feature = "chrono")]
const DATE_CREATED: DataSet = DataSet::new(2, 55);
#[cfg(feature = "chrono")]
const TIME_CREATED: DataSet = DataSet::new(2, 60);
