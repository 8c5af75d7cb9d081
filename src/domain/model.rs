use crate::domain::dialect::{Dialect, DuplicateHeaders, ExtraFields};
use crate::utils::error::{ConvertError, Result};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// One raw data row as read from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Source line the row starts on (1-based).
    pub line: u64,
    pub values: Vec<String>,
}

/// Header column names plus every data row, before records are built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTable {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub destination: String,
    pub records: usize,
    pub fields: usize,
}

/// The ordered, unique field names of a table.
///
/// `slots` maps every source column to the field it fills. Without
/// duplicates this is the identity; under [`DuplicateHeaders::LastWins`]
/// a repeated name maps back to the slot of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
    slots: Vec<usize>,
}

impl Header {
    pub fn from_columns<I, S>(columns: I, policy: DuplicateHeaders) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        let mut slots = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (column, name) in columns.into_iter().enumerate() {
            let name = name.into();
            if let Some(&slot) = seen.get(&name) {
                match policy {
                    DuplicateHeaders::Reject => {
                        return Err(ConvertError::DuplicateHeaderError {
                            field: name,
                            column: column + 1,
                        });
                    }
                    DuplicateHeaders::LastWins => {
                        tracing::debug!(
                            "Header field '{}' repeated at column {}, later values win",
                            name,
                            column + 1
                        );
                        slots.push(slot);
                    }
                }
            } else {
                seen.insert(name.clone(), names.len());
                slots.push(names.len());
                names.push(name);
            }
        }

        Ok(Self { names, slots })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn position(&self, field: &str) -> Option<usize> {
        self.names.iter().position(|name| name == field)
    }

    /// Number of distinct fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of source columns, duplicates included.
    pub fn column_count(&self) -> usize {
        self.slots.len()
    }
}

/// A single data row keyed by the header's field names.
#[derive(Debug, Clone)]
pub struct Record {
    header: Arc<Header>,
    values: Vec<String>,
}

impl Record {
    pub fn from_row(header: &Arc<Header>, row: &Row, policy: ExtraFields) -> Result<Self> {
        let expected = header.column_count();
        if row.values.len() > expected {
            match policy {
                ExtraFields::Reject => {
                    return Err(ConvertError::ExtraFieldsError {
                        line: row.line,
                        expected,
                        found: row.values.len(),
                    });
                }
                ExtraFields::Truncate => tracing::debug!(
                    "Line {}: dropping {} values beyond the header",
                    row.line,
                    row.values.len() - expected
                ),
            }
        }

        let mut values = vec![String::new(); header.len()];
        for (column, &slot) in header.slots.iter().enumerate() {
            values[slot] = row.values.get(column).cloned().unwrap_or_default();
        }

        Ok(Self {
            header: Arc::clone(header),
            values,
        })
    }

    pub fn header(&self) -> &Arc<Header> {
        &self.header
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.header
            .position(field)
            .map(|index| self.values[index].as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.header
            .names
            .iter()
            .zip(&self.values)
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.header.names == other.header.names && self.values == other.values
    }
}

impl Eq for Record {}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.fields() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object with string values")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Record, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut names = Vec::new();
                let mut values = Vec::new();
                while let Some((name, value)) = map.next_entry::<String, String>()? {
                    names.push(name);
                    values.push(value);
                }

                let header = Header::from_columns(names, DuplicateHeaders::Reject)
                    .map_err(<A::Error as de::Error>::custom)?;
                Ok(Record {
                    header: Arc::new(header),
                    values,
                })
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// The records of one source file, in source order.
///
/// Every record shares the document's header, so all of them carry the
/// same keys in the same order.
#[derive(Debug, Clone)]
pub struct Document {
    header: Arc<Header>,
    records: Vec<Record>,
}

impl Document {
    pub fn new(header: Arc<Header>) -> Self {
        Self {
            header,
            records: Vec::new(),
        }
    }

    /// Builds the header and one record per data row.
    pub fn from_table(table: &SourceTable, dialect: &Dialect) -> Result<Self> {
        let header = Header::from_columns(&table.columns, dialect.duplicate_headers)?;
        let mut document = Self::new(Arc::new(header));
        document.records.reserve(table.rows.len());
        for row in &table.rows {
            document.push_row(row, dialect.extra_fields)?;
        }
        Ok(document)
    }

    pub fn push_row(&mut self, row: &Row, policy: ExtraFields) -> Result<()> {
        let record = Record::from_row(&self.header, row, policy)?;
        self.records.push(record);
        Ok(())
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for Document {}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.records.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let header = match records.first() {
            Some(first) => Arc::clone(&first.header),
            None => Arc::new(Header::default()),
        };

        for (index, record) in records.iter().enumerate() {
            if record.header.names != header.names {
                return Err(de::Error::custom(format!(
                    "record {} has different keys than the first record",
                    index + 1
                )));
            }
        }

        let records = records
            .into_iter()
            .map(|record| Record {
                header: Arc::clone(&header),
                values: record.values,
            })
            .collect();

        Ok(Self { header, records })
    }
}
