use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

pub const FIELD_COUNT: usize = 13;

/// One of the thirteen clinical parameters collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Age,
    Sex,
    Cp,
    Trestbps,
    Chol,
    Fbs,
    Restecg,
    Thalach,
    Exang,
    Oldpeak,
    Slope,
    Ca,
    Thal,
}

impl FieldId {
    /// Every field in form and wire order.
    pub const ALL: [FieldId; FIELD_COUNT] = [
        FieldId::Age,
        FieldId::Sex,
        FieldId::Cp,
        FieldId::Trestbps,
        FieldId::Chol,
        FieldId::Fbs,
        FieldId::Restecg,
        FieldId::Thalach,
        FieldId::Exang,
        FieldId::Oldpeak,
        FieldId::Slope,
        FieldId::Ca,
        FieldId::Thal,
    ];

    /// Key used in the JSON payload.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Age => "age",
            FieldId::Sex => "sex",
            FieldId::Cp => "cp",
            FieldId::Trestbps => "trestbps",
            FieldId::Chol => "chol",
            FieldId::Fbs => "fbs",
            FieldId::Restecg => "restecg",
            FieldId::Thalach => "thalach",
            FieldId::Exang => "exang",
            FieldId::Oldpeak => "oldpeak",
            FieldId::Slope => "slope",
            FieldId::Ca => "ca",
            FieldId::Thal => "thal",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == raw)
            .ok_or_else(|| UnknownField(raw.to_string()))
    }
}

/// Fixed-size map holding exactly one entry per [`FieldId`].
///
/// The key set cannot grow or shrink, so two maps over the same form always
/// line up entry for entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMap<T> {
    entries: [T; FIELD_COUNT],
}

impl<T> FieldMap<T> {
    pub fn from_fn(mut init: impl FnMut(FieldId) -> T) -> Self {
        Self {
            entries: std::array::from_fn(|index| init(FieldId::ALL[index])),
        }
    }

    pub fn get(&self, field: FieldId) -> &T {
        &self.entries[field.index()]
    }

    pub fn set(&mut self, field: FieldId, value: T) {
        self.entries[field.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &T)> {
        FieldId::ALL.into_iter().zip(self.entries.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(FieldId, &T) -> U) -> FieldMap<U> {
        FieldMap::from_fn(|field| f(field, self.get(field)))
    }

    pub fn len(&self) -> usize {
        FIELD_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T: Default> Default for FieldMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<FieldId> for FieldMap<T> {
    type Output = T;

    fn index(&self, field: FieldId) -> &Self::Output {
        self.get(field)
    }
}

impl<T> IndexMut<FieldId> for FieldMap<T> {
    fn index_mut(&mut self, field: FieldId) -> &mut Self::Output {
        &mut self.entries[field.index()]
    }
}
