use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A tab on the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSection {
    pub id: String,
    pub title: String,
    pub icon: String,
}

impl SettingsSection {
    pub fn new(id: impl Into<String>, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
        }
    }
}

/// The input widget a field renders as.
///
/// Serialized as its bare tag (`"select"`, `"text"`, ...). Tags this enum
/// does not know about round-trip through [`FieldType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Select,
    Text,
    Textarea,
    Checkbox,
    Number,
    Other(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Select => "select",
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Checkbox => "checkbox",
            FieldType::Number => "number",
            FieldType::Other(tag) => tag,
        }
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        match tag {
            "select" => FieldType::Select,
            "text" => FieldType::Text,
            "textarea" => FieldType::Textarea,
            "checkbox" => FieldType::Checkbox,
            "number" => FieldType::Number,
            other => FieldType::Other(other.to_string()),
        }
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(FieldType::from(tag.as_str()))
    }
}

/// One configurable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsField {
    pub name: String,
    pub label: String,
    pub desc: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub default: String,
    /// `value → label` choices, in display order. Only select fields have them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Map<String, serde_json::Value>>,
}

impl SettingsField {
    pub fn text(
        name: impl Into<String>,
        label: impl Into<String>,
        desc: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            desc: desc.into(),
            field_type: FieldType::Text,
            default: default.into(),
            options: None,
        }
    }

    pub fn select<I, V, L>(
        name: impl Into<String>,
        label: impl Into<String>,
        desc: impl Into<String>,
        default: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        let options = options
            .into_iter()
            .map(|(v, l)| (v.into(), serde_json::Value::String(l.into())))
            .collect();
        Self {
            name: name.into(),
            label: label.into(),
            desc: desc.into(),
            field_type: FieldType::Select,
            default: default.into(),
            options: Some(options),
        }
    }

    /// Label shown for option `value`.
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options.as_ref()?.get(value)?.as_str()
    }
}

/// Fields per section, both levels in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsFields {
    sections: Vec<(String, Vec<SettingsField>)>,
}

impl SettingsFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `field` to `section`, replacing a field of the same name in place.
    pub fn insert(&mut self, section: &str, field: SettingsField) {
        let fields = match self.sections.iter().position(|(id, _)| id == section) {
            Some(at) => &mut self.sections[at].1,
            None => {
                self.sections.push((section.to_string(), Vec::new()));
                let last = self.sections.len() - 1;
                &mut self.sections[last].1
            }
        };
        match fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => fields.push(field),
        }
    }

    pub fn remove(&mut self, section: &str, name: &str) -> Option<SettingsField> {
        let fields = &mut self.sections.iter_mut().find(|(id, _)| id == section)?.1;
        let at = fields.iter().position(|f| f.name == name)?;
        Some(fields.remove(at))
    }

    pub fn section(&self, section: &str) -> Option<&[SettingsField]> {
        self.sections
            .iter()
            .find(|(id, _)| id == section)
            .map(|(_, fields)| fields.as_slice())
    }

    pub fn get(&self, section: &str, name: &str) -> Option<&SettingsField> {
        self.section(section)?.iter().find(|f| f.name == name)
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|(_, f)| f.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct FieldsByName<'a>(&'a [SettingsField]);

impl Serialize for FieldsByName<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for field in self.0 {
            map.serialize_entry(&field.name, field)?;
        }
        map.end()
    }
}

/// `{ section_id: { field_name: field } }`, the admin UI's format.
impl Serialize for SettingsFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (id, fields) in &self.sections {
            map.serialize_entry(id, &FieldsByName(fields))?;
        }
        map.end()
    }
}
