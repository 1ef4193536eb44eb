use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{QuantityDef, Section, SectionDef, SubSectionDef};

/// Atomic fraction of one element in a composite system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementalComposition {
    /// Element symbol
    pub element: String,
    /// Atomic fraction (0..=1)
    pub atomic_fraction: f64,
}

impl ElementalComposition {
    /// Create a new composition entry
    pub fn new(element: &str, atomic_fraction: f64) -> Self {
        Self {
            element: element.to_string(),
            atomic_fraction,
        }
    }
}

impl Section for ElementalComposition {
    const NAME: &'static str = "ElementalComposition";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(QuantityDef::string("element"))
            .quantity_def(QuantityDef::float("atomic_fraction"))
    }
}

/// A named constituent of a composite system with its mass fraction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Component name
    pub name: String,
    /// Mass fraction (0..=1)
    pub mass_fraction: f64,
}

impl Component {
    /// Create a new component
    pub fn new(name: impl Into<String>, mass_fraction: f64) -> Self {
        Self {
            name: name.into(),
            mass_fraction,
        }
    }
}

impl Section for Component {
    const NAME: &'static str = "Component";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(QuantityDef::string("name"))
            .quantity_def(QuantityDef::float("mass_fraction"))
    }
}

/// Identification fields shared by every entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityInfo {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Lab-internal identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab_id: Option<String>,
    /// Free text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<DateTime<Utc>>,
}

/// Base of every material record: identification plus composition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeSystem {
    /// Identification
    #[serde(flatten)]
    pub info: EntityInfo,
    /// Elemental composition by atomic fraction
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub elemental_composition: Vec<ElementalComposition>,
    /// Constituents by mass fraction
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

impl Section for CompositeSystem {
    const NAME: &'static str = "CompositeSystem";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(QuantityDef::string("name"))
            .quantity_def(QuantityDef::string("lab_id"))
            .quantity_def(QuantityDef::rich_text("description"))
            .quantity_def(QuantityDef::datetime("datetime"))
            .sub_section(SubSectionDef::many(
                "elemental_composition",
                ElementalComposition::NAME,
            ))
            .sub_section(SubSectionDef::many("components", Component::NAME))
    }
}

/// Reference from a process or measurement to a sample
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeSystemReference {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Lab id of the referenced sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab_id: Option<String>,
    /// Archive reference (`../uploads/<id>/archive/<entry>#data`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl CompositeSystemReference {
    /// Reference a sample by lab id
    pub fn from_lab_id(lab_id: impl Into<String>) -> Self {
        let lab_id = lab_id.into();
        Self {
            name: Some(lab_id.clone()),
            lab_id: Some(lab_id),
            reference: None,
        }
    }
}

impl Section for CompositeSystemReference {
    const NAME: &'static str = "CompositeSystemReference";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(QuantityDef::string("name"))
            .quantity_def(QuantityDef::string("lab_id"))
            .quantity_def(QuantityDef::reference("reference", CompositeSystem::NAME))
    }
}
