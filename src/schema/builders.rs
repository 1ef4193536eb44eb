use serde::Serialize;

use crate::units::{DisplayUnit, Unit};

use super::{DefaultValue, EditComponent, ValueType};

/// Definition of a single quantity (field) of a section
///
/// Built with a chained builder; the constructor picks the value type and the
/// matching default editor.
///
/// ```
/// use nanolab::schema::{QuantityDef, DefaultValue};
/// use nanolab::units::{DisplayUnit, Unit};
///
/// let q = QuantityDef::float("thickness")
///     .display(DisplayUnit::Millimetre)
///     .default_float(0.00635);
/// assert_eq!(q.unit, Some(Unit::Metre));
/// assert_eq!(q.default, Some(DefaultValue::Float(0.00635)));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct QuantityDef {
    /// Field name
    pub name: &'static str,
    /// Value type
    pub value_type: ValueType,
    /// SI storage unit, if dimensional
    pub unit: Option<Unit>,
    /// Unit shown in the editor
    pub display_unit: Option<DisplayUnit>,
    /// Default value
    pub default: Option<DefaultValue>,
    /// ELN editor widget, `None` for non-editable quantities
    pub component: Option<EditComponent>,
    /// Editor label when it differs from the name
    pub label: Option<&'static str>,
    /// Free text description
    pub description: Option<&'static str>,
    /// Computed during normalization rather than entered
    pub derived: bool,
}

impl QuantityDef {
    fn new(name: &'static str, value_type: ValueType, component: Option<EditComponent>) -> Self {
        Self {
            name,
            value_type,
            unit: None,
            display_unit: None,
            default: None,
            component,
            label: None,
            description: None,
            derived: false,
        }
    }

    /// Single line string quantity
    pub fn string(name: &'static str) -> Self {
        Self::new(name, ValueType::Str, Some(EditComponent::StringEdit))
    }

    /// Rich text quantity
    pub fn rich_text(name: &'static str) -> Self {
        Self::new(name, ValueType::Str, Some(EditComponent::RichTextEdit))
    }

    /// Raw file reference
    pub fn file(name: &'static str) -> Self {
        Self::new(name, ValueType::Str, Some(EditComponent::FileEdit))
    }

    /// Float quantity, dimensionless until [`QuantityDef::display`] or
    /// [`QuantityDef::unit`] is called
    pub fn float(name: &'static str) -> Self {
        Self::new(name, ValueType::Float, Some(EditComponent::NumberEdit))
    }

    /// Boolean quantity
    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, ValueType::Bool, Some(EditComponent::BoolEdit))
    }

    /// Timestamp quantity
    pub fn datetime(name: &'static str) -> Self {
        Self::new(name, ValueType::Datetime, Some(EditComponent::DateTimeEdit))
    }

    /// Enumerated quantity, edited with radio buttons
    pub fn enumeration(name: &'static str, values: &'static [&'static str]) -> Self {
        Self::new(name, ValueType::Enum(values), Some(EditComponent::RadioEnumEdit))
    }

    /// Reference to another section
    pub fn reference(name: &'static str, section: &'static str) -> Self {
        Self::new(name, ValueType::Reference(section), None)
    }

    /// Set the display unit; the storage unit follows from it
    pub fn display(mut self, display: DisplayUnit) -> Self {
        self.unit = Some(display.si_unit());
        self.display_unit = Some(display);
        self
    }

    /// Set the storage unit explicitly
    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Numeric default, in SI units
    pub fn default_float(mut self, value: f64) -> Self {
        self.default = Some(DefaultValue::Float(value));
        self
    }

    /// Boolean default
    pub fn default_bool(mut self, value: bool) -> Self {
        self.default = Some(DefaultValue::Bool(value));
        self
    }

    /// String or enum default
    pub fn default_str(mut self, value: &'static str) -> Self {
        self.default = Some(DefaultValue::Str(value));
        self
    }

    /// Editor label
    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Description
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Mark as computed by the normalizer
    pub fn derived(mut self) -> Self {
        self.derived = true;
        self
    }
}

/// Nested section declaration
#[derive(Debug, Clone, Serialize)]
pub struct SubSectionDef {
    /// Field name in the parent
    pub name: &'static str,
    /// Section name of the child
    pub section: &'static str,
    /// Whether the sub-section is a list
    pub repeats: bool,
}

impl SubSectionDef {
    /// Single nested section
    pub fn one(name: &'static str, section: &'static str) -> Self {
        Self {
            name,
            section,
            repeats: false,
        }
    }

    /// Repeating nested section
    pub fn many(name: &'static str, section: &'static str) -> Self {
        Self {
            name,
            section,
            repeats: true,
        }
    }
}
