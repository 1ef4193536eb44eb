//! # Section Definitions
//!
//! Declarative description of every record type: quantity names, value types,
//! SI units, display units, defaults and ELN widget hints. The definitions do not
//! drive serialization (the record structs in [`crate::sections`] do that); they
//! are what the ELN needs to render editors and what the `schema` CLI command
//! prints.
//!
//! ## Example
//!
//! ```
//! use nanolab::schema::Section;
//! use nanolab::sections::DtuTarget;
//! use nanolab::units::Unit;
//!
//! let def = DtuTarget::definition();
//! let thickness = def.quantity("thickness").unwrap();
//! assert_eq!(thickness.unit, Some(Unit::Metre));
//! ```

mod builders;

pub use builders::{QuantityDef, SubSectionDef};

use serde::Serialize;
use std::fmt;


/// Category every top-level nanolab section is filed under
pub const NANOLAB_CATEGORY: &str = "DTU Nanolab";

/// Value type of a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueType {
    /// Free text
    Str,
    /// 64-bit float, in the quantity's SI unit
    Float,
    /// Boolean flag
    Bool,
    /// Timestamp
    Datetime,
    /// One of a fixed set of strings
    Enum(&'static [&'static str]),
    /// Reference to another section, by section name
    Reference(&'static str),
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Str => write!(f, "str"),
            ValueType::Float => write!(f, "float64"),
            ValueType::Bool => write!(f, "bool"),
            ValueType::Datetime => write!(f, "datetime"),
            ValueType::Enum(values) => write!(f, "enum[{}]", values.join(", ")),
            ValueType::Reference(target) => write!(f, "ref<{}>", target),
        }
    }
}

/// ELN editor widget used for a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EditComponent {
    /// Single line text
    StringEdit,
    /// Number with unit selector
    NumberEdit,
    /// Raw file upload
    FileEdit,
    /// Checkbox
    BoolEdit,
    /// Date and time picker
    DateTimeEdit,
    /// Multi-line rich text
    RichTextEdit,
    /// Radio buttons over an enum
    RadioEnumEdit,
}

impl EditComponent {
    /// Component name as understood by the ELN
    pub fn eln_name(&self) -> &'static str {
        match self {
            EditComponent::StringEdit => "StringEditQuantity",
            EditComponent::NumberEdit => "NumberEditQuantity",
            EditComponent::FileEdit => "FileEditQuantity",
            EditComponent::BoolEdit => "BoolEditQuantity",
            EditComponent::DateTimeEdit => "DateTimeEditQuantity",
            EditComponent::RichTextEdit => "RichTextEditQuantity",
            EditComponent::RadioEnumEdit => "RadioEnumEditQuantity",
        }
    }
}

/// Default value of a quantity, in SI units for floats
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Numeric default
    Float(f64),
    /// Boolean default
    Bool(bool),
    /// Text or enum default
    Str(&'static str),
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Float(v) => write!(f, "{}", v),
            DefaultValue::Bool(v) => write!(f, "{}", v),
            DefaultValue::Str(v) => write!(f, "{:?}", v),
        }
    }
}

/// Definition of a section (record type)
#[derive(Debug, Clone, Serialize)]
pub struct SectionDef {
    /// Section name, as used for the `m_def` tag
    pub name: &'static str,
    /// Human readable label
    pub label: Option<&'static str>,
    /// ELN category for top-level sections
    pub category: Option<&'static str>,
    /// Base section(s) from the host framework
    pub base: &'static [&'static str],
    /// Quantities declared by this section (not the base)
    pub quantities: Vec<QuantityDef>,
    /// Nested sections
    pub sub_sections: Vec<SubSectionDef>,
}

impl SectionDef {
    /// Create a new section definition without quantities
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            label: None,
            category: None,
            base: &[],
            quantities: Vec::new(),
            sub_sections: Vec::new(),
        }
    }

    /// Mark as a top-level ELN entry with the given label
    pub fn entry(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self.category = Some(NANOLAB_CATEGORY);
        self
    }

    /// Set the base sections
    pub fn extends(mut self, base: &'static [&'static str]) -> Self {
        self.base = base;
        self
    }

    /// Append a quantity
    pub fn quantity_def(mut self, quantity: QuantityDef) -> Self {
        self.quantities.push(quantity);
        self
    }

    /// Append a sub-section
    pub fn sub_section(mut self, sub_section: SubSectionDef) -> Self {
        self.sub_sections.push(sub_section);
        self
    }

    /// Look up a quantity by name
    pub fn quantity(&self, name: &str) -> Option<&QuantityDef> {
        self.quantities.iter().find(|q| q.name == name)
    }

    /// Quantities that carry a physical unit
    pub fn dimensional_quantities(&self) -> impl Iterator<Item = &QuantityDef> {
        self.quantities.iter().filter(|q| q.unit.is_some())
    }
}

impl fmt::Display for SectionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Some(label) => writeln!(f, "{} ({})", self.name, label)?,
            None => writeln!(f, "{}", self.name)?,
        }
        if !self.base.is_empty() {
            writeln!(f, "  extends: {}", self.base.join(", "))?;
        }
        for q in &self.quantities {
            write!(f, "  {:<40} {}", q.name, q.value_type)?;
            if let Some(unit) = q.unit {
                write!(f, " [{}]", unit)?;
            }
            if let Some(display) = q.display_unit {
                write!(f, " display={}", display)?;
            }
            if let Some(default) = &q.default {
                write!(f, " default={}", default)?;
            }
            writeln!(f)?;
        }
        for s in &self.sub_sections {
            let repeats = if s.repeats { "[]" } else { "" };
            writeln!(f, "  {:<40} {}{}", s.name, s.section, repeats)?;
        }
        Ok(())
    }
}

/// A record type with a declarative definition
pub trait Section {
    /// Section name used as `m_def`
    const NAME: &'static str;

    /// Build the declarative definition
    fn definition() -> SectionDef;
}

#[cfg(test)]
mod tests;
