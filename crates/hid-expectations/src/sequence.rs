//! Expected report sequences.

use core::fmt;

use logi_hid_expectation_errors::SchemaError;
use logi_hid_report_schemas::{ReportClass, schema};

/// One field transition inside a report.
///
/// A positive value sets the field, a negative value clears a field that
/// was previously set to its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldValue {
    pub field: &'static str,
    pub value: i32,
}

impl FieldValue {
    pub const fn new(field: &'static str, value: i32) -> Self {
        Self { field, value }
    }

    pub const fn is_set(&self) -> bool {
        self.value > 0
    }

    /// The transition undoing this one.
    pub const fn negated(self) -> Self {
        Self {
            field: self.field,
            value: -self.value,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.field, self.value)
    }
}

/// A single report the device must emit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportStep {
    pub class: ReportClass,
    pub fields: Vec<FieldValue>,
}

impl ReportStep {
    pub fn new(class: ReportClass, fields: Vec<FieldValue>) -> Self {
        Self { class, fields }
    }

    /// Step touching exactly one field.
    pub fn single(class: ReportClass, field: &'static str, value: i32) -> Self {
        Self::new(class, vec![FieldValue::new(field, value)])
    }

    /// The first field value, if the step has any.
    pub fn first_value(&self) -> Option<i32> {
        self.fields.first().map(|field| field.value)
    }

    /// The step with every transition reversed.
    pub fn negated(&self) -> Self {
        Self::new(
            self.class,
            self.fields.iter().map(|field| field.negated()).collect(),
        )
    }

    /// Render the report this step produces, starting from an idle report.
    ///
    /// Cleared fields are written as zero.
    ///
    /// Some steps the tables declare name fields their report class lacks,
    /// and fail with [`SchemaError::UnknownField`]:
    ///
    /// - shortcuts such as the browser, launcher and language keys keep the
    ///   slot field `key_code1` on bitmap keyboards;
    /// - `KEYBOARD_CLEAR` (ChromeOS num lock) has no bitmap bit;
    /// - the iPad forward delete of Apple SKUs sends `KEYBOARD_DELETE_FORWARD`
    ///   in a consumer report.
    ///
    /// # Errors
    ///
    /// Fails when a field is not part of the step's report class or its
    /// value does not fit.
    pub fn encode(&self) -> Result<Vec<u8>, SchemaError> {
        schema(self.class).encode(
            self.fields
                .iter()
                .map(|field| (field.field, i64::from(field.value.max(0)))),
        )
    }
}

impl fmt::Display for ReportStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.class)?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        f.write_str("}")
    }
}

/// Press or release of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stimulus {
    Make,
    Break,
}

impl fmt::Display for Stimulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stimulus::Make => "make",
            Stimulus::Break => "break",
        })
    }
}

/// Reports expected on press (`make`) and on release (`release`), in
/// emission order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence {
    pub make: Vec<ReportStep>,
    pub release: Vec<ReportStep>,
}

impl Sequence {
    pub fn new(make: Vec<ReportStep>, release: Vec<ReportStep>) -> Self {
        Self { make, release }
    }

    /// No report on either edge.
    pub fn is_silent(&self) -> bool {
        self.make.is_empty() && self.release.is_empty()
    }

    pub fn steps(&self, stimulus: Stimulus) -> &[ReportStep] {
        match stimulus {
            Stimulus::Make => &self.make,
            Stimulus::Break => &self.release,
        }
    }

    /// Whether the key produces exactly one report on press and one on release.
    pub fn is_single_action(&self) -> bool {
        self.make.len() == 1 && self.release.len() == 1
    }

    /// Report class of the first press report.
    pub fn make_class(&self) -> Option<ReportClass> {
        self.make.first().map(|step| step.class)
    }
}

fn write_steps(f: &mut fmt::Formatter<'_>, steps: &[ReportStep]) -> fmt::Result {
    f.write_str("[")?;
    for (i, step) in steps.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{step}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("make: ")?;
        write_steps(f, &self.make)?;
        f.write_str("; break: ")?;
        write_steps(f, &self.release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_compact() {
        let press = ReportStep::new(
            ReportClass::HidKeyboard,
            vec![
                FieldValue::new("keyboard_left_alt", 1),
                FieldValue::new("key_code1", 0x2B),
            ],
        );
        let sequence = Sequence::new(vec![press.clone()], vec![press.negated()]);
        assert_eq!(
            sequence.to_string(),
            "make: [HidKeyboard{keyboard_left_alt=1, key_code1=43}]; \
             break: [HidKeyboard{keyboard_left_alt=-1, key_code1=-43}]"
        );
    }

    #[test]
    fn encode_writes_cleared_fields_as_zero() -> Result<(), SchemaError> {
        let press = ReportStep::single(ReportClass::HidMouse, "button1", 1);
        assert_eq!(press.encode()?, vec![0x01, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(press.negated().encode()?, vec![0u8; 8]);
        Ok(())
    }

    #[test]
    fn steps_by_stimulus() {
        let sequence = Sequence::new(
            vec![ReportStep::single(ReportClass::HidConsumer, "key_1", 0xCD)],
            Vec::new(),
        );
        assert_eq!(sequence.steps(Stimulus::Make).len(), 1);
        assert!(sequence.steps(Stimulus::Break).is_empty());
        assert!(!sequence.is_single_action());
        assert_eq!(sequence.make_class(), Some(ReportClass::HidConsumer));
        assert!(Sequence::default().is_silent());
    }
}
