//! Form state for the corbel inputs
//!
//! Text fields are kept as strings while the user types and parsed into a
//! [`CorbelInput`] only on submission.

use corbel_core::calculations::CorbelInput;
use corbel_core::errors::{CalcError, CalcResult};

/// The editable numeric fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Fed,
    Hed,
    B,
    H,
    D1,
    Fyk,
    Fck,
}

impl Field {
    /// Left column then right column, as laid out in the form
    pub const LEFT: [Field; 4] = [Field::Fed, Field::B, Field::D1, Field::Fyk];
    pub const RIGHT: [Field; 3] = [Field::Hed, Field::H, Field::Fck];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Fed => "Vertical force Fed (kN)",
            Field::Hed => "Horizontal force Hed (kN)",
            Field::B => "Width b (m)",
            Field::H => "Total depth h (m)",
            Field::D1 => "Cover d1 (m)",
            Field::Fyk => "Steel strength fyk (MPa)",
            Field::Fck => "Concrete strength fck (MPa)",
        }
    }

    /// Field name as used in [`CorbelInput`] and error messages
    pub fn key(&self) -> &'static str {
        match self {
            Field::Fed => "fed_kn",
            Field::Hed => "hed_kn",
            Field::B => "b_m",
            Field::H => "h_m",
            Field::D1 => "d1_m",
            Field::Fyk => "fyk_mpa",
            Field::Fck => "fck_mpa",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormFields {
    pub label: String,
    fed: String,
    hed: String,
    b: String,
    h: String,
    d1: String,
    fyk: String,
    fck: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self::from_input(&CorbelInput::default())
    }
}

impl FormFields {
    pub fn from_input(input: &CorbelInput) -> Self {
        FormFields {
            label: input.label.clone(),
            fed: input.fed_kn.to_string(),
            hed: input.hed_kn.to_string(),
            b: input.b_m.to_string(),
            h: input.h_m.to_string(),
            d1: input.d1_m.to_string(),
            fyk: input.fyk_mpa.to_string(),
            fck: input.fck_mpa.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Fed => &self.fed,
            Field::Hed => &self.hed,
            Field::B => &self.b,
            Field::H => &self.h,
            Field::D1 => &self.d1,
            Field::Fyk => &self.fyk,
            Field::Fck => &self.fck,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Fed => &mut self.fed,
            Field::Hed => &mut self.hed,
            Field::B => &mut self.b,
            Field::H => &mut self.h,
            Field::D1 => &mut self.d1,
            Field::Fyk => &mut self.fyk,
            Field::Fck => &mut self.fck,
        };
        *slot = value;
    }

    fn parse(&self, field: Field) -> CalcResult<f64> {
        let raw = self.get(field).trim();
        // Accept a decimal comma as typed on French keyboards
        raw.replace(',', ".")
            .parse::<f64>()
            .map_err(|_| CalcError::invalid_input(field.key(), raw, "Not a number"))
    }

    /// Parse every field into a [`CorbelInput`]
    pub fn to_input(&self) -> CalcResult<CorbelInput> {
        Ok(CorbelInput {
            label: self.label.clone(),
            fed_kn: self.parse(Field::Fed)?,
            hed_kn: self.parse(Field::Hed)?,
            b_m: self.parse(Field::B)?,
            h_m: self.parse(Field::H)?,
            d1_m: self.parse(Field::D1)?,
            fyk_mpa: self.parse(Field::Fyk)?,
            fck_mpa: self.parse(Field::Fck)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_back() {
        let fields = FormFields::default();
        assert_eq!(fields.get(Field::Fed), "32.25");
        assert_eq!(fields.to_input().unwrap(), CorbelInput::default());
    }

    #[test]
    fn test_decimal_comma() {
        let mut fields = FormFields::default();
        fields.set(Field::H, "0,2".to_string());
        assert_eq!(fields.to_input().unwrap().h_m, 0.2);
    }

    #[test]
    fn test_bad_number_names_field() {
        let mut fields = FormFields::default();
        fields.set(Field::Fck, "abc".to_string());
        match fields.to_input() {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "fck_mpa"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_layout_covers_every_field() {
        assert_eq!(Field::LEFT.len() + Field::RIGHT.len(), 7);
    }
}
