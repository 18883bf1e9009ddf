//! `fields` command: print the form catalogue.

use riego_core::field::{FieldInput, FormVariant, Section};
use std::io::Write;

pub fn run_fields(variant: FormVariant, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Formulario {}", variant)?;
    for section in Section::ALL {
        writeln!(out)?;
        writeln!(out, "{}", section.title())?;
        for field in section.fields() {
            let kind = match field.input(variant) {
                FieldInput::Number => "número".to_string(),
                FieldInput::Select(choices) => choices
                    .iter()
                    .map(|c| format!("{}={}", c.value, c.label))
                    .collect::<Vec<_>>()
                    .join(", "),
            };
            writeln!(out, "  --{:<18} {:<30} {}", flag(field.key()), field.label(), kind)?;
        }
    }
    Ok(())
}

/// `tipoCultivo` -> `tipo-cultivo`, matching the `calculate` flags.
pub fn flag(key: &str) -> String {
    let mut flag = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            flag.push('-');
            flag.push(c.to_ascii_lowercase());
        } else {
            flag.push(c);
        }
    }
    flag
}

#[cfg(test)]
mod tests {
    use super::*;
    use riego_core::field::Field;

    #[test]
    fn test_flag() {
        assert_eq!(flag("tipoCultivo"), "tipo-cultivo");
        assert_eq!(flag("radiacionSolar"), "radiacion-solar");
        assert_eq!(flag("superficie"), "superficie");
    }

    #[test]
    fn test_lists_every_field() {
        let mut out = Vec::new();
        run_fields(FormVariant::Numeric, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        for field in Field::ALL {
            assert!(text.contains(&flag(field.key())), "missing {}", field);
        }
        assert!(text.contains("CONDICIONES CLIMÁTICAS"));
        assert!(text.contains("2=Floración"));
    }

    #[test]
    fn test_categorical_lists_wind_codes() {
        let mut out = Vec::new();
        run_fields(FormVariant::Categorical, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("3=Viento fuerte"));

        let mut out = Vec::new();
        run_fields(FormVariant::Numeric, &mut out).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains("Viento fuerte"));
    }
}
