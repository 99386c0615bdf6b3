use crate::core::cycle::{CycleRules, DATE_FORMAT};
use crate::core::money::{parse_brl, parse_plain_number};
use crate::domain::model::{
    CycleFormSnapshot, CycleType, FieldCheck, NewCycle, NewProduct, ProductFormSnapshot,
};
use crate::domain::ports::FormSnapshot;
use crate::utils::error::{CoopError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_amount, validate_required_field,
};
use chrono::NaiveDate;

impl FieldCheck<'_> {
    pub fn name(&self) -> &'static str {
        match *self {
            FieldCheck::Id { name, .. }
            | FieldCheck::Text { name, .. }
            | FieldCheck::Money { name, .. }
            | FieldCheck::Number { name, .. } => name,
            FieldCheck::Cycle { .. } => "ciclo",
        }
    }

    pub fn check(&self) -> Result<()> {
        match *self {
            FieldCheck::Id { name, value } => {
                let id = validate_required_field(name, &value)?;
                if *id == 0 {
                    return Err(CoopError::InvalidFieldValueError {
                        field: name.to_string(),
                        value: id.to_string(),
                        reason: "No item selected".to_string(),
                    });
                }
                Ok(())
            }
            FieldCheck::Text { name, value } => {
                let text = validate_required_field(name, &value)?;
                validate_non_empty_string(name, text)
            }
            FieldCheck::Money { name, value } => {
                let text = validate_required_field(name, &value)?;
                if !parse_brl(text).is_positive() {
                    return Err(CoopError::InvalidFieldValueError {
                        field: name.to_string(),
                        value: text.to_string(),
                        reason: "Price must be greater than zero".to_string(),
                    });
                }
                Ok(())
            }
            FieldCheck::Number { name, value } => {
                let text = validate_required_field(name, &value)?;
                validate_positive_amount(name, text, parse_plain_number(text)).map(|_| ())
            }
            FieldCheck::Cycle {
                start,
                end,
                cycle_type,
            } => {
                let violations = CycleRules.check_input(start, end, cycle_type);
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(CoopError::InvalidCycle {
                        errors: violations.iter().map(ToString::to_string).collect(),
                    })
                }
            }
        }
    }
}

/// First failing required field, if any.
pub fn validate_form<S: FormSnapshot + ?Sized>(snapshot: &S) -> Result<()> {
    for field in snapshot.fields() {
        if let Err(e) = field.check() {
            tracing::debug!(field = field.name(), error = %e, "form field rejected");
            return Err(e);
        }
    }
    Ok(())
}

pub fn is_form_valid<S: FormSnapshot + ?Sized>(snapshot: &S) -> bool {
    validate_form(snapshot).is_ok()
}

impl FormSnapshot for ProductFormSnapshot {
    type Payload = NewProduct;

    fn fields(&self) -> Vec<FieldCheck<'_>> {
        vec![
            FieldCheck::Id {
                name: "produtoId",
                value: self.product_id,
            },
            FieldCheck::Text {
                name: "medida",
                value: self.unit.as_deref(),
            },
            FieldCheck::Number {
                name: "pesoKg",
                value: self.weight_kg.as_deref(),
            },
            FieldCheck::Money {
                name: "precoBase",
                value: self.base_price.as_deref(),
            },
        ]
    }

    fn to_payload(&self) -> Result<NewProduct> {
        validate_form(self)?;

        let weight_text = self.weight_kg.as_deref().unwrap_or_default();
        Ok(NewProduct {
            product_id: *validate_required_field("produtoId", &self.product_id)?,
            unit: validate_required_field("medida", &self.unit)?.trim().to_string(),
            weight_kg: validate_positive_amount(
                "pesoKg",
                weight_text,
                parse_plain_number(weight_text),
            )?,
            base_price: parse_brl(self.base_price.as_deref().unwrap_or_default()),
            status: self.status,
        })
    }
}

impl FormSnapshot for CycleFormSnapshot {
    type Payload = NewCycle;

    fn fields(&self) -> Vec<FieldCheck<'_>> {
        vec![FieldCheck::Cycle {
            start: self.start.as_deref(),
            end: self.end.as_deref(),
            cycle_type: self.cycle_type.as_deref(),
        }]
    }

    fn to_payload(&self) -> Result<NewCycle> {
        validate_form(self)?;

        let start = parse_field_date("dataInicio", &self.start)?;
        let end = parse_field_date("dataFim", &self.end)?;
        let cycle_type_text = validate_required_field("tipo", &self.cycle_type)?;
        let cycle_type = cycle_type_text
            .parse::<CycleType>()
            .map_err(|reason| CoopError::InvalidFieldValueError {
                field: "tipo".to_string(),
                value: cycle_type_text.clone(),
                reason,
            })?;

        let range = CycleRules.build_range(start, end, cycle_type)?;
        Ok(NewCycle { range })
    }
}

fn parse_field_date(field: &str, value: &Option<String>) -> Result<NaiveDate> {
    let text = validate_required_field(field, value)?;
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|e| {
        CoopError::InvalidFieldValueError {
            field: field.to_string(),
            value: text.clone(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProductStatus;

    fn product(id: Option<u64>, unit: &str, weight: &str, price: &str) -> ProductFormSnapshot {
        ProductFormSnapshot {
            product_id: id,
            unit: Some(unit.to_string()),
            weight_kg: Some(weight.to_string()),
            base_price: Some(price.to_string()),
            status: None,
        }
    }

    #[test]
    fn test_each_failing_field_blocks() {
        assert!(is_form_valid(&product(Some(3), "Unidade", "0.15", "4,50")));
        assert!(!is_form_valid(&product(None, "Unidade", "0.15", "4,50")));
        assert!(!is_form_valid(&product(Some(0), "Unidade", "0.15", "4,50")));
        assert!(!is_form_valid(&product(Some(3), "  ", "0.15", "4,50")));
        assert!(!is_form_valid(&product(Some(3), "Unidade", "0", "4,50")));
        assert!(!is_form_valid(&product(Some(3), "Unidade", "-1", "4,50")));
        assert!(!is_form_valid(&product(Some(3), "Unidade", "abc", "4,50")));
        assert!(!is_form_valid(&product(Some(3), "Unidade", "0.15", "0,00")));
        assert!(!is_form_valid(&product(Some(3), "Unidade", "0.15", "abc")));
    }

    #[test]
    fn test_price_field_needs_positive_amount() {
        let check = |text: &str| FieldCheck::Money {
            name: "precoBase",
            value: Some(text),
        }
        .check();
        assert!(check("0,01").is_ok());
        assert!(check("R$ 1.234").is_ok());
        for text in ["0,00", "", "abc", "-4,50"] {
            match check(text) {
                Err(CoopError::InvalidFieldValueError { field, reason, .. }) => {
                    assert_eq!(field, "precoBase");
                    assert_eq!(reason, "Price must be greater than zero");
                }
                other => panic!("unexpected result for {text:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_validate_form_names_first_failing_field() {
        let err = validate_form(&product(Some(3), "", "", "")).unwrap_err();
        match err {
            CoopError::InvalidFieldValueError { field, .. } => assert_eq!(field, "medida"),
            other => panic!("unexpected error: {other}"),
        }

        let err = validate_form(&ProductFormSnapshot::default()).unwrap_err();
        assert!(matches!(err, CoopError::MissingFieldError { field } if field == "produtoId"));
    }

    #[test]
    fn test_product_payload_is_normalized() {
        let mut snapshot = product(Some(3), " Unidade ", "0,15", "R$ 4,50");
        snapshot.status = Some(ProductStatus::Active);
        let payload = snapshot.to_payload().unwrap();
        assert_eq!(payload.product_id, 3);
        assert_eq!(payload.unit, "Unidade");
        assert_eq!(payload.weight_kg, 0.15);
        assert_eq!(payload.base_price.cents(), 450);
        assert_eq!(payload.status, Some(ProductStatus::Active));
    }

    #[test]
    fn test_cycle_form() {
        let valid = CycleFormSnapshot {
            start: Some("2025-09-01".to_string()),
            end: Some("2025-09-08".to_string()),
            cycle_type: Some("semanal".to_string()),
        };
        assert!(is_form_valid(&valid));
        let payload = valid.to_payload().unwrap();
        assert_eq!(payload.range.cycle_type(), CycleType::Weekly);

        let short = CycleFormSnapshot {
            end: Some("2025-09-07".to_string()),
            ..valid.clone()
        };
        assert!(!is_form_valid(&short));
        assert!(matches!(short.to_payload(), Err(CoopError::InvalidCycle { .. })));
        assert!(!is_form_valid(&CycleFormSnapshot::default()));
    }
}
