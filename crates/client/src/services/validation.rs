//! Draft validation producing human-readable message lists.
//!
//! Validation runs before any network call: a non-empty result means the
//! repository returns `ApiError::Validation` without touching the backend.

use crate::types::{PetDraft, ProductDraft};

/// Maximum number of behavior notes on a pet profile.
pub const MAX_BEHAVIOR_NOTES: usize = 5;

/// Maximum length of a single behavior note, in characters.
pub const MAX_BEHAVIOR_NOTE_LEN: usize = 300;

/// Maximum length of a product title.
pub const MAX_TITLE_LEN: usize = 120;

/// Validate a product draft. Returns an empty list when the draft is
/// acceptable.
#[must_use]
pub fn validate_product_draft(draft: &ProductDraft) -> Vec<String> {
    let mut problems = Vec::new();

    if draft.title.trim().is_empty() {
        problems.push("title is required".to_owned());
    } else if draft.title.chars().count() > MAX_TITLE_LEN {
        problems.push(format!("title must be at most {MAX_TITLE_LEN} characters"));
    }

    if draft.slug.trim().is_empty() {
        problems.push("slug is required".to_owned());
    } else if draft.slug.contains(' ') || draft.slug.contains('\'') {
        problems.push("slug must not contain spaces or apostrophes".to_owned());
    }

    if draft.price.is_sign_negative() {
        problems.push("price must not be negative".to_owned());
    }

    if draft.kind.is_none() {
        problems.push("product kind is required".to_owned());
    }

    problems
}

/// Validate a pet draft. Returns an empty list when the draft is
/// acceptable.
#[must_use]
pub fn validate_pet_draft(draft: &PetDraft) -> Vec<String> {
    let mut problems = Vec::new();

    if draft.name.trim().is_empty() {
        problems.push("name is required".to_owned());
    }

    if draft.behavior_notes.len() > MAX_BEHAVIOR_NOTES {
        problems.push(format!(
            "at most {MAX_BEHAVIOR_NOTES} behavior notes are allowed"
        ));
    }

    for (index, note) in draft.behavior_notes.iter().enumerate() {
        if note.trim().is_empty() {
            problems.push(format!("behavior note {} is empty", index + 1));
        } else if note.chars().count() > MAX_BEHAVIOR_NOTE_LEN {
            problems.push(format!(
                "behavior note {} exceeds {MAX_BEHAVIOR_NOTE_LEN} characters",
                index + 1
            ));
        }
    }

    if let Some(weight) = draft.weight_kg
        && weight.is_sign_negative()
    {
        problems.push("weight must not be negative".to_owned());
    }

    problems
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pawmart_core::{PetGender, ProductKind, Species, Temperament};
    use rust_decimal::Decimal;

    fn valid_product() -> ProductDraft {
        ProductDraft {
            title: "Rope Tug".to_owned(),
            slug: "rope_tug".to_owned(),
            price: Decimal::new(1250, 2),
            stock: 3,
            kind: Some(ProductKind::Toy),
            ..Default::default()
        }
    }

    fn valid_pet() -> PetDraft {
        PetDraft {
            name: "Biscuit".to_owned(),
            species: Species::Dog,
            gender: PetGender::Female,
            temperament: Temperament::Playful,
            birth_date: NaiveDate::from_ymd_opt(2021, 4, 12).unwrap(),
            breed: None,
            weight_kg: None,
            behavior_notes: Vec::new(),
        }
    }

    #[test]
    fn test_valid_product_has_no_problems() {
        assert!(validate_product_draft(&valid_product()).is_empty());
    }

    #[test]
    fn test_product_requires_title_slug_and_kind() {
        let draft = ProductDraft::default();
        let problems = validate_product_draft(&draft);
        assert!(problems.contains(&"title is required".to_owned()));
        assert!(problems.contains(&"slug is required".to_owned()));
        assert!(problems.contains(&"product kind is required".to_owned()));
    }

    #[test]
    fn test_product_rejects_slug_with_spaces() {
        let draft = ProductDraft {
            slug: "rope tug".to_owned(),
            ..valid_product()
        };
        assert!(
            validate_product_draft(&draft)
                .contains(&"slug must not contain spaces or apostrophes".to_owned())
        );
    }

    #[test]
    fn test_product_rejects_negative_price() {
        let draft = ProductDraft {
            price: Decimal::new(-100, 2),
            ..valid_product()
        };
        assert!(validate_product_draft(&draft).contains(&"price must not be negative".to_owned()));
    }

    #[test]
    fn test_valid_pet_has_no_problems() {
        assert!(validate_pet_draft(&valid_pet()).is_empty());
    }

    #[test]
    fn test_pet_rejects_too_many_notes() {
        let draft = PetDraft {
            behavior_notes: vec!["note".to_owned(); 6],
            ..valid_pet()
        };
        assert!(
            validate_pet_draft(&draft)
                .contains(&format!("at most {MAX_BEHAVIOR_NOTES} behavior notes are allowed"))
        );
    }

    #[test]
    fn test_pet_rejects_oversized_note() {
        let draft = PetDraft {
            behavior_notes: vec!["x".repeat(MAX_BEHAVIOR_NOTE_LEN + 1)],
            ..valid_pet()
        };
        let problems = validate_pet_draft(&draft);
        assert_eq!(problems.len(), 1);
        assert!(problems.first().unwrap().contains("exceeds"));
    }

    #[test]
    fn test_pet_messages_are_human_readable() {
        let draft = PetDraft {
            name: "  ".to_owned(),
            ..valid_pet()
        };
        assert_eq!(validate_pet_draft(&draft), vec!["name is required".to_owned()]);
    }
}
