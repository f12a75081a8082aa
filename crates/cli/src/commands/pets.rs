//! Pet profile commands.

use chrono::NaiveDate;
use clap::Subcommand;
use rust_decimal::Decimal;

use pawmart_client::api::pets::{DEFAULT_PAGE_SIZE, PetFilter};
use pawmart_client::types::PetDraft;
use pawmart_core::{PetGender, PetId, Species, Temperament};

use super::{CliError, Context};

#[derive(Subcommand)]
pub enum PetAction {
    /// List pet profiles
    List {
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Items per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: u32,
    },
    /// Show one pet profile
    Show {
        /// Pet ID
        id: PetId,
    },
    /// Create a pet profile
    Create {
        #[arg(long)]
        name: String,

        /// Species (dog, cat, bird, rabbit, other)
        #[arg(long)]
        species: Species,

        /// Gender (male, female)
        #[arg(long)]
        gender: PetGender,

        /// Temperament (calm, friendly, playful, nervous, aggressive)
        #[arg(long, default_value = "calm")]
        temperament: Temperament,

        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: NaiveDate,

        #[arg(long)]
        breed: Option<String>,

        /// Weight in kilograms
        #[arg(long)]
        weight_kg: Option<Decimal>,

        /// Behavior note; repeat for several (max 5)
        #[arg(long = "note")]
        behavior_notes: Vec<String>,
    },
    /// Delete a pet profile
    Delete {
        /// Pet ID
        id: PetId,
    },
}

pub async fn run(ctx: &Context, action: PetAction) -> Result<(), CliError> {
    match action {
        PetAction::List { page, limit } => {
            let result = ctx.pets.get_pets(&PetFilter { page, limit }).await?;

            tracing::info!(
                "{} pets (page {}/{}, {} total)",
                result.pets.len(),
                page,
                result.pages,
                result.total
            );
            for pet in &result.pets {
                tracing::info!("{} {} ({}, born {})", pet.id, pet.name, pet.species, pet.birth_date);
            }
            Ok(())
        }
        PetAction::Show { id } => {
            let pet = ctx.pets.get_pet(id).await?;
            tracing::info!(
                "{} ({}, {:?}, born {})",
                pet.name,
                pet.species,
                pet.temperament,
                pet.birth_date
            );
            if let Some(breed) = &pet.breed {
                tracing::info!("  breed: {breed}");
            }
            for note in &pet.behavior_notes {
                tracing::info!("  note: {note}");
            }
            Ok(())
        }
        PetAction::Create {
            name,
            species,
            gender,
            temperament,
            birth_date,
            breed,
            weight_kg,
            behavior_notes,
        } => {
            let draft = PetDraft {
                name,
                species,
                gender,
                temperament,
                birth_date,
                breed,
                weight_kg,
                behavior_notes,
            };
            let pet = ctx.pets.create_pet(&draft).await?;
            tracing::info!("Created pet {} ({})", pet.name, pet.id);
            Ok(())
        }
        PetAction::Delete { id } => {
            ctx.pets.delete_pet(id).await?;
            tracing::info!("Deleted pet {id}");
            Ok(())
        }
    }
}
