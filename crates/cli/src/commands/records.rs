//! Pet history record commands.

use chrono::NaiveDate;
use clap::Subcommand;
use rust_decimal::Decimal;

use pawmart_client::types::{NewGroomingRecord, NewMedicalRecord, NewVaccination};
use pawmart_core::PetId;

use super::{CliError, Context};

#[derive(Subcommand)]
pub enum RecordAction {
    /// Medical visit history
    Medical {
        #[command(subcommand)]
        action: MedicalAction,
    },
    /// Vaccination history
    Vaccination {
        #[command(subcommand)]
        action: VaccinationAction,
    },
    /// Grooming session history
    Grooming {
        #[command(subcommand)]
        action: GroomingAction,
    },
}

#[derive(Subcommand)]
pub enum MedicalAction {
    /// List a pet's medical visits
    List {
        #[arg(long)]
        pet: PetId,
    },
    /// Append a medical visit
    Add {
        #[arg(long)]
        pet: PetId,

        /// Visit date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        #[arg(long)]
        diagnosis: String,

        #[arg(long)]
        treatment: String,

        #[arg(long)]
        vet: Option<String>,

        #[arg(long)]
        cost: Option<Decimal>,
    },
}

#[derive(Subcommand)]
pub enum VaccinationAction {
    /// List a pet's vaccinations
    List {
        #[arg(long)]
        pet: PetId,
    },
    /// Append a vaccination
    Add {
        #[arg(long)]
        pet: PetId,

        /// Administration date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        #[arg(long)]
        vaccine: String,

        #[arg(long)]
        batch: Option<String>,

        /// Next due date (YYYY-MM-DD)
        #[arg(long)]
        next_due: Option<NaiveDate>,

        #[arg(long)]
        cost: Option<Decimal>,
    },
}

#[derive(Subcommand)]
pub enum GroomingAction {
    /// List a pet's grooming sessions
    List {
        #[arg(long)]
        pet: PetId,
    },
    /// Append a grooming session
    Add {
        #[arg(long)]
        pet: PetId,

        /// Session date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// What was performed (e.g. "bath, cut, nails")
        #[arg(long)]
        services: String,

        #[arg(long)]
        groomer: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        cost: Option<Decimal>,
    },
}

pub async fn run(ctx: &Context, action: RecordAction) -> Result<(), CliError> {
    match action {
        RecordAction::Medical { action } => medical(ctx, action).await,
        RecordAction::Vaccination { action } => vaccination(ctx, action).await,
        RecordAction::Grooming { action } => grooming(ctx, action).await,
    }
}

async fn medical(ctx: &Context, action: MedicalAction) -> Result<(), CliError> {
    match action {
        MedicalAction::List { pet } => {
            let records = ctx.records.medical_history(pet).await?;
            tracing::info!("{} medical visits", records.len());
            for record in &records {
                tracing::info!("{}: {} / {}", record.visit_date, record.diagnosis, record.treatment);
            }
            Ok(())
        }
        MedicalAction::Add {
            pet,
            date,
            diagnosis,
            treatment,
            vet,
            cost,
        } => {
            let entry = NewMedicalRecord {
                visit_date: date,
                diagnosis,
                treatment,
                vet_name: vet,
                cost,
            };
            let record = ctx.records.add_medical(pet, &entry).await?;
            tracing::info!("Recorded medical visit {} on {}", record.id, record.visit_date);
            Ok(())
        }
    }
}

async fn vaccination(ctx: &Context, action: VaccinationAction) -> Result<(), CliError> {
    match action {
        VaccinationAction::List { pet } => {
            let records = ctx.records.vaccinations(pet).await?;
            tracing::info!("{} vaccinations", records.len());
            for record in &records {
                match record.next_due {
                    Some(due) => tracing::info!(
                        "{}: {} (next due {})",
                        record.administered_on,
                        record.vaccine,
                        due
                    ),
                    None => tracing::info!("{}: {}", record.administered_on, record.vaccine),
                }
            }
            Ok(())
        }
        VaccinationAction::Add {
            pet,
            date,
            vaccine,
            batch,
            next_due,
            cost,
        } => {
            let entry = NewVaccination {
                administered_on: date,
                vaccine,
                batch,
                next_due,
                cost,
            };
            let record = ctx.records.add_vaccination(pet, &entry).await?;
            tracing::info!("Recorded vaccination {} on {}", record.id, record.administered_on);
            Ok(())
        }
    }
}

async fn grooming(ctx: &Context, action: GroomingAction) -> Result<(), CliError> {
    match action {
        GroomingAction::List { pet } => {
            let records = ctx.records.grooming_history(pet).await?;
            tracing::info!("{} grooming sessions", records.len());
            for record in &records {
                tracing::info!("{}: {}", record.session_date, record.services_performed);
            }
            Ok(())
        }
        GroomingAction::Add {
            pet,
            date,
            services,
            groomer,
            notes,
            cost,
        } => {
            let entry = NewGroomingRecord {
                session_date: date,
                services_performed: services,
                groomer,
                notes,
                cost,
            };
            let record = ctx.records.add_grooming(pet, &entry).await?;
            tracing::info!("Recorded grooming session {} on {}", record.id, record.session_date);
            Ok(())
        }
    }
}
