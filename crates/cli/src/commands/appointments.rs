//! Care service and appointment commands.

use chrono::{DateTime, Utc};
use clap::Subcommand;

use pawmart_client::types::AppointmentRequest;
use pawmart_core::{AppointmentId, PetId, ServiceId};

use super::{CliError, Context};

#[derive(Subcommand)]
pub enum AppointmentAction {
    /// List appointments for a pet
    List {
        #[arg(long)]
        pet: PetId,
    },
    /// Book an appointment
    Book {
        #[arg(long)]
        pet: PetId,

        #[arg(long)]
        service: ServiceId,

        /// Scheduled time (RFC 3339, e.g. 2025-03-10T14:30:00Z)
        #[arg(long)]
        at: DateTime<Utc>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Cancel an appointment
    Cancel {
        /// Appointment ID
        id: AppointmentId,
    },
}

pub async fn run(ctx: &Context, action: AppointmentAction) -> Result<(), CliError> {
    match action {
        AppointmentAction::List { pet } => {
            let appointments = ctx.appointments.list_for_pet(pet).await?;

            tracing::info!("{} appointments", appointments.len());
            for appointment in &appointments {
                tracing::info!(
                    "{} {} - {} ({})",
                    appointment.id,
                    appointment.scheduled_for,
                    appointment.status,
                    appointment.notes.as_deref().unwrap_or("-")
                );
            }
            Ok(())
        }
        AppointmentAction::Book {
            pet,
            service,
            at,
            notes,
        } => {
            let request = AppointmentRequest {
                pet_id: pet,
                service_id: service,
                scheduled_for: at,
                notes,
            };
            let appointment = ctx.appointments.book(&request).await?;
            tracing::info!(
                "Booked appointment {} for {}",
                appointment.id,
                appointment.scheduled_for
            );
            Ok(())
        }
        AppointmentAction::Cancel { id } => {
            let appointment = ctx.appointments.cancel(id).await?;
            tracing::info!("Appointment {} is now {}", appointment.id, appointment.status);
            Ok(())
        }
    }
}
