//! Care service catalog commands.

use clap::Subcommand;
use rust_decimal::Decimal;

use pawmart_client::types::{CareService, CareServiceDraft};
use pawmart_core::ServiceId;

use super::{CliError, Context};

#[derive(Subcommand)]
pub enum ServiceAction {
    /// List the bookable care services
    List,
    /// Show one service
    Show {
        /// Service ID
        id: ServiceId,
    },
    /// Create a service (admin)
    Create {
        #[command(flatten)]
        fields: ServiceFields,
    },
    /// Update a service (admin)
    Update {
        /// Service ID
        id: ServiceId,

        #[command(flatten)]
        fields: ServiceFields,
    },
}

/// Editable service fields shared by create and update.
#[derive(clap::Args)]
pub struct ServiceFields {
    #[arg(long)]
    title: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long)]
    price: Decimal,

    /// Session length in minutes
    #[arg(long)]
    duration: u32,

    /// Hide the service from booking
    #[arg(long)]
    inactive: bool,
}

impl ServiceFields {
    fn into_draft(self) -> CareServiceDraft {
        CareServiceDraft {
            title: self.title,
            description: self.description,
            price: self.price,
            duration_minutes: self.duration,
            active: !self.inactive,
        }
    }
}

pub async fn run(ctx: &Context, action: ServiceAction) -> Result<(), CliError> {
    match action {
        ServiceAction::List => {
            let services = ctx.services.get_services().await?;

            tracing::info!("{} services", services.len());
            for service in &services {
                describe(service);
            }
            Ok(())
        }
        ServiceAction::Show { id } => {
            let service = ctx.services.get_service(id).await?;
            describe(&service);
            tracing::info!("  {}", service.description);
            Ok(())
        }
        ServiceAction::Create { fields } => {
            let service = ctx.services.create_service(&fields.into_draft()).await?;
            tracing::info!("Created service {} ({})", service.title, service.id);
            Ok(())
        }
        ServiceAction::Update { id, fields } => {
            let service = ctx.services.update_service(id, &fields.into_draft()).await?;
            tracing::info!("Updated service {} ({})", service.title, service.id);
            Ok(())
        }
    }
}

fn describe(service: &CareService) {
    tracing::info!(
        "{} {} - {} ({} min{})",
        service.id,
        service.title,
        service.price,
        service.duration_minutes,
        if service.active { "" } else { ", inactive" }
    );
}
