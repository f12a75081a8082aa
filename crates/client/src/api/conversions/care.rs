//! Care service and appointment conversion functions.

use pawmart_core::Price;

use crate::api::appointments::ApiAppointment;
use crate::api::care::ApiCareService;
use crate::types::{Appointment, CareService};

use super::DEFAULT_CURRENCY;

/// Convert a transport care service into its domain form.
pub(crate) fn convert_care_service(service: ApiCareService) -> CareService {
    CareService {
        id: service.id,
        title: service.title,
        description: service.description,
        price: Price::new(service.price, DEFAULT_CURRENCY),
        duration_minutes: service.duration_minutes,
        active: service.active,
    }
}

/// Convert a transport appointment into its domain form.
pub(crate) fn convert_appointment(appointment: ApiAppointment) -> Appointment {
    Appointment {
        id: appointment.id,
        pet_id: appointment.pet_id,
        service_id: appointment.service_id,
        scheduled_for: appointment.scheduled_for,
        status: appointment.status,
        notes: appointment.notes,
    }
}
