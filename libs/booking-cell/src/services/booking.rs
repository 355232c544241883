use anyhow::Result;
use serde_json::{json, Value};
use tracing::{debug, info};

use payment_cell::services::payment::PaymentService;
use shared_config::AppConfig;
use shared_database::atlas::AtlasClient;
use shared_mailer::{dispatch, templates, MailClient};

use crate::models::{Booking, BookingOutcome, CreateBookingRequest, PaymentConfirmation};

const BOOKINGS: &str = "bookings";

pub struct BookingService {
    store: AtlasClient,
    config: AppConfig,
}

impl BookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: AtlasClient::new(config),
            config: config.clone(),
        }
    }

    /// Create a booking unless the patient already holds one for the same
    /// treatment and day. The existence check and the insert are two store
    /// calls, so two racing identical requests can both pass the check; the
    /// store carries no unique index on the triple.
    pub async fn create_booking(&self, request: CreateBookingRequest) -> Result<BookingOutcome> {
        debug!(
            "Booking {} on {} for {}",
            request.treatment, request.date, request.patient_name
        );

        let duplicate_filter = json!({
            "treatment": &request.treatment,
            "date": &request.date,
            "patientName": &request.patient_name,
        });

        if let Some(existing) = self.store.find_one(BOOKINGS, duplicate_filter).await? {
            info!(
                "Duplicate booking attempt: {} on {} for {}",
                request.treatment, request.date, request.patient_name
            );
            return Ok(BookingOutcome::Duplicate { existing });
        }

        let booking = Booking {
            id: None,
            treatment: request.treatment,
            date: request.date,
            slot: request.slot,
            patient_name: request.patient_name,
            patient_email: request.patient_email,
            phone: request.phone,
            paid: false,
            transaction_id: None,
        };

        let inserted_id = self
            .store
            .insert_one(BOOKINGS, serde_json::to_value(&booking)?)
            .await?;

        info!("Booking created with id {}", inserted_id);

        let message = templates::booking_confirmation(
            &booking.patient_name,
            &booking.patient_email,
            &booking.treatment,
            &booking.date,
            &booking.slot,
        );
        dispatch(MailClient::new(&self.config), message);

        Ok(BookingOutcome::Created {
            inserted_id,
            booking,
        })
    }

    pub async fn list_bookings(&self, patient_email: &str) -> Result<Vec<Value>> {
        debug!("Fetching bookings for {}", patient_email);

        self.store
            .find(BOOKINGS, json!({ "patientEmail": patient_email }))
            .await
    }

    pub async fn get_booking(&self, booking_id: &str) -> Result<Option<Value>> {
        debug!("Fetching booking {}", booking_id);

        self.store
            .find_one(BOOKINGS, json!({ "_id": { "$oid": booking_id } }))
            .await
    }

    /// Record the payment and mark the booking paid. The ledger insert and
    /// the booking patch are independent writes; a crash in between leaves a
    /// recorded payment against an unpaid booking.
    pub async fn confirm_payment(
        &self,
        booking_id: &str,
        confirmation: PaymentConfirmation,
    ) -> Result<Option<Value>> {
        debug!("Confirming payment for booking {}", booking_id);

        let payment_service = PaymentService::new(&self.config);
        payment_service
            .record_payment(booking_id, &confirmation.transaction_id, confirmation.amount)
            .await?;

        self.store
            .update_one(
                BOOKINGS,
                json!({ "_id": { "$oid": booking_id } }),
                json!({ "$set": {
                    "paid": true,
                    "transactionId": confirmation.transaction_id.clone(),
                }}),
                false,
            )
            .await?;

        let updated = self
            .store
            .find_one(BOOKINGS, json!({ "_id": { "$oid": booking_id } }))
            .await?;

        if let Some(booking) = &updated {
            info!("Booking {} marked paid", booking_id);

            if let (Some(name), Some(email), Some(treatment)) = (
                booking["patientName"].as_str(),
                booking["patientEmail"].as_str(),
                booking["treatment"].as_str(),
            ) {
                let message = templates::payment_receipt(
                    name,
                    email,
                    treatment,
                    &confirmation.transaction_id,
                );
                dispatch(MailClient::new(&self.config), message);
            }
        }

        Ok(updated)
    }
}
