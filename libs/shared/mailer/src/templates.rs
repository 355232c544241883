use crate::mailer::EmailMessage;

pub fn booking_confirmation(
    patient_name: &str,
    patient_email: &str,
    treatment: &str,
    date: &str,
    slot: &str,
) -> EmailMessage {
    let subject = format!("Your appointment for {} is confirmed", treatment);
    let text = format!(
        "Hello {},\n\nYour appointment for {} on {} at {} is confirmed.\n\nDoctors Portal",
        patient_name, treatment, date, slot
    );
    let html = format!(
        r#"<div>
  <p>Hello {patient_name},</p>
  <p>Your appointment for <b>{treatment}</b> is confirmed.</p>
  <p>Please arrive on {date} for your {slot} slot.</p>
  <p>Doctors Portal</p>
</div>"#
    );

    EmailMessage {
        to: patient_email.to_string(),
        subject,
        html,
        text,
    }
}

pub fn payment_receipt(
    patient_name: &str,
    patient_email: &str,
    treatment: &str,
    transaction_id: &str,
) -> EmailMessage {
    let subject = format!("We have received your payment for {}", treatment);
    let text = format!(
        "Hello {},\n\nWe have received your payment for {}. Transaction id: {}.\n\nDoctors Portal",
        patient_name, treatment, transaction_id
    );
    let html = format!(
        r#"<div>
  <p>Hello {patient_name},</p>
  <p>We have received your payment for <b>{treatment}</b>.</p>
  <p>Transaction id: <code>{transaction_id}</code></p>
  <p>Doctors Portal</p>
</div>"#
    );

    EmailMessage {
        to: patient_email.to_string(),
        subject,
        html,
        text,
    }
}
