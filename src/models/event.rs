use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Event {
    pub id: i64,
    pub event_name: String,
    pub date: NaiveDate, // ⇔ events.date (TEXT "YYYY-MM-DD")
    pub location: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub event_type: Option<String>,
    pub focal_person_name: String,
    pub focal_person_number: String,
    pub focal_person_email: String,
    pub info_person_name: Option<String>,
    pub info_person_number: Option<String>,
    pub info_person_email: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub present_time: Option<String>,
    pub end_note: Option<String>,
    pub active: bool, // ⇔ events.status ('Y' | 'N')
    pub created_at: String,
}

impl Event {
    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    pub fn is_ended(&self) -> bool {
        self.end_time.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub event_name: String,
    pub date: String,
    pub location: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub event_type: Option<String>,
    pub focal_person_name: String,
    pub focal_person_number: String,
    pub focal_person_email: String,
    pub info_person_name: Option<String>,
    pub info_person_number: Option<String>,
    pub info_person_email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ValidEvent {
    pub event_name: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub event_type: Option<String>,
    pub focal_person_name: String,
    pub focal_person_number: String,
    pub focal_person_email: String,
    pub info_person_name: Option<String>,
    pub info_person_number: Option<String>,
    pub info_person_email: Option<String>,
}

fn optional(v: &Option<String>) -> Option<String> {
    v.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl EventForm {
    pub fn validate(&self) -> AppResult<ValidEvent> {
        let fields = [
            ("event name", &self.event_name),
            ("date", &self.date),
            ("location", &self.location),
            ("focal person name", &self.focal_person_name),
            ("focal person number", &self.focal_person_number),
            ("focal person email", &self.focal_person_email),
        ];

        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "provide all required fields, missing: {}",
                missing.join(", ")
            )));
        }

        let date_raw = self.date.trim();
        let date = NaiveDate::parse_from_str(date_raw.split('T').next().unwrap_or(date_raw), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(self.date.clone()))?;

        Ok(ValidEvent {
            event_name: self.event_name.trim().to_string(),
            date,
            location: self.location.trim().to_string(),
            description: optional(&self.description),
            image: optional(&self.image),
            event_type: optional(&self.event_type),
            focal_person_name: self.focal_person_name.trim().to_string(),
            focal_person_number: self.focal_person_number.trim().to_string(),
            focal_person_email: self.focal_person_email.trim().to_string(),
            info_person_name: optional(&self.info_person_name),
            info_person_number: optional(&self.info_person_number),
            info_person_email: optional(&self.info_person_email),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focal_person_is_required() {
        let form = EventForm {
            event_name: "Annual Gathering".into(),
            date: "2025-03-01".into(),
            location: "Town Hall".into(),
            focal_person_name: "Bilal".into(),
            ..Default::default()
        };

        let err = form.validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("focal person number"));
        assert!(msg.contains("focal person email"));
        assert!(!msg.contains("location"));
    }

    #[test]
    fn optional_blank_fields_become_none() {
        let form = EventForm {
            event_name: " Annual Gathering ".into(),
            date: "2025-03-01".into(),
            location: "Town Hall".into(),
            description: Some("  ".into()),
            focal_person_name: "Bilal".into(),
            focal_person_number: "0300".into(),
            focal_person_email: "bilal@example.org".into(),
            ..Default::default()
        };

        let v = form.validate().unwrap();
        assert_eq!(v.event_name, "Annual Gathering");
        assert_eq!(v.description, None);
    }
}
