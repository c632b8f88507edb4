use super::join_status::JoinStatus;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Member {
    pub id: i64,
    pub full_name: String,
    pub father_name: String,
    pub zone: String,
    pub mobile_number: String,
    pub address: String,
    pub education: String,
    pub email: String,
    pub cnic: String,
    pub dob: NaiveDate, // ⇔ members.dob (TEXT "YYYY-MM-DD")
    pub district: String,
    pub age: i64,
    pub profession: String,
    pub image: Option<String>, // path handed over by the upload collaborator
    pub active: bool,          // ⇔ members.status ('Y' | 'N')
    pub join_status: JoinStatus,
    pub created_at: String,
}

/// Profile fields as submitted by a caller, before validation.
#[derive(Debug, Clone, Default)]
pub struct MemberForm {
    pub full_name: String,
    pub father_name: String,
    pub zone: String,
    pub mobile_number: String,
    pub address: String,
    pub education: String,
    pub email: String,
    pub cnic: String,
    pub dob: String,
    pub district: String,
    pub age: Option<i64>,
    pub profession: String,
    pub image: Option<String>,
}

/// A form that passed validation and is ready to be written.
#[derive(Debug, Clone)]
pub struct ValidMember {
    pub full_name: String,
    pub father_name: String,
    pub zone: String,
    pub mobile_number: String,
    pub address: String,
    pub education: String,
    pub email: String,
    pub cnic: String,
    pub dob: NaiveDate,
    pub district: String,
    pub age: i64,
    pub profession: String,
    pub image: Option<String>,
}

fn required(field: &str, value: &str, missing: &mut Vec<String>) -> String {
    let v = value.trim();
    if v.is_empty() {
        missing.push(field.to_string());
    }
    v.to_string()
}

/// Accepts `YYYY-MM-DD`, also when followed by a `T...` time part.
pub fn parse_dob(raw: &str) -> AppResult<NaiveDate> {
    let date_part = raw.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(raw.to_string()))
}

impl MemberForm {
    /// Every profile field is mandatory except the image.
    pub fn validate(&self) -> AppResult<ValidMember> {
        let mut missing = Vec::new();

        let full_name = required("full name", &self.full_name, &mut missing);
        let father_name = required("father name", &self.father_name, &mut missing);
        let zone = required("zone", &self.zone, &mut missing);
        let mobile_number = required("mobile number", &self.mobile_number, &mut missing);
        let address = required("address", &self.address, &mut missing);
        let education = required("education", &self.education, &mut missing);
        let email = required("email", &self.email, &mut missing);
        let cnic = required("cnic", &self.cnic, &mut missing);
        let dob_raw = required("date of birth", &self.dob, &mut missing);
        let district = required("district", &self.district, &mut missing);
        let profession = required("profession", &self.profession, &mut missing);

        let age = match self.age {
            Some(a) if a > 0 => a,
            _ => {
                missing.push("age".to_string());
                0
            }
        };

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "all fields are required, missing: {}",
                missing.join(", ")
            )));
        }

        let image = self
            .image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(ValidMember {
            full_name,
            father_name,
            zone,
            mobile_number,
            address,
            education,
            email,
            cnic,
            dob: parse_dob(&dob_raw)?,
            district,
            age,
            profession,
            image,
        })
    }
}
