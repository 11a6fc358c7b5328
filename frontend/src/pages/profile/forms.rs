use crate::api::{AdvocateProfilePayload, ProfileUpdate, Session};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ProfileForm {
    pub fn from_session(session: Option<&Session>) -> Self {
        session
            .map(|session| Self {
                name: session.user.name.clone(),
                email: session.user.email.clone(),
                phone: session.user.phone.clone().unwrap_or_default(),
            })
            .unwrap_or_default()
    }

    pub fn to_update(&self) -> Result<ProfileUpdate, String> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            return Err("Name is required".into());
        }
        if email.is_empty() || !email.contains('@') {
            return Err("Please enter a valid email address".into());
        }
        Ok(ProfileUpdate {
            name: name.to_string(),
            email: email.to_string(),
            phone: self.phone.trim().to_string(),
        })
    }
}

/// Professional details an advocate adds after signing up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvocateProfileForm {
    pub specialization: String,
    pub city: String,
    pub state: String,
    pub experience_years: String,
    pub hourly_rate: String,
    pub bio: String,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl AdvocateProfileForm {
    pub fn to_payload(&self) -> Result<AdvocateProfilePayload, String> {
        let specialization =
            optional(&self.specialization).ok_or_else(|| "Specialization is required".to_string())?;
        let experience_years = match optional(&self.experience_years) {
            None => None,
            Some(years) => Some(
                years
                    .parse::<u32>()
                    .map_err(|_| "Experience must be a whole number of years".to_string())?,
            ),
        };
        let hourly_rate = match optional(&self.hourly_rate) {
            None => None,
            Some(rate) => match rate.parse::<f64>() {
                Ok(rate) if rate >= 0.0 => Some(rate),
                _ => return Err("Hourly rate must be a positive amount".into()),
            },
        };
        Ok(AdvocateProfilePayload {
            specialization: Some(specialization),
            city: optional(&self.city),
            state: optional(&self.state),
            experience_years,
            hourly_rate,
            bio: optional(&self.bio),
            is_available: Some(true),
            ..Default::default()
        })
    }
}
