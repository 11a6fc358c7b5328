use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Advocate,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Advocate => "advocate",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
}

/// Authenticated identity plus bearer token, as held by the session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserProfile,
    pub token: String,
}

impl Session {
    pub fn user_id(&self) -> i64 {
        self.user.id
    }

    pub fn name(&self) -> &str {
        &self.user.name
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    pub user: UserProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Search form values. Every field is sent as-is; the gateway drops the
/// empty ones so an unset filter never reaches the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvocateSearchFilters {
    pub search: String,
    pub specialization: String,
    pub city: String,
    pub location: String,
    pub min_experience: String,
    pub min_rating: String,
    pub service_type: String,
}

impl AdvocateSearchFilters {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("specialization", self.specialization.clone()),
            ("city", self.city.clone()),
            ("minExperience", self.min_experience.clone()),
            ("location", self.location.clone()),
            ("minRating", self.min_rating.clone()),
            ("serviceType", self.service_type.clone()),
            ("search", self.search.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advocate {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "experience", deserialize_with = "lenient::opt_u32")]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub total_reviews: u32,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub hourly_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_verified: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_available: bool,
}

impl Advocate {
    pub fn rating_label(&self) -> String {
        self.rating
            .map(|rating| format!("{:.1}", rating))
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn place_label(&self) -> String {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => format!("{}, {}", city, state),
            (Some(city), None) => city.to_string(),
            (None, Some(state)) => state.to_string(),
            (None, None) => self
                .location
                .clone()
                .unwrap_or_else(|| "Not specified".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvocateDetail {
    #[serde(flatten)]
    pub advocate: Advocate,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Partial advocate profile, used for self-update and advocate registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvocateProfilePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Online,
    Offline,
    #[default]
    Both,
}

impl ServiceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceType::Online => "online",
            ServiceType::Offline => "offline",
            ServiceType::Both => "both",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "online" => Some(ServiceType::Online),
            "offline" => Some(ServiceType::Offline),
            "both" => Some(ServiceType::Both),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceType::Online => "Online Only",
            ServiceType::Offline => "Offline Only",
            ServiceType::Both => "Both (Online & Offline)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    #[serde(default)]
    pub advocate_id: Option<i64>,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub service_type: ServiceType,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::f64_value")]
    pub price: f64,
    #[serde(alias = "duration", deserialize_with = "lenient::u32_value")]
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePayload {
    pub title: String,
    pub description: String,
    pub service_type: ServiceType,
    pub category: String,
    pub price: f64,
    pub duration_minutes: u32,
}

/// How a single consultation takes place. Unlike [`ServiceType`] a booking
/// is never "both".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingMode {
    #[default]
    Online,
    Offline,
}

impl BookingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingMode::Online => "online",
            BookingMode::Offline => "offline",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "online" => Some(BookingMode::Online),
            "offline" => Some(BookingMode::Offline),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingMode::Online => "Online Consultation",
            BookingMode::Offline => "Offline Meeting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// Status changes an advocate can request from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvocateAction {
    Confirm,
    Decline,
    Complete,
}

impl AdvocateAction {
    pub fn target(self) -> BookingStatus {
        match self {
            AdvocateAction::Confirm => BookingStatus::Confirmed,
            AdvocateAction::Decline => BookingStatus::Cancelled,
            AdvocateAction::Complete => BookingStatus::Completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdvocateAction::Confirm => "Confirm",
            AdvocateAction::Decline => "Cancel",
            AdvocateAction::Complete => "Complete",
        }
    }
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    pub fn user_can_cancel(self) -> bool {
        self == BookingStatus::Pending
    }

    pub fn advocate_actions(self) -> &'static [AdvocateAction] {
        match self {
            BookingStatus::Pending => &[AdvocateAction::Confirm, AdvocateAction::Decline],
            BookingStatus::Confirmed => &[AdvocateAction::Complete],
            BookingStatus::Completed | BookingStatus::Cancelled => &[],
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            BookingStatus::Pending => "badge badge-warning",
            BookingStatus::Confirmed => "badge badge-success",
            BookingStatus::Completed => "badge badge-info",
            BookingStatus::Cancelled => "badge badge-danger",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "badge badge-success",
            PaymentStatus::Failed => "badge badge-danger",
            PaymentStatus::Pending | PaymentStatus::Refunded => "badge badge-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub advocate_id: Option<i64>,
    #[serde(default)]
    pub service_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_date")]
    pub booking_date: Option<NaiveDate>,
    #[serde(default)]
    pub booking_time: Option<String>,
    #[serde(default)]
    pub service_type: BookingMode,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: BookingStatus,
    #[serde(default, deserialize_with = "lenient::payment_status")]
    pub payment_status: PaymentStatus,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub advocate_name: Option<String>,
    #[serde(default, alias = "userName")]
    pub user_name: Option<String>,
    #[serde(default, alias = "serviceName")]
    pub service_title: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub advocate_phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub advocate_id: i64,
    pub service_id: Option<i64>,
    pub booking_date: String,
    pub booking_time: String,
    pub service_type: BookingMode,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    #[serde(default, alias = "bookingId", alias = "id")]
    pub booking_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: BookingStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    #[serde(default)]
    pub advocate_id: Option<i64>,
    #[serde(default, alias = "userName")]
    pub user_name: Option<String>,
    #[serde(deserialize_with = "lenient::u32_value")]
    pub rating: u32,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub advocate_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<i64>,
    pub rating: u32,
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_advocates: u64,
    #[serde(default)]
    pub total_bookings: u64,
    #[serde(default)]
    pub pending_bookings: u64,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_revenue: Option<f64>,
    #[serde(default)]
    pub recent_bookings: Vec<Booking>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyAdvocateRequest {
    pub is_verified: bool,
}

/// Failure of a gateway call: a non-2xx answer (`status` set) or a transport
/// failure (`status` is `None`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    #[serde(default)]
    pub status: Option<u16>,
    pub error: String,
    #[serde(default)]
    pub code: String,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            error: msg.into(),
            code: "HTTP_ERROR".to_string(),
        }
    }

    pub fn network() -> Self {
        Self {
            status: None,
            error: "network".to_string(),
            code: "NETWORK".to_string(),
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            status: None,
            error: msg.into(),
            code: "UNKNOWN".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

/// Deserializers for columns the server sends either as JSON numbers or as
/// numeric strings (DECIMAL, TINYINT flags, DATE as ISO timestamps).
mod lenient {
    use super::PaymentStatus;
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Bool(bool),
        Text(String),
    }

    fn to_f64<E: Error>(raw: Raw) -> Result<Option<f64>, E> {
        match raw {
            Raw::Number(value) => Ok(Some(value)),
            Raw::Bool(value) => Ok(Some(if value { 1.0 } else { 0.0 })),
            Raw::Text(text) if text.trim().is_empty() => Ok(None),
            Raw::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| E::custom(format!("expected a number, got {:?}", text))),
        }
    }

    pub fn opt_f64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
        match Option::<Raw>::deserialize(de)? {
            Some(raw) => to_f64(raw),
            None => Ok(None),
        }
    }

    pub fn f64_value<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
        opt_f64(de)?.ok_or_else(|| D::Error::custom("missing number"))
    }

    pub fn opt_u32<'de, D: Deserializer<'de>>(de: D) -> Result<Option<u32>, D::Error> {
        Ok(opt_f64(de)?.map(|value| value.max(0.0).round() as u32))
    }

    pub fn u32_value<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
        opt_u32(de)?.ok_or_else(|| D::Error::custom("missing number"))
    }

    pub fn u32_or_zero<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
        Ok(opt_u32(de)?.unwrap_or(0))
    }

    pub fn flag<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
        Ok(opt_f64(de)?.map(|value| value != 0.0).unwrap_or(false))
    }

    pub fn opt_date<'de, D: Deserializer<'de>>(de: D) -> Result<Option<NaiveDate>, D::Error> {
        let Some(text) = Option::<String>::deserialize(de)? else {
            return Ok(None);
        };
        let day = text.get(..10).unwrap_or(&text);
        NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected a date, got {:?}", text)))
    }

    pub fn payment_status<'de, D: Deserializer<'de>>(de: D) -> Result<PaymentStatus, D::Error> {
        Ok(Option::<PaymentStatus>::deserialize(de)?.unwrap_or_default())
    }
}
