use super::*;
use crate::api::test_support::mock::*;
use crate::state::session::SessionStore;
use serde_json::json;

fn user_json(id: i64, role: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Ravi Kumar",
        "email": "ravi@example.com",
        "phone": "9800000000",
        "role": role
    })
}

fn advocate_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Asha Rao",
        "specialization": "Family Law",
        "city": "Pune",
        "state": "MH",
        "experience_years": 12,
        "rating": "4.50",
        "total_reviews": 8,
        "hourly_rate": "1500.00",
        "is_verified": 1,
        "is_available": 1
    })
}

fn service_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "advocate_id": 7,
        "title": "Consultation",
        "description": "45 minute call",
        "service_type": "both",
        "category": "Family",
        "price": "1500.00",
        "duration_minutes": 45
    })
}

fn booking_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": 11,
        "advocate_id": 7,
        "service_id": 3,
        "booking_date": "2030-05-17",
        "booking_time": "14:30:00",
        "service_type": "online",
        "notes": "",
        "status": status,
        "payment_status": "pending",
        "total_amount": "1500.00",
        "advocate_name": "Asha Rao",
        "service_title": "Consultation"
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

fn signed_in_client(server: &MockServer, token: &str) -> ApiClient {
    let session = SessionStore::in_memory();
    session
        .set(
            serde_json::from_value(user_json(11, "user")).unwrap(),
            token.to_string(),
        )
        .unwrap();
    ApiClient::with_session(server.url("/api"), session)
}

#[tokio::test]
async fn login_persists_session_and_attaches_bearer_afterwards() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(200)
            .json_body(json!({ "token": "jwt-abc", "user": user_json(11, "user") }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/bookings/my-bookings");
        then.status(200).json_body(json!([]));
    });

    let client = api_client(&server);
    client.my_bookings().await.unwrap();
    assert_eq!(
        server
            .last(&GET, "/api/bookings/my-bookings")
            .unwrap()
            .authorization,
        None
    );

    let response = client
        .login(&LoginRequest {
            email: "ravi@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert_eq!(response.user.role, Role::User);
    let login = server.last(&POST, "/api/auth/login").unwrap();
    assert_eq!(login.body.unwrap()["email"], "ravi@example.com");
    assert_eq!(client.session().current().unwrap().token, "jwt-abc");

    client.my_bookings().await.unwrap();
    assert_eq!(
        server
            .last(&GET, "/api/bookings/my-bookings")
            .unwrap()
            .authorization
            .as_deref(),
        Some("Bearer jwt-abc")
    );

    client.logout();
    assert!(client.session().current().is_none());
}

#[tokio::test]
async fn register_without_token_leaves_session_empty() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/register");
        then.status(201)
            .json_body(json!({ "user": user_json(12, "advocate") }));
    });

    let client = api_client(&server);
    let response = client
        .register(&RegisterRequest {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            password: "secret".into(),
            phone: String::new(),
            role: Role::Advocate,
        })
        .await
        .unwrap();
    assert_eq!(response.user.id, 12);
    assert!(client.session().current().is_none());
    let body = server.last(&POST, "/api/auth/register").unwrap().body.unwrap();
    assert_eq!(body["role"], "advocate");
}

#[tokio::test]
async fn failed_login_reports_server_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401)
            .json_body(json!({ "message": "Invalid credentials" }));
    });

    let client = api_client(&server);
    let err = client
        .login(&LoginRequest {
            email: "ravi@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.status, Some(401));
    assert_eq!(err.error, "Invalid credentials");
    assert!(client.session().current().is_none());
}

#[tokio::test]
async fn unauthorized_response_does_not_clear_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/bookings/my-bookings");
        then.status(401).json_body(json!({ "error": "Token expired" }));
    });

    let client = signed_in_client(&server, "jwt-old");
    let err = client.my_bookings().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.error, "Token expired");
    assert!(client.session().current().is_some());
}

#[tokio::test]
async fn update_profile_merges_into_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PUT).path("/api/auth/profile");
        then.status(200).json_body(json!({ "message": "Profile updated" }));
    });

    let client = signed_in_client(&server, "jwt");
    let session = client
        .update_profile(&ProfileUpdate {
            name: "Ravi K".into(),
            email: "ravi.k@example.com".into(),
            phone: "9811111111".into(),
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(session.name(), "Ravi K");
    assert_eq!(session.user.phone.as_deref(), Some("9811111111"));
    assert_eq!(session.token, "jwt");
}

#[tokio::test]
async fn advocate_search_drops_empty_filters() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/advocates");
        then.status(200).json_body(json!([advocate_json(7)]));
    });

    let client = api_client(&server);
    let advocates = client
        .search_advocates(&AdvocateSearchFilters::default())
        .await
        .unwrap();
    assert_eq!(advocates.len(), 1);
    assert_eq!(advocates[0].rating, Some(4.5));
    assert_eq!(server.last(&GET, "/api/advocates").unwrap().query, None);

    client
        .search_advocates(&AdvocateSearchFilters {
            city: "Pune".into(),
            min_rating: "4".into(),
            ..AdvocateSearchFilters::default()
        })
        .await
        .unwrap();
    assert_eq!(
        server.last(&GET, "/api/advocates").unwrap().query.as_deref(),
        Some("city=Pune&minRating=4")
    );
}

#[tokio::test]
async fn advocate_profile_services_and_reviews_endpoints_succeed() {
    let server = MockServer::start_async().await;
    let mut detail = advocate_json(7);
    detail["services"] = json!([service_json(3)]);
    detail["reviews"] = json!([{
        "id": 1,
        "advocate_id": 7,
        "user_name": "Ravi Kumar",
        "rating": 5,
        "comment": "Very helpful",
        "created_at": "2030-01-01T10:00:00Z"
    }]);

    server.mock(|when, then| {
        when.method(GET).path("/api/advocates/7");
        then.status(200).json_body(detail.clone());
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/advocates/7");
        then.status(200).json_body(json!({ "message": "updated" }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/advocates/register");
        then.status(201).json_body(json!({ "message": "registered" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/services/my-services");
        then.status(200).json_body(json!([service_json(3)]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/services/advocate/7");
        then.status(200).json_body(json!([service_json(3)]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/services");
        then.status(201).json_body(json!({ "id": 4 }));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/services/3");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/services/3");
        then.status(204).json_body(serde_json::Value::Null);
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/reviews");
        then.status(201).json_body(json!({ "message": "thanks" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/reviews/advocate/7");
        then.status(200).json_body(detail["reviews"].clone());
    });

    let client = signed_in_client(&server, "jwt");
    let fetched = client.get_advocate(7).await.unwrap();
    assert_eq!(fetched.advocate.name, "Asha Rao");
    assert_eq!(fetched.services[0].price, 1500.0);
    assert_eq!(fetched.reviews[0].rating, 5);

    let payload = AdvocateProfilePayload {
        city: Some("Mumbai".into()),
        ..AdvocateProfilePayload::default()
    };
    client.update_advocate(7, &payload).await.unwrap();
    assert_eq!(
        server.last(&PUT, "/api/advocates/7").unwrap().body.unwrap(),
        json!({ "city": "Mumbai" })
    );
    client.register_advocate(&payload).await.unwrap();

    assert_eq!(client.my_services().await.unwrap().len(), 1);
    assert_eq!(client.services_for_advocate(7).await.unwrap()[0].id, 3);
    let service = ServicePayload {
        title: "Consultation".into(),
        description: "45 minute call".into(),
        service_type: ServiceType::Online,
        category: String::new(),
        price: 1500.0,
        duration_minutes: 45,
    };
    client.create_service(&service).await.unwrap();
    assert_eq!(
        server.last(&POST, "/api/services").unwrap().body.unwrap()["service_type"],
        "online"
    );
    client.update_service(3, &service).await.unwrap();
    assert_eq!(
        client.delete_service(3).await.unwrap(),
        serde_json::Value::Null
    );

    client
        .create_review(&CreateReviewRequest {
            advocate_id: 7,
            booking_id: Some(42),
            rating: 5,
            comment: "Very helpful".into(),
        })
        .await
        .unwrap();
    assert_eq!(
        client.advocate_reviews(7).await.unwrap()[0].user_name.as_deref(),
        Some("Ravi Kumar")
    );
}

#[tokio::test]
async fn booking_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/bookings");
        then.status(201)
            .json_body(json!({ "message": "Booking created", "bookingId": 42 }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/bookings/my-bookings");
        then.status(200).json_body(json!([booking_json(42, "pending")]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/bookings/advocate-bookings");
        then.status(200).json_body(json!([booking_json(42, "pending")]));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/bookings/42/status");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(PATCH).path("/api/bookings/42/cancel");
        then.status(200).json_body(json!({}));
    });

    let client = signed_in_client(&server, "jwt");
    let created = client
        .create_booking(&CreateBookingRequest {
            advocate_id: 7,
            service_id: Some(3),
            booking_date: "2030-05-17".into(),
            booking_time: "14:30:00".into(),
            service_type: BookingMode::Online,
            notes: String::new(),
        })
        .await
        .unwrap();
    assert_eq!(created.booking_id, Some(42));

    assert_eq!(client.my_bookings().await.unwrap()[0].status, BookingStatus::Pending);
    assert_eq!(client.advocate_bookings().await.unwrap().len(), 1);

    client
        .update_booking_status(42, BookingStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(
        server
            .last(&PUT, "/api/bookings/42/status")
            .unwrap()
            .body
            .unwrap(),
        json!({ "status": "confirmed" })
    );
    client.cancel_booking(42).await.unwrap();
    assert_eq!(server.hits(&PATCH, "/api/bookings/42/cancel"), 1);
}

#[tokio::test]
async fn admin_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/dashboard");
        then.status(200).json_body(json!({
            "totalUsers": 10,
            "totalAdvocates": 4,
            "totalBookings": 20,
            "pendingBookings": 3,
            "totalRevenue": 45000,
            "recentBookings": [booking_json(42, "pending")]
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/users");
        then.status(200).json_body(json!([user_json(11, "user")]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/advocates");
        then.status(200).json_body(json!([advocate_json(7)]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/bookings");
        then.status(200).json_body(json!([booking_json(42, "completed")]));
    });
    server.mock(|when, then| {
        when.method(PATCH).path("/api/admin/advocates/7/verify");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/admin/users/11");
        then.status(200).json_body(json!({}));
    });

    let client = signed_in_client(&server, "jwt-admin");
    let stats = client.admin_stats().await.unwrap();
    assert_eq!(stats.total_revenue, Some(45000.0));
    assert_eq!(stats.recent_bookings.len(), 1);
    assert_eq!(client.admin_users().await.unwrap()[0].role, Role::User);
    assert!(client.admin_advocates().await.unwrap()[0].is_verified);
    assert_eq!(
        client.admin_bookings().await.unwrap()[0].status,
        BookingStatus::Completed
    );
    client.verify_advocate(7, false).await.unwrap();
    assert_eq!(
        server
            .last(&PATCH, "/api/admin/advocates/7/verify")
            .unwrap()
            .body
            .unwrap(),
        json!({ "is_verified": false })
    );
    client.delete_user(11).await.unwrap();
    assert_eq!(
        server
            .last(&DELETE, "/api/admin/users/11")
            .unwrap()
            .authorization
            .as_deref(),
        Some("Bearer jwt-admin")
    );
}

#[tokio::test]
async fn transport_failure_maps_to_network_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/advocates/7");
        then.network_error();
    });

    let client = api_client(&server);
    let err = client.get_advocate(7).await.unwrap_err();
    assert_eq!(err, ApiError::network());
}

#[tokio::test]
async fn error_without_body_message_uses_status_fallback() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/dashboard");
        then.status(500).json_body(json!({}));
    });

    let client = api_client(&server);
    let err = client.admin_stats().await.unwrap_err();
    assert_eq!(err.status, Some(500));
    assert_eq!(err.error, "Request failed with status 500");
}
