//! Cross-component integration tests
//!
//! These tests wire the dispatcher to the in-memory token store and the
//! recording transport, and walk the booking lifecycle end to end without
//! starting a server or talking to FCM.

use std::sync::Arc;

use booking_push_service::booking::{
    BookingEvent, DispatchRequest, EventDetails, EventFields,
};
use booking_push_service::dispatch::{BookingDispatcher, DispatchError};
use booking_push_service::error::AppError;
use booking_push_service::template;
use booking_push_service::token::MemoryTokenStore;
use booking_push_service::transport::MockTransport;

struct TestEnvironment {
    token_store: Arc<MemoryTokenStore>,
    transport: Arc<MockTransport>,
    dispatcher: BookingDispatcher,
}

/// Create a test environment around the memory store and mock transport
fn create_test_environment() -> TestEnvironment {
    let token_store = Arc::new(MemoryTokenStore::new());
    let transport = Arc::new(MockTransport::new());
    let dispatcher = BookingDispatcher::new(token_store.clone(), transport.clone());

    TestEnvironment {
        token_store,
        transport,
        dispatcher,
    }
}

// =============================================================================
// Dispatch scenarios
// =============================================================================

#[tokio::test]
async fn created_notification_reaches_provider_device() {
    let env = create_test_environment();
    env.token_store.insert("p1", "tok1");

    let request = DispatchRequest::new(
        "p1",
        "b100",
        EventDetails::Created {
            seeker_name: "Alice".to_string(),
            service_name: "Haircut".to_string(),
        },
    );
    env.dispatcher.dispatch(request).await.unwrap();

    let sent = env.transport.sent();
    assert_eq!(sent.len(), 1);
    let payload = &sent[0];
    assert_eq!(payload.token.as_str(), "tok1");
    assert_eq!(payload.title, "New Booking Request");
    assert_eq!(payload.body, "Alice has requested a booking for Haircut.");
    assert_eq!(payload.data.event, BookingEvent::Created);
    assert_eq!(payload.data.booking_id, "b100");
}

#[tokio::test]
async fn accepted_without_token_is_not_found_and_never_sends() {
    let env = create_test_environment();

    let request = DispatchRequest::new(
        "s1",
        "b1",
        EventDetails::Accepted {
            provider_name: "Carol".to_string(),
            service_name: "Haircut".to_string(),
        },
    );
    let err = env.dispatcher.dispatch(request).await.unwrap_err();

    assert!(matches!(err, DispatchError::RecipientUnreachable { .. }));
    let boundary: AppError = err.into();
    assert_eq!(boundary.code(), "not-found");
    assert_eq!(env.transport.sent_count(), 0);
}

#[tokio::test]
async fn every_event_type_dispatches_with_its_own_copy() {
    let env = create_test_environment();
    env.token_store.insert("u1", "tok-u1");

    let details = [
        EventDetails::Created {
            seeker_name: "Alice".to_string(),
            service_name: "Haircut".to_string(),
        },
        EventDetails::Confirmed {
            seeker_name: "Alice".to_string(),
            service_name: "Haircut".to_string(),
        },
        EventDetails::Cancelled {
            canceller_name: "Bob".to_string(),
            service_name: "Haircut".to_string(),
            cancelled_by_provider: false,
        },
        EventDetails::Completed {
            provider_name: "Carol".to_string(),
            service_name: "Haircut".to_string(),
        },
        EventDetails::Accepted {
            provider_name: "Carol".to_string(),
            service_name: "Haircut".to_string(),
        },
    ];

    for (i, detail) in details.into_iter().enumerate() {
        let request = DispatchRequest::new("u1", format!("b{i}"), detail);
        env.dispatcher.dispatch(request).await.unwrap();
    }

    let sent = env.transport.sent();
    assert_eq!(sent.len(), 5);

    // Each payload carries its event's tag and the expected rendered copy
    for (payload, event) in sent.iter().zip(BookingEvent::ALL) {
        assert_eq!(payload.data.event, event);
        assert_eq!(payload.title, template::template_for(event).title);
    }

    let stats = env.dispatcher.stats();
    assert_eq!(stats.total_dispatched, 5);
    assert_eq!(stats.total_delivered, 5);
    assert_eq!(stats.total_failed, 0);
}

#[tokio::test]
async fn empty_ids_fail_validation_for_every_event() {
    let env = create_test_environment();
    env.token_store.insert("u1", "tok-u1");

    for event in BookingEvent::ALL {
        let fields = EventFields {
            seeker_name: Some("Alice".to_string()),
            service_name: Some("Haircut".to_string()),
            provider_name: Some("Carol".to_string()),
            canceller_name: Some("Bob".to_string()),
            is_cancelled_by_provider: Some(false),
        };
        let details = EventDetails::from_fields(event, fields).unwrap();

        let err = env
            .dispatcher
            .dispatch(DispatchRequest::new("", "b1", details.clone()))
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::InvalidRequest(_)));

        let err = env
            .dispatcher
            .dispatch(DispatchRequest::new("u1", "", details))
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::InvalidRequest(_)));
    }

    assert_eq!(env.transport.sent_count(), 0);
}

#[tokio::test]
async fn transport_failure_surfaces_as_internal() {
    let env = create_test_environment();
    env.token_store.insert("p1", "tok1");
    env.transport.fail_sends(true);

    let request = DispatchRequest::new(
        "p1",
        "b1",
        EventDetails::Confirmed {
            seeker_name: "Alice".to_string(),
            service_name: "Haircut".to_string(),
        },
    );
    let err = env.dispatcher.dispatch(request).await.unwrap_err();

    assert!(matches!(err, DispatchError::DeliveryFailed));
    let boundary: AppError = err.into();
    assert_eq!(boundary.code(), "internal");

    let stats = env.dispatcher.stats();
    assert_eq!(stats.total_failed, 1);
    assert_eq!(stats.total_delivered, 0);
}

// =============================================================================
// Generic send path
// =============================================================================

#[tokio::test]
async fn unknown_event_tag_is_unsupported() {
    // The generic endpoint parses the tag before anything else runs.
    let err = BookingEvent::from_tag("booking_rescheduled")
        .ok_or_else(|| DispatchError::UnsupportedEventType("booking_rescheduled".to_string()))
        .unwrap_err();

    assert!(matches!(err, DispatchError::UnsupportedEventType(_)));
    let boundary: AppError = err.into();
    assert_eq!(boundary.code(), "internal");
}

#[tokio::test]
async fn generic_fields_missing_display_field_is_invalid() {
    let fields = EventFields {
        service_name: Some("Haircut".to_string()),
        ..Default::default()
    };
    let err = EventDetails::from_fields(BookingEvent::Created, fields).unwrap_err();
    assert!(matches!(err, DispatchError::InvalidRequest(_)));
}

#[tokio::test]
async fn generic_fields_dispatch_end_to_end() {
    let env = create_test_environment();
    env.token_store.insert("s1", "tok-s1");

    let event = BookingEvent::from_tag("booking_cancelled").unwrap();
    let fields = EventFields {
        canceller_name: Some("Bob".to_string()),
        service_name: Some("Massage".to_string()),
        is_cancelled_by_provider: Some(true),
        ..Default::default()
    };
    let details = EventDetails::from_fields(event, fields).unwrap();

    env.dispatcher
        .dispatch(DispatchRequest::new("s1", "b7", details))
        .await
        .unwrap();

    let sent = env.transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body, "Bob has cancelled your Massage booking.");
    assert_eq!(sent[0].data.booking_id, "b7");
}

// =============================================================================
// Payload wire shape
// =============================================================================

#[tokio::test]
async fn dispatched_payload_serializes_to_fcm_message() {
    let env = create_test_environment();
    env.token_store.insert("s9", "tok-s9");

    let request = DispatchRequest::new(
        "s9",
        "b9",
        EventDetails::Completed {
            provider_name: "Carol".to_string(),
            service_name: "Massage".to_string(),
        },
    );
    env.dispatcher.dispatch(request).await.unwrap();

    let message = env.transport.sent()[0].to_message_json();
    let message = &message["message"];
    assert_eq!(message["token"], "tok-s9");
    assert_eq!(message["data"]["type"], "booking_completed");
    assert_eq!(message["data"]["bookingId"], "b9");
    assert_eq!(message["android"]["priority"], "high");
    assert_eq!(
        message["android"]["notification"]["channel_id"],
        "booking_notifications"
    );
}
