//! HTTP notification trigger handlers
//!
//! One endpoint per booking lifecycle event, mirroring the callable
//! operations consumed by the mobile apps, plus a generic send endpoint
//! keyed by event tag.

mod handlers;
mod models;

// Re-export handlers
pub use handlers::{
    booking_accepted, booking_cancelled, booking_completed, booking_confirmed, booking_created,
    send_booking_notification,
};

// Re-export models
pub use models::{
    BookingAcceptedRequest, BookingCancelledRequest, BookingCompletedRequest,
    BookingConfirmedRequest, BookingCreatedRequest, SendBookingNotificationRequest, SendResponse,
};
