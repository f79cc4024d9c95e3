//! Inbound triggers that turn external requests into notification
//! dispatches. HTTP is the only trigger today.

pub mod http;

pub use http::{
    booking_accepted, booking_cancelled, booking_completed, booking_confirmed, booking_created,
    send_booking_notification,
};
