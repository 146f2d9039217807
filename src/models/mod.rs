pub mod checkout;
pub mod event;

pub use checkout::{CheckoutRequest, CheckoutSession, SessionStatus};
pub use event::{EventData, EventTicket};
