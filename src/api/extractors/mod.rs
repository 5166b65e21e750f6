pub mod event_args;
pub mod event_id;
