pub mod sqlite_event_repo;
