pub mod last_activity;
