//! Typed models for every table the migration log creates.

pub mod prelude;

pub mod assign_call;
pub mod block_detail;
pub mod chat;
pub mod check_user;
pub mod cms;
pub mod country;
pub mod designer;
pub mod email_account;
pub mod email_setting;
pub mod event;
pub mod event_booking;
pub mod event_designer;
pub mod message;
pub mod model_back_stage;
pub mod model_has_permission;
pub mod model_has_role;
pub mod permission;
pub mod project;
pub mod role;
pub mod role_has_permission;
pub mod rsvp;
pub mod rsvp_designer_history;
pub mod seat_plan;
pub mod seat_plan_block;
pub mod setting;
pub mod show;
pub mod template;
pub mod upload_rsvp;
pub mod user;
